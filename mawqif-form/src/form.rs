use mawqif_booking::validate::{normalize_plate, MIN_HOURS};
use mawqif_booking::{BookingGateway, BookingRequest, Ticket, ValidationError};
use mawqif_catalog::{quote, PriceQuote, Site, SiteId, SiteSource};
use std::sync::Arc;

/// Submission lifecycle of the form.
#[derive(Debug)]
pub enum FormPhase {
    Editing,
    Submitting,
    Success(Ticket),
    Failed(String),
}

/// Which fields the user has interacted with; validation messages only
/// surface for touched fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct Touched {
    pub site: bool,
    pub plate_number: bool,
    pub phone_number: bool,
    pub hours: bool,
}

impl Touched {
    fn all() -> Self {
        Self {
            site: true,
            plate_number: true,
            phone_number: true,
            hours: true,
        }
    }
}

/// Orchestrates the booking form: catalog load, live validation, price
/// preview and submission.
///
/// Both data sources are injected at construction time; tests and offline
/// work wire the fixture implementations, production wires `ApiClient`.
pub struct BookingForm {
    catalog: Arc<dyn SiteSource>,
    gateway: Arc<dyn BookingGateway>,
    sites: Vec<Site>,
    banner: Option<String>,
    site_id: Option<SiteId>,
    plate_number: String,
    phone_number: String,
    hours: Option<u32>,
    touched: Touched,
    quote: PriceQuote,
    phase: FormPhase,
}

impl BookingForm {
    pub fn new(catalog: Arc<dyn SiteSource>, gateway: Arc<dyn BookingGateway>) -> Self {
        Self {
            catalog,
            gateway,
            sites: Vec::new(),
            banner: None,
            site_id: None,
            plate_number: String::new(),
            phone_number: String::new(),
            hours: Some(MIN_HOURS),
            touched: Touched::default(),
            quote: PriceQuote::zero(MIN_HOURS),
            phase: FormPhase::Editing,
        }
    }

    /// One catalog fetch per form lifetime, on initialization. Failure
    /// leaves the site list empty and raises the banner; recovery is a
    /// user-initiated reload.
    pub async fn load_sites(&mut self) {
        match self.catalog.fetch_sites().await {
            Ok(sites) => {
                self.sites = sites;
                self.banner = None;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load site catalog");
                self.sites.clear();
                self.banner = Some("Failed to load parking sites. Please try again.".to_string());
            }
        }
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn selected_site(&self) -> Option<&Site> {
        let id = self.site_id.as_ref()?;
        self.sites.iter().find(|site| &site.id == id)
    }

    pub fn select_site(&mut self, id: Option<SiteId>) {
        self.site_id = id;
        self.touched.site = true;
        self.after_edit();
    }

    /// Live plate rewriting: invalid characters are stripped and excess
    /// digits/letters dropped as the user types.
    pub fn set_plate_number(&mut self, raw: &str) {
        self.plate_number = normalize_plate(raw);
        self.touched.plate_number = true;
        self.after_edit();
    }

    pub fn set_phone_number(&mut self, raw: &str) {
        self.phone_number = raw.trim().to_string();
        self.touched.phone_number = true;
        self.after_edit();
    }

    pub fn set_hours(&mut self, hours: Option<u32>) {
        self.hours = hours;
        self.touched.hours = true;
        self.after_edit();
    }

    pub fn plate_number(&self) -> &str {
        &self.plate_number
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn hours(&self) -> Option<u32> {
        self.hours
    }

    pub fn touched(&self) -> Touched {
        self.touched
    }

    /// Current price preview; always in step with the last edit.
    pub fn quote(&self) -> &PriceQuote {
        &self.quote
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Whether the current field values would produce a valid request.
    pub fn is_valid(&self) -> bool {
        self.build_request().is_ok()
    }

    fn build_request(&self) -> Result<BookingRequest, ValidationError> {
        BookingRequest::new(
            self.selected_site(),
            &self.plate_number,
            &self.phone_number,
            self.hours,
        )
    }

    // Every field change recomputes the quote synchronously and, after a
    // failed submission, returns the form to Editing for retry.
    fn after_edit(&mut self) {
        self.quote = quote(self.selected_site(), self.hours.unwrap_or(MIN_HOURS));
        if matches!(self.phase, FormPhase::Failed(_)) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Transition: Editing → Submitting → Success | Failed.
    ///
    /// Ignored while a submission is in flight. An invalid form marks
    /// every field touched and never reaches the gateway.
    pub async fn submit(&mut self) -> &FormPhase {
        if matches!(self.phase, FormPhase::Submitting) {
            return &self.phase;
        }

        let request = match self.build_request() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(%err, "submission blocked by validation");
                self.touched = Touched::all();
                self.phase = FormPhase::Editing;
                return &self.phase;
            }
        };

        self.phase = FormPhase::Submitting;
        match self.gateway.submit(&request).await {
            Ok(ticket) => {
                tracing::info!(ticket = %ticket.id, "booking confirmed");
                self.phase = FormPhase::Success(ticket);
            }
            Err(err) => {
                tracing::warn!(%err, "booking submission failed");
                self.phase = FormPhase::Failed(
                    "An error occurred while processing your booking. Please try again."
                        .to_string(),
                );
            }
        }
        &self.phase
    }

    /// Hand the ticket to the result-display collaborator and leave the
    /// submission flow; the form resets to its pristine state.
    pub fn take_ticket(&mut self) -> Option<Ticket> {
        match std::mem::replace(&mut self.phase, FormPhase::Editing) {
            FormPhase::Success(ticket) => {
                self.site_id = None;
                self.plate_number.clear();
                self.phone_number.clear();
                self.hours = Some(MIN_HOURS);
                self.touched = Touched::default();
                self.quote = PriceQuote::zero(MIN_HOURS);
                Some(ticket)
            }
            other => {
                self.phase = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mawqif_booking::FixtureBookingGateway;
    use mawqif_catalog::FixtureSiteSource;

    async fn loaded_form() -> BookingForm {
        let mut form = BookingForm::new(
            Arc::new(FixtureSiteSource::default()),
            Arc::new(FixtureBookingGateway::new()),
        );
        form.load_sites().await;
        form
    }

    #[tokio::test]
    async fn test_quote_tracks_site_and_hours() {
        let mut form = loaded_form().await;
        assert_eq!(form.quote().total_price, 0.0);

        form.select_site(Some(SiteId::from("1")));
        form.set_hours(Some(3));
        assert_eq!(form.quote().price_per_hour, 10.0);
        assert_eq!(form.quote().total_price, 30.0);

        form.select_site(None);
        assert_eq!(form.quote().total_price, 0.0);
        assert_eq!(form.quote().hours, 3);
    }

    #[tokio::test]
    async fn test_plate_input_is_rewritten_live() {
        let mut form = loaded_form().await;
        form.set_plate_number("123456abcd");
        assert_eq!(form.plate_number(), "1234ABC");
    }

    #[tokio::test]
    async fn test_invalid_submit_marks_all_fields_touched() {
        let mut form = loaded_form().await;
        form.submit().await;

        assert!(matches!(form.phase(), FormPhase::Editing));
        let touched = form.touched();
        assert!(touched.site && touched.plate_number && touched.phone_number && touched.hours);
    }

    #[tokio::test]
    async fn test_take_ticket_resets_the_form() {
        let mut form = loaded_form().await;
        form.select_site(Some(SiteId::from("1")));
        form.set_plate_number("1234ABC");
        form.set_phone_number("0501234567");
        form.set_hours(Some(3));
        form.submit().await;

        let ticket = form.take_ticket().expect("ticket");
        assert_eq!(ticket.total_price, 30.0);
        assert!(matches!(form.phase(), FormPhase::Editing));
        assert_eq!(form.plate_number(), "");
        assert_eq!(form.quote().total_price, 0.0);
        assert!(form.take_ticket().is_none());
    }
}
