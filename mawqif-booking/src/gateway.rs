use crate::request::BookingRequest;
use crate::ticket::Ticket;
use crate::validate::ValidationError;
use crate::wire::BookingRecord;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Booking submission errors.
///
/// Every transport failure collapses into `Server`; the user decides
/// whether to resubmit, nothing retries automatically.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("booking failed: {0}")]
    Server(String),
}

/// Data sink for booking submissions, selected at construction time like
/// [`mawqif_catalog::SiteSource`].
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn submit(&self, request: &BookingRequest) -> Result<Ticket, BookingError>;
}

/// In-memory gateway that echoes requests into plausible tickets.
///
/// `failing()` builds one that always reports a server error, for
/// exercising the failure path.
pub struct FixtureBookingGateway {
    fail: bool,
    calls: AtomicUsize,
}

impl FixtureBookingGateway {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many submissions reached this gateway.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for FixtureBookingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingGateway for FixtureBookingGateway {
    async fn submit(&self, request: &BookingRequest) -> Result<Ticket, BookingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(BookingError::Server("simulated booking failure".to_string()));
        }

        let now = Utc::now();
        let record = BookingRecord {
            id: format!("BK-{}", Uuid::new_v4().simple()),
            site_name: request.site.name.clone(),
            plate_number: request.plate_number.clone(),
            phone_number: request.phone_number.as_str().to_string(),
            booking_from: now,
            booking_to: now + Duration::hours(request.hours as i64),
            total_price: request.total_price,
        };

        Ok(Ticket::assemble(record, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mawqif_catalog::{Site, SiteId};

    fn request() -> BookingRequest {
        let site = Site {
            id: SiteId::from("1"),
            name: "Downtown Parking".to_string(),
            name_ar: "مواقف وسط المدينة".to_string(),
            price_per_hour: 10.0,
            available_slots: 50,
            location: None,
        };
        BookingRequest::new(Some(&site), "1234ABC", "0501234567", Some(3)).unwrap()
    }

    #[tokio::test]
    async fn test_fixture_gateway_echoes_request() {
        let gateway = FixtureBookingGateway::new();
        let ticket = gateway.submit(&request()).await.unwrap();

        assert_eq!(ticket.total_price, 30.0);
        assert_eq!(ticket.hours, 3);
        assert_eq!(ticket.plate_number, "1234ABC");
        assert_eq!(ticket.booking_to - ticket.booking_from, Duration::hours(3));
        assert!(ticket.id.starts_with("BK-"));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_gateway_reports_server_error() {
        let gateway = FixtureBookingGateway::failing();
        let err = gateway.submit(&request()).await.unwrap_err();
        assert!(matches!(err, BookingError::Server(_)));
    }
}
