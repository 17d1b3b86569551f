use crate::validate::{self, Field, ValidationError, ViolationKind};
use mawqif_catalog::Site;
use mawqif_shared::Masked;

/// A validated booking submission.
///
/// Constructed fresh per attempt through [`BookingRequest::new`], which
/// re-runs every field rule; a request with an unselected site, an invalid
/// plate or phone, or hours outside range cannot exist. Snapshots the
/// selected site so ticket assembly keeps the bilingual name and hourly
/// rate even if the catalog has moved on.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub site: Site,
    pub plate_number: String,
    pub phone_number: Masked<String>,
    pub hours: u32,
    pub total_price: f64,
}

impl BookingRequest {
    pub fn new(
        site: Option<&Site>,
        plate_number: &str,
        phone_number: &str,
        hours: Option<u32>,
    ) -> Result<Self, ValidationError> {
        let site = site.ok_or(ValidationError::new(Field::Site, ViolationKind::Required))?;
        validate::validate_plate(plate_number)
            .map_err(|kind| ValidationError::new(Field::PlateNumber, kind))?;
        validate::validate_phone(phone_number)
            .map_err(|kind| ValidationError::new(Field::PhoneNumber, kind))?;
        validate::validate_hours(hours)
            .map_err(|kind| ValidationError::new(Field::Hours, kind))?;

        let hours = hours.unwrap_or(validate::MIN_HOURS);
        Ok(Self {
            site: site.clone(),
            plate_number: validate::normalize_plate(plate_number),
            phone_number: Masked::from(phone_number),
            hours,
            total_price: site.price_per_hour * hours as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mawqif_catalog::SiteId;

    fn site() -> Site {
        Site {
            id: SiteId::from("1"),
            name: "Downtown Parking".to_string(),
            name_ar: "مواقف وسط المدينة".to_string(),
            price_per_hour: 10.0,
            available_slots: 50,
            location: None,
        }
    }

    #[test]
    fn test_valid_request_carries_computed_total() {
        let req = BookingRequest::new(Some(&site()), "1234ABC", "0501234567", Some(3)).unwrap();
        assert_eq!(req.total_price, 30.0);
        assert_eq!(req.hours, 3);
        assert_eq!(req.plate_number, "1234ABC");
    }

    #[test]
    fn test_unselected_site_is_rejected() {
        let err = BookingRequest::new(None, "1234ABC", "0501234567", Some(3)).unwrap_err();
        assert_eq!(err.field, Field::Site);
        assert_eq!(err.kind, ViolationKind::Required);
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        let s = site();
        let err = BookingRequest::new(Some(&s), "", "0501234567", Some(3)).unwrap_err();
        assert_eq!(err.field, Field::PlateNumber);

        let err = BookingRequest::new(Some(&s), "1234ABC", "12345", Some(3)).unwrap_err();
        assert_eq!(err.field, Field::PhoneNumber);

        let err = BookingRequest::new(Some(&s), "1234ABC", "0501234567", Some(25)).unwrap_err();
        assert_eq!(err.field, Field::Hours);
        assert_eq!(err.kind, ViolationKind::OutOfRange);
    }

    #[test]
    fn test_phone_is_masked_in_debug() {
        let req = BookingRequest::new(Some(&site()), "1234ABC", "0501234567", Some(3)).unwrap();
        let rendered = format!("{:?}", req);
        assert!(!rendered.contains("0501234567"));
    }
}
