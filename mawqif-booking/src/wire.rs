//! Wire-format structs for the booking endpoint.
//!
//! The rename attributes are the compatibility contract with the backend:
//! internal snake_case names map to the exact field names the booking API
//! expects and returns.

use crate::request::BookingRequest;
use chrono::{DateTime, Utc};
use mawqif_shared::Masked;
use serde::{Deserialize, Serialize};

/// POST body for `/booking`.
#[derive(Debug, Serialize)]
pub struct BookingPayload {
    #[serde(rename = "SiteName")]
    pub site_name: String,
    #[serde(rename = "PlateNumber")]
    pub plate_number: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Masked<String>,
    #[serde(rename = "TotalPrice")]
    pub total_price: f64,
    #[serde(rename = "SiteId")]
    pub site_id: String,
    #[serde(rename = "NoOfHours")]
    pub no_of_hours: u32,
}

impl From<&BookingRequest> for BookingPayload {
    fn from(request: &BookingRequest) -> Self {
        Self {
            site_name: request.site.name.clone(),
            plate_number: request.plate_number.clone(),
            phone_number: request.phone_number.clone(),
            total_price: request.total_price,
            site_id: request.site.id.to_string(),
            no_of_hours: request.hours,
        }
    }
}

/// Raw success response from `/booking`.
///
/// Display-only fields default instead of failing the whole submission.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "SiteName", default)]
    pub site_name: String,
    #[serde(rename = "PlateNumber", default)]
    pub plate_number: String,
    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: String,
    #[serde(rename = "BookingFrom")]
    pub booking_from: DateTime<Utc>,
    #[serde(rename = "BookingTo")]
    pub booking_to: DateTime<Utc>,
    #[serde(rename = "TotalPrice", default)]
    pub total_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mawqif_catalog::{Site, SiteId};

    #[test]
    fn test_payload_uses_backend_field_names() {
        let site = Site {
            id: SiteId::from("4"),
            name: "Business District".to_string(),
            name_ar: "مواقف حي الأعمال".to_string(),
            price_per_hour: 12.0,
            available_slots: 75,
            location: None,
        };
        let request =
            BookingRequest::new(Some(&site), "1234ABC", "0501234567", Some(2)).unwrap();
        let body = serde_json::to_value(BookingPayload::from(&request)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "SiteName": "Business District",
                "PlateNumber": "1234ABC",
                "PhoneNumber": "0501234567",
                "TotalPrice": 24.0,
                "SiteId": "4",
                "NoOfHours": 2,
            })
        );
    }

    #[test]
    fn test_record_tolerates_missing_display_fields() {
        let record: BookingRecord = serde_json::from_value(serde_json::json!({
            "Id": "BK-2026-000001",
            "BookingFrom": "2026-08-06T10:00:00Z",
            "BookingTo": "2026-08-06T13:00:00Z",
        }))
        .unwrap();
        assert_eq!(record.site_name, "");
        assert_eq!(record.total_price, 0.0);
    }
}
