use crate::request::BookingRequest;
use crate::wire::BookingRecord;
use chrono::{DateTime, Utc};
use mawqif_shared::Masked;
use serde::{Deserialize, Serialize};

/// The confirmed booking shown to the user after a successful submission.
///
/// Read-only once assembled; owned by the result-display step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub site_name: String,
    pub site_name_ar: String,
    pub plate_number: String,
    pub phone_number: Masked<String>,
    pub booking_from: DateTime<Utc>,
    pub booking_to: DateTime<Utc>,
    pub total_price: f64,
    pub hours: u32,
    pub price_per_hour: f64,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Combine the backend's response with the request's site snapshot.
    ///
    /// Display fields degrade instead of failing: the English name falls
    /// back to the response's own `SiteName`, the Arabic name to empty.
    pub fn assemble(record: BookingRecord, request: &BookingRequest) -> Self {
        let site_name = if request.site.name.is_empty() {
            record.site_name
        } else {
            request.site.name.clone()
        };

        Self {
            id: record.id,
            site_name,
            site_name_ar: request.site.name_ar.clone(),
            plate_number: request.plate_number.clone(),
            phone_number: request.phone_number.clone(),
            booking_from: record.booking_from,
            booking_to: record.booking_to,
            total_price: record.total_price,
            hours: request.hours,
            price_per_hour: request.site.price_per_hour,
            created_at: Utc::now(),
        }
    }
}
