use crate::site::{Site, SiteId};
use mawqif_shared::wire::{
    f64_field, id_field, opt_string_field, string_field, u32_field, FieldAliases,
};
use serde_json::Value;

// Accepted wire names per canonical Site field, tried in order:
// PascalCase first, then camelCase, then snake_case.
pub const SITE_ID: FieldAliases = &["Id", "SiteId", "id", "siteId", "site_id"];
pub const SITE_NAME: FieldAliases = &["Name", "SiteName", "name", "siteName", "site_name"];
pub const SITE_NAME_AR: FieldAliases = &["NameAr", "SiteNameAr", "nameAr", "siteNameAr", "name_ar", "site_name_ar"];
pub const PRICE_PER_HOUR: FieldAliases = &["PricePerHour", "pricePerHour", "price_per_hour"];
pub const AVAILABLE_SLOTS: FieldAliases = &["AvailableSlots", "availableSlots", "available_slots"];
pub const LOCATION: FieldAliases = &["Location", "LocationPath", "location", "locationPath", "location_path"];

/// Normalize one raw catalog record into a Site.
///
/// Never fails: absent or mistyped attributes take their defaults (zero for
/// numbers, empty for strings) so an unexpected but well-typed backend
/// shape degrades instead of crashing the catalog fetch.
pub fn site_from_record(record: &Value) -> Site {
    Site {
        id: SiteId(id_field(record, SITE_ID)),
        name: string_field(record, SITE_NAME),
        name_ar: string_field(record, SITE_NAME_AR),
        price_per_hour: f64_field(record, PRICE_PER_HOUR),
        available_slots: u32_field(record, AVAILABLE_SLOTS),
        location: opt_string_field(record, LOCATION),
    }
}
