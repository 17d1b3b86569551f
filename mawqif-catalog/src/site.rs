use serde::{Deserialize, Serialize};
use std::fmt;

/// Site identifier as seen on the wire.
///
/// The backend has sent ids as JSON numbers and as strings; both normalize
/// to the string form so callers never care which shape arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteId(pub String);

impl SiteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SiteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SiteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A bookable parking location. Immutable once fetched; lives for one
/// catalog fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    /// English display name
    pub name: String,
    /// Arabic display name (empty when the backend omits it)
    pub name_ar: String,
    pub price_per_hour: f64,
    pub available_slots: u32,
    /// Optional location path / integration code
    pub location: Option<String>,
}

impl Site {
    /// Display name for a given language tag, falling back to the English
    /// name when no Arabic one was provided.
    pub fn display_name(&self, lang: &str) -> &str {
        if lang == "ar" && !self.name_ar.is_empty() {
            &self.name_ar
        } else {
            &self.name
        }
    }
}
