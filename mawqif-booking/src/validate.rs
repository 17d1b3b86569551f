//! Input validation rules for the booking form.
//!
//! All rules are pure predicates: no logging, no shared state, no I/O.

use serde::{Deserialize, Serialize};

/// Form fields a rule can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Field {
    Site,
    PlateNumber,
    PhoneNumber,
    Hours,
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    Required,
    InvalidFormat,
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field:?}: {kind:?}")]
pub struct ValidationError {
    pub field: Field,
    pub kind: ViolationKind,
}

impl ValidationError {
    pub fn new(field: Field, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

/// Canonical plate form: uppercase, invalid characters stripped, at most 4
/// leading digits then at most 3 letters; anything beyond is dropped.
///
/// Mirrors the live rewriting applied while the user types, so it is
/// idempotent by construction.
pub fn normalize_plate(raw: &str) -> String {
    let mut digits = String::new();
    let mut letters = String::new();

    for ch in raw.chars().flat_map(char::to_uppercase) {
        if ch.is_ascii_digit() {
            // Digits only count while no letter has been typed yet.
            if letters.is_empty() && digits.len() < 4 {
                digits.push(ch);
            }
        } else if ch.is_ascii_uppercase() && letters.len() < 3 {
            letters.push(ch);
        }
    }

    digits + &letters
}

/// Plate rule: stripped and uppercased, the value must already be in
/// canonical digits-then-letters form and non-empty.
pub fn validate_plate(raw: &str) -> Result<(), ViolationKind> {
    let stripped: String = raw
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        .collect();

    if stripped.is_empty() {
        return Err(ViolationKind::Required);
    }
    if stripped != normalize_plate(&stripped) {
        return Err(ViolationKind::InvalidFormat);
    }
    Ok(())
}

/// Phone rule: Saudi mobile numbers only, `05` followed by 8 digits.
pub fn validate_phone(raw: &str) -> Result<(), ViolationKind> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ViolationKind::Required);
    }
    let valid = trimmed.len() == 10
        && trimmed.starts_with("05")
        && trimmed.chars().all(|c| c.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(ViolationKind::InvalidFormat)
    }
}

/// Booking duration in whole hours, 1 through 24.
pub const MIN_HOURS: u32 = 1;
pub const MAX_HOURS: u32 = 24;

pub fn validate_hours(hours: Option<u32>) -> Result<(), ViolationKind> {
    match hours {
        None => Err(ViolationKind::Required),
        Some(h) if (MIN_HOURS..=MAX_HOURS).contains(&h) => Ok(()),
        Some(_) => Err(ViolationKind::OutOfRange),
    }
}
