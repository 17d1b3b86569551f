use crate::site::Site;
use serde::{Deserialize, Serialize};

/// Transient price preview shown next to the form.
///
/// Recomputed synchronously on every site or hours change; the displayed
/// total never lags the last input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price_per_hour: f64,
    pub hours: u32,
    pub total_price: f64,
}

impl PriceQuote {
    /// Zero quote for the no-site-selected state.
    pub fn zero(hours: u32) -> Self {
        Self {
            price_per_hour: 0.0,
            hours,
            total_price: 0.0,
        }
    }
}

impl Default for PriceQuote {
    fn default() -> Self {
        Self::zero(1)
    }
}

/// Price for booking `hours` at `site`.
///
/// No rounding is applied; the total carries whatever precision the
/// multiplication yields.
pub fn quote(site: Option<&Site>, hours: u32) -> PriceQuote {
    match site {
        Some(site) => PriceQuote {
            price_per_hour: site.price_per_hour,
            hours,
            total_price: site.price_per_hour * hours as f64,
        },
        None => PriceQuote::zero(hours),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteId;

    fn site(price_per_hour: f64) -> Site {
        Site {
            id: SiteId::from("1"),
            name: "Downtown Parking".to_string(),
            name_ar: "مواقف وسط المدينة".to_string(),
            price_per_hour,
            available_slots: 50,
            location: None,
        }
    }

    #[test]
    fn test_total_is_rate_times_hours() {
        let s = site(10.0);
        for hours in 1..=24 {
            let q = quote(Some(&s), hours);
            assert_eq!(q.total_price, 10.0 * hours as f64);
            assert_eq!(q.price_per_hour, 10.0);
            assert_eq!(q.hours, hours);
        }
    }

    #[test]
    fn test_fractional_rate_is_not_rounded() {
        let q = quote(Some(&site(7.5)), 3);
        assert_eq!(q.total_price, 22.5);
    }

    #[test]
    fn test_no_site_quotes_zero() {
        for hours in [1, 12, 24] {
            let q = quote(None, hours);
            assert_eq!(q.price_per_hour, 0.0);
            assert_eq!(q.total_price, 0.0);
            assert_eq!(q.hours, hours);
        }
    }
}
