//! Display formatting for money, identifiers and dates

use chrono::{DateTime, Utc};

/// Currency sign used throughout the dashboard
pub const CURRENCY: &str = "₹";

/// Amount with two decimals, e.g. `₹1299.50`
#[must_use]
pub fn money(amount: f64) -> String {
    format!("{CURRENCY}{amount:.2}")
}

/// Optional amount; missing totals read as zero
#[must_use]
pub fn money_or_zero(amount: Option<f64>) -> String {
    money(amount.unwrap_or_default())
}

/// Catalog price as entered, without padding, e.g. `₹1299.5`
#[must_use]
pub fn price(amount: f64) -> String {
    format!("{CURRENCY}{amount}")
}

/// Last 8 characters of a backend identifier
#[must_use]
pub fn short_id(id: &str) -> &str {
    let skip = id.chars().count().saturating_sub(8);
    id.char_indices()
        .nth(skip)
        .and_then(|(start, _)| id.get(start..))
        .unwrap_or_default()
}

/// List-view date, `MM/DD/YYYY`
#[must_use]
pub fn list_date(at: Option<&DateTime<Utc>>) -> String {
    at.map_or_else(|| "N/A".to_string(), |at| at.format("%m/%d/%Y").to_string())
}

/// Detail-view timestamp, e.g. `May 1, 2024, 10:30 AM`
#[must_use]
pub fn detail_date(at: Option<&DateTime<Utc>>) -> String {
    at.map_or_else(
        || "N/A".to_string(),
        |at| at.format("%b %-d, %Y, %I:%M %p").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_money() {
        assert_eq!(money(998.0), "₹998.00");
        assert_eq!(money_or_zero(None), "₹0.00");
        assert_eq!(money_or_zero(Some(12.345)), "₹12.35");
    }

    #[test]
    fn test_price_keeps_entered_precision() {
        assert_eq!(price(100.0), "₹100");
        assert_eq!(price(1299.5), "₹1299.5");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("6650aa0011223344"), "11223344");
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn test_dates() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        assert_eq!(list_date(Some(&at)), "05/01/2024");
        assert_eq!(detail_date(Some(&at)), "May 1, 2024, 10:30 AM");
        assert_eq!(list_date(None), "N/A");
    }

    #[test]
    fn test_afternoon_uses_twelve_hour_clock() {
        let at = Utc.with_ymd_and_hms(2023, 12, 24, 18, 5, 0).unwrap();
        assert_eq!(detail_date(Some(&at)), "Dec 24, 2023, 06:05 PM");
    }
}
