use crate::config::{CURRENCY_SYMBOL, GST_RATE};
use crate::forms::validation::parse_float;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaymentSummary {
    pub base: f64,
    pub tax: f64,
    pub total: f64,
}

impl PaymentSummary {
    /// Total in paise, as handed to the checkout widget.
    pub fn total_minor_units(&self) -> u64 {
        (self.total * 100.0).round().max(0.0) as u64
    }

    pub fn display_base(&self) -> String {
        format_inr(self.base)
    }

    pub fn display_tax(&self) -> String {
        format_inr(self.tax)
    }

    pub fn display_total(&self) -> String {
        format_inr(self.total)
    }
}

pub fn compute_summary(base: f64) -> PaymentSummary {
    let tax = base * GST_RATE;
    PaymentSummary {
        base,
        tax,
        total: base + tax,
    }
}

/// Summary for whatever is typed in the amount field; unreadable input counts as zero.
pub fn summary_for_input(raw_amount: &str) -> PaymentSummary {
    let base = parse_float(raw_amount).filter(|amount| !amount.is_nan()).unwrap_or(0.0);
    compute_summary(base)
}

pub fn format_inr(amount: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_en_in(amount))
}

const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Indian digit grouping (`12,34,567.891`): the last three integer digits,
/// then pairs. At most three fraction digits, trailing zeros dropped.
pub fn format_en_in(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}∞");
    }

    // past 2^53 there is no fraction and the shortest digits read like the browser's
    let digits = if amount.abs() >= EXACT_INTEGER_LIMIT {
        format!("{}", amount.abs())
    } else {
        format!("{:.3}", amount.abs())
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = group_indian(integer);
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    if grouped == "0" {
        return grouped;
    }
    format!("{sign}{grouped}")
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut pairs: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        pairs.push(&head[start..end]);
        end = start;
    }
    pairs.reverse();
    format!("{},{}", pairs.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousand_rupees_summary() {
        let summary = compute_summary(1000.0);
        assert_eq!(summary.tax, 180.0);
        assert_eq!(summary.total, 1180.0);
        assert_eq!(summary.total_minor_units(), 118_000);
    }

    #[test]
    fn summary_is_unrounded() {
        let summary = compute_summary(999.99);
        assert!((summary.tax - 179.9982).abs() < 1e-9);
        assert!((summary.total - 1179.9882).abs() < 1e-9);
        assert_eq!(summary.total_minor_units(), 117_999);
    }

    #[test]
    fn unreadable_amount_counts_as_zero() {
        assert_eq!(summary_for_input(""), PaymentSummary::default());
        assert_eq!(summary_for_input("abc"), PaymentSummary::default());
        assert_eq!(summary_for_input("250 rupees").base, 250.0);
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_en_in(0.0), "0");
        assert_eq!(format_en_in(180.0), "180");
        assert_eq!(format_en_in(1180.0), "1,180");
        assert_eq!(format_en_in(123_456.5), "1,23,456.5");
        assert_eq!(format_en_in(10_000_000.0), "1,00,00,000");
        assert_eq!(format_en_in(179.9982), "179.998");
        assert_eq!(format_en_in(0.0005), "0.001");
        assert_eq!(format_en_in(-2360.0), "-2,360");
    }

    #[test]
    fn huge_amounts_group_every_digit() {
        assert_eq!(format_en_in(9_007_199_254_740_992.0), "9,00,71,99,25,47,40,992");
        assert_eq!(format_en_in(1e22), "10,00,00,00,00,00,00,00,00,00,000");
        assert_eq!(
            format_en_in(1e39),
            "1,00,00,00,00,00,00,00,00,00,00,00,00,00,00,00,00,00,00,000"
        );
        assert_eq!(format_en_in(-1e22), "-10,00,00,00,00,00,00,00,00,00,000");
        assert_eq!(format_en_in(-0.0001), "0");
    }

    #[test]
    fn absurd_typed_amount_still_displays_digits() {
        let summary = summary_for_input("1e300");
        let base = summary.display_base();
        assert!(base.starts_with("₹10,00,00,"));
        assert!(base.ends_with(",000"));
        assert_eq!(base.chars().filter(|c| *c == '0').count(), 300);
        for display in [summary.display_tax(), summary.display_total()] {
            assert!(display.trim_start_matches('₹').chars().all(|c| c.is_ascii_digit() || c == ','));
        }
    }

    #[test]
    fn rupee_display() {
        let summary = compute_summary(15_000.0);
        assert_eq!(summary.display_base(), "₹15,000");
        assert_eq!(summary.display_tax(), "₹2,700");
        assert_eq!(summary.display_total(), "₹17,700");
    }
}
