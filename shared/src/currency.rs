//! Currency parsing and display.
//!
//! Display follows the `en-IN` locale with no fractional digits: amounts are
//! rounded half away from zero and grouped in lakhs and crores
//! (`₹12,34,567`).

/// Lenient amount parse for form inputs.
///
/// Empty, non-numeric, non-finite and negative input all become `0.0` so a
/// running total is always renderable.
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Strip everything but ASCII digits, e.g. `"₹1,00,000"` → `"100000"`
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn currency_prefix(currency: &str) -> String {
    match currency.to_ascii_uppercase().as_str() {
        "INR" => "₹".to_string(),
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        other => format!("{}\u{a0}", other),
    }
}

/// Group an unsigned digit string the Indian way: last three, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format an amount as a whole-unit currency string in the `en-IN` locale
pub fn format_currency(amount: f64, currency: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        currency_prefix(currency),
        group_indian(&digits)
    )
}

pub fn format_inr(amount: f64) -> String {
    format_currency(amount, "INR")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(2500.0), "₹2,500");
        assert_eq!(format_inr(100000.0), "₹1,00,000");
        assert_eq!(format_inr(1234567.0), "₹12,34,567");
        assert_eq!(format_inr(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_format_drops_fraction_with_rounding() {
        assert_eq!(format_inr(2500.4), "₹2,500");
        assert_eq!(format_inr(2500.5), "₹2,501");
        assert_eq!(format_inr(-2500.5), "-₹2,501");
    }

    #[test]
    fn test_format_non_finite_as_zero() {
        assert_eq!(format_inr(f64::NAN), "₹0");
        assert_eq!(format_inr(f64::INFINITY), "₹0");
    }

    #[test]
    fn test_format_other_currencies() {
        assert_eq!(format_currency(1500.0, "usd"), "$1,500");
        assert_eq!(format_currency(1500.0, "JPY"), "JPY\u{a0}1,500");
    }

    #[test]
    fn test_parse_amount_lenient() {
        assert_eq!(parse_amount("1500"), 1500.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-40"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("₹1,00,000"), "100000");
        assert_eq!(digits_only("Total: none"), "");
    }
}
