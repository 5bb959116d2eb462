//! Display formatting for money, counts and percentages.
//!
//! Currency values carry thousands separators and no forced decimal
//! precision: whole-dollar amounts print without cents, fractional amounts
//! keep only the cents digits they need. Ratios use one decimal place and
//! average order values two.

/// Groups an unsigned integer with comma separators: 12500 -> "12,500".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Formats a dollar amount, rounded to the nearest cent, dropping
/// trailing zero cents: 4520.0 -> "$4,520", 3612.5 -> "$3,612.5",
/// 1234.56 -> "$1,234.56".
pub fn money(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let rem = cents % 100;
    if rem == 0 {
        format!("{}${}", sign, group_thousands(whole))
    } else if rem % 10 == 0 {
        format!("{}${}.{}", sign, group_thousands(whole), rem / 10)
    } else {
        format!("{}${}.{:02}", sign, group_thousands(whole), rem)
    }
}

/// Formats a dollar amount with exactly two decimal places.
pub fn money2(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Formats a percentage with one decimal place: 55.55 -> "55.6%".
pub fn pct1(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12500), "12,500");
        assert_eq!(group_thousands(1850000), "1,850,000");
    }

    #[test]
    fn money_drops_zero_cents() {
        assert_eq!(money(4520.0), "$4,520");
        assert_eq!(money(285000.0), "$285,000");
        assert_eq!(money(3612.5), "$3,612.5");
        assert_eq!(money(1234.56), "$1,234.56");
        assert_eq!(money(-75.25), "-$75.25");
    }

    #[test]
    fn money2_always_shows_cents() {
        assert_eq!(money2(115.0), "$115.00");
        assert_eq!(money2(115.273), "$115.27");
        assert_eq!(money2(1850.5), "$1,850.50");
    }

    #[test]
    fn pct1_rounds_to_one_decimal() {
        assert_eq!(pct1(55.5555), "55.6%");
        assert_eq!(pct1(100.0), "100.0%");
    }
}
