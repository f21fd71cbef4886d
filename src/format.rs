//! Number formatting for prices, counts and percent changes.
//!
//! Grouping follows the `en-US` convention (`68,500`) and prices are shown in
//! Korean won. Percent changes use the shortest decimal representation of the
//! value, so `4.0` renders as `+4%` and `3.2` as `+3.2%`.

/// Group the digits of an unsigned value with `,` every three places.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format an integer with thousands separators, keeping its sign.
///
/// ```rust
/// use stock_gravity::format::format_thousands;
///
/// assert_eq!(format_thousands(68_500), "68,500");
/// assert_eq!(format_thousands(-1_234_567), "-1,234,567");
/// ```
#[must_use]
pub fn format_thousands(value: i64) -> String {
    let grouped = group_digits(value.unsigned_abs());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a won amount, e.g. `₩68,500` or `-₩1,234`.
#[must_use]
pub fn format_won(value: i64) -> String {
    let grouped = group_digits(value.unsigned_abs());
    if value < 0 {
        format!("-₩{grouped}")
    } else {
        format!("₩{grouped}")
    }
}

/// Format a won amount with an explicit sign, e.g. `+₩405,000`.
#[must_use]
pub fn format_signed_won(value: i64) -> String {
    if value >= 0 {
        format!("+{}", format_won(value))
    } else {
        format_won(value)
    }
}

/// Collapse `-0.0` into `0.0` so it never renders with a minus sign.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Format a percent change with a leading `+` for non-negative values.
///
/// ```rust
/// use stock_gravity::format::format_signed_percent;
///
/// assert_eq!(format_signed_percent(3.2), "+3.2%");
/// assert_eq!(format_signed_percent(-1.5), "-1.5%");
/// assert_eq!(format_signed_percent(4.0), "+4%");
/// ```
#[must_use]
pub fn format_signed_percent(value: f64) -> String {
    let value = normalize_zero(value);
    if value >= 0.0 {
        format!("+{value}%")
    } else {
        format!("{value}%")
    }
}

/// Format a signed percent with a fixed number of decimals, e.g. `+1.03%`.
#[must_use]
pub fn format_percent_fixed(value: f64, decimals: usize) -> String {
    format!("{:+.*}%", decimals, normalize_zero(value))
}

/// Format a non-integer amount with grouping and fixed decimals, e.g.
/// index levels.
///
/// ```rust
/// use stock_gravity::format::format_decimal;
///
/// assert_eq!(format_decimal(2647.35, 2), "2,647.35");
/// assert_eq!(format_decimal(9.8, 1), "9.8");
/// ```
#[must_use]
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let value = normalize_zero(value);
    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };
    let grouped = whole
        .parse::<u64>()
        .map_or_else(|_| whole.to_string(), group_digits);
    let sign = if value < 0.0 { "-" } else { "" };

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Direction of a price or P&L movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    /// Zero or positive change.
    Up,
    /// Negative change.
    Down,
}

impl ChangeDirection {
    /// Classify a change. Zero counts as up.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if normalize_zero(value) >= 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    /// Text color class for this direction.
    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Up => "text-success",
            Self::Down => "text-destructive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(2_790), "2,790");
        assert_eq!(format_thousands(185_000), "185,000");
        assert_eq!(format_thousands(87_300_000), "87,300,000");
        assert_eq!(format_thousands(-45_200), "-45,200");
        assert_eq!(format_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_won_formatting() {
        assert_eq!(format_won(68_500), "₩68,500");
        assert_eq!(format_won(-280_000), "-₩280,000");
        assert_eq!(format_signed_won(405_000), "+₩405,000");
        assert_eq!(format_signed_won(-500_000), "-₩500,000");
        assert_eq!(format_signed_won(0), "+₩0");
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(format_signed_percent(2.8), "+2.8%");
        assert_eq!(format_signed_percent(-0.6), "-0.6%");
        assert_eq!(format_signed_percent(0.0), "+0%");
        assert_eq!(format_signed_percent(-0.0), "+0%");
        assert_eq!(format_signed_percent(12.5), "+12.5%");
    }

    #[test]
    fn test_fixed_percent() {
        assert_eq!(format_percent_fixed(1.026, 2), "+1.03%");
        assert_eq!(format_percent_fixed(-2.4648, 2), "-2.46%");
        assert_eq!(format_percent_fixed(-0.0, 2), "+0.00%");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(format_decimal(782.14, 2), "782.14");
        assert_eq!(format_decimal(12_345.678, 1), "12,345.7");
        assert_eq!(format_decimal(-1_250.5, 2), "-1,250.50");
        assert_eq!(format_decimal(0.2, 0), "0");
    }

    #[test]
    fn test_direction() {
        assert_eq!(ChangeDirection::of(3.2), ChangeDirection::Up);
        assert_eq!(ChangeDirection::of(0.0), ChangeDirection::Up);
        assert_eq!(ChangeDirection::of(-0.1), ChangeDirection::Down);
        assert_eq!(ChangeDirection::Down.text_class(), "text-destructive");
        assert_eq!(ChangeDirection::Up.text_class(), "text-success");
    }
}
