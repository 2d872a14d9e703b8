//! Display formatting for times, money and dates.
//!
//! ```rust
//! use universe::libs::formatter::{format_clock, format_money};
//!
//! assert_eq!(format_clock(25 * 60), "25:00");
//! assert_eq!(format_money(-12.5), "-$12.50");
//! ```

use chrono::{NaiveDate, NaiveTime};

/// Seconds as `MM:SS`; minutes are not wrapped into hours.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Amount with an explicit sign, as shown in transaction lists.
pub fn format_signed_money(amount: f64) -> String {
    if amount < 0.0 {
        format_money(amount)
    } else {
        format!("+{}", format_money(amount))
    }
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

pub fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

/// `HH:MM-HH:MM`, `HH:MM` or nothing, depending on which ends are known.
pub fn format_time_range(start: Option<NaiveTime>, end: Option<NaiveTime>) -> String {
    match (start, end) {
        (Some(_), Some(_)) => format!("{}-{}", format_time(start), format_time(end)),
        (Some(_), None) => format_time(start),
        (None, Some(_)) => format!("-{}", format_time(end)),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(61 * 60 + 5), "61:05");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(60.0), "$60.00");
        assert_eq!(format_signed_money(4.5), "+$4.50");
        assert_eq!(format_signed_money(-4.5), "-$4.50");
    }

    #[test]
    fn test_format_time_range() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0);
        let ten = NaiveTime::from_hms_opt(10, 30, 0);
        assert_eq!(format_time_range(nine, ten), "09:00-10:30");
        assert_eq!(format_time_range(nine, None), "09:00");
        assert_eq!(format_time_range(None, None), "");
    }
}
