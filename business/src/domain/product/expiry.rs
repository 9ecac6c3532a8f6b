use chrono::{DateTime, Days, Local, NaiveDate, Utc};
use regex::Regex;

/// Label rendered when a product has no expiry value.
pub const NOT_INFORMED: &str = "Não informado";

/// Raw expiry value as it arrives from the outside world. Everything
/// date-shaped in the system is normalized through [`parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExpiryInput {
    /// Free text, either `DD/MM/YYYY` or `MM/YY`.
    Text(String),
    /// Spreadsheet day-serial anchored at 1899-12-30 (serial 1 =
    /// 1900-01-01, including the 1900 leap-year artifact).
    Serial(f64),
    /// Timestamp as stored by the document backend.
    Timestamp(DateTime<Utc>),
}

fn spreadsheet_epoch() -> NaiveDate {
    // Serial 1 must land on 1900-01-01.
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

fn parse_text(text: &str) -> Option<NaiveDate> {
    let full = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").ok()?;
    let short = Regex::new(r"^(\d{1,2})/(\d{2})$").ok()?;
    let text = text.trim();

    if let Some(caps) = full.captures(text) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = short.captures(text) {
        let month: u32 = caps[1].parse().ok()?;
        let year: i32 = 2000 + caps[2].parse::<i32>().ok()?;
        // MM/YY means "good through the end of that month", so the
        // normalized day is the month's last day. That makes the
        // month-granularity validity check fall out of `is_future`.
        return last_day_of_month(year, month);
    }

    None
}

fn parse_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    // The fractional part of a serial is the time of day; the calendar
    // day is the integer part.
    let days = serial.trunc();
    if days < 0.0 || days > u64::MAX as f64 {
        return None;
    }
    spreadsheet_epoch().checked_add_days(Days::new(days as u64))
}

/// Normalizes any external expiry representation to a calendar day.
///
/// Returns `None` for malformed input. Callers branch on the option;
/// this function never fails loudly.
pub fn parse(input: &ExpiryInput) -> Option<NaiveDate> {
    match input {
        ExpiryInput::Text(text) => parse_text(text),
        ExpiryInput::Serial(serial) => parse_serial(*serial),
        // The calendar day the user sees, so local time zone.
        ExpiryInput::Timestamp(ts) => Some(ts.with_timezone(&Local).date_naive()),
    }
}

/// True when the date is today or later, at day granularity in the
/// local time zone of the running process.
pub fn is_future(date: NaiveDate) -> bool {
    date >= Local::now().date_naive()
}

/// Well-formed AND not yet expired. An expired date is treated exactly
/// like a malformed one; the UI renders both as invalid.
pub fn is_valid(input: &ExpiryInput) -> bool {
    match parse(input) {
        Some(date) => is_future(date),
        None => false,
    }
}

/// Zero-padded `DD/MM/YYYY`.
pub fn format(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Display form of an optional expiry: formatted date or the fixed
/// "not informed" label.
pub fn format_optional(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format(date),
        None => NOT_INFORMED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, TimeZone};
    use proptest::prelude::*;

    fn text(s: &str) -> ExpiryInput {
        ExpiryInput::Text(s.to_string())
    }

    #[test]
    fn should_parse_full_date() {
        assert_eq!(
            parse(&text("01/01/2025")),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert_eq!(
            parse(&text("9/2/2031")),
            NaiveDate::from_ymd_opt(2031, 2, 9)
        );
    }

    #[test]
    fn should_normalize_short_date_to_end_of_month() {
        assert_eq!(
            parse(&text("02/25")),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
        assert_eq!(
            parse(&text("12/30")),
            NaiveDate::from_ymd_opt(2030, 12, 31)
        );
    }

    #[test]
    fn should_reject_malformed_text() {
        for bad in [
            "",
            "amanhã",
            "2025-01-01",
            "13/25",
            "32/01/2025",
            "01/01/25/",
            "1/1/25",
            "01-01-2025",
        ] {
            assert_eq!(parse(&text(bad)), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn should_anchor_serials_at_spreadsheet_epoch() {
        // Serial 1 = 1900-01-01 by the de-facto spreadsheet convention.
        assert_eq!(
            parse(&ExpiryInput::Serial(1.0)),
            NaiveDate::from_ymd_opt(1900, 1, 1)
        );
        assert_eq!(
            parse(&ExpiryInput::Serial(45658.0)),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
    }

    #[test]
    fn should_truncate_serial_time_of_day() {
        assert_eq!(
            parse(&ExpiryInput::Serial(45658.99)),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
    }

    #[test]
    fn should_reject_degenerate_serials() {
        assert_eq!(parse(&ExpiryInput::Serial(f64::NAN)), None);
        assert_eq!(parse(&ExpiryInput::Serial(f64::INFINITY)), None);
        assert_eq!(parse(&ExpiryInput::Serial(-3.0)), None);
    }

    #[test]
    fn should_match_serial_and_text_for_same_day() {
        assert_eq!(parse(&ExpiryInput::Serial(45658.0)), parse(&text("01/01/2025")));
    }

    #[test]
    fn should_take_calendar_day_from_timestamp() {
        let ts = Utc.with_ymd_and_hms(2031, 6, 15, 12, 0, 0).single().unwrap();
        let parsed = parse(&ExpiryInput::Timestamp(ts)).unwrap();
        // Noon UTC is the same calendar day in any offset within ±12h.
        assert_eq!(parsed, ts.with_timezone(&Local).date_naive());
    }

    #[test]
    fn should_accept_today_and_reject_yesterday() {
        let today = Local::now().date_naive();
        assert!(is_future(today));
        assert!(!is_future(today - Duration::days(1)));
        assert!(is_future(today + Duration::days(1)));
    }

    #[test]
    fn should_validate_current_month_short_date() {
        let today = Local::now().date_naive();
        let current = format!("{:02}/{:02}", today.month(), today.year() % 100);
        assert!(is_valid(&text(&current)));
    }

    #[test]
    fn should_invalidate_expired_and_malformed_alike() {
        assert!(!is_valid(&text("01/01/2001")));
        assert!(!is_valid(&text("not a date")));
    }

    #[test]
    fn should_format_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2031, 2, 9).unwrap();
        assert_eq!(format(date), "09/02/2031");
    }

    #[test]
    fn should_label_missing_expiry() {
        assert_eq!(format_optional(None), NOT_INFORMED);
        let date = NaiveDate::from_ymd_opt(2031, 2, 9).unwrap();
        assert_eq!(format_optional(Some(date)), "09/02/2031");
    }

    proptest! {
        #[test]
        fn format_then_parse_round_trips(
            year in 1990i32..2100,
            month in 1u32..=12,
            day in 1u32..=31,
        ) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                prop_assert_eq!(parse(&text(&format(date))), Some(date));
            }
        }

        #[test]
        fn serial_and_equivalent_text_agree(serial in 367u32..80000) {
            // Serials >= 367 (1901 onwards) have an unambiguous text form.
            let date = parse(&ExpiryInput::Serial(serial as f64)).unwrap();
            prop_assert_eq!(parse(&text(&format(date))), Some(date));
        }
    }
}
