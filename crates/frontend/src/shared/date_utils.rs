use chrono::{DateTime, NaiveDate, Utc};

const EMPTY: &str = "\u{2014}";

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| EMPTY.to_string())
}

pub fn format_datetime_opt(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|d| d.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| EMPTY.to_string())
}

/// Parse the value of an `<input type="date">`.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Value attribute for an `<input type="date">`.
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(d), "15.03.2024");
        assert_eq!(format_date_opt(Some(d)), "15.03.2024");
        assert_eq!(format_date_opt(None), "\u{2014}");
    }

    #[test]
    fn test_date_input_round_trip() {
        let d = parse_date_input("2025-01-07").unwrap();
        assert_eq!(date_input_value(Some(d)), "2025-01-07");
        assert_eq!(parse_date_input(" 2025-01-07 "), Some(d));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("07/01/2025"), None);
        assert_eq!(date_input_value(None), "");
    }
}
