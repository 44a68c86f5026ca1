use crate::error::{EventError, Result};
use chrono::{NaiveDate, NaiveDateTime};

const DATE_TIME_INPUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a user supplied date or date-time. A bare date means midnight.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();

    for format in DATE_TIME_INPUTS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            EventError::InvalidArgument(format!(
                "unrecognised date '{input}' (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM)"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_date_time_formats() {
        let parsed = parse_date_time("2025-12-10T17:00").unwrap();
        assert_eq!(parsed.to_string(), "2025-12-10 17:00:00");

        let parsed = parse_date_time("2025-12-10 17:30:15").unwrap();
        assert_eq!(parsed.second(), 15);

        let parsed = parse_date_time("2025-12-10").unwrap();
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_parse_date_time_rejects_garbage() {
        assert!(matches!(
            parse_date_time("next tuesday"),
            Err(EventError::InvalidArgument(_))
        ));
    }
}
