use chrono::NaiveDate;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDateError {
    #[error("empty date string")]
    Empty,

    #[error("'{input}' is not a YYYY-MM-DD calendar date")]
    Malformed {
        input: String,
    },
}

/// Parses the `"YYYY-MM-DD"` interchange format into a structured date.
///
/// Surrounding whitespace is ignored. Impossible dates such as `2023-02-30`
/// are reported as [`ParseDateError::Malformed`].
pub fn parse_iso_date(date_str: &str) -> Result<NaiveDate, ParseDateError> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return Err(ParseDateError::Empty);
    }

    // chrono accepts unpadded fields, the interchange format does not
    let bytes = trimmed.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_shaped {
        return Err(ParseDateError::Malformed { input: trimmed.to_owned() });
    }

    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|_| ParseDateError::Malformed { input: trimmed.to_owned() })
}

/// Zero-padded `"YYYY-MM-DD"`, so lexical and chronological order agree.
pub fn format_iso_date(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_date() {
        let d = parse_iso_date("2024-01-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn trims_whitespace() {
        let d = parse_iso_date("  2023-09-23\n").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2023, 9, 23).unwrap());
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_iso_date(""), Err(ParseDateError::Empty));
        assert_eq!(parse_iso_date("   "), Err(ParseDateError::Empty));
    }

    #[test]
    fn rejects_unpadded_and_impossible_dates() {
        assert!(matches!(parse_iso_date("2024-1-1"), Err(ParseDateError::Malformed { .. })));
        assert!(matches!(parse_iso_date("2023-02-30"), Err(ParseDateError::Malformed { .. })));
        assert!(matches!(parse_iso_date("2023/02/01"), Err(ParseDateError::Malformed { .. })));
        assert!(matches!(parse_iso_date("yesterday"), Err(ParseDateError::Malformed { .. })));
    }

    #[test]
    fn formatting_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(1905, 3, 7).unwrap();
        assert_eq!(format_iso_date(d), "1905-03-07");
    }

    #[test]
    fn error_messages() {
        assert_eq!(ParseDateError::Empty.to_string(), "empty date string");
        let e = ParseDateError::Malformed { input: "x".to_owned() };
        assert_eq!(e.to_string(), "'x' is not a YYYY-MM-DD calendar date");
    }
}
