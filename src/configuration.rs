use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::time::calendar::holidayname::HolidayLabelStyle;
use crate::time::dayname::DayNameStyle;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration json: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("precomputation range {start_year}..={end_year} is empty")]
    InvalidYearRange {
        start_year: i32,
        end_year: i32,
    },
}

/// Years whose holiday tables are built eagerly at start-up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Precomputation {
    pub apply: bool,
    #[serde(default)]
    pub start_year: i32,
    #[serde(default)]
    pub end_year: i32
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    #[serde(default)]
    day_name_style: DayNameStyle,
    #[serde(default)]
    holiday_label_style: HolidayLabelStyle,
    #[serde(default)]
    precomputation: Precomputation
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn day_name_style(&self) -> DayNameStyle {
        self.day_name_style
    }

    pub fn holiday_label_style(&self) -> HolidayLabelStyle {
        self.holiday_label_style
    }

    pub fn precomputation(&self) -> Precomputation {
        self.precomputation
    }

    pub fn with_day_name_style(mut self, style: DayNameStyle) -> Configuration {
        self.day_name_style = style;
        self
    }

    pub fn with_holiday_label_style(mut self, style: HolidayLabelStyle) -> Configuration {
        self.holiday_label_style = style;
        self
    }

    pub fn with_precomputation(mut self, start_year: i32, end_year: i32) -> Result<Configuration, ConfigurationError> {
        self.precomputation = Precomputation { apply: true, start_year, end_year };
        self.validate()?;
        Ok(self)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let config: Configuration = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let p = self.precomputation;
        if p.apply && p.start_year > p.end_year {
            return Err(ConfigurationError::InvalidYearRange {
                start_year: p.start_year,
                end_year: p.end_year,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let config = Configuration::new();
        assert_eq!(config.day_name_style(), DayNameStyle::English);
        assert_eq!(config.holiday_label_style(), HolidayLabelStyle::Japanese);
        assert!(!config.precomputation().apply);
    }

    #[test]
    fn all_fields_are_optional() {
        let config = Configuration::from_json_str("{}").unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn parses_full_document() {
        let config = Configuration::from_json_str(
            r#"{
                "day_name_style": "Japanese",
                "holiday_label_style": "English",
                "precomputation": { "apply": true, "start_year": 2000, "end_year": 2030 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.day_name_style(), DayNameStyle::Japanese);
        assert_eq!(config.holiday_label_style(), HolidayLabelStyle::English);
        assert_eq!(
            config.precomputation(),
            Precomputation { apply: true, start_year: 2000, end_year: 2030 }
        );
    }

    #[test]
    fn rejects_inverted_year_range() {
        let result = Configuration::from_json_str(
            r#"{ "precomputation": { "apply": true, "start_year": 2030, "end_year": 2000 } }"#,
        );
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidYearRange { start_year: 2030, end_year: 2000 })
        ));
        assert!(Configuration::new().with_precomputation(2, 1).is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = Configuration::from_json_str(r#"{ "locale": "ja" }"#);
        assert!(matches!(result, Err(ConfigurationError::JsonParse(_))));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "day_name_style": "Japanese" }}"#).unwrap();
        let config = Configuration::from_reader(file.path()).unwrap();
        assert_eq!(config.day_name_style(), DayNameStyle::Japanese);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Configuration::from_reader(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigurationError::Io(_))));
    }
}
