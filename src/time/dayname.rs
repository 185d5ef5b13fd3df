use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum DayNameStyle {
    #[default]
    English,
    Japanese
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum DayName {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat
}

impl DayName {
    pub fn english_name(&self) -> &'static str {
        match self {
            DayName::Sun => "Sun",
            DayName::Mon => "Mon",
            DayName::Tue => "Tue",
            DayName::Wed => "Wed",
            DayName::Thu => "Thu",
            DayName::Fri => "Fri",
            DayName::Sat => "Sat"
        }
    }

    pub fn japanese_name(&self) -> &'static str {
        match self {
            DayName::Sun => "日",
            DayName::Mon => "月",
            DayName::Tue => "火",
            DayName::Wed => "水",
            DayName::Thu => "木",
            DayName::Fri => "金",
            DayName::Sat => "土"
        }
    }

    pub fn label(&self, style: DayNameStyle) -> &'static str {
        match style {
            DayNameStyle::English => self.english_name(),
            DayNameStyle::Japanese => self.japanese_name()
        }
    }

    pub fn weekday(&self) -> Weekday {
        match self {
            DayName::Sun => Weekday::Sun,
            DayName::Mon => Weekday::Mon,
            DayName::Tue => Weekday::Tue,
            DayName::Wed => Weekday::Wed,
            DayName::Thu => Weekday::Thu,
            DayName::Fri => Weekday::Fri,
            DayName::Sat => Weekday::Sat
        }
    }
}

impl From<Weekday> for DayName {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayName::Sun,
            Weekday::Mon => DayName::Mon,
            Weekday::Tue => DayName::Tue,
            Weekday::Wed => DayName::Wed,
            Weekday::Thu => DayName::Thu,
            Weekday::Fri => DayName::Fri,
            Weekday::Sat => DayName::Sat
        }
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.english_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_by_style() {
        assert_eq!(DayName::Mon.label(DayNameStyle::English), "Mon");
        assert_eq!(DayName::Mon.label(DayNameStyle::Japanese), "月");
        assert_eq!(DayName::Sun.to_string(), "Sun");
    }

    #[test]
    fn weekday_conversion_is_lossless() {
        for d in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat, Weekday::Sun] {
            assert_eq!(DayName::from(d).weekday(), d);
        }
    }

    #[test]
    fn serializes_as_short_english_name() {
        assert_eq!(serde_json::to_string(&DayName::Sat).unwrap(), "\"Sat\"");
    }
}
