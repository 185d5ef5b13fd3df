use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum HolidayLabelStyle {
    #[default]
    Japanese,
    English
}

/// National holidays of Japan, serialized with their official Japanese names.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum HolidayName {
    #[serde(rename = "元日")]
    NewYearsDay,
    #[serde(rename = "成人の日")]
    ComingOfAgeDay,
    #[serde(rename = "建国記念の日")]
    NationalFoundationDay,
    #[serde(rename = "天皇誕生日")]
    EmperorsBirthday,
    #[serde(rename = "春分の日")]
    VernalEquinoxDay,
    #[serde(rename = "昭和の日")]
    ShowaDay,
    #[serde(rename = "憲法記念日")]
    ConstitutionMemorialDay,
    #[serde(rename = "みどりの日")]
    GreeneryDay,
    #[serde(rename = "こどもの日")]
    ChildrensDay,
    #[serde(rename = "海の日")]
    MarineDay,
    #[serde(rename = "山の日")]
    MountainDay,
    #[serde(rename = "敬老の日")]
    RespectForTheAgedDay,
    #[serde(rename = "秋分の日")]
    AutumnalEquinoxDay,
    #[serde(rename = "スポーツの日")]
    SportsDay,
    #[serde(rename = "体育の日")]
    HealthSportsDay,
    #[serde(rename = "文化の日")]
    CultureDay,
    #[serde(rename = "勤労感謝の日")]
    LaborThanksgivingDay,
    /// Furikae kyūjitsu: granted when a holiday falls on a Sunday.
    #[serde(rename = "振替休日")]
    SubstituteHoliday,
    /// Kokumin no kyūjitsu: a weekday sandwiched between two holidays.
    #[serde(rename = "国民の休日")]
    NationalHoliday
}

impl HolidayName {
    pub fn japanese_name(&self) -> &'static str {
        match self {
            HolidayName::NewYearsDay => "元日",
            HolidayName::ComingOfAgeDay => "成人の日",
            HolidayName::NationalFoundationDay => "建国記念の日",
            HolidayName::EmperorsBirthday => "天皇誕生日",
            HolidayName::VernalEquinoxDay => "春分の日",
            HolidayName::ShowaDay => "昭和の日",
            HolidayName::ConstitutionMemorialDay => "憲法記念日",
            HolidayName::GreeneryDay => "みどりの日",
            HolidayName::ChildrensDay => "こどもの日",
            HolidayName::MarineDay => "海の日",
            HolidayName::MountainDay => "山の日",
            HolidayName::RespectForTheAgedDay => "敬老の日",
            HolidayName::AutumnalEquinoxDay => "秋分の日",
            HolidayName::SportsDay => "スポーツの日",
            HolidayName::HealthSportsDay => "体育の日",
            HolidayName::CultureDay => "文化の日",
            HolidayName::LaborThanksgivingDay => "勤労感謝の日",
            HolidayName::SubstituteHoliday => "振替休日",
            HolidayName::NationalHoliday => "国民の休日"
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            HolidayName::NewYearsDay => "New Year's Day",
            HolidayName::ComingOfAgeDay => "Coming of Age Day",
            HolidayName::NationalFoundationDay => "National Foundation Day",
            HolidayName::EmperorsBirthday => "Emperor's Birthday",
            HolidayName::VernalEquinoxDay => "Vernal Equinox Day",
            HolidayName::ShowaDay => "Showa Day",
            HolidayName::ConstitutionMemorialDay => "Constitution Memorial Day",
            HolidayName::GreeneryDay => "Greenery Day",
            HolidayName::ChildrensDay => "Children's Day",
            HolidayName::MarineDay => "Marine Day",
            HolidayName::MountainDay => "Mountain Day",
            HolidayName::RespectForTheAgedDay => "Respect for the Aged Day",
            HolidayName::AutumnalEquinoxDay => "Autumnal Equinox Day",
            HolidayName::SportsDay => "Sports Day",
            HolidayName::HealthSportsDay => "Health and Sports Day",
            HolidayName::CultureDay => "Culture Day",
            HolidayName::LaborThanksgivingDay => "Labor Thanksgiving Day",
            HolidayName::SubstituteHoliday => "Substitute Holiday",
            HolidayName::NationalHoliday => "National Holiday"
        }
    }

    pub fn label(&self, style: HolidayLabelStyle) -> &'static str {
        match style {
            HolidayLabelStyle::Japanese => self.japanese_name(),
            HolidayLabelStyle::English => self.english_name()
        }
    }
}

impl fmt::Display for HolidayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.japanese_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_label_matches_japanese_name() {
        let names = [
            HolidayName::NewYearsDay,
            HolidayName::EmperorsBirthday,
            HolidayName::HealthSportsDay,
            HolidayName::SubstituteHoliday,
            HolidayName::NationalHoliday,
        ];
        for name in names {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.japanese_name()));
            let back: HolidayName = serde_json::from_str(&json).unwrap();
            assert_eq!(back, name);
        }
    }

    #[test]
    fn labels_by_style() {
        assert_eq!(HolidayName::CultureDay.label(HolidayLabelStyle::Japanese), "文化の日");
        assert_eq!(HolidayName::CultureDay.label(HolidayLabelStyle::English), "Culture Day");
        assert_eq!(HolidayName::MarineDay.to_string(), "海の日");
    }
}
