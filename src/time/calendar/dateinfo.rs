use chrono::NaiveDate;
use serde::Serialize;

use crate::time::calendar::holidayname::HolidayName;
use crate::time::dayname::DayName;

/// Weekday and holiday classification of one date, as shown to callers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInfo {
    pub day_of_week: Option<DayName>,
    pub holiday: Option<HolidayName>,
    pub is_sunday: bool,
    pub is_saturday: bool,
    pub is_holiday: bool
}

impl DateInfo {
    pub fn new(day_of_week: DayName, holiday: Option<HolidayName>) -> DateInfo {
        DateInfo {
            day_of_week: Some(day_of_week),
            holiday,
            is_sunday: day_of_week == DayName::Sun,
            is_saturday: day_of_week == DayName::Sat,
            is_holiday: holiday.is_some()
        }
    }

    /// The "no information" result for a missing date.
    pub fn empty() -> DateInfo {
        DateInfo::default()
    }

    pub fn is_empty(&self) -> bool {
        self.day_of_week.is_none()
    }

    /// Saturday, Sunday or a holiday.
    pub fn is_day_off(&self) -> bool {
        self.is_saturday || self.is_sunday || self.is_holiday
    }
}

/// A [`DateInfo`] together with the date it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatedInfo {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub info: DateInfo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_follow_weekday_and_holiday() {
        let info = DateInfo::new(DayName::Sun, Some(HolidayName::CultureDay));
        assert!(info.is_sunday);
        assert!(!info.is_saturday);
        assert!(info.is_holiday);
        assert!(info.is_day_off());

        let info = DateInfo::new(DayName::Wed, None);
        assert!(!info.is_day_off());
    }

    #[test]
    fn empty_has_nothing_set() {
        let info = DateInfo::empty();
        assert!(info.is_empty());
        assert_eq!(info.holiday, None);
        assert!(!info.is_sunday && !info.is_saturday && !info.is_holiday);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let info = DateInfo::new(DayName::Mon, Some(HolidayName::NewYearsDay));
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dayOfWeek": "Mon",
                "holiday": "元日",
                "isSunday": false,
                "isSaturday": false,
                "isHoliday": true
            })
        );
    }

    #[test]
    fn dated_info_flattens() {
        let dated = DatedInfo {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            info: DateInfo::new(DayName::Mon, Some(HolidayName::NewYearsDay)),
        };
        let json = serde_json::to_value(dated).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["holiday"], "元日");
    }
}
