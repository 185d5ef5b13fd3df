use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::configuration::Configuration;
use crate::time::calendar::cachebackend::{RwLockBackend, YearCacheBackend};
use crate::time::calendar::dateinfo::{DateInfo, DatedInfo};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayname::HolidayName;
use crate::time::calendar::yearholidaybuilder::build_year_holiday_map;
use crate::time::calendar::yearholidaymap::YearHolidayMap;
use crate::time::calendardate::{parse_iso_date, ParseDateError};
use crate::time::dayname::DayName;
use crate::time::rangeofdates::RangeOfDates;

/// Japanese national holiday calendar.
///
/// Holiday tables are built lazily per year and memoized in the backend `B`
/// owned by this instance. Use [`RefCellBackend`] for single-threaded
/// callers and the default [`RwLockBackend`] when the calendar is shared.
///
/// Equinox days are computed for 1900..=2099; other years fall back to
/// Mar 21 / Sep 23.
///
/// [`RefCellBackend`]: crate::time::calendar::cachebackend::RefCellBackend
pub struct JapanHolidayCalendar<B: YearCacheBackend = RwLockBackend> {
    cache: B
}

impl JapanHolidayCalendar<RwLockBackend> {
    pub fn new() -> Self {
        JapanHolidayCalendar { cache: RwLockBackend::new() }
    }

    /// A calendar whose cache is warmed as the configuration asks.
    pub fn from_configuration(config: &Configuration) -> Self {
        let calendar = JapanHolidayCalendar::new();
        let precomputation = config.precomputation();
        if precomputation.apply {
            calendar.precompute(precomputation.start_year, precomputation.end_year);
        }
        calendar
    }
}

impl Default for JapanHolidayCalendar<RwLockBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: YearCacheBackend> JapanHolidayCalendar<B> {
    pub fn with_backend(cache: B) -> Self {
        JapanHolidayCalendar { cache }
    }

    pub fn year_holidays(&self, year: i32) -> Arc<YearHolidayMap> {
        self.cache.get_or_compute(year, || build_year_holiday_map(year))
    }

    pub fn precompute(&self, start_year: i32, end_year: i32) {
        for year in start_year..=end_year {
            self.year_holidays(year);
        }
        debug!(start_year, end_year, cached = self.cache.cached_years(), "precomputed holiday tables");
    }

    pub fn cached_years(&self) -> usize {
        self.cache.cached_years()
    }

    pub fn day_of_week(&self, d: NaiveDate) -> DayName {
        DayName::from(d.weekday())
    }

    pub fn holiday_name(&self, d: NaiveDate) -> Option<HolidayName> {
        self.year_holidays(d.year()).get(d)
    }

    pub fn date_info(&self, d: NaiveDate) -> DateInfo {
        DateInfo::new(self.day_of_week(d), self.holiday_name(d))
    }

    pub fn day_of_week_str(&self, date_str: &str) -> Option<DayName> {
        self.parse_or_log(date_str).map(|d| self.day_of_week(d))
    }

    pub fn holiday_name_str(&self, date_str: &str) -> Option<HolidayName> {
        self.parse_or_log(date_str).and_then(|d| self.holiday_name(d))
    }

    /// [`date_info`](Self::date_info) over the `"YYYY-MM-DD"` contract.
    ///
    /// Empty or malformed input yields [`DateInfo::empty`].
    pub fn date_info_str(&self, date_str: &str) -> DateInfo {
        self.parse_or_log(date_str)
            .map(|d| self.date_info(d))
            .unwrap_or_else(DateInfo::empty)
    }

    /// Holidays in `[start, end]` (either order), ascending.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, HolidayName)> {
        let range = RangeOfDates::new(start, end);
        range
            .years()
            .flat_map(|year| {
                self.year_holidays(year)
                    .iter()
                    .filter(|(d, _)| range.contain(*d))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// A [`DatedInfo`] for every day in `[start, end]`.
    pub fn date_infos_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<DatedInfo> {
        RangeOfDates::new(start, end)
            .iter()
            .map(|date| DatedInfo { date, info: self.date_info(date) })
            .collect()
    }

    fn parse_or_log(&self, date_str: &str) -> Option<NaiveDate> {
        match parse_iso_date(date_str) {
            Ok(d) => Some(d),
            Err(ParseDateError::Empty) => None,
            Err(error) => {
                warn!(%error, "ignoring malformed date");
                None
            }
        }
    }
}

impl<B: YearCacheBackend + Send + Sync> HolidayCalendar for JapanHolidayCalendar<B> {
    fn holiday_name(&self, d: NaiveDate) -> Option<HolidayName> {
        self.year_holidays(d.year()).get(d)
    }

    fn get_holiday_set(&self, year: i32) -> BTreeSet<NaiveDate> {
        self.year_holidays(year).iter().map(|(d, _)| d).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::cachebackend::RefCellBackend;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn tables_are_memoized_per_instance() {
        let calendar = JapanHolidayCalendar::new();
        let a = calendar.year_holidays(2024);
        let b = calendar.year_holidays(2024);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calendar.cached_years(), 1);

        let other = JapanHolidayCalendar::new();
        assert_eq!(other.cached_years(), 0);
    }

    #[test]
    fn refcell_backend_gives_same_answers() {
        let shared = JapanHolidayCalendar::new();
        let local = JapanHolidayCalendar::with_backend(RefCellBackend::new());
        for year in [1965, 1999, 2019, 2020, 2021, 2024] {
            assert_eq!(*shared.year_holidays(year), *local.year_holidays(year));
        }
    }

    #[test]
    fn precompute_warms_the_cache() {
        let calendar = JapanHolidayCalendar::new();
        calendar.precompute(2000, 2009);
        assert_eq!(calendar.cached_years(), 10);
    }

    #[test]
    fn from_configuration_applies_precomputation() {
        let config = Configuration::new().with_precomputation(2020, 2022).unwrap();
        let calendar = JapanHolidayCalendar::from_configuration(&config);
        assert_eq!(calendar.cached_years(), 3);
        let calendar = JapanHolidayCalendar::from_configuration(&Configuration::new());
        assert_eq!(calendar.cached_years(), 0);
    }

    #[test]
    fn string_api() {
        let calendar = JapanHolidayCalendar::new();
        assert_eq!(calendar.day_of_week_str("2024-01-01"), Some(DayName::Mon));
        assert_eq!(calendar.holiday_name_str("2024-01-01"), Some(HolidayName::NewYearsDay));
        assert_eq!(calendar.holiday_name_str("2024-01-02"), None);
        assert_eq!(calendar.day_of_week_str(""), None);
        assert_eq!(calendar.date_info_str("2024-13-01"), DateInfo::empty());
    }

    #[test]
    fn holidays_between_spans_years() {
        let calendar = JapanHolidayCalendar::new();
        let holidays = calendar.holidays_between(ymd(2024, 1, 1), ymd(2023, 12, 20));
        assert_eq!(holidays, vec![(ymd(2024, 1, 1), HolidayName::NewYearsDay)]);

        let golden_week = calendar.holidays_between(ymd(2024, 4, 27), ymd(2024, 5, 6));
        assert_eq!(golden_week.len(), 5);
    }

    #[test]
    fn date_infos_between_covers_every_day() {
        let calendar = JapanHolidayCalendar::new();
        let infos = calendar.date_infos_between(ymd(2024, 11, 2), ymd(2024, 11, 4));
        assert_eq!(infos.len(), 3);
        assert!(infos[0].info.is_saturday);
        assert_eq!(infos[1].info.holiday, Some(HolidayName::CultureDay));
        assert_eq!(infos[2].info.holiday, Some(HolidayName::SubstituteHoliday));
    }

    #[test]
    fn business_days_skip_weekends_and_holidays() {
        let calendar = JapanHolidayCalendar::new();
        // Fri May 2 2024 -> Sat, Sun, Mon holiday, Tue
        assert_eq!(calendar.next_business_day(ymd(2024, 5, 2)), Some(ymd(2024, 5, 7)));
        assert_eq!(calendar.previous_business_day(ymd(2024, 5, 7)), Some(ymd(2024, 5, 2)));
        assert_eq!(calendar.shift_n_business_day(ymd(2024, 5, 2), 0), Some(ymd(2024, 5, 2)));
        assert!(!calendar.is_business_day(ymd(2024, 11, 4)));
        assert!(calendar.is_business_day(ymd(2024, 11, 5)));
        assert_eq!(calendar.get_holiday_set(2024).len(), 21);
    }
}
