use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;

/// The `n`-th occurrence of `weekday` in `month` ("Happy Monday" rules).
#[derive(Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        let first_of_month = NaiveDate::from_ymd_opt(year, self.month, 1)?;
        let days_ahead = (self.weekday.num_days_from_monday() + 7
            - first_of_month.weekday().num_days_from_monday()) % 7;
        let first_match = first_of_month.checked_add_days(Days::new(days_ahead as u64))?;
        let date = first_match.checked_add_days(Days::new(7 * (self.n as u64 - 1)))?;

        // a fifth occurrence may spill into the next month
        if date.month() == self.month {
            Some(date)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_out_of_range_arguments() {
        assert!(NthWeekdayHoliday::new(0, 1, Weekday::Mon).is_none());
        assert!(NthWeekdayHoliday::new(1, 0, Weekday::Mon).is_none());
        assert!(NthWeekdayHoliday::new(1, 6, Weekday::Mon).is_none());
    }

    #[test]
    fn second_monday_of_january() {
        let h = NthWeekdayHoliday::new(1, 2, Weekday::Mon).unwrap();
        // Jan 1 2024 is a Monday
        assert_eq!(h.get_holiday(2024), Some(ymd(2024, 1, 8)));
        // Jan 1 2023 is a Sunday
        assert_eq!(h.get_holiday(2023), Some(ymd(2023, 1, 9)));
    }

    #[test]
    fn third_monday_of_july_and_september() {
        let july = NthWeekdayHoliday::new(7, 3, Weekday::Mon).unwrap();
        assert_eq!(july.get_holiday(2023), Some(ymd(2023, 7, 17)));
        let september = NthWeekdayHoliday::new(9, 3, Weekday::Mon).unwrap();
        assert_eq!(september.get_holiday(2015), Some(ymd(2015, 9, 21)));
    }

    #[test]
    fn fifth_occurrence_may_not_exist() {
        let h = NthWeekdayHoliday::new(2, 5, Weekday::Mon).unwrap();
        // February 2023 has only four Mondays
        assert_eq!(h.get_holiday(2023), None);
    }

    #[test]
    fn agrees_with_chrono() {
        let h = NthWeekdayHoliday::new(10, 2, Weekday::Mon).unwrap();
        for year in 1990..2040 {
            assert_eq!(
                h.get_holiday(year),
                NaiveDate::from_weekday_of_month_opt(year, 10, Weekday::Mon, 2)
            );
        }
    }
}
