use chrono::NaiveDate;

use crate::time::utility::days_of_month;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        // checked against a leap year; Feb 29 is then skipped in common years
        if day == 0 || day > days_of_month(2000, month) {
            return None;
        }
        Some(FixedDateHoliday { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}
