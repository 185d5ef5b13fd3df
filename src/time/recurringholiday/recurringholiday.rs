use chrono::{Datelike, NaiveDate};


pub trait RecurringHoliday: Send + Sync {

    fn get_holiday(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()) == Some(*d)
    }
}
