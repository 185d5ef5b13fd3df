use std::sync::Arc;

use chrono::{NaiveDate, Weekday};

use crate::time::calendar::holidayname::HolidayName;
use super::equinoxholiday::{EquinoxHoliday, EquinoxType};
use super::fixeddateholiday::FixedDateHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::recurringholiday::RecurringHoliday;

/// Which construction step a rule belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RuleCategory {
    FixedDate,
    HappyMonday,
    Equinox
}

/// A named [`RecurringHoliday`] that is only in force for a window of years.
#[derive(Clone)]
pub struct HolidayRule {
    name: HolidayName,
    category: RuleCategory,
    first_year: Option<i32>,
    last_year: Option<i32>,
    recurring: Arc<dyn RecurringHoliday>
}

impl HolidayRule {
    pub fn new(
        name: HolidayName,
        category: RuleCategory,
        first_year: Option<i32>,
        last_year: Option<i32>,
        recurring: Arc<dyn RecurringHoliday>
    ) -> HolidayRule {
        HolidayRule { name, category, first_year, last_year, recurring }
    }

    pub fn name(&self) -> HolidayName {
        self.name
    }

    pub fn category(&self) -> RuleCategory {
        self.category
    }

    pub fn in_force(&self, year: i32) -> bool {
        self.first_year.is_none_or(|first| year >= first)
            && self.last_year.is_none_or(|last| year <= last)
    }

    pub fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        if self.in_force(year) {
            self.recurring.get_holiday(year)
        } else {
            None
        }
    }
}

fn fixed(
    name: HolidayName,
    month: u32,
    day: u32,
    first_year: Option<i32>,
    last_year: Option<i32>
) -> Option<HolidayRule> {
    let holiday = FixedDateHoliday::new(month, day)?;
    Some(HolidayRule::new(name, RuleCategory::FixedDate, first_year, last_year, Arc::new(holiday)))
}

fn happy_monday(
    name: HolidayName,
    month: u32,
    n: u8,
    first_year: Option<i32>
) -> Option<HolidayRule> {
    let holiday = NthWeekdayHoliday::new(month, n, Weekday::Mon)?;
    Some(HolidayRule::new(name, RuleCategory::HappyMonday, first_year, None, Arc::new(holiday)))
}

/// A fixed date that a Happy Monday rule replaced from `until + 1` on.
fn pre_happy_monday(
    name: HolidayName,
    month: u32,
    day: u32,
    first_year: Option<i32>,
    until: i32
) -> Option<HolidayRule> {
    let holiday = FixedDateHoliday::new(month, day)?;
    Some(HolidayRule::new(name, RuleCategory::HappyMonday, first_year, Some(until), Arc::new(holiday)))
}

fn equinox(name: HolidayName, equinox_type: EquinoxType) -> HolidayRule {
    HolidayRule::new(
        name,
        RuleCategory::Equinox,
        None,
        None,
        Arc::new(EquinoxHoliday::new(equinox_type))
    )
}

/// Every statutory rule, in the order the year table is filled.
pub fn statutory_rules() -> Vec<HolidayRule> {
    use HolidayName::*;

    let rules = [
        fixed(NewYearsDay, 1, 1, None, None),
        fixed(NationalFoundationDay, 2, 11, None, None),
        fixed(EmperorsBirthday, 2, 23, Some(2020), None),
        fixed(EmperorsBirthday, 12, 23, Some(1989), Some(2018)),
        fixed(ShowaDay, 4, 29, Some(2007), None),
        fixed(GreeneryDay, 4, 29, None, Some(2006)),
        fixed(ConstitutionMemorialDay, 5, 3, None, None),
        fixed(GreeneryDay, 5, 4, Some(2007), None),
        fixed(NationalHoliday, 5, 4, None, Some(2006)),
        fixed(ChildrensDay, 5, 5, None, None),
        fixed(MountainDay, 8, 11, Some(2016), None),
        fixed(CultureDay, 11, 3, None, None),
        fixed(LaborThanksgivingDay, 11, 23, None, None),

        happy_monday(ComingOfAgeDay, 1, 2, Some(2000)),
        pre_happy_monday(ComingOfAgeDay, 1, 15, None, 1999),
        happy_monday(MarineDay, 7, 3, Some(2003)),
        pre_happy_monday(MarineDay, 7, 20, Some(1996), 2002),
        happy_monday(RespectForTheAgedDay, 9, 3, Some(2003)),
        pre_happy_monday(RespectForTheAgedDay, 9, 15, Some(1966), 2002),
        happy_monday(SportsDay, 10, 2, Some(2000)),
        pre_happy_monday(HealthSportsDay, 10, 10, None, 1999),
    ];

    let mut result: Vec<HolidayRule> = rules.into_iter().flatten().collect();
    result.push(equinox(VernalEquinoxDay, EquinoxType::Vernal));
    result.push(equinox(AutumnalEquinoxDay, EquinoxType::Autumnal));
    result
}
