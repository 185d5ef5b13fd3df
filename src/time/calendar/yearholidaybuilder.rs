use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::time::calendar::holidayname::HolidayName;
use crate::time::calendar::yearholidaymap::{YearHolidayMap, YearHolidayMapBuilder};
use crate::time::recurringholiday::holidayrule::{statutory_rules, HolidayRule, RuleCategory};

/// One-off relocations for the Tokyo Olympics: `(year, holiday, month, day)`.
const OLYMPIC_OVERRIDES: [(i32, HolidayName, u32, u32); 6] = [
    (2020, HolidayName::MarineDay, 7, 23),
    (2020, HolidayName::SportsDay, 7, 24),
    (2020, HolidayName::MountainDay, 8, 10),
    (2021, HolidayName::MarineDay, 7, 22),
    (2021, HolidayName::SportsDay, 7, 23),
    (2021, HolidayName::MountainDay, 8, 8),
];

fn apply_rules(builder: &mut YearHolidayMapBuilder, rules: &[HolidayRule], category: RuleCategory) {
    let year = builder.year();
    for rule in rules.iter().filter(|r| r.category() == category) {
        if let Some(d) = rule.get_holiday(year) {
            builder.insert_if_absent(d, rule.name());
        }
    }
}

/// Step 1: holidays on a fixed month/day.
pub fn apply_fixed_date_holidays(builder: &mut YearHolidayMapBuilder, rules: &[HolidayRule]) {
    apply_rules(builder, rules, RuleCategory::FixedDate);
}

/// Step 2: "Happy Monday" holidays and the fixed dates they replaced.
pub fn apply_happy_monday_holidays(builder: &mut YearHolidayMapBuilder, rules: &[HolidayRule]) {
    apply_rules(builder, rules, RuleCategory::HappyMonday);
}

/// Step 3: vernal and autumnal equinox days.
pub fn apply_equinox_holidays(builder: &mut YearHolidayMapBuilder, rules: &[HolidayRule]) {
    apply_rules(builder, rules, RuleCategory::Equinox);
}

/// Step 4: 2020/2021 relocations. Deletes the regular entry before inserting.
pub fn apply_olympic_overrides(builder: &mut YearHolidayMapBuilder) {
    let year = builder.year();
    for &(override_year, name, month, day) in OLYMPIC_OVERRIDES.iter() {
        if override_year != year {
            continue;
        }
        if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
            builder.replace(name, d);
        }
    }
}

/// Step 5: a Sunday holiday moves to the next date that is not yet a holiday.
///
/// Only holidays present before this step are considered, so a substitute
/// never triggers another substitute.
pub fn apply_substitute_holidays(builder: &mut YearHolidayMapBuilder) {
    let year = builder.year();
    for (d, _) in builder.snapshot() {
        if d.weekday() != Weekday::Sun {
            continue;
        }
        let mut next = d.succ_opt();
        while let Some(candidate) = next {
            if candidate.year() != year || !builder.contains(candidate) {
                break;
            }
            next = candidate.succ_opt();
        }
        if let Some(substitute) = next {
            builder.insert_if_absent(substitute, HolidayName::SubstituteHoliday);
        }
    }
}

/// Step 6: a non-Sunday day between two holidays two days apart.
pub fn apply_national_holidays(builder: &mut YearHolidayMapBuilder) {
    let snapshot = builder.snapshot();
    for pair in snapshot.windows(2) {
        let (first, _) = pair[0];
        let (second, _) = pair[1];
        if (second - first).num_days() != 2 {
            continue;
        }
        if let Some(middle) = first.succ_opt() {
            if middle.weekday() != Weekday::Sun {
                builder.insert_if_absent(middle, HolidayName::NationalHoliday);
            }
        }
    }
}

/// Builds the holiday table of `year`.
pub fn build_year_holiday_map(year: i32) -> YearHolidayMap {
    let rules = statutory_rules();
    let mut builder = YearHolidayMapBuilder::new(year);

    apply_fixed_date_holidays(&mut builder, &rules);
    apply_happy_monday_holidays(&mut builder, &rules);
    apply_equinox_holidays(&mut builder, &rules);
    apply_olympic_overrides(&mut builder);
    let statutory = builder.len();
    apply_substitute_holidays(&mut builder);
    apply_national_holidays(&mut builder);

    debug!(year, statutory, total = builder.len(), "built holiday table");
    builder.build()
}
