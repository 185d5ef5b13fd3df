use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::time::calendar::holidayname::HolidayName;

/// Holidays of one calendar year, keyed by day-of-year.
///
/// Built through [`YearHolidayMapBuilder`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearHolidayMap {
    year: i32,
    // ordinal0 -> name
    entries: BTreeMap<u32, HolidayName>
}

impl YearHolidayMap {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, d: NaiveDate) -> Option<HolidayName> {
        if d.year() != self.year {
            return None;
        }
        self.entries.get(&d.ordinal0()).copied()
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.get(d).is_some()
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, HolidayName)> + '_ {
        let year = self.year;
        self.entries
            .iter()
            .filter_map(move |(&ordinal0, &name)| {
                NaiveDate::from_yo_opt(year, ordinal0 + 1).map(|d| (d, name))
            })
    }

    pub fn dates_named(&self, name: HolidayName) -> Vec<NaiveDate> {
        self.iter()
            .filter(|&(_, n)| n == name)
            .map(|(d, _)| d)
            .collect()
    }
}

/// Mutable staging area for a [`YearHolidayMap`].
///
/// Dates outside the builder's year are ignored, so a substitute walk that
/// runs past Dec 31 cannot leak into the next year's table.
pub struct YearHolidayMapBuilder {
    year: i32,
    entries: BTreeMap<u32, HolidayName>
}

impl YearHolidayMapBuilder {
    pub fn new(year: i32) -> YearHolidayMapBuilder {
        YearHolidayMapBuilder { year, entries: BTreeMap::new() }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        d.year() == self.year && self.entries.contains_key(&d.ordinal0())
    }

    pub fn get(&self, d: NaiveDate) -> Option<HolidayName> {
        if d.year() != self.year {
            return None;
        }
        self.entries.get(&d.ordinal0()).copied()
    }

    /// Inserts `name` on `d` unless the date already has a holiday.
    /// Returns whether the entry was added.
    pub fn insert_if_absent(&mut self, d: NaiveDate, name: HolidayName) -> bool {
        if d.year() != self.year || self.entries.contains_key(&d.ordinal0()) {
            return false;
        }
        self.entries.insert(d.ordinal0(), name);
        true
    }

    /// Removes every entry named `name`, then places `name` on `d`.
    pub fn replace(&mut self, name: HolidayName, d: NaiveDate) {
        self.entries.retain(|_, n| *n != name);
        if d.year() == self.year {
            self.entries.insert(d.ordinal0(), name);
        }
    }

    /// Ascending copy of the current entries.
    pub fn snapshot(&self) -> Vec<(NaiveDate, HolidayName)> {
        self.entries
            .iter()
            .filter_map(|(&ordinal0, &name)| {
                NaiveDate::from_yo_opt(self.year, ordinal0 + 1).map(|d| (d, name))
            })
            .collect()
    }

    pub fn build(self) -> YearHolidayMap {
        YearHolidayMap { year: self.year, entries: self.entries }
    }
}
