use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::recurringholiday::RecurringHoliday;

/// Fixed-point scale of the approximation constants (six decimals).
const SCALE: i64 = 1_000_000;
/// Mean drift of the equinox instant per year, in days.
const DRIFT_PER_YEAR: i64 = 242_194;

pub const FIRST_COMPUTED_YEAR: i32 = 1900;
pub const LAST_COMPUTED_YEAR: i32 = 2099;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum EquinoxType {
    Vernal,
    Autumnal
}

impl EquinoxType {
    pub fn month(&self) -> u32 {
        match self {
            EquinoxType::Vernal => 3,
            EquinoxType::Autumnal => 9
        }
    }

    /// Day-of-month used outside the computed range.
    pub fn default_day(&self) -> u32 {
        match self {
            EquinoxType::Vernal => 21,
            EquinoxType::Autumnal => 23
        }
    }

    /// `(base, leap_reference_year)` of the approximation, base scaled by `SCALE`.
    fn parameters(&self, year: i32) -> (i64, i32) {
        match (self, year <= 1979) {
            (EquinoxType::Vernal, true) => (20_835_700, 1983),
            (EquinoxType::Vernal, false) => (20_843_100, 1980),
            (EquinoxType::Autumnal, true) => (23_258_800, 1983),
            (EquinoxType::Autumnal, false) => (23_248_800, 1980)
        }
    }

    /// Day-of-month of the equinox in Japan Standard Time.
    ///
    /// `floor(base + 0.242194 * (year - 1980) - (year - ref) / 4)` where the
    /// inner division truncates. Years outside 1900..=2099 get `default_day`.
    pub fn day_of_month(&self, year: i32) -> u32 {
        if !(FIRST_COMPUTED_YEAR..=LAST_COMPUTED_YEAR).contains(&year) {
            return self.default_day();
        }

        let (base, leap_reference_year) = self.parameters(year);
        let elapsed = (year - 1980) as i64;
        let leap_correction = ((year - leap_reference_year) / 4) as i64;
        let scaled = base + DRIFT_PER_YEAR * elapsed - SCALE * leap_correction;
        scaled.div_euclid(SCALE) as u32
    }
}

#[derive(Clone)]
pub struct EquinoxHoliday {
    equinox_type: EquinoxType
}

impl EquinoxHoliday {
    pub fn new(equinox_type: EquinoxType) -> EquinoxHoliday {
        EquinoxHoliday { equinox_type }
    }

    pub fn equinox_type(&self) -> EquinoxType {
        self.equinox_type
    }
}

impl RecurringHoliday for EquinoxHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            year,
            self.equinox_type.month(),
            self.equinox_type.day_of_month(year)
        )
    }
}
