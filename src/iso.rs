//! This module implements the ISO component records.
//!
//! The two record types are:
//!   - `IsoDate`, the year/month/day slots of a calendar date
//!   - `IsoTime`, the hour/minute/second slots of a time-of-day plus a
//!     sub-second fraction held in 100-nanosecond ticks
//!
//! Alongside the records live the calendar equations: the Gregorian leap
//! rule, cumulative day-count tables, the conversion between a record and
//! its linear day number, and the reconstruction of a composite instant
//! (ticks since 0001-01-01T00:00:00.0000000) from a validated grammar
//! record.

use crate::{
    error::ErrorMessage,
    parsers::DateTimeRecord,
    CodecError, CodecResult,
};

// ==== Tick constants ====

/// 100-nanosecond ticks per second.
pub(crate) const TICKS_PER_SECOND: i64 = 10_000_000;
pub(crate) const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
pub(crate) const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
pub(crate) const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;

/// The largest fraction expressible at tick resolution (seven decimal
/// digits).
pub(crate) const MAX_FRACTION: u32 = 9_999_999;

pub(crate) const MIN_ISO_YEAR: i32 = 1;
pub(crate) const MAX_ISO_YEAR: i32 = 9999;

// Cumulative day counts at the start of each month, common and leap year.
const DAYS_TO_MONTH_365: [u16; 13] = [
    0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365,
];
const DAYS_TO_MONTH_366: [u16; 13] = [
    0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366,
];

// Day counts of the Gregorian leap cycles.
const DAYS_PER_400_YEARS: i32 = 146_097;
const DAYS_PER_100_YEARS: i32 = 36_524;
const DAYS_PER_4_YEARS: i32 = 1_461;

/// `IsoDate` is the record of a calendar date's year, month, and day slots.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self::new_unchecked(1, 1, 1)
    }
}

impl IsoDate {
    /// Creates a new `IsoDate` without any validation.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `IsoDate`.
    pub(crate) fn new(year: i32, month: u8, day: u8) -> CodecResult<Self> {
        if !(MIN_ISO_YEAR..=MAX_ISO_YEAR).contains(&year) {
            return Err(CodecError::range().with_enum(ErrorMessage::YearOutOfRange));
        }
        if !(1..=12).contains(&month) {
            return Err(CodecError::range().with_enum(ErrorMessage::MonthOutOfRange));
        }
        if !is_valid_iso_day(year, month, day) {
            return Err(CodecError::range().with_enum(ErrorMessage::DayOutOfRange));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns whether this record holds a valid calendar date.
    pub(crate) fn is_valid(&self) -> bool {
        (MIN_ISO_YEAR..=MAX_ISO_YEAR).contains(&self.year)
            && (1..=12).contains(&self.month)
            && is_valid_iso_day(self.year, self.month, self.day)
    }

    /// Returns the linear day number of this date, with 0001-01-01 as day
    /// zero.
    pub(crate) fn to_epoch_days(self) -> i32 {
        let prior_years = self.year - 1;
        let table = if is_leap_year(self.year) {
            &DAYS_TO_MONTH_366
        } else {
            &DAYS_TO_MONTH_365
        };

        prior_years * 365 + prior_years / 4 - prior_years / 100 + prior_years / 400
            + i32::from(table[self.month as usize - 1])
            + i32::from(self.day)
            - 1
    }

    /// Materializes a date record back from a linear day number.
    ///
    /// Inverse of [`IsoDate::to_epoch_days`] over years 1 through 9999.
    pub(crate) fn from_epoch_days(days: i32) -> Self {
        debug_assert!(days >= 0);
        let mut n = days;

        let y400 = n / DAYS_PER_400_YEARS;
        n -= y400 * DAYS_PER_400_YEARS;

        // The last day of a 400-year cycle lands in its fourth century.
        let mut y100 = n / DAYS_PER_100_YEARS;
        if y100 == 4 {
            y100 = 3;
        }
        n -= y100 * DAYS_PER_100_YEARS;

        let y4 = n / DAYS_PER_4_YEARS;
        n -= y4 * DAYS_PER_4_YEARS;

        let mut y1 = n / 365;
        if y1 == 4 {
            y1 = 3;
        }
        n -= y1 * 365;

        let year = y400 * 400 + y100 * 100 + y4 * 4 + y1 + 1;
        let leap = y1 == 3 && (y4 != 24 || y100 == 3);
        let table = if leap {
            &DAYS_TO_MONTH_366
        } else {
            &DAYS_TO_MONTH_365
        };

        // `n` is now the zero-based day of year; the shift gives a month
        // estimate at most one below the answer.
        let mut month = (n >> 5) + 1;
        while i32::from(table[month as usize]) <= n {
            month += 1;
        }
        let day = n - i32::from(table[month as usize - 1]) + 1;

        Self::new_unchecked(year, month as u8, day as u8)
    }
}

/// `IsoTime` is the record of a time-of-day's hour, minute, and second
/// slots plus its sub-second fraction in 100-nanosecond ticks.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Ten-millionths of a second, at most [`MAX_FRACTION`].
    pub fraction: u32,
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, fraction: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            fraction,
        }
    }

    /// Creates a new validated `IsoTime`.
    pub(crate) fn new(hour: u8, minute: u8, second: u8, fraction: u32) -> CodecResult<Self> {
        if !is_valid_time(hour, minute, second) {
            return Err(CodecError::range().with_enum(ErrorMessage::TimeOutOfRange));
        }
        if fraction > MAX_FRACTION {
            return Err(CodecError::range().with_enum(ErrorMessage::FractionOutOfRange));
        }
        Ok(Self::new_unchecked(hour, minute, second, fraction))
    }

    /// Returns whether this record holds a valid time-of-day.
    pub(crate) fn is_valid(&self) -> bool {
        is_valid_time(self.hour, self.minute, self.second) && self.fraction <= MAX_FRACTION
    }

    /// Returns this time-of-day as ticks since midnight.
    pub(crate) fn to_ticks(self) -> i64 {
        i64::from(self.hour) * TICKS_PER_HOUR
            + i64::from(self.minute) * TICKS_PER_MINUTE
            + i64::from(self.second) * TICKS_PER_SECOND
            + i64::from(self.fraction)
    }

    /// Materializes a time record from ticks since midnight, truncating at
    /// tick resolution.
    pub(crate) fn from_ticks(ticks: i64) -> Self {
        debug_assert!((0..TICKS_PER_DAY).contains(&ticks));
        Self::new_unchecked(
            (ticks / TICKS_PER_HOUR) as u8,
            (ticks / TICKS_PER_MINUTE % 60) as u8,
            (ticks / TICKS_PER_SECOND % 60) as u8,
            (ticks % TICKS_PER_SECOND) as u32,
        )
    }
}

// ==== Calendar equations ====

/// Standard Gregorian leap rule: divisible by 4, not by 100 unless also by
/// 400.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Day count of (year, month). Month must be within 1 through 12.
pub(crate) fn iso_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + u8::from(is_leap_year(year)),
        _ => unreachable!("iso_days_in_month panicking is an implementation error."),
    }
}

#[inline]
pub(crate) fn is_valid_iso_day(year: i32, month: u8, day: u8) -> bool {
    (1..=iso_days_in_month(year, month)).contains(&day)
}

#[inline]
fn is_valid_time(hour: u8, minute: u8, second: u8) -> bool {
    hour <= 23 && minute <= 59 && second <= 59
}

// ==== Calendar reconstruction ====

/// Overflow-safe composite-instant factory.
///
/// Validates the semantic ranges of a grammar record, in order, and
/// converts it to ticks since 0001-01-01T00:00:00.0000000. The grammar
/// validator guarantees digit-ness only; every range rule lives here.
pub(crate) fn composite_ticks(record: &DateTimeRecord) -> Option<i64> {
    // Year zero never names a valid calendar year.
    if record.year == 0 {
        return None;
    }
    // Four fixed digits bound the year above.
    debug_assert!(record.year <= MAX_ISO_YEAR);

    if !(1..=12).contains(&record.month) {
        return None;
    }
    if record.day == 0 || record.day > iso_days_in_month(record.year, record.month) {
        return None;
    }
    // Leap seconds are rejected along with every other out-of-range second.
    if !is_valid_time(record.hour, record.minute, record.second) {
        return None;
    }
    debug_assert!(record.fraction <= MAX_FRACTION);

    let date = IsoDate::new_unchecked(record.year, record.month, record.day);
    let seconds = i64::from(record.hour) * 3600
        + i64::from(record.minute) * 60
        + i64::from(record.second);

    Some(
        i64::from(date.to_epoch_days()) * TICKS_PER_DAY
            + seconds * TICKS_PER_SECOND
            + i64::from(record.fraction),
    )
}

// ==== Tests ====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(4));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn days_in_month() {
        assert_eq!(iso_days_in_month(2023, 2), 28);
        assert_eq!(iso_days_in_month(2024, 2), 29);
        assert_eq!(iso_days_in_month(2024, 4), 30);
        assert_eq!(iso_days_in_month(2024, 12), 31);
    }

    #[test]
    fn epoch_day_boundaries() {
        assert_eq!(IsoDate::new_unchecked(1, 1, 1).to_epoch_days(), 0);
        assert_eq!(IsoDate::new_unchecked(1, 12, 31).to_epoch_days(), 364);
        assert_eq!(IsoDate::new_unchecked(2, 1, 1).to_epoch_days(), 365);
        // 1970-01-01 relative to 0001-01-01.
        assert_eq!(IsoDate::new_unchecked(1970, 1, 1).to_epoch_days(), 719_162);
    }

    #[test]
    fn epoch_day_round_trip() {
        let samples = [
            IsoDate::new_unchecked(1, 1, 1),
            IsoDate::new_unchecked(4, 2, 29),
            IsoDate::new_unchecked(100, 2, 28),
            IsoDate::new_unchecked(400, 2, 29),
            IsoDate::new_unchecked(1969, 7, 20),
            IsoDate::new_unchecked(2000, 2, 29),
            IsoDate::new_unchecked(2024, 2, 29),
            IsoDate::new_unchecked(2024, 12, 31),
            IsoDate::new_unchecked(9999, 12, 31),
        ];
        for date in samples {
            assert_eq!(IsoDate::from_epoch_days(date.to_epoch_days()), date);
        }
    }

    #[test]
    fn every_day_of_a_leap_cycle_round_trips() {
        // Years 2000-2003 cover a full small cycle including a leap year.
        for year in 2000..=2003 {
            for month in 1..=12u8 {
                for day in 1..=iso_days_in_month(year, month) {
                    let date = IsoDate::new_unchecked(year, month, day);
                    assert_eq!(IsoDate::from_epoch_days(date.to_epoch_days()), date);
                }
            }
        }
    }

    #[test]
    fn time_tick_round_trip() {
        let samples = [
            IsoTime::new_unchecked(0, 0, 0, 0),
            IsoTime::new_unchecked(0, 0, 0, 1),
            IsoTime::new_unchecked(12, 30, 45, 5_000_000),
            IsoTime::new_unchecked(23, 59, 59, MAX_FRACTION),
        ];
        for time in samples {
            assert_eq!(IsoTime::from_ticks(time.to_ticks()), time);
        }
        assert_eq!(
            IsoTime::new_unchecked(23, 59, 59, MAX_FRACTION).to_ticks(),
            TICKS_PER_DAY - 1
        );
    }

    #[test]
    fn reconstruction_rejects_out_of_range_components() {
        let mut record = DateTimeRecord {
            year: 2024,
            month: 2,
            day: 29,
            ..Default::default()
        };
        assert!(composite_ticks(&record).is_some());

        record.year = 0;
        assert!(composite_ticks(&record).is_none());
        record.year = 2023;
        assert!(composite_ticks(&record).is_none());
        record.year = 2024;

        record.month = 0;
        assert!(composite_ticks(&record).is_none());
        record.month = 13;
        assert!(composite_ticks(&record).is_none());
        record.month = 2;

        record.day = 0;
        assert!(composite_ticks(&record).is_none());
        record.day = 30;
        assert!(composite_ticks(&record).is_none());
        record.day = 29;

        record.hour = 24;
        assert!(composite_ticks(&record).is_none());
        record.hour = 23;
        record.minute = 60;
        assert!(composite_ticks(&record).is_none());
        record.minute = 59;
        record.second = 60;
        assert!(composite_ticks(&record).is_none());
        record.second = 59;
        assert!(composite_ticks(&record).is_some());
    }

    #[test]
    fn reconstruction_composes_date_and_time() {
        let record = DateTimeRecord {
            year: 1,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 1,
            fraction: 5,
            ..Default::default()
        };
        assert_eq!(composite_ticks(&record), Some(TICKS_PER_SECOND + 5));

        let record = DateTimeRecord {
            year: 1,
            month: 1,
            day: 2,
            ..Default::default()
        };
        assert_eq!(composite_ticks(&record), Some(TICKS_PER_DAY));
    }
}
