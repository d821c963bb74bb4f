//! This module implements the strict ISO 8601 recognizers.
//!
//! Two decode paths live here. `parse_date_time` validates a complete
//! extended calendar date, optionally followed by a time-of-day and a zone
//! designator, at fixed byte offsets and produces a [`DateTimeRecord`].
//! `parse_time_of_day` recognizes the narrower time-only dialect and
//! produces a tick count directly.
//!
//! Both paths read raw bytes, never allocate, and reject on the first
//! malformed byte with no backtracking. Semantic range checks (month, day,
//! hour bounds and so on) are deferred to calendar reconstruction in
//! [`crate::iso`]; the grammar here checks digit-ness and separator
//! positions only.

use crate::{
    iso::{TICKS_PER_DAY, TICKS_PER_SECOND},
    Sign, DATE_FORMAT_LENGTH, TIME_FORMAT_MAX_LENGTH, TIME_FORMAT_MIN_LENGTH,
};

// Grammar token bytes.
const HYPHEN: u8 = b'-';
const PLUS: u8 = b'+';
const COLON: u8 = b':';
const PERIOD: u8 = b'.';
const TIME_PREFIX: u8 = b'T';
const UTC_DESIGNATOR: u8 = b'Z';

/// The maximum number of fraction digits the date/time grammar consumes.
const MAX_FRACTION_PARSE_DIGITS: usize = 16;

/// Fraction fields normalize to exactly this many decimal digits.
const FRACTION_DIGITS: usize = 7;

/// Internal rejection taxonomy.
///
/// Used for control flow only; public entry points collapse every variant
/// into a single format-rejection error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reject {
    Length,
    Grammar,
    Range,
    TrailingData,
}

/// The zone-designator token recognized at the end of a date/time token.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZoneDesignator {
    #[default]
    None,
    Utc,
    Offset(Sign),
}

/// Transient component record populated by the grammar validator.
///
/// Created fully defaulted per decode attempt and discarded once a value is
/// produced; it never escapes a decode call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateTimeRecord {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
    /// Set when the token ends after `YYYY-MM-DD`.
    pub(crate) calendar_date_only: bool,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    /// Ten-millionths of a second, zero-padded to full width once any
    /// fractional digit has been read.
    pub(crate) fraction: u32,
    // The offset fields are populated and validated but never applied to
    // the resulting value; plain types carry no zone concept.
    #[allow(dead_code)]
    pub(crate) offset_hours: u8,
    #[allow(dead_code)]
    pub(crate) offset_minutes: u8,
    #[allow(dead_code)]
    pub(crate) designator: ZoneDesignator,
}

// ==== Byte classification ====

/// Inclusive-range test via a single unsigned comparison.
#[inline]
pub(crate) const fn is_in_range_inclusive(value: usize, lower: usize, upper: usize) -> bool {
    value.wrapping_sub(lower) <= upper.wrapping_sub(lower)
}

#[inline]
const fn is_ascii_digit(byte: u8) -> bool {
    byte.wrapping_sub(b'0') <= 9
}

/// Reads a zero-padded two-digit field.
#[inline]
fn two_digits(hi: u8, lo: u8) -> Option<u8> {
    let d1 = hi.wrapping_sub(b'0');
    let d2 = lo.wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

// ==== Date / date-time grammar ====

/// ISO 8601-1:2019 date and date/time recognizer.
///
/// Accepts the complete extended representations only, at fixed byte
/// offsets:
///
/// ```text
/// YYYY-MM-DD
/// YYYY-MM-DDThh:mm
/// YYYY-MM-DDThh:mm:ss
/// YYYY-MM-DDThh:mm:ss.s{1,16}
/// ```
///
/// each optionally terminated by `Z` or a `+hh`/`-hh`/`+hh:mm`/`-hh:mm`
/// offset designator. Reduced-precision forms, the basic (separator-free)
/// format, and embedded whitespace are all rejections.
pub(crate) fn parse_date_time(source: &[u8]) -> Result<DateTimeRecord, Reject> {
    if source.len() < DATE_FORMAT_LENGTH {
        return Err(Reject::Length);
    }

    let mut record = DateTimeRecord::default();

    // [0:4] four-digit year. Calendar validity is deferred to
    // reconstruction; only digit-ness is enforced here.
    let d1 = source[0].wrapping_sub(b'0');
    let d2 = source[1].wrapping_sub(b'0');
    let d3 = source[2].wrapping_sub(b'0');
    let d4 = source[3].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 || d3 > 9 || d4 > 9 {
        return Err(Reject::Grammar);
    }
    record.year = i32::from(d1) * 1000 + i32::from(d2) * 100 + i32::from(d3) * 10 + i32::from(d4);

    if source[4] != HYPHEN {
        return Err(Reject::Grammar);
    }
    record.month = two_digits(source[5], source[6]).ok_or(Reject::Grammar)?;
    if source[7] != HYPHEN {
        return Err(Reject::Grammar);
    }
    record.day = two_digits(source[8], source[9]).ok_or(Reject::Grammar)?;

    if source.len() == DATE_FORMAT_LENGTH {
        record.calendar_date_only = true;
        return Ok(record);
    }

    // A time-of-day tail requires at least "Thh:mm".
    if source.len() < 16 {
        return Err(Reject::Length);
    }
    if source[10] != TIME_PREFIX || source[13] != COLON {
        return Err(Reject::Grammar);
    }
    record.hour = two_digits(source[11], source[12]).ok_or(Reject::Grammar)?;
    record.minute = two_digits(source[14], source[15]).ok_or(Reject::Grammar)?;

    if source.len() == 16 {
        return Ok(record);
    }

    // Either a zone designator or the seconds separator follows the
    // minutes.
    match source[16] {
        UTC_DESIGNATOR => {
            record.designator = ZoneDesignator::Utc;
            return if source.len() == 17 {
                Ok(record)
            } else {
                Err(Reject::TrailingData)
            };
        }
        PLUS => {
            record.designator = ZoneDesignator::Offset(Sign::Positive);
            parse_offset(&mut record, &source[17..])?;
            return Ok(record);
        }
        HYPHEN => {
            record.designator = ZoneDesignator::Offset(Sign::Negative);
            parse_offset(&mut record, &source[17..])?;
            return Ok(record);
        }
        COLON => {}
        _ => return Err(Reject::Grammar),
    }

    if source.len() < 19 {
        return Err(Reject::Length);
    }
    record.second = two_digits(source[17], source[18]).ok_or(Reject::Grammar)?;

    if source.len() == 19 {
        return Ok(record);
    }

    // Either a zone designator or the fraction separator follows the
    // seconds.
    match source[19] {
        UTC_DESIGNATOR => {
            record.designator = ZoneDesignator::Utc;
            return if source.len() == 20 {
                Ok(record)
            } else {
                Err(Reject::TrailingData)
            };
        }
        PLUS => {
            record.designator = ZoneDesignator::Offset(Sign::Positive);
            parse_offset(&mut record, &source[20..])?;
            return Ok(record);
        }
        HYPHEN => {
            record.designator = ZoneDesignator::Offset(Sign::Negative);
            parse_offset(&mut record, &source[20..])?;
            return Ok(record);
        }
        PERIOD => {}
        _ => return Err(Reject::Grammar),
    }

    // A fraction field needs at least one digit.
    if source.len() < 21 {
        return Err(Reject::Length);
    }

    let mut index = 20;
    let mut digits_read = 0;
    let scan_end = source.len().min(20 + MAX_FRACTION_PARSE_DIGITS);
    while index < scan_end {
        let digit = source[index].wrapping_sub(b'0');
        if digit > 9 {
            break;
        }
        // Only the first seven digits contribute at tick resolution.
        if digits_read < FRACTION_DIGITS {
            record.fraction = record.fraction * 10 + u32::from(digit);
            digits_read += 1;
        }
        index += 1;
    }
    if digits_read == 0 {
        return Err(Reject::Grammar);
    }
    while digits_read < FRACTION_DIGITS {
        record.fraction *= 10;
        digits_read += 1;
    }

    if index == source.len() {
        return Ok(record);
    }

    // Only a zone designator may follow the fraction.
    let current = source[index];
    index += 1;
    match current {
        UTC_DESIGNATOR => {
            record.designator = ZoneDesignator::Utc;
            if index == source.len() {
                Ok(record)
            } else {
                Err(Reject::TrailingData)
            }
        }
        PLUS => {
            record.designator = ZoneDesignator::Offset(Sign::Positive);
            parse_offset(&mut record, &source[index..])?;
            Ok(record)
        }
        HYPHEN => {
            record.designator = ZoneDesignator::Offset(Sign::Negative);
            parse_offset(&mut record, &source[index..])?;
            Ok(record)
        }
        _ => Err(Reject::Grammar),
    }
}

/// Parses a zone offset whose sign was already consumed.
///
/// The remainder must be exactly `hh` or `hh:mm`; any other shape is a
/// rejection.
fn parse_offset(record: &mut DateTimeRecord, offset: &[u8]) -> Result<(), Reject> {
    if offset.len() < 2 {
        return Err(Reject::Length);
    }
    record.offset_hours = two_digits(offset[0], offset[1]).ok_or(Reject::Grammar)?;

    if offset.len() == 2 {
        // Hours-only offset.
        return Ok(());
    }

    if offset.len() != 5 || offset[2] != COLON {
        return Err(Reject::Grammar);
    }
    record.offset_minutes = two_digits(offset[3], offset[4]).ok_or(Reject::Grammar)?;
    Ok(())
}

// ==== Time-of-day dialect ====

/// Strict time-of-day recognizer.
///
/// The time-only dialect is narrower than a general duration grammar: the
/// token must start with a digit (no leading whitespace or sign) and must
/// reach a `:` before any `.` (no bare day counts). The remainder is
/// handed to the constant-format time-span scanner, which must consume the
/// entire token, and the resulting duration must fit within a single day.
///
/// Returns the time-of-day as ticks since midnight.
pub(crate) fn parse_time_of_day(source: &[u8]) -> Result<i64, Reject> {
    if !is_in_range_inclusive(source.len(), TIME_FORMAT_MIN_LENGTH, TIME_FORMAT_MAX_LENGTH) {
        return Err(Reject::Length);
    }

    if !is_ascii_digit(source[0]) {
        return Err(Reject::Grammar);
    }
    let Some(first_separator) = source.iter().position(|&b| b == PERIOD || b == COLON) else {
        return Err(Reject::Grammar);
    };
    if source[first_separator] == PERIOD {
        return Err(Reject::Grammar);
    }

    let (ticks, consumed) = scan_time_span(source).ok_or(Reject::Grammar)?;
    if consumed != source.len() {
        return Err(Reject::TrailingData);
    }
    if !(0..TICKS_PER_DAY).contains(&ticks) {
        return Err(Reject::Range);
    }
    Ok(ticks)
}

/// Constant-format time-span scanner: `h[h]:mm:ss[.fffffff]`.
///
/// Hours may be one or two digits; minutes and seconds are exactly two
/// digits and at most 59; a fraction carries one to seven digits. Returns
/// the tick count and the number of bytes consumed. Scanning stops at the
/// first byte that cannot extend the form, leaving trailing-data detection
/// to the caller.
fn scan_time_span(source: &[u8]) -> Option<(i64, usize)> {
    let first = source.first()?.wrapping_sub(b'0');
    if first > 9 {
        return None;
    }
    let mut hours = u32::from(first);
    let mut index = 1;
    if let Some(&byte) = source.get(index) {
        let digit = byte.wrapping_sub(b'0');
        if digit <= 9 {
            hours = hours * 10 + u32::from(digit);
            index += 1;
        }
    }

    if *source.get(index)? != COLON {
        return None;
    }
    index += 1;
    let minutes = two_digits(*source.get(index)?, *source.get(index + 1)?)?;
    if minutes > 59 {
        return None;
    }
    index += 2;

    if *source.get(index)? != COLON {
        return None;
    }
    index += 1;
    let seconds = two_digits(*source.get(index)?, *source.get(index + 1)?)?;
    if seconds > 59 {
        return None;
    }
    index += 2;

    let mut ticks = (i64::from(hours) * 3600 + i64::from(minutes) * 60 + i64::from(seconds))
        * TICKS_PER_SECOND;

    if source.get(index) == Some(&PERIOD) {
        index += 1;
        let mut fraction: u32 = 0;
        let mut digits_read = 0;
        while let Some(&byte) = source.get(index) {
            let digit = byte.wrapping_sub(b'0');
            if digit > 9 {
                break;
            }
            // An eighth fraction digit is malformed in this dialect.
            if digits_read == FRACTION_DIGITS {
                return None;
            }
            fraction = fraction * 10 + u32::from(digit);
            digits_read += 1;
            index += 1;
        }
        if digits_read == 0 {
            return None;
        }
        while digits_read < FRACTION_DIGITS {
            fraction *= 10;
            digits_read += 1;
        }
        ticks += i64::from(fraction);
    }

    Some((ticks, index))
}

// ==== Tests ====
