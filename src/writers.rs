//! This module implements the fixed-width writers for the canonical forms.
//!
//! Every writer renders already-validated components into a caller byte
//! buffer at constant offsets; none of them can fail, and none re-validate
//! ranges.

use crate::{
    iso::{IsoDate, IsoTime, MAX_FRACTION},
    DATE_FORMAT_LENGTH, TIME_FORMAT_MAX_LENGTH, TIME_FORMAT_MIN_LENGTH,
};

/// Writes the canonical `YYYY-MM-DD` form into `buffer[..10]`.
pub(crate) fn write_date(date: IsoDate, buffer: &mut [u8]) {
    debug_assert!(buffer.len() >= DATE_FORMAT_LENGTH);
    debug_assert!(date.is_valid());

    write_four_digits(date.year as u16, buffer, 0);
    buffer[4] = b'-';
    write_two_digits(date.month, buffer, 5);
    buffer[7] = b'-';
    write_two_digits(date.day, buffer, 8);
}

/// Writes the canonical `hh:mm:ss.fffffff` form into `buffer[..16]`.
pub(crate) fn write_time(time: IsoTime, buffer: &mut [u8]) {
    debug_assert!(buffer.len() >= TIME_FORMAT_MAX_LENGTH);

    write_time_seconds(time, buffer);
    buffer[8] = b'.';
    write_fraction(time.fraction, buffer, 9);
}

/// Writes the reduced `hh:mm:ss` form into `buffer[..8]`.
pub(crate) fn write_time_seconds(time: IsoTime, buffer: &mut [u8]) {
    debug_assert!(buffer.len() >= TIME_FORMAT_MIN_LENGTH);
    debug_assert!(time.is_valid());

    write_two_digits(time.hour, buffer, 0);
    buffer[2] = b':';
    write_two_digits(time.minute, buffer, 3);
    buffer[5] = b':';
    write_two_digits(time.second, buffer, 6);
}

/// Digit-pair writer: one division, one modulo.
#[inline]
fn write_two_digits(value: u8, buffer: &mut [u8], index: usize) {
    debug_assert!(value <= 99);
    buffer[index] = b'0' + value / 10;
    buffer[index + 1] = b'0' + value % 10;
}

/// Digit-quad writer for the year field.
#[inline]
fn write_four_digits(value: u16, buffer: &mut [u8], index: usize) {
    debug_assert!(value <= 9999);
    buffer[index] = b'0' + (value / 1000) as u8;
    buffer[index + 1] = b'0' + (value / 100 % 10) as u8;
    buffer[index + 2] = b'0' + (value / 10 % 10) as u8;
    buffer[index + 3] = b'0' + (value % 10) as u8;
}

/// Generic n-digit writer, used for the seven-digit fraction field.
fn write_fraction(mut value: u32, buffer: &mut [u8], index: usize) {
    debug_assert!(value <= MAX_FRACTION);
    for offset in (0..7).rev() {
        buffer[index + offset] = b'0' + (value % 10) as u8;
        value /= 10;
    }
}

// ==== Tests ====
