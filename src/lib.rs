//! The `plain_json` crate provides strict, allocation-free ISO 8601 codecs
//! for two plain (zone-less) value types: [`PlainDate`], a calendar date, and
//! [`PlainTime`], a time-of-day with 100-nanosecond-tick resolution.
//!
//! ```rust
//! use plain_json::{PlainDate, PlainTime};
//!
//! let date = PlainDate::from_utf8(b"2024-02-29").unwrap();
//! assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
//!
//! let mut buffer = [0; plain_json::DATE_FORMAT_LENGTH];
//! assert_eq!(date.format_utf8(&mut buffer), b"2024-02-29");
//!
//! // Short fractions are zero-padded to full tick width.
//! let time = PlainTime::from_utf8(b"23:59:59.9").unwrap();
//! assert_eq!(time.to_string(), "23:59:59.9000000");
//! ```
//!
//! Decoding accepts exactly the complete extended representations of
//! ISO 8601-1:2019 (fixed separator positions, fixed field widths, no
//! reduced-precision forms, no embedded whitespace); everything else is a
//! definite rejection. Encoding always produces the canonical fixed-width
//! form, written directly into a caller-supplied buffer.
//!
//! All operations are synchronous, reentrant, and free of heap allocation;
//! the crate builds without `std`.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // serde_json is a dev-dependency exercised only by the serde feature tests.
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation
)]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod iso;

mod date;
mod parsers;
mod time;
mod writers;

pub use date::PlainDate;
pub use error::CodecError;
pub use time::PlainTime;

/// The `plain_json` result type.
pub type CodecResult<T> = Result<T, CodecError>;

/// Canonical width of an encoded calendar date (`YYYY-MM-DD`).
pub const DATE_FORMAT_LENGTH: usize = 10;

/// Minimum width of a time-of-day token (`hh:mm:ss`).
pub const TIME_FORMAT_MIN_LENGTH: usize = 8;

/// Canonical width of an encoded time-of-day (`hh:mm:ss.fffffff`).
pub const TIME_FORMAT_MAX_LENGTH: usize = 16;

/// Worst-case single-byte expansion factor applied by text escaping.
///
/// An ASCII byte escapes to at most a six-byte `\uXXXX` sequence, so a
/// still-escaped token can be at most this factor wider than its decoded
/// form.
pub const MAX_ESCAPE_EXPANSION: usize = 6;

/// Upper length bound of a still-escaped calendar-date token.
pub const MAX_ESCAPED_DATE_LENGTH: usize = DATE_FORMAT_LENGTH * MAX_ESCAPE_EXPANSION;

/// Upper length bound of a still-escaped time-of-day token.
pub const MAX_ESCAPED_TIME_LENGTH: usize = TIME_FORMAT_MAX_LENGTH * MAX_ESCAPE_EXPANSION;

/// Returns whether a still-escaped value token could contain a calendar
/// date.
///
/// Surrounding text-decoding layers run this against the raw token length
/// before unescaping into a scratch buffer of [`MAX_ESCAPED_DATE_LENGTH`]
/// bytes.
#[inline]
#[must_use]
pub const fn date_token_length_in_range(length: usize) -> bool {
    parsers::is_in_range_inclusive(length, DATE_FORMAT_LENGTH, MAX_ESCAPED_DATE_LENGTH)
}

/// Returns whether a still-escaped value token could contain a time-of-day.
#[inline]
#[must_use]
pub const fn time_token_length_in_range(length: usize) -> bool {
    parsers::is_in_range_inclusive(length, TIME_FORMAT_MIN_LENGTH, MAX_ESCAPED_TIME_LENGTH)
}

/// The sign of a recognized zone-designator offset.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    Positive = 1,
    Negative = -1,
}
