//! This module implements `PlainTime` and its codec entry points.

use core::str::FromStr;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    error::ErrorMessage,
    iso::{IsoTime, MAX_FRACTION},
    parsers, writers, CodecError, CodecResult, TIME_FORMAT_MAX_LENGTH, TIME_FORMAT_MIN_LENGTH,
};

/// A wall-clock time without a date or time-zone component.
///
/// `PlainTime` spans midnight through one tick before the following
/// midnight at 100-nanosecond resolution. It decodes from the strict
/// `h[h]:mm:ss[.f{1,7}]` dialect and encodes to either the full
/// `hh:mm:ss.fffffff` form or the reduced `hh:mm:ss` form.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainTime {
    pub(crate) iso: IsoTime,
}

// ==== Private API ====

impl PlainTime {
    /// Creates a new unvalidated `PlainTime`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoTime) -> Self {
        Self { iso }
    }
}

// ==== Public API ====

impl PlainTime {
    /// Midnight, the earliest representable time-of-day.
    pub const MIN: Self = Self::new_unchecked(IsoTime::new_unchecked(0, 0, 0, 0));

    /// One tick before the following midnight, 23:59:59.9999999.
    pub const MAX: Self = Self::new_unchecked(IsoTime::new_unchecked(23, 59, 59, MAX_FRACTION));

    /// Creates a new `PlainTime`, rejecting out-of-range components.
    ///
    /// `fraction` is in 100-nanosecond ticks, at most 9,999,999.
    pub fn try_new(hour: u8, minute: u8, second: u8, fraction: u32) -> CodecResult<Self> {
        Ok(Self::new_unchecked(IsoTime::new(
            hour, minute, second, fraction,
        )?))
    }

    /// Returns the hour field.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.hour
    }

    /// Returns the minute field.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.minute
    }

    /// Returns the second field.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.second
    }

    /// Returns the sub-second field in 100-nanosecond ticks.
    #[inline]
    #[must_use]
    pub const fn fraction(&self) -> u32 {
        self.iso.fraction
    }

    /// Returns the sub-second field in nanoseconds.
    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.iso.fraction * 100
    }

    /// Returns this time-of-day as 100-nanosecond ticks since midnight.
    #[inline]
    #[must_use]
    pub fn ticks(&self) -> i64 {
        self.iso.to_ticks()
    }

    /// Decodes a time-of-day from a strict `h[h]:mm:ss[.f{1,7}]` token.
    ///
    /// The token must already be unescaped and between
    /// [`TIME_FORMAT_MIN_LENGTH`] and [`TIME_FORMAT_MAX_LENGTH`] bytes
    /// long. Whitespace, signs, day counts, and durations of a day or more
    /// are all rejections.
    pub fn from_utf8(source: &[u8]) -> CodecResult<Self> {
        match parsers::parse_time_of_day(source) {
            Ok(ticks) => Ok(Self::new_unchecked(IsoTime::from_ticks(ticks))),
            Err(_) => {
                #[cfg(feature = "log")]
                log::debug!("PlainTime decode rejected ({} byte token)", source.len());
                Err(CodecError::syntax().with_enum(ErrorMessage::PlainTimeFormatInvalid))
            }
        }
    }

    /// Encodes this time into its full `hh:mm:ss.fffffff` form, returning
    /// the written sub-slice.
    ///
    /// The fraction field is always rendered, zero or not.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is shorter than [`TIME_FORMAT_MAX_LENGTH`].
    pub fn format_utf8<'buffer>(&self, buffer: &'buffer mut [u8]) -> &'buffer [u8] {
        writers::write_time(self.iso, buffer);
        &buffer[..TIME_FORMAT_MAX_LENGTH]
    }

    /// Encodes this time into its reduced `hh:mm:ss` form, returning the
    /// written sub-slice.
    ///
    /// The sub-second field is not rendered and is lost on a decode of the
    /// output.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is shorter than [`TIME_FORMAT_MIN_LENGTH`].
    pub fn format_utf8_seconds<'buffer>(&self, buffer: &'buffer mut [u8]) -> &'buffer [u8] {
        writers::write_time_seconds(self.iso, buffer);
        &buffer[..TIME_FORMAT_MIN_LENGTH]
    }
}

impl FromStr for PlainTime {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_utf8(s.as_bytes())
    }
}

impl Writeable for PlainTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let mut buffer = [0; TIME_FORMAT_MAX_LENGTH];
        writers::write_time(self.iso, &mut buffer);
        // The canonical form is pure ASCII.
        sink.write_str(core::str::from_utf8(&buffer).map_err(|_| core::fmt::Error)?)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(TIME_FORMAT_MAX_LENGTH)
    }
}

impl_display_with_writeable!(PlainTime);

#[cfg(feature = "serde")]
impl serde::Serialize for PlainTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut buffer = [0; TIME_FORMAT_MAX_LENGTH];
        let bytes = self.format_utf8(&mut buffer);
        let text = core::str::from_utf8(bytes).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PlainTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeVisitor;

        impl serde::de::Visitor<'_> for TimeVisitor {
            type Value = PlainTime;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("an ISO 8601 time-of-day string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                PlainTime::from_utf8(value.as_bytes()).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

// ==== Tests ====
