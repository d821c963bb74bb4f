//! This module implements `PlainDate` and its codec entry points.

use core::str::FromStr;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    error::ErrorMessage,
    iso::{self, IsoDate, TICKS_PER_DAY},
    parsers::{self, DateTimeRecord},
    writers, CodecError, CodecResult, DATE_FORMAT_LENGTH,
};

/// A calendar date without a time-of-day or time-zone component.
///
/// `PlainDate` spans 0001-01-01 through 9999-12-31 and decodes from and
/// encodes to the canonical `YYYY-MM-DD` form. The strict value-token
/// entry point is [`PlainDate::from_utf8`]; [`FromStr`] additionally
/// accepts complete ISO 8601 date/time representations and truncates them
/// to the calendar date.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDate {
    pub(crate) iso: IsoDate,
}

// ==== Private API ====

impl PlainDate {
    /// Creates a new unvalidated `PlainDate`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDate) -> Self {
        Self { iso }
    }

    /// Truncates a validated record's composite instant to its calendar
    /// date, discarding the time-of-day remainder and any recognized zone
    /// designator.
    pub(crate) fn from_record(record: &DateTimeRecord) -> Option<Self> {
        let ticks = iso::composite_ticks(record)?;
        let days = (ticks / TICKS_PER_DAY) as i32;
        Some(Self::new_unchecked(IsoDate::from_epoch_days(days)))
    }

    fn decode(source: &[u8]) -> Option<Self> {
        // The value token must be exactly the canonical width; longer
        // date/time tokens are never accepted here.
        if source.len() != DATE_FORMAT_LENGTH {
            return None;
        }
        let record = parsers::parse_date_time(source).ok()?;
        if !record.calendar_date_only {
            return None;
        }
        Self::from_record(&record)
    }
}

// ==== Public API ====

impl PlainDate {
    /// The earliest representable calendar date, 0001-01-01.
    pub const MIN: Self = Self::new_unchecked(IsoDate::new_unchecked(1, 1, 1));

    /// The latest representable calendar date, 9999-12-31.
    pub const MAX: Self = Self::new_unchecked(IsoDate::new_unchecked(9999, 12, 31));

    /// Creates a new `PlainDate`, rejecting out-of-range components.
    pub fn try_new(year: i32, month: u8, day: u8) -> CodecResult<Self> {
        Ok(Self::new_unchecked(IsoDate::new(year, month, day)?))
    }

    /// Returns the year field.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.iso.year
    }

    /// Returns the month field.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.iso.month
    }

    /// Returns the day field.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.iso.day
    }

    /// Decodes a calendar date from a canonical `YYYY-MM-DD` value token.
    ///
    /// The token must already be unescaped and exactly
    /// [`DATE_FORMAT_LENGTH`] bytes long; any other length is rejected
    /// before grammar validation runs.
    pub fn from_utf8(source: &[u8]) -> CodecResult<Self> {
        match Self::decode(source) {
            Some(date) => Ok(date),
            None => {
                #[cfg(feature = "log")]
                log::debug!("PlainDate decode rejected ({} byte token)", source.len());
                Err(CodecError::syntax().with_enum(ErrorMessage::PlainDateFormatInvalid))
            }
        }
    }

    /// Encodes this date into its canonical `YYYY-MM-DD` form, returning
    /// the written sub-slice.
    ///
    /// Encoding cannot fail for an already-valid date.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is shorter than [`DATE_FORMAT_LENGTH`].
    pub fn format_utf8<'buffer>(&self, buffer: &'buffer mut [u8]) -> &'buffer [u8] {
        writers::write_date(self.iso, buffer);
        &buffer[..DATE_FORMAT_LENGTH]
    }
}

impl FromStr for PlainDate {
    type Err = CodecError;

    /// Parses any complete ISO 8601 extended date or date/time
    /// representation, truncating to the calendar date.
    ///
    /// Trailing `Z` and `±hh[:mm]` zone designators are validated and then
    /// discarded; they never shift the resulting date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record = parsers::parse_date_time(s.as_bytes())
            .map_err(|_| CodecError::syntax().with_enum(ErrorMessage::PlainDateFormatInvalid))?;
        Self::from_record(&record)
            .ok_or_else(|| CodecError::range().with_enum(ErrorMessage::DateOutOfRange))
    }
}

impl Writeable for PlainDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let mut buffer = [0; DATE_FORMAT_LENGTH];
        writers::write_date(self.iso, &mut buffer);
        // The canonical form is pure ASCII.
        sink.write_str(core::str::from_utf8(&buffer).map_err(|_| core::fmt::Error)?)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(DATE_FORMAT_LENGTH)
    }
}

impl_display_with_writeable!(PlainDate);

#[cfg(feature = "serde")]
impl serde::Serialize for PlainDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut buffer = [0; DATE_FORMAT_LENGTH];
        let bytes = self.format_utf8(&mut buffer);
        let text = core::str::from_utf8(bytes).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PlainDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DateVisitor;

        impl serde::de::Visitor<'_> for DateVisitor {
            type Value = PlainDate;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("an ISO 8601 calendar date string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                PlainDate::from_utf8(value.as_bytes()).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}

// ==== Tests ====

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::PlainDate;

    fn date(year: i32, month: u8, day: u8) -> PlainDate {
        PlainDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn boundary_acceptance() {
        assert_eq!(PlainDate::from_utf8(b"0001-01-01").unwrap(), PlainDate::MIN);
        assert_eq!(PlainDate::from_utf8(b"9999-12-31").unwrap(), PlainDate::MAX);
        assert!(PlainDate::from_utf8(b"0000-12-31").is_err());
        assert!(PlainDate::from_utf8(b"10000-01-01").is_err());
        assert!("10000-01-01".parse::<PlainDate>().is_err());
    }

    #[test]
    fn leap_year_day_bound() {
        assert_eq!(PlainDate::from_utf8(b"2024-02-29").unwrap(), date(2024, 2, 29));
        assert!(PlainDate::from_utf8(b"2023-02-29").is_err());
        assert!(PlainDate::from_utf8(b"1900-02-29").is_err());
        assert!(PlainDate::from_utf8(b"2000-02-29").is_ok());
    }

    #[test]
    fn semantic_range_rejections() {
        assert!(PlainDate::from_utf8(b"2022-00-10").is_err());
        assert!(PlainDate::from_utf8(b"2022-13-10").is_err());
        assert!(PlainDate::from_utf8(b"2022-05-00").is_err());
        assert!(PlainDate::from_utf8(b"2022-05-32").is_err());
        assert!(PlainDate::from_utf8(b"2022-04-31").is_err());
    }

    #[test]
    fn malformed_separators() {
        assert!(PlainDate::from_utf8(b"2022/05/10").is_err());
        assert!(PlainDate::from_utf8(b"05/10/2022").is_err());
        assert!(PlainDate::from_utf8(b"2022-05 10").is_err());
        assert!(PlainDate::from_utf8(b"-2020-05-1").is_err());
        assert!(PlainDate::from_utf8(b"\t2022-05-10").is_err());
        assert!(PlainDate::from_utf8(b" 2022-05-10").is_err());
        assert!(PlainDate::from_utf8(b"2022-05-10   ").is_err());
    }

    #[test]
    fn value_tokens_must_be_exact_width() {
        // Full date/times are valid for the grammar but never for the
        // value-token entry point.
        assert!(PlainDate::from_utf8(b"2022-05-10T20:53:01").is_err());
        assert!(PlainDate::from_utf8(b"2022-05-10T20:53Z").is_err());
        assert!(PlainDate::from_utf8(b"00:00:01").is_err());
        assert!(PlainDate::from_utf8(b"1$").is_err());
        assert!(PlainDate::from_utf8(b"").is_err());
    }

    #[test]
    fn from_str_truncates_date_times() {
        let expected = date(2022, 5, 10);
        assert_eq!("2022-05-10".parse::<PlainDate>().unwrap(), expected);
        assert_eq!("2022-05-10T20:53".parse::<PlainDate>().unwrap(), expected);
        assert_eq!(
            "2022-05-10T20:53:01.3552286".parse::<PlainDate>().unwrap(),
            expected
        );
    }

    #[test]
    fn zone_designators_are_discarded() {
        let expected = date(2022, 5, 10);
        assert_eq!("2022-05-10T20:53Z".parse::<PlainDate>().unwrap(), expected);
        assert_eq!(
            "2022-05-10T20:53:01.3552286+01:00"
                .parse::<PlainDate>()
                .unwrap(),
            expected
        );
        assert_eq!(
            "2022-05-10T20:53-05".parse::<PlainDate>().unwrap(),
            expected
        );
    }

    #[test]
    fn round_trip() {
        let samples = [
            PlainDate::MIN,
            PlainDate::MAX,
            date(1970, 1, 1),
            date(2002, 2, 13),
            date(2022, 5, 10),
            date(2024, 2, 29),
        ];
        let mut buffer = [0; crate::DATE_FORMAT_LENGTH];
        for value in samples {
            let encoded = value.format_utf8(&mut buffer);
            assert_eq!(PlainDate::from_utf8(encoded).unwrap(), value);
        }
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(date(2024, 2, 29).to_string(), "2024-02-29");
        assert_eq!(PlainDate::MIN.to_string(), "0001-01-01");
    }

    #[test]
    fn try_new_bounds() {
        assert!(PlainDate::try_new(0, 1, 1).is_err());
        assert!(PlainDate::try_new(10_000, 1, 1).is_err());
        assert!(PlainDate::try_new(2024, 13, 1).is_err());
        assert!(PlainDate::try_new(2023, 2, 29).is_err());
        assert!(PlainDate::try_new(2024, 2, 29).is_ok());
    }

    #[test]
    fn default_is_the_minimum() {
        assert_eq!(PlainDate::default(), PlainDate::MIN);
    }

    #[cfg(feature = "serde")]
    mod serde {
        use super::{date, PlainDate};

        #[test]
        fn json_round_trip() {
            let value = date(2022, 5, 10);
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, "\"2022-05-10\"");
            assert_eq!(serde_json::from_str::<PlainDate>(&json).unwrap(), value);
        }

        #[test]
        fn escaped_tokens_decode_after_unescaping() {
            // 2022-05-10 unescapes to 2022-05-10.
            let json = "\"\\u0032\\u0030\\u0032\\u0032-05-10\"";
            assert_eq!(
                serde_json::from_str::<PlainDate>(json).unwrap(),
                date(2022, 5, 10)
            );
        }

        #[test]
        fn non_string_tokens_are_rejected() {
            assert!(serde_json::from_str::<PlainDate>("1234").is_err());
            assert!(serde_json::from_str::<PlainDate>("null").is_err());
            assert!(serde_json::from_str::<PlainDate>("{}").is_err());
            assert!(serde_json::from_str::<PlainDate>("[]").is_err());
            assert!(serde_json::from_str::<PlainDate>("true").is_err());
        }

        #[test]
        fn date_time_strings_are_rejected() {
            assert!(serde_json::from_str::<PlainDate>("\"2022-05-10T20:53Z\"").is_err());
            assert!(serde_json::from_str::<PlainDate>("\"05/10/2022\"").is_err());
        }
    }
}
