//! This module implements `CodecError`.

use core::fmt;

/// `CodecError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// RangeError
    Range,
    /// SyntaxError
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
        }
        .fmt(f)
    }
}

/// The error type for `plain_json`.
///
/// Decode rejections are deliberately coarse: every malformed token maps to a
/// single format-rejection error naming the type being decoded. The finer
/// distinctions (length, grammar, semantic range, trailing data) exist only
/// as internal control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl CodecError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create a generic error.
    #[inline]
    #[must_use]
    pub fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = ErrorMessage::String(msg);
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> &'static str {
        self.msg.to_string()
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_string();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for CodecError {}

/// The error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorMessage {
    // Parsing
    PlainDateFormatInvalid,
    PlainTimeFormatInvalid,

    // Range
    YearOutOfRange,
    MonthOutOfRange,
    DayOutOfRange,
    DateOutOfRange,
    TimeOutOfRange,
    FractionOutOfRange,

    // Typed
    None,
    String(&'static str),
}

impl ErrorMessage {
    pub(crate) fn to_string(self) -> &'static str {
        match self {
            Self::PlainDateFormatInvalid => {
                "Provided text could not be parsed as a PlainDate value."
            }
            Self::PlainTimeFormatInvalid => {
                "Provided text could not be parsed as a PlainTime value."
            }
            Self::YearOutOfRange => "Year must be within the range of 1 through 9999.",
            Self::MonthOutOfRange => "Month must be within the range of 1 through 12.",
            Self::DayOutOfRange => "Day must be valid for the provided year and month.",
            Self::DateOutOfRange => "Date components are not within their valid ranges.",
            Self::TimeOutOfRange => "Time components are not within their valid ranges.",
            Self::FractionOutOfRange => {
                "Fraction must be within the range of 0 through 9,999,999 ticks."
            }
            Self::None => "",
            Self::String(s) => s,
        }
    }
}
