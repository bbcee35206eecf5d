use thiserror::Error;

use crate::core::Bound;

/// Duration, interval, and calendar-arithmetic errors.
///
/// Every failure carries the offending text; nothing is recovered
/// internally. Display strings for parse failures are stable and are
/// asserted on by the test suite.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("durations must begin with the character 'P'")]
    MissingPrefix,

    #[error("no measurements found")]
    NoMeasurements,

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("expected a unit designator after '{0}'")]
    MissingDesignator(String),

    #[error("unable to parse '{0}' as a positive decimal")]
    InvalidDecimal(String),

    #[error("{unit} value of {value} exceeds range {bound}")]
    OutOfRange {
        unit: &'static str,
        value: String,
        bound: Bound,
    },

    #[error("unable to parse '{0}' into date components")]
    MalformedDateSegment(String),

    #[error("unable to parse '{0}' into time components")]
    MalformedTimeSegment(String),

    /// Wrapper attached by the top-level duration parser so callers see
    /// the full input alongside the specific reason.
    #[error("could not parse duration '{text}': {source}")]
    Duration {
        text: String,
        #[source]
        source: Box<Error>,
    },

    #[error("fractional months are not supported")]
    FractionalMonths,

    /// Year and month lengths depend on the timestamp they are applied
    /// to, so a duration carrying them has no fixed elapsed length.
    #[error("years and months cannot be converted to an elapsed span")]
    CalendarDependentUnits,

    #[error("day is out of range for month")]
    DayOutOfRange,

    /// The shifted local time falls inside a DST gap.
    #[error("non-existent local time (DST gap): {0}")]
    NonExistentLocalTime(String),

    #[error("timestamp out of range")]
    TimestampOutOfRange,

    #[error("unable to parse '{0}' as a timestamp")]
    InvalidTimestamp(String),

    #[error("durations may not be negative")]
    NegativeSpan,

    #[error("cannot mix zone-aware and floating timestamps")]
    MixedTimestampForms,

    #[error("intervals must contain the separator character '/'")]
    MissingIntervalSeparator,

    #[error("intervals may contain at most one duration")]
    DuplicateDuration,

    #[error("interval must specify at least two of start, end, duration")]
    UnderspecifiedInterval,

    #[error("interval start plus duration does not equal end")]
    InconsistentInterval,
}

pub type Result<T> = std::result::Result<T, Error>;
