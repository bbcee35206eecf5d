use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// A civil timestamp: calendar fields with optional timezone attachment.
///
/// The three forms mirror how ISO 8601 text anchors a point in time:
/// floating (no zone), fixed UTC offset (including `Z`), and IANA zone
/// with DST rules. Calendar arithmetic operates on the naive local
/// fields and reattaches the zone; elapsed-time arithmetic operates on
/// the underlying instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestamp {
    /// No timezone; interpreted in local civil time only.
    Floating(NaiveDateTime),
    /// Fixed UTC offset.
    Fixed(DateTime<FixedOffset>),
    /// IANA timezone; the offset follows the zone's DST transitions.
    Zoned(DateTime<Tz>),
}

impl Timestamp {
    /// The naive local calendar fields, with any zone detached.
    #[must_use]
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Self::Floating(naive) => *naive,
            Self::Fixed(dt) => dt.naive_local(),
            Self::Zoned(dt) => dt.naive_local(),
        }
    }

    /// Reattaches this timestamp's zone to replacement local fields.
    ///
    /// A local time that occurs twice (DST fold) resolves to the earlier
    /// instant, matching RFC 5545 practice.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::NonExistentLocalTime`] when the local time falls
    /// inside a DST gap.
    pub fn with_naive_local(&self, naive: NaiveDateTime) -> Result<Self> {
        match self {
            Self::Floating(_) => Ok(Self::Floating(naive)),
            Self::Fixed(dt) => match dt.offset().from_local_datetime(&naive) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(Self::Fixed(dt)),
                LocalResult::None => Err(Error::NonExistentLocalTime(naive.to_string())),
            },
            Self::Zoned(dt) => match dt.timezone().from_local_datetime(&naive) {
                // DST fold: take the earlier of the two instants
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(Self::Zoned(dt)),
                LocalResult::None => Err(Error::NonExistentLocalTime(naive.to_string())),
            },
        }
    }

    /// Adds a flat elapsed span.
    ///
    /// Anchored timestamps add in the instant frame, so a span crossing
    /// a DST transition is still exactly the stated elapsed time.
    /// Floating timestamps have no instant and add on the local fields.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] on overflow.
    pub fn checked_add_signed(&self, delta: TimeDelta) -> Result<Self> {
        match self {
            Self::Floating(naive) => naive.checked_add_signed(delta).map(Self::Floating),
            Self::Fixed(dt) => dt.checked_add_signed(delta).map(Self::Fixed),
            Self::Zoned(dt) => dt.checked_add_signed(delta).map(Self::Zoned),
        }
        .ok_or(Error::TimestampOutOfRange)
    }

    /// Signed elapsed time from `other` to `self`.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::MixedTimestampForms`] when one timestamp is
    /// floating and the other is anchored; the elapsed time between them
    /// is not well defined.
    pub fn signed_duration_since(&self, other: &Self) -> Result<TimeDelta> {
        match (self.instant(), other.instant()) {
            (Some(this), Some(that)) => Ok(this - that),
            (None, None) => Ok(self.naive_local() - other.naive_local()),
            _ => Err(Error::MixedTimestampForms),
        }
    }

    /// The UTC instant, if this timestamp is anchored to one.
    fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Floating(_) => None,
            Self::Fixed(dt) => Some(dt.with_timezone(&Utc)),
            Self::Zoned(dt) => Some(dt.with_timezone(&Utc)),
        }
    }

    fn utc_offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Floating(_) => None,
            Self::Fixed(dt) => Some(*dt.offset()),
            Self::Zoned(dt) => Some(dt.offset().fix()),
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Floating(naive)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Fixed(dt)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Fixed(dt.fixed_offset())
    }
}

impl From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Zoned(dt)
    }
}

/// Formats in extended ISO 8601 form: `T` separator, subsecond fraction
/// only when non-zero, UTC offset only when anchored.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let naive = self.naive_local();
        write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S"))?;
        let nanos = naive.nanosecond();
        if nanos > 0 {
            if nanos % 1_000 == 0 {
                write!(f, ".{:06}", nanos / 1_000)?;
            } else {
                write!(f, ".{nanos:09}")?;
            }
        }
        if let Some(offset) = self.utc_offset() {
            write!(f, "{offset}")?;
        }
        Ok(())
    }
}

/// Parses RFC 3339 text as a fixed-offset timestamp, or offset-less
/// ISO 8601 text (`YYYY-MM-DDTHH:MM:SS[.f]`) as a floating one.
impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Fixed(dt));
        }
        s.parse::<NaiveDateTime>()
            .map(Self::Floating)
            .map_err(|_| Error::InvalidTimestamp(s.to_string()))
    }
}
