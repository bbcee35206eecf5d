use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{Duration, Timestamp};
use crate::error::{Error, Result};

/// An ISO 8601 interval: a start, an end, and the duration between them.
///
/// The invariant `start + duration == end` is re-derived and checked at
/// construction. Textually, exactly one of the three members may be
/// omitted (`start/end`, `start/duration`, `duration/end`) and is
/// filled in algebraically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: Timestamp,
    pub end: Timestamp,
    pub duration: Duration,
}

impl Interval {
    /// Constructs a fully-specified interval, verifying consistency.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InconsistentInterval`] when `start + duration`
    /// does not equal `end`, plus any calendar-arithmetic failure from
    /// re-deriving the sum.
    pub fn new(start: Timestamp, end: Timestamp, duration: Duration) -> Result<Self> {
        if duration.checked_add_to(&start)? != end {
            return Err(Error::InconsistentInterval);
        }
        Ok(Self {
            start,
            end,
            duration,
        })
    }
}

/// Formats as `start/end`; a duration-form half is not reproduced.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        tracing::trace!(text = s, "parsing interval");
        let Some((left, right)) = s.split_once('/') else {
            return Err(Error::MissingIntervalSeparator);
        };
        if right.contains('/') {
            return Err(Error::UnexpectedCharacter('/'));
        }
        if left.is_empty() || right.is_empty() {
            return Err(Error::UnderspecifiedInterval);
        }

        match (left.starts_with('P'), right.starts_with('P')) {
            (true, true) => Err(Error::DuplicateDuration),
            (true, false) => {
                let duration: Duration = left.parse()?;
                let end: Timestamp = right.parse()?;
                let start = duration.checked_sub_from(&end)?;
                Self::new(start, end, duration)
            }
            (false, true) => {
                let start: Timestamp = left.parse()?;
                let duration: Duration = right.parse()?;
                let end = duration.checked_add_to(&start)?;
                Self::new(start, end, duration)
            }
            (false, false) => {
                let start: Timestamp = left.parse()?;
                let end: Timestamp = right.parse()?;
                let duration = Duration::try_from(end.signed_duration_since(&start)?)?;
                Self::new(start, end, duration)
            }
        }
    }
}

/// Serialized as the `start/end` string.
impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
