use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{Timestamp, Unit};
use crate::error::{Error, Result};

/// A parsed ISO 8601 duration.
///
/// Seven independent measurements, all non-negative. Calendar-relative
/// units (years, months) are kept separate from elapsed-time units
/// because their length depends on the timestamp they are applied to;
/// no normalization between fields is ever performed.
///
/// Equality is exact field-wise equality: `P1D` and `PT24H` are distinct
/// values even though they often describe the same elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Duration {
    pub years: f64,
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Duration {
    pub const ZERO: Self = Self {
        years: 0.0,
        months: 0.0,
        weeks: 0.0,
        days: 0.0,
        hours: 0.0,
        minutes: 0.0,
        seconds: 0.0,
    };

    /// Whether every field is zero. The zero duration formats as `P0D`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub(crate) fn field_mut(&mut self, unit: Unit) -> &mut f64 {
        match unit {
            Unit::Years => &mut self.years,
            Unit::Months => &mut self.months,
            Unit::Weeks => &mut self.weeks,
            Unit::Days => &mut self.days,
            Unit::Hours => &mut self.hours,
            Unit::Minutes => &mut self.minutes,
            Unit::Seconds => &mut self.seconds,
        }
    }

    /// Applies this duration to a timestamp, yielding a new timestamp.
    ///
    /// Components are applied in the fixed order year → month → day →
    /// time; see [`crate::arith`] for the arithmetic model.
    ///
    /// ## Errors
    ///
    /// Returns an error if the months field is fractional, if the
    /// year/month shift lands on a day that does not exist in the target
    /// month, if the shifted local time falls inside a DST gap, or if
    /// the result overflows the timestamp range.
    pub fn checked_add_to(&self, timestamp: &Timestamp) -> Result<Timestamp> {
        crate::arith::add(self, timestamp)
    }

    /// Removes this duration from a timestamp, yielding the timestamp it
    /// was measured from.
    ///
    /// This is the documented inverse of [`Self::checked_add_to`]:
    /// components are unwound in the reverse order time → day → month →
    /// year.
    ///
    /// ## Errors
    ///
    /// Same failure modes as [`Self::checked_add_to`].
    pub fn checked_sub_from(&self, timestamp: &Timestamp) -> Result<Timestamp> {
        crate::arith::sub(self, timestamp)
    }
}

/// Field-wise sum of two durations.
impl Add for Duration {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            years: self.years + other.years,
            months: self.months + other.months,
            weeks: self.weeks + other.weeks,
            days: self.days + other.days,
            hours: self.hours + other.hours,
            minutes: self.minutes + other.minutes,
            seconds: self.seconds + other.seconds,
        }
    }
}

/// Adds a flat elapsed span: whole days into `days`, the remainder
/// (including any subsecond fraction) into `seconds`.
impl Add<TimeDelta> for Duration {
    type Output = Self;

    fn add(mut self, delta: TimeDelta) -> Self {
        let (days, seconds) = split_delta(delta);
        self.days += days;
        self.seconds += seconds;
        self
    }
}

/// Converts to a flat elapsed span, with weeks and days taken at their
/// nominal lengths. Years and months have no fixed length and are
/// rejected.
impl TryFrom<Duration> for TimeDelta {
    type Error = Error;

    #[expect(
        clippy::float_cmp,
        reason = "unused fields hold exactly their 0.0 default"
    )]
    fn try_from(duration: Duration) -> Result<Self> {
        if duration.years != 0.0 || duration.months != 0.0 {
            return Err(Error::CalendarDependentUnits);
        }
        let seconds = duration.weeks.mul_add(7.0, duration.days).mul_add(
            86_400.0,
            duration
                .hours
                .mul_add(3600.0, duration.minutes.mul_add(60.0, duration.seconds)),
        );
        crate::arith::delta_from_seconds(seconds)
    }
}

/// Converts an elapsed span into a day/second duration.
impl TryFrom<TimeDelta> for Duration {
    type Error = Error;

    fn try_from(delta: TimeDelta) -> Result<Self> {
        if delta < TimeDelta::zero() {
            return Err(Error::NegativeSpan);
        }
        let (days, seconds) = split_delta(delta);
        Ok(Self {
            days,
            seconds,
            ..Self::ZERO
        })
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "day counts of realistic spans are far below 2^52"
)]
fn split_delta(delta: TimeDelta) -> (f64, f64) {
    let days = delta.num_days();
    let remainder = delta - TimeDelta::days(days);
    let seconds =
        remainder.num_seconds() as f64 + f64::from(remainder.subsec_nanos()) / 1_000_000_000.0;
    (days as f64, seconds)
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::build::format_duration(self))
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse::parse_duration(s)
    }
}

/// Serialized as the canonical ISO 8601 string.
impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
