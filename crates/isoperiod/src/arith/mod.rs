//! Calendar-aware application of a duration to a timestamp.
//!
//! Components apply in the fixed order year → month → day → time, each
//! step feeding the next. The order is a design choice, not an ISO 8601
//! requirement: applying the month before the day makes `P1M1D` compose
//! predictably at month-length boundaries (`2000-02-29 + P1M1D` is
//! `2000-03-30`, not an error).
//!
//! Calendar components (years, months, weeks, days) are defined in
//! local civil time: one day is the next calendar day even across a DST
//! transition. Sub-day components are genuine elapsed time and are
//! added in the instant frame, so `PT23H` across a spring-forward
//! transition lands one calendar day later.

use chrono::{Datelike, NaiveDateTime, TimeDelta};

use crate::core::{Duration, Timestamp};
use crate::error::{Error, Result};

/// Applies `duration` to `timestamp`: year → month → day → time.
///
/// ## Errors
///
/// See [`Duration::checked_add_to`].
pub(crate) fn add(duration: &Duration, timestamp: &Timestamp) -> Result<Timestamp> {
    tracing::debug!(duration = %duration, timestamp = %timestamp, "applying duration");
    let shifted = shift_year_month(timestamp, duration.years, duration.months)?;
    let shifted = shift_days(&shifted, day_offset(duration))?;
    shift_elapsed(&shifted, elapsed_seconds(duration))
}

/// Removes `duration` from `timestamp`, unwinding [`add`] in reverse:
/// time → day → month → year (with the month shift negated).
///
/// ## Errors
///
/// See [`Duration::checked_sub_from`].
pub(crate) fn sub(duration: &Duration, timestamp: &Timestamp) -> Result<Timestamp> {
    tracing::debug!(duration = %duration, timestamp = %timestamp, "removing duration");
    let shifted = shift_elapsed(timestamp, -elapsed_seconds(duration))?;
    let shifted = shift_days(&shifted, -day_offset(duration))?;
    unshift_year_month(&shifted, duration.years, duration.months)
}

fn day_offset(duration: &Duration) -> f64 {
    duration.weeks.mul_add(7.0, duration.days)
}

fn elapsed_seconds(duration: &Duration) -> f64 {
    duration
        .hours
        .mul_add(3600.0, duration.minutes.mul_add(60.0, duration.seconds))
}

/// Target year and month for a year/month shift, or `None` when the
/// shift is a no-op.
///
/// Month arithmetic is zero-indexed so that overflow carries into the
/// year: `zero_month = (month - 1) + months`, carrying
/// `zero_month div 12` years and keeping `zero_month mod 12`.
#[expect(
    clippy::float_cmp,
    reason = "integrality check wants exact comparison, not tolerance"
)]
fn year_month_target(
    naive: NaiveDateTime,
    years: f64,
    months: f64,
) -> Result<Option<(i32, u32)>> {
    if months.fract() != 0.0 {
        return Err(Error::FractionalMonths);
    }
    let years = round_whole(years);
    let months = round_whole(months);
    if years == 0 && months == 0 {
        return Ok(None);
    }

    let zero_month = i64::from(naive.month()) - 1 + months;
    let year = i64::from(naive.year()) + years + zero_month.div_euclid(12);
    let year = i32::try_from(year).map_err(|_| Error::TimestampOutOfRange)?;
    let month =
        u32::try_from(zero_month.rem_euclid(12) + 1).map_err(|_| Error::TimestampOutOfRange)?;
    Ok(Some((year, month)))
}

/// Replaces the year field, then the month field, on the naive local
/// calendar fields.
fn shift_year_month(timestamp: &Timestamp, years: f64, months: f64) -> Result<Timestamp> {
    let naive = timestamp.naive_local();
    let Some((year, month)) = year_month_target(naive, years, months)? else {
        return Ok(*timestamp);
    };
    let replaced = naive
        .with_year(year)
        .and_then(|shifted| shifted.with_month(month))
        .ok_or(Error::DayOutOfRange)?;
    timestamp.with_naive_local(replaced)
}

/// Unwinds a year/month shift. Field replacement happens in the reverse
/// order, month before year, so that unwinding from a leap day does not
/// trip over an intermediate date like Feb 29 of a common year.
fn unshift_year_month(timestamp: &Timestamp, years: f64, months: f64) -> Result<Timestamp> {
    let naive = timestamp.naive_local();
    let Some((year, month)) = year_month_target(naive, -years, -months)? else {
        return Ok(*timestamp);
    };
    let replaced = naive
        .with_month(month)
        .and_then(|shifted| shifted.with_year(year))
        .ok_or(Error::DayOutOfRange)?;
    timestamp.with_naive_local(replaced)
}

/// Adds a calendar-day offset on the naive local fields, then reattaches
/// the original zone. Fractional days carry into the time of day, still
/// in the local frame.
#[expect(clippy::float_cmp, reason = "zero-valued steps are skipped exactly")]
fn shift_days(timestamp: &Timestamp, days: f64) -> Result<Timestamp> {
    if days == 0.0 {
        return Ok(*timestamp);
    }
    let delta = delta_from_seconds(days * 86_400.0)?;
    let naive = timestamp
        .naive_local()
        .checked_add_signed(delta)
        .ok_or(Error::TimestampOutOfRange)?;
    timestamp.with_naive_local(naive)
}

/// Adds flat elapsed time in the instant frame.
#[expect(clippy::float_cmp, reason = "zero-valued steps are skipped exactly")]
fn shift_elapsed(timestamp: &Timestamp, seconds: f64) -> Result<Timestamp> {
    if seconds == 0.0 {
        return Ok(*timestamp);
    }
    timestamp.checked_add_signed(delta_from_seconds(seconds)?)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "duration fields are far below the i64 range"
)]
fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Converts fractional seconds to a `TimeDelta`, rounded to the nearest
/// nanosecond.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "magnitude is truncated positive and nanos are bounded by the carry check"
)]
pub(crate) fn delta_from_seconds(seconds: f64) -> Result<TimeDelta> {
    let negative = seconds < 0.0;
    let magnitude = seconds.abs();
    let mut whole = magnitude.trunc() as i64;
    let mut nanos = ((magnitude - magnitude.trunc()) * 1_000_000_000.0).round() as u32;
    if nanos >= 1_000_000_000 {
        whole += 1;
        nanos -= 1_000_000_000;
    }
    let delta = TimeDelta::new(whole, nanos).ok_or(Error::TimestampOutOfRange)?;
    Ok(if negative { -delta } else { delta })
}
