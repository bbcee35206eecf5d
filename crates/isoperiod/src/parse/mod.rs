//! Parsers for ISO 8601 duration strings.
//!
//! The top-level parser routes on shape: a trailing designator letter
//! selects the left-to-right designator sweep, anything else is split at
//! the first `T` into fixed-width date and time segments. All three
//! parsers yield raw [`Component`]s which the reducer validates and
//! folds into a [`Duration`].

mod designator;
mod segment;

use crate::core::{Bound, Duration, Unit};
use crate::error::{Error, Result};

/// A raw measurement scanned out of a duration string: the decimal text
/// exactly as written, the unit it was attached to, and the range limit
/// imposed by the parse site. Ephemeral; consumed by the reducer within
/// the same parse call.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Component {
    value: String,
    unit: Unit,
    bound: Bound,
}

impl Component {
    pub(crate) fn new(value: impl Into<String>, unit: Unit, bound: Bound) -> Self {
        Self {
            value: value.into(),
            unit,
            bound,
        }
    }

    /// Validates the raw text and reduces it to a measurement.
    fn reduce(self) -> Result<(Unit, f64)> {
        let quantity = parse_decimal(&self.value)?;
        if !self.bound.contains(quantity) {
            return Err(Error::OutOfRange {
                unit: self.unit.name(),
                value: self.value,
                bound: self.bound,
            });
        }
        Ok((self.unit, quantity))
    }
}

/// Parses a duration string, wrapping any failure with the full input.
///
/// ## Errors
///
/// Returns [`Error::Duration`] carrying the specific grammar violation.
pub(crate) fn parse_duration(text: &str) -> Result<Duration> {
    tracing::trace!(text, "parsing duration");
    parse_components(text)
        .and_then(reduce)
        .map_err(|source| Error::Duration {
            text: text.to_string(),
            source: Box::new(source),
        })
}

/// Selects and runs the appropriate component parser.
///
/// Date measurements sit between `P` and `T`, time measurements between
/// `T` and end-of-string. A trailing designator letter means the string
/// is in designator form; otherwise the segments are fixed-width.
fn parse_components(text: &str) -> Result<Vec<Component>> {
    let Some(rest) = text.strip_prefix('P') else {
        return Err(Error::MissingPrefix);
    };

    if text.chars().last().is_some_and(|c| c.is_ascii_uppercase()) {
        return designator::scan(rest);
    }

    let (date_segment, time_segment) = match rest.split_once('T') {
        Some((date, time)) => (date, time),
        None => (rest, ""),
    };

    let mut components = Vec::new();
    if !date_segment.is_empty() {
        components.extend(segment::parse_date(date_segment)?);
    }
    if !time_segment.is_empty() {
        components.extend(segment::parse_time(time_segment)?);
    }
    Ok(components)
}

/// Folds validated measurements into a `Duration`, dropping zero-valued
/// measurements so `P0D` and `PT0S` both reduce to the zero duration.
#[expect(
    clippy::float_cmp,
    reason = "a literal zero measurement parses to exactly 0.0"
)]
fn reduce(components: Vec<Component>) -> Result<Duration> {
    if components.is_empty() {
        return Err(Error::NoMeasurements);
    }
    let mut duration = Duration::ZERO;
    for component in components {
        let (unit, quantity) = component.reduce()?;
        if quantity == 0.0 {
            continue;
        }
        *duration.field_mut(unit) = quantity;
    }
    Ok(duration)
}

/// Strict non-negative decimal: must start with a digit (no sign, no
/// bare separator), digits with at most one `.` or `,` separator (no
/// scientific notation). The comma is normalized to a period only for
/// the numeric conversion; error messages keep the text as written.
fn parse_decimal(raw: &str) -> Result<f64> {
    let invalid = || Error::InvalidDecimal(raw.to_string());
    if !raw.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let mut seen_separator = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => {}
            '.' | ',' if !seen_separator => seen_separator = true,
            _ => return Err(invalid()),
        }
    }
    raw.replace(',', ".").parse().map_err(|_| invalid())
}
