//! Fixed-width date and time segment parsers.
//!
//! Shapes are matched by byte position, mirroring how the grammar
//! defines them: separators at fixed offsets, everything else validated
//! later as a decimal. Match order matters: the eight-byte `YYYY-DDD`
//! shape must win over `YYYYMMDD`.

use super::Component;
use crate::core::{Bound, Unit};
use crate::error::{Error, Result};

/// Parses a fixed-width date segment into components.
///
/// Accepted shapes: `YYYY-DDD`, `YYYY-MM-DD`, `YYYYDDD`, `YYYYMMDD`.
/// Days are bounded by 366 in the ordinal-day shapes and 31 in the
/// calendar shapes; months by 12.
///
/// ## Errors
///
/// Any other shape is [`Error::MalformedDateSegment`].
pub(crate) fn parse_date(segment: &str) -> Result<Vec<Component>> {
    if !segment.is_ascii() {
        return Err(Error::MalformedDateSegment(segment.to_string()));
    }
    let components = match segment.as_bytes() {
        // YYYY-DDD
        [_, _, _, _, b'-', _, _, _] => vec![
            Component::new(&segment[0..4], Unit::Years, Bound::Unbounded),
            Component::new(&segment[5..8], Unit::Days, Bound::Inclusive(366)),
        ],
        // YYYY-MM-DD
        [_, _, _, _, b'-', _, _, b'-', _, _] => vec![
            Component::new(&segment[0..4], Unit::Years, Bound::Unbounded),
            Component::new(&segment[5..7], Unit::Months, Bound::Inclusive(12)),
            Component::new(&segment[8..10], Unit::Days, Bound::Inclusive(31)),
        ],
        // YYYYDDD
        [_, _, _, _, _, _, _] => vec![
            Component::new(&segment[0..4], Unit::Years, Bound::Unbounded),
            Component::new(&segment[4..7], Unit::Days, Bound::Inclusive(366)),
        ],
        // YYYYMMDD
        [_, _, _, _, _, _, _, _] => vec![
            Component::new(&segment[0..4], Unit::Years, Bound::Unbounded),
            Component::new(&segment[4..6], Unit::Months, Bound::Inclusive(12)),
            Component::new(&segment[6..8], Unit::Days, Bound::Inclusive(31)),
        ],
        _ => return Err(Error::MalformedDateSegment(segment.to_string())),
    };
    Ok(components)
}

/// Parses a fixed-width time segment into components.
///
/// Accepted shapes: `HH:MM:SS`, `HHMMSS`, each optionally followed by a
/// fraction of one to nine digits on the seconds field. Hours are
/// bounded below 24, minutes and seconds below 60 (exclusive bounds).
///
/// ## Errors
///
/// Any other shape is [`Error::MalformedTimeSegment`].
pub(crate) fn parse_time(segment: &str) -> Result<Vec<Component>> {
    if !segment.is_ascii() {
        return Err(Error::MalformedTimeSegment(segment.to_string()));
    }
    let components = match segment.as_bytes() {
        // HH:MM:SS.f…
        [_, _, b':', _, _, b':', _, _, b'.', fraction @ ..]
            if (1..=9).contains(&fraction.len()) =>
        {
            vec![
                Component::new(&segment[0..2], Unit::Hours, Bound::Exclusive(24)),
                Component::new(&segment[3..5], Unit::Minutes, Bound::Exclusive(60)),
                Component::new(&segment[6..], Unit::Seconds, Bound::Exclusive(60)),
            ]
        }
        // HH:MM:SS
        [_, _, b':', _, _, b':', _, _] => vec![
            Component::new(&segment[0..2], Unit::Hours, Bound::Exclusive(24)),
            Component::new(&segment[3..5], Unit::Minutes, Bound::Exclusive(60)),
            Component::new(&segment[6..8], Unit::Seconds, Bound::Exclusive(60)),
        ],
        // HHMMSS.f…
        [_, _, _, _, _, _, b'.', fraction @ ..] if (1..=9).contains(&fraction.len()) => vec![
            Component::new(&segment[0..2], Unit::Hours, Bound::Exclusive(24)),
            Component::new(&segment[2..4], Unit::Minutes, Bound::Exclusive(60)),
            Component::new(&segment[4..], Unit::Seconds, Bound::Exclusive(60)),
        ],
        // HHMMSS
        [_, _, _, _, _, _] => vec![
            Component::new(&segment[0..2], Unit::Hours, Bound::Exclusive(24)),
            Component::new(&segment[2..4], Unit::Minutes, Bound::Exclusive(60)),
            Component::new(&segment[4..6], Unit::Seconds, Bound::Exclusive(60)),
        ],
        _ => return Err(Error::MalformedTimeSegment(segment.to_string())),
    };
    Ok(components)
}
