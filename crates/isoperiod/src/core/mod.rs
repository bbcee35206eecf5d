//! Core value types for ISO 8601 durations and intervals.
//!
//! These types are designed for:
//! - Round-trip fidelity: formatting a parsed duration reparses to an
//!   equal value
//! - Immutability: every operation returns a new value
//! - Type safety: the unit grammar is a closed sum matched exhaustively

mod duration;
mod interval;
mod timestamp;
mod unit;

pub use duration::Duration;
pub use interval::Interval;
pub use timestamp::Timestamp;
pub use unit::{Bound, Segment, Unit};

pub(crate) use unit::{DATE_DESIGNATORS, TIME_DESIGNATORS};
