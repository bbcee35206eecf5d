//! ISO 8601 duration and interval support (ISO 8601-1 §4.4).
//!
//! This crate parses and formats ISO 8601 duration strings in both the
//! designator form (`P1Y2M3DT4H5M6S`, `P1W`) and the fixed-width calendar
//! form (`P0001-02-03T04:05:06`), and applies parsed durations to civil
//! timestamps with calendar-aware year/month rollover and DST-correct
//! time arithmetic. Intervals (`start/end`, `start/duration`,
//! `duration/end`) compose the two.
//!
//! ```
//! use isoperiod::{Duration, Interval};
//!
//! let duration: Duration = "P3DT1H".parse()?;
//! assert_eq!(duration.days, 3.0);
//! assert_eq!(duration.to_string(), "P3DT1H");
//!
//! let interval: Interval = "2000-01-01T00:00:00/P1D".parse()?;
//! assert_eq!(interval.end.to_string(), "2000-01-02T00:00:00");
//! # Ok::<(), isoperiod::Error>(())
//! ```

mod arith;
mod build;
mod core;
pub mod error;
mod parse;

#[cfg(test)]
mod tests;

pub use self::core::{Bound, Duration, Interval, Segment, Timestamp, Unit};
pub use self::error::{Error, Result};
