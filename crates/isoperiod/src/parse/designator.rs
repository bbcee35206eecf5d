//! Designator-separated duration scanning.
//!
//! A single left-to-right sweep over the text after `P`. Measurements
//! must appear largest-to-smallest within their segment, enforced by a
//! cursor over the segment's ordered designator table; `T` switches the
//! date segment (Y, M, W, D) to the time segment (H, M, S). Repeated or
//! out-of-order designators fail because the cursor never moves
//! backwards.

use super::Component;
use crate::core::{Bound, Segment, Unit, DATE_DESIGNATORS, TIME_DESIGNATORS};
use crate::error::{Error, Result};

/// Cursor over one segment's ordered designator table. Consuming a
/// designator moves past it, so repeats and out-of-order designators
/// fail to match.
struct Cursor {
    table: &'static [(char, Unit)],
    next: usize,
}

impl Cursor {
    fn new(table: &'static [(char, Unit)]) -> Self {
        Self { table, next: 0 }
    }

    fn consume(&mut self, designator: char) -> Option<Unit> {
        let offset = self.table[self.next..]
            .iter()
            .position(|&(c, _)| c == designator)?;
        let (_, unit) = self.table[self.next + offset];
        self.next += offset + 1;
        Some(unit)
    }

    fn consumed_any(&self) -> bool {
        self.next > 0
    }
}

/// Sweeps the designator-form text after the leading `P`.
///
/// ## Errors
///
/// Fails on out-of-order or repeated designators, a dangling value
/// before `T`, a repeated `T`, or an empty segment.
pub(crate) fn scan(text: &str) -> Result<Vec<Component>> {
    let mut context = Segment::Date;
    let mut cursor = Cursor::new(&DATE_DESIGNATORS);
    let mut value = String::new();
    let mut components = Vec::new();

    for c in text.chars() {
        match c {
            '0'..='9' | '.' | ',' => value.push(c),
            'T' => {
                if context == Segment::Time {
                    return Err(Error::UnexpectedCharacter('T'));
                }
                if !value.is_empty() {
                    return Err(Error::MissingDesignator(value));
                }
                context = Segment::Time;
                cursor = Cursor::new(&TIME_DESIGNATORS);
            }
            _ => {
                let unit = cursor.consume(c).ok_or(Error::UnexpectedCharacter(c))?;
                components.push(Component::new(
                    std::mem::take(&mut value),
                    unit,
                    Bound::Unbounded,
                ));
            }
        }
    }

    if components.is_empty() || (context == Segment::Time && !cursor.consumed_any()) {
        return Err(Error::NoMeasurements);
    }
    Ok(components)
}
