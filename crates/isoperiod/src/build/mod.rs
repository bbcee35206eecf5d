//! Canonical ISO 8601 serialization for durations.
//!
//! Formatting then reparsing any parseable duration yields an equal
//! value; the text itself is not necessarily preserved (`PT01:02:03`
//! formats as `PT1H2M3S`).

use crate::core::Duration;

/// Renders the canonical designator-form text for a duration.
///
/// The zero duration is exactly `P0D`. Otherwise each non-zero field is
/// emitted in Y/M/W/D order, then `T` and H/M/S if any time field is
/// non-zero.
#[expect(
    clippy::float_cmp,
    reason = "fields default to exactly 0.0 and zero fields are omitted"
)]
pub(crate) fn format_duration(duration: &Duration) -> String {
    if duration.is_zero() {
        return "P0D".to_string();
    }

    let mut text = String::from("P");
    for (value, designator) in [
        (duration.years, 'Y'),
        (duration.months, 'M'),
        (duration.weeks, 'W'),
        (duration.days, 'D'),
    ] {
        if value != 0.0 {
            text.push_str(&format_quantity(value));
            text.push(designator);
        }
    }

    let time = [
        (duration.hours, 'H'),
        (duration.minutes, 'M'),
        (duration.seconds, 'S'),
    ];
    if time.iter().any(|&(value, _)| value != 0.0) {
        text.push('T');
        for (value, designator) in time {
            if value != 0.0 {
                text.push_str(&format_quantity(value));
                text.push(designator);
            }
        }
    }
    text
}

/// Fixed-point with six decimal digits, trailing zeros stripped, then a
/// trailing separator stripped: `1.0005` → `"1.0005"`, `10.0` → `"10"`.
fn format_quantity(value: f64) -> String {
    format!("{value:.6}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
