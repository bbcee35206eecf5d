//! Round-trip tests: formatting a parsed duration must reparse to an
//! equal value. The text itself is not required to survive (fixed-width
//! input reformats in designator form).

use crate::Duration;

fn round_trip(input: &str) -> Result<(), String> {
    let first: Duration = input
        .parse()
        .map_err(|e| format!("first parse failed: {e}"))?;

    let formatted = first.to_string();

    let second: Duration = formatted
        .parse()
        .map_err(|e| format!("reparse of '{formatted}' failed: {e}"))?;

    if first == second {
        Ok(())
    } else {
        Err(format!(
            "value changed across round-trip: {first:?} -> '{formatted}' -> {second:?}"
        ))
    }
}

#[test]
fn designator_forms_round_trip() {
    for input in [
        "P0D",
        "P3D",
        "P3DT1H",
        "P0DT1H20M",
        "P1Y2M3DT4H5M6S",
        "P1W",
        "P1.5W",
        "P1WT1H",
        "P1W1D",
        "PT1.5S",
        "P2DT0.5H",
        "PT0,01S",
        "P1.01DT1S",
        "P10.0DT12H",
        "PT0.000001S",
    ] {
        round_trip(input).unwrap();
    }
}

#[test]
fn fixed_width_forms_round_trip() {
    for input in [
        "P0000000",
        "P0000360",
        "P00000004",
        "P0000-00-05",
        "P0000-366",
        "P0000-00-00T01:02:03",
        "PT040506",
        "PT04:05:06",
        "PT01:01:01.01",
        "PT131211.10",
        "PT23:59:59.9",
        "PT00:00:00.001",
    ] {
        round_trip(input).unwrap();
    }
}

#[test]
fn equivalent_encodings_reduce_to_one_value() {
    let from_designators: Duration = "PT4H5M6S".parse().unwrap();
    let from_separated: Duration = "PT04:05:06".parse().unwrap();
    let from_compact: Duration = "PT040506".parse().unwrap();
    assert_eq!(from_designators, from_separated);
    assert_eq!(from_separated, from_compact);
}

#[test]
fn zero_encodings_format_as_p0d() {
    for input in ["P0D", "PT0S", "P0Y", "P0000000", "P0000000T000000"] {
        let duration: Duration = input.parse().unwrap();
        assert_eq!(duration.to_string(), "P0D", "{input}");
    }
}
