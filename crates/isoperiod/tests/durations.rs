//! Full-corpus duration parsing tests: every accepted form, every
//! rejection with its exact reason string.

use isoperiod::Duration;

const ZERO: Duration = Duration::ZERO;

#[test_log::test]
fn valid_durations() {
    let cases = [
        // empty durations
        ("P0D", ZERO),
        ("P0Y", ZERO),
        ("PT0S", ZERO),
        // designator-format durations
        ("P3D", Duration { days: 3.0, ..ZERO }),
        (
            "P3DT1H",
            Duration {
                days: 3.0,
                hours: 1.0,
                ..ZERO
            },
        ),
        (
            "P0DT1H20M",
            Duration {
                hours: 1.0,
                minutes: 20.0,
                ..ZERO
            },
        ),
        (
            "P0Y0DT1H20M",
            Duration {
                hours: 1.0,
                minutes: 20.0,
                ..ZERO
            },
        ),
        // week durations
        ("P1W", Duration { weeks: 1.0, ..ZERO }),
        ("P3W", Duration { weeks: 3.0, ..ZERO }),
        // decimal measurements
        (
            "PT1.5S",
            Duration {
                seconds: 1.5,
                ..ZERO
            },
        ),
        (
            "P2DT0.5H",
            Duration {
                days: 2.0,
                hours: 0.5,
                ..ZERO
            },
        ),
        (
            "PT0,01S",
            Duration {
                seconds: 0.01,
                ..ZERO
            },
        ),
        (
            "PT01:01:01.01",
            Duration {
                hours: 1.0,
                minutes: 1.0,
                seconds: 1.01,
                ..ZERO
            },
        ),
        (
            "PT131211.10",
            Duration {
                hours: 13.0,
                minutes: 12.0,
                seconds: 11.1,
                ..ZERO
            },
        ),
        ("P1.5W", Duration { weeks: 1.5, ..ZERO }),
        (
            "P1.01D",
            Duration {
                days: 1.01,
                ..ZERO
            },
        ),
        (
            "P1.01DT1S",
            Duration {
                days: 1.01,
                seconds: 1.0,
                ..ZERO
            },
        ),
        (
            "P10.0DT12H",
            Duration {
                days: 10.0,
                hours: 12.0,
                ..ZERO
            },
        ),
        // fixed-width date-format durations
        ("P0000000", ZERO),
        ("P0000000T000000", ZERO),
        (
            "P0000360",
            Duration {
                days: 360.0,
                ..ZERO
            },
        ),
        ("P00000004", Duration { days: 4.0, ..ZERO }),
        ("P0000-00-05", Duration { days: 5.0, ..ZERO }),
        (
            "P0000-00-00T01:02:03",
            Duration {
                hours: 1.0,
                minutes: 2.0,
                seconds: 3.0,
                ..ZERO
            },
        ),
        (
            "PT040506",
            Duration {
                hours: 4.0,
                minutes: 5.0,
                seconds: 6.0,
                ..ZERO
            },
        ),
        (
            "PT04:05:06",
            Duration {
                hours: 4.0,
                minutes: 5.0,
                seconds: 6.0,
                ..ZERO
            },
        ),
        (
            "PT00:00:00.001",
            Duration {
                seconds: 0.001,
                ..ZERO
            },
        ),
        // calendar edge cases
        (
            "P0000-366",
            Duration {
                days: 366.0,
                ..ZERO
            },
        ),
        (
            "PT23:59:59",
            Duration {
                hours: 23.0,
                minutes: 59.0,
                seconds: 59.0,
                ..ZERO
            },
        ),
        (
            "PT23:59:59.9",
            Duration {
                hours: 23.0,
                minutes: 59.0,
                seconds: 59.9,
                ..ZERO
            },
        ),
        // sub-microsecond precision
        (
            "P0.000001D",
            Duration {
                days: 0.000_001,
                ..ZERO
            },
        ),
        (
            "PT0.000001S",
            Duration {
                seconds: 0.000_001,
                ..ZERO
            },
        ),
        // mixing week units with other units
        (
            "P1WT1H",
            Duration {
                weeks: 1.0,
                hours: 1.0,
                ..ZERO
            },
        ),
        ("P0Y1W", Duration { weeks: 1.0, ..ZERO }),
        (
            "P1W1D",
            Duration {
                weeks: 1.0,
                days: 1.0,
                ..ZERO
            },
        ),
    ];

    for (text, expected) in cases {
        let parsed: Duration = text.parse().unwrap_or_else(|e| panic!("{text}: {e}"));
        assert_eq!(parsed, expected, "{text}");
    }
}

#[test_log::test]
fn invalid_durations() {
    let cases = [
        // incomplete strings
        ("", "durations must begin with the character 'P'"),
        ("T", "durations must begin with the character 'P'"),
        ("P", "no measurements found"),
        ("PT", "no measurements found"),
        ("PPT", "unexpected character 'P'"),
        ("PTT", "unexpected character 'T'"),
        ("PTP", "unexpected character 'P'"),
        // incomplete measurements
        ("P0YD", "unable to parse '' as a positive decimal"),
        // repeated designators
        ("P1DT1H3H1M", "unexpected character 'H'"),
        ("P1D3D", "unexpected character 'D'"),
        ("P0MT1HP1D", "unexpected character 'P'"),
        // incorrectly-ordered designators
        ("PT5S1M", "unexpected character 'M'"),
        ("P0DT5M1H", "unexpected character 'H'"),
        // invalid units within segment
        ("PT1DS", "unexpected character 'D'"),
        ("P1HT0S", "unexpected character 'H'"),
        // incorrect quantities
        ("PT0.0.0S", "unable to parse '0.0.0' as a positive decimal"),
        ("P1.,0D", "unable to parse '1.,0' as a positive decimal"),
        // fixed-width durations exceeding calendar limits
        ("P0000-367", "days value of 367 exceeds range [0..366]"),
        ("P0000-400", "days value of 400 exceeds range [0..366]"),
        ("P0000-13-00", "months value of 13 exceeds range [0..12]"),
        ("PT12:60:00", "minutes value of 60 exceeds range [0..60)"),
        ("PT12:61:00", "minutes value of 61 exceeds range [0..60)"),
        ("PT15:25:60", "seconds value of 60 exceeds range [0..60)"),
        ("PT24:00:00", "hours value of 24 exceeds range [0..24)"),
        // invalid fixed-width shapes
        ("P0000-1-0", "unable to parse '1-0' as a positive decimal"),
        ("PT1:2:3", "unable to parse '1:2:3' into time components"),
        ("PT01:0203", "unable to parse '01:0203' into time components"),
        ("PT01", "unable to parse '01' into time components"),
        ("PT01:02:3.4", "unable to parse '01:02:3.4' into time components"),
        ("P0000y00m00", "unable to parse '0000y00m00' into date components"),
        // decimals must have a non-empty integer part
        ("PT.5S", "unable to parse '.5' as a positive decimal"),
        ("P1M.1D", "unable to parse '.1' as a positive decimal"),
        // segment repetition
        ("PT5MT5S", "unexpected character 'T'"),
        ("P1W2W", "unexpected character 'W'"),
        // segments out-of-order
        ("P1DT5S2W", "unexpected character 'W'"),
        // unexpected characters within fixed-width components
        ("PT01:-2:03", "unable to parse '-2' as a positive decimal"),
        ("P000000.1", "unable to parse '.1' as a positive decimal"),
        ("PT000000--", "unable to parse '000000--' into time components"),
        ("PT00:00:00,-", "unable to parse '00:00:00,-' into time components"),
        // negative designator-separated values
        ("P-1DT0S", "unexpected character '-'"),
        ("P0M-2D", "unexpected character '-'"),
        ("P0DT1M-3S", "unexpected character '-'"),
        // positive designator-separated values
        ("P+1DT0S", "unexpected character '+'"),
        ("P0M+2D", "unexpected character '+'"),
        ("P0DT1M+3S", "unexpected character '+'"),
        // scientific notation in designated values
        ("P1.0e+1D", "unexpected character 'e'"),
        ("P10.0E-1D", "unexpected character 'E'"),
        // unit names are not designators
        ("P1years1M", "unexpected character 'y'"),
        // components with missing designators
        ("PT1H2", "unable to parse '1H2' into time components"),
        ("P20D4T", "expected a unit designator after '4'"),
        ("P1D5T", "expected a unit designator after '5'"),
    ];

    for (text, expected_reason) in cases {
        let error = text
            .parse::<Duration>()
            .expect_err(text)
            .to_string();
        assert!(
            error.contains(expected_reason),
            "{text}: expected {expected_reason:?} in {error:?}"
        );
    }
}
