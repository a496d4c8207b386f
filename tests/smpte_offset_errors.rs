use midi_compose::prelude::*;
use pretty_assertions::assert_eq;

const ALL_FPS: [SmpteFps; 4] = [
    SmpteFps::TwentyFour,
    SmpteFps::TwentyFive,
    SmpteFps::TwentyNine,
    SmpteFps::Thirty,
];

#[test]
fn test_smpte_offset_invalid_hour() {
    for hour in [24, 25, 31, 100, 255] {
        let result = SmpteOffset::new(SmpteFps::Thirty, hour, 0, 0, 0, 0);
        assert_eq!(result, Err(SmpteError::HourOffset(hour)));
    }
}

#[test]
fn test_smpte_offset_invalid_minute() {
    for minute in [60, 61, 99, 255] {
        let result = SmpteOffset::new(SmpteFps::TwentyFive, 12, minute, 0, 0, 0);
        assert_eq!(result, Err(SmpteError::MinuteOffset(minute)));
    }
}

#[test]
fn test_smpte_offset_invalid_second() {
    for second in [60, 61, 99, 255] {
        let result = SmpteOffset::new(SmpteFps::TwentyFive, 12, 30, second, 0, 0);
        assert_eq!(result, Err(SmpteError::SecondOffset(second)));
    }
}

#[test]
fn test_smpte_offset_invalid_subframe() {
    for subframe in [100, 101, 200, 255] {
        let result = SmpteOffset::new(SmpteFps::TwentyFour, 12, 30, 45, 10, subframe);
        assert_eq!(result, Err(SmpteError::Subframe(subframe)));
    }
}

#[test]
fn test_smpte_offset_boundary_values() {
    let test_cases = [
        (SmpteFps::TwentyFour, 0, 0, 0, 0, 0),
        (SmpteFps::TwentyFour, 23, 0, 0, 0, 0),
        (SmpteFps::TwentyFour, 0, 59, 0, 0, 0),
        (SmpteFps::TwentyFour, 0, 0, 59, 0, 0),
        (SmpteFps::TwentyFour, 0, 0, 0, 0, 99),
        (SmpteFps::TwentyFour, 23, 59, 59, 23, 99),
        (SmpteFps::TwentyFive, 23, 59, 59, 24, 99),
        (SmpteFps::TwentyNine, 23, 59, 59, 29, 99),
        (SmpteFps::Thirty, 23, 59, 59, 29, 99),
    ];

    for (fps, hour, minute, second, frame, subframe) in test_cases {
        let offset = SmpteOffset::new(fps, hour, minute, second, frame, subframe)
            .unwrap_or_else(|e| panic!("{fps:?} {hour}:{minute}:{second}:{frame}.{subframe}: {e}"));
        assert_eq!(offset.fps(), fps);
        assert_eq!(offset.hour(), hour);
        assert_eq!(offset.minute(), minute);
        assert_eq!(offset.second(), second);
        assert_eq!(offset.frame(), frame);
        assert_eq!(offset.subframe(), subframe);
    }
}

#[test]
fn test_smpte_offset_frame_limits() {
    // the first frame number each rate cannot hold
    let test_cases = [
        (SmpteFps::TwentyFour, 24),
        (SmpteFps::TwentyFive, 25),
        (SmpteFps::TwentyNine, 30),
        (SmpteFps::Thirty, 30),
    ];

    for (fps, frame) in test_cases {
        assert!(SmpteOffset::new(fps, 12, 30, 45, frame - 1, 50).is_ok());
        assert_eq!(
            SmpteOffset::new(fps, 12, 30, 45, frame, 50),
            Err(SmpteError::Frame {
                frame,
                fps: fps.as_division()
            })
        );
    }
}

#[test]
fn test_smpte_offset_microsecond_calculation_edge_cases() {
    // just before midnight
    let offset = SmpteOffset::new(SmpteFps::TwentyFour, 23, 59, 59, 23, 99).unwrap();
    let expected = 86_399_000_000.0
        + (23.0 / 24.0) * 1_000_000.0
        + (99.0 / 100.0 / 24.0) * 1_000_000.0;
    assert!((offset.as_micros() - expected).abs() < 1.0);

    let midnight = SmpteOffset::new(SmpteFps::TwentyFive, 0, 0, 0, 0, 0).unwrap();
    assert_eq!(midnight.as_micros(), 0.0);
}

#[test]
fn test_smpte_offset_frame_rate_changes_frame_component() {
    let micros: Vec<f64> = ALL_FPS
        .iter()
        .map(|fps| SmpteOffset::new(*fps, 1, 0, 0, 12, 0).unwrap().as_micros())
        .collect();

    let hour_micros = 3_600_000_000.0;
    let expected = [
        hour_micros + (12.0 / 24.0) * 1_000_000.0,
        hour_micros + (12.0 / 25.0) * 1_000_000.0,
        hour_micros + (12.0 / 29.97) * 1_000_000.0,
        hour_micros + (12.0 / 30.0) * 1_000_000.0,
    ];
    for (got, want) in micros.iter().zip(expected) {
        assert!((got - want).abs() < 1.0, "{got} != {want}");
    }

    assert!((micros[0] - micros[1]).abs() > 1.0);
    assert!((micros[0] - micros[2]).abs() > 1.0);
    assert!((micros[2] - micros[3]).abs() > 1.0);
}

#[test]
fn test_smpte_offset_combined_errors() {
    // fields are checked from the most significant down
    assert_eq!(
        SmpteOffset::new(SmpteFps::Thirty, 24, 60, 60, 30, 100),
        Err(SmpteError::HourOffset(24))
    );
    assert_eq!(
        SmpteOffset::new(SmpteFps::Thirty, 23, 60, 60, 30, 100),
        Err(SmpteError::MinuteOffset(60))
    );
    assert_eq!(
        SmpteOffset::new(SmpteFps::Thirty, 23, 59, 60, 30, 100),
        Err(SmpteError::SecondOffset(60))
    );
    assert_eq!(
        SmpteOffset::new(SmpteFps::Thirty, 23, 59, 59, 30, 100),
        Err(SmpteError::Frame { frame: 30, fps: 30 })
    );
}

#[test]
fn test_smpte_offset_bit_manipulation_edge_cases() {
    for (rate, fps) in ALL_FPS.into_iter().enumerate() {
        for hour in [0, 1, 15, 16, 23] {
            let offset = SmpteOffset::new(fps, hour, 0, 0, 0, 0).unwrap();
            let first = offset.to_bytes()[0];
            assert_eq!(first & 0x80, 0, "the top bit is always clear");
            assert_eq!((first >> 5) as usize, rate);
            assert_eq!(first & 0x1F, hour);
        }
    }
}

#[test]
fn test_smpte_offset_drop_frame_precision() {
    let fps = SmpteFps::TwentyNine;
    assert!((fps.as_f64() - 29.97).abs() < 0.001);
    assert_eq!(fps.as_division(), 30);

    // 29 frames at 29.97 fps take a little longer than 29 frames at 30 fps
    let drop = SmpteOffset::new(fps, 0, 0, 0, 29, 0).unwrap();
    let non_drop = SmpteOffset::new(SmpteFps::Thirty, 0, 0, 0, 29, 0).unwrap();
    assert!(drop.as_micros() > non_drop.as_micros());
    assert!((drop.as_micros() - 29.0 * 1_001_000.0 / 30.0).abs() < 1.0);
}

#[test]
fn test_smpte_offset_error_surfaces_through_crate_error() {
    let err: EncodeError = SmpteOffset::new(SmpteFps::TwentyFour, 0, 0, 0, 0, 100)
        .unwrap_err()
        .into();
    assert_eq!(err, EncodeError::Smpte(SmpteError::Subframe(100)));
}
