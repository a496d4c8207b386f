#![doc = r#"
SMPTE frame rates

A file can count its delta-times in subdivisions of SMPTE frames instead of
quarter notes. Only the four frame rates below can be written:
- 24 fps: film
- 25 fps: PAL/SECAM video
- 29.97 fps: NTSC color video ("drop frame")
- 30 fps: NTSC black and white video
"#]

/// The possible FPS (Frames Per Second) for MIDI files and SMPTE offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second
    TwentyFour,
    /// 25 frames per second
    TwentyFive,
    /// 29.97 frames per second (30000/1001), drop-frame
    TwentyNine,
    /// 30 frames per second
    Thirty,
}

impl SmpteFps {
    /// The nominal frame rate. Drop-frame 29.97 fps counts 30 frames per second.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 30,
            Self::Thirty => 30,
        }
    }

    /// The actual frame rate, including the fractional drop-frame rate
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
        }
    }

    /// The high byte of a SMPTE time division: the negated rate in two's complement
    pub const fn header_byte(&self) -> u8 {
        let rate: i8 = match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 29,
            Self::Thirty => 30,
        };
        (-rate) as u8
    }
}

/// 29.97002997... fps
const DROP_FRAME: f64 = 30_000. / 1001.;

#[test]
fn header_bytes_are_negated_rates() {
    assert_eq!(SmpteFps::TwentyFour.header_byte(), 0xE8);
    assert_eq!(SmpteFps::TwentyFive.header_byte(), 0xE7);
    assert_eq!(SmpteFps::TwentyNine.header_byte(), 0xE3);
    assert_eq!(SmpteFps::Thirty.header_byte(), 0xE2);
}
