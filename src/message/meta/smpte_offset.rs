#![doc = r#"
SMPTE Offset, the time code at which a track should start

When a file is synchronized with video or film, the offset tells a
sequencer where in absolute time the track begins, rather than at the start
of the sequence.

# Format

```text
0rrhhhhh  mm  ss  ff  sf
```
- `rr`: frame rate (`00` 24, `01` 25, `10` 29.97, `11` 30 fps)
- `hhhhh`: hours (0-23)
- `mm`, `ss`: minutes and seconds (0-59)
- `ff`: frame within the second
- `sf`: hundredths of a frame (0-99)
"#]

use crate::{SmpteError, file::SmpteFps};

/// A track's starting position in SMPTE time code.
///
/// Fields are validated on construction, so an offset always encodes to
/// five well-formed bytes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    fps: SmpteFps,
    hour: u8,
    minute: u8,
    second: u8,
    frame: u8,
    subframe: u8,
}

impl SmpteOffset {
    /// Create a new offset.
    ///
    /// # Errors
    /// - `SmpteError::HourOffset` if hours > 23
    /// - `SmpteError::MinuteOffset` if minutes > 59
    /// - `SmpteError::SecondOffset` if seconds > 59
    /// - `SmpteError::Frame` if the frame is not lower than the nominal frame rate
    /// - `SmpteError::Subframe` if fractional frames > 99
    pub const fn new(
        fps: SmpteFps,
        hour: u8,
        minute: u8,
        second: u8,
        frame: u8,
        subframe: u8,
    ) -> Result<Self, SmpteError> {
        if hour > 23 {
            return Err(SmpteError::HourOffset(hour));
        }
        if minute > 59 {
            return Err(SmpteError::MinuteOffset(minute));
        }
        if second > 59 {
            return Err(SmpteError::SecondOffset(second));
        }
        if frame >= fps.as_division() {
            return Err(SmpteError::Frame {
                frame,
                fps: fps.as_division(),
            });
        }
        if subframe > 99 {
            return Err(SmpteError::Subframe(subframe));
        }
        Ok(Self {
            fps,
            hour,
            minute,
            second,
            frame,
            subframe,
        })
    }

    /// The frame rate of this offset
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }
    /// Hours (0-23)
    pub const fn hour(&self) -> u8 {
        self.hour
    }
    /// Minutes (0-59)
    pub const fn minute(&self) -> u8 {
        self.minute
    }
    /// Seconds (0-59)
    pub const fn second(&self) -> u8 {
        self.second
    }
    /// Frame within the second
    pub const fn frame(&self) -> u8 {
        self.frame
    }
    /// Hundredths of a frame
    pub const fn subframe(&self) -> u8 {
        self.subframe
    }

    /// Convert this offset to microseconds, using the offset's own frame rate.
    pub const fn as_micros(&self) -> f64 {
        ((((self.hour as u64 * 3600) + (self.minute as u64) * 60 + self.second as u64) * 1_000_000)
            as f64)
            + ((self.frame as u64) * 1_000_000) as f64 / self.fps.as_f64()
            + ((self.subframe as u32) * 10_000) as f64 / self.fps.as_f64()
    }

    /// The five payload bytes
    pub const fn to_bytes(&self) -> [u8; 5] {
        let rate = match self.fps {
            SmpteFps::TwentyFour => 0,
            SmpteFps::TwentyFive => 1,
            SmpteFps::TwentyNine => 2,
            SmpteFps::Thirty => 3,
        };
        [
            (rate << 5) | self.hour,
            self.minute,
            self.second,
            self.frame,
            self.subframe,
        ]
    }
}

#[test]
fn write_smpte_offset() {
    use pretty_assertions::assert_eq;

    let offset = SmpteOffset::new(SmpteFps::TwentyNine, 1, 23, 45, 12, 34).unwrap();
    assert_eq!(offset.to_bytes(), [0x41, 0x17, 0x2D, 0x0C, 0x22]);

    let offset = SmpteOffset::new(SmpteFps::Thirty, 23, 0, 0, 0, 0).unwrap();
    assert_eq!(offset.to_bytes()[0], 0x77);
}

#[test]
fn reject_invalid_smpte_offset() {
    use pretty_assertions::assert_eq;

    let err = SmpteOffset::new(SmpteFps::TwentyNine, 31, 23, 45, 12, 34).unwrap_err();
    assert_eq!(err, SmpteError::HourOffset(31));

    let err = SmpteOffset::new(SmpteFps::TwentyNine, 1, 80, 45, 12, 34).unwrap_err();
    assert_eq!(err, SmpteError::MinuteOffset(80));

    let err = SmpteOffset::new(SmpteFps::TwentyFour, 0, 0, 0, 24, 0).unwrap_err();
    assert_eq!(err, SmpteError::Frame { frame: 24, fps: 24 });

    let err = SmpteOffset::new(SmpteFps::TwentyFive, 0, 0, 0, 0, 100).unwrap_err();
    assert_eq!(err, SmpteError::Subframe(100));
}

#[test]
fn smpte_offset_in_micros() {
    let offset = SmpteOffset::new(SmpteFps::TwentyFive, 0, 1, 2, 5, 50).unwrap();
    // 62 s + 5.5 frames at 25 fps
    assert_eq!(offset.as_micros(), 62_220_000.0);
}
