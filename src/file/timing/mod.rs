mod smpte;
pub use smpte::*;

#[doc = r#"
The time division of a file: what one tick of a delta-time means.

This is either a number of ticks per quarter note, or a number of ticks per
SMPTE frame. It is written as the last two bytes of the header chunk.

```rust
# use midi_compose::prelude::*;
assert_eq!(Timing::new_ticks_per_quarter_note(1548).to_bytes(), [0x06, 0x0C]);
assert_eq!(Timing::new_smpte(SmpteFps::TwentyFive, 40).to_bytes(), [0xE7, 0x28]);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// The file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(TicksPerQuarterNote),

    /// The file's delta times are defined using SMPTE frames
    Smpte(SmpteHeader),
}

impl Timing {
    /// The tickrate per quarter note defines what a "quarter note" means.
    ///
    /// The leading bit of the u16 is disregarded, so 1-32767
    pub const fn new_ticks_per_quarter_note(tpqn: u16) -> Self {
        let [msb, lsb] = (tpqn & 0x7FFF).to_be_bytes();
        Self::TicksPerQuarterNote(TicksPerQuarterNote { inner: [msb, lsb] })
    }

    /// Define the timing in terms of fps and ticks per frame
    pub const fn new_smpte(fps: SmpteFps, ticks_per_frame: u8) -> Self {
        Self::Smpte(SmpteHeader {
            fps,
            ticks_per_frame,
        })
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(t.ticks_per_quarter_note()),
            _ => None,
        }
    }

    /// The two bytes written into the header chunk
    pub const fn to_bytes(&self) -> [u8; 2] {
        match self {
            Self::TicksPerQuarterNote(t) => t.inner,
            Self::Smpte(s) => [s.fps.header_byte(), s.ticks_per_frame],
        }
    }
}

/// A representation of the `tpqn` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicksPerQuarterNote {
    inner: [u8; 2],
}

impl TicksPerQuarterNote {
    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        let v = u16::from_be_bytes(self.inner);
        v & 0x7FFF
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteHeader {
    fps: SmpteFps,
    ticks_per_frame: u8,
}

impl SmpteHeader {
    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}

#[test]
fn ticks_per_quarter_note_drops_leading_bit() {
    let timing = Timing::new_ticks_per_quarter_note(0xFFFF);
    assert_eq!(timing.ticks_per_quarter_note(), Some(0x7FFF));
    assert_eq!(timing.to_bytes(), [0x7F, 0xFF]);
    assert_eq!(Timing::new_smpte(SmpteFps::Thirty, 4).ticks_per_quarter_note(), None);
}
