use crate::{FileError, file::FormatType, file::Timing};

#[doc = r#"
The `MThd` chunk: the format, the number of tracks and the time division.

```text
4D 54 68 64  00 00 00 06  ff ff  nn nn  dd dd
  "MThd"       length    format tracks division
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MidiFileHeader {
    format_type: FormatType,
    track_count: u16,
    timing: Timing,
}

impl MidiFileHeader {
    /// The size of the header chunk
    pub const SIZE: usize = 14;

    /// Create a new header.
    ///
    /// # Errors
    /// if `track_count` does not fit in 16 bits
    pub fn new(format_type: FormatType, track_count: usize, timing: Timing) -> Result<Self, FileError> {
        let track_count =
            u16::try_from(track_count).map_err(|_| FileError::TooManyTracks(track_count))?;
        Ok(Self {
            format_type,
            track_count,
            timing,
        })
    }

    /// Get the timing props
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Number of tracks the header announces
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// The encoded chunk
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0; Self::SIZE];
        out[..4].copy_from_slice(b"MThd");
        out[4..8].copy_from_slice(&6u32.to_be_bytes());
        out[8..10].copy_from_slice(&u16::from(self.format_type).to_be_bytes());
        out[10..12].copy_from_slice(&self.track_count.to_be_bytes());
        out[12..].copy_from_slice(&self.timing.to_bytes());
        out
    }
}

#[test]
fn header_bytes() {
    use pretty_assertions::assert_eq;

    let header = MidiFileHeader::new(
        FormatType::Simultaneous,
        2,
        Timing::new_ticks_per_quarter_note(1548),
    )
    .unwrap();
    assert_eq!(
        header.to_bytes(),
        [b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 2, 0x06, 0x0C]
    );

    assert_eq!(
        MidiFileHeader::new(FormatType::Simultaneous, 70_000, Timing::new_ticks_per_quarter_note(96)),
        Err(FileError::TooManyTracks(70_000))
    );
}
