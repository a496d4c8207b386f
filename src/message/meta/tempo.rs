/// The length of a quarter note, in microseconds.
///
/// Written as three big-endian bytes, so only the lower 24 bits are kept.
/// The default, 500 000 µs, is 120 beats per minute.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Tempo {
    /// The largest representable tempo value
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Create a tempo from microseconds per quarter note, masked to 24 bits
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        Self(micros_per_quarter_note & Self::MAX)
    }

    /// Create a tempo from beats per minute.
    ///
    /// A `bpm` of zero yields the slowest tempo.
    pub const fn from_bpm(bpm: u32) -> Self {
        if bpm == 0 {
            return Self(Self::MAX);
        }
        Self::new(60_000_000 / bpm)
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// The three payload bytes
    pub const fn to_bytes(&self) -> [u8; 3] {
        let [_, a, b, c] = self.0.to_be_bytes();
        [a, b, c]
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self(500_000)
    }
}

#[test]
fn tempo_masks_to_24_bits() {
    assert_eq!(Tempo::new(1548).to_bytes(), [0x00, 0x06, 0x0C]);
    assert_eq!(Tempo::new(0x0123_4567).to_bytes(), [0x23, 0x45, 0x67]);
    assert_eq!(Tempo::from_bpm(120), Tempo::default());
}
