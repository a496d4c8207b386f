/// The time signature meta payload: `nn dd cc bb`.
///
/// The four bytes are written exactly as given. By MIDI convention the
/// denominator is a power of two exponent (2 means a quarter note), but no
/// conversion is applied here.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    /// Beats per bar
    pub numerator: u8,
    /// The beat unit byte
    pub denominator: u8,
    /// MIDI clocks per metronome click
    pub clocks_per_click: u8,
    /// Notated 32nd notes per MIDI quarter note
    pub thirty_seconds_per_quarter: u8,
}

impl TimeSignature {
    /// Create a new time signature
    pub const fn new(
        numerator: u8,
        denominator: u8,
        clocks_per_click: u8,
        thirty_seconds_per_quarter: u8,
    ) -> Self {
        Self {
            numerator,
            denominator,
            clocks_per_click,
            thirty_seconds_per_quarter,
        }
    }

    /// The four payload bytes
    pub const fn to_bytes(&self) -> [u8; 4] {
        [
            self.numerator,
            self.denominator,
            self.clocks_per_click,
            self.thirty_seconds_per_quarter,
        ]
    }
}

/// `4, 4, 24, 8`, what every scheduled track starts with
impl Default for TimeSignature {
    fn default() -> Self {
        Self::new(4, 4, 24, 8)
    }
}

/// The key signature meta payload: `sf mi`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    /// Sharps when positive, flats when negative
    pub sharps_flats: i8,
    /// Minor key when true
    pub minor: bool,
}

impl KeySignature {
    /// Create a new key signature
    pub const fn new(sharps_flats: i8, minor: bool) -> Self {
        Self {
            sharps_flats,
            minor,
        }
    }

    /// The two payload bytes
    pub const fn to_bytes(&self) -> [u8; 2] {
        [self.sharps_flats as u8, self.minor as u8]
    }
}

#[test]
fn key_signature_bytes() {
    assert_eq!(KeySignature::new(-2, true).to_bytes(), [0xFE, 0x01]);
    assert_eq!(KeySignature::new(3, false).to_bytes(), [0x03, 0x00]);
    assert_eq!(TimeSignature::default().to_bytes(), [4, 4, 24, 8]);
}
