#![doc = r#"
Byte-sized values found inside channel voice messages
"#]

use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::EncodeError;

/// A 7-bit value: the payload bytes of every channel voice message.
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// Create a new data byte.
    ///
    /// # Errors
    /// if the leading bit is set (the byte is > 127)
    pub const fn new(byte: u8) -> Result<Self, EncodeError> {
        if byte > 0x7F {
            return Err(EncodeError::DataByte(byte));
        }
        Ok(Self(byte))
    }

    /// Create a data byte from the lower 7 bits of `byte`
    pub const fn new_unchecked(byte: u8) -> Self {
        Self(byte & 0x7F)
    }

    /// The value of the byte
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DataByte {
    type Error = EncodeError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DataByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[doc = r#"
The velocity of a key press or release.

The scheduler presses and releases at full velocity ([`Velocity::MAX`]).
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity(DataByte);

impl Velocity {
    /// Velocity 0. A Note On with this velocity is written without its second data byte.
    pub const ZERO: Self = Self(DataByte(0));
    /// Velocity 127
    pub const MAX: Self = Self(DataByte(0x7F));

    /// Create a new velocity
    ///
    /// # Errors
    /// if `velocity` > 127
    pub const fn new(velocity: u8) -> Result<Self, EncodeError> {
        match DataByte::new(velocity) {
            Ok(byte) => Ok(Self(byte)),
            Err(e) => Err(e),
        }
    }

    /// The velocity as a byte
    #[inline]
    pub const fn byte(&self) -> u8 {
        self.0.0
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::MAX
    }
}

#[doc = r#"
One of the 16 MIDI channels.

Channels are written into the low nibble of a status byte. `Channel::One`
is written as `0`.
"#]
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// Every channel, in order
    pub const ALL: [Channel; 16] = {
        use Channel::*;
        [
            One, Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Eleven, Twelve, Thirteen,
            Fourteen, Fifteen, Sixteen,
        ]
    };

    /// Identify the channel from the lower 4 bits of `byte`.
    ///
    /// Out of range values are masked rather than rejected.
    pub const fn from_bits(byte: u8) -> Self {
        Self::ALL[(byte & 0x0F) as usize]
    }

    /// The value written into a status byte (0-15)
    #[inline]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::One
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_byte() + 1)
    }
}

#[test]
fn channels_mask_to_four_bits() {
    use pretty_assertions::assert_eq;

    assert_eq!(Channel::from_bits(0), Channel::One);
    assert_eq!(Channel::from_bits(15), Channel::Sixteen);
    assert_eq!(Channel::from_bits(0x13), Channel::Four);
    assert_eq!(Channel::try_from(16u8).ok(), None);
    assert_eq!(u8::from(Channel::Ten), 9);
}

#[test]
fn data_bytes_reject_high_bit() {
    assert_eq!(DataByte::new(127).map(|b| b.value()), Ok(127));
    assert_eq!(DataByte::new(128), Err(EncodeError::DataByte(128)));
    assert_eq!(DataByte::new_unchecked(0xFF).value(), 0x7F);
    assert_eq!(Velocity::new(200), Err(EncodeError::DataByte(200)));
    assert_eq!(Velocity::default().byte(), 127);
}
