#![doc = r#"
MIDI's variable-length quantity

Delta-times and the lengths of meta and system exclusive payloads are written
as variable-length quantities: big-endian groups of 7 bits, where the most
significant bit of every byte but the last is set.

```text
value        bytes
0x00000000   00
0x00000040   40
0x0000007F   7F
0x00000080   81 00
0x00002000   C0 00
0x00003FFF   FF 7F
0x00100000   C0 80 00
0x0FFFFFFF   FF FF FF 7F
```

At most four bytes are allowed, so values are limited to 28 bits. Values
above [`VarLength::MAX`] are rejected with [`EncodeError::VarLength`].
"#]

use core::fmt;

use crate::EncodeError;

/// The most bytes a variable-length quantity may occupy
pub const MAX_BYTES: usize = 4;

/// A canonically encoded variable-length quantity.
///
/// The encoded bytes are computed once when the value is created.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarLength {
    value: u32,
    bytes: [u8; MAX_BYTES],
    len: u8,
}

impl VarLength {
    /// The largest value representable in four bytes
    pub const MAX: u32 = 0x0FFF_FFFF;

    /// Zero, encoded as a single `0x00` byte
    pub const ZERO: Self = Self::new_unchecked(0);

    /// Encode a value.
    ///
    /// # Errors
    /// if `value` is greater than [`VarLength::MAX`]
    pub const fn new(value: u32) -> Result<Self, EncodeError> {
        if value > Self::MAX {
            return Err(EncodeError::VarLength(value as u64));
        }
        Ok(Self::new_unchecked(value))
    }

    /// Encode a length or tick count held in a wider integer.
    pub fn from_u64(value: u64) -> Result<Self, EncodeError> {
        match u32::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self::new_unchecked(v)),
            _ => Err(EncodeError::VarLength(value)),
        }
    }

    /// Encode the lower 28 bits of `value`.
    pub(crate) const fn new_unchecked(value: u32) -> Self {
        let value = value & Self::MAX;
        let mut bytes = [0; MAX_BYTES];
        let mut len = 1;
        let mut rest = value >> 7;
        while rest > 0 {
            len += 1;
            rest >>= 7;
        }

        let mut i = 0;
        while i < len {
            let shift = 7 * (len - 1 - i);
            let mut byte = ((value >> shift) & 0x7F) as u8;
            if i + 1 < len {
                byte |= 0x80;
            }
            bytes[i] = byte;
            i += 1;
        }

        Self {
            value,
            bytes,
            len: len as u8,
        }
    }

    /// The value this quantity represents
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The encoded bytes, 1 to 4 long
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of encoded bytes
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl Default for VarLength {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for VarLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VarLength")
            .field(&self.value)
            .field(&self.as_bytes())
            .finish()
    }
}

impl TryFrom<u32> for VarLength {
    type Error = EncodeError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<u16> for VarLength {
    fn from(value: u16) -> Self {
        Self::new_unchecked(value as u32)
    }
}

impl From<u8> for VarLength {
    fn from(value: u8) -> Self {
        Self::new_unchecked(value as u32)
    }
}

impl From<VarLength> for u32 {
    fn from(value: VarLength) -> Self {
        value.value
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VarLength {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VarLength {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Encode `value` and append it to `out`.
///
/// # Errors
/// if `value` is greater than [`VarLength::MAX`]
pub fn encode(value: u32, out: &mut alloc::vec::Vec<u8>) -> Result<(), EncodeError> {
    out.extend_from_slice(VarLength::new(value)?.as_bytes());
    Ok(())
}

/// The number of bytes the length field of a `len`-byte payload occupies.
///
/// Lengths too wide for a `u32` report the 4 bytes of the widest field.
pub(crate) fn length_field_len(len: usize) -> usize {
    encoded_len(u32::try_from(len).unwrap_or(u32::MAX))
}

/// Decode a variable-length quantity from the start of `bytes`.
///
/// Reading stops at the first byte without the continuation bit, or after
/// four bytes. Empty input decodes to 0.
pub fn decode(bytes: &[u8]) -> u32 {
    let mut value = 0u32;
    for byte in bytes.iter().take(MAX_BYTES) {
        value = (value << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            break;
        }
    }
    value
}

/// The number of bytes `value` occupies once encoded.
///
/// Values above [`VarLength::MAX`] report the 4 bytes their lower 28 bits
/// would take; [`VarLength::new`] still rejects them.
pub const fn encoded_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        _ => 4,
    }
}

#[test]
fn encode_known_values() {
    use pretty_assertions::assert_eq;

    assert_eq!(VarLength::ZERO.as_bytes(), &[0x00]);
    assert_eq!(VarLength::new(0x40).unwrap().as_bytes(), &[0x40]);
    assert_eq!(VarLength::new(0x7F).unwrap().as_bytes(), &[0x7F]);
    assert_eq!(VarLength::new(0x80).unwrap().as_bytes(), &[0x81, 0x00]);
    assert_eq!(VarLength::new(200).unwrap().as_bytes(), &[0x81, 0x48]);
    assert_eq!(VarLength::new(0x2000).unwrap().as_bytes(), &[0xC0, 0x00]);
    assert_eq!(VarLength::new(0x3FFF).unwrap().as_bytes(), &[0xFF, 0x7F]);
    assert_eq!(
        VarLength::new(0x10_0000).unwrap().as_bytes(),
        &[0xC0, 0x80, 0x00]
    );
    assert_eq!(
        VarLength::new(VarLength::MAX).unwrap().as_bytes(),
        &[0xFF, 0xFF, 0xFF, 0x7F]
    );
}

#[test]
fn reject_values_past_28_bits() {
    assert_eq!(
        VarLength::new(0x1000_0000),
        Err(EncodeError::VarLength(0x1000_0000))
    );
    assert_eq!(
        VarLength::new(u32::MAX),
        Err(EncodeError::VarLength(u32::MAX as u64))
    );
    assert_eq!(
        VarLength::from_u64(1 << 40),
        Err(EncodeError::VarLength(1 << 40))
    );

    let mut out = alloc::vec::Vec::new();
    assert!(encode(0x1000_0000, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn decode_inverts_encode() {
    let boundaries = [
        0,
        1,
        0x7F,
        0x80,
        12345,
        0x3FFF,
        0x4000,
        0x1F_FFFF,
        0x20_0000,
        VarLength::MAX,
    ];
    for value in boundaries {
        let vl = VarLength::new(value).unwrap();
        assert_eq!(decode(vl.as_bytes()), value);
        assert_eq!(vl.len(), encoded_len(value));
        assert_eq!(vl.value(), value);
    }

    // every seventh bit flips the length, walk across all of them
    let mut value = 1u32;
    while value <= VarLength::MAX {
        let vl = VarLength::new(value).unwrap();
        assert_eq!(decode(vl.as_bytes()), value);
        assert_eq!(vl.len(), encoded_len(value));
        value = value * 3 + 1;
    }
}

#[test]
fn decode_stops_at_last_byte() {
    assert_eq!(decode(&[0x81, 0x48, 0x7F]), 200);
    assert_eq!(decode(&[]), 0);
    // four continuation bytes still stop after the fourth
    assert_eq!(decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x01]), 0x0FFF_FFFF);
}

#[test]
fn encoding_is_canonical() {
    for value in [0u32, 0x7F, 0x80, 0x3FFF, 0x4000, VarLength::MAX] {
        let vl = VarLength::new(value).unwrap();
        let bytes = vl.as_bytes();
        // no leading empty continuation byte
        if bytes.len() > 1 {
            assert_ne!(bytes[0], 0x80);
        }
        assert_eq!(bytes[bytes.len() - 1] & 0x80, 0);
    }
}

#[test]
fn length_fields_never_wrap() {
    assert_eq!(length_field_len(0), 1);
    assert_eq!(length_field_len(0x80), 2);
    assert_eq!(length_field_len(u32::MAX as usize), 4);
    assert_eq!(length_field_len(usize::MAX), 4);
    #[cfg(target_pointer_width = "64")]
    assert_eq!(length_field_len(u32::MAX as usize + 1), 4);
}
