use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;

use crate::{DataByte, EncodeError, NoteParseError};

#[doc = r#"
A pitch, written as a 7-bit number.

Each value corresponds to some [`Key`] and [`Octave`]. Octaves are counted
from 0, so `Note` `0` is `C0`, `48` is `C4` and `127` is `G10`.

# Example
```rust
# use midi_compose::prelude::*;
let note = Note::from_notation("Bb5");

assert_eq!(note.byte(), 70);
assert_eq!(note.key(), Key::ASharp);
assert_eq!(note.octave(), Octave::new(5));
assert_eq!(note.to_string(), "A#5");
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note(DataByte);

impl Note {
    /// The lowest note, `C0`
    pub const LOWEST: Self = Self(DataByte(0));
    /// The highest note, `G10`
    pub const HIGHEST: Self = Self(DataByte(127));

    /// Create a new note.
    ///
    /// # Errors
    /// if `byte` > 127
    pub const fn from_byte(byte: u8) -> Result<Self, EncodeError> {
        match DataByte::new(byte) {
            Ok(b) => Ok(Self(b)),
            Err(e) => Err(e),
        }
    }

    /// Creates a new note from the lower 7 bits of `byte`
    pub const fn from_byte_unchecked(byte: u8) -> Self {
        Self(DataByte::new_unchecked(byte))
    }

    /// Create a note from a given key and octave
    ///
    /// # Errors
    /// if the note lies above `G10`, since
    /// `G#10` through `B10` are not representable in MIDI.
    pub const fn new(key: Key, octave: Octave) -> Result<Self, EncodeError> {
        let value = octave.value() * 12 + key.semitone();
        Self::from_byte(value)
    }

    /// Parse a note from notation such as `"C4"`, `"f#2"` or `"Bb10"`.
    ///
    /// Malformed notation, or a note outside `C0`-`G10`, yields [`Note::LOWEST`].
    /// Use [`str::parse`] to find out what went wrong instead.
    pub fn from_notation(notation: &str) -> Self {
        notation.parse().unwrap_or_default()
    }

    /// Identifies the key of the note
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_semitone(self.0.0 % 12)
    }

    /// Identifies the octave of the note
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave(self.0.0 / 12)
    }

    /// Returns true if the key of the note is sharp (or flat)
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        self.key().is_sharp()
    }

    /// Returns the underlying byte of the note
    #[inline]
    pub const fn byte(&self) -> u8 {
        self.0.0
    }
}

impl FromStr for Note {
    type Err = NoteParseError;

    /// Parses `<Letter>[#|b]<Octave>`.
    ///
    /// The letter is case-insensitive and octaves range from 0 to 10.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let count = s.chars().count();
        if !(2..=4).contains(&count) {
            return Err(NoteParseError::Length(count));
        }

        let letter = chars.next().ok_or(NoteParseError::Length(0))?;
        let key = Key::from_letter(letter).ok_or(NoteParseError::Letter(letter))?;
        let rest = chars.as_str();

        let (shift, octave) = match rest.chars().next() {
            Some('#') => (1, &rest[1..]),
            Some('b') => (-1, &rest[1..]),
            Some(c) if c.is_ascii_digit() => (0, rest),
            Some(c) => return Err(NoteParseError::Accidental(c)),
            None => return Err(NoteParseError::Octave),
        };

        let octave: u8 = match octave {
            "10" => 10,
            digit if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() => {
                digit.as_bytes()[0] - b'0'
            }
            _ => return Err(NoteParseError::Octave),
        };

        let value = (octave as i16) * 12 + key.semitone() as i16 + shift;
        u8::try_from(value)
            .ok()
            .and_then(|v| Note::from_byte(v).ok())
            .ok_or(NoteParseError::OutOfRange)
    }
}

impl TryFrom<u8> for Note {
    type Error = EncodeError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value)
    }
}

impl From<Note> for u8 {
    fn from(value: Note) -> Self {
        value.byte()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key(), self.octave())
    }
}

impl Add<u8> for Note {
    type Output = Note;
    fn add(self, rhs: u8) -> Self::Output {
        let next = self.0.0.saturating_add(rhs).min(127);
        Self(DataByte(next))
    }
}

impl AddAssign<u8> for Note {
    fn add_assign(&mut self, rhs: u8) {
        *self = *self + rhs;
    }
}

impl Sub<u8> for Note {
    type Output = Note;
    fn sub(self, rhs: u8) -> Self::Output {
        Self(DataByte(self.0.0.saturating_sub(rhs)))
    }
}

impl SubAssign<u8> for Note {
    fn sub_assign(&mut self, rhs: u8) {
        *self = *self - rhs;
    }
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[doc = r#"
One of the twelve keys of an octave.

# Example
```rust
# use midi_compose::prelude::*;
let note = Key::FSharp.with_octave(Octave::new(4)).unwrap();

assert_eq!(note.octave().value(), 4);
assert_eq!(note.key(), Key::FSharp);
```
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    /// Returns an array beginning with [`Key::C`] to [`Key::B`]
    pub const fn all() -> [Key; 12] {
        use Key::*;
        [C, CSharp, D, DSharp, E, F, FSharp, G, GSharp, A, ASharp, B]
    }

    /// Returns true if the key is sharp. Same as `is_flat`
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        use Key::*;
        matches!(self, CSharp | DSharp | FSharp | GSharp | ASharp)
    }

    /// Returns true if the key is flat. Same as `is_sharp`
    #[inline]
    pub const fn is_flat(&self) -> bool {
        self.is_sharp()
    }

    /// The key for a natural note letter, case-insensitive
    pub const fn from_letter(letter: char) -> Option<Self> {
        use Key::*;
        Some(match letter.to_ascii_uppercase() {
            'C' => C,
            'D' => D,
            'E' => E,
            'F' => F,
            'G' => G,
            'A' => A,
            'B' => B,
            _ => return None,
        })
    }

    /// Identify the key from its distance above C (taken modulo 12).
    pub const fn from_semitone(semitone: u8) -> Self {
        Self::all()[(semitone % 12) as usize]
    }

    /// The distance of this key above C
    pub const fn semitone(&self) -> u8 {
        *self as u8
    }

    /// Create a [`Note`] from this key in the given [`Octave`]
    pub const fn with_octave(self, octave: Octave) -> Result<Note, EncodeError> {
        Note::new(self, octave)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Key::*;
        let name = match self {
            C => "C",
            CSharp => "C#",
            D => "D",
            DSharp => "D#",
            E => "E",
            F => "F",
            FSharp => "F#",
            G => "G",
            GSharp => "G#",
            A => "A",
            ASharp => "A#",
            B => "B",
        };
        f.write_str(name)
    }
}

#[doc = r#"
Identifies the octave of a [`Note`]. Values range from 0 to 10.

```rust
# use midi_compose::prelude::*;
let octave = Octave::new(12); // clamps to 10

assert_eq!(octave.value(), 10);
```
"#]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Octave(u8);

impl Octave {
    /// Should be a value between [0, 10]. Clamps to 10.
    pub const fn new(octave: u8) -> Self {
        if octave > 10 { Self(10) } else { Self(octave) }
    }

    /// The octave, from `[0,10]`
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[test]
fn parse_notation() {
    use pretty_assertions::assert_eq;

    assert_eq!(Note::from_notation("C4").byte(), 48);
    assert_eq!(Note::from_notation("Bb5").byte(), 70);
    assert_eq!(Note::from_notation("F#10").byte(), 126);
    assert_eq!(Note::from_notation("G10").byte(), 127);
    assert_eq!(Note::from_notation("C0").byte(), 0);
    assert_eq!(Note::from_notation("a8").byte(), 105);
    assert_eq!(Note::from_notation("B#3"), Note::from_notation("C4"));
    assert_eq!(Note::from_notation("Db3"), Note::from_notation("C#3"));
}

#[test]
fn malformed_notation_defaults_to_lowest() {
    use pretty_assertions::assert_eq;

    for bad in ["", "C", "H4", "C11", "C-1", "Cx4", "C#", "G#10", "Cb0", "C#100"] {
        assert_eq!(Note::from_notation(bad), Note::LOWEST, "{bad:?}");
    }

    assert_eq!("H4".parse::<Note>(), Err(NoteParseError::Letter('H')));
    assert_eq!("Cx4".parse::<Note>(), Err(NoteParseError::Accidental('x')));
    assert_eq!("C11".parse::<Note>(), Err(NoteParseError::Octave));
    assert_eq!("G#10".parse::<Note>(), Err(NoteParseError::OutOfRange));
    assert_eq!("Cb0".parse::<Note>(), Err(NoteParseError::OutOfRange));
    assert_eq!("C#100".parse::<Note>(), Err(NoteParseError::Length(5)));
}

#[test]
fn display_uses_sharps() {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    assert_eq!(Note::from_notation("C4").to_string(), "C4");
    assert_eq!(Note::from_notation("Gb10").to_string(), "F#10");
    assert_eq!(Note::from_notation("a8").to_string(), "A8");
    assert_eq!(Note::HIGHEST.to_string(), "G10");
}

#[test]
fn note_from_key_octave_pairs() {
    for byte in 0..128 {
        let note = Note::from_byte(byte).unwrap();
        let made = Note::new(note.key(), note.octave()).unwrap();
        assert_eq!(note, made);
    }
    assert!(Note::new(Key::GSharp, Octave::new(10)).is_err());
}

#[test]
fn arithmetic_saturates() {
    let top = Note::from_notation("C10");
    assert_eq!(top + 1, Note::from_notation("C#10"));
    assert_eq!(top + 50, Note::HIGHEST);
    assert_eq!(top + 250, Note::HIGHEST);

    let mut low = Note::from_notation("D0");
    low -= 1;
    assert_eq!(low, Note::from_notation("C#0"));
    low -= 200;
    assert_eq!(low, Note::LOWEST);
}
