use crate::{DataByte, EncodeError, Instrument, Note, Velocity};

#[doc = r#"
The body of a channel voice message: what happens on the channel.

Each kind carries its status nibble and up to two 7-bit parameters.
"#]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceEvent {
    /// Release a key
    NoteOff {
        /// The key
        note: Note,
        /// How fast it was released
        velocity: Velocity,
    },
    /// Press a key
    NoteOn {
        /// The key
        note: Note,
        /// How hard it was struck
        velocity: Velocity,
    },
    /// Change the pressure on a held key
    Aftertouch {
        /// The key
        note: Note,
        /// The new pressure
        velocity: Velocity,
    },
    /// Set a controller value
    ControlChange {
        /// The controller number
        controller: DataByte,
        /// The controller's new value
        value: DataByte,
    },
    /// Switch the channel to another instrument
    ProgramChange {
        /// The General MIDI program, written as its number minus one
        program: Instrument,
    },
    /// Change the pressure of every held key on the channel
    ChannelPressure {
        /// The new pressure
        velocity: Velocity,
    },
    /// Bend the pitch of the channel
    PitchBend(PitchBend),
}

impl VoiceEvent {
    /// The upper nibble of the status byte
    pub const fn status_nibble(&self) -> u8 {
        match self {
            VoiceEvent::NoteOff { .. } => 0x8,
            VoiceEvent::NoteOn { .. } => 0x9,
            VoiceEvent::Aftertouch { .. } => 0xA,
            VoiceEvent::ControlChange { .. } => 0xB,
            VoiceEvent::ProgramChange { .. } => 0xC,
            VoiceEvent::ChannelPressure { .. } => 0xD,
            VoiceEvent::PitchBend(_) => 0xE,
        }
    }

    /// The two parameter bytes. Kinds with a single parameter report `0` for the second.
    pub const fn params(&self) -> (u8, u8) {
        match self {
            VoiceEvent::NoteOff { note, velocity }
            | VoiceEvent::NoteOn { note, velocity }
            | VoiceEvent::Aftertouch { note, velocity } => (note.byte(), velocity.byte()),
            VoiceEvent::ControlChange { controller, value } => (controller.value(), value.value()),
            VoiceEvent::ProgramChange { program } => (program.program_byte(), 0),
            VoiceEvent::ChannelPressure { velocity } => (velocity.byte(), 0),
            VoiceEvent::PitchBend(bend) => (bend.lsb(), bend.msb()),
        }
    }

    /// The note pressed or released, for Note On and Note Off only
    pub const fn note(&self) -> Option<Note> {
        match self {
            VoiceEvent::NoteOff { note, .. } | VoiceEvent::NoteOn { note, .. } => Some(*note),
            _ => None,
        }
    }

    /// Returns true if this is a Note On
    pub const fn is_note_on(&self) -> bool {
        matches!(self, VoiceEvent::NoteOn { .. })
    }

    /// Returns true if this is a Note Off
    pub const fn is_note_off(&self) -> bool {
        matches!(self, VoiceEvent::NoteOff { .. })
    }
}

#[doc = r#"
A 14-bit pitch bend value. `0x2000` is the centre (no bend).

```rust
# use midi_compose::prelude::*;
let bend = PitchBend::new(0x3FFF).unwrap();
assert_eq!((bend.lsb(), bend.msb()), (0x7F, 0x7F));

assert!(PitchBend::new(0x4000).is_err());
```
"#]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchBend(u16);

impl PitchBend {
    /// No bend
    pub const CENTER: Self = Self(0x2000);
    /// The largest value
    pub const MAX: u16 = 0x3FFF;

    /// Create a pitch bend from a 14-bit value
    ///
    /// # Errors
    /// if `value` > 0x3FFF
    pub const fn new(value: u16) -> Result<Self, EncodeError> {
        if value > Self::MAX {
            return Err(EncodeError::PitchBend(value));
        }
        Ok(Self(value))
    }

    /// The 14-bit value
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// The lower 7 bits, written first
    pub const fn lsb(&self) -> u8 {
        (self.0 & 0x7F) as u8
    }

    /// The upper 7 bits, written second
    pub const fn msb(&self) -> u8 {
        (self.0 >> 7) as u8
    }
}

impl Default for PitchBend {
    fn default() -> Self {
        Self::CENTER
    }
}

#[test]
fn pitch_bend_splits_fourteen_bits() {
    let bend = PitchBend::new(0x2000).unwrap();
    assert_eq!((bend.lsb(), bend.msb()), (0x00, 0x40));

    let bend = PitchBend::new(0x1234).unwrap();
    assert_eq!((bend.lsb(), bend.msb()), (0x34, 0x24));
    assert_eq!(PitchBend::new(0xFFFF), Err(EncodeError::PitchBend(0xFFFF)));
}
