#![doc = r#"
Common re-exports

```rust
use midi_compose::prelude::*;
```
"#]

pub use crate::{
    byte::{Channel, DataByte, Velocity},
    chord::{Chord, ChordKind},
    error::*,
    event::{NoteAction, NoteIdentity, TrackEvent},
    file::{Format, FormatType, MidiFile, SmpteFps, SmpteHeader, TicksPerQuarterNote, Timing},
    instrument::Instrument,
    message::{
        ChannelVoiceMessage, KeySignature, MetaMessage, MetaType, PitchBend, SmpteOffset,
        SystemExclusiveMessage, Tempo, TimeSignature, TrackMessage, VoiceEvent,
    },
    note::{Key, Note, Octave},
    scale::Scale,
    track::{EventTrack, NoteTime, NoteTrack, ScheduleOptions, Ticked, Track},
    vlq::VarLength,
};

#[cfg(feature = "std")]
pub use crate::file::WriteError;
