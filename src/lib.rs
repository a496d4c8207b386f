#![doc = r#"
Build Standard MIDI Files from notes, chords and events.

Tracks come in two shapes:

- [`EventTrack`](track::EventTrack), the literal contents of an `MTrk` chunk:
  an ordered list of [`TrackEvent`](event::TrackEvent)s, each carrying the
  delta-time since the previous event.
- [`NoteTrack`](track::NoteTrack), an unordered list of
  [`NoteTime`](track::NoteTime)s ("this note, from this tick, for this long,
  on this instrument").

A [`NoteTrack`](track::NoteTrack) is scheduled into an
[`EventTrack`](track::EventTrack) when the file is assembled, and a
[`MidiFile`](file::MidiFile) wraps one or more tracks with the `MThd` header.

# Example
```rust
use midi_compose::prelude::*;

let mut notes = NoteTrack::new();
notes.add(Note::from_notation("C4"), 0, 96, Instrument::AcousticGrandPiano);
notes.add_chord(
    &Chord::build(Note::from_notation("E4"), ChordKind::MajorTriad),
    96,
    192,
    Instrument::Violin,
);

let file = MidiFile::single_multichannel(notes, Timing::new_ticks_per_quarter_note(96));
let bytes = file.to_bytes().unwrap();

assert_eq!(&bytes[..4], b"MThd");
assert_eq!(bytes.len(), file.size().unwrap());
```
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
pub use error::*;

pub mod byte;
pub mod chord;
pub mod event;
pub mod file;
pub mod instrument;
pub mod message;
pub mod note;
pub mod scale;
pub mod track;
pub mod vlq;

pub mod prelude;

pub use byte::{Channel, DataByte, Velocity};
pub use chord::{Chord, ChordKind};
pub use instrument::Instrument;
pub use note::{Key, Note, Octave};
pub use scale::Scale;
