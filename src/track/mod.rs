#![doc = r#"
Tracks, in their two shapes

An [`EventTrack`] is exactly what ends up in an `MTrk` chunk: an ordered
list of events separated by delta-times. A [`NoteTrack`] is a list of notes
placed in absolute time, which is far easier to write music with. Note tracks
are scheduled into event tracks when their bytes are needed:

1. a time signature, at delta 0
2. one Program Change per distinct instrument, each instrument getting its
   own channel in the order it first appears
3. a Note On at the start and a Note Off at the end of every note, sorted by
   tick. At the same tick, releases come first, then zero-length notes
   (each pressed and released back to back), then the other presses.
4. an End of Track
"#]

mod events;
pub use events::*;

mod notes;
pub use notes::*;

mod schedule;
pub use schedule::ScheduleOptions;
use schedule::schedule;

mod ticked;
pub use ticked::*;

use alloc::vec::Vec;

use crate::EncodeError;

/// A track of either shape, as held by a [`MidiFile`](crate::file::MidiFile)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Track {
    /// Literal events
    Events(EventTrack),
    /// Notes scheduled when written
    Notes(NoteTrack),
}

impl Track {
    /// The track as events, scheduling notes if needed
    ///
    /// # Errors
    /// if a note track cannot be scheduled
    pub fn to_events(&self) -> Result<EventTrack, EncodeError> {
        match self {
            Track::Events(events) => Ok(events.clone()),
            Track::Notes(notes) => notes.to_events(),
        }
    }

    /// The track as notes, pairing presses and releases if needed
    pub fn to_notes(&self) -> NoteTrack {
        match self {
            Track::Events(events) => events.to_notes(),
            Track::Notes(notes) => notes.clone(),
        }
    }

    /// Size of the track chunk
    ///
    /// # Errors
    /// if a note track cannot be scheduled
    pub fn size(&self) -> Result<usize, EncodeError> {
        match self {
            Track::Events(events) => Ok(events.size()),
            Track::Notes(notes) => notes.size(),
        }
    }

    /// Append the track chunk to `out`
    ///
    /// # Errors
    /// if a note track cannot be scheduled. Nothing is written in that case.
    pub fn write_into(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        match self {
            Track::Events(events) => events.write_into(out),
            Track::Notes(notes) => notes.to_events()?.write_into(out),
        }
        Ok(())
    }

    /// The track chunk
    ///
    /// # Errors
    /// if a note track cannot be scheduled
    pub fn data(&self) -> Result<Vec<u8>, EncodeError> {
        match self {
            Track::Events(events) => Ok(events.data()),
            Track::Notes(notes) => notes.data(),
        }
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::Events(EventTrack::new())
    }
}

impl From<EventTrack> for Track {
    fn from(value: EventTrack) -> Self {
        Self::Events(value)
    }
}

impl From<NoteTrack> for Track {
    fn from(value: NoteTrack) -> Self {
        Self::Notes(value)
    }
}
