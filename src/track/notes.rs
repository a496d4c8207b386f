use alloc::vec::Vec;

use super::{EventTrack, ScheduleOptions, schedule};
use crate::{Chord, EncodeError, Instrument, Note};

/// A note played from `begin` for `duration` ticks on `instrument`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteTime {
    /// The key
    pub note: Note,
    /// Absolute tick of the press
    pub begin: u32,
    /// Ticks between the press and the release
    pub duration: u32,
    /// The instrument that plays the note
    pub instrument: Instrument,
}

impl NoteTime {
    /// Create a new note time
    pub const fn new(note: Note, begin: u32, duration: u32, instrument: Instrument) -> Self {
        Self {
            note,
            begin,
            duration,
            instrument,
        }
    }

    /// Absolute tick of the release
    pub const fn end(&self) -> u64 {
        self.begin as u64 + self.duration as u64
    }
}

#[doc = r#"
Notes in absolute time, in no particular order.

A note track has no byte form of its own; it is scheduled into an
[`EventTrack`] whenever its bytes are needed.

```rust
# use midi_compose::prelude::*;
let mut track = NoteTrack::new();
track.add(Note::from_notation("C4"), 0, 48, Instrument::Flute);
track.add_after_last_press(Note::from_notation("D4"), 48, 48, Instrument::Flute);

assert_eq!(track.notes()[1].begin, 48);
assert_eq!(track.size().unwrap(), track.data().unwrap().len());
```
"#]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteTrack {
    notes: Vec<NoteTime>,
}

impl NoteTrack {
    /// An empty track
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Play `note` from `begin` for `duration` ticks
    pub fn add(&mut self, note: Note, begin: u32, duration: u32, instrument: Instrument) {
        self.notes.push(NoteTime::new(note, begin, duration, instrument));
    }

    /// Add an existing [`NoteTime`]
    pub fn add_note_time(&mut self, note: NoteTime) {
        self.notes.push(note);
    }

    /// Play every note of `chord` from `begin` for `duration` ticks
    pub fn add_chord(&mut self, chord: &Chord, begin: u32, duration: u32, instrument: Instrument) {
        self.notes.extend(
            chord
                .notes()
                .map(|note| NoteTime::new(note, begin, duration, instrument)),
        );
    }

    /// Play `note` `delta_ticks` after the latest press in the track.
    ///
    /// An empty track counts from tick 0. The start saturates at `u32::MAX`.
    pub fn add_after_last_press(
        &mut self,
        note: Note,
        delta_ticks: u32,
        duration: u32,
        instrument: Instrument,
    ) {
        let begin = self.last_press().saturating_add(delta_ticks);
        self.add(note, begin, duration, instrument);
    }

    /// Play every note of `chord` together, `delta_ticks` after the latest press in the track
    pub fn add_chord_after_last_press(
        &mut self,
        chord: &Chord,
        delta_ticks: u32,
        duration: u32,
        instrument: Instrument,
    ) {
        let begin = self.last_press().saturating_add(delta_ticks);
        self.add_chord(chord, begin, duration, instrument);
    }

    fn last_press(&self) -> u32 {
        self.notes.iter().map(|n| n.begin).max().unwrap_or(0)
    }

    /// Remove every note
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// The notes, in the order they were added
    pub fn notes(&self) -> &[NoteTime] {
        &self.notes
    }

    /// Number of notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True if the track holds no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Schedule the notes into events with [`ScheduleOptions::default`]
    ///
    /// # Errors
    /// if two consecutive events lie more than [`VarLength::MAX`](crate::vlq::VarLength::MAX) ticks apart
    pub fn to_events(&self) -> Result<EventTrack, EncodeError> {
        self.to_events_with(&ScheduleOptions::default())
    }

    /// Schedule the notes into events
    ///
    /// # Errors
    /// if two consecutive events lie more than [`VarLength::MAX`](crate::vlq::VarLength::MAX) ticks apart
    pub fn to_events_with(&self, options: &ScheduleOptions) -> Result<EventTrack, EncodeError> {
        schedule(&self.notes, options)
    }

    /// The bytes of the scheduled track chunk
    ///
    /// # Errors
    /// if the notes cannot be scheduled, see [`NoteTrack::to_events`]
    pub fn data(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(self.to_events()?.data())
    }

    /// Size of the scheduled track chunk
    ///
    /// # Errors
    /// if the notes cannot be scheduled, see [`NoteTrack::to_events`]
    pub fn size(&self) -> Result<usize, EncodeError> {
        Ok(self.to_events()?.size())
    }
}

impl From<Vec<NoteTime>> for NoteTrack {
    fn from(notes: Vec<NoteTime>) -> Self {
        Self { notes }
    }
}

impl FromIterator<NoteTime> for NoteTrack {
    fn from_iter<T: IntoIterator<Item = NoteTime>>(iter: T) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}

impl Extend<NoteTime> for NoteTrack {
    fn extend<T: IntoIterator<Item = NoteTime>>(&mut self, iter: T) {
        self.notes.extend(iter);
    }
}

#[test]
fn chords_after_last_press_start_together() {
    use crate::ChordKind;

    let mut track = NoteTrack::new();
    track.add(Note::from_notation("C3"), 10, 5, Instrument::default());
    track.add(Note::from_notation("D3"), 4, 50, Instrument::default());

    let chord = Chord::build(Note::from_notation("C4"), ChordKind::MajorTriad);
    track.add_chord_after_last_press(&chord, 6, 8, Instrument::Oboe);

    let added = &track.notes()[2..];
    assert_eq!(added.len(), 3);
    assert!(added.iter().all(|n| n.begin == 16 && n.duration == 8));
    assert!(added.iter().all(|n| n.instrument == Instrument::Oboe));
}

#[test]
fn first_press_counts_from_zero() {
    let mut track = NoteTrack::new();
    track.add_after_last_press(Note::from_notation("E2"), 7, 1, Instrument::default());
    assert_eq!(track.notes()[0].begin, 7);

    track.add_after_last_press(Note::from_notation("E2"), u32::MAX, 1, Instrument::default());
    assert_eq!(track.notes()[1].begin, u32::MAX);
}

#[test]
fn note_track_clones_are_independent() {
    let mut original = NoteTrack::new();
    original.add(Note::from_notation("C4"), 0, 1, Instrument::default());

    let mut copy = original.clone();
    copy.clear();
    copy.add(Note::from_notation("D4"), 3, 1, Instrument::Tuba);

    assert_eq!(original.len(), 1);
    assert_eq!(original.notes()[0].note, Note::from_notation("C4"));
    assert_eq!(copy.notes()[0].instrument, Instrument::Tuba);
}
