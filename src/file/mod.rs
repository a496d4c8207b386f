#![doc = r#"
Assembling a Standard MIDI File

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII
type followed by a 32-bit big-endian length and the chunk data.

```text
[Header Chunk: "MThd"]
[Track Chunk 1: "MTrk"]
[Track Chunk 2: "MTrk"]
...
[Track Chunk N: "MTrk"]
```

The header chunk is always 14 bytes long and announces the [`FormatType`],
the number of tracks and the [`Timing`] used to interpret delta-times. Each
track chunk holds the events of one [`Track`].
"#]

mod format;
pub use format::*;

mod header;
pub use header::*;

mod timing;
pub use timing::*;

#[cfg(feature = "std")]
mod write;
#[cfg(feature = "std")]
pub use write::*;

use alloc::vec::Vec;

use crate::{FileError, track::Track};

#[doc = r#"
A MIDI file: a [`Format`] holding its tracks, and the file's [`Timing`].

```rust
# use midi_compose::prelude::*;
let mut file = MidiFile::simultaneous(Timing::new_ticks_per_quarter_note(1548));
file.add_track(EventTrack::new()).unwrap();
file.add_track(NoteTrack::new()).unwrap();

let bytes = file.to_bytes().unwrap();
assert_eq!(
    &bytes[..14],
    &[b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 2, 0x06, 0x0C]
);
```
"#]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFile {
    timing: Timing,
    format: Format,
}

impl MidiFile {
    /// A format 0 file holding `track`
    pub fn single_multichannel(track: impl Into<Track>, timing: Timing) -> Self {
        Self {
            timing,
            format: Format::SingleMultiChannel(track.into()),
        }
    }

    /// An empty format 1 file
    pub const fn simultaneous(timing: Timing) -> Self {
        Self {
            timing,
            format: Format::Simultaneous(Vec::new()),
        }
    }

    /// An empty format 2 file
    pub const fn sequentially_independent(timing: Timing) -> Self {
        Self {
            timing,
            format: Format::SequentiallyIndependent(Vec::new()),
        }
    }

    /// Append a track.
    ///
    /// # Errors
    /// if the file is format 0, which holds exactly one track. Use
    /// [`MidiFile::set_track`] instead.
    pub fn add_track(&mut self, track: impl Into<Track>) -> Result<(), FileError> {
        match &mut self.format {
            Format::SingleMultiChannel(_) => Err(FileError::MultipleTracksForSingleMultiChannel),
            Format::Simultaneous(tracks) | Format::SequentiallyIndependent(tracks) => {
                tracks.push(track.into());
                Ok(())
            }
        }
    }

    /// Make `track` the only track of the file
    pub fn set_track(&mut self, track: impl Into<Track>) {
        match &mut self.format {
            Format::SingleMultiChannel(current) => *current = track.into(),
            Format::Simultaneous(tracks) | Format::SequentiallyIndependent(tracks) => {
                tracks.clear();
                tracks.push(track.into());
            }
        }
    }

    /// Remove every track. A format 0 file is left with an empty track.
    pub fn clear(&mut self) {
        match &mut self.format {
            Format::SingleMultiChannel(current) => *current = Track::default(),
            Format::Simultaneous(tracks) | Format::SequentiallyIndependent(tracks) => {
                tracks.clear()
            }
        }
    }

    /// The tracks, in file order
    pub fn tracks(&self) -> &[Track] {
        self.format.tracks()
    }

    /// Number of tracks
    pub fn track_count(&self) -> usize {
        self.format.track_count()
    }

    /// Returns the format and its tracks
    pub const fn format(&self) -> &Format {
        &self.format
    }

    /// Returns the format type for the file.
    pub const fn format_type(&self) -> FormatType {
        self.format.format_type()
    }

    /// Returns the time division
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    /// Change the time division
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// The header chunk
    ///
    /// # Errors
    /// if there are more than 65535 tracks
    pub fn header(&self) -> Result<MidiFileHeader, FileError> {
        MidiFileHeader::new(self.format_type(), self.track_count(), self.timing)
    }

    /// Size of the encoded file: the header plus every track chunk
    ///
    /// # Errors
    /// if a note track cannot be scheduled
    pub fn size(&self) -> Result<usize, FileError> {
        let mut size = MidiFileHeader::SIZE;
        for track in self.tracks() {
            size += track.size()?;
        }
        Ok(size)
    }

    /// Encode the whole file
    ///
    /// # Errors
    /// - [`FileError::TooManyTracks`] if there are more than 65535 tracks
    /// - [`FileError::Encode`] if a note track cannot be scheduled
    pub fn to_bytes(&self) -> Result<Vec<u8>, FileError> {
        let header = self.header()?;
        let mut out = Vec::new();
        out.extend_from_slice(&header.to_bytes());
        for track in self.tracks() {
            track.write_into(&mut out)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Instrument, Note,
        event::TrackEvent,
        message::MetaMessage,
        track::{EventTrack, NoteTrack},
    };
    use pretty_assertions::assert_eq;

    fn end_of_track() -> EventTrack {
        let mut track = EventTrack::new();
        track.add(TrackEvent::new(0, MetaMessage::EndOfTrack).unwrap());
        track
    }

    #[test]
    fn format_zero_holds_one_track() {
        let mut file =
            MidiFile::single_multichannel(end_of_track(), Timing::new_ticks_per_quarter_note(96));
        assert_eq!(
            file.add_track(EventTrack::new()),
            Err(FileError::MultipleTracksForSingleMultiChannel)
        );
        assert_eq!(file.track_count(), 1);

        let bytes = file.to_bytes().unwrap();
        assert_eq!(&bytes[8..12], &[0, 0, 0, 1]);
        assert_eq!(bytes.len(), 14 + 12);

        file.clear();
        assert_eq!(file.track_count(), 1);
        assert_eq!(file.size().unwrap(), 14 + 8);
    }

    #[test]
    fn size_matches_bytes() {
        let mut notes = NoteTrack::new();
        notes.add(Note::from_notation("C4"), 0, 96, Instrument::Trumpet);
        notes.add(Note::from_notation("G4"), 96, 96, Instrument::Trumpet);

        let mut file = MidiFile::sequentially_independent(Timing::new_ticks_per_quarter_note(96));
        file.add_track(notes).unwrap();
        file.add_track(end_of_track()).unwrap();

        let bytes = file.to_bytes().unwrap();
        assert_eq!(bytes.len(), file.size().unwrap());
        assert_eq!(&bytes[8..10], &[0, 2]);
    }

    #[test]
    fn set_track_replaces_every_track() {
        let mut file = MidiFile::simultaneous(Timing::new_ticks_per_quarter_note(96));
        file.add_track(EventTrack::new()).unwrap();
        file.add_track(EventTrack::new()).unwrap();
        file.set_track(end_of_track());

        assert_eq!(file.tracks(), &[Track::Events(end_of_track())]);
    }

    #[test]
    fn scheduling_errors_surface() {
        let mut notes = NoteTrack::new();
        notes.add(Note::from_notation("C4"), u32::MAX, 1, Instrument::default());
        let file = MidiFile::single_multichannel(notes, Timing::new_ticks_per_quarter_note(96));

        assert!(matches!(file.to_bytes(), Err(FileError::Encode(_))));
        assert!(matches!(file.size(), Err(FileError::Encode(_))));
    }

    #[test]
    fn file_clones_are_independent() {
        let file = MidiFile::single_multichannel(end_of_track(), Timing::new_ticks_per_quarter_note(96));
        let mut copy = file.clone();
        copy.clear();
        copy.set_timing(Timing::new_smpte(SmpteFps::TwentyFour, 8));

        assert_eq!(file.tracks(), &[Track::Events(end_of_track())]);
        assert_eq!(file.timing(), Timing::new_ticks_per_quarter_note(96));
    }
}
