use alloc::{collections::BTreeMap, vec::Vec};

use super::{NoteTime, NoteTrack, Ticked, TickedEvents};
use crate::{
    Channel, Instrument,
    event::{NoteAction, TrackEvent},
    message::{TrackMessage, VoiceEvent},
};

#[doc = r#"
The literal contents of an `MTrk` chunk: events in playback order.

```rust
# use midi_compose::prelude::*;
let mut track = EventTrack::new();
track.add(TrackEvent::new(0, MetaMessage::EndOfTrack).unwrap());

assert_eq!(track.size(), 12);
assert_eq!(
    track.data(),
    [b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00]
);
```
"#]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventTrack {
    events: Vec<TrackEvent>,
}

impl EventTrack {
    /// An empty track
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event to the end of the track
    pub fn add(&mut self, event: TrackEvent) {
        self.events.push(event);
    }

    /// Remove every event
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// The events, in order
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the track holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Walk the events along with the absolute tick of each
    pub fn ticked(&self) -> TickedEvents<'_> {
        TickedEvents::new(&self.events)
    }

    /// Size of the whole chunk: the 8 header bytes plus every event
    pub fn size(&self) -> usize {
        8 + self.events.iter().map(TrackEvent::byte_len).sum::<usize>()
    }

    /// Append the chunk to `out`
    pub fn write_into(&self, out: &mut Vec<u8>) {
        out.reserve(self.size());
        out.extend_from_slice(b"MTrk");
        out.extend_from_slice(&((self.size() - 8) as u32).to_be_bytes());
        for event in &self.events {
            event.write_into(out);
        }
    }

    /// `MTrk`, the big-endian length of the events, then the events
    pub fn data(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size());
        self.write_into(&mut out);
        out
    }

    #[doc = r#"
Recover the notes played by this track.

Each Note On is paired with the first later Note Off of the same key on the
same channel. Presses that are never released are dropped. A note plays the
instrument most recently selected on its channel, or
[`Instrument::AcousticGrandPiano`] if none was.

```rust
# use midi_compose::prelude::*;
let mut notes = NoteTrack::new();
notes.add(Note::from_notation("A4"), 10, 20, Instrument::Cello);

let recovered = notes.to_events().unwrap().to_notes();
assert_eq!(recovered.notes(), notes.notes());
```
"#]
    pub fn to_notes(&self) -> NoteTrack {
        let mut programs: BTreeMap<Channel, Instrument> = BTreeMap::new();
        let mut notes = NoteTrack::new();

        for (i, press) in self.ticked().enumerate() {
            if let TrackMessage::ChannelVoice(voice) = press.event().message() {
                if let VoiceEvent::ProgramChange { program } = voice.event() {
                    programs.insert(voice.channel(), *program);
                    continue;
                }
            }

            let Some(identity) = press.event().note_identity() else {
                continue;
            };
            if identity.action != NoteAction::Press {
                continue;
            }

            let release = self.events[i + 1..]
                .iter()
                .scan(press.accumulated_ticks(), |ticks, event| {
                    *ticks += event.delta_ticks() as u64;
                    Some(Ticked::new(*ticks, event))
                })
                .find(|later| {
                    later
                        .event()
                        .note_identity()
                        .is_some_and(|other| identity.is_released_by(&other))
                });

            let Some(release) = release else {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "Dropping {} on channel {} at tick {}: never released",
                    identity.note,
                    identity.channel,
                    press.accumulated_ticks()
                );
                continue;
            };

            let begin = u32::try_from(press.accumulated_ticks());
            let duration = u32::try_from(release.accumulated_ticks() - press.accumulated_ticks());
            let (Ok(begin), Ok(duration)) = (begin, duration) else {
                continue;
            };

            let instrument = programs
                .get(&identity.channel)
                .copied()
                .unwrap_or_default();
            notes.add_note_time(NoteTime::new(identity.note, begin, duration, instrument));
        }
        notes
    }
}

impl From<Vec<TrackEvent>> for EventTrack {
    fn from(events: Vec<TrackEvent>) -> Self {
        Self { events }
    }
}

impl FromIterator<TrackEvent> for EventTrack {
    fn from_iter<T: IntoIterator<Item = TrackEvent>>(iter: T) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl Extend<TrackEvent> for EventTrack {
    fn extend<T: IntoIterator<Item = TrackEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}

impl<'a> IntoIterator for &'a EventTrack {
    type Item = &'a TrackEvent;
    type IntoIter = core::slice::Iter<'a, TrackEvent>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Note, Velocity, message::ChannelVoiceMessage};
    use pretty_assertions::assert_eq;

    fn voice(delta: u32, message: ChannelVoiceMessage) -> TrackEvent {
        TrackEvent::new(delta, message).unwrap()
    }

    fn c4() -> Note {
        Note::from_notation("C4")
    }

    #[test]
    fn releases_pair_by_channel() {
        let track: EventTrack = [
            voice(0, ChannelVoiceMessage::note_on(Channel::One, c4(), Velocity::MAX)),
            voice(2, ChannelVoiceMessage::note_on(Channel::Two, c4(), Velocity::MAX)),
            voice(3, ChannelVoiceMessage::note_off(Channel::Two, c4(), Velocity::MAX)),
            voice(5, ChannelVoiceMessage::note_off(Channel::One, c4(), Velocity::MAX)),
        ]
        .into_iter()
        .collect();

        let notes = track.to_notes();
        assert_eq!(
            notes.notes(),
            &[
                NoteTime::new(c4(), 0, 10, Instrument::AcousticGrandPiano),
                NoteTime::new(c4(), 2, 3, Instrument::AcousticGrandPiano),
            ]
        );
    }

    #[test]
    fn unreleased_presses_are_dropped() {
        let track: EventTrack = [
            voice(0, ChannelVoiceMessage::note_on(Channel::One, c4(), Velocity::MAX)),
            voice(4, ChannelVoiceMessage::note_off(Channel::Three, c4(), Velocity::MAX)),
        ]
        .into_iter()
        .collect();

        assert!(track.to_notes().is_empty());
    }

    #[test]
    fn instrument_follows_the_latest_program() {
        let track: EventTrack = [
            voice(0, ChannelVoiceMessage::program_change(Channel::One, Instrument::Oboe)),
            voice(0, ChannelVoiceMessage::note_on(Channel::One, c4(), Velocity::MAX)),
            voice(1, ChannelVoiceMessage::note_off(Channel::One, c4(), Velocity::MAX)),
            voice(0, ChannelVoiceMessage::program_change(Channel::One, Instrument::Clarinet)),
            voice(0, ChannelVoiceMessage::note_on(Channel::One, c4(), Velocity::MAX)),
            voice(1, ChannelVoiceMessage::note_off(Channel::One, c4(), Velocity::MAX)),
        ]
        .into_iter()
        .collect();

        let instruments: Vec<Instrument> =
            track.to_notes().notes().iter().map(|n| n.instrument).collect();
        assert_eq!(instruments, [Instrument::Oboe, Instrument::Clarinet]);
    }

    #[test]
    fn size_counts_the_chunk_header() {
        let mut track = EventTrack::new();
        assert_eq!(track.size(), 8);
        track.add(voice(200, ChannelVoiceMessage::note_on(Channel::One, c4(), Velocity::MAX)));
        assert_eq!(track.size(), 8 + 2 + 3);
        assert_eq!(&track.data()[4..8], &[0, 0, 0, 5]);

        track.clear();
        assert!(track.is_empty());
    }
}
