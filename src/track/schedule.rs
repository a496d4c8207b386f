use alloc::{collections::BTreeMap, vec::Vec};

use super::{EventTrack, NoteTime};
use crate::{
    Channel, EncodeError, Instrument, Note, Velocity,
    event::{NoteAction, TrackEvent},
    message::{ChannelVoiceMessage, MetaMessage, TimeSignature},
    vlq::VarLength,
};

#[doc = r#"
Settings used when turning a [`NoteTrack`](super::NoteTrack) into events.

The defaults press and release at full velocity under a 4/4 signature.

```rust
# use midi_compose::prelude::*;
let options = ScheduleOptions {
    velocity: Velocity::new(90).unwrap(),
    ..Default::default()
};

let mut notes = NoteTrack::new();
notes.add(Note::from_notation("C4"), 0, 10, Instrument::default());
let events = notes.to_events_with(&options).unwrap();

assert_eq!(events.len(), 5);
```
"#]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleOptions {
    /// Velocity of every Note On
    pub velocity: Velocity,
    /// Velocity of every Note Off
    pub release_velocity: Velocity,
    /// The signature written at the start of the track
    pub time_signature: TimeSignature,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            velocity: Velocity::MAX,
            release_velocity: Velocity::MAX,
            time_signature: TimeSignature::default(),
        }
    }
}

/// Order of entries sharing a tick: releases, then zero-length notes, then presses.
///
/// Both halves of a zero-length note share a rank and are pushed one after
/// the other, so its release directly follows its own press and never ends
/// another note started on the same tick.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
enum Rank {
    Release,
    Instant,
    Press,
}

struct Entry {
    tick: u64,
    rank: Rank,
    action: NoteAction,
    note: Note,
    channel: Channel,
}

/// Give every distinct instrument a channel, in the order they first appear.
///
/// There are only 16 channels: the 16th and later instruments all share the last one.
fn assign_channels(notes: &[NoteTime]) -> BTreeMap<Instrument, Channel> {
    let mut channels = BTreeMap::new();
    let mut next = 0u8;
    for note in notes {
        if channels.contains_key(&note.instrument) {
            continue;
        }
        if next == 15 && channels.values().any(|c| *c == Channel::Sixteen) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Out of channels: {} shares channel 16 with another instrument",
                note.instrument
            );
        }
        channels.insert(note.instrument, Channel::from_bits(next));
        next = (next + 1).min(15);
    }
    channels
}

pub(super) fn schedule(
    notes: &[NoteTime],
    options: &ScheduleOptions,
) -> Result<EventTrack, EncodeError> {
    let channels = assign_channels(notes);
    let mut track = EventTrack::new();

    track.add(TrackEvent::new(
        0,
        MetaMessage::TimeSignature(options.time_signature),
    )?);

    for (instrument, channel) in &channels {
        track.add(TrackEvent::voice(
            VarLength::ZERO,
            ChannelVoiceMessage::program_change(*channel, *instrument),
        ));
    }

    let mut entries = Vec::with_capacity(notes.len() * 2);
    for note in notes {
        let channel = channels
            .get(&note.instrument)
            .copied()
            .unwrap_or(Channel::Sixteen);
        let (press, release) = if note.duration == 0 {
            (Rank::Instant, Rank::Instant)
        } else {
            (Rank::Press, Rank::Release)
        };
        entries.push(Entry {
            tick: note.begin as u64,
            rank: press,
            action: NoteAction::Press,
            note: note.note,
            channel,
        });
        entries.push(Entry {
            tick: note.end(),
            rank: release,
            action: NoteAction::Release,
            note: note.note,
            channel,
        });
    }

    // stable, so equal keys keep insertion order and a zero-length
    // release stays right behind its press
    entries.sort_by_key(|entry| (entry.tick, entry.rank));

    let mut cursor = 0;
    for entry in entries {
        let delta = VarLength::from_u64(entry.tick - cursor)?;
        let message = match entry.action {
            NoteAction::Press => {
                ChannelVoiceMessage::note_on(entry.channel, entry.note, options.velocity)
            }
            NoteAction::Release => {
                ChannelVoiceMessage::note_off(entry.channel, entry.note, options.release_velocity)
            }
        };
        track.add(TrackEvent::voice(delta, message));
        cursor = entry.tick;
    }

    track.add(TrackEvent::new(0, MetaMessage::EndOfTrack)?);
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::NoteTrack;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    fn note(byte: u8) -> Note {
        Note::from_byte(byte).unwrap()
    }

    #[test]
    fn single_note_round_trip() {
        let mut track = NoteTrack::new();
        track.add(note(10), 2, 3, Instrument::AcousticGrandPiano);

        let events = track.to_events().unwrap();
        assert_eq!(events.size(), 31);
        assert_eq!(
            events.data(),
            vec![
                b'M', b'T', b'r', b'k', 0x00, 0x00, 0x00, 0x17, //
                0x00, 0xFF, 0x58, 0x04, 0x04, 0x04, 0x18, 0x08, //
                0x00, 0xC0, 0x00, //
                0x02, 0x90, 0x0A, 0x7F, //
                0x03, 0x80, 0x0A, 0x7F, //
                0x00, 0xFF, 0x2F, 0x00,
            ]
        );
    }

    #[test]
    fn channels_follow_first_appearance() {
        let mut track = NoteTrack::new();
        track.add(note(60), 0, 1, Instrument::Violin);
        track.add(note(61), 0, 1, Instrument::AcousticGrandPiano);
        track.add(note(62), 0, 1, Instrument::Violin);

        let channels = assign_channels(track.notes());
        assert_eq!(channels[&Instrument::Violin], Channel::One);
        assert_eq!(channels[&Instrument::AcousticGrandPiano], Channel::Two);

        // program changes are written in instrument order
        let events = track.to_events().unwrap();
        let pcs: Vec<u8> = events.events()[1..3]
            .iter()
            .flat_map(|e| e.to_bytes())
            .collect();
        assert_eq!(pcs, vec![0x00, 0xC1, 0x00, 0x00, 0xC0, 40]);
    }

    #[test]
    fn seventeenth_instrument_shares_the_last_channel() {
        let notes: Vec<NoteTime> = (1..=17u8)
            .map(|p| NoteTime::new(note(p), 0, 1, Instrument::from_program(p).unwrap()))
            .collect();
        let channels = assign_channels(&notes);

        for p in 1..=16u8 {
            let instrument = Instrument::from_program(p).unwrap();
            assert_eq!(channels[&instrument].to_byte(), p - 1);
        }
        let last = Instrument::from_program(17).unwrap();
        assert_eq!(channels[&last], Channel::Sixteen);
    }

    #[test]
    fn releases_precede_presses_on_the_same_tick() {
        let mut track = NoteTrack::new();
        track.add(note(60), 0, 4, Instrument::default());
        track.add(note(62), 4, 4, Instrument::default());

        let actions: Vec<(u64, NoteAction, u8)> = track
            .to_events()
            .unwrap()
            .ticked()
            .filter_map(|t| {
                let id = t.event().note_identity()?;
                Some((t.accumulated_ticks(), id.action, id.note.byte()))
            })
            .collect();
        assert_eq!(
            actions,
            vec![
                (0, NoteAction::Press, 60),
                (4, NoteAction::Release, 60),
                (4, NoteAction::Press, 62),
                (8, NoteAction::Release, 62),
            ]
        );
    }

    #[test]
    fn zero_length_notes_press_first() {
        let mut track = NoteTrack::new();
        track.add(note(60), 5, 0, Instrument::default());
        track.add(note(61), 0, 5, Instrument::default());

        let actions: Vec<(NoteAction, u8)> = track
            .to_events()
            .unwrap()
            .events()
            .iter()
            .filter_map(|e| e.note_identity())
            .map(|id| (id.action, id.note.byte()))
            .collect();
        assert_eq!(
            actions,
            vec![
                (NoteAction::Press, 61),
                (NoteAction::Release, 61),
                (NoteAction::Press, 60),
                (NoteAction::Release, 60),
            ]
        );
    }

    #[test]
    fn zero_length_note_does_not_cut_a_twin_short() {
        let mut track = NoteTrack::new();
        track.add(note(60), 5, 0, Instrument::default());
        track.add(note(60), 5, 3, Instrument::default());

        let events = track.to_events().unwrap();
        let actions: Vec<(u64, NoteAction)> = events
            .ticked()
            .filter_map(|t| Some((t.accumulated_ticks(), t.event().note_identity()?.action)))
            .collect();
        assert_eq!(
            actions,
            vec![
                (5, NoteAction::Press),
                (5, NoteAction::Release),
                (5, NoteAction::Press),
                (8, NoteAction::Release),
            ]
        );

        let spans: Vec<(u32, u32)> = events
            .to_notes()
            .notes()
            .iter()
            .map(|n| (n.begin, n.duration))
            .collect();
        assert_eq!(spans, vec![(5, 0), (5, 3)]);
    }

    #[test]
    fn zero_length_note_added_after_its_twin() {
        let mut track = NoteTrack::new();
        track.add(note(60), 5, 3, Instrument::default());
        track.add(note(60), 5, 0, Instrument::default());

        let spans: Vec<(u32, u32)> = track
            .to_events()
            .unwrap()
            .to_notes()
            .notes()
            .iter()
            .map(|n| (n.begin, n.duration))
            .collect();
        assert_eq!(spans, vec![(5, 0), (5, 3)]);
    }

    /// Runs the logged paths when built with `--features tracing`
    #[cfg(feature = "tracing")]
    #[test]
    fn logged_paths_still_produce_output() {
        let mut track = NoteTrack::new();
        for p in 1..=17u8 {
            track.add(note(p), 0, 1, Instrument::from_program(p).unwrap());
        }
        let mut events = track.to_events().unwrap();
        assert_eq!(events.to_notes().len(), 17);

        events.add(TrackEvent::voice(
            VarLength::ZERO,
            ChannelVoiceMessage::note_on(Channel::One, note(90), Velocity::MAX),
        ));
        assert_eq!(events.to_notes().len(), 17);
    }

    #[test]
    fn huge_gaps_are_rejected() {
        let mut track = NoteTrack::new();
        track.add(note(60), u32::MAX, u32::MAX, Instrument::default());
        assert!(matches!(
            track.to_events(),
            Err(EncodeError::VarLength(_))
        ));
    }

    #[test]
    fn scheduling_is_deterministic() {
        let mut track = NoteTrack::new();
        for i in 0..20u8 {
            track.add(note(40 + i), (i as u32 * 7) % 11, i as u32 % 3, Instrument::default());
        }
        assert_eq!(track.data().unwrap(), track.data().unwrap());
    }

    #[test]
    fn empty_track() {
        let events = NoteTrack::new().to_events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events.size(), 8 + 8 + 4);
    }

    #[test]
    fn recover_notes_from_events() {
        let mut track = NoteTrack::new();
        track.add(note(60), 0, 4, Instrument::Violin);
        track.add(note(60), 4, 4, Instrument::Cello);
        track.add(note(64), 2, 0, Instrument::Violin);

        let mut recovered: Vec<NoteTime> = track.to_events().unwrap().to_notes().notes().to_vec();
        let mut expected: Vec<NoteTime> = track.notes().to_vec();
        recovered.sort_by_key(|n| (n.begin, n.note));
        expected.sort_by_key(|n| (n.begin, n.note));
        assert_eq!(recovered, expected);
    }
}
