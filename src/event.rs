#![doc = r#"
Track events: a message and the delta-time that precedes it

```rust
# use midi_compose::prelude::*;
let marker = TrackEvent::new(512, MetaMessage::Marker("abc".into())).unwrap();

assert_eq!(
    marker.to_bytes(),
    [0x84, 0x00, 0xFF, 0x06, 0x03, 0x61, 0x62, 0x63]
);
assert_eq!(marker.byte_len(), 8);
```
"#]

use alloc::vec::Vec;

use crate::{
    Channel, EncodeError, Note,
    message::{ChannelVoiceMessage, TrackMessage, VoiceEvent},
    vlq::VarLength,
};

#[doc = r#"
A single event of a track chunk.

Construction checks that the delta-time and any payload length fit in a
variable-length quantity, so encoding never fails afterwards.
"#]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedTrackEvent"))]
pub struct TrackEvent {
    delta_ticks: VarLength,
    message: TrackMessage,
}

/// A deserialized event, checked by [`TrackEvent::new`] before use
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedTrackEvent {
    delta_ticks: u32,
    message: TrackMessage,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedTrackEvent> for TrackEvent {
    type Error = EncodeError;
    fn try_from(value: UncheckedTrackEvent) -> Result<Self, Self::Error> {
        Self::new(value.delta_ticks, value.message)
    }
}

impl TrackEvent {
    /// Create a new event, `delta_ticks` after the previous one.
    ///
    /// # Errors
    /// if `delta_ticks` or the message's payload length exceeds [`VarLength::MAX`]
    pub fn new(delta_ticks: u32, message: impl Into<TrackMessage>) -> Result<Self, EncodeError> {
        let message = message.into();
        if let Some(len) = message.payload_len() {
            VarLength::from_u64(len as u64)?;
        }
        Ok(Self {
            delta_ticks: VarLength::new(delta_ticks)?,
            message,
        })
    }

    /// A channel voice event, which has no payload length to check
    pub(crate) fn voice(delta_ticks: VarLength, message: ChannelVoiceMessage) -> Self {
        Self {
            delta_ticks,
            message: TrackMessage::ChannelVoice(message),
        }
    }

    /// Ticks since the previous event
    pub const fn delta_ticks(&self) -> u32 {
        self.delta_ticks.value()
    }

    /// Change the ticks since the previous event
    ///
    /// # Errors
    /// if `delta_ticks` > [`VarLength::MAX`]. The event is left unchanged.
    pub fn set_delta_ticks(&mut self, delta_ticks: u32) -> Result<(), EncodeError> {
        self.delta_ticks = VarLength::new(delta_ticks)?;
        Ok(())
    }

    /// The message carried by the event
    pub const fn message(&self) -> &TrackMessage {
        &self.message
    }

    /// Encoded length, delta-time included
    pub fn byte_len(&self) -> usize {
        self.delta_ticks.len() + self.message.byte_len()
    }

    /// Append the encoded event to `out`
    pub fn write_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.delta_ticks.as_bytes());
        self.message.write_into(out);
    }

    /// The encoded event
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());
        self.write_into(&mut out);
        out
    }

    /// Identifies the key a Note On or Note Off acts on.
    ///
    /// Every other message returns `None`.
    pub fn note_identity(&self) -> Option<NoteIdentity> {
        let TrackMessage::ChannelVoice(voice) = &self.message else {
            return None;
        };
        let action = match voice.event() {
            VoiceEvent::NoteOn { .. } => NoteAction::Press,
            VoiceEvent::NoteOff { .. } => NoteAction::Release,
            _ => return None,
        };
        Some(NoteIdentity {
            note: voice.event().note()?,
            channel: voice.channel(),
            action,
        })
    }
}

/// Whether a note event starts or ends a note
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteAction {
    /// Note On
    Press,
    /// Note Off
    Release,
}

/// The key, channel and direction of a note event, used to pair presses with releases
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteIdentity {
    /// The key
    pub note: Note,
    /// The channel
    pub channel: Channel,
    /// Press or release
    pub action: NoteAction,
}

impl NoteIdentity {
    /// Returns true if `other` releases the note this identity presses
    pub fn is_released_by(&self, other: &NoteIdentity) -> bool {
        self.action == NoteAction::Press
            && other.action == NoteAction::Release
            && self.note == other.note
            && self.channel == other.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Instrument, Velocity,
        message::{KeySignature, MetaMessage, SystemExclusiveMessage, Tempo},
    };
    use alloc::{string::String, vec};
    use pretty_assertions::assert_eq;

    fn note(byte: u8) -> Note {
        Note::from_byte(byte).unwrap()
    }

    #[test]
    fn note_off_bytes() {
        let off = ChannelVoiceMessage::note_off(Channel::Two, note(1), Velocity::new(1).unwrap());
        let event = TrackEvent::new(0, off).unwrap();
        assert_eq!(event.to_bytes(), vec![0x00, 0x81, 0x01, 0x01]);
        assert_eq!(event.byte_len(), 4);
    }

    #[test]
    fn program_change_writes_program_minus_one() {
        let pc = ChannelVoiceMessage::program_change(Channel::One, Instrument::AcousticGrandPiano);
        let event = TrackEvent::new(0, pc).unwrap();
        assert_eq!(event.to_bytes(), vec![0x00, 0xC0, 0x00]);
    }

    #[test]
    fn meta_event_bytes() {
        let seq = TrackEvent::new(0, MetaMessage::SequenceNumber(1548)).unwrap();
        assert_eq!(seq.to_bytes(), vec![0x00, 0xFF, 0x00, 0x02, 0x06, 0x0C]);

        let tempo = TrackEvent::new(0, MetaMessage::Tempo(Tempo::new(1548))).unwrap();
        assert_eq!(tempo.to_bytes(), vec![0x00, 0xFF, 0x51, 0x03, 0x00, 0x06, 0x0C]);

        let key = TrackEvent::new(0, MetaMessage::KeySignature(KeySignature::new(-2, true)))
            .unwrap();
        assert_eq!(key.to_bytes(), vec![0x00, 0xFF, 0x59, 0x02, 0xFE, 0x01]);

        let text = TrackEvent::new(0, MetaMessage::Text(String::new())).unwrap();
        assert_eq!(text.to_bytes(), vec![0x00, 0xFF, 0x01, 0x00]);
    }

    #[test]
    fn sysex_event_bytes() {
        let start = TrackEvent::new(0, SystemExclusiveMessage::divided_start([1])).unwrap();
        assert_eq!(start.to_bytes(), vec![0x00, 0xF0, 0x01, 0x01]);

        let end = TrackEvent::new(0, SystemExclusiveMessage::divided_end([1])).unwrap();
        assert_eq!(end.to_bytes(), vec![0x00, 0xF7, 0x02, 0x01, 0xF7]);
    }

    #[test]
    fn byte_len_matches_bytes() {
        let events = [
            TrackEvent::new(VarLength::MAX, MetaMessage::EndOfTrack).unwrap(),
            TrackEvent::new(0x3FFF, MetaMessage::Lyric("la".into())).unwrap(),
            TrackEvent::new(
                0x80,
                SystemExclusiveMessage::normal(vec![0u8; 300]),
            )
            .unwrap(),
            TrackEvent::new(
                5,
                ChannelVoiceMessage::note_on(Channel::Sixteen, note(127), Velocity::ZERO),
            )
            .unwrap(),
        ];
        for event in events {
            assert_eq!(event.to_bytes().len(), event.byte_len());
        }
    }

    #[test]
    fn set_delta_ticks() {
        let mut event = TrackEvent::new(0, MetaMessage::EndOfTrack).unwrap();
        event.set_delta_ticks(200).unwrap();
        assert_eq!(event.delta_ticks(), 200);
        assert_eq!(event.to_bytes(), vec![0x81, 0x48, 0xFF, 0x2F, 0x00]);

        assert_eq!(
            event.set_delta_ticks(0x1000_0000),
            Err(EncodeError::VarLength(0x1000_0000))
        );
        assert_eq!(event.delta_ticks(), 200);
        assert!(TrackEvent::new(u32::MAX, MetaMessage::EndOfTrack).is_err());
    }

    #[test]
    fn note_identities() {
        let on = TrackEvent::new(
            0,
            ChannelVoiceMessage::note_on(Channel::Three, note(60), Velocity::MAX),
        )
        .unwrap();
        let off = TrackEvent::new(
            4,
            ChannelVoiceMessage::note_off(Channel::Three, note(60), Velocity::MAX),
        )
        .unwrap();
        let other_channel = TrackEvent::new(
            4,
            ChannelVoiceMessage::note_off(Channel::Four, note(60), Velocity::MAX),
        )
        .unwrap();

        let press = on.note_identity().unwrap();
        assert_eq!(press.action, NoteAction::Press);
        assert_eq!(press.note, note(60));
        assert!(press.is_released_by(&off.note_identity().unwrap()));
        assert!(!press.is_released_by(&other_channel.note_identity().unwrap()));

        let pc = TrackEvent::new(
            0,
            ChannelVoiceMessage::program_change(Channel::One, Instrument::Violin),
        )
        .unwrap();
        assert_eq!(pc.note_identity(), None);
        let meta = TrackEvent::new(0, MetaMessage::EndOfTrack).unwrap();
        assert_eq!(meta.note_identity(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_events_are_checked() {
        let unchecked = |delta_ticks| UncheckedTrackEvent {
            delta_ticks,
            message: MetaMessage::EndOfTrack.into(),
        };
        assert_eq!(
            TrackEvent::try_from(unchecked(0x1000_0000)),
            Err(EncodeError::VarLength(0x1000_0000))
        );
        assert_eq!(
            TrackEvent::try_from(unchecked(200)),
            TrackEvent::new(200, MetaMessage::EndOfTrack)
        );
    }

    #[test]
    fn clones_are_independent() {
        let original = TrackEvent::new(3, MetaMessage::Marker("a".into())).unwrap();
        let mut copy = original.clone();
        copy.set_delta_ticks(9).unwrap();
        assert_eq!(original.delta_ticks(), 3);
        assert_eq!(copy.delta_ticks(), 9);
    }
}
