#![doc = r#"
Meta messages: information about the sequence rather than sound

# Layout
```text
FF  type  VLQ(len)  payload
```
"#]

mod smpte_offset;
pub use smpte_offset::*;

mod tempo;
pub use tempo::*;

mod time_signature;
pub use time_signature::*;

use alloc::{string::String, vec::Vec};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{Channel, vlq::VarLength};

/// The type byte that follows `0xFF` in a meta message
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaType {
    SequenceNumber = 0x00,
    Text = 0x01,
    Copyright = 0x02,
    TrackName = 0x03,
    InstrumentName = 0x04,
    Lyric = 0x05,
    Marker = 0x06,
    CuePoint = 0x07,
    ChannelPrefix = 0x20,
    EndOfTrack = 0x2F,
    Tempo = 0x51,
    SmpteOffset = 0x54,
    TimeSignature = 0x58,
    KeySignature = 0x59,
    SequencerSpecific = 0x7F,
}

#[doc = r#"
A meta message and its payload.

```rust
# use midi_compose::prelude::*;
let marker = MetaMessage::Marker("abc".into());

assert_eq!(marker.meta_type(), MetaType::Marker);
assert_eq!(marker.payload_len(), 3);
```
"#]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaMessage {
    /// The number of the sequence, written as a big-endian `u16`
    SequenceNumber(u16),
    /// Free text
    Text(String),
    /// A copyright notice
    Copyright(String),
    /// The name of the sequence or track
    TrackName(String),
    /// A description of the instrumentation
    InstrumentName(String),
    /// A lyric, usually one syllable
    Lyric(String),
    /// A rehearsal letter or section name
    Marker(String),
    /// A description of something happening on stage or screen
    CuePoint(String),
    /// Associates the following meta and sysex messages with a channel
    ChannelPrefix(Channel),
    /// Marks the end of the track. Every track chunk ends with one.
    EndOfTrack,
    /// A tempo change
    Tempo(Tempo),
    /// Where the track starts in SMPTE time
    SmpteOffset(SmpteOffset),
    /// A time signature
    TimeSignature(TimeSignature),
    /// A key signature
    KeySignature(KeySignature),
    /// Raw bytes for a particular sequencer
    SequencerSpecific(Vec<u8>),
}

impl MetaMessage {
    /// The type byte of this message
    pub const fn meta_type(&self) -> MetaType {
        match self {
            MetaMessage::SequenceNumber(_) => MetaType::SequenceNumber,
            MetaMessage::Text(_) => MetaType::Text,
            MetaMessage::Copyright(_) => MetaType::Copyright,
            MetaMessage::TrackName(_) => MetaType::TrackName,
            MetaMessage::InstrumentName(_) => MetaType::InstrumentName,
            MetaMessage::Lyric(_) => MetaType::Lyric,
            MetaMessage::Marker(_) => MetaType::Marker,
            MetaMessage::CuePoint(_) => MetaType::CuePoint,
            MetaMessage::ChannelPrefix(_) => MetaType::ChannelPrefix,
            MetaMessage::EndOfTrack => MetaType::EndOfTrack,
            MetaMessage::Tempo(_) => MetaType::Tempo,
            MetaMessage::SmpteOffset(_) => MetaType::SmpteOffset,
            MetaMessage::TimeSignature(_) => MetaType::TimeSignature,
            MetaMessage::KeySignature(_) => MetaType::KeySignature,
            MetaMessage::SequencerSpecific(_) => MetaType::SequencerSpecific,
        }
    }

    /// Length of the payload, not counting the type or length bytes
    pub fn payload_len(&self) -> usize {
        match self {
            MetaMessage::SequenceNumber(_) => 2,
            MetaMessage::Text(s)
            | MetaMessage::Copyright(s)
            | MetaMessage::TrackName(s)
            | MetaMessage::InstrumentName(s)
            | MetaMessage::Lyric(s)
            | MetaMessage::Marker(s)
            | MetaMessage::CuePoint(s) => s.len(),
            MetaMessage::ChannelPrefix(_) => 1,
            MetaMessage::EndOfTrack => 0,
            MetaMessage::Tempo(_) => 3,
            MetaMessage::SmpteOffset(_) => 5,
            MetaMessage::TimeSignature(_) => 4,
            MetaMessage::KeySignature(_) => 2,
            MetaMessage::SequencerSpecific(data) => data.len(),
        }
    }

    /// Encoded length without a delta-time.
    ///
    /// Payloads longer than a variable-length quantity can describe are
    /// rejected when the message is wrapped in a [`TrackEvent`](crate::event::TrackEvent).
    pub fn byte_len(&self) -> usize {
        let len = self.payload_len();
        2 + crate::vlq::length_field_len(len) + len
    }

    /// Writes the message assuming its payload length was validated.
    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        out.push(0xFF);
        out.push(self.meta_type().into());
        out.extend_from_slice(VarLength::new_unchecked(self.payload_len() as u32).as_bytes());
        match self {
            MetaMessage::SequenceNumber(n) => out.extend_from_slice(&n.to_be_bytes()),
            MetaMessage::Text(s)
            | MetaMessage::Copyright(s)
            | MetaMessage::TrackName(s)
            | MetaMessage::InstrumentName(s)
            | MetaMessage::Lyric(s)
            | MetaMessage::Marker(s)
            | MetaMessage::CuePoint(s) => out.extend_from_slice(s.as_bytes()),
            MetaMessage::ChannelPrefix(c) => out.push(c.to_byte()),
            MetaMessage::EndOfTrack => {}
            MetaMessage::Tempo(t) => out.extend_from_slice(&t.to_bytes()),
            MetaMessage::SmpteOffset(o) => out.extend_from_slice(&o.to_bytes()),
            MetaMessage::TimeSignature(t) => out.extend_from_slice(&t.to_bytes()),
            MetaMessage::KeySignature(k) => out.extend_from_slice(&k.to_bytes()),
            MetaMessage::SequencerSpecific(data) => out.extend_from_slice(data),
        }
    }
}

#[test]
fn meta_type_codes() {
    use pretty_assertions::assert_eq;

    assert_eq!(u8::from(MetaType::EndOfTrack), 0x2F);
    assert_eq!(MetaType::try_from(0x58u8).ok(), Some(MetaType::TimeSignature));
    assert_eq!(MetaType::try_from(0x08u8).ok(), None);
}

#[test]
fn write_meta_payloads() {
    use alloc::vec;
    use pretty_assertions::assert_eq;

    let write = |msg: MetaMessage| {
        let mut out = Vec::new();
        msg.write_into(&mut out);
        assert_eq!(out.len(), msg.byte_len());
        out
    };

    assert_eq!(write(MetaMessage::EndOfTrack), vec![0xFF, 0x2F, 0x00]);
    assert_eq!(
        write(MetaMessage::ChannelPrefix(Channel::Three)),
        vec![0xFF, 0x20, 0x01, 0x02]
    );
    assert_eq!(
        write(MetaMessage::TimeSignature(TimeSignature::default())),
        vec![0xFF, 0x58, 0x04, 0x04, 0x04, 0x18, 0x08]
    );

    let long = MetaMessage::SequencerSpecific(vec![0xAB; 200]);
    let bytes = write(long);
    assert_eq!(&bytes[..4], &[0xFF, 0x7F, 0x81, 0x48]);
    assert_eq!(bytes.len(), 204);
}
