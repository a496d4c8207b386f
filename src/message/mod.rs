#![doc = r#"
The messages a track event can carry

# Hierarchy
```text
                     |---------------|
                     | Track Message |
                     |---------------|
                    /        |        \
|-----------------------| |------| |------------------|
| Channel Voice Message | | Meta | | System Exclusive |
|-----------------------| |------| |------------------|
```
"#]

mod channel;
pub use channel::*;

mod meta;
pub use meta::*;

mod sysex;
pub use sysex::*;

use alloc::vec::Vec;

/// Anything that can follow a delta-time inside a track chunk
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackMessage {
    /// A channel voice message
    ChannelVoice(ChannelVoiceMessage),
    /// A meta message
    Meta(MetaMessage),
    /// A system exclusive message
    SystemExclusive(SystemExclusiveMessage),
}

impl TrackMessage {
    /// Encoded length without a delta-time
    pub fn byte_len(&self) -> usize {
        match self {
            TrackMessage::ChannelVoice(m) => m.byte_len(),
            TrackMessage::Meta(m) => m.byte_len(),
            TrackMessage::SystemExclusive(m) => m.byte_len(),
        }
    }

    /// The length field written for meta and sysex messages
    pub(crate) fn payload_len(&self) -> Option<usize> {
        match self {
            TrackMessage::ChannelVoice(_) => None,
            TrackMessage::Meta(m) => Some(m.payload_len()),
            TrackMessage::SystemExclusive(m) => Some(m.payload_len()),
        }
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        match self {
            TrackMessage::ChannelVoice(m) => m.write_into(out),
            TrackMessage::Meta(m) => m.write_into(out),
            TrackMessage::SystemExclusive(m) => m.write_into(out),
        }
    }
}

impl From<ChannelVoiceMessage> for TrackMessage {
    fn from(value: ChannelVoiceMessage) -> Self {
        Self::ChannelVoice(value)
    }
}

impl From<MetaMessage> for TrackMessage {
    fn from(value: MetaMessage) -> Self {
        Self::Meta(value)
    }
}

impl From<SystemExclusiveMessage> for TrackMessage {
    fn from(value: SystemExclusiveMessage) -> Self {
        Self::SystemExclusive(value)
    }
}
