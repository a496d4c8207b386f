#![doc = r#"
Channel voice messages

# Layout
```text
(status << 4 | channel)  p1  [p2]
```
The second parameter byte is left out whenever it is zero. Program Change and
Channel Pressure never write one; a Note On or Note Off with velocity zero
is two bytes long.
"#]
mod voice;
pub use voice::*;

use alloc::vec::Vec;

use crate::{Channel, Instrument, Note, Velocity};

/// A [`VoiceEvent`] addressed to a [`Channel`]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelVoiceMessage {
    channel: Channel,
    event: VoiceEvent,
}

impl ChannelVoiceMessage {
    /// Create a new channel voice message
    pub const fn new(channel: Channel, event: VoiceEvent) -> Self {
        Self { channel, event }
    }

    /// Press `note` on `channel`
    pub const fn note_on(channel: Channel, note: Note, velocity: Velocity) -> Self {
        Self::new(channel, VoiceEvent::NoteOn { note, velocity })
    }

    /// Release `note` on `channel`
    pub const fn note_off(channel: Channel, note: Note, velocity: Velocity) -> Self {
        Self::new(channel, VoiceEvent::NoteOff { note, velocity })
    }

    /// Switch `channel` to `program`
    pub const fn program_change(channel: Channel, program: Instrument) -> Self {
        Self::new(channel, VoiceEvent::ProgramChange { program })
    }

    /// The channel the message is addressed to
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// What happens on the channel
    pub const fn event(&self) -> &VoiceEvent {
        &self.event
    }

    /// The status byte: the event's nibble over the channel's
    pub const fn status(&self) -> u8 {
        (self.event.status_nibble() << 4) | (self.channel.to_byte() & 0x0F)
    }

    /// Encoded length without a delta-time: 2, or 3 with a non-zero second parameter
    pub const fn byte_len(&self) -> usize {
        match self.event.params() {
            (_, 0) => 2,
            _ => 3,
        }
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        let (p1, p2) = self.event.params();
        out.push(self.status());
        out.push(p1);
        if p2 != 0 {
            out.push(p2);
        }
    }
}

#[test]
fn second_parameter_omitted_when_zero() {
    use alloc::vec;
    use pretty_assertions::assert_eq;

    let write = |msg: ChannelVoiceMessage| {
        let mut out = Vec::new();
        msg.write_into(&mut out);
        assert_eq!(out.len(), msg.byte_len());
        out
    };

    let note = Note::from_byte_unchecked(1);
    let on = ChannelVoiceMessage::note_on(Channel::Two, note, Velocity::MAX);
    assert_eq!(write(on), vec![0x91, 0x01, 0x7F]);

    let silent = ChannelVoiceMessage::note_on(Channel::Two, note, Velocity::ZERO);
    assert_eq!(write(silent), vec![0x91, 0x01]);

    let program = ChannelVoiceMessage::program_change(Channel::Sixteen, Instrument::Violin);
    assert_eq!(write(program), vec![0xCF, 40]);

    let bend = ChannelVoiceMessage::new(
        Channel::One,
        VoiceEvent::PitchBend(PitchBend::new(0x0005).unwrap()),
    );
    assert_eq!(write(bend), vec![0xE0, 0x05]);
}
