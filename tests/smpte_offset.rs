use midi_compose::prelude::*;
use pretty_assertions::assert_eq;

/// Builds, byte by byte, the format 0 file that `write_midi_with_smpte_offset`
/// should produce
fn expected_midi_with_smpte_offset(
    fps: SmpteFps,
    hour: u8,
    minute: u8,
    second: u8,
    frame: u8,
    subframe: u8,
) -> Vec<u8> {
    let mut bytes = Vec::new();

    // MIDI Header
    bytes.extend_from_slice(b"MThd"); // Header chunk type
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x06]); // Header length (6 bytes)
    bytes.extend_from_slice(&[0x00, 0x00]); // Format 0 (single track)
    bytes.extend_from_slice(&[0x00, 0x01]); // Number of tracks (1)

    let fps_byte = match fps {
        SmpteFps::TwentyFour => 0xE8, // -24 in two's complement
        SmpteFps::TwentyFive => 0xE7, // -25 in two's complement
        SmpteFps::TwentyNine => 0xE3, // -29 in two's complement
        SmpteFps::Thirty => 0xE2,     // -30 in two's complement
    };
    bytes.push(fps_byte);
    bytes.push(40); // 40 ticks per frame

    // Track Header
    bytes.extend_from_slice(b"MTrk");
    let track_length_pos = bytes.len();
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // Placeholder for length
    let track_start = bytes.len();

    // SMPTE Offset Meta Event
    bytes.extend_from_slice(&[0x00, 0xFF, 0x54, 0x05]);
    let frame_type_bits = match fps {
        SmpteFps::TwentyFour => 0b00,
        SmpteFps::TwentyFive => 0b01,
        SmpteFps::TwentyNine => 0b10,
        SmpteFps::Thirty => 0b11,
    };
    bytes.push((frame_type_bits << 5) | (hour & 0x1F)); // Frame type + hours
    bytes.push(minute);
    bytes.push(second);
    bytes.push(frame);
    bytes.push(subframe);

    // Note On, channel 0, middle C, velocity 100
    bytes.extend_from_slice(&[0x00, 0x90, 0x3C, 0x64]);
    // 96 ticks later, Note Off with release velocity 64
    bytes.extend_from_slice(&[0x60, 0x80, 0x3C, 0x40]);
    // End of Track
    bytes.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);

    let track_length = bytes.len() - track_start;
    bytes[track_length_pos..track_length_pos + 4]
        .copy_from_slice(&(track_length as u32).to_be_bytes());

    bytes
}

fn write_midi_with_smpte_offset(offset: SmpteOffset) -> MidiFile {
    let middle_c = Note::from_notation("C5");
    let events = [
        TrackEvent::new(0, MetaMessage::SmpteOffset(offset)),
        TrackEvent::new(
            0,
            ChannelVoiceMessage::note_on(Channel::One, middle_c, Velocity::new(100).unwrap()),
        ),
        TrackEvent::new(
            96,
            ChannelVoiceMessage::note_off(Channel::One, middle_c, Velocity::new(64).unwrap()),
        ),
        TrackEvent::new(0, MetaMessage::EndOfTrack),
    ];
    let track: EventTrack = events.into_iter().map(Result::unwrap).collect();

    MidiFile::single_multichannel(track, Timing::new_smpte(offset.fps(), 40))
}

fn check(fps: SmpteFps, hour: u8, minute: u8, second: u8, frame: u8, subframe: u8) {
    let offset = SmpteOffset::new(fps, hour, minute, second, frame, subframe).unwrap();
    let file = write_midi_with_smpte_offset(offset);

    let expected = expected_midi_with_smpte_offset(fps, hour, minute, second, frame, subframe);
    assert_eq!(file.to_bytes().unwrap(), expected);
    assert_eq!(file.size().unwrap(), expected.len());
}

#[test]
fn test_smpte_offset_24fps() {
    check(SmpteFps::TwentyFour, 12, 30, 15, 18, 50);
}

#[test]
fn test_smpte_offset_25fps() {
    check(SmpteFps::TwentyFive, 1, 2, 3, 24, 99);
}

#[test]
fn test_smpte_offset_29fps() {
    check(SmpteFps::TwentyNine, 23, 59, 59, 29, 0);
}

#[test]
fn test_smpte_offset_30fps() {
    check(SmpteFps::Thirty, 0, 0, 0, 0, 0);
}

#[test]
fn test_smpte_offset_micros() {
    let offset = SmpteOffset::new(SmpteFps::Thirty, 1, 0, 0, 15, 0).unwrap();
    assert_eq!(offset.as_micros(), 3_600_500_000.0);
}
