use thiserror::Error;

#[doc = r#"
A value fell outside the range its wire representation can hold.

Every constructor that can produce bytes which a Standard MIDI File cannot
represent returns this error instead of silently truncating.
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Variable-length quantities hold at most 28 bits (`0x0FFF_FFFF`).
    #[error("{0} does not fit in a variable-length quantity (max 0x0FFFFFFF)")]
    VarLength(u64),
    /// Data bytes must have a leading 0 bit.
    #[error("{0} is not a valid data byte (0-127)")]
    DataByte(u8),
    /// Pitch bend values are 14 bits.
    #[error("{0} is not a valid pitch bend value (0-16383)")]
    PitchBend(u16),
    /// General MIDI programs are numbered 1-128.
    #[error("{0} is not a General MIDI program (1-128)")]
    Program(u8),
    /// An invalid SMPTE offset
    #[error("Smpte offset: {0}")]
    Smpte(#[from] SmpteError),
}

/// An error describing an invalid SMPTE offset
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmpteError {
    /// Hours must be 0-23
    #[error("Invalid hour offset: {0}")]
    HourOffset(u8),
    /// Minutes must be 0-59
    #[error("Invalid minute offset: {0}")]
    MinuteOffset(u8),
    /// Seconds must be 0-59
    #[error("Invalid second offset: {0}")]
    SecondOffset(u8),
    /// The frame must be lower than the frame rate
    #[error("Invalid frame {frame} for {fps} fps")]
    Frame {
        /// The offending frame
        frame: u8,
        /// The nominal frame rate
        fps: u8,
    },
    /// Subframes are hundredths of a frame, 0-99
    #[error("Invalid subframe: {0}")]
    Subframe(u8),
}

/// An error produced when strictly parsing note notation such as `"C#4"`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NoteParseError {
    /// Notation must be 2 to 4 characters long
    #[error("Note notation must be 2-4 characters, got {0}")]
    Length(usize),
    /// The note letter must be A-G (either case)
    #[error("Invalid note letter {0:?}")]
    Letter(char),
    /// Only `#` and `b` may follow the letter
    #[error("Invalid accidental {0:?}")]
    Accidental(char),
    /// Octaves range from 0 to 10
    #[error("Invalid octave")]
    Octave,
    /// The note is above G10 or below C0
    #[error("Note is outside the MIDI range (C0-G10)")]
    OutOfRange,
}

/// No General MIDI instrument goes by the given name
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unknown General MIDI instrument name")]
pub struct UnknownInstrument;

/// Errors that prevent a [`MidiFile`](crate::file::MidiFile) from being assembled.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FileError {
    /// A track could not be encoded
    #[error("Encoding track: {0}")]
    Encode(#[from] EncodeError),
    /// The header stores the track count in 16 bits
    #[error("{0} tracks do not fit in a MIDI header (max 65535)")]
    TooManyTracks(usize),
    /// Format 0 files hold exactly one track
    #[error("A single multichannel (format 0) file holds exactly one track")]
    MultipleTracksForSingleMultiChannel,
}
