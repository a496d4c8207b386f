use alloc::vec::Vec;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::track::Track;

#[doc = r#"
How the tracks of a file relate to one another, and the tracks themselves.

- Format 0 holds a single track that may use every channel.
- Format 1 holds tracks that play at the same time.
- Format 2 holds tracks that are independent sequences, played one after another.
"#]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    /// Format 0
    SingleMultiChannel(Track),
    /// Format 1
    Simultaneous(Vec<Track>),
    /// Format 2
    SequentiallyIndependent(Vec<Track>),
}

impl Format {
    /// Returns the format type of the format.
    pub const fn format_type(&self) -> FormatType {
        match self {
            Format::SingleMultiChannel(_) => FormatType::SingleMultiChannel,
            Format::Simultaneous(_) => FormatType::Simultaneous,
            Format::SequentiallyIndependent(_) => FormatType::SequentiallyIndependent,
        }
    }

    /// The tracks, in file order
    pub fn tracks(&self) -> &[Track] {
        match self {
            Format::SingleMultiChannel(track) => core::slice::from_ref(track),
            Format::Simultaneous(tracks) | Format::SequentiallyIndependent(tracks) => tracks,
        }
    }

    /// Number of tracks. Always 1 for [`Format::SingleMultiChannel`].
    pub fn track_count(&self) -> usize {
        self.tracks().len()
    }
}

/// The format code written into the header chunk
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
}

#[test]
fn format_codes() {
    assert_eq!(u16::from(FormatType::Simultaneous), 1);
    assert_eq!(FormatType::try_from(2u16).ok(), Some(FormatType::SequentiallyIndependent));
    assert_eq!(FormatType::try_from(3u16).ok(), None);

    let format = Format::SingleMultiChannel(Track::default());
    assert_eq!(format.track_count(), 1);
    assert_eq!(format.format_type(), FormatType::SingleMultiChannel);
}
