#![doc = r#"
System exclusive messages

# Layout
```text
status  VLQ(len)  data  [F7]
```
`len` counts the trailing `F7` when it is present. A normal message starts
with `F0`. A message split across several events starts with `F0` and
continues with `F7` packets, the last of which carries the terminator.
Authorization ("escape") packets use `F7` and are written as-is.
"#]

use alloc::vec::Vec;

use crate::vlq::VarLength;

/// A system exclusive message
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemExclusiveMessage {
    /// An `F0` message
    Normal {
        /// The payload
        data: Vec<u8>,
        /// Whether an `F7` is appended
        terminated: bool,
    },
    /// An `F7` continuation packet of a divided message
    Divided {
        /// The payload
        data: Vec<u8>,
        /// Whether this is the last packet, which appends `F7`
        terminated: bool,
    },
    /// An `F7` escape, never terminated
    Authorization {
        /// Bytes sent verbatim
        data: Vec<u8>,
    },
}

impl SystemExclusiveMessage {
    /// A complete `F0 ... F7` message
    pub fn normal(data: impl Into<Vec<u8>>) -> Self {
        Self::Normal {
            data: data.into(),
            terminated: true,
        }
    }

    /// The first packet of a divided message, written without a terminator
    pub fn divided_start(data: impl Into<Vec<u8>>) -> Self {
        Self::Normal {
            data: data.into(),
            terminated: false,
        }
    }

    /// A middle packet of a divided message
    pub fn continuation(data: impl Into<Vec<u8>>) -> Self {
        Self::Divided {
            data: data.into(),
            terminated: false,
        }
    }

    /// The last packet of a divided message
    pub fn divided_end(data: impl Into<Vec<u8>>) -> Self {
        Self::Divided {
            data: data.into(),
            terminated: true,
        }
    }

    /// An escape packet
    pub fn authorization(data: impl Into<Vec<u8>>) -> Self {
        Self::Authorization { data: data.into() }
    }

    /// `F0` for normal messages, `F7` otherwise
    pub const fn status(&self) -> u8 {
        match self {
            Self::Normal { .. } => 0xF0,
            Self::Divided { .. } | Self::Authorization { .. } => 0xF7,
        }
    }

    /// The payload, without the terminator
    pub fn data(&self) -> &[u8] {
        match self {
            Self::Normal { data, .. }
            | Self::Divided { data, .. }
            | Self::Authorization { data } => data,
        }
    }

    /// Whether a trailing `F7` is written
    pub const fn is_terminated(&self) -> bool {
        match self {
            Self::Normal { terminated, .. } | Self::Divided { terminated, .. } => *terminated,
            Self::Authorization { .. } => false,
        }
    }

    /// The value written as the length: the payload plus the terminator if any
    pub fn payload_len(&self) -> usize {
        self.data().len() + self.is_terminated() as usize
    }

    /// Encoded length without a delta-time
    pub fn byte_len(&self) -> usize {
        let len = self.payload_len();
        1 + crate::vlq::length_field_len(len) + len
    }

    /// Writes the message assuming its length was validated.
    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        out.push(self.status());
        out.extend_from_slice(VarLength::new_unchecked(self.payload_len() as u32).as_bytes());
        out.extend_from_slice(self.data());
        if self.is_terminated() {
            out.push(0xF7);
        }
    }
}

#[test]
fn terminator_counts_towards_length() {
    use alloc::vec;
    use pretty_assertions::assert_eq;

    let write = |msg: SystemExclusiveMessage| {
        let mut out = Vec::new();
        msg.write_into(&mut out);
        assert_eq!(out.len(), msg.byte_len());
        out
    };

    assert_eq!(
        write(SystemExclusiveMessage::normal([0x43, 0x12])),
        vec![0xF0, 0x03, 0x43, 0x12, 0xF7]
    );
    assert_eq!(
        write(SystemExclusiveMessage::divided_start([1])),
        vec![0xF0, 0x01, 0x01]
    );
    assert_eq!(
        write(SystemExclusiveMessage::continuation([1, 2])),
        vec![0xF7, 0x02, 0x01, 0x02]
    );
    assert_eq!(
        write(SystemExclusiveMessage::divided_end([1])),
        vec![0xF7, 0x02, 0x01, 0xF7]
    );
    assert_eq!(
        write(SystemExclusiveMessage::authorization([0xF3, 0x01])),
        vec![0xF7, 0x02, 0xF3, 0x01]
    );
}
