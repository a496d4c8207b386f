#![doc = r#"
Sets of notes sounded together

```rust
# use midi_compose::prelude::*;
let c_major = Chord::build(Note::from_notation("C4"), ChordKind::MajorTriad);

let names: Vec<String> = c_major.notes().map(|n| n.to_string()).collect();
assert_eq!(names, ["C4", "E4", "G4"]);
```
"#]

use alloc::collections::BTreeSet;

use crate::Note;

/// A set of distinct notes, ordered from lowest to highest.
///
/// Adding a note that is already present does nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chord {
    notes: BTreeSet<Note>,
}

impl Chord {
    /// An empty chord
    pub const fn new() -> Self {
        Self {
            notes: BTreeSet::new(),
        }
    }

    /// Collect notes into a chord, dropping duplicates
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        Self {
            notes: notes.into_iter().collect(),
        }
    }

    /// Build a chord of the given kind on top of `root`.
    ///
    /// Intervals that would climb past `G10` collapse onto it.
    pub fn build(root: Note, kind: ChordKind) -> Self {
        Self::from_notes(kind.intervals().iter().map(|&i| root + i))
    }

    /// Returns true if the note was not already part of the chord
    pub fn add(&mut self, note: Note) -> bool {
        self.notes.insert(note)
    }

    /// Returns true if the note was part of the chord
    pub fn remove(&mut self, note: Note) -> bool {
        self.notes.remove(&note)
    }

    /// Returns true if the note is part of the chord
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }

    /// The notes of the chord, lowest first
    pub fn notes(&self) -> impl ExactSizeIterator<Item = Note> + '_ {
        self.notes.iter().copied()
    }

    /// Number of distinct notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True if the chord holds no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl FromIterator<Note> for Chord {
    fn from_iter<T: IntoIterator<Item = Note>>(iter: T) -> Self {
        Self::from_notes(iter)
    }
}

impl Extend<Note> for Chord {
    fn extend<T: IntoIterator<Item = Note>>(&mut self, iter: T) {
        self.notes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Chord {
    type Item = &'a Note;
    type IntoIter = alloc::collections::btree_set::Iter<'a, Note>;
    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

/// Common triads and seventh chords
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChordKind {
    /// Root, major third, perfect fifth
    MajorTriad,
    /// Root, minor third, perfect fifth
    MinorTriad,
    /// Root, minor third, diminished fifth
    DiminishedTriad,
    /// Root, major third, augmented fifth
    AugmentedTriad,
    /// Major triad plus a major seventh
    MajorSeventh,
    /// Minor triad plus a minor seventh
    MinorSeventh,
    /// Major triad plus a minor seventh
    DominantSeventh,
    /// Diminished triad plus a diminished seventh
    DiminishedSeventh,
    /// Diminished triad plus a minor seventh
    HalfDiminishedSeventh,
    /// Minor triad plus a major seventh
    MinorMajorSeventh,
    /// Augmented triad plus a major seventh
    AugmentedMajorSeventh,
}

impl ChordKind {
    /// Semitones above the root of each note in the chord
    pub const fn intervals(&self) -> &'static [u8] {
        use ChordKind::*;
        match self {
            MajorTriad => &[0, 4, 7],
            MinorTriad => &[0, 3, 7],
            DiminishedTriad => &[0, 3, 6],
            AugmentedTriad => &[0, 4, 8],
            MajorSeventh => &[0, 4, 7, 11],
            MinorSeventh => &[0, 3, 7, 10],
            DominantSeventh => &[0, 4, 7, 10],
            DiminishedSeventh => &[0, 3, 6, 9],
            HalfDiminishedSeventh => &[0, 3, 6, 10],
            MinorMajorSeventh => &[0, 3, 7, 11],
            AugmentedMajorSeventh => &[0, 4, 8, 11],
        }
    }
}

#[test]
fn duplicates_collapse() {
    let c4 = Note::from_notation("C4");
    let mut chord = Chord::new();
    assert!(chord.add(c4));
    assert!(!chord.add(c4));
    assert_eq!(chord.len(), 1);

    assert!(chord.remove(c4));
    assert!(!chord.remove(c4));
    assert!(chord.is_empty());
}

#[test]
fn notes_are_ordered() {
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    let chord = Chord::from_notes([
        Note::from_notation("G4"),
        Note::from_notation("C4"),
        Note::from_notation("E4"),
        Note::from_notation("C4"),
    ]);
    let bytes: Vec<u8> = chord.notes().map(|n| n.byte()).collect();
    assert_eq!(bytes, [48, 52, 55]);
}

#[test]
fn chord_kinds() {
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    let root = Note::from_notation("A3");
    let bytes = |kind| {
        Chord::build(root, kind)
            .notes()
            .map(|n| n.byte() - root.byte())
            .collect::<Vec<_>>()
    };
    assert_eq!(bytes(ChordKind::MinorTriad), [0, 3, 7]);
    assert_eq!(bytes(ChordKind::DominantSeventh), [0, 4, 7, 10]);
    assert_eq!(bytes(ChordKind::HalfDiminishedSeventh), [0, 3, 6, 10]);
    assert_eq!(bytes(ChordKind::AugmentedMajorSeventh), [0, 4, 8, 11]);

    let top = Chord::build(Note::from_notation("F10"), ChordKind::MajorTriad);
    assert_eq!(top.len(), 2);
    assert!(top.contains(Note::HIGHEST));
}
