use crate::Note;

#[doc = r#"
Heptatonic scales, used to pick notes by degree.

Degrees are counted from 1 (the root). Degrees past 7 continue into the
octaves above, so degree 8 is the root an octave up.

```rust
# use midi_compose::prelude::*;
let a = Note::from_notation("A3");

assert_eq!(Scale::NaturalMinor.degree(a, 3), Note::from_notation("C4"));
assert_eq!(Scale::HarmonicMinor.degree(a, 7), Note::from_notation("G#4"));
assert_eq!(Scale::Major.degree(a, 8), Note::from_notation("A4"));
```
"#]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scale {
    /// Ionian: W W H W W W H
    Major,
    /// Aeolian: W H W W H W W
    NaturalMinor,
    /// Natural minor with a raised seventh
    HarmonicMinor,
}

impl Scale {
    /// Semitones above the root for degrees 1 through 7
    pub const fn steps(&self) -> [u8; 7] {
        match self {
            Scale::Major => [0, 2, 4, 5, 7, 9, 11],
            Scale::NaturalMinor => [0, 2, 3, 5, 7, 8, 10],
            Scale::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
        }
    }

    /// The note at `degree` of this scale rooted on `root`.
    ///
    /// Degree 0 is treated as 1. Results above `G10` saturate.
    pub fn degree(&self, root: Note, degree: u8) -> Note {
        let k = degree.saturating_sub(1);
        let octaves = 12u8.saturating_mul(k / 7);
        root + octaves.saturating_add(self.steps()[(k % 7) as usize])
    }
}

#[test]
fn major_scale_walks_an_octave() {
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    let c = Note::from_notation("C4");
    let walked: Vec<u8> = (1..=8).map(|d| Scale::Major.degree(c, d).byte()).collect();
    assert_eq!(walked, [48, 50, 52, 53, 55, 57, 59, 60]);
    assert_eq!(Scale::Major.degree(c, 0), c);
    assert_eq!(Scale::Major.degree(c, 10), Note::from_notation("E5"));
}

#[test]
fn minor_scales_differ_on_the_seventh() {
    let root = Note::from_notation("D2");
    for d in 1..7 {
        assert_eq!(
            Scale::NaturalMinor.degree(root, d),
            Scale::HarmonicMinor.degree(root, d)
        );
    }
    assert_eq!(Scale::NaturalMinor.degree(root, 7), Note::from_notation("C3"));
    assert_eq!(Scale::HarmonicMinor.degree(root, 7), Note::from_notation("C#3"));
}

#[test]
fn high_degrees_saturate() {
    let root = Note::from_notation("C9");
    assert_eq!(Scale::Major.degree(root, 200), Note::HIGHEST);
}
