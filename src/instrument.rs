#![doc = r#"
The General MIDI Level 1 instrument table

Programs are numbered 1 to 128, the way instrument lists print them. A
Program Change message carries the number minus one.

```rust
# use midi_compose::prelude::*;
let violin: Instrument = "violin".parse().unwrap();

assert_eq!(u8::from(violin), 41);
assert_eq!(violin.program_byte(), 40);
assert_eq!(violin.name(), "Violin");
assert_eq!(Instrument::try_from(129u8).ok(), None);
```
"#]

use core::fmt;
use core::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{EncodeError, UnknownInstrument};

/// One of the 128 General MIDI programs
#[allow(missing_docs)]
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, IntoPrimitive, TryFromPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Instrument {
    // Piano
    AcousticGrandPiano = 1,
    BrightAcousticPiano,
    ElectricGrandPiano,
    HonkyTonkPiano,
    ElectricPiano1,
    ElectricPiano2,
    Harpsichord,
    Clavi,
    // Chromatic Percussion
    Celesta,
    Glockenspiel,
    MusicBox,
    Vibraphone,
    Marimba,
    Xylophone,
    TubularBells,
    Dulcimer,
    // Organ
    DrawbarOrgan,
    PercussiveOrgan,
    RockOrgan,
    ChurchOrgan,
    ReedOrgan,
    Accordion,
    Harmonica,
    TangoAccordion,
    // Guitar
    AcousticGuitarNylon,
    AcousticGuitarSteel,
    ElectricGuitarJazz,
    ElectricGuitarClean,
    ElectricGuitarMuted,
    OverdrivenGuitar,
    DistortionGuitar,
    GuitarHarmonics,
    // Bass
    AcousticBass,
    ElectricBassFinger,
    ElectricBassPick,
    FretlessBass,
    SlapBass1,
    SlapBass2,
    SynthBass1,
    SynthBass2,
    // Strings
    Violin,
    Viola,
    Cello,
    Contrabass,
    TremoloStrings,
    PizzicatoStrings,
    OrchestralHarp,
    Timpani,
    // Ensemble
    StringEnsemble1,
    StringEnsemble2,
    SynthStrings1,
    SynthStrings2,
    ChoirAahs,
    VoiceOohs,
    SynthVoice,
    OrchestraHit,
    // Brass
    Trumpet,
    Trombone,
    Tuba,
    MutedTrumpet,
    FrenchHorn,
    BrassSection,
    SynthBrass1,
    SynthBrass2,
    // Reed
    SopranoSax,
    AltoSax,
    TenorSax,
    BaritoneSax,
    Oboe,
    EnglishHorn,
    Bassoon,
    Clarinet,
    // Pipe
    Piccolo,
    Flute,
    Recorder,
    PanFlute,
    BlownBottle,
    Shakuhachi,
    Whistle,
    Ocarina,
    // Synth Lead
    LeadSquare,
    LeadSawtooth,
    LeadCalliope,
    LeadChiff,
    LeadCharang,
    LeadVoice,
    LeadFifths,
    LeadBassLead,
    // Synth Pad
    PadNewAge,
    PadWarm,
    PadPolysynth,
    PadChoir,
    PadBowed,
    PadMetallic,
    PadHalo,
    PadSweep,
    // Synth Effects
    FxRain,
    FxSoundtrack,
    FxCrystal,
    FxAtmosphere,
    FxBrightness,
    FxGoblins,
    FxEchoes,
    FxSciFi,
    // Ethnic
    Sitar,
    Banjo,
    Shamisen,
    Koto,
    Kalimba,
    BagPipe,
    Fiddle,
    Shanai,
    // Percussive
    TinkleBell,
    Agogo,
    SteelDrums,
    Woodblock,
    TaikoDrum,
    MelodicTom,
    SynthDrum,
    ReverseCymbal,
    // Sound Effects
    GuitarFretNoise,
    BreathNoise,
    Seashore,
    BirdTweet,
    TelephoneRing,
    Helicopter,
    Applause,
    Gunshot,
}

const NAMES: [&str; 128] = [
    "Acoustic Grand Piano",
    "Bright Acoustic Piano",
    "Electric Grand Piano",
    "Honky-tonk Piano",
    "Electric Piano 1",
    "Electric Piano 2",
    "Harpsichord",
    "Clavi",
    "Celesta",
    "Glockenspiel",
    "Music Box",
    "Vibraphone",
    "Marimba",
    "Xylophone",
    "Tubular Bells",
    "Dulcimer",
    "Drawbar Organ",
    "Percussive Organ",
    "Rock Organ",
    "Church Organ",
    "Reed Organ",
    "Accordion",
    "Harmonica",
    "Tango Accordion",
    "Acoustic Guitar (nylon)",
    "Acoustic Guitar (steel)",
    "Electric Guitar (jazz)",
    "Electric Guitar (clean)",
    "Electric Guitar (muted)",
    "Overdriven Guitar",
    "Distortion Guitar",
    "Guitar Harmonics",
    "Acoustic Bass",
    "Electric Bass (finger)",
    "Electric Bass (pick)",
    "Fretless Bass",
    "Slap Bass 1",
    "Slap Bass 2",
    "Synth Bass 1",
    "Synth Bass 2",
    "Violin",
    "Viola",
    "Cello",
    "Contrabass",
    "Tremolo Strings",
    "Pizzicato Strings",
    "Orchestral Harp",
    "Timpani",
    "String Ensemble 1",
    "String Ensemble 2",
    "SynthStrings 1",
    "SynthStrings 2",
    "Choir Aahs",
    "Voice Oohs",
    "Synth Voice",
    "Orchestra Hit",
    "Trumpet",
    "Trombone",
    "Tuba",
    "Muted Trumpet",
    "French Horn",
    "Brass Section",
    "SynthBrass 1",
    "SynthBrass 2",
    "Soprano Sax",
    "Alto Sax",
    "Tenor Sax",
    "Baritone Sax",
    "Oboe",
    "English Horn",
    "Bassoon",
    "Clarinet",
    "Piccolo",
    "Flute",
    "Recorder",
    "Pan Flute",
    "Blown Bottle",
    "Shakuhachi",
    "Whistle",
    "Ocarina",
    "Lead 1 (square)",
    "Lead 2 (sawtooth)",
    "Lead 3 (calliope)",
    "Lead 4 (chiff)",
    "Lead 5 (charang)",
    "Lead 6 (voice)",
    "Lead 7 (fifths)",
    "Lead 8 (bass + lead)",
    "Pad 1 (new age)",
    "Pad 2 (warm)",
    "Pad 3 (polysynth)",
    "Pad 4 (choir)",
    "Pad 5 (bowed)",
    "Pad 6 (metallic)",
    "Pad 7 (halo)",
    "Pad 8 (sweep)",
    "FX 1 (rain)",
    "FX 2 (soundtrack)",
    "FX 3 (crystal)",
    "FX 4 (atmosphere)",
    "FX 5 (brightness)",
    "FX 6 (goblins)",
    "FX 7 (echoes)",
    "FX 8 (sci-fi)",
    "Sitar",
    "Banjo",
    "Shamisen",
    "Koto",
    "Kalimba",
    "Bag pipe",
    "Fiddle",
    "Shanai",
    "Tinkle Bell",
    "Agogo",
    "Steel Drums",
    "Woodblock",
    "Taiko Drum",
    "Melodic Tom",
    "Synth Drum",
    "Reverse Cymbal",
    "Guitar Fret Noise",
    "Breath Noise",
    "Seashore",
    "Bird Tweet",
    "Telephone Ring",
    "Helicopter",
    "Applause",
    "Gunshot",
];

impl Instrument {
    /// Look up a program by its 1-based number.
    ///
    /// # Errors
    /// if `program` is 0 or above 128
    pub fn from_program(program: u8) -> Result<Self, EncodeError> {
        Self::try_from(program).map_err(|_| EncodeError::Program(program))
    }

    /// The 1-based program number
    #[inline]
    pub const fn program(self) -> u8 {
        self as u8
    }

    /// The byte written into a Program Change message (0-127)
    #[inline]
    pub const fn program_byte(self) -> u8 {
        self as u8 - 1
    }

    /// The General MIDI name of the instrument
    pub const fn name(self) -> &'static str {
        NAMES[self.program_byte() as usize]
    }
}

impl Default for Instrument {
    fn default() -> Self {
        Self::AcousticGrandPiano
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Instrument {
    type Err = UnknownInstrument;

    /// Matches [`Instrument::name`], ignoring case, spaces, `_`, `-` and parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.chars().filter(|c| !is_separator(*c));
        NAMES
            .iter()
            .position(|name| {
                name.chars()
                    .filter(|c| !is_separator(*c))
                    .map(|c| c.to_ascii_lowercase())
                    .eq(wanted.clone().map(|c| c.to_ascii_lowercase()))
            })
            .and_then(|i| Self::try_from(i as u8 + 1).ok())
            .ok_or(UnknownInstrument)
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '_' | '-' | '(' | ')')
}

#[test]
fn programs_run_from_one() {
    use pretty_assertions::assert_eq;

    assert_eq!(Instrument::AcousticGrandPiano.program(), 1);
    assert_eq!(Instrument::AcousticGrandPiano.program_byte(), 0);
    assert_eq!(Instrument::Gunshot.program(), 128);
    assert_eq!(Instrument::Gunshot.program_byte(), 127);
    assert_eq!(Instrument::from_program(0), Err(EncodeError::Program(0)));
    assert_eq!(Instrument::from_program(41), Ok(Instrument::Violin));
    assert_eq!(Instrument::default(), Instrument::AcousticGrandPiano);
}

#[test]
fn every_program_has_a_name() {
    for program in 1..=128u8 {
        let instrument = Instrument::from_program(program).unwrap();
        assert_eq!(instrument.name().parse::<Instrument>(), Ok(instrument));
    }
}

#[test]
fn names_are_loosely_matched() {
    use pretty_assertions::assert_eq;

    assert_eq!("honky_tonk_piano".parse::<Instrument>(), Ok(Instrument::HonkyTonkPiano));
    assert_eq!("Acoustic Guitar Nylon".parse::<Instrument>(), Ok(Instrument::AcousticGuitarNylon));
    assert_eq!("LEAD-1-SQUARE".parse::<Instrument>(), Ok(Instrument::LeadSquare));
    assert_eq!("synthstrings 2".parse::<Instrument>(), Ok(Instrument::SynthStrings2));
    assert_eq!("kazoo".parse::<Instrument>(), Err(UnknownInstrument));
}
