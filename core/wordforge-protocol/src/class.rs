#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::error::Error;
use crate::mods::Mod;

/// Part of speech the generator draws from. Fixes which rules are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum WordClass {
    Adjective = 0,
    Adverb = 1,
    Noun = 2,
    Verb = 3,
}

impl WordClass {
    pub const ALL: [WordClass; 4] = [
        WordClass::Adjective,
        WordClass::Adverb,
        WordClass::Noun,
        WordClass::Verb,
    ];

    /// Identifier of the embedded category file holding this class.
    pub const fn file_name(self) -> &'static str {
        match self {
            WordClass::Adjective => "adj",
            WordClass::Adverb => "adv",
            WordClass::Noun => "noun",
            WordClass::Verb => "verb",
        }
    }

    /// Number of irregular forms an Irregular entry of this class carries.
    ///
    /// - noun       - plural
    /// - verb       - Past Simple, Past Participle
    /// - adj, adv   - comparative, superlative
    pub const fn irregular_arity(self) -> usize {
        match self {
            WordClass::Noun => 1,
            WordClass::Adjective | WordClass::Adverb | WordClass::Verb => 2,
        }
    }

    /// Pattern insertion letter for this class (`%a`, `%m`, `%n`, `%v`).
    pub const fn letter(self) -> char {
        match self {
            WordClass::Adjective => 'a',
            WordClass::Adverb => 'm',
            WordClass::Noun => 'n',
            WordClass::Verb => 'v',
        }
    }

    pub const fn from_letter(letter: char) -> Option<WordClass> {
        match letter {
            'a' => Some(WordClass::Adjective),
            'm' => Some(WordClass::Adverb),
            'n' => Some(WordClass::Noun),
            'v' => Some(WordClass::Verb),
            _ => None,
        }
    }

    /// Returns true if the class accepts every modifier in `mods`.
    ///
    /// Only the matrix is consulted here. Refusals that depend on the
    /// combination of a class with `Mod::INDEFINITE` happen at
    /// transformation time. Bits outside the defined set make the
    /// request incompatible.
    ///
    /// `POSSESSIVE` and `INDEFINITE_SILENT` are noun-only. The silent
    /// article excludes `PLURAL` and `INDEFINITE`.
    pub fn compatible_with(self, mods: Mod) -> bool {
        if mods.is_undefined() {
            return false;
        }

        let noun_only = Mod::POSSESSIVE | Mod::INDEFINITE_SILENT;

        match self {
            WordClass::Adjective | WordClass::Adverb => {
                !mods.intersects(Mod::PLURAL | Mod::VERB_SHAPE | noun_only)
            }
            WordClass::Noun => {
                if mods.intersects(Mod::VERB_SHAPE | Mod::GRADATION) {
                    return false;
                }
                !mods.contains(Mod::INDEFINITE_SILENT) || !mods.intersects(Mod::PLURAL | Mod::INDEFINITE)
            }
            WordClass::Verb => {
                if mods.intersects(Mod::GRADATION | noun_only) {
                    return false;
                }
                // A plural verb only exists in the simple tenses
                !mods.contains(Mod::PLURAL)
                    || mods.intersects(Mod::PAST_SIMPLE | Mod::PRESENT_SIMPLE)
            }
        }
    }
}

impl TryFrom<u8> for WordClass {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WordClass::Adjective),
            1 => Ok(WordClass::Adverb),
            2 => Ok(WordClass::Noun),
            3 => Ok(WordClass::Verb),
            _ => Err(Error::UndefinedWordClass),
        }
    }
}

impl core::fmt::Display for WordClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            WordClass::Adjective => "adjective",
            WordClass::Adverb => "adverb",
            WordClass::Noun => "noun",
            WordClass::Verb => "verb",
        };
        f.write_str(name)
    }
}

/// Formation type. Indicates the effect grammatical transformations have
/// on a lexicon entry. The discriminant is the digit that opens an encoded
/// lexicon line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum FormType {
    /// adj, adv: "more X" / "most X"; noun: countable; verb: regular past.
    Regular = 0,
    /// Carries its own forms (see [`WordClass::irregular_arity`]).
    Irregular = 1,
    /// Noun whose singular equals its plural (scissors).
    PluralOnly = 2,
    /// Adjective or adverb graded with -er / -est.
    Suffixed = 3,
    /// Adjective or adverb that rejects gradation.
    NonComparable = 4,
    /// Noun that rejects pluralization.
    Uncountable = 5,
}

impl FormType {
    /// Decodes the leading digit of an encoded lexicon line.
    pub fn from_digit(digit: u8) -> Result<Self, Error> {
        digit
            .checked_sub(b'0')
            .ok_or(Error::BadWordList)
            .and_then(|v| FormType::try_from(v).map_err(|_| Error::BadWordList))
    }

    /// The digit that encodes this form type in a lexicon line.
    pub const fn digit(self) -> char {
        (b'0' + self as u8) as char
    }
}

impl TryFrom<u8> for FormType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FormType::Regular),
            1 => Ok(FormType::Irregular),
            2 => Ok(FormType::PluralOnly),
            3 => Ok(FormType::Suffixed),
            4 => Ok(FormType::NonComparable),
            5 => Ok(FormType::Uncountable),
            _ => Err(Error::UndefinedFormType),
        }
    }
}
