#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

use crate::error::Error;

bitflags! {
    /// Transformation modifiers for a generated word.
    ///
    /// A request carries any combination of these. Bit order is meaningful:
    /// when several verb-shape or gradation modifiers are set, the lowest
    /// bit wins; when several case modifiers are set, the highest wins.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct Mod: u32 {
        /// Noun plural, or plural agreement for Past/Present Simple verbs.
        const PLURAL = 1;
        const PAST_SIMPLE = 1 << 1;
        const PAST_PARTICIPLE = 1 << 2;
        /// Present Simple suffix (-s, -es).
        const PRESENT_SIMPLE = 1 << 3;
        /// -ing form.
        const GERUND = 1 << 4;
        const COMPARATIVE = 1 << 5;
        const SUPERLATIVE = 1 << 6;
        /// Noun possessive (car's, cars').
        const POSSESSIVE = 1 << 7;
        /// Prepend "a" or "an".
        const INDEFINITE = 1 << 8;
        /// Draw a noun that could take an article, without printing one.
        const INDEFINITE_SILENT = 1 << 9;

        // Case (applied last, exactly once)
        const CASE_LOWER = 1 << 10;
        /// First word title case, the rest lower case.
        const CASE_SENTENCE = 1 << 11;
        const CASE_TITLE = 1 << 12;
        const CASE_UPPER = 1 << 13;
    }
}

impl Mod {
    /// Modifiers that select a verb form.
    pub const VERB_SHAPE: Mod = Mod::PAST_SIMPLE
        .union(Mod::PAST_PARTICIPLE)
        .union(Mod::PRESENT_SIMPLE)
        .union(Mod::GERUND);

    /// Modifiers that grade an adjective or adverb.
    pub const GRADATION: Mod = Mod::COMPARATIVE.union(Mod::SUPERLATIVE);

    /// Modifiers that require a noun able to take an article.
    pub const ARTICLE: Mod = Mod::INDEFINITE.union(Mod::INDEFINITE_SILENT);

    /// Case modifiers.
    pub const CASE: Mod = Mod::CASE_LOWER
        .union(Mod::CASE_SENTENCE)
        .union(Mod::CASE_TITLE)
        .union(Mod::CASE_UPPER);

    /// Converts a raw bit set, rejecting bits outside the defined set.
    pub fn from_raw(bits: u32) -> Result<Self, Error> {
        Mod::from_bits(bits).ok_or(Error::UndefinedMod)
    }

    /// True if any bit outside the defined set is present.
    pub const fn is_undefined(self) -> bool {
        self.bits() & !Mod::all().bits() != 0
    }

    /// The verb form to apply: the lowest verb-shape bit set.
    pub fn verb_shape(self) -> Option<Mod> {
        lowest(self.intersection(Mod::VERB_SHAPE))
    }

    /// The gradation to apply: comparative over superlative.
    pub fn gradation(self) -> Option<Mod> {
        lowest(self.intersection(Mod::GRADATION))
    }

    /// The case transformation to apply: the highest case bit set.
    pub fn case(self) -> Option<Mod> {
        let set = self.intersection(Mod::CASE).bits();
        if set == 0 {
            return None;
        }
        Some(Mod::from_bits_retain(1 << (31 - set.leading_zeros())))
    }

    /// Translates a pattern modifier letter into its flag.
    pub const fn from_letter(letter: char) -> Option<Mod> {
        let m = match letter {
            'p' => Mod::PLURAL,
            '2' => Mod::PAST_SIMPLE,
            '3' => Mod::PAST_PARTICIPLE,
            'N' => Mod::PRESENT_SIMPLE,
            'g' => Mod::GERUND,
            'c' => Mod::COMPARATIVE,
            's' => Mod::SUPERLATIVE,
            'o' => Mod::POSSESSIVE,
            'i' => Mod::INDEFINITE,
            '_' => Mod::INDEFINITE_SILENT,
            'l' => Mod::CASE_LOWER,
            'f' => Mod::CASE_SENTENCE,
            't' => Mod::CASE_TITLE,
            'u' => Mod::CASE_UPPER,
            _ => return None,
        };
        Some(m)
    }
}

fn lowest(set: Mod) -> Option<Mod> {
    let bits = set.bits();
    if bits == 0 {
        None
    } else {
        Some(Mod::from_bits_retain(bits & bits.wrapping_neg()))
    }
}
