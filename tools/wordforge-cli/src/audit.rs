//! Dumps every lexicon entry with its inflected forms for manual review.

use wordforge::{Error, Generator, Mod, RandomSource, WordClass};

const GRADED: [Mod; 2] = [Mod::COMPARATIVE, Mod::SUPERLATIVE];
const NOUN: [Mod; 1] = [Mod::PLURAL];
const VERB: [Mod; 5] = [
    Mod::PAST_SIMPLE,
    Mod::PAST_PARTICIPLE,
    Mod::PRESENT_SIMPLE,
    Mod::GERUND,
    Mod::PAST_SIMPLE.union(Mod::PLURAL),
];

/// Forms listed after each surface, in column order.
pub fn columns(class: WordClass) -> &'static [Mod] {
    match class {
        WordClass::Adjective | WordClass::Adverb => &GRADED,
        WordClass::Noun => &NOUN,
        WordClass::Verb => &VERB,
    }
}

/// One line per entry: the surface followed by each form, comma separated.
/// Refusals show as `ncmp` (non-comparable) or `unc` (uncountable).
pub fn audit_class<R: RandomSource>(gen: &Generator<R>, class: WordClass) -> wordforge::Result<String> {
    let mut out = String::new();

    for entry in gen.all(class) {
        out.push_str(entry.surface());

        for &mods in columns(class) {
            out.push(',');
            match gen.transform_word(entry, class, mods) {
                Ok(form) => out.push_str(&form),
                Err(Error::NonComparable) => out.push_str("ncmp"),
                Err(Error::Uncountable) => out.push_str("unc"),
                Err(e) => return Err(e),
            }
        }

        out.push('\n');
    }

    Ok(out)
}
