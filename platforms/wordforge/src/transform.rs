//! Modifier pipeline applied to a single entry.
//!
//! Steps, in order: reject undefined bits, consult the compatibility
//! matrix and the indefinite-article refusals, produce the inflected form
//! (verb shape, plural or gradation), add the possessive ending, prepend the
//! article, then change case once.

use wordforge_morph::{
    comparative, gerund, indefinite, past_participle, past_simple, plural, possessive, present_simple, superlative,
    Caser,
};
use wordforge_protocol::{Error, FormType, Mod, Result, WordClass, WordEntry};

/// Checks that `mods` can be applied to some word of `class`.
///
/// Refusals that depend on the entry (non-comparable, uncountable) are
/// left to [`apply`].
pub fn check(class: WordClass, mods: Mod) -> Result<()> {
    if mods.is_undefined() {
        return Err(Error::UndefinedMod);
    }
    if !class.compatible_with(mods) {
        return Err(Error::Incompatible);
    }

    let refused = match class {
        WordClass::Verb => mods.contains(Mod::INDEFINITE),
        // "a dogs", "a most beautiful"
        WordClass::Noun => mods.contains(Mod::INDEFINITE | Mod::PLURAL),
        WordClass::Adjective | WordClass::Adverb => mods.contains(Mod::INDEFINITE | Mod::SUPERLATIVE),
    };
    if refused {
        return Err(Error::Incompatible);
    }

    Ok(())
}

/// Transforms `entry`, read as a word of `class`, according to `mods`.
pub fn apply(caser: &Caser, entry: &WordEntry, class: WordClass, mods: Mod) -> Result<String> {
    check(class, mods)?;
    entry.check_arity(class)?;

    let mut word = match class {
        WordClass::Noun => noun_form(entry, mods)?,
        WordClass::Verb => verb_form(entry, mods),
        WordClass::Adjective | WordClass::Adverb => graded_form(entry, mods)?,
    };

    if mods.contains(Mod::INDEFINITE) {
        word = indefinite(&word);
    }

    Ok(apply_case(caser, &word, mods))
}

fn noun_form(entry: &WordEntry, mods: Mod) -> Result<String> {
    let form_type = entry.form_type();
    let word = match form_type {
        FormType::Uncountable if mods.intersects(Mod::PLURAL | Mod::ARTICLE) => return Err(Error::Uncountable),
        FormType::PluralOnly if mods.intersects(Mod::ARTICLE) => return Err(Error::Incompatible),
        _ if mods.contains(Mod::PLURAL) => plural(entry),
        _ => entry.surface().into(),
    };

    if mods.contains(Mod::POSSESSIVE) {
        let is_plural = mods.contains(Mod::PLURAL) || form_type == FormType::PluralOnly;
        return Ok(possessive(&word, is_plural));
    }
    Ok(word)
}

fn verb_form(entry: &WordEntry, mods: Mod) -> String {
    let plural = mods.contains(Mod::PLURAL);

    match mods.verb_shape() {
        Some(Mod::PAST_SIMPLE) => past_simple(entry, plural),
        Some(Mod::PAST_PARTICIPLE) => past_participle(entry),
        Some(Mod::PRESENT_SIMPLE) => present_simple(entry.surface(), plural),
        Some(Mod::GERUND) => gerund(entry.surface()),
        _ => entry.surface().into(),
    }
}

fn graded_form(entry: &WordEntry, mods: Mod) -> Result<String> {
    match mods.gradation() {
        Some(Mod::COMPARATIVE) => comparative(entry),
        Some(Mod::SUPERLATIVE) => superlative(entry),
        _ => Ok(entry.surface().into()),
    }
}

fn apply_case(caser: &Caser, word: &str, mods: Mod) -> String {
    match mods.case() {
        Some(Mod::CASE_LOWER) => caser.to_lower(word),
        Some(Mod::CASE_SENTENCE) => caser.to_sentence(word),
        Some(Mod::CASE_TITLE) => caser.to_title(word),
        Some(Mod::CASE_UPPER) => caser.to_upper(word),
        _ => word.into(),
    }
}
