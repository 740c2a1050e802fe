//! Verb conjugation: gerund, Past Simple, Past Participle, Present Simple.

use alloc::string::String;
use alloc::format;

use wordforge_protocol::WordEntry;

use crate::lexical::{double_final, ends_with_any, last_byte, sequence, strip, syllable_count};

/// Verbs ending in -r whose final consonant is doubled (stress on the last syllable).
const DOUBLED_R: &[&str] = &[
    "abhor", "bar", "bestir", "blur", "bur", "char", "concur", "confer", "debar", "demur",
    "deter", "disbar", "disinter", "incur", "jar", "mar", "occur", "par", "prefer", "recur",
    "refer", "scar", "slur", "spar", "spur", "star", "stir", "tar", "transfer", "unbar", "war",
];

/// CVC verbs never doubled, in any tense.
const CVC_SINGLE: &[&str] = &["batik", "kayak", "orphan", "pyramid", "wedel"];

/// CVC verbs always doubled, in any tense.
const CVC_DOUBLED: &[&str] = &["abet", "anagram", "curvet", "regret", "revet", "underpin", "unpin"];

/// CVC verbs doubled only before -ing.
const CVC_DOUBLED_GERUND: &[&str] = &[
    "beget", "begin", "beset", "forget", "inset", "offset", "overrun", "reset", "sublet",
    "typeset", "underrun", "upset",
];

fn listed(list: &[&str], word: &str) -> bool {
    list.binary_search(&word).is_ok()
}

/// Gerund (-ing) form of a verb.
pub fn gerund(verb: &str) -> String {
    if verb == "quiz" || verb == "up" {
        return double_final(verb, "ing");
    }

    if verb.len() <= 2 {
        return format!("{verb}ing");
    }

    match last_byte(verb) {
        b'e' => {
            if verb.ends_with("ue") {
                return format!("{}ing", strip(verb, 1));
            }
            if verb.ends_with("ie") {
                return format!("{}ying", strip(verb, 2));
            }
            // Silent 'e' after a consonant other than 'y'
            if sequence(verb).ends_with("cv") && !verb.ends_with("ye") && verb != "ante" {
                return format!("{}ing", strip(verb, 1));
            }
        }
        b'y' | b'h' | b'w' | b'x' => return format!("{verb}ing"),
        b'r' => return handle_r(verb, "ing"),
        b'l' => {
            if sequence(verb).ends_with("vvc") {
                return handle_vvl(verb, "ing");
            }
        }
        b's' => {
            // 'gas' and its derivatives
            if verb.ends_with("gas") {
                return double_final(verb, "ing");
            }
            return format!("{verb}ing");
        }
        _ => {}
    }

    if verb.ends_with("it") {
        return handle_it(verb, "ing");
    }

    let seq = sequence(verb);
    if seq.ends_with("cvc") {
        return handle_cvc(verb, "ing", &seq, CVC_DOUBLED_GERUND);
    }

    format!("{verb}ing")
}

/// Past tense suffix (-ed) of a regular verb.
pub fn past_regular(verb: &str) -> String {
    if verb == "quiz" || verb == "up" {
        return double_final(verb, "ed");
    }

    match last_byte(verb) {
        b'e' => return format!("{verb}d"),
        b'r' => return handle_r(verb, "ed"),
        b'h' | b'w' | b'o' | b'x' | b'a' | b'i' | b'u' => return format!("{verb}ed"),
        b'l' => {
            if sequence(verb).ends_with("vvc") {
                return handle_vvl(verb, "ed");
            }
        }
        b'y' => {
            // Vocalic 'y' after a consonant: try -> tried, play -> played
            if sequence(verb).ends_with('v') {
                return format!("{}ied", strip(verb, 1));
            }
            return format!("{verb}ed");
        }
        b's' => {
            if verb.ends_with("gas") {
                return double_final(verb, "ed");
            }
            return format!("{verb}ed");
        }
        _ => {}
    }

    if verb.ends_with("it") {
        return handle_it(verb, "ed");
    }

    let seq = sequence(verb);
    if seq.ends_with("cvc") {
        return handle_cvc(verb, "ed", &seq, &[]);
    }

    format!("{verb}ed")
}

/// Past Simple form. `plural` only matters for "be".
pub fn past_simple(entry: &WordEntry, plural: bool) -> String {
    if let Some(forms) = entry.irregular_forms() {
        return forms.first().into();
    }

    match entry.surface() {
        "be" if plural => "were".into(),
        "be" => "was".into(),
        verb => past_regular(verb),
    }
}

/// Past Participle form.
pub fn past_participle(entry: &WordEntry) -> String {
    if let Some(forms) = entry.irregular_forms() {
        return forms.second().into();
    }

    match entry.surface() {
        "be" => "been".into(),
        verb => past_regular(verb),
    }
}

/// Present Simple form; third person singular unless `plural`.
pub fn present_simple(verb: &str, plural: bool) -> String {
    if plural {
        return match verb {
            "be" => "are".into(),
            _ => verb.into(),
        };
    }

    match verb {
        "be" => return "is".into(),
        "have" => return "has".into(),
        _ => {}
    }

    match last_byte(verb) {
        b'y' => {
            if sequence(verb).ends_with('v') {
                return format!("{}ies", strip(verb, 1));
            }
        }
        b's' | b'x' => return format!("{verb}es"),
        b'o' => {
            if sequence(verb).ends_with("cv") {
                return format!("{verb}es");
            }
        }
        b'z' => {
            if verb == "quiz" {
                return double_final(verb, "es");
            }
            return format!("{verb}es");
        }
        _ => {}
    }

    if verb.ends_with("ch") || verb.ends_with("sh") {
        return format!("{verb}es");
    }

    format!("{verb}s")
}

/// Appends `ending` to verbs ending in consonant-vowel-consonant, doubling
/// the final consonant where English spelling does. `tense_exceptions` lists
/// caller-specific words that are always doubled.
fn handle_cvc(verb: &str, ending: &str, seq: &str, tense_exceptions: &[&str]) -> String {
    if verb.ends_with('c') && verb != "sic" {
        if verb.ends_with("lyric") {
            return format!("{verb}{ending}");
        }
        // panic -> panicking
        return format!("{verb}k{ending}");
    }

    if listed(CVC_SINGLE, verb) {
        return format!("{verb}{ending}");
    }

    if listed(CVC_DOUBLED, verb) || listed(tense_exceptions, verb) {
        return double_final(verb, ending);
    }

    if verb.ends_with('l') {
        return double_final(verb, ending);
    }

    match syllable_count(verb, seq) {
        2 if ends_with_any(verb, &["en", "et", "in", "om", "on"]) => format!("{verb}{ending}"),
        n if n > 2 => format!("{verb}{ending}"),
        _ => double_final(verb, ending),
    }
}

/// Verbs ending in -it.
fn handle_it(verb: &str, ending: &str) -> String {
    let seq = sequence(verb);

    if seq.ends_with("vvc") {
        // quit, acquit
        if verb.ends_with("quit") {
            return double_final(verb, ending);
        }
        return format!("{verb}{ending}");
    }

    if syllable_count(verb, &seq) == 1 {
        return double_final(verb, ending);
    }

    if ends_with_any(verb, &["fit", "mit", "wit"]) && verb != "limit" && verb != "profit" {
        return double_final(verb, ending);
    }

    format!("{verb}{ending}")
}

/// Verbs ending in -r.
fn handle_r(verb: &str, ending: &str) -> String {
    if listed(DOUBLED_R, verb) {
        return double_final(verb, ending);
    }
    format!("{verb}{ending}")
}

/// Verbs ending in vowel-vowel-l.
fn handle_vvl(verb: &str, ending: &str) -> String {
    if verb.ends_with("uel") || verb == "victual" || verb == "vitriol" {
        return double_final(verb, ending);
    }
    format!("{verb}{ending}")
}
