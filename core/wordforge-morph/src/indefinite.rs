use alloc::format;
use alloc::string::String;

/// Prefixes `word` with "a" or "an".
///
/// The choice is orthographic only, so silent consonants are not detected
/// ("a hour").
pub fn indefinite(word: &str) -> String {
    format!("{} {word}", article(word))
}

/// The article `indefinite` would choose for `word`.
pub fn article(word: &str) -> &'static str {
    match word.as_bytes().first() {
        Some(b'a' | b'e' | b'i' | b'o') => "an",
        Some(b'u') => article_u(word),
        _ => "a",
    }
}

/// Words beginning with 'u' take "a" when the 'u' is pronounced /ju:/.
fn article_u(word: &str) -> &'static str {
    let bytes = word.as_bytes();

    match bytes.get(1) {
        None => "a",
        Some(b'n') => {
            // unin-, unim-, unid-, unir- are negations (uninformed, unimportant)
            let negation = matches!(bytes.get(3), Some(b'n' | b'm' | b'd' | b'r'));
            if word.starts_with("uni") && (!negation || word == "unimodal" || word == "uninominal") {
                "a"
            } else {
                "an"
            }
        }
        Some(b's') if !word.starts_with("ush") => "a",
        Some(b't') if !word.starts_with("utt") => "a",
        _ => "an",
    }
}
