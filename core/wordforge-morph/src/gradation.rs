use alloc::format;
use alloc::string::String;

use wordforge_protocol::{Error, FormType, Result, WordEntry};

use crate::lexical::{double_final, last_byte, sequence, strip};

/// Comparative degree of an adjective or adverb (good -> better).
pub fn comparative(entry: &WordEntry) -> Result<String> {
    grade(entry, Degree::Comparative)
}

/// Superlative degree of an adjective or adverb (good -> best).
pub fn superlative(entry: &WordEntry) -> Result<String> {
    grade(entry, Degree::Superlative)
}

#[derive(Clone, Copy)]
enum Degree {
    Comparative,
    Superlative,
}

fn grade(entry: &WordEntry, degree: Degree) -> Result<String> {
    let (suffix, analytic) = match degree {
        Degree::Comparative => ("er", "more"),
        Degree::Superlative => ("est", "most"),
    };

    match entry.form_type() {
        FormType::NonComparable => Err(Error::NonComparable),
        FormType::Irregular => {
            let forms = entry.irregular_forms().ok_or(Error::MalformedIrregular)?;
            Ok(match degree {
                Degree::Comparative => forms.first().into(),
                Degree::Superlative => forms.second().into(),
            })
        }
        FormType::Suffixed => Ok(suf_grad(entry.surface(), suffix)),
        _ => Ok(format!("{analytic} {}", entry.surface())),
    }
}

/// Appends a gradation suffix (-er, -est) with the usual spelling changes.
pub fn suf_grad(adj: &str, suffix: &str) -> String {
    match last_byte(adj) {
        b'y' => {
            if adj.ends_with("ey") {
                return format!("{}i{suffix}", strip(adj, 2));
            }
            return format!("{}i{suffix}", strip(adj, 1));
        }
        b'b' | b'd' | b'g' | b'm' | b'n' | b'p' | b't' => {
            if sequence(adj).ends_with("cvc") {
                return double_final(adj, suffix);
            }
        }
        b'e' => return format!("{}{suffix}", strip(adj, 1)),
        _ => {}
    }

    format!("{adj}{suffix}")
}
