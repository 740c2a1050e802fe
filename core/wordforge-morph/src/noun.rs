use alloc::format;
use alloc::string::String;

use wordforge_protocol::{FormType, WordEntry};

use crate::lexical::{double_final, ends_with_any, last_byte, sequence, strip};

/// Plural form of a noun.
///
/// Uncountable entries are refused one level up; here they inflect as
/// regular nouns.
pub fn plural(entry: &WordEntry) -> String {
    if let Some(forms) = entry.irregular_forms() {
        return forms.first().into();
    }
    if entry.form_type() == FormType::PluralOnly {
        return entry.surface().into();
    }

    plural_regular(entry.surface())
}

/// Plural of a regular noun by spelling rules alone.
pub fn plural_regular(noun: &str) -> String {
    match last_byte(noun) {
        b'e' => {
            if ends_with_any(noun, &["life", "knife", "wife"]) {
                return format!("{}ves", strip(noun, 2));
            }
        }
        b'y' => {
            if sequence(noun).ends_with('v') {
                return format!("{}ies", strip(noun, 1));
            }
        }
        b's' => {
            if ends_with_any(noun, &["ics", "gs"]) {
                return noun.into();
            }
            if ends_with_any(noun, &["sis", "xis"]) {
                return format!("{}es", strip(noun, 2));
            }
            if ends_with_any(noun, &["cirrus", "cumulus", "nimbus", "stratus"]) {
                return format!("{}i", strip(noun, 2));
            }
            return format!("{noun}es");
        }
        b'f' => {
            if ends_with_any(noun, &["leaf", "elf", "arf", "alf", "wolf", "loaf"]) {
                return format!("{}ves", strip(noun, 1));
            }
        }
        b'x' => {
            if ends_with_any(noun, &["dex", "dix", "fex", "pex", "rix", "tex"]) {
                return format!("{}ices", strip(noun, 2));
            }
            return format!("{noun}es");
        }
        b'z' => {
            if sequence(noun).ends_with("vc") {
                return double_final(noun, "es");
            }
            return format!("{noun}es");
        }
        _ => {}
    }

    if noun.ends_with("um") {
        return format!("{}a", strip(noun, 2));
    }
    if noun.ends_with("fish") {
        return noun.into();
    }
    if noun.ends_with("sh") || noun.ends_with("ch") {
        return format!("{noun}es");
    }
    // woman -> women
    if noun.ends_with("man") {
        return format!("{}en", strip(noun, 2));
    }
    if noun.ends_with("craft") {
        return noun.into();
    }

    format!("{noun}s")
}

/// Possessive of a noun form: `'s`, or a bare `'` after a plural ending
/// in `s` (cars', but children's).
pub fn possessive(noun: &str, plural: bool) -> String {
    if plural && noun.ends_with('s') {
        format!("{noun}'")
    } else {
        format!("{noun}'s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plural_regular() {
        let cases = [
            ("datum", "data"),
            ("leaf", "leaves"),
            ("wolf", "wolves"),
            ("shelf", "shelves"),
            ("dwarf", "dwarves"),
            ("half", "halves"),
            ("loaf", "loaves"),
            ("chef", "chefs"),
            ("knife", "knives"),
            ("wife", "wives"),
            ("cake", "cakes"),
            ("city", "cities"),
            ("day", "days"),
            ("physics", "physics"),
            ("leggings", "leggings"),
            ("analysis", "analyses"),
            ("axis", "axes"),
            ("cumulus", "cumuli"),
            ("bus", "buses"),
            ("index", "indices"),
            ("matrix", "matrices"),
            ("box", "boxes"),
            ("quiz", "quizzes"),
            ("waltz", "waltzes"),
            ("swordfish", "swordfish"),
            ("dish", "dishes"),
            ("church", "churches"),
            ("woman", "women"),
            ("aircraft", "aircraft"),
            ("snowfall", "snowfalls"),
            ("cat", "cats"),
        ];
        for (input, expected) in cases {
            assert_eq!(plural_regular(input), expected, "{input}");
        }
    }

    #[test]
    fn test_plural_of_entries() {
        let child = WordEntry::parse("1child,children").unwrap();
        assert_eq!(plural(&child), "children");

        let scissors = WordEntry::parse("2scissors").unwrap();
        assert_eq!(plural(&scissors), "scissors");

        let leaf = WordEntry::parse("0leaf").unwrap();
        assert_eq!(plural(&leaf), "leaves");
    }

    #[test]
    fn test_possessive() {
        assert_eq!(possessive("car", false), "car's");
        assert_eq!(possessive("boss", false), "boss's");
        assert_eq!(possessive("cars", true), "cars'");
        assert_eq!(possessive("children", true), "children's");
        assert_eq!(possessive("scissors", true), "scissors'");
    }

    proptest! {
        #[test]
        fn plural_only_is_identity(noun in "[a-z]{1,12}") {
            let entry = WordEntry::from_parts::<&str>(&noun, FormType::PluralOnly, &[]).unwrap();
            prop_assert_eq!(plural(&entry), noun);
        }
    }
}
