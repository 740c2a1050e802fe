use alloc::string::String;

/// Case transformations for rendered words and phrases.
///
/// Mapping follows the Unicode default case tables, which need no locale
/// tailoring for English.
#[derive(Debug, Clone, Copy, Default)]
pub struct Caser;

impl Caser {
    pub fn new() -> Self {
        Caser
    }

    pub fn to_lower(&self, s: &str) -> String {
        s.to_lowercase()
    }

    pub fn to_upper(&self, s: &str) -> String {
        s.to_uppercase()
    }

    /// Upper-cases the first letter of every word and lower-cases the rest.
    ///
    /// A word starts after whitespace or a hyphen; apostrophes do not break
    /// words (o'clock -> O'clock).
    pub fn to_title(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut at_start = true;

        for c in s.chars() {
            if at_start && c.is_alphanumeric() {
                out.extend(c.to_uppercase());
                at_start = false;
            } else {
                out.extend(c.to_lowercase());
                if c.is_whitespace() || c == '-' {
                    at_start = true;
                }
            }
        }

        out
    }

    /// Title-cases the first whitespace-delimited word and lower-cases
    /// everything after it.
    pub fn to_sentence(&self, s: &str) -> String {
        match s.find(char::is_whitespace) {
            None => self.to_title(s),
            Some(i) => {
                let (head, tail) = s.split_at(i);
                let mut out = self.to_title(head);
                out.push_str(&self.to_lower(tail));
                out
            }
        }
    }
}
