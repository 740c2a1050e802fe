use wordforge_protocol::{Mod, WordClass};

/// Byte range of a token inside the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Text copied to the output as is.
    Literal,
    /// `%%`, rendered as a single `%`.
    Percent,
    /// `%<mods><class>`: draw a word of `class` and apply `mods` to it.
    Insert { class: WordClass, mods: Mod },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub span: Span,
    /// Source text of the token, including the leading `%` for escapes.
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Output text for tokens that need no word draw.
    pub fn literal_text(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::Literal => Some(self.text),
            TokenKind::Percent => Some("%"),
            TokenKind::Insert { .. } => None,
        }
    }
}
