//! Phrase pattern language.
//!
//! A pattern is literal text with `%` escapes:
//!
//! | Escape | Meaning |
//! |---|---|
//! | `%%` | literal `%` |
//! | `%a` `%m` `%n` `%v` | adjective, adverb, noun, verb |
//! | `%2` `%3` `%N` `%g` | past simple, past participle, present simple, gerund |
//! | `%c` `%s` | comparative, superlative |
//! | `%p` | plural (noun, or verb with `%2`/`%N`) |
//! | `%o` | possessive (noun) |
//! | `%i` | indefinite article |
//! | `%_` | noun that takes an article, printed without one |
//! | `%l` `%f` `%t` `%u` | lower, sentence, title, upper case |
//!
//! Modifier letters stack in any order and end with one insertion letter:
//! `%tpn` is a plural noun in title case.

pub mod parser;
pub mod token;

pub use parser::{parse, tokenize, Tokens};
pub use token::{Span, Token, TokenKind};
