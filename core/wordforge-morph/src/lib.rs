//! English morphology engine.
//!
//! Every rule is a pure function of a lexicon entry (or a bare surface
//! treated as Regular). Rules assume lower-case ASCII surfaces; irregular
//! forms are read from the entry itself, never from an external table.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod caser;
pub mod gradation;
pub mod indefinite;
pub mod lexical;
pub mod noun;
pub mod verb;

pub use caser::Caser;
pub use gradation::{comparative, suf_grad, superlative};
pub use indefinite::{article, indefinite};
pub use lexical::{double_final, ends_with_any, sequence, syllable_count};
pub use noun::{plural, plural_regular, possessive};
pub use verb::{gerund, past_participle, past_regular, past_simple, present_simple};
