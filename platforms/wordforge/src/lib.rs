//! Random English phrases from embedded word lists.
//!
//! ```no_run
//! use wordforge::{Generator, Mod};
//!
//! let gen = Generator::embedded()?;
//! let phrase = gen.phrase("%tn %2v %ia %n")?;
//! let plural = gen.noun(Mod::PLURAL | Mod::CASE_UPPER)?;
//! # Ok::<(), wordforge::Error>(())
//! ```
//!
//! A [`Generator`] owns four immutable lexicons and a [`RandomSource`].
//! Every operation is synchronous; one generator may serve many threads.

pub mod config;
pub mod generator;
pub mod source;
pub mod transform;

pub use config::{GeneratorConfig, DEFAULT_ITER_LIMIT};
pub use generator::Generator;
pub use source::{RandomSource, SeededRandom, ThreadRandom};

// Re-export the vocabulary types so callers need a single dependency
pub use wordforge_lexicon::{Lexicon, Lexicons};
pub use wordforge_morph::Caser;
pub use wordforge_protocol::{Error, FormType, IrregularForms, Mod, Result, WordClass, WordEntry};
