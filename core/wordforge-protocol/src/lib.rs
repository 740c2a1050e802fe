#![cfg_attr(not(test), no_std)] // The morphology engine builds on these types without std

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod class;
pub mod entry;
pub mod error;
pub mod mods;

// Re-export core types for convenience
pub use class::{FormType, WordClass};
pub use entry::{IrregularForms, WordEntry};
pub use error::{Error, Result};
pub use mods::Mod;
