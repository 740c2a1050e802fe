#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use wordforge_protocol::{Error, Result};

/// Re-draw budget used when none is given.
pub const DEFAULT_ITER_LIMIT: usize = 1000;

/// Tunables of a [`Generator`](crate::Generator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// How many times a draw is repeated when the drawn word cannot take
    /// the requested modifiers. Lexicons with many non-comparable or
    /// uncountable entries need a larger value.
    pub iter_limit: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            iter_limit: DEFAULT_ITER_LIMIT,
        }
    }
}

impl GeneratorConfig {
    pub fn with_iter_limit(iter_limit: usize) -> Self {
        Self { iter_limit }
    }

    pub fn validate(&self) -> Result<()> {
        if self.iter_limit == 0 {
            return Err(Error::BadIterLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(GeneratorConfig::default().iter_limit, 1000);
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
        assert_eq!(GeneratorConfig::with_iter_limit(1).validate(), Ok(()));
        assert_eq!(GeneratorConfig::with_iter_limit(0).validate(), Err(Error::BadIterLimit));
    }
}
