use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::class::{FormType, WordClass};
use crate::error::{Error, Result};

/// Precomputed forms stored alongside an Irregular entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum IrregularForms {
    /// Noun plural.
    One(String),
    /// Past Simple + Past Participle, or comparative + superlative.
    Two(String, String),
}

impl IrregularForms {
    pub fn first(&self) -> &str {
        match self {
            IrregularForms::One(a) | IrregularForms::Two(a, _) => a,
        }
    }

    /// The second form; a single-form slot answers with its only form.
    pub fn second(&self) -> &str {
        match self {
            IrregularForms::One(a) | IrregularForms::Two(_, a) => a,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            IrregularForms::One(_) => 1,
            IrregularForms::Two(..) => 2,
        }
    }

    fn get(&self, i: usize) -> Option<&str> {
        match (self, i) {
            (IrregularForms::One(a), 0) | (IrregularForms::Two(a, _), 0) => Some(a),
            (IrregularForms::Two(_, b), 1) => Some(b),
            _ => None,
        }
    }
}

/// Everything about an entry besides its surface. The irregular slot lives
/// inside the `Irregular` variant, so a non-irregular entry cannot hold forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
enum Forms {
    Regular,
    Irregular(IrregularForms),
    PluralOnly,
    Suffixed,
    NonComparable,
    Uncountable,
}

impl Forms {
    fn bare(ft: FormType) -> Self {
        match ft {
            FormType::Regular => Forms::Regular,
            FormType::PluralOnly => Forms::PluralOnly,
            FormType::Suffixed => Forms::Suffixed,
            FormType::NonComparable => Forms::NonComparable,
            FormType::Uncountable => Forms::Uncountable,
            // Callers handle Irregular before reaching here
            FormType::Irregular => Forms::Regular,
        }
    }
}

/// A single lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct WordEntry {
    surface: String,
    forms: Forms,
}

impl WordEntry {
    /// Parses one encoded lexicon line: `<digit><surface>[,form1[,form2]]`.
    ///
    /// Commas are only allowed in Irregular lines, which need one or two
    /// non-empty forms after the surface.
    pub fn parse(line: &str) -> Result<Self> {
        let bytes = line.as_bytes();
        if bytes.len() < 2 {
            // A digit plus at least one character of surface
            return Err(Error::BadWordList);
        }

        let ft = FormType::from_digit(bytes[0])?;
        let body = &line[1..];

        if ft != FormType::Irregular {
            if body.contains(',') {
                return Err(Error::BadWordList);
            }
            return Ok(WordEntry {
                surface: body.to_string(),
                forms: Forms::bare(ft),
            });
        }

        let mut fields = body.split(',');
        let surface = fields.next().unwrap_or_default();
        let forms: Vec<&str> = fields.collect();

        if surface.is_empty() || forms.is_empty() || forms.len() > 2 {
            return Err(Error::BadWordList);
        }
        if forms.iter().any(|f| f.is_empty()) {
            return Err(Error::BadWordList);
        }

        let irregular = match forms.as_slice() {
            [a] => IrregularForms::One(a.to_string()),
            [a, b] => IrregularForms::Two(a.to_string(), b.to_string()),
            _ => return Err(Error::BadWordList),
        };

        Ok(WordEntry {
            surface: surface.to_string(),
            forms: Forms::Irregular(irregular),
        })
    }

    /// Builds an entry from its parts.
    ///
    /// Irregular entries need one or two non-empty forms; every other form
    /// type must come without forms.
    pub fn from_parts<S: AsRef<str>>(surface: &str, ft: FormType, irregular: &[S]) -> Result<Self> {
        if surface.is_empty() {
            return Err(Error::EmptyWord);
        }

        if ft != FormType::Irregular {
            if !irregular.is_empty() {
                return Err(Error::NonIrregular);
            }
            return Ok(WordEntry {
                surface: surface.to_string(),
                forms: Forms::bare(ft),
            });
        }

        if irregular.iter().any(|f| f.as_ref().is_empty()) {
            return Err(Error::MalformedIrregular);
        }

        let forms = match irregular {
            [a] => IrregularForms::One(a.as_ref().to_string()),
            [a, b] => IrregularForms::Two(a.as_ref().to_string(), b.as_ref().to_string()),
            _ => return Err(Error::MalformedIrregular),
        };

        Ok(WordEntry {
            surface: surface.to_string(),
            forms: Forms::Irregular(forms),
        })
    }

    /// Shorthand for a Regular entry, used for bare-surface transformations.
    pub fn regular(surface: &str) -> Result<Self> {
        Self::from_parts::<&str>(surface, FormType::Regular, &[])
    }

    /// Base form as stored in the lexicon.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn form_type(&self) -> FormType {
        match self.forms {
            Forms::Regular => FormType::Regular,
            Forms::Irregular(_) => FormType::Irregular,
            Forms::PluralOnly => FormType::PluralOnly,
            Forms::Suffixed => FormType::Suffixed,
            Forms::NonComparable => FormType::NonComparable,
            Forms::Uncountable => FormType::Uncountable,
        }
    }

    /// The irregular slot, present iff the entry is Irregular.
    pub fn irregular_forms(&self) -> Option<&IrregularForms> {
        match &self.forms {
            Forms::Irregular(forms) => Some(forms),
            _ => None,
        }
    }

    /// Irregular form at index `i`.
    pub fn irregular(&self, i: usize) -> Result<&str> {
        let forms = self.irregular_forms().ok_or(Error::NonIrregular)?;
        forms.get(i).ok_or(Error::MalformedIrregular)
    }

    /// Checks that an Irregular entry carries as many forms as `class` expects.
    pub fn check_arity(&self, class: WordClass) -> Result<()> {
        match self.irregular_forms() {
            Some(forms) if forms.len() != class.irregular_arity() => Err(Error::MalformedIrregular),
            _ => Ok(()),
        }
    }

    /// Encodes the entry back into its lexicon line.
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(self.surface.len() + 1);
        line.push(self.form_type().digit());
        line.push_str(&self.surface);
        if let Some(forms) = self.irregular_forms() {
            line.push(',');
            line.push_str(forms.first());
            if let IrregularForms::Two(_, b) = forms {
                line.push(',');
                line.push_str(b);
            }
        }
        line
    }
}
