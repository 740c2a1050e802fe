use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = core::result::Result<T, Error>;

/// Every failure the generator can report.
///
/// Each variant maps to one stable identifier (see [`Error::id`]) so that
/// callers in other languages or log pipelines can match on a string
/// rather than on the display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A non-positive iteration limit was supplied to a generator.
    #[error("iteration limit equal or lower than 0")]
    BadIterLimit,

    /// A lexicon line is malformed.
    #[error("word list contains invalid element(s)")]
    BadWordList,

    /// One of the four word lists is empty.
    #[error("empty list provided")]
    EmptyLists,

    /// `phrase` received an empty pattern.
    #[error("provided pattern is empty")]
    EmptyPattern,

    /// An entry was built from an empty surface.
    #[error("provided word is an empty string")]
    EmptyWord,

    /// The pattern ends with a bare `%`.
    #[error("escape character at pattern termination")]
    EscapedStrTerm,

    /// The requested modifiers cannot be applied to the word class.
    #[error("WordClass not compatible with the provided Mod(s)")]
    Incompatible,

    /// The re-draw loop ran out of attempts.
    #[error("iteration limit reached while trying to draw a comparable or countable word")]
    IterLimit,

    /// Irregular forms are missing, empty, or have the wrong arity.
    #[error("irregular forms slice is empty, too long, or contains an empty string")]
    MalformedIrregular,

    /// Gradation was requested for a non-comparable word.
    #[error("gradation requested, but the provided word is non-comparable")]
    NonComparable,

    /// Irregular forms were supplied to, or requested from, a non-irregular word.
    #[error("attempt to assign or get irregular forms, but Word is not irregular")]
    NonIrregular,

    /// `find` did not locate the surface in the lexicon.
    #[error("no matches found")]
    NotFound,

    /// The pattern ends after modifier letters with no insertion letter.
    #[error("transformation specifier ends the pattern")]
    SpecStrTerm,

    /// Pluralization was requested for an uncountable noun.
    #[error("pluralization requested, but the provided word is uncountable")]
    Uncountable,

    /// A raw value does not name a form type.
    #[error("undefined FormType")]
    UndefinedFormType,

    /// A raw modifier value has bits outside the defined set.
    #[error("undefined modifier")]
    UndefinedMod,

    /// A raw value does not name a word class.
    #[error("undefined WordClass")]
    UndefinedWordClass,

    /// The pattern escapes a letter that is neither a modifier nor an insertion.
    #[error("unknown command specified")]
    UnknownCommand,
}

impl Error {
    /// Stable, kebab-case identifier of the error kind.
    pub const fn id(&self) -> &'static str {
        match self {
            Error::BadIterLimit => "bad-iter-limit",
            Error::BadWordList => "bad-word-list",
            Error::EmptyLists => "empty-lists",
            Error::EmptyPattern => "empty-pattern",
            Error::EmptyWord => "empty-word",
            Error::EscapedStrTerm => "escaped-str-term",
            Error::Incompatible => "incompatible",
            Error::IterLimit => "iter-limit",
            Error::MalformedIrregular => "malformed-irregular",
            Error::NonComparable => "non-comparable",
            Error::NonIrregular => "non-irregular",
            Error::NotFound => "not-found",
            Error::SpecStrTerm => "spec-str-term",
            Error::Uncountable => "uncountable",
            Error::UndefinedFormType => "undefined-form-type",
            Error::UndefinedMod => "undefined-mod",
            Error::UndefinedWordClass => "undefined-word-class",
            Error::UnknownCommand => "unknown-command",
        }
    }

    /// Rule refusals mean the word exists but cannot take the form.
    /// The generator's re-draw loop swallows these and tries another word.
    pub const fn is_rule_refusal(&self) -> bool {
        matches!(self, Error::NonComparable | Error::Uncountable)
    }
}
