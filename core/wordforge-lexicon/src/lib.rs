//! Word lists for the four word classes.
//!
//! A category file holds one encoded entry per line
//! (`<digit><surface>[,form1[,form2]]`), lines separated by a single line
//! feed and sorted by surface. The default files under `data/` are embedded
//! at compile time; callers may also supply their own lines or entries.
//!
//! A [`Lexicon`] is immutable once built. Alongside the sorted entries it
//! keeps the derived indices the generator consults while drawing: the
//! non-comparable adjectives and adverbs, the uncountable nouns and the
//! plural-only nouns.

use std::collections::HashSet;

use tracing::{debug, warn};
use wordforge_protocol::{Error, FormType, Result, WordClass, WordEntry};

/// Raw text of the embedded category file for `class`.
pub fn embedded_source(class: WordClass) -> &'static str {
    match class {
        WordClass::Adjective => include_str!("../data/adj"),
        WordClass::Adverb => include_str!("../data/adv"),
        WordClass::Noun => include_str!("../data/noun"),
        WordClass::Verb => include_str!("../data/verb"),
    }
}

/// Sorted, validated entries of one word class.
#[derive(Debug, Clone)]
pub struct Lexicon {
    class: WordClass,
    entries: Vec<WordEntry>,
    non_comparable: HashSet<usize>,
    uncountable: HashSet<usize>,
    plural_only: HashSet<usize>,
}

impl Lexicon {
    /// Loads the embedded category file for `class`.
    pub fn embedded(class: WordClass) -> Result<Self> {
        Self::parse(class, embedded_source(class))
    }

    /// Parses a whole category file. A trailing line feed is allowed; any
    /// other empty line is rejected.
    pub fn parse(class: WordClass, text: &str) -> Result<Self> {
        Self::from_lines(class, text.lines())
    }

    /// Parses encoded lines, one entry each.
    ///
    /// The first bad line aborts the load. Its index is logged so that a
    /// hand-edited list can be fixed without bisecting it.
    pub fn from_lines<I, S>(class: WordClass, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let entry = WordEntry::parse(line)
                .and_then(|entry| entry.check_arity(class).map(|()| entry))
                .map_err(|error| {
                    warn!(%class, index, line, error = error.id(), "rejected lexicon line");
                    error
                })?;
            entries.push(entry);
        }

        Self::from_entries(class, entries)
    }

    /// Builds a lexicon from already parsed entries, sorting them by surface.
    ///
    /// Surfaces must be unique; two entries with the same surface fail with
    /// `BadWordList`, since `find` could return either of them.
    pub fn from_entries(class: WordClass, mut entries: Vec<WordEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyLists);
        }
        for entry in &entries {
            entry.check_arity(class)?;
        }

        entries.sort_by(|a, b| a.surface().cmp(b.surface()));

        if let Some(pair) = entries.windows(2).find(|w| w[0].surface() == w[1].surface()) {
            warn!(%class, surface = pair[0].surface(), "duplicate lexicon surface");
            return Err(Error::BadWordList);
        }

        let indices_of = |ft: FormType| -> HashSet<usize> {
            entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.form_type() == ft)
                .map(|(i, _)| i)
                .collect()
        };

        let (non_comparable, uncountable, plural_only) = match class {
            WordClass::Adjective | WordClass::Adverb => {
                (indices_of(FormType::NonComparable), HashSet::new(), HashSet::new())
            }
            WordClass::Noun => (
                HashSet::new(),
                indices_of(FormType::Uncountable),
                indices_of(FormType::PluralOnly),
            ),
            WordClass::Verb => (HashSet::new(), HashSet::new(), HashSet::new()),
        };

        debug!(
            %class,
            entries = entries.len(),
            non_comparable = non_comparable.len(),
            uncountable = uncountable.len(),
            plural_only = plural_only.len(),
            "lexicon loaded"
        );

        Ok(Lexicon {
            class,
            entries,
            non_comparable,
            uncountable,
            plural_only,
        })
    }

    pub fn class(&self) -> WordClass {
        self.class
    }

    /// All entries, sorted by surface.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed lexicon; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by surface with a binary search.
    pub fn find(&self, surface: &str) -> Result<&WordEntry> {
        self.entries
            .binary_search_by(|e| e.surface().cmp(surface))
            .map(|i| &self.entries[i])
            .map_err(|_| Error::NotFound)
    }

    /// Surfaces in lexicon order.
    pub fn surfaces(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(WordEntry::surface)
    }

    pub fn is_non_comparable(&self, index: usize) -> bool {
        self.non_comparable.contains(&index)
    }

    pub fn is_uncountable(&self, index: usize) -> bool {
        self.uncountable.contains(&index)
    }

    pub fn is_plural_only(&self, index: usize) -> bool {
        self.plural_only.contains(&index)
    }

    /// Encodes the lexicon back into category-file text, with a trailing
    /// line feed.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&entry.to_line());
            text.push('\n');
        }
        text
    }
}

/// The four lexicons a generator draws from.
#[derive(Debug, Clone)]
pub struct Lexicons {
    adjectives: Lexicon,
    adverbs: Lexicon,
    nouns: Lexicon,
    verbs: Lexicon,
}

impl Lexicons {
    /// Loads all four embedded category files.
    pub fn embedded() -> Result<Self> {
        Ok(Lexicons {
            adjectives: Lexicon::embedded(WordClass::Adjective)?,
            adverbs: Lexicon::embedded(WordClass::Adverb)?,
            nouns: Lexicon::embedded(WordClass::Noun)?,
            verbs: Lexicon::embedded(WordClass::Verb)?,
        })
    }

    /// Parses four lists of encoded lines. Every list must be non-empty.
    pub fn from_lines<S: AsRef<str>>(adj: &[S], adv: &[S], noun: &[S], verb: &[S]) -> Result<Self> {
        if adj.is_empty() || adv.is_empty() || noun.is_empty() || verb.is_empty() {
            return Err(Error::EmptyLists);
        }

        Ok(Lexicons {
            adjectives: Lexicon::from_lines(WordClass::Adjective, adj)?,
            adverbs: Lexicon::from_lines(WordClass::Adverb, adv)?,
            nouns: Lexicon::from_lines(WordClass::Noun, noun)?,
            verbs: Lexicon::from_lines(WordClass::Verb, verb)?,
        })
    }

    pub fn from_entries(
        adj: Vec<WordEntry>,
        adv: Vec<WordEntry>,
        noun: Vec<WordEntry>,
        verb: Vec<WordEntry>,
    ) -> Result<Self> {
        if adj.is_empty() || adv.is_empty() || noun.is_empty() || verb.is_empty() {
            return Err(Error::EmptyLists);
        }

        Ok(Lexicons {
            adjectives: Lexicon::from_entries(WordClass::Adjective, adj)?,
            adverbs: Lexicon::from_entries(WordClass::Adverb, adv)?,
            nouns: Lexicon::from_entries(WordClass::Noun, noun)?,
            verbs: Lexicon::from_entries(WordClass::Verb, verb)?,
        })
    }

    /// Assembles already built lexicons, checking each sits in its own slot.
    pub fn from_parts(adjectives: Lexicon, adverbs: Lexicon, nouns: Lexicon, verbs: Lexicon) -> Result<Self> {
        let slots = [
            (&adjectives, WordClass::Adjective),
            (&adverbs, WordClass::Adverb),
            (&nouns, WordClass::Noun),
            (&verbs, WordClass::Verb),
        ];
        if slots.iter().any(|(lexicon, class)| lexicon.class() != *class) {
            return Err(Error::BadWordList);
        }

        Ok(Lexicons {
            adjectives,
            adverbs,
            nouns,
            verbs,
        })
    }

    pub fn get(&self, class: WordClass) -> &Lexicon {
        match class {
            WordClass::Adjective => &self.adjectives,
            WordClass::Adverb => &self.adverbs,
            WordClass::Noun => &self.nouns,
            WordClass::Verb => &self.verbs,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lexicon> + '_ {
        WordClass::ALL.into_iter().map(move |class| self.get(class))
    }
}
