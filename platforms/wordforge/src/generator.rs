use tracing::{debug, trace, warn};
use wordforge_lexicon::{Lexicon, Lexicons};
use wordforge_morph::Caser;
use wordforge_pattern::{tokenize, TokenKind};
use wordforge_protocol::{Error, Mod, Result, WordClass, WordEntry};

use crate::config::GeneratorConfig;
use crate::source::{RandomSource, ThreadRandom};
use crate::transform;

/// Draws random words and renders phrase patterns.
///
/// The lexicons are immutable after construction, so a generator can be
/// shared across threads as long as its random source can.
#[derive(Debug)]
pub struct Generator<R = ThreadRandom> {
    lexicons: Lexicons,
    source: R,
    caser: Caser,
    iter_limit: usize,
}

impl Generator<ThreadRandom> {
    /// Embedded lexicons, default configuration, thread-local randomness.
    pub fn embedded() -> Result<Self> {
        Self::with_config(GeneratorConfig::default(), ThreadRandom)
    }
}

impl<R: RandomSource> Generator<R> {
    /// Embedded lexicons with a custom configuration and random source.
    pub fn with_config(config: GeneratorConfig, source: R) -> Result<Self> {
        config.validate()?;
        Self::from_lexicons(Lexicons::embedded()?, config, source)
    }

    /// Builds a generator from four lists of encoded lexicon lines.
    pub fn from_lines<S: AsRef<str>>(
        adj: &[S],
        adv: &[S],
        noun: &[S],
        verb: &[S],
        config: GeneratorConfig,
        source: R,
    ) -> Result<Self> {
        config.validate()?;
        Self::from_lexicons(Lexicons::from_lines(adj, adv, noun, verb)?, config, source)
    }

    /// Builds a generator from already parsed entries. Each list is sorted
    /// by surface.
    pub fn from_entries(
        adj: Vec<WordEntry>,
        adv: Vec<WordEntry>,
        noun: Vec<WordEntry>,
        verb: Vec<WordEntry>,
        config: GeneratorConfig,
        source: R,
    ) -> Result<Self> {
        config.validate()?;
        Self::from_lexicons(Lexicons::from_entries(adj, adv, noun, verb)?, config, source)
    }

    pub fn from_lexicons(lexicons: Lexicons, config: GeneratorConfig, source: R) -> Result<Self> {
        config.validate()?;

        debug!(
            adjectives = lexicons.get(WordClass::Adjective).len(),
            adverbs = lexicons.get(WordClass::Adverb).len(),
            nouns = lexicons.get(WordClass::Noun).len(),
            verbs = lexicons.get(WordClass::Verb).len(),
            iter_limit = config.iter_limit,
            "generator ready"
        );

        Ok(Generator {
            lexicons,
            source,
            caser: Caser::new(),
            iter_limit: config.iter_limit,
        })
    }

    pub fn iter_limit(&self) -> usize {
        self.iter_limit
    }

    pub fn lexicon(&self, class: WordClass) -> &Lexicon {
        self.lexicons.get(class)
    }

    /// Every entry of `class`, sorted by surface.
    pub fn all(&self, class: WordClass) -> &[WordEntry] {
        self.lexicon(class).entries()
    }

    pub fn len(&self, class: WordClass) -> usize {
        self.lexicon(class).len()
    }

    /// Surfaces of `class` in lexicon order.
    pub fn words(&self, class: WordClass) -> impl Iterator<Item = &str> + '_ {
        self.lexicon(class).surfaces()
    }

    /// A uniformly drawn entry of `class`, untransformed.
    pub fn random_word(&self, class: WordClass) -> &WordEntry {
        let lexicon = self.lexicon(class);
        &lexicon.entries()[self.draw_index(lexicon)]
    }

    pub fn find(&self, surface: &str, class: WordClass) -> Result<&WordEntry> {
        self.lexicon(class).find(surface)
    }

    /// Transforms `entry`, read as a word of `class`. The entry need not come
    /// from this generator's lexicons.
    pub fn transform_word(&self, entry: &WordEntry, class: WordClass, mods: Mod) -> Result<String> {
        transform::apply(&self.caser, entry, class, mods)
    }

    /// Looks `surface` up in the `class` lexicon and transforms it.
    pub fn transform(&self, surface: &str, class: WordClass, mods: Mod) -> Result<String> {
        let entry = self.find(surface, class)?;
        self.transform_word(entry, class, mods)
    }

    pub fn adjective(&self, mods: Mod) -> Result<String> {
        self.word(WordClass::Adjective, mods)
    }

    pub fn adverb(&self, mods: Mod) -> Result<String> {
        self.word(WordClass::Adverb, mods)
    }

    pub fn noun(&self, mods: Mod) -> Result<String> {
        self.word(WordClass::Noun, mods)
    }

    pub fn verb(&self, mods: Mod) -> Result<String> {
        self.word(WordClass::Verb, mods)
    }

    /// Draws a word of `class` that can take `mods` and transforms it.
    ///
    /// Entries that would refuse the request (non-comparable words under
    /// gradation, uncountable nouns under plural or article, plural-only
    /// nouns outside plural) are re-drawn. `INDEFINITE_SILENT` re-draws like
    /// `INDEFINITE` but prints no article. After `iter_limit` re-draws the
    /// request fails with `IterLimit`.
    pub fn word(&self, class: WordClass, mods: Mod) -> Result<String> {
        transform::check(class, mods)?;

        let lexicon = self.lexicon(class);

        for attempt in 0..=self.iter_limit {
            let index = self.draw_index(lexicon);
            let entry = &lexicon.entries()[index];

            if !rejects(lexicon, index, mods) {
                return self.transform_word(entry, class, mods);
            }
            trace!(%class, attempt, surface = entry.surface(), "re-drawing");
        }

        warn!(%class, mods = ?mods, iter_limit = self.iter_limit, "iteration limit reached");
        Err(Error::IterLimit)
    }

    /// Renders a pattern (see `wordforge_pattern`), stopping at the first
    /// error.
    pub fn phrase(&self, pattern: &str) -> Result<String> {
        let mut phrase = String::with_capacity(pattern.len() * 2);

        for token in tokenize(pattern) {
            let token = token?;
            match token.kind {
                TokenKind::Insert { class, mods } => phrase.push_str(&self.word(class, mods)?),
                TokenKind::Literal | TokenKind::Percent => {
                    phrase.push_str(token.literal_text().unwrap_or_default())
                }
            }
        }

        Ok(phrase)
    }

    fn draw_index(&self, lexicon: &Lexicon) -> usize {
        // Out-of-range values from a custom source wrap around
        self.source.index(lexicon.len()) % lexicon.len()
    }
}

/// True if the entry at `index` cannot satisfy `mods`.
fn rejects(lexicon: &Lexicon, index: usize, mods: Mod) -> bool {
    match lexicon.class() {
        WordClass::Adjective | WordClass::Adverb => {
            mods.intersects(Mod::GRADATION) && lexicon.is_non_comparable(index)
        }
        WordClass::Noun => {
            let uncountable = lexicon.is_uncountable(index);
            let plural_only = lexicon.is_plural_only(index);

            if mods.intersects(Mod::ARTICLE) && (uncountable || plural_only) {
                return true;
            }
            if mods.contains(Mod::PLURAL) {
                uncountable
            } else {
                plural_only
            }
        }
        WordClass::Verb => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SeededRandom;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts draws and always returns the same index.
    #[derive(Default)]
    struct CountingSource {
        draws: AtomicUsize,
    }

    impl RandomSource for CountingSource {
        fn index(&self, _len: usize) -> usize {
            self.draws.fetch_add(1, Ordering::Relaxed);
            0
        }
    }

    /// Returns the queued indices in order, then zeros.
    struct QueuedSource {
        next: AtomicUsize,
        queue: Vec<usize>,
    }

    impl RandomSource for QueuedSource {
        fn index(&self, _len: usize) -> usize {
            let i = self.next.fetch_add(1, Ordering::Relaxed);
            self.queue.get(i).copied().unwrap_or(0)
        }
    }

    fn tiny() -> Generator<SeededRandom> {
        Generator::from_lines(
            &["3big"],
            &["0nicely"],
            &["0snowfall"],
            &["0stash"],
            GeneratorConfig::default(),
            SeededRandom::new(0),
        )
        .unwrap()
    }

    fn with_nouns(nouns: &[&str], iter_limit: usize) -> Generator<CountingSource> {
        Generator::from_lines(
            &["3big"],
            &["0nicely"],
            nouns,
            &["0stash"],
            GeneratorConfig::with_iter_limit(iter_limit),
            CountingSource::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_phrase_from_tiny_lexicons() {
        let gen = tiny();

        assert_eq!(gen.phrase("a %a %n").unwrap(), "a big snowfall");
        assert_eq!(gen.phrase("%tn %2v %m").unwrap(), "Snowfall stashed nicely");
        assert_eq!(gen.phrase("100%% %upn").unwrap(), "100% SNOWFALLS");
        assert_eq!(gen.phrase("%ia %n").unwrap(), "a big snowfall");
        assert_eq!(gen.phrase("%sa, %cm").unwrap(), "biggest, more nicely");
        assert_eq!(gen.phrase("%Npv").unwrap(), "stash");
    }

    #[test]
    fn test_phrase_without_escapes_is_unchanged() {
        let gen = tiny();
        assert_eq!(gen.phrase("plain text").unwrap(), "plain text");
    }

    #[test]
    fn test_phrase_errors() {
        let gen = tiny();
        let cases = [
            ("", Error::EmptyPattern),
            ("abc%", Error::EscapedStrTerm),
            ("%q", Error::UnknownCommand),
            ("%cn", Error::Incompatible),
            ("%pv", Error::Incompatible),
            ("%iv", Error::Incompatible),
            ("%s", Error::SpecStrTerm),
            ("%s%a", Error::UnknownCommand),
        ];

        for (pattern, expected) in cases {
            assert_eq!(gen.phrase(pattern), Err(expected), "{pattern:?}");
        }
    }

    #[test]
    fn test_find() {
        let gen = tiny();

        assert_eq!(gen.find("big", WordClass::Adjective).unwrap().surface(), "big");
        assert_eq!(gen.find("nicely", WordClass::Adverb).unwrap().surface(), "nicely");
        assert_eq!(gen.find("snowfall", WordClass::Noun).unwrap().surface(), "snowfall");
        assert_eq!(gen.find("stash", WordClass::Verb).unwrap().surface(), "stash");
        assert_eq!(gen.find("box", WordClass::Noun), Err(Error::NotFound));
        assert_eq!(gen.find("big", WordClass::Noun), Err(Error::NotFound));
    }

    #[test]
    fn test_construction_errors() {
        let good = ["0word"];
        let has_empty = ["0word", ""];
        let bad = ["1word"];
        let empty: [&str; 0] = [];
        let config = GeneratorConfig::default();

        let build = |adj: &[&str], adv: &[&str], noun: &[&str], verb: &[&str], config| {
            Generator::from_lines(adj, adv, noun, verb, config, ThreadRandom).map(|_| ())
        };

        assert_eq!(build(&good, &good, &good, &good, config), Ok(()));
        assert_eq!(build(&good, &has_empty, &good, &good, config), Err(Error::BadWordList));
        assert_eq!(build(&empty, &good, &good, &good, config), Err(Error::EmptyLists));
        assert_eq!(build(&good, &good, &good, &empty, config), Err(Error::EmptyLists));
        assert_eq!(build(&bad, &good, &good, &good, config), Err(Error::BadWordList));
        assert_eq!(build(&good, &good, &good, &bad, config), Err(Error::BadWordList));
        assert_eq!(
            build(&good, &good, &good, &good, GeneratorConfig::with_iter_limit(0)),
            Err(Error::BadIterLimit)
        );
    }

    #[test]
    fn test_from_entries_sorts() {
        let entries = |words: &[&str]| -> Vec<WordEntry> {
            words.iter().map(|w| WordEntry::regular(w).unwrap()).collect()
        };

        let gen = Generator::from_entries(
            entries(&["zany", "able"]),
            entries(&["nicely"]),
            entries(&["word", "acorn"]),
            entries(&["stash"]),
            GeneratorConfig::default(),
            ThreadRandom,
        )
        .unwrap();

        assert_eq!(gen.words(WordClass::Adjective).collect::<Vec<_>>(), ["able", "zany"]);
        assert_eq!(gen.all(WordClass::Noun)[0].surface(), "acorn");
        assert_eq!(gen.len(WordClass::Noun), 2);

        assert_eq!(
            Generator::from_entries(vec![], entries(&["a"]), entries(&["a"]), entries(&["a"]), GeneratorConfig::default(), ThreadRandom)
                .map(|_| ()),
            Err(Error::EmptyLists)
        );
    }

    #[test]
    fn test_iteration_limit_bound() {
        // Every noun is uncountable: a plural request can never succeed.
        let gen = with_nouns(&["5rice", "5advice"], 10);

        assert_eq!(gen.noun(Mod::PLURAL), Err(Error::IterLimit));
        assert_eq!(gen.source.draws.load(Ordering::Relaxed), 11);

        assert_eq!(gen.noun(Mod::empty()).unwrap(), "advice");
    }

    #[test]
    fn test_noun_draw_rules() {
        let plural_only = with_nouns(&["2scissors"], 5);
        assert_eq!(plural_only.noun(Mod::empty()), Err(Error::IterLimit));
        assert_eq!(plural_only.noun(Mod::INDEFINITE), Err(Error::IterLimit));
        assert_eq!(plural_only.noun(Mod::PLURAL).unwrap(), "scissors");

        let uncountable = with_nouns(&["5rice"], 5);
        assert_eq!(uncountable.noun(Mod::PLURAL), Err(Error::IterLimit));
        assert_eq!(uncountable.noun(Mod::INDEFINITE), Err(Error::IterLimit));
        assert_eq!(uncountable.noun(Mod::empty()).unwrap(), "rice");

        let regular = with_nouns(&["0owl"], 5);
        assert_eq!(regular.noun(Mod::INDEFINITE).unwrap(), "an owl");
        assert_eq!(regular.noun(Mod::PLURAL).unwrap(), "owls");
    }

    #[test]
    fn test_silent_indefinite_draws() {
        let plural_only = with_nouns(&["2scissors"], 5);
        assert_eq!(plural_only.noun(Mod::INDEFINITE_SILENT), Err(Error::IterLimit));

        let uncountable = with_nouns(&["5rice"], 5);
        assert_eq!(uncountable.noun(Mod::INDEFINITE_SILENT), Err(Error::IterLimit));

        let regular = with_nouns(&["0muffin"], 5);
        assert_eq!(regular.noun(Mod::INDEFINITE_SILENT).unwrap(), "muffin");

        // Nouns sorted: [muffin, rice]. The adjective takes the first index,
        // then "rice" is drawn and skipped.
        let gen = Generator::from_lines(
            &["3big"],
            &["0nicely"],
            &["5rice", "0muffin"],
            &["0stash"],
            GeneratorConfig::with_iter_limit(3),
            QueuedSource { next: AtomicUsize::new(0), queue: vec![0, 1, 0] },
        )
        .unwrap();
        assert_eq!(gen.phrase("%ia %_n").unwrap(), "a big muffin");
        assert_eq!(gen.source.next.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_possessive_phrases() {
        let gen = tiny();
        assert_eq!(gen.phrase("%on").unwrap(), "snowfall's");
        assert_eq!(gen.phrase("%pon").unwrap(), "snowfalls'");
        assert_eq!(gen.phrase("%_on tail").unwrap(), "snowfall's tail");
        assert_eq!(gen.phrase("%oa"), Err(Error::Incompatible));
        assert_eq!(gen.phrase("%om"), Err(Error::Incompatible));
        assert_eq!(gen.phrase("%ov"), Err(Error::Incompatible));
        assert_eq!(gen.phrase("%_v"), Err(Error::Incompatible));
        assert_eq!(gen.phrase("%i_n"), Err(Error::Incompatible));
    }

    #[test]
    fn test_redraw_skips_refusing_entries() {
        // Sorted: [own, tall]; the first draw hits "own", the second "tall".
        let gen = Generator::from_lines(
            &["4own", "3tall"],
            &["0nicely"],
            &["0snowfall"],
            &["0stash"],
            GeneratorConfig::with_iter_limit(3),
            QueuedSource { next: AtomicUsize::new(0), queue: vec![0, 1] },
        )
        .unwrap();

        assert_eq!(gen.adjective(Mod::COMPARATIVE).unwrap(), "taller");
        assert_eq!(gen.source.next.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_non_comparable_draws() {
        let gen = Generator::from_lines(
            &["4own"],
            &["4cryptographically"],
            &["0snowfall"],
            &["0stash"],
            GeneratorConfig::with_iter_limit(5),
            ThreadRandom,
        )
        .unwrap();

        assert_eq!(gen.adjective(Mod::empty()).unwrap(), "own");
        assert_eq!(gen.adjective(Mod::COMPARATIVE), Err(Error::IterLimit));
        assert_eq!(gen.adjective(Mod::SUPERLATIVE), Err(Error::IterLimit));
        assert_eq!(gen.adverb(Mod::empty()).unwrap(), "cryptographically");
        assert_eq!(gen.adverb(Mod::COMPARATIVE), Err(Error::IterLimit));
        assert_eq!(gen.adverb(Mod::SUPERLATIVE), Err(Error::IterLimit));
    }

    #[test]
    fn test_incompatible_fails_before_drawing() {
        let gen = with_nouns(&["5rice"], 5);
        assert_eq!(gen.noun(Mod::COMPARATIVE), Err(Error::Incompatible));
        assert_eq!(gen.source.draws.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_out_of_range_source_wraps() {
        struct Wild;
        impl RandomSource for Wild {
            fn index(&self, len: usize) -> usize {
                len + 1
            }
        }

        let gen = Generator::from_lines(
            &["3big"],
            &["0nicely"],
            &["0snowfall", "0word"],
            &["0stash"],
            GeneratorConfig::default(),
            Wild,
        )
        .unwrap();
        assert_eq!(gen.random_word(WordClass::Noun).surface(), "word");
    }

    #[test]
    fn test_embedded_generator() {
        let gen = Generator::embedded().unwrap();

        assert_eq!(gen.transform("word", WordClass::Noun, Mod::empty()).unwrap(), "word");
        assert_eq!(gen.transform("theta", WordClass::Noun, Mod::empty()), Err(Error::NotFound));
        assert_eq!(gen.transform("go", WordClass::Verb, Mod::PAST_PARTICIPLE).unwrap(), "gone");
        assert_eq!(gen.transform("arctic", WordClass::Noun, Mod::PLURAL).unwrap(), "arctics");
        assert_eq!(gen.transform("arctic", WordClass::Adjective, Mod::COMPARATIVE), Err(Error::NonComparable));
        assert_eq!(gen.transform("advice", WordClass::Noun, Mod::PLURAL), Err(Error::Uncountable));
        assert_eq!(gen.transform("muffin", WordClass::Noun, Mod::INDEFINITE_SILENT).unwrap(), "muffin");
        assert_eq!(gen.transform("scissors", WordClass::Noun, Mod::INDEFINITE_SILENT), Err(Error::Incompatible));
        assert_eq!(gen.transform("rice", WordClass::Noun, Mod::INDEFINITE_SILENT), Err(Error::Uncountable));
        assert_eq!(gen.transform("child", WordClass::Noun, Mod::PLURAL | Mod::POSSESSIVE).unwrap(), "children's");
        assert_eq!(
            gen.transform("present", WordClass::Verb, Mod::PRESENT_SIMPLE | Mod::PLURAL).unwrap(),
            "present"
        );
        assert_eq!(gen.transform("cool", WordClass::Adjective, Mod::SUPERLATIVE).unwrap(), "coolest");
        assert_eq!(gen.transform("own", WordClass::Adjective, Mod::COMPARATIVE), Err(Error::NonComparable));
        assert_eq!(gen.transform("scissors", WordClass::Noun, Mod::INDEFINITE), Err(Error::Incompatible));
        assert_eq!(gen.transform("rice", WordClass::Noun, Mod::INDEFINITE), Err(Error::Uncountable));

        for class in WordClass::ALL {
            assert_eq!(gen.all(class).len(), gen.len(class));
            assert_eq!(gen.words(class).count(), gen.len(class));
        }
    }

    #[test]
    fn test_embedded_phrases_succeed() {
        let gen = Generator::embedded().unwrap();

        for _ in 0..200 {
            let phrase = gen.phrase("%tsa %fpn that %lm %uNpv %in").unwrap();
            assert!(phrase.contains(" that "), "{phrase}");
            gen.phrase("%ica %n %2v %3v %gv %Nv %pn %im").unwrap();
            gen.phrase("%ia %_n of %pon").unwrap();
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let gen = Generator::embedded().unwrap();

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..50 {
                        gen.phrase("%tsa %fpn that %lm %uNpv %in").unwrap();
                    }
                });
            }
        });
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = Generator::with_config(GeneratorConfig::default(), SeededRandom::new(42)).unwrap();
        let b = Generator::with_config(GeneratorConfig::default(), SeededRandom::new(42)).unwrap();

        for _ in 0..20 {
            assert_eq!(a.phrase("%ia %n %2v").unwrap(), b.phrase("%ia %n %2v").unwrap());
        }
    }

    proptest! {
        #[test]
        fn case_is_idempotent(seed in any::<u64>(), class_idx in 0usize..4, case_bit in 10u32..14) {
            let gen = Generator::with_config(GeneratorConfig::default(), SeededRandom::new(seed)).unwrap();
            let class = WordClass::ALL[class_idx];
            let case = Mod::from_bits_retain(1 << case_bit);

            let once = gen.transform_word(gen.random_word(class), class, case).unwrap();
            let entry = WordEntry::regular(&once).unwrap();
            let twice = gen.transform_word(&entry, class, case).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn plain_patterns_render_verbatim(pattern in "[^%]{1,40}") {
            let gen = tiny();
            prop_assert_eq!(gen.phrase(&pattern).unwrap(), pattern);
        }
    }
}
