//! Category files on disk: loading, canonical compilation, checksums.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use sha2::{Digest, Sha256};
use wordforge::{Lexicon, WordClass, WordEntry};

/// Hex SHA-256 of `bytes`.
pub fn checksum(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Writes `text` to `path` and returns its checksum line (`<sha256>  <path>`).
pub fn write_with_checksum(path: &Path, text: &str) -> anyhow::Result<String> {
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(format!("{}  {}", checksum(text.as_bytes()), path.display()))
}

/// Reads the four category files (`adj`, `adv`, `noun`, `verb`) from `dir`.
pub fn read_dir(dir: &Path) -> anyhow::Result<[String; 4]> {
    let read = |class: WordClass| -> anyhow::Result<String> {
        let path = dir.join(class.file_name());
        fs::read_to_string(&path).with_context(|| format!("reading {class} list {}", path.display()))
    };

    Ok([
        read(WordClass::Adjective)?,
        read(WordClass::Adverb)?,
        read(WordClass::Noun)?,
        read(WordClass::Verb)?,
    ])
}

/// Turns a source list into a canonical category file.
///
/// Blank lines and lines starting with `#` are dropped. Every other line
/// must parse as an entry of `class`. Identical lines collapse into one;
/// two different entries for the same surface are an error. The result is
/// sorted by surface and ends with a line feed.
pub fn compile(source: &str, class: WordClass) -> anyhow::Result<String> {
    let mut entries: Vec<WordEntry> = Vec::new();

    for (n, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let entry = WordEntry::parse(line)
            .and_then(|entry| entry.check_arity(class).map(|()| entry))
            .with_context(|| format!("line {}: {line:?}", n + 1))?;
        entries.push(entry);
    }

    entries.sort_by(|a, b| a.surface().cmp(b.surface()));
    entries.dedup();

    if let Some(pair) = entries.windows(2).find(|w| w[0].surface() == w[1].surface()) {
        bail!(
            "conflicting entries for {:?}: {:?} and {:?}",
            pair[0].surface(),
            pair[0].to_line(),
            pair[1].to_line()
        );
    }

    let lexicon = Lexicon::from_entries(class, entries).with_context(|| format!("compiling {class} list"))?;
    Ok(lexicon.to_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum() {
        assert_eq!(
            checksum(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_compile_canonicalizes() {
        let source = "# verbs\n0walk\n\n1go,went,gone\n0stash\n0walk\n";
        assert_eq!(compile(source, WordClass::Verb).unwrap(), "1go,went,gone\n0stash\n0walk\n");
    }

    #[test]
    fn test_compile_rejects_bad_input() {
        assert!(compile("0walk\n9run\n", WordClass::Verb).is_err());
        assert!(compile("1go,went\n", WordClass::Verb).is_err());
        assert!(compile("0walk\n3walk\n", WordClass::Verb).is_err());
        assert!(compile("# nothing\n\n", WordClass::Noun).is_err());
    }

    #[test]
    fn test_compile_error_names_the_line() {
        let err = compile("0walk\n9run\n", WordClass::Verb).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }
}
