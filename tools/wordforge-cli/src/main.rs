//! wordforge CLI: random phrases, word forms, lexicon audit and compilation.

mod audit;
mod lexfile;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use wordforge::{
    Generator, GeneratorConfig, Mod, RandomSource, SeededRandom, ThreadRandom, WordClass, DEFAULT_ITER_LIMIT,
};

#[derive(Parser)]
#[command(name = "wordforge", version, about = "Random English phrases and word forms")]
struct Cli {
    /// Re-draw budget when a drawn word cannot take the requested modifiers.
    #[arg(long, global = true, default_value_t = DEFAULT_ITER_LIMIT)]
    iter_limit: usize,

    /// Seed for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory holding custom `adj`, `adv`, `noun` and `verb` files.
    #[arg(long, global = true, value_name = "DIR")]
    lexicon_dir: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// More logging (-v info, -vv debug, -vvv trace). Overrides RUST_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a pattern, e.g. "%tn %2v %ia %n".
    Phrase {
        pattern: String,

        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Draw random words of one class.
    Word {
        #[arg(value_enum)]
        class: ClassArg,

        /// Modifier letters as in patterns, e.g. "pu" for plural upper case.
        #[arg(short, long, default_value = "")]
        mods: String,

        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Transform a word from the lexicon.
    Transform {
        word: String,

        #[arg(value_enum)]
        class: ClassArg,

        #[arg(short, long, default_value = "")]
        mods: String,
    },

    /// Write every entry with its inflected forms, one file per class.
    Audit {
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,
    },

    /// Compile a source word list into a canonical category file.
    Compile {
        #[arg(value_enum)]
        class: ClassArg,

        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClassArg {
    Adj,
    Adv,
    Noun,
    Verb,
}

impl From<ClassArg> for WordClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Adj => WordClass::Adjective,
            ClassArg::Adv => WordClass::Adverb,
            ClassArg::Noun => WordClass::Noun,
            ClassArg::Verb => WordClass::Verb,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    command: &'static str,
    input: &'a str,
    results: Vec<String>,
}

fn parse_mods(letters: &str) -> anyhow::Result<Mod> {
    letters.chars().try_fold(Mod::empty(), |acc, c| match Mod::from_letter(c) {
        Some(m) => Ok(acc | m),
        None => bail!("unknown modifier letter {c:?}"),
    })
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_generator(cli: &Cli) -> anyhow::Result<Generator<Box<dyn RandomSource>>> {
    let config = GeneratorConfig::with_iter_limit(cli.iter_limit);
    let source: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let gen = match &cli.lexicon_dir {
        None => Generator::with_config(config, source)?,
        Some(dir) => {
            let [adj, adv, noun, verb] = lexfile::read_dir(dir)?;
            let lines = |text: &str| -> Vec<String> { text.lines().map(str::to_owned).collect() };
            Generator::from_lines(&lines(&adj), &lines(&adv), &lines(&noun), &lines(&verb), config, source)
                .with_context(|| format!("loading lexicons from {}", dir.display()))?
        }
    };

    Ok(gen)
}

fn emit(json: bool, report: Report<'_>) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in &report.results {
            println!("{line}");
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Phrase { pattern, count } => {
            let gen = build_generator(&cli)?;
            let results = (0..*count)
                .map(|_| gen.phrase(pattern))
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("rendering {pattern:?}"))?;

            emit(cli.json, Report { command: "phrase", input: pattern, results })?;
        }

        Commands::Word { class, mods, count } => {
            let gen = build_generator(&cli)?;
            let m = parse_mods(mods)?;
            let results = (0..*count)
                .map(|_| gen.word((*class).into(), m))
                .collect::<Result<Vec<_>, _>>()?;

            emit(cli.json, Report { command: "word", input: mods, results })?;
        }

        Commands::Transform { word, class, mods } => {
            let gen = build_generator(&cli)?;
            let form = gen
                .transform(word, (*class).into(), parse_mods(mods)?)
                .with_context(|| format!("transforming {word:?}"))?;

            emit(cli.json, Report { command: "transform", input: word, results: vec![form] })?;
        }

        Commands::Audit { output } => {
            let gen = build_generator(&cli)?;
            fs::create_dir_all(output).with_context(|| format!("creating {}", output.display()))?;

            let mut results = Vec::new();
            for class in WordClass::ALL {
                let text = audit::audit_class(&gen, class)?;
                let path = output.join(class.file_name());
                results.push(lexfile::write_with_checksum(&path, &text)?);
                tracing::info!(%class, entries = gen.len(class), path = %path.display(), "audit written");
            }

            emit(cli.json, Report { command: "audit", input: &output.to_string_lossy(), results })?;
        }

        Commands::Compile { class, input, output } => {
            let source = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
            let text = lexfile::compile(&source, (*class).into())?;
            let line = lexfile::write_with_checksum(output, &text)?;

            emit(cli.json, Report { command: "compile", input: &input.to_string_lossy(), results: vec![line] })?;
        }
    }

    Ok(())
}
