use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use libsearch::{SanskritSearch, SearchConfig, SearchResults};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Substring matches, extended over trailing vowel signs
    Direct,
    /// Whole words, with anusvara and visarga spellings
    Exact,
    /// Direct plus sandhi variants
    Sandhi,
    /// Iti-quotation variants only
    Pratika,
    /// Direct, sandhi and quotation matches together
    Full,
}

#[derive(Parser)]
#[command(name = "sanskrit-search")]
#[command(about = "Sandhi- and quotation-aware search in Devanagari Sanskrit text")]
#[command(version)]
struct Cli {
    /// Term to search for; in sandhi mode several may be given, separated by commas
    #[arg(short, long)]
    term: String,

    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = Mode::Sandhi)]
    mode: Mode,

    /// Text file to search; stdin is read when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the text with matches wrapped in highlight markup
    #[arg(long)]
    highlight: bool,

    /// Print results as JSON
    #[arg(long, conflicts_with = "highlight")]
    json: bool,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn run(engine: &SanskritSearch, mode: Mode, term: &str, text: &str) -> SearchResults {
    let collect = |matches| {
        let mut results = SearchResults::for_term(term);
        results.matches = matches;
        results.finalize(engine.config().base().max_results);
        results
    };
    match mode {
        Mode::Direct => collect(engine.direct_search(term, text)),
        Mode::Exact => engine.exact_word_search(term, text),
        Mode::Sandhi => engine.search_terms(term, text),
        Mode::Pratika => collect(engine.pratika_grahana_search(term, text)),
        Mode::Full => engine.search_with_pratika_grahana(term, text),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.config.as_ref() {
        Some(path) => SearchConfig::load_toml(path)?,
        None => SearchConfig::default(),
    };
    let engine = SanskritSearch::new(config);

    let text = match cli.file.as_ref() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let results = run(&engine, cli.mode, &cli.term, &text);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if cli.highlight {
        println!("{}", engine.highlight_matches(&text, &results.matches));
    } else {
        for m in results.matches.iter() {
            println!("{}\t{}\t{}\t{}", m.position, m.length, m.match_type, m.matched_text);
        }
        eprintln!("{} match(es)", results.count);
    }
    Ok(())
}
