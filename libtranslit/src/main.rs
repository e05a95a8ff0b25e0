use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use libtranslit::{TranslitConfig, Transliterator};

#[derive(Parser)]
#[command(name = "translit")]
#[command(about = "Transliterate Devanagari Sanskrit into other Indic scripts and IAST")]
#[command(version)]
struct Cli {
    /// Target script code (kn, te, ta, ml, gu, or, bn, pa, en)
    #[arg(short, long)]
    to: Option<String>,

    /// Convert text written in this script back to Devanagari
    #[arg(short, long, conflicts_with = "to")]
    from: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List registered scripts and exit
    #[arg(long)]
    list: bool,

    /// Text to convert; stdin is read line by line when omitted
    text: Vec<String>,
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
        Some(path) => TranslitConfig::load_toml(path)?,
        None => TranslitConfig::default(),
    };
    let translit = Transliterator::from_config(&config)?;

    if cli.list {
        for code in translit.registry().codes() {
            let name = translit
                .registry()
                .get(code)
                .map(|m| m.name.as_str())
                .unwrap_or_default();
            println!("{code}\t{name}");
        }
        return Ok(());
    }

    let target = cli.to.unwrap_or_else(|| config.default_script.clone());
    let convert = |line: &str| match cli.from.as_deref() {
        Some(from) => translit.reverse(line, from),
        None => translit.transliterate(line, &target),
    };

    if !cli.text.is_empty() {
        println!("{}", convert(&cli.text.join(" ")));
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        println!("{}", convert(&line?));
    }
    Ok(())
}
