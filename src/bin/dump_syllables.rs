//! Debug tool to dump the syllable segmentation of a lyrics file.
//!
//! Usage:
//!   `cargo run --bin dump_syllables -- <lyrics.txt> [--language ja|en]`
//!   `cargo run --bin dump_syllables -- <lyrics.txt> --json`
//!
//! The path falls back to `LYRICS_PATH` and the language to `LYRICS_LANGUAGE`.
//! `--verbose` turns on debug logging on stderr.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use karaoke_syllables::config::Config;
use karaoke_syllables::error::Error;
use karaoke_syllables::{Language, Lyrics, TextUnit};

/// Parsed command line.
struct Args {
    path: Option<PathBuf>,
    language: Option<Language>,
    json: bool,
    verbose: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { path: None, language: None, json: false, verbose: false };
    let mut rest = env::args().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--verbose" | "-v" => args.verbose = true,
            "--language" | "-l" => {
                let code = rest.next().context("--language needs a value (ja or en)")?;
                args.language = Some(code.parse()?);
            }
            flag if flag.starts_with('-') => bail!("Unknown flag {flag}"),
            path => args.path = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")
}

fn main() -> Result<()> {
    let args = parse_args()?;
    setup_logging(args.verbose)?;

    let config = Config::load()?;
    tracing::debug!("{} {}", config.app_name(), config.app_version());
    let language = args.language.unwrap_or(config.language);
    let path = args.path.or(config.lyrics_path).ok_or_else(|| {
        Error::config("No lyrics file given", "Pass a path or set LYRICS_PATH")
    })?;

    let raw = fs_err::read_to_string(&path)?;
    let lyrics = Lyrics::new(raw, language)?;
    tracing::info!("Loaded {} ({language})", path.display());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&lyrics.snapshot())?);
    } else {
        dump_tree(&lyrics, &path);
    }
    Ok(())
}

fn dump_tree(lyrics: &Lyrics, path: &std::path::Path) {
    let words = lyrics.words().count();
    println!(
        "{} ({}): {} lines, {words} words, {} syllables",
        path.display(),
        lyrics.language(),
        lyrics.lines().len(),
        lyrics.syllable_count()
    );

    let lines = lyrics.lines();
    for (i, line) in lines.iter().enumerate() {
        let is_last = i == lines.len() - 1;
        let prefix = if is_last { "└" } else { "├" };
        let child_prefix = if is_last { " " } else { "│" };

        println!("{prefix}─ Line {i}: {:?}", line.raw());

        let backing = line.backing_vocals();
        let words = line.words();
        for (j, (word, backing_vocal)) in words.iter().zip(backing).enumerate() {
            let word_prefix = if j == words.len() - 1 { "└" } else { "├" };
            let marker = if backing_vocal { " (backing)" } else { "" };
            println!(
                "{child_prefix}  {word_prefix}─ {} → {}{marker}",
                word.normalized(),
                word.syllables().join("·")
            );
        }
    }
}
