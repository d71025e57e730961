//! Command-line interface definition and dispatch for ji.
//!
//! Uses [`clap`] for argument parsing with derive macros. Exactly one query
//! mode runs per invocation; the selectors share an [`ArgGroup`] so clap
//! rejects conflicting combinations before any work happens.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use crate::config::Config;
use crate::constants;
use crate::dictionary::{Dictionary, Entry};
use crate::filter;
use crate::format::{self, Formatter};
use crate::output;

/// Top-level CLI structure for ji.
///
/// Flag-style surface: one optional query selector, plus output options.
/// The `///` doc comments on fields double as `--help` text rendered by clap.
#[derive(Parser, Debug)]
#[command(
    name = "ji",
    about = "Look up kanji information from the CLI",
    after_help = constants::PLACEHOLDER_HELP,
    group(ArgGroup::new("query").multiple(false)),
)]
pub struct Cli {
    /// Search by kanji
    #[arg(group = "query")]
    pub kanji: Option<String>,

    /// Search for all kanji contained in a file ("-" for stdin)
    #[arg(short = 'F', long, value_name = "path", group = "query")]
    pub file: Option<PathBuf>,

    /// Match all kanji included in the Remembering the Kanji books
    #[arg(short, long, group = "query")]
    pub all: bool,

    /// Match all kanji in the given JLPT level
    #[arg(short = 'N', long, value_name = "level", group = "query")]
    pub jlpt: Option<u32>,

    /// Match all kanji in the given Jouyou grade
    #[arg(short = 'J', long, value_name = "grade", group = "query")]
    pub jouyou: Option<u32>,

    /// Match all kanji with the given number of strokes
    #[arg(short = 'S', long, value_name = "num", group = "query")]
    pub strokes: Option<u32>,

    /// Search kanji by Heisig keyword
    #[arg(short, long, group = "query")]
    pub keyword: Option<String>,

    /// Search kanji by their Heisig index
    #[arg(short = 'i', long, value_name = "index", group = "query")]
    pub rtk_index: Option<u32>,

    /// Specify output formatting
    #[arg(short, long)]
    pub format: Option<String>,

    /// Specify the output separator
    #[arg(short, long, value_name = "string")]
    pub separator: Option<String>,

    /// Produce a wall of text which consists of kanji
    #[arg(short, long)]
    pub only_kanji: bool,

    /// Produce minimal output (no examples, no mnemonics)
    #[arg(short, long)]
    pub minimal: bool,

    /// Limit how many items of a list field are rendered (0 disables them)
    #[arg(long, value_name = "n")]
    pub max_examples: Option<usize>,

    /// Use a dictionary file other than the configured one
    #[arg(long, value_name = "path")]
    pub dictionary: Option<String>,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Executes the selected query and prints the formatted results.
///
/// Returns `Ok(false)` when the query matched nothing (the diagnostic has
/// already been printed to stderr); the caller maps that to exit code 1.
pub fn run(cli: Cli) -> Result<bool> {
    let config = Config::load()?;
    let dict_path = config.resolve_dictionary(cli.dictionary.as_deref())?;
    let dict = Dictionary::open(&dict_path)
        .with_context(|| format!("Failed to load dictionary at {}", dict_path.display()))?;

    let matches = collect_matches(&cli, &dict)?;
    if matches.is_empty() {
        output::no_matches();
        return Ok(false);
    }

    let (rendered, separator) = render_matches(&cli, &config, &matches);
    output::print_results(&rendered, &separator);
    Ok(true)
}

/// Runs the query mode selected on the command line.
///
/// With no selector and no positional argument, standard input is scanned
/// for kanji, mirroring a bare `ji < file` invocation.
fn collect_matches(cli: &Cli, dict: &Dictionary) -> Result<Vec<Entry>> {
    if cli.all {
        return Ok(dict.all_rtk_index());
    }
    if let Some(level) = cli.jlpt {
        return Ok(dict.by_jlpt_level(level));
    }
    if let Some(grade) = cli.jouyou {
        return Ok(dict.by_jouyou_grade(grade));
    }
    if let Some(strokes) = cli.strokes {
        return Ok(dict.by_strokes(strokes));
    }
    if let Some(ref word) = cli.keyword {
        return Ok(dict.by_keyword(word));
    }
    if let Some(index) = cli.rtk_index {
        return Ok(dict.by_rtk_index(index));
    }
    if let Some(ref text) = cli.kanji {
        return Ok(lookup_text(dict, text));
    }

    match cli.file {
        Some(ref path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            scan_stream(dict, BufReader::new(file))
        }
        _ => scan_stream(dict, io::stdin().lock()),
    }
}

/// Look up every distinct kanji in the text, in first-occurrence order.
fn lookup_text(dict: &Dictionary, text: &str) -> Vec<Entry> {
    let mut matches = Vec::new();
    for kanji in filter::filter_kanji(text) {
        matches.extend(dict.by_kanji(&kanji.to_string()));
    }
    matches
}

/// Fully consume a text stream and look up the kanji it contains.
/// Duplicates are dropped across the whole stream, not per line.
fn scan_stream<R: Read>(dict: &Dictionary, mut reader: R) -> Result<Vec<Entry>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read input stream")?;
    Ok(lookup_text(dict, &text))
}

/// Render all matches and pick the separator.
///
/// `--only-kanji` always joins with the empty separator so the output forms
/// an unbroken wall of characters.
fn render_matches(cli: &Cli, config: &Config, matches: &[Entry]) -> (Vec<String>, String) {
    let separator = if cli.only_kanji {
        String::new()
    } else {
        format::unescape(
            cli.separator
                .as_deref()
                .or(config.separator.as_deref())
                .unwrap_or(constants::DEFAULT_SEPARATOR),
        )
    };

    let formatter = Formatter::new(select_template(cli, config), cli.max_examples);
    let rendered = matches.iter().map(|e| formatter.render(e)).collect();
    (rendered, separator)
}

/// Template precedence: --only-kanji > --minimal > --format > config > default.
fn select_template(cli: &Cli, config: &Config) -> String {
    if cli.only_kanji {
        constants::ONLY_KANJI_FORMAT.to_string()
    } else if cli.minimal {
        constants::MINIMAL_FORMAT.to_string()
    } else if let Some(ref template) = cli.format {
        format::unescape(template)
    } else if let Some(ref template) = config.format {
        format::unescape(template)
    } else {
        constants::DEFAULT_FORMAT.to_string()
    }
}
