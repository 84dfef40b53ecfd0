//! Score a paper with one of the embedded assessors and print the report
//! as JSON.
//!
//! Usage:
//!   content-score <paper.json> [--assessor <preset>] [--morphology <file>] [--locale <code>] [--pretty]
//!   content-score --list
//!
//! Output (stdout): {"assessor": "...", "score": N, "results": [...]}
//! Errors (stderr), with a non-zero exit code.
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use content_scoring::{Assessor, AssessorKind, MorphologyData, Paper, Researcher};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "content-score",
    version,
    about = "Keyphrase, SEO and readability scores for a paper"
)]
struct Cli {
    /// Paper as JSON: {"text": ..., "keyword": ..., "locale": ...}.
    #[arg(required_unless_present = "list")]
    paper: Option<PathBuf>,

    /// Assessor preset to run.
    #[arg(long, short, default_value = "seo")]
    assessor: AssessorKind,

    /// Morphology data as JSON, keyed by language code.
    #[arg(long, short)]
    morphology: Option<PathBuf>,

    /// Override the paper's locale.
    #[arg(long, short)]
    locale: Option<String>,

    /// Pretty-print the report.
    #[arg(long)]
    pretty: bool,

    /// Print the preset names and exit.
    #[arg(long)]
    list: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if cli.list {
        for kind in AssessorKind::ALL {
            println!("{kind}");
        }
        return Ok(());
    }
    let Some(path) = cli.paper else {
        return Err("no paper given".into());
    };

    let mut paper: Paper = serde_json::from_str(&fs::read_to_string(&path)?)?;
    if let Some(locale) = cli.locale {
        paper = paper.with_locale(locale);
    }
    let mut researcher = Researcher::for_paper(&paper);
    if let Some(path) = cli.morphology {
        let morphology = MorphologyData::from_json(&fs::read_to_string(path)?)?;
        researcher = researcher.with_morphology(morphology);
    }
    tracing::info!(assessor = %cli.assessor, locale = %paper.locale, "scoring paper");

    let report = Assessor::preset(cli.assessor)?.assess(&paper, &researcher);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("content-score: {err}");
            ExitCode::FAILURE
        }
    }
}
