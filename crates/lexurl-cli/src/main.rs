mod config;
mod input;
mod logging;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use lexurl::{
    extract_features, normalize_url, AnalysisHistory, Classifier, HistoryEntry, RiskScorer,
    ScorerConfig,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "lexurl", version, about = "Lexical feature extraction for URLs")]
struct Args {
    /// Debug logging (overridden by LEXURL_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Print the lexical features of each URL as one JSON line")]
    Extract {
        #[arg(value_name = "URL")]
        urls: Vec<String>,
        /// File with one URL per line, `-` for stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// Strip hidden characters and apply NFKC before extracting
        #[arg(long)]
        normalize: bool,
        /// Print the ordered feature vector instead of the record
        #[arg(long)]
        vector: bool,
    },
    #[command(about = "Score each URL with the heuristic risk scorer")]
    Score {
        #[arg(value_name = "URL")]
        urls: Vec<String>,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        normalize: bool,
        /// TOML file overriding scorer thresholds and weights
        #[arg(long)]
        config: Option<PathBuf>,
        /// JSON file of recent analyses to update
        #[arg(long)]
        history: Option<PathBuf>,
    },
    #[command(about = "Write a feature export document for one URL")]
    Export {
        #[arg(value_name = "URL")]
        url: String,
        /// Output path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ExtractLine<'a, T: Serialize> {
    url: &'a str,
    features: T,
}

#[derive(Serialize)]
struct ScoreLine<'a> {
    url: &'a str,
    #[serde(flatten)]
    prediction: &'a lexurl::Prediction,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    match args.command {
        Command::Extract {
            urls,
            input,
            normalize,
            vector,
        } => run_extract(urls, input.as_deref(), normalize, vector),
        Command::Score {
            urls,
            input,
            normalize,
            config,
            history,
        } => run_score(urls, input.as_deref(), normalize, config.as_deref(), history.as_deref()),
        Command::Export { url, out } => run_export(&url, out.as_deref()),
    }
}

fn prepare(url: &str, normalize: bool) -> String {
    if normalize {
        let normalized = normalize_url(url);
        if normalized != url {
            tracing::debug!(original = url, normalized = %normalized, "normalized url");
        }
        normalized
    } else {
        url.to_string()
    }
}

fn gather(urls: Vec<String>, input: Option<&Path>) -> Result<Vec<String>> {
    let urls = input::collect_urls(urls, input)?;
    if urls.is_empty() {
        bail!("no URLs given; pass them as arguments or with --input");
    }
    Ok(urls)
}

fn run_extract(
    urls: Vec<String>,
    input: Option<&Path>,
    normalize: bool,
    vector: bool,
) -> Result<()> {
    let urls = gather(urls, input)?;
    let mut out = io::stdout().lock();

    for raw in &urls {
        let url = prepare(raw, normalize);
        let features = extract_features(&url);
        let line = if vector {
            serde_json::to_string(&ExtractLine {
                url: &url,
                features: features.to_vector(),
            })?
        } else {
            serde_json::to_string(&ExtractLine {
                url: &url,
                features,
            })?
        };
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

fn run_score(
    urls: Vec<String>,
    input: Option<&Path>,
    normalize: bool,
    config: Option<&Path>,
    history_path: Option<&Path>,
) -> Result<()> {
    let urls = gather(urls, input)?;
    let scorer_config = match config {
        Some(path) => config::load_scorer_config(path)?,
        None => ScorerConfig::default(),
    };
    let scorer = RiskScorer::new(scorer_config)?;
    let mut history = match history_path {
        Some(path) => Some(load_history(path)?),
        None => None,
    };

    let mut out = io::stdout().lock();
    for raw in &urls {
        let url = prepare(raw, normalize);
        let prediction = scorer.classify(&extract_features(&url));
        writeln!(
            out,
            "{}",
            serde_json::to_string(&ScoreLine {
                url: &url,
                prediction: &prediction,
            })?
        )?;
        if let Some(history) = history.as_mut() {
            history.record(HistoryEntry::new(&url, Utc::now(), &prediction));
        }
    }

    if let (Some(path), Some(history)) = (history_path, history) {
        save_history(path, history)?;
    }

    Ok(())
}

fn load_history(path: &Path) -> Result<AnalysisHistory> {
    if !path.exists() {
        return Ok(AnalysisHistory::default());
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("reading history {}", path.display()))?;
    let entries: Vec<HistoryEntry> = serde_json::from_str(&text)
        .with_context(|| format!("parsing history {}", path.display()))?;
    Ok(AnalysisHistory::from_entries(
        entries,
        lexurl::history::DEFAULT_CAPACITY,
    ))
}

fn save_history(path: &Path, history: AnalysisHistory) -> Result<()> {
    let json = serde_json::to_string_pretty(&history.into_vec())?;
    fs::write(path, json).with_context(|| format!("writing history {}", path.display()))?;
    Ok(())
}

fn run_export(url: &str, out: Option<&Path>) -> Result<()> {
    let features = extract_features(url);
    let json = lexurl::export_features(url, &features).to_json_pretty()?;

    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing export {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote feature export");
        }
        None => println!("{}", json),
    }

    Ok(())
}
