//! PhishSniff - Command line entry point

use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use phishsniff_core::constants::{APP_NAME, APP_VERSION};
use phishsniff_core::logic::report::{format_verdict, WELCOME_MESSAGE};
use phishsniff_core::{ClassifyError, Config, FileModelSource, PhishingEngine};

#[derive(Debug, Parser)]
#[command(name = "phishsniff", version, about = "Classify a URL or email text as phishing or safe")]
struct Cli {
    /// Text to analyze; read from stdin when omitted
    text: Vec<String>,

    /// Print the verdict as JSON
    #[arg(long)]
    json: bool,

    /// URL model artifact (overrides PHISHSNIFF_URL_MODEL)
    #[arg(long, value_name = "PATH")]
    url_model: Option<PathBuf>,

    /// Email model artifact (overrides PHISHSNIFF_EMAIL_MODEL)
    #[arg(long, value_name = "PATH")]
    email_model: Option<PathBuf>,

    /// Per-classifier timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = cli.url_model {
        config.url_model_path = path;
    }
    if let Some(path) = cli.email_model {
        config.email_model_path = path;
    }
    if let Some(ms) = cli.timeout_ms {
        config.model_timeout = Duration::from_millis(ms);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    let text = if cli.text.is_empty() {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            println!("{}", WELCOME_MESSAGE);
            return Ok(());
        }
        let mut buf = String::new();
        stdin.lock().read_to_string(&mut buf).context("failed to read stdin")?;
        buf
    } else {
        cli.text.join(" ")
    };

    let source = FileModelSource::from_config(&config);
    let engine = PhishingEngine::from_source(&source);
    if !engine.has_url_model() {
        log::info!("URL model not found - using fallback heuristics");
    }

    let verdict = match engine.classify_with_timeout(&text, config.model_timeout).await {
        Ok(verdict) => verdict,
        Err(ClassifyError::EmptyInput) => {
            eprintln!("Nothing to analyze: input is empty");
            std::process::exit(2);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        println!("{}", format_verdict(&verdict));
    }

    Ok(())
}
