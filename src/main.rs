use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::BoolishValueParser;
use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, error};

use edge_index::config::{Config, EventSource, InputConfig};
use edge_index::core::Result;
use edge_index::event::{handle_json, handle_json_pretty};

/// Rewrites a viewer-request event's uri to its default document and prints
/// the returned request as JSON.
#[derive(Parser, Debug)]
#[command(name = "edge_index", version = edge_index::VERSION)]
struct Cli {
    /// Event JSON file; '-' or absent reads stdin
    #[arg(value_name = "EVENT_FILE", env = "EVENT_FILE")]
    event: Option<PathBuf>,

    /// Pretty-print the returned request
    #[arg(long, env = "PRETTY_OUTPUT", value_parser = BoolishValueParser::new())]
    pretty: bool,
}

impl Cli {
    fn input(&self) -> InputConfig {
        InputConfig {
            source: self
                .event
                .clone()
                .map(EventSource::from_path)
                .unwrap_or_default(),
            pretty: self.pretty,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    config.input = cli.input();

    if let Err(e) = edge_index::logging::init(&config.logging) {
        eprintln!("Warning: {}", e);
    }
    config.log_summary();

    let input = &config.input;

    // Input is a single small document; no need for worker threads
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(input)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(source = %input.source.describe(), error = %e, "rewrite failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(input: &InputConfig) -> Result<()> {
    let event = read_event(&input.source).await?;
    debug!(source = %input.source.describe(), bytes = event.len() as u64, "event read");

    let output = if input.pretty {
        handle_json_pretty(&event)?
    } else {
        handle_json(&event)?
    };

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(())
}

async fn read_event(source: &EventSource) -> Result<String> {
    match source {
        EventSource::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
        EventSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
    }
}
