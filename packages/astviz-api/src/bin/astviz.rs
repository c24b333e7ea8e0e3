//! Astviz CLI
//!
//! Runs the visualizer backend from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Parse a file and print the result JSON
//! cargo run --bin astviz -- parse script.py --pretty
//!
//! # Parse stdin with a config file
//! echo 'x = 1' | cargo run --bin astviz -- --config astviz.yaml parse
//!
//! # Send one request through the router
//! cargo run --bin astviz -- request POST /api/parse --body '{"code": "x = 1"}'
//!
//! # List the example snippets
//! cargo run --bin astviz -- examples
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use astviz_api::{ApiRequest, Method, Router};
use astviz_ir::{parse_code_with, parse_file, VisualizerConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "astviz")]
#[command(about = "Python syntax trees as graphs for visualization", long_about = None)]
struct Cli {
    /// YAML configuration file (must contain `version: 1`)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse Python source and print the result
    Parse {
        /// Source file; stdin when omitted
        file: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Run one request through the API router
    Request {
        /// HTTP method (GET, POST, ...)
        method: Method,

        /// Request path, e.g. /api/parse
        path: String,

        /// JSON request body
        #[arg(long, conflicts_with = "body_file")]
        body: Option<String>,

        /// File holding the JSON request body
        #[arg(long)]
        body_file: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the example snippets
    Examples {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = VisualizerConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(path) = &cli.config {
        info!("loaded config from {}", path.display());
    }

    match cli.command {
        Commands::Parse { file, pretty } => {
            let result = match file {
                Some(file) => parse_file(&file, &config.converter)
                    .with_context(|| format!("failed to read {}", file.display()))?,
                None => parse_code_with(&read_stdin()?, &config.converter),
            };
            info!(
                "parsed {} lines, success={}",
                result.lines, result.success
            );
            print_json(&result, pretty)?;
            if !result.success {
                std::process::exit(1);
            }
        }
        Commands::Request {
            method,
            path,
            body,
            body_file,
            pretty,
        } => {
            let mut request = ApiRequest::new(method, path);
            if let Some(raw) = body {
                request = request.with_raw_body(&raw);
            } else if let Some(file) = body_file {
                let raw = std::fs::read_to_string(&file)
                    .with_context(|| format!("failed to read body from {}", file.display()))?;
                request = request.with_raw_body(&raw);
            }

            let response = Router::new(config).handle(&request);
            info!("{} {} -> {}", request.method, request.path, response.status);
            println!("{}", response.status);
            print_json(&response.body, pretty)?;
        }
        Commands::Examples { pretty } => {
            let examples = astviz_api::handlers::examples::examples_map();
            print_json(&examples, pretty)?;
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;
    Ok(source)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}
