use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use maintnote_parser::{parse, render_with, NoteConfig, ParsedFields};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "MAINTNOTE_CONFIG";

#[derive(Parser, Debug)]
#[command(author, version, about = "Maintenance emails to customer notes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the extracted fields as JSON
    Parse(InputArgs),
    /// Print the customer-facing maintenance note
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Notice to read; stdin when omitted or `-`
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Note config TOML (defaults to $MAINTNOTE_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParseOutput<'a> {
    #[serde(flatten)]
    fields: &'a ParsedFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_utc: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_utc: Option<DateTime<Utc>>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse(args) => {
            let fields = parse(&read_input(args.file.as_deref())?);
            report_confidence(&fields);

            let utc = fields.window.as_ref().and_then(|window| window.to_utc());
            let output = ParseOutput {
                fields: &fields,
                start_utc: utc.map(|(start, _)| start),
                end_utc: utc.map(|(_, end)| end),
            };
            let json = serde_json::to_string_pretty(&output)
                .context("failed to serialize parsed fields")?;
            println!("{json}");
            Ok(())
        }
        Command::Render(args) => {
            let config = load_config(args.config)?;
            let fields = parse(&read_input(args.input.file.as_deref())?);
            report_confidence(&fields);
            println!("{}", render_with(&fields, &config));
            Ok(())
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read notice from {}", path.display())),
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read notice from stdin")?;
            Ok(raw)
        }
    }
}

fn load_config(flag: Option<PathBuf>) -> Result<NoteConfig> {
    let path = flag.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => {
            let config = NoteConfig::load(&path)
                .with_context(|| format!("failed to load note config {}", path.display()))?;
            info!(path = %path.display(), "loaded note config");
            Ok(config)
        }
        None => {
            debug!("no note config given, using defaults");
            Ok(NoteConfig::default())
        }
    }
}

fn report_confidence(fields: &ParsedFields) {
    let low = fields.confidence.low_confidence_fields();
    if !low.is_empty() {
        warn!(fields = ?low, "low confidence fields, review before sending");
    }
}
