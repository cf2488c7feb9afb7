//! `confval` CLI: load a configuration file through a backend and inspect it.
//!
//! ## Usage
//!
//! ```sh
//! # Print the canonical (pretty) form of an alt-config file
//! confval show -i server.cfg
//!
//! # Compact output, reading JSON from stdin
//! echo '{"port":7788}' | confval show --compact
//!
//! # Query a nested value and coerce it
//! confval get nested.inner.port -i server.cfg --as integer
//!
//! # Print a subtree in canonical form
//! confval get modules -i server.json
//!
//! # TOML is detected from the extension
//! confval show --compact -i server.toml
//! ```
//!
//! Set `RUST_LOG=debug` to see backend diagnostics on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use confval_core::{AltBackend, Backend, JsonBackend, TomlBackend, Value};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "confval",
    version,
    about = "Inspect configuration files through a uniform value tree"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical serialization of a document
    Show {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Input format (defaults from the file extension, else json)
        #[arg(short, long, value_enum)]
        format: Option<Format>,
        /// Single-line output instead of the indented layout
        #[arg(long)]
        compact: bool,
    },
    /// Look up a dot-separated path such as `nested.inner.port`
    Get {
        /// Path to resolve; list elements are addressed by index
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Input format (defaults from the file extension, else json)
        #[arg(short, long, value_enum)]
        format: Option<Format>,
        /// Coerce the value to a scalar type before printing
        #[arg(long = "as", value_enum)]
        as_type: Option<ScalarType>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Toml,
    Alt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScalarType {
    String,
    Integer,
    Float,
    Bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            input,
            format,
            compact,
        } => {
            let value = load(input.as_deref(), format)?;
            println!("{}", value.to_text(!compact));
        }
        Commands::Get {
            path,
            input,
            format,
            as_type,
        } => {
            let value = load(input.as_deref(), format)?;
            let node = value.get_path(&path);
            let rendered = match as_type {
                Some(ty) => coerce_to_text(node, ty)
                    .with_context(|| format!("Failed to read '{}' as {:?}", path, ty))?,
                None => node.to_text(true),
            };
            println!("{}", rendered);
        }
    }

    Ok(())
}

/// Read the input and parse it with the selected, or detected, backend.
fn load(path: Option<&str>, format: Option<Format>) -> Result<Value> {
    let text = read_input(path)?;
    let format = format.unwrap_or_else(|| detect_format(path));
    tracing::debug!(?format, input = path.unwrap_or("<stdin>"), "loading document");
    let parsed = match format {
        Format::Json => JsonBackend.parse(&text),
        Format::Toml => TomlBackend.parse(&text),
        Format::Alt => AltBackend.parse(&text),
    };
    parsed.with_context(|| format!("Failed to parse {}", path.unwrap_or("stdin")))
}

/// Pick a format from the file extension: `.toml` is TOML, `.cfg`/`.alt` are
/// alt-config, everything else (including stdin) is JSON.
fn detect_format(path: Option<&str>) -> Format {
    let ext = path
        .and_then(|p| Path::new(p).extension())
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("toml") => Format::Toml,
        Some("cfg" | "alt") => Format::Alt,
        _ => Format::Json,
    }
}

fn coerce_to_text(node: &Value, ty: ScalarType) -> Result<String> {
    Ok(match ty {
        ScalarType::String => node.coerce::<String>()?,
        ScalarType::Integer => node.coerce::<i64>()?.to_string(),
        ScalarType::Float => Value::from(node.coerce::<f64>()?).to_text(false),
        ScalarType::Bool => node.coerce::<bool>()?.to_string(),
    })
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
