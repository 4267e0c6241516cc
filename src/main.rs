// Messager - main.rs
//
// Diagnostic binary. Handles:
// 1. CLI argument parsing
// 2. config.toml loading (catalog path, escape options, log level)
// 3. Logging initialisation (debug mode support)
// 4. Loading a catalog and running one inspection command against it

use clap::{Parser, Subcommand, ValueEnum};
use messager::app::catalog::MessageCatalog;
use messager::app::sink::TracingSink;
use messager::core::export;
use messager::core::model::Severity;
use messager::platform::config::{self, PlatformPaths};
use messager::util::constants;
use messager::util::error::{MessagerError, Result};
use messager::util::logging;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Messager - inspect and exercise `key: template` message catalogs.
#[derive(Parser, Debug)]
#[command(name = "messager", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog file (defaults to [catalog] path in config.toml, then messages.txt).
    #[arg(short = 'f', long = "file", global = true)]
    file: Option<PathBuf>,

    /// Config file (defaults to config.toml in the platform config directory).
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the catalog and report entry count and warnings.
    Check,

    /// List all keys, sorted.
    Keys,

    /// Print the resolved text of a key.
    Resolve {
        key: String,

        /// Literal replacement, repeatable.
        #[arg(short = 's', long = "set", value_name = "FROM=TO", value_parser = parse_replacement)]
        set: Vec<(String, String)>,
    },

    /// Emit a key through the logging sink.
    Emit {
        key: String,

        /// Literal replacement, repeatable.
        #[arg(short = 's', long = "set", value_name = "FROM=TO", value_parser = parse_replacement)]
        set: Vec<(String, String)>,

        /// Severity forwarded to the sink.
        #[arg(long, value_enum, default_value_t = SeverityArg::Info)]
        severity: SeverityArg,
    },

    /// Write all entries to stdout.
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SeverityArg {
    Severe,
    Warning,
    Info,
    Debug,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Severe => Severity::Severe,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Info => Severity::Info,
            SeverityArg::Debug => Severity::Debug,
        }
    }
}

/// Exit code for a catalog that loaded with warnings.
const EXIT_WARNINGS: i32 = 2;

fn parse_replacement(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((from, _)) if from.is_empty() => Err("FROM must not be empty".to_string()),
        Some((from, to)) => Ok((from.to_string(), to.to_string())),
        None => Err(format!("expected FROM=TO, got '{raw}'")),
    }
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can take effect; its
    // warnings are replayed once the subscriber exists.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (app_config, config_warnings) = config::load_config_file(&config_path);

    logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "Messager starting"
    );
    for warning in &config_warnings {
        tracing::warn!(config = %config_path.display(), "{}", warning);
    }

    let catalog_path = cli
        .file
        .clone()
        .or_else(|| app_config.catalog_path.clone())
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CATALOG_FILE_NAME));

    let catalog = MessageCatalog::new(TracingSink).with_options(app_config.format);

    match run(cli.command, catalog, &catalog_path) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(command: Command, mut catalog: MessageCatalog, catalog_path: &Path) -> Result<i32> {
    let report = catalog.init(catalog_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Check => {
            write_line(
                &mut out,
                &format!(
                    "{}: {} entries",
                    report.source_path.display(),
                    report.entries_loaded
                ),
            )?;
            for warning in &report.warnings {
                write_line(&mut out, &format!("warning: {warning}"))?;
            }
            if !report.is_clean() {
                return Ok(EXIT_WARNINGS);
            }
        }
        Command::Keys => {
            for key in catalog.keys() {
                write_line(&mut out, key)?;
            }
        }
        Command::Resolve { key, set } => {
            if !catalog.contains_key(&key) {
                tracing::warn!(key = %key, "Key not present in catalog");
            }
            let pairs = set.iter().map(|(from, to)| (from.as_str(), to.as_str()));
            write_line(&mut out, &catalog.resolve(&key, pairs))?;
        }
        Command::Emit { key, set, severity } => {
            let pairs = set.iter().map(|(from, to)| (from.as_str(), to.as_str()));
            catalog.emit(&key, pairs, severity.into());
        }
        Command::Export { format } => {
            let count = match format {
                ExportFormat::Text => export::export_text(catalog.entries(), &mut out, "stdout")?,
                ExportFormat::Json => export::export_json(catalog.entries(), &mut out, "stdout")?,
            };
            tracing::debug!(entries = count, "Export complete");
        }
    }

    Ok(0)
}

fn write_line(out: &mut impl Write, text: &str) -> Result<()> {
    writeln!(out, "{text}").map_err(|e| MessagerError::Io {
        path: PathBuf::from("<stdout>"),
        operation: "write",
        source: e,
    })
}
