// Messager - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies. Shared vocabulary across all layers.

use crate::util::constants;
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Severity
// =============================================================================

/// Level at which a resolved message is forwarded to the logging sink,
/// ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Severity {
    Severe,
    Warning,
    #[default]
    Info,
    Debug,
}

impl Severity {
    /// Returns all variants in display order (most severe first).
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Severe,
            Severity::Warning,
            Severity::Info,
            Severity::Debug,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Severe => "Severe",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
            Severity::Debug => "Debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Format options
// =============================================================================

/// Escape marker rewriting applied by `resolve` before user replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Literal sequence in templates that stands for the escape character.
    pub escape_marker: String,

    /// Character every escape marker is rewritten to.
    pub escape_char: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            escape_marker: constants::DEFAULT_ESCAPE_MARKER.to_string(),
            escape_char: constants::DEFAULT_ESCAPE_CHAR,
        }
    }
}

// =============================================================================
// Load diagnostics
// =============================================================================

/// Non-fatal problem encountered while loading a catalog file.
///
/// Warnings never abort a load; they are logged, forwarded to the sink,
/// and returned in the `LoadReport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A colon-bearing line could not be split into key and template.
    MalformedLine {
        /// 1-based line number in the source file.
        line_number: u64,
        reason: String,
    },

    /// The file passed the existence check but could not be read.
    /// The catalog is left empty.
    ReadFailure { path: PathBuf, reason: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine {
                line_number,
                reason,
            } => write!(f, "Skipping message line {line_number}: {reason}"),
            Self::ReadFailure { path, reason } => write!(
                f,
                "Failed to read messages file '{}': {reason}",
                path.display()
            ),
        }
    }
}

/// Outcome of a successful catalog initialisation.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// File the catalog was loaded from.
    pub source_path: PathBuf,

    /// Number of distinct keys held after the load.
    pub entries_loaded: usize,

    /// Non-fatal problems, in the order they were encountered.
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    /// True when the load produced no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
