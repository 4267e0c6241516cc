// Messager - app/catalog.rs
//
// The message catalog: loads `key: template` files and serves lookups,
// substitution, and severity-tagged emission to the host's logging sink.
//
// One instance per source, owned by the host and passed to whatever needs
// lookups. `init`/`reload` take `&mut self`, lookups take `&self`; hosts that
// share a catalog across threads wrap it in their own lock.

use crate::app::sink::LogSink;
use crate::core::format;
use crate::core::model::{FormatOptions, LoadReport, LoadWarning, Severity};
use crate::core::parser;
use crate::platform::fs;
use crate::util::error::CatalogError;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// In-memory mapping from message key to template string.
///
/// # Example
///
/// ```no_run
/// use messager::app::catalog::MessageCatalog;
/// use messager::app::sink::TracingSink;
///
/// let catalog = MessageCatalog::load(TracingSink, "messages.txt")?;
/// catalog.info_with("greeting", [("&User&", "Alice")]);
/// assert_eq!(catalog.resolve("missing", [("a", "b")]), "");
/// # Ok::<(), messager::util::error::CatalogError>(())
/// ```
pub struct MessageCatalog {
    entries: HashMap<String, String>,
    sink: Box<dyn LogSink>,
    options: FormatOptions,
    source_path: Option<PathBuf>,
}

impl fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageCatalog")
            .field("entries", &self.entries.len())
            .field("options", &self.options)
            .field("source_path", &self.source_path)
            .finish_non_exhaustive()
    }
}

impl MessageCatalog {
    /// Create an empty catalog that emits to `sink`.
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            entries: HashMap::new(),
            sink: Box::new(sink),
            options: FormatOptions::default(),
            source_path: None,
        }
    }

    /// Create a catalog and initialise it from `path` in one step.
    pub fn load(sink: impl LogSink + 'static, path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(sink);
        catalog.init(path)?;
        Ok(catalog)
    }

    /// Replace the escape marker options used by `resolve`.
    #[must_use]
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the catalog contents with the entries of `path`.
    ///
    /// Existing entries are cleared first, so a failed call always leaves
    /// the catalog empty. Returns `NotFound` if `path` does not exist. Once
    /// the path exists, problems reading or parsing it are not errors: they
    /// are logged, forwarded to the sink at `Severity::Warning`, and listed
    /// in the returned report.
    pub fn init(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, CatalogError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Initialising messages");

        self.entries.clear();

        if !fs::exists(path) {
            tracing::warn!(path = %path.display(), "Message file not found");
            return Err(CatalogError::NotFound {
                path: path.to_path_buf(),
            });
        }
        self.source_path = Some(path.to_path_buf());

        let mut report = LoadReport {
            source_path: path.to_path_buf(),
            ..LoadReport::default()
        };

        tracing::debug!(path = %path.display(), "Reading messages file");
        let content = match fs::read_catalog(path) {
            Ok(content) => content,
            Err(e) => {
                let warning = LoadWarning::ReadFailure {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                };
                self.forward_warning(&warning);
                report.warnings.push(warning);
                return Ok(report);
            }
        };

        let parsed = parser::parse_bytes(&content, path);
        for warning in &parsed.warnings {
            self.forward_warning(warning);
        }

        self.entries = parsed.entries;
        report.entries_loaded = self.entries.len();
        report.warnings = parsed.warnings;

        tracing::info!(
            path = %path.display(),
            entries = report.entries_loaded,
            warnings = report.warnings.len(),
            "Messages loaded"
        );

        Ok(report)
    }

    /// Re-read the file of the last `init` that found its path.
    pub fn reload(&mut self) -> Result<LoadReport, CatalogError> {
        let path = self
            .source_path
            .clone()
            .ok_or(CatalogError::NotInitialized)?;
        self.init(path)
    }

    /// Raw stored template for `key`, without substitution.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Template for `key` with escape markers rewritten and `replacements`
    /// applied as literal substring replacements. Unknown keys resolve to
    /// an empty string.
    pub fn resolve<I, K, V>(&self, key: &str, replacements: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match self.get(key) {
            Some(template) => format::apply(template, &self.options, replacements),
            None => {
                tracing::trace!(key, "Unknown message key");
                String::new()
            }
        }
    }

    /// `resolve` with no replacements.
    pub fn resolve_plain(&self, key: &str) -> String {
        self.resolve(key, no_replacements())
    }

    /// Resolve `key` and forward it to the sink at `severity`.
    ///
    /// Blank results (empty or whitespace only, including unknown keys) are
    /// dropped without reaching the sink.
    pub fn emit<I, K, V>(&self, key: &str, replacements: I, severity: Severity)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let value = self.resolve(key, replacements);
        if format::is_blank(&value) {
            tracing::trace!(key, severity = %severity, "Suppressing blank message");
            return;
        }
        self.sink.log(severity, &value);
    }

    pub fn info(&self, key: &str) {
        self.emit(key, no_replacements(), Severity::Info);
    }

    pub fn info_with<I, K, V>(&self, key: &str, replacements: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.emit(key, replacements, Severity::Info);
    }

    pub fn severe(&self, key: &str) {
        self.emit(key, no_replacements(), Severity::Severe);
    }

    pub fn severe_with<I, K, V>(&self, key: &str, replacements: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.emit(key, replacements, Severity::Severe);
    }

    /// Number of loaded keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted for deterministic output.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// All `(key, template)` pairs, sorted by key.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// File of the last `init` that found its path.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    fn forward_warning(&self, warning: &LoadWarning) {
        tracing::warn!(warning = %warning, "Message file problem");
        self.sink.log(Severity::Warning, &warning.to_string());
    }
}

fn no_replacements() -> std::iter::Empty<(&'static str, &'static str)> {
    std::iter::empty()
}
