// Messager - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Messager";

/// Application identifier used for config directories.
pub const APP_ID: &str = "Messager";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Catalog format
// =============================================================================

/// Separator between key and template. Only the first occurrence on a line
/// is significant.
pub const KEY_SEPARATOR: char = ':';

/// Lines starting with this prefix (after trimming) are comments.
pub const COMMENT_PREFIX: char = '#';

/// Two-character sequence rewritten to the formatting-escape character.
pub const DEFAULT_ESCAPE_MARKER: &str = "&&";

/// Formatting-escape character used by downstream renderers to introduce
/// colour and style codes.
pub const DEFAULT_ESCAPE_CHAR: char = '\u{00A7}';

/// Catalog files larger than this are refused at read time.
pub const MAX_CATALOG_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MiB

/// Maximum number of characters of an offending line quoted in a warning.
pub const MAX_LINE_PREVIEW: usize = 80;

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Catalog file used by the binary when neither the CLI nor the config
/// names one.
pub const DEFAULT_CATALOG_FILE_NAME: &str = "messages.txt";

/// Maximum accepted escape marker length in characters.
pub const MAX_ESCAPE_MARKER_LEN: usize = 8;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// `tracing` target used by `TracingSink` for emitted catalog messages.
pub const EMIT_TARGET: &str = "messager::emit";
