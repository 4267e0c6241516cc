// Messager - lib.rs
//
// Library entry point. Hosts construct a `MessageCatalog` with their own
// `LogSink`, initialise it from a `key: template` file, and use it for
// lookups and emission.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use app::catalog::MessageCatalog;
pub use app::sink::{LogSink, MemorySink, TracingSink};
pub use core::model::{FormatOptions, LoadReport, LoadWarning, Severity};
pub use util::error::{CatalogError, MessagerError};
