// Messager - core/export.rs
//
// Text and JSON export of loaded catalog entries.
// Core layer: writes to any Write trait object.

use crate::util::error::ExportError;
use std::collections::BTreeMap;
use std::io::Write;

/// Export entries as `key: template` lines, sorted by key.
///
/// The output is accepted by the catalog parser. Templates are written raw,
/// escape markers included.
pub fn export_text<'a, I, W>(entries: I, mut writer: W, target: &str) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
    W: Write,
{
    let sorted: BTreeMap<&str, &str> = entries.into_iter().collect();

    for (key, template) in &sorted {
        writeln!(writer, "{key}: {template}").map_err(|e| ExportError::Io {
            target: target.to_string(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| ExportError::Io {
        target: target.to_string(),
        source: e,
    })?;

    Ok(sorted.len())
}

/// Export entries as a pretty-printed JSON object keyed by message key.
pub fn export_json<'a, I, W>(entries: I, mut writer: W, target: &str) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
    W: Write,
{
    let sorted: BTreeMap<&str, &str> = entries.into_iter().collect();

    serde_json::to_writer_pretty(&mut writer, &sorted).map_err(|e| ExportError::Json {
        target: target.to_string(),
        source: e,
    })?;
    writeln!(writer).map_err(|e| ExportError::Io {
        target: target.to_string(),
        source: e,
    })?;

    Ok(sorted.len())
}
