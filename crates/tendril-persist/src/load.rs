use ron::Value;
use tendril_core::constants::MAX_CURSORS;
use tendril_sim::{ChargeCursor, Spreader};

use crate::error::PersistError;
use crate::format::CursorRecord;

/// Outcome of loading a cursor document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Cursors installed into the spreader.
    pub loaded: usize,
    /// Entries that failed to decode.
    pub skipped: usize,
    /// Valid entries beyond the cursor cap.
    pub truncated: usize,
    pub warnings: Vec<String>,
}

/// Decode a cursor document. Entries are decoded independently; a bad
/// entry is logged and skipped without affecting the rest.
pub fn parse_cursors(ron_str: &str) -> Result<(Vec<ChargeCursor>, LoadReport), PersistError> {
    let options = ron::Options::default();
    let document: Value = options
        .from_str(ron_str)
        .map_err(|e| PersistError::ParseError(e.to_string()))?;

    let entries = match document {
        Value::Seq(entries) => entries,
        other => return Err(PersistError::NotAList(value_kind(&other))),
    };

    let mut report = LoadReport::default();
    let mut cursors = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let decoded = entry
            .into_rust::<CursorRecord>()
            .map_err(|e| e.to_string())
            .and_then(|record| record.to_cursor());
        match decoded {
            Ok(cursor) if cursors.len() < MAX_CURSORS => cursors.push(cursor),
            Ok(_) => report.truncated += 1,
            Err(msg) => {
                log::error!("Skipping cursor entry {index}: {msg}");
                report.warnings.push(format!("entry {index}: {msg}"));
                report.skipped += 1;
            }
        }
    }

    if report.truncated > 0 {
        log::warn!(
            "Cursor document holds more than {MAX_CURSORS} cursors, dropped {}",
            report.truncated
        );
    }
    report.loaded = cursors.len();
    Ok((cursors, report))
}

/// Replace a spreader's cursors with those decoded from `ron_str`.
///
/// The spreader is left untouched when the document itself is invalid.
pub fn load_cursors(spreader: &mut Spreader, ron_str: &str) -> Result<LoadReport, PersistError> {
    let (cursors, report) = parse_cursors(ron_str)?;
    spreader.load(cursors);
    log::debug!(
        "Loaded {} cursors ({} skipped, {} over cap)",
        report.loaded,
        report.skipped,
        report.truncated
    );
    Ok(report)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "a bool",
        Value::Char(_) => "a char",
        Value::Map(_) => "a map or struct",
        Value::Number(_) => "a number",
        Value::Option(_) => "an option",
        Value::String(_) => "a string",
        Value::Seq(_) => "a list",
        Value::Unit => "unit",
    }
}
