use ron::ser::PrettyConfig;
use tendril_sim::Spreader;

use crate::error::PersistError;
use crate::format::CursorRecord;

/// Serialize a spreader's cursors as a RON list of records.
pub fn save_cursors(spreader: &Spreader) -> Result<String, PersistError> {
    let records: Vec<CursorRecord> = spreader
        .cursors()
        .iter()
        .map(CursorRecord::from_cursor)
        .collect();

    let pretty = PrettyConfig::new().depth_limit(2);
    ron::ser::to_string_pretty(&records, pretty)
        .map_err(|e| PersistError::SerializeError(e.to_string()))
}
