//! CSV table boundary: ordered headers, passthrough rows, and the fixed
//! header-alias priority lists used to find the state and district columns.
//!
//! Header resolution happens once, here at the ingestion boundary — never
//! ad hoc inside the matching core.

use std::path::Path;

use crate::error::ReconError;

/// Accepted state-column headers, in priority order.
pub const STATE_COLUMNS: &[&str] = &["state", "State", "STATE"];

/// Accepted district-column headers, in priority order.
pub const DISTRICT_COLUMNS: &[&str] = &[
    "district",
    "District",
    "DISTRICT",
    "district_name",
    "District Name",
];

/// An in-memory CSV table. Cell text is kept verbatim; all canonicalized
/// views are added as new columns, never written back over the original.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_csv_str(data: &str) -> Result<Self, ReconError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let width = headers.len();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            // Ragged rows are padded so column indexes stay valid.
            row.resize(width.max(row.len()), String::new());
            row.truncate(width);
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, ReconError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ReconError::Io(format!("cannot read {}: {e}", path.display())))?;
        Self::from_csv_str(&data)
    }

    /// First header matching the alias priority list, if any.
    pub fn find_column(&self, aliases: &[&str]) -> Option<usize> {
        aliases
            .iter()
            .find_map(|alias| self.headers.iter().position(|h| h == alias))
    }

    /// Like `find_column`, but a miss is a schema error for this file.
    pub fn require_column(
        &self,
        file: &str,
        field: &str,
        aliases: &[&str],
    ) -> Result<usize, ReconError> {
        self.find_column(aliases).ok_or_else(|| ReconError::MissingColumn {
            file: file.to_string(),
            field: field.to_string(),
            tried: aliases.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn to_csv_string(&self) -> Result<String, ReconError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ReconError::Io(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ReconError::Io(e.to_string()))
    }

    pub fn write_csv_path(&self, path: &Path) -> Result<(), ReconError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ReconError::Io(format!("cannot create {}: {e}", parent.display())))?;
        }
        std::fs::write(path, self.to_csv_string()?)
            .map_err(|e| ReconError::Io(format!("cannot write {}: {e}", path.display())))
    }
}

/// Load the official registry file: `state`,`district` columns, one row
/// per district. Returns raw pairs; `RegistryIndex::build` normalizes.
pub fn load_registry_csv(path: &Path) -> Result<Vec<(String, String)>, ReconError> {
    let table = Table::from_csv_path(path)?;
    let file = path.display().to_string();
    let state_idx = table.require_column(&file, "state", STATE_COLUMNS)?;
    let district_idx = table.require_column(&file, "district", DISTRICT_COLUMNS)?;

    Ok(table
        .rows
        .into_iter()
        .map(|row| (row[state_idx].clone(), row[district_idx].clone()))
        .collect())
}
