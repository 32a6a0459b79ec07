use anyhow::{anyhow, Context, Result};
use chrono::Local;
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::data::record::Record;
use crate::view::column::ColumnDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(ExportFormat::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ExportFormat::Json),
            _ => Err(anyhow!(
                "Cannot export to {:?}: use a .csv or .json file name",
                path
            )),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Writes the filtered record set of a table to CSV or JSON
pub struct DataExporter;

impl DataExporter {
    /// Columns that map to a record field; synthetic columns are skipped
    pub fn exportable_columns(columns: &[ColumnDescriptor]) -> Vec<&ColumnDescriptor> {
        columns.iter().filter(|c| !c.synthetic).collect()
    }

    /// Write a header of column labels then one row per record
    pub fn write_csv<W: Write>(
        writer: W,
        columns: &[ColumnDescriptor],
        records: &[&Record],
    ) -> Result<usize> {
        let columns = Self::exportable_columns(columns);
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(columns.iter().map(|c| c.header.as_str()))?;
        for record in records {
            wtr.write_record(
                columns
                    .iter()
                    .map(|c| c.resolve_text(record).unwrap_or_default()),
            )?;
        }

        wtr.flush()?;
        Ok(records.len())
    }

    pub fn to_csv_string(columns: &[ColumnDescriptor], records: &[&Record]) -> Result<String> {
        let mut buffer = Vec::new();
        Self::write_csv(&mut buffer, columns, records)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Array of objects keyed by field, values keep their JSON types
    pub fn to_json_value(columns: &[ColumnDescriptor], records: &[&Record]) -> JsonValue {
        let columns = Self::exportable_columns(columns);
        let rows = records
            .iter()
            .map(|record| {
                let obj: serde_json::Map<String, JsonValue> = columns
                    .iter()
                    .map(|c| {
                        let value = record
                            .get(&c.field)
                            .map(|v| v.to_json())
                            .unwrap_or(JsonValue::Null);
                        (c.field.clone(), value)
                    })
                    .collect();
                JsonValue::Object(obj)
            })
            .collect();
        JsonValue::Array(rows)
    }

    /// `admin_table_export_YYYYmmdd_HHMMSS.<ext>` in `dir`
    pub fn default_export_path(dir: &Path, format: ExportFormat) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        dir.join(format!(
            "admin_table_export_{}.{}",
            timestamp,
            format.extension()
        ))
    }

    /// Export to a file, choosing the format from its extension.
    /// Returns a status message for the user.
    pub fn export_to_file(
        path: &Path,
        columns: &[ColumnDescriptor],
        records: &[&Record],
    ) -> Result<String> {
        if records.is_empty() {
            return Err(anyhow!("No data to export"));
        }

        let format = ExportFormat::from_path(path)?;
        let file =
            File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
        let mut writer = BufWriter::new(file);

        match format {
            ExportFormat::Csv => {
                Self::write_csv(&mut writer, columns, records)?;
            }
            ExportFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, &Self::to_json_value(columns, records))?;
                writer.flush()?;
            }
        }

        info!("Exported {} rows to {:?}", records.len(), path);
        Ok(format!(
            "Exported {} rows to {} file: {}",
            records.len(),
            format.extension().to_uppercase(),
            path.display()
        ))
    }
}
