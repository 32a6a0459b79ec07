use crate::data::record::{DataType, DataValue, Record};
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Rows sampled per column when inferring CSV field types
const TYPE_SAMPLE_ROWS: usize = 100;

/// Load records from a file, picking the format from its extension
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json_records(path),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => load_csv_records(path),
        _ => Err(anyhow!(
            "Unsupported file type: {:?} (expected .json or .csv)",
            path
        )),
    }
}

/// Load a CSV file into records
pub fn load_csv_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;
    let records = read_csv_records(file)?;

    info!(
        "Loaded {} records from CSV {:?}",
        records.len(),
        path.as_ref()
    );
    Ok(records)
}

/// Read CSV data with a header row, inferring one type per column
pub fn read_csv_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    // Read all rows first so types can be inferred before conversion
    let mut string_rows = Vec::new();
    for result in reader.records() {
        let row = result?;
        string_rows.push(row.iter().map(|s| s.to_string()).collect::<Vec<String>>());
    }

    let mut column_types = vec![DataType::Null; headers.len()];
    for row in string_rows.iter().take(TYPE_SAMPLE_ROWS) {
        for (col_idx, value) in row.iter().enumerate().take(headers.len()) {
            if !value.is_empty() {
                let inferred = DataType::infer_from_string(value);
                column_types[col_idx] = column_types[col_idx].merge(&inferred);
            }
        }
    }

    let records = string_rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .zip(column_types.iter())
                .zip(row.iter())
                .map(|((header, data_type), value)| {
                    (header.clone(), DataValue::from_string(value, data_type))
                })
                .collect::<Record>()
        })
        .collect();

    Ok(records)
}

/// Load a JSON file into records
pub fn load_json_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open JSON file: {:?}", path.as_ref()))?;
    let json: JsonValue = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON file: {:?}", path.as_ref()))?;
    let records = records_from_json(json)?;

    info!(
        "Loaded {} records from JSON {:?}",
        records.len(),
        path.as_ref()
    );
    Ok(records)
}

/// Accepts a top-level array of objects, or an object wrapping one in `data`
pub fn records_from_json(json: JsonValue) -> Result<Vec<Record>> {
    let items = match json {
        JsonValue::Array(items) => items,
        JsonValue::Object(mut obj) => match obj.remove("data") {
            Some(JsonValue::Array(items)) => items,
            _ => return Err(anyhow!("JSON object has no `data` array")),
        },
        _ => return Err(anyhow!("JSON data must be an array of objects")),
    };

    let mut records = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match item.as_object() {
            Some(obj) => records.push(Record::from_json_object(obj)),
            None => warn!("Skipping non-object JSON entry at index {}", idx),
        }
    }

    Ok(records)
}
