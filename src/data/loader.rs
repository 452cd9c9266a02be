use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Schema};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Column names required in every supported format. `Payload Mass (kg)` is
/// renamed to the `payload_mass_kg` field once parsed.
pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const OUTCOME_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – delimited table with a header row (primary format)
/// * `.json`    – `[{ "Launch Site": ..., "class": ..., ...}, ...]`
/// * `.parquet` – flat scalar columns
///
/// Any error here is fatal to startup.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming at least the four required columns; any
/// extra columns are ignored.  `Payload Mass (kg)` must parse as a float and
/// `class` as a 0/1 integer.
fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let site_idx = csv_column(&headers, SITE_COLUMN)?;
    let payload_idx = csv_column(&headers, PAYLOAD_COLUMN)?;
    let outcome_idx = csv_column(&headers, OUTCOME_COLUMN)?;
    let booster_idx = csv_column(&headers, BOOSTER_COLUMN)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let site = row.get(site_idx).unwrap_or("").to_string();
        let payload_mass_kg = row
            .get(payload_idx)
            .unwrap_or("")
            .trim()
            .parse::<f64>()
            .with_context(|| format!("CSV row {row_no}: '{PAYLOAD_COLUMN}' is not a number"))?;
        let flag = row
            .get(outcome_idx)
            .unwrap_or("")
            .trim()
            .parse::<i64>()
            .with_context(|| format!("CSV row {row_no}: '{OUTCOME_COLUMN}' is not an integer"))?;
        let outcome = Outcome::from_flag(flag)
            .with_context(|| format!("CSV row {row_no}: bad '{OUTCOME_COLUMN}' value"))?;
        let booster_category = row.get(booster_idx).unwrap_or("").to_string();

        records.push(LaunchRecord {
            site,
            payload_mass_kg,
            outcome,
            booster_category,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

fn csv_column(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("CSV missing '{name}' column"))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "KSC LC-39A",
///     "Payload Mass (kg)": 3170.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let site = obj
            .get(SITE_COLUMN)
            .and_then(JsonValue::as_str)
            .with_context(|| format!("Row {i}: missing or invalid '{SITE_COLUMN}'"))?
            .to_string();
        let payload_mass_kg = obj
            .get(PAYLOAD_COLUMN)
            .and_then(JsonValue::as_f64)
            .with_context(|| format!("Row {i}: missing or invalid '{PAYLOAD_COLUMN}'"))?;
        let flag = obj
            .get(OUTCOME_COLUMN)
            .and_then(JsonValue::as_i64)
            .with_context(|| format!("Row {i}: missing or invalid '{OUTCOME_COLUMN}'"))?;
        let outcome = Outcome::from_flag(flag)
            .with_context(|| format!("Row {i}: bad '{OUTCOME_COLUMN}' value"))?;
        let booster_category = obj
            .get(BOOSTER_COLUMN)
            .and_then(JsonValue::as_str)
            .with_context(|| format!("Row {i}: missing or invalid '{BOOSTER_COLUMN}'"))?
            .to_string();

        records.push(LaunchRecord {
            site,
            payload_mass_kg,
            outcome,
            booster_category,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet launch table.
///
/// Expected schema: flat scalar columns.
/// - `Launch Site`: Utf8
/// - `Payload Mass (kg)`: Float64 (Float32 / Int64 / Int32 widened)
/// - `class`: Int64 or Int32 with values 0/1
/// - `Booster Version Category`: Utf8
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let site_col = batch.column(parquet_column(&schema, SITE_COLUMN)?);
        let payload_col = batch.column(parquet_column(&schema, PAYLOAD_COLUMN)?);
        let outcome_col = batch.column(parquet_column(&schema, OUTCOME_COLUMN)?);
        let booster_col = batch.column(parquet_column(&schema, BOOSTER_COLUMN)?);

        for row in 0..batch.num_rows() {
            let site = string_value(site_col, row)
                .with_context(|| format!("Row {row}: failed to read '{SITE_COLUMN}'"))?;
            let payload_mass_kg = numeric_value(payload_col, row)
                .with_context(|| format!("Row {row}: failed to read '{PAYLOAD_COLUMN}'"))?;
            let flag = integer_value(outcome_col, row)
                .with_context(|| format!("Row {row}: failed to read '{OUTCOME_COLUMN}'"))?;
            let outcome = Outcome::from_flag(flag)
                .with_context(|| format!("Row {row}: bad '{OUTCOME_COLUMN}' value"))?;
            let booster_category = string_value(booster_col, row)
                .with_context(|| format!("Row {row}: failed to read '{BOOSTER_COLUMN}'"))?;

            records.push(LaunchRecord {
                site,
                payload_mass_kg,
                outcome,
                booster_category,
            });
        }
    }

    Ok(LaunchDataset::from_records(records))
}

fn parquet_column(schema: &Schema, name: &str) -> Result<usize> {
    schema
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))
}

// -- Parquet / Arrow helpers --

/// Extract a string cell from a Utf8 or LargeUtf8 column.
fn string_value(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            // LargeStringArray
            let arr = col.as_string::<i64>();
            Ok(arr.value(row).to_string())
        }
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

/// Extract a float cell; integer columns are widened.
fn numeric_value(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(arr.value(row) as f64)
    } else if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(arr.value(row) as f64)
    } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
        Ok(arr.value(row) as f64)
    } else {
        bail!("Expected numeric column, got {:?}", col.data_type())
    }
}

/// Extract an integer cell (Int64 or Int32).
fn integer_value(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
        Ok(arr.value(row) as i64)
    } else {
        bail!("Expected integer column, got {:?}", col.data_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::Field;
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    // Header shape of the real launch table: extra columns are ignored.
    const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,KSC LC-39A,1,3170.0,F9 FT B1031.1,FT
";

    #[test]
    fn test_load_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.csv");
        std::fs::write(&path, SAMPLE_CSV).unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0].site, "CCAFS LC-40");
        assert_eq!(ds.records[0].outcome, Outcome::Failure);
        assert_eq!(ds.records[2].payload_mass_kg, 3170.0);
        assert_eq!(ds.records[2].outcome, Outcome::Success);
        assert_eq!(ds.records[2].booster_category, "FT");
        let sites: Vec<&str> = ds.sites.iter().map(String::as_str).collect();
        assert_eq!(sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.payload_min, 0.0);
        assert_eq!(ds.payload_max, 3170.0);
    }

    #[test]
    fn test_csv_missing_column_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.csv");
        std::fs::write(
            &path,
            "Launch Site,Payload Mass (kg),Booster Version Category\nCCAFS LC-40,100.0,v1.0\n",
        )
        .unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("CSV missing 'class' column"));
    }

    #[test]
    fn test_csv_bad_outcome_flag_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.csv");
        std::fs::write(
            &path,
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nCCAFS LC-40,2,100.0,v1.0\n",
        )
        .unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("outcome flag must be 0 or 1"));
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.json");
        std::fs::write(
            &path,
            r#"[
              {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": 500.0, "class": 1, "Booster Version Category": "v1.1"},
              {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 9600.0, "class": 0, "Booster Version Category": "B5"}
            ]"#,
        )
        .unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].site, "VAFB SLC-4E");
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.records[1].payload_mass_kg, 9600.0);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
    }

    #[test]
    fn test_load_parquet_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new(SITE_COLUMN, DataType::Utf8, false),
            Field::new(PAYLOAD_COLUMN, DataType::Float64, false),
            Field::new(OUTCOME_COLUMN, DataType::Int64, false),
            Field::new(BOOSTER_COLUMN, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["CCAFS SLC-40", "KSC LC-39A"])),
                Arc::new(Float64Array::from(vec![2500.0, 15600.0])),
                Arc::new(Int64Array::from(vec![1, 0])),
                Arc::new(StringArray::from(vec!["FT", "B5"])),
            ],
        )
        .unwrap();

        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].site, "CCAFS SLC-40");
        assert_eq!(ds.records[0].payload_mass_kg, 2500.0);
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.records[1].booster_category, "B5");
    }

    #[test]
    fn test_parquet_missing_column_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new(SITE_COLUMN, DataType::Utf8, false),
            Field::new(PAYLOAD_COLUMN, DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["CCAFS SLC-40"])),
                Arc::new(Float64Array::from(vec![2500.0])),
            ],
        )
        .unwrap();

        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing 'class' column"));
    }

    #[test]
    fn test_unsupported_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.txt");
        std::fs::write(&path, "not a table").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err}").contains("Unsupported file extension"));
    }
}
