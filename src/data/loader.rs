use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table from a file and drop its unnamed index columns.
/// Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, comma separated (what `df.to_csv()` writes)
/// * `.json`    – `[{ "col": value, ... }, ...]` (`df.to_json(orient="records")`)
/// * `.parquet` – flat scalar columns
pub fn load_table(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    Ok(table.without_unnamed_columns())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        bail!("CSV has no header row");
    }

    // Short rows are padded with nulls by `Table::new`; long rows are malformed.
    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        if record.len() > headers.len() {
            bail!(
                "CSV row {}: expected {} fields, saw {}",
                row_no + 1,
                headers.len(),
                record.len()
            );
        }
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Strings read as missing values, the same set pandas uses by default.
const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() || NA_VALUES.contains(&s) {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    match s {
        "True" | "true" => CellValue::Bool(true),
        "False" | "false" => CellValue::Bool(false),
        _ => CellValue::String(s.to_string()),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON. Columns appear in first-seen key order; a key
/// missing from a record is a null cell.
fn load_json(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(JsonValue::as_object)
        .map(|obj| {
            columns
                .iter()
                .map(|col| obj.get(col).map_or(CellValue::Null, json_to_cell))
                .collect()
        })
        .collect();

    Ok(Table::new(columns, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat scalar columns, as written by
/// `df.to_parquet()` (Pandas) or `df.write_parquet()` (Polars).
fn load_parquet(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for row in 0..batch.num_rows() {
            rows.push(
                batch
                    .columns()
                    .iter()
                    .map(|col| extract_cell(col, row))
                    .collect(),
            );
        }
    }

    Ok(Table::new(columns, rows))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &ArrayRef, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    let cell = match col.data_type() {
        DataType::Utf8 => col
            .as_string_opt::<i32>()
            .map(|a| CellValue::String(a.value(row).to_string())),
        DataType::LargeUtf8 => col
            .as_string_opt::<i64>()
            .map(|a| CellValue::String(a.value(row).to_string())),
        DataType::Int32 => col
            .as_primitive_opt::<Int32Type>()
            .map(|a| CellValue::Integer(a.value(row) as i64)),
        DataType::Int64 => col
            .as_primitive_opt::<Int64Type>()
            .map(|a| CellValue::Integer(a.value(row))),
        DataType::Float32 => col
            .as_primitive_opt::<Float32Type>()
            .map(|a| CellValue::Float(a.value(row) as f64)),
        DataType::Float64 => col
            .as_primitive_opt::<Float64Type>()
            .map(|a| CellValue::Float(a.value(row))),
        DataType::Boolean => col
            .as_boolean_opt()
            .map(|a| CellValue::Bool(a.value(row))),
        _ => None,
    };
    cell.unwrap_or_else(|| CellValue::String(format!("{:?}", col.data_type())))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn csv_drops_pandas_index_column() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "crows.csv",
            ",sent_more,sent_less,stereo_antistereo,bias_type\n\
             0,He couldn't figure out,She couldn't figure out,stereo,race-color\n\
             1,The poor are really ignorant,The rich are really ignorant,stereo,socioeconomic\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(
            table.columns,
            vec!["sent_more", "sent_less", "stereo_antistereo", "bias_type"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows[1][3],
            CellValue::String("socioeconomic".to_string())
        );
    }

    #[test]
    fn csv_drops_explicit_unnamed_headers() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "t.csv", "Unnamed: 0,Model,Layer\n0,gpt2,11\n");

        let table = load_table(&path).unwrap();
        assert_eq!(table.columns, vec!["Model", "Layer"]);
        assert_eq!(table.rows[0][1], CellValue::Integer(11));
    }

    #[test]
    fn csv_guesses_cell_types() {
        assert_eq!(guess_cell_type(""), CellValue::Null);
        assert_eq!(guess_cell_type("7"), CellValue::Integer(7));
        assert_eq!(guess_cell_type("0.25"), CellValue::Float(0.25));
        assert_eq!(guess_cell_type("True"), CellValue::Bool(true));
        assert_eq!(
            guess_cell_type("bert-base-uncased"),
            CellValue::String("bert-base-uncased".to_string())
        );
    }

    #[test]
    fn csv_missing_value_markers_are_null() {
        for marker in ["NA", "N/A", "null", "NaN", "nan", "None", "<NA>"] {
            assert_eq!(guess_cell_type(marker), CellValue::Null, "{marker}");
        }
        assert_eq!(
            guess_cell_type("Nan-tucket"),
            CellValue::String("Nan-tucket".to_string())
        );
    }

    #[test]
    fn csv_row_longer_than_header_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "t.csv", "Model,Layer\ngpt2,11,EXTRA,MORE\n");

        let err = load_table(&path).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("CSV row 1"), "{msg}");
        assert!(msg.contains("expected 2 fields, saw 4"), "{msg}");
    }

    #[test]
    fn csv_short_rows_are_padded_with_nulls() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "t.csv", "Model,Layer,Score\ngpt2,11\n");

        let table = load_table(&path).unwrap();
        assert_eq!(table.rows[0][2], CellValue::Null);
    }

    #[test]
    fn quoted_csv_fields_keep_commas() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "q.csv", "a,b\n\"one, two\",3\n");

        let table = load_table(&path).unwrap();
        assert_eq!(table.rows[0][0], CellValue::String("one, two".to_string()));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_table(&dir.path().join("absent.csv")).is_err());
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "table.xlsx", "");
        let err = load_table(&path).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }

    #[test]
    fn json_records_keep_first_seen_column_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "t.json",
            r#"[{"model": "gpt2", "layer": 3}, {"model": "roberta-base", "score": 0.5}]"#,
        );

        let table = load_table(&path).unwrap();
        assert_eq!(table.columns, vec!["model", "layer", "score"]);
        assert_eq!(table.rows[0][2], CellValue::Null);
        assert_eq!(table.rows[1][2], CellValue::Float(0.5));
    }

    #[test]
    fn json_must_be_an_array() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "t.json", r#"{"model": "gpt2"}"#);
        assert!(load_table(&path).is_err());
    }

    #[test]
    fn parquet_scalar_columns_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new("Unnamed: 0", DataType::Int64, false),
            Field::new("model", DataType::Utf8, false),
            Field::new("sad", DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![0, 1])),
                Arc::new(StringArray::from(vec!["gpt2", "openai-gpt"])),
                Arc::new(Float64Array::from(vec![Some(0.25), None])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table.columns, vec!["model", "sad"]);
        assert_eq!(table.rows[0][0], CellValue::String("gpt2".to_string()));
        assert_eq!(table.rows[0][1], CellValue::Float(0.25));
        assert_eq!(table.rows[1][1], CellValue::Null);
    }
}
