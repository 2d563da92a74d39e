use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "None"),
        }
    }
}

impl CellValue {
    /// Numeric cells are right-aligned when rendered.
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Float(_))
    }
}

// ---------------------------------------------------------------------------
// Unnamed index columns
// ---------------------------------------------------------------------------

/// Whether a header names an auto-generated index column.
///
/// Pandas labels headerless columns `Unnamed: <n>` when reading, and writes
/// its index with an empty header; both count.
pub fn is_unnamed_column(name: &str) -> bool {
    let name = name.trim();
    name.is_empty() || name.starts_with("Unnamed")
}

// ---------------------------------------------------------------------------
// Table – a loaded rectangular dataset
// ---------------------------------------------------------------------------

/// A labeled rectangular table, loaded verbatim from disk.
///
/// Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table, padding short rows with nulls and truncating long ones.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Null);
                row
            })
            .collect();
        Table { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every column whose header matches [`is_unnamed_column`].
    pub fn without_unnamed_columns(self) -> Self {
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|c| !is_unnamed_column(c))
            .collect();
        if keep.iter().all(|&k| k) {
            return self;
        }

        let columns = self
            .columns
            .into_iter()
            .zip(&keep)
            .filter_map(|(c, &k)| k.then_some(c))
            .collect();
        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&keep)
                    .filter_map(|(cell, &k)| k.then_some(cell))
                    .collect()
            })
            .collect();
        Table { columns, rows }
    }

    /// The first `n` rows (fewer when the table is shorter).
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> CellValue {
        CellValue::String(v.to_string())
    }

    #[test]
    fn unnamed_pattern_matches_pandas_index_headers() {
        assert!(is_unnamed_column("Unnamed: 0"));
        assert!(is_unnamed_column("Unnamed"));
        assert!(is_unnamed_column(""));
        assert!(is_unnamed_column("  "));
        assert!(!is_unnamed_column("sent_more"));
        assert!(!is_unnamed_column("named"));
    }

    #[test]
    fn drops_unnamed_columns_and_their_cells() {
        let table = Table::new(
            vec!["".into(), "a".into(), "Unnamed: 2".into(), "b".into()],
            vec![
                vec![CellValue::Integer(0), s("x"), s("junk"), s("y")],
                vec![CellValue::Integer(1), s("z"), s("junk"), s("w")],
            ],
        )
        .without_unnamed_columns();

        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.rows[0], vec![s("x"), s("y")]);
        assert_eq!(table.rows[1], vec![s("z"), s("w")]);
    }

    #[test]
    fn head_caps_rows() {
        let rows = (0..10).map(|i| vec![CellValue::Integer(i)]).collect();
        let table = Table::new(vec!["n".into()], rows);

        assert_eq!(table.head(6).len(), 6);
        assert_eq!(table.head(6).rows[5], vec![CellValue::Integer(5)]);
        assert_eq!(table.head(50).len(), 10);
        assert!(table.head(0).is_empty());
    }

    #[test]
    fn new_normalises_ragged_rows() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec![s("1")], vec![s("1"), s("2"), s("3")]],
        );
        assert_eq!(table.rows[0], vec![s("1"), CellValue::Null]);
        assert_eq!(table.rows[1], vec![s("1"), s("2")]);
    }

    #[test]
    fn display_formats_like_a_dataframe_cell() {
        assert_eq!(CellValue::Float(0.123456).to_string(), "0.1235");
        assert_eq!(CellValue::Integer(12).to_string(), "12");
        assert_eq!(CellValue::Null.to_string(), "None");
        assert!(CellValue::Float(1.0).is_numeric());
        assert!(!s("1").is_numeric());
    }
}
