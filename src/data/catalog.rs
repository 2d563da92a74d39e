use std::path::Path;

use anyhow::{Context, Result};

use super::loader::load_table;
use super::model::Table;
use super::raster::{RasterImage, load_image};
use crate::config::ViewerConfig;

// ---------------------------------------------------------------------------
// Preview layout
// ---------------------------------------------------------------------------

/// Height of every table viewport, in points.
pub const VIEWPORT_HEIGHT: f32 = 260.0;

/// Per-column width hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    Small,
    Medium,
    Large,
}

impl ColumnWidth {
    pub fn points(self) -> f32 {
        match self {
            ColumnWidth::Small => 75.0,
            ColumnWidth::Medium => 200.0,
            ColumnWidth::Large => 400.0,
        }
    }
}

/// How one table artifact is previewed.
#[derive(Debug, Clone, Copy)]
pub struct PreviewSpec {
    /// Short name used in log lines and load errors.
    pub artifact: &'static str,
    pub title: &'static str,
    pub caption: Option<&'static str>,
    pub max_rows: usize,
    /// Cosmetic label drawn once above all columns.
    pub group_label: Option<&'static str>,
    pub width_hints: &'static [(&'static str, ColumnWidth)],
}

pub const CROWS_PAIRS: PreviewSpec = PreviewSpec {
    artifact: "Crow-Pairs dataset",
    title: "📊 Dataset 1: Crow-Pairs",
    caption: Some("Preview of the first 5 rows from the dataset"),
    max_rows: 6,
    group_label: None,
    width_hints: &[
        ("sent_more", ColumnWidth::Large),
        ("sent_less", ColumnWidth::Large),
    ],
};

pub const STEREOSET: PreviewSpec = PreviewSpec {
    artifact: "StereoSet dataset",
    title: "📊 Dataset 2: StereoSet",
    caption: Some("Preview of the first 5 rows from the dataset"),
    max_rows: 6,
    group_label: None,
    width_hints: &[],
};

pub const TABLE_1: PreviewSpec = PreviewSpec {
    artifact: "result table 1",
    title: "📊 Table 1: Layers with Highest CLS Distance",
    caption: None,
    max_rows: 5,
    group_label: None,
    width_hints: &[],
};

pub const TABLE_2: PreviewSpec = PreviewSpec {
    artifact: "result table 2",
    title: "📊 Table 2: Maximum Self-Attention Weight Difference and Mean SAD Across Language Models.",
    caption: None,
    max_rows: 7,
    group_label: Some(
        "-----------------------------------------------------------Crows-Pairs-----------------------------------Streoset------------------------------------- ",
    ),
    width_hints: &[],
};

pub const TABLE_3: PreviewSpec = PreviewSpec {
    artifact: "result table 3",
    title: "📊 Table 3: Layer with the highest attention weights for distinct words in different sentences",
    caption: Some("Preview of the first 5 rows from model results"),
    max_rows: 7,
    group_label: Some(
        "---------------------------------------------------------Biased-----------------------------------Unbiased------------------------------------- ",
    ),
    width_hints: &[],
};

pub const HEATMAP_TITLE: &str = "🖼️ Heatmap of CLS Euclidean Distances";

// ---------------------------------------------------------------------------
// Loaded previews
// ---------------------------------------------------------------------------

/// A table truncated to its preview rows, plus how to draw it.
#[derive(Debug, Clone)]
pub struct TablePreview {
    pub spec: PreviewSpec,
    pub table: Table,
}

impl TablePreview {
    pub fn width_hint(&self, column: &str) -> Option<ColumnWidth> {
        self.spec
            .width_hints
            .iter()
            .find(|(name, _)| *name == column)
            .map(|&(_, w)| w)
    }

    /// Width for column `idx`: the explicit hint, else small for numeric
    /// columns and medium for the rest.
    pub fn column_width(&self, idx: usize) -> ColumnWidth {
        let hinted = self
            .table
            .columns
            .get(idx)
            .and_then(|name| self.width_hint(name));
        hinted.unwrap_or_else(|| {
            let numeric = self
                .table
                .rows
                .first()
                .and_then(|row| row.get(idx))
                .is_some_and(|cell| cell.is_numeric());
            if numeric {
                ColumnWidth::Small
            } else {
                ColumnWidth::Medium
            }
        })
    }
}

impl PreviewSpec {
    /// Read the table from disk and keep the first `max_rows` rows.
    pub fn load(&self, path: &Path) -> Result<TablePreview> {
        let table = load_table(path)
            .with_context(|| format!("loading {} from {}", self.artifact, path.display()))?;
        log::info!(
            "Loaded {} ({} rows, columns {:?})",
            self.artifact,
            table.len(),
            table.columns
        );
        Ok(TablePreview {
            spec: *self,
            table: table.head(self.max_rows),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Heatmap {
    pub caption: &'static str,
    pub image: RasterImage,
}

/// Everything shown once the simulated run has finished.
#[derive(Debug, Clone)]
pub struct RunResults {
    pub tables: Vec<TablePreview>,
    pub heatmaps: Vec<Heatmap>,
}

/// Load both input dataset previews, in display order.
pub fn load_datasets(cfg: &ViewerConfig) -> Result<Vec<TablePreview>> {
    Ok(vec![
        CROWS_PAIRS.load(&cfg.resolve(&cfg.crows_pairs))?,
        STEREOSET.load(&cfg.resolve(&cfg.stereoset))?,
    ])
}

/// Load every result artifact, in display order.
pub fn load_results(cfg: &ViewerConfig) -> Result<RunResults> {
    let tables = vec![
        TABLE_1.load(&cfg.resolve(&cfg.table1))?,
        TABLE_2.load(&cfg.resolve(&cfg.table2))?,
        TABLE_3.load(&cfg.resolve(&cfg.table3))?,
    ];

    let heatmaps = [
        ("Crows-Pairs", &cfg.crows_pairs_heatmap),
        ("StereoSet", &cfg.stereoset_heatmap),
    ]
    .into_iter()
    .map(|(caption, rel)| -> Result<Heatmap> {
        let path = cfg.resolve(rel);
        let image = load_image(&path)
            .with_context(|| format!("loading {caption} heatmap from {}", path.display()))?;
        log::info!("Loaded {caption} heatmap ({}x{})", image.size[0], image.size[1]);
        Ok(Heatmap { caption, image })
    })
    .collect::<Result<Vec<_>>>()?;

    Ok(RunResults { tables, heatmaps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{artifact_dir, write_csv};

    #[test]
    fn dataset_previews_are_capped_and_unindexed() {
        let (_dir, cfg) = artifact_dir();
        let datasets = load_datasets(&cfg).unwrap();

        assert_eq!(datasets.len(), 2);
        for preview in &datasets {
            assert_eq!(preview.table.len(), 6);
            assert!(preview.table.columns.iter().all(|c| !c.is_empty()));
        }
        assert_eq!(datasets[0].table.columns, vec!["sent_more", "sent_less", "bias_type"]);
        assert_eq!(datasets[0].width_hint("sent_more"), Some(ColumnWidth::Large));
        assert_eq!(datasets[0].width_hint("bias_type"), None);
        assert_eq!(datasets[0].column_width(0), ColumnWidth::Large);
        assert_eq!(datasets[0].column_width(2), ColumnWidth::Medium);
        assert_eq!(datasets[1].spec.title, STEREOSET.title);
    }

    #[test]
    fn result_tables_are_capped_per_table() {
        let (_dir, cfg) = artifact_dir();
        let results = load_results(&cfg).unwrap();

        let rows: Vec<usize> = results.tables.iter().map(|t| t.table.len()).collect();
        assert_eq!(rows, vec![5, 7, 7]);
        assert!(results.tables[0].spec.group_label.is_none());
        assert!(results.tables[1].spec.group_label.unwrap().contains("Crows-Pairs"));
        assert!(results.tables[2].spec.group_label.unwrap().contains("Unbiased"));

        let captions: Vec<&str> = results.heatmaps.iter().map(|h| h.caption).collect();
        assert_eq!(captions, vec!["Crows-Pairs", "StereoSet"]);
        assert_eq!(results.heatmaps[0].image.size, [2, 2]);
    }

    #[test]
    fn numeric_columns_default_to_small() {
        let (dir, cfg) = artifact_dir();
        std::fs::write(dir.path().join("table1.csv"), ",Model,Layer\n0,gpt2,11\n").unwrap();
        let results = load_results(&cfg).unwrap();

        assert_eq!(results.tables[0].column_width(0), ColumnWidth::Medium);
        assert_eq!(results.tables[0].column_width(1), ColumnWidth::Small);
    }

    #[test]
    fn short_tables_are_shown_whole() {
        let (dir, cfg) = artifact_dir();
        write_csv(dir.path(), "table2.csv", &["Model"], 3);
        let results = load_results(&cfg).unwrap();
        assert_eq!(results.tables[1].table.len(), 3);
    }

    #[test]
    fn missing_dataset_fails_with_artifact_context() {
        let (dir, cfg) = artifact_dir();
        std::fs::remove_file(dir.path().join("stereo.csv")).unwrap();

        let err = load_datasets(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("StereoSet dataset"));
    }

    #[test]
    fn missing_heatmap_fails_the_results() {
        let (dir, cfg) = artifact_dir();
        std::fs::remove_file(dir.path().join("image2.png")).unwrap();

        let err = load_results(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("StereoSet heatmap"));
    }
}
