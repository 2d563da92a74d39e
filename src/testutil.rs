//! Fixture artifacts shared by the unit tests.

use std::fmt::Write as _;
use std::path::Path;

use tempfile::TempDir;

use crate::config::ViewerConfig;

/// A pandas-style CSV: empty index header, then `n` data rows.
pub fn write_csv(dir: &Path, name: &str, columns: &[&str], n: usize) {
    let mut text = String::new();
    writeln!(text, ",{}", columns.join(",")).unwrap();
    for i in 0..n {
        let cells: Vec<String> = columns.iter().map(|c| format!("{c}_{i}")).collect();
        writeln!(text, "{i},{}", cells.join(",")).unwrap();
    }
    std::fs::write(dir.join(name), text).unwrap();
}

pub fn write_png(dir: &Path, name: &str) {
    image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]))
        .save(dir.join(name))
        .unwrap();
}

/// A complete artifact directory under the default file names, with more
/// rows than any preview shows.
pub fn artifact_dir() -> (TempDir, ViewerConfig) {
    let dir = TempDir::new().unwrap();
    let p = dir.path();
    write_csv(
        p,
        "crows_pairs_anonymized.csv",
        &["sent_more", "sent_less", "bias_type"],
        20,
    );
    write_csv(p, "stereo.csv", &["context", "target", "bias_type"], 20);
    write_csv(p, "table1.csv", &["Model", "Layer"], 9);
    write_csv(p, "table2.csv", &["Model", "Max SAD", "Mean SAD"], 9);
    write_csv(p, "table3.csv", &["Model", "Layer", "Word"], 9);
    write_png(p, "image1.png");
    write_png(p, "image2.png");
    let cfg = ViewerConfig {
        artifact_dir: p.to_path_buf(),
        ..Default::default()
    };
    (dir, cfg)
}
