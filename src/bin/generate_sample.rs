//! Writes a deterministic set of demo artifacts for the viewer.
//!
//! ```text
//! cargo run --bin generate_sample [-- <dir>]
//! ```
//!
//! Every file the viewer reads is produced under `<dir>` (default
//! `sample_artifacts/`), with the default file names. Point the viewer at it
//! with `{"artifact_dir": "sample_artifacts"}` in `bias-viewer.json`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use palette::{Hsl, IntoColor, Srgb};
use parquet::arrow::ArrowWriter;

// Same roster the viewer walks, compiled from the one source file.
#[path = "../sim/roster.rs"]
#[allow(dead_code)]
mod roster;

use roster::MODELS;

const BIAS_TYPES: [&str; 5] = [
    "race-color",
    "gender",
    "socioeconomic",
    "religion",
    "age",
];

/// Hidden layers per model, in roster order.
const LAYERS: [usize; MODELS.len()] = [12, 6, 12, 24, 12, 24, 6, 12, 12];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// Write rows with a leading, header-less index column, the way
/// `df.to_csv()` does.
fn write_indexed_csv(path: &Path, header: &[&str], rows: &[Vec<String>]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV");
    let mut head = vec![""];
    head.extend_from_slice(header);
    writer.write_record(&head).expect("Failed to write header");
    for (i, row) in rows.iter().enumerate() {
        let mut record = vec![i.to_string()];
        record.extend(row.iter().cloned());
        writer.write_record(&record).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {} rows to {}", rows.len(), path.display());
}

fn crows_pairs(rng: &mut SimpleRng) -> Vec<Vec<String>> {
    (0..40)
        .map(|i| {
            let bias = BIAS_TYPES[rng.below(BIAS_TYPES.len())];
            let direction = if rng.next_f64() < 0.85 { "stereo" } else { "antistereo" };
            vec![
                format!("Sample sentence {i} mentioning the more-stereotyped group ({bias})."),
                format!("Sample sentence {i} mentioning the less-stereotyped group ({bias})."),
                direction.to_string(),
                bias.to_string(),
                format!("[['{bias}'], ['{bias}'], ['{bias}'], [], ['{bias}']]"),
                format!("a{}", rng.below(100)),
                format!("['a{}', 'a{}', 'a{}']", rng.below(100), rng.below(100), rng.below(100)),
            ]
        })
        .collect()
}

fn stereoset(rng: &mut SimpleRng) -> Vec<Vec<String>> {
    let labels = ["stereotype", "anti-stereotype", "unrelated"];
    (0..40)
        .map(|i| {
            let bias = BIAS_TYPES[rng.below(BIAS_TYPES.len())];
            let label = labels[i % labels.len()];
            vec![
                format!("target_{}", rng.below(30)),
                bias.to_string(),
                format!("Context sentence {i} about BLANK."),
                format!("Candidate sentence {i} ({label})."),
                label.to_string(),
            ]
        })
        .collect()
}

fn result_table_1(rng: &mut SimpleRng) -> Vec<Vec<String>> {
    MODELS
        .iter()
        .zip(LAYERS)
        .map(|(model, layers)| {
            vec![
                model.to_string(),
                (rng.below(layers) + 1).to_string(),
                format!("{:.4}", 5.0 + rng.next_f64() * 20.0),
                (rng.below(layers) + 1).to_string(),
                format!("{:.4}", 5.0 + rng.next_f64() * 20.0),
            ]
        })
        .collect()
}

fn result_table_2(rng: &mut SimpleRng) -> Vec<Vec<String>> {
    MODELS
        .iter()
        .map(|model| {
            let mut row = vec![model.to_string()];
            for _ in 0..2 {
                row.push(format!("{:.4}", rng.next_f64() * 0.5));
                row.push(format!("{:.4}", rng.next_f64() * 0.05));
            }
            row
        })
        .collect()
}

fn result_table_3(rng: &mut SimpleRng) -> Vec<Vec<String>> {
    MODELS
        .iter()
        .zip(LAYERS)
        .map(|(model, layers)| {
            vec![
                model.to_string(),
                (rng.below(layers) + 1).to_string(),
                format!("{:.4}", rng.next_f64()),
                (rng.below(layers) + 1).to_string(),
                format!("{:.4}", rng.next_f64()),
            ]
        })
        .collect()
}

/// Also write result table 3 as Parquet, for trying the Parquet loader.
fn write_parquet_copy(path: &Path, rows: &[Vec<String>]) {
    let col = |i: usize| rows.iter().map(|r| r[i].clone()).collect::<Vec<_>>();
    let int = |i: usize| col(i).iter().map(|v| v.parse().unwrap_or(0)).collect::<Vec<i64>>();
    let float = |i: usize| col(i).iter().map(|v| v.parse().unwrap_or(0.0)).collect::<Vec<f64>>();

    let schema = Arc::new(Schema::new(vec![
        Field::new("Model", DataType::Utf8, false),
        Field::new("Biased Layer", DataType::Int64, false),
        Field::new("Biased Weight", DataType::Float64, false),
        Field::new("Unbiased Layer", DataType::Int64, false),
        Field::new("Unbiased Weight", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(col(0))),
            Arc::new(Int64Array::from(int(1))),
            Arc::new(Float64Array::from(float(2))),
            Arc::new(Int64Array::from(int(3))),
            Arc::new(Float64Array::from(float(4))),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
    println!("Wrote {} rows to {}", rows.len(), path.display());
}

/// Blue (low) to red (high).
fn heat_color(v: f64) -> image::Rgba<u8> {
    let hsl = Hsl::new(240.0 * (1.0 - v.clamp(0.0, 1.0)) as f32, 0.8, 0.5);
    let rgb: Srgb = hsl.into_color();
    image::Rgba([
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
        255,
    ])
}

/// A models × layers heatmap of CLS distances, one square cell per value.
fn write_heatmap(path: &Path, rng: &mut SimpleRng) {
    const CELL: u32 = 24;
    let max_layers = LAYERS.iter().copied().max().unwrap_or(1);
    let width = max_layers as u32 * CELL;
    let height = MODELS.len() as u32 * CELL;

    let values: Vec<Vec<f64>> = LAYERS
        .iter()
        .map(|&layers| {
            (0..max_layers)
                .map(|l| {
                    if l < layers {
                        let depth = l as f64 / layers as f64;
                        (0.6 * depth + 0.4 * rng.next_f64()).min(1.0)
                    } else {
                        f64::NAN
                    }
                })
                .collect()
        })
        .collect();

    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        let v = values[(y / CELL) as usize][(x / CELL) as usize];
        if v.is_nan() {
            image::Rgba([235, 235, 235, 255])
        } else {
            heat_color(v)
        }
    });
    img.save(path).expect("Failed to write PNG");
    println!("Wrote {width}x{height} heatmap to {}", path.display());
}

fn main() {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_artifacts"));
    std::fs::create_dir_all(&out_dir).expect("Failed to create output directory");

    let mut rng = SimpleRng::new(42);

    write_indexed_csv(
        &out_dir.join("crows_pairs_anonymized.csv"),
        &[
            "sent_more",
            "sent_less",
            "stereo_antistereo",
            "bias_type",
            "annotations",
            "anon_writer",
            "anon_annotators",
        ],
        &crows_pairs(&mut rng),
    );
    write_indexed_csv(
        &out_dir.join("stereo.csv"),
        &["target", "bias_type", "context", "sentence", "gold_label"],
        &stereoset(&mut rng),
    );
    write_indexed_csv(
        &out_dir.join("table1.csv"),
        &[
            "Model",
            "Crows-Pairs Layer",
            "Crows-Pairs CLS Distance",
            "StereoSet Layer",
            "StereoSet CLS Distance",
        ],
        &result_table_1(&mut rng),
    );
    write_indexed_csv(
        &out_dir.join("table2.csv"),
        &[
            "Model",
            "CP Max Weight Diff",
            "CP Mean SAD",
            "SS Max Weight Diff",
            "SS Mean SAD",
        ],
        &result_table_2(&mut rng),
    );
    let table3 = result_table_3(&mut rng);
    write_indexed_csv(
        &out_dir.join("table3.csv"),
        &[
            "Model",
            "Biased Layer",
            "Biased Weight",
            "Unbiased Layer",
            "Unbiased Weight",
        ],
        &table3,
    );
    write_parquet_copy(&out_dir.join("table3.parquet"), &table3);

    write_heatmap(&out_dir.join("image1.png"), &mut rng);
    write_heatmap(&out_dir.join("image2.png"), &mut rng);
}
