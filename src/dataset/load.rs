use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

use super::Dataset;

/// Cell contents treated as "no value" and normalized to `""` on load.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn normalize_missing(raw: &str) -> String {
    if MISSING_MARKERS.contains(&raw) {
        String::new()
    } else {
        raw.to_string()
    }
}

/// Load `path` as an all-text [`Dataset`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let dataset = read_dataset(file).with_context(|| format!("reading {}", path.display()))?;
    debug!(path = %path.display(), rows = dataset.len(), "loaded csv");
    Ok(dataset)
}

/// Parse CSV with a header row. Short records are padded with `""`,
/// long records are rejected.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(str::to_string)
        .collect();
    let width = headers.len();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        if record.len() > width {
            bail!(
                "record {} has {} fields, header has {}",
                idx,
                record.len(),
                width
            );
        }
        let mut row: Vec<String> = record.iter().map(normalize_missing).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}
