use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::path::Path;
use tracing::info;

use super::Dataset;

/// What [`write_if_absent`] did with the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { rows: usize },
    AlreadyPresent,
}

/// Write `dataset` (header row, no index column) to `path` unless a file is
/// already there. An occupied path is reported and left untouched.
pub fn write_if_absent(dataset: &Dataset, path: &Path) -> Result<WriteOutcome> {
    if path.is_file() {
        info!("Already a file in location {}", path.display());
        return Ok(WriteOutcome::AlreadyPresent);
    }

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(&dataset.headers)
        .with_context(|| format!("writing header to {}", path.display()))?;
    for row in &dataset.rows {
        wtr.write_record(row)
            .with_context(|| format!("writing row to {}", path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    info!(path = %path.display(), rows = dataset.len(), "wrote defective data");
    Ok(WriteOutcome::Written {
        rows: dataset.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["challenger".into(), "webpage".into()],
            vec![
                vec!["A1".into(), "www.a.org".into()],
                vec!["B2".into(), "".into()],
                vec!["C,3".into(), "ftp://c.org".into()],
            ],
        )
    }

    #[test]
    fn test_writes_header_and_rows() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("challengers.csv");

        let outcome = write_if_absent(&sample(), &path)?;
        assert_eq!(outcome, WriteOutcome::Written { rows: 3 });

        let text = fs::read_to_string(&path)?;
        assert_eq!(
            text,
            "challenger,webpage\nA1,www.a.org\nB2,\n\"C,3\",ftp://c.org\n"
        );
        Ok(())
    }

    #[test]
    fn test_existing_file_is_left_alone() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("challengers.csv");
        fs::write(&path, "already here\n")?;

        let outcome = write_if_absent(&sample(), &path)?;
        assert_eq!(outcome, WriteOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(&path)?, "already here\n");
        Ok(())
    }
}
