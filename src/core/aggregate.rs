use crate::core::error::{EcdfError, Result};
use crate::core::io::MmapSource;
use crate::core::model::{CSV_EXT, Record};
use indexmap::IndexMap;
use log::{debug, info};
use std::path::Path;

/// Scores seen per student, in first-seen order.
type Scores = IndexMap<i64, Vec<f64>>;

/// Arithmetic mean. Adding `0.0` folds a `-0.0` result to `0.0`.
fn mean(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64 + 0.0
}

/// Reads every file in order and returns the mean score of each student of
/// `school`, sorted ascending.
pub fn aggregate(school: &str, files: &[String]) -> Result<Vec<f64>> {
    if let Some(bad) = files.iter().find(|f| !f.ends_with(CSV_EXT)) {
        return Err(EcdfError::invalid(format!(
            "This program requires all files to have a {} extension (got {})",
            CSV_EXT, bad
        )));
    }

    let mut scores = Scores::default();
    for file in files {
        read_file(school.as_bytes(), file, &mut scores)?;
    }

    if scores.is_empty() {
        return Err(EcdfError::file(format!("Did not find any data for {}", school)));
    }
    info!("school={:?} students={}", school, scores.len());

    let mut means: Vec<f64> = scores.values().map(|s| mean(s)).collect();
    means.sort_by(f64::total_cmp);
    Ok(means)
}

fn read_file(school: &[u8], file: &str, scores: &mut Scores) -> Result<()> {
    let source = MmapSource::open(Path::new(file)).map_err(|e| {
        debug!("open {} failed: {}", file, e);
        EcdfError::file(format!(
            "Could not open {}. Check that the path is correct.",
            file
        ))
    })?;

    let mut lines = 0usize;
    let mut matched = 0usize;
    for (n, line) in source.lines().enumerate() {
        let record = Record::parse(line).map_err(|defect| {
            EcdfError::file(format!(
                "The file {} is not formatted in the correct format. {} (line {})",
                file,
                defect,
                n + 1
            ))
        })?;
        lines += 1;
        if record.school == school {
            scores.entry(record.student_id).or_default().push(record.score);
            matched += 1;
        }
    }
    debug!(
        "file={} bytes={} lines={} matched={}",
        file,
        source.len(),
        lines,
        matched
    );
    Ok(())
}
