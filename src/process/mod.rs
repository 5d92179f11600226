// src/process/mod.rs
pub mod delta;
pub mod error;
pub mod extract;

pub use delta::{daily_records, DailyRecord, DeltaState, Metric};
pub use error::{DeltaOverflow, ExtractError};
pub use extract::{extract_counts, Counts};

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use crate::{location::Location, reports};

/// Read every daily report in the window under `data_repo_dir` and return the
/// per-day records for `location`, oldest first.
///
/// Reports with no row for `location` are skipped and leave the running totals
/// untouched.
pub fn get_records(location: &Location, data_repo_dir: impl AsRef<Path>) -> Result<Vec<DailyRecord>> {
    let combined_key = location.combined_key();
    let reports_dir = reports::reports_dir(data_repo_dir);
    let files = reports::files_in_date_order(&reports_dir)?;

    let mut observations = Vec::with_capacity(files.len());
    for path in &files {
        let date = reports::report_date_label(path);
        match extract_counts(path, &combined_key)
            .with_context(|| format!("reading daily report {}", path.display()))?
        {
            Some(counts) => observations.push((date, counts)),
            None => debug!(%date, key = %combined_key, "no row for location; skipping"),
        }
    }

    let records = daily_records(observations).with_context(|| {
        format!("computing daily changes from {}", reports_dir.display())
    })?;
    info!(
        files = files.len(),
        records = records.len(),
        key = %combined_key,
        "built daily records"
    );
    Ok(records)
}
