use std::{io, path::PathBuf};

use thiserror::Error;

use super::delta::Metric;

/// Failures while pulling one location's counts out of a daily report.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{} has no '{column}' column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("{} line {line}: column '{column}' is not an integer: {value:?}", .path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// A day-over-day change that does not fit in an `i64`.
#[derive(Debug, Error)]
#[error(
    "daily report {date}: {} change from {previous} to {current} overflows",
    .metric.label()
)]
pub struct DeltaOverflow {
    pub date: String,
    pub metric: Metric,
    pub previous: i64,
    pub current: i64,
}
