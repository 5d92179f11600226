use csv::{ReaderBuilder, StringRecord};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::{trace, warn};

use super::error::ExtractError;

pub const KEY_COLUMN: &str = "Combined_Key";
pub const CONFIRMED_COLUMN: &str = "Confirmed";
pub const DEATHS_COLUMN: &str = "Deaths";
pub const RECOVERED_COLUMN: &str = "Recovered";
pub const ACTIVE_COLUMN: &str = "Active";

/// Cumulative totals for one location as of one daily report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub confirmed: i64,
    pub deaths: i64,
    pub recovered: i64,
    pub active: i64,
}

/// Positions of the columns we read, resolved from the header row.
#[derive(Debug)]
struct ColumnIndex {
    key: usize,
    confirmed: usize,
    deaths: usize,
    recovered: usize,
    active: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self, ExtractError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == column)
                .ok_or_else(|| ExtractError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };

        Ok(Self {
            key: find(KEY_COLUMN)?,
            confirmed: find(CONFIRMED_COLUMN)?,
            deaths: find(DEATHS_COLUMN)?,
            recovered: find(RECOVERED_COLUMN)?,
            active: find(ACTIVE_COLUMN)?,
        })
    }
}

/// Open the daily report at `path` and pull the counts for `combined_key`.
///
/// Returns `Ok(None)` when no row carries that key. If several rows do, the
/// last one wins.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn extract_counts(path: &Path, combined_key: &str) -> Result<Option<Counts>, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    counts_from_reader(BufReader::new(file), path, combined_key)
}

/// Same as [`extract_counts`] over any reader; `path` is only used in errors.
pub fn counts_from_reader<R: Read>(
    reader: R,
    path: &Path,
    combined_key: &str,
) -> Result<Option<Counts>, ExtractError> {
    let csv_err = |source: csv::Error| ExtractError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let cols = ColumnIndex::resolve(&headers, path)?;
    trace!(?cols, "resolved columns");

    let mut found: Option<Counts> = None;
    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        if record.get(cols.key) != Some(combined_key) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = |idx: usize, column: &'static str| parse_count(&record, idx, column, path, line);
        let counts = Counts {
            confirmed: field(cols.confirmed, CONFIRMED_COLUMN)?,
            deaths: field(cols.deaths, DEATHS_COLUMN)?,
            recovered: field(cols.recovered, RECOVERED_COLUMN)?,
            active: field(cols.active, ACTIVE_COLUMN)?,
        };

        if found.is_some() {
            warn!(line, key = combined_key, "location matched more than once; keeping later row");
        }
        found = Some(counts);
    }

    Ok(found)
}

fn parse_count(
    record: &StringRecord,
    idx: usize,
    column: &'static str,
    path: &Path,
    line: u64,
) -> Result<i64, ExtractError> {
    let raw = record.get(idx).unwrap_or("");
    raw.trim().parse::<i64>().map_err(|_| ExtractError::Parse {
        path: path.to_path_buf(),
        line,
        column,
        value: raw.to_string(),
    })
}
