// src/reports/mod.rs
use anyhow::{Context, Result};
use glob::{glob, Pattern};
use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Location of the daily report CSVs inside a clone of the CSSE COVID-19 repo.
pub const REPORTS_SUBDIR: &str = "csse_covid_19_data/csse_covid_19_daily_reports";

/// Daily reports before 03-22-2020 only carry state-level rows and have no
/// `Combined_Key` column, so the window starts there and runs through April.
pub const REPORT_FILE_PATTERNS: [&str; 3] = [
    "03-2[2-9]-2020.csv",
    "03-3[0-1]-2020.csv",
    "04-*-2020.csv",
];

pub fn reports_dir(data_repo_dir: impl AsRef<Path>) -> PathBuf {
    data_repo_dir.as_ref().join(REPORTS_SUBDIR)
}

/// Orders two report paths by file name.
///
/// Names are `MM-DD-YYYY.csv`, zero padded, and every file in the window shares
/// one year, so string order is date order. Swap this out for real date parsing
/// if the window ever spans a year boundary.
pub fn compare_report_names(a: &Path, b: &Path) -> Ordering {
    a.file_name().cmp(&b.file_name())
}

/// The date label for a report, i.e. its file stem (`03-22-2020`).
pub fn report_date_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// List every daily report in the window under `reports_dir`, oldest first.
///
/// A missing directory, or one with no matching files, gives an empty list.
pub fn files_in_date_order(reports_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let reports_dir = reports_dir.as_ref();
    let escaped = Pattern::escape(&reports_dir.to_string_lossy());

    let mut files = Vec::new();
    for name in REPORT_FILE_PATTERNS {
        let pattern = format!("{}/{}", escaped, name);
        let matches =
            glob(&pattern).with_context(|| format!("invalid glob pattern: {}", pattern))?;
        for entry in matches {
            let path = entry.with_context(|| {
                format!("failed to read entry under {}", reports_dir.display())
            })?;
            debug!(path = %path.display(), "found report");
            files.push(path);
        }
    }

    files.sort_by(|a, b| compare_report_names(a, b));
    info!(
        dir = %reports_dir.display(),
        count = files.len(),
        "daily reports in window"
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "Combined_Key,Confirmed,Deaths,Recovered,Active\n").unwrap();
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files.iter().map(|p| report_date_label(p)).collect()
    }

    #[test]
    fn test_window_excludes_files_before_cutoff() {
        let tmp = tempdir().unwrap();
        for name in [
            "04-15-2020.csv",
            "03-21-2020.csv",
            "04-01-2020.csv",
            "03-22-2020.csv",
        ] {
            touch(tmp.path(), name);
        }

        let files = files_in_date_order(tmp.path()).unwrap();
        assert_eq!(names(&files), vec!["03-22-2020", "04-01-2020", "04-15-2020"]);
    }

    #[test]
    fn test_window_covers_end_of_march_and_ignores_other_files() {
        let tmp = tempdir().unwrap();
        for name in [
            "03-31-2020.csv",
            "03-30-2020.csv",
            "03-29-2020.csv",
            "05-01-2020.csv",
            "04-02-2021.csv",
            "04-02-2020.txt",
            "README.md",
        ] {
            touch(tmp.path(), name);
        }

        let files = files_in_date_order(tmp.path()).unwrap();
        assert_eq!(names(&files), vec!["03-29-2020", "03-30-2020", "03-31-2020"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let tmp = tempdir().unwrap();
        let files = files_in_date_order(tmp.path().join("does-not-exist")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_directory_with_glob_metacharacters() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("data [copy]");
        fs::create_dir_all(&dir).unwrap();
        touch(&dir, "04-03-2020.csv");

        let files = files_in_date_order(&dir).unwrap();
        assert_eq!(names(&files), vec!["04-03-2020"]);
    }

    #[test]
    fn test_reports_dir_appends_fixed_subpath() {
        let dir = reports_dir("COVID-19");
        assert_eq!(
            dir,
            Path::new("COVID-19")
                .join("csse_covid_19_data")
                .join("csse_covid_19_daily_reports")
        );
    }

    #[test]
    fn test_compare_report_names_uses_file_name_only() {
        let a = Path::new("/z/03-31-2020.csv");
        let b = Path::new("/a/04-01-2020.csv");
        assert_eq!(compare_report_names(a, b), Ordering::Less);
    }
}
