// src/render/mod.rs
use anyhow::Result;
use std::io::Write;

use crate::{
    location::Location,
    process::{DailyRecord, Metric},
};

pub const BAR_MARK: char = '#';
pub const NEGATIVE_MARK: char = '-';

/// Metrics charted after the raw dump, in order.
pub const HISTOGRAM_METRICS: [Metric; 2] = [Metric::Confirmed, Metric::Deaths];

/// Longest bar drawn; longer bars are cut here and labelled with their value.
pub const MAX_BAR_LEN: usize = 500;

/// A bar `value` marks long. Negative values use [`NEGATIVE_MARK`] so a
/// downward correction stays visible.
pub fn histogram_bar(value: i64) -> String {
    let mark = if value < 0 { NEGATIVE_MARK } else { BAR_MARK };
    let len = value.unsigned_abs();
    let drawn = len.min(MAX_BAR_LEN as u64) as usize;
    let mut bar: String = std::iter::repeat(mark).take(drawn).collect();
    if len > MAX_BAR_LEN as u64 {
        bar.push_str(&format!(" ({})", value));
    }
    bar
}

fn write_heading<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(40))?;
    Ok(())
}

pub fn write_banner<W: Write>(out: &mut W, location: &Location) -> Result<()> {
    writeln!(out, "{}", "*".repeat(80))?;
    writeln!(out, "Location: {}", location)?;
    writeln!(out, "{}", "*".repeat(80))?;
    Ok(())
}

/// One JSON object per record.
pub fn write_raw<W: Write>(out: &mut W, records: &[DailyRecord]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    Ok(())
}

/// `<date>\t| <bar>` per record for the given metric's daily change.
pub fn write_histogram<W: Write>(out: &mut W, records: &[DailyRecord], metric: Metric) -> Result<()> {
    for record in records {
        writeln!(
            out,
            "{}\t| {}",
            record.date,
            histogram_bar(record.delta(metric))
        )?;
    }
    Ok(())
}

/// Full report: banner, raw dump, then a histogram per [`HISTOGRAM_METRICS`].
pub fn write_report<W: Write>(out: &mut W, location: &Location, records: &[DailyRecord]) -> Result<()> {
    write_banner(out, location)?;

    write_heading(out, "Raw")?;
    write_raw(out, records)?;

    for metric in HISTOGRAM_METRICS {
        write_heading(out, metric.label())?;
        write_histogram(out, records, metric)?;
    }

    out.flush()?;
    Ok(())
}
