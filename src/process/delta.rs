use serde::Serialize;

use super::{error::DeltaOverflow, extract::Counts};

/// One day's totals for the target location plus the change since the
/// previous day that had a matching row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    pub date: String,
    pub confirmed: i64,
    pub deaths: i64,
    pub recovered: i64,
    pub active: i64,
    pub new_confirmed: i64,
    pub new_deaths: i64,
    pub new_recovered: i64,
    pub new_active: i64,
}

/// The four tracked series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Confirmed,
    Deaths,
    Recovered,
    Active,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::Confirmed => "Confirmed",
            Metric::Deaths => "Deaths",
            Metric::Recovered => "Recovered",
            Metric::Active => "Active",
        }
    }
}

impl DailyRecord {
    pub fn delta(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Confirmed => self.new_confirmed,
            Metric::Deaths => self.new_deaths,
            Metric::Recovered => self.new_recovered,
            Metric::Active => self.new_active,
        }
    }
}

/// Cumulative counts from the last report that matched. Starts at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeltaState {
    prev: Counts,
}

impl DeltaState {
    /// Diff `current` against the previous counts, returning the next state
    /// alongside the emitted record.
    pub fn advance(
        self,
        date: String,
        current: Counts,
    ) -> Result<(DeltaState, DailyRecord), DeltaOverflow> {
        let prev = self.prev;
        let diff = |metric: Metric, current: i64, previous: i64| {
            current
                .checked_sub(previous)
                .ok_or_else(|| DeltaOverflow {
                    date: date.clone(),
                    metric,
                    previous,
                    current,
                })
        };
        let new_confirmed = diff(Metric::Confirmed, current.confirmed, prev.confirmed)?;
        let new_deaths = diff(Metric::Deaths, current.deaths, prev.deaths)?;
        let new_recovered = diff(Metric::Recovered, current.recovered, prev.recovered)?;
        let new_active = diff(Metric::Active, current.active, prev.active)?;

        let record = DailyRecord {
            date,
            confirmed: current.confirmed,
            deaths: current.deaths,
            recovered: current.recovered,
            active: current.active,
            new_confirmed,
            new_deaths,
            new_recovered,
            new_active,
        };
        Ok((DeltaState { prev: current }, record))
    }
}

/// Fold date-ordered observations into daily records.
///
/// The first record is dropped: its deltas are taken against zero and would
/// show the whole running total as a single day's change.
pub fn daily_records<I>(observations: I) -> Result<Vec<DailyRecord>, DeltaOverflow>
where
    I: IntoIterator<Item = (String, Counts)>,
{
    let (_, records) = observations.into_iter().try_fold(
        (DeltaState::default(), Vec::new()),
        |(state, mut records), (date, counts)| {
            let (next, record) = state.advance(date, counts)?;
            records.push(record);
            Ok::<_, DeltaOverflow>((next, records))
        },
    )?;
    Ok(records.into_iter().skip(1).collect())
}
