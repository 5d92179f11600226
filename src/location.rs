use std::fmt;

/// County / state / country triple identifying one row per daily report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub county: String,
    pub state: String,
    pub country: String,
}

impl Location {
    pub fn new(
        county: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            county: county.into(),
            state: state.into(),
            country: country.into(),
        }
    }

    /// The value expected in the `Combined_Key` column, e.g. `"Whatcom, Washington, US"`.
    pub fn combined_key(&self) -> String {
        format!("{}, {}, {}", self.county, self.state, self.country)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.combined_key())
    }
}
