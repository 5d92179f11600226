pub mod location;
pub mod process;
pub mod render;
pub mod reports;

pub use location::Location;
pub use process::{get_records, Counts, DailyRecord};
