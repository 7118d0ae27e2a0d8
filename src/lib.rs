//! Pull the distinct country names out of a world-cities CSV.

pub mod countries;
pub mod error;

pub use countries::{extract_unique_countries, run, ExtractSummary};
pub use error::ExtractError;

/// Cities dataset read by the standalone binary.
pub const DEFAULT_INPUT: &str = "src/app/api/cities/worldcitiescsv.csv";

/// Written next to [`DEFAULT_INPUT`].
pub const DEFAULT_OUTPUT: &str = "src/app/api/cities/unique_countries.csv";
