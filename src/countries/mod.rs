// src/countries/mod.rs
//! Distinct-country extraction: check → read → dedup → sort → write → report.

pub mod read;
pub mod write;

use std::{
    collections::HashSet,
    fmt,
    path::{Path, PathBuf},
};
use tracing::{error, info};

use crate::error::{ExtractError, Result};
pub use read::{read_countries, COUNTRY_COLUMN};
pub use write::write_countries;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Where the sorted list was written.
    pub output: PathBuf,
    /// Distinct country names, ascending.
    pub countries: Vec<String>,
}

impl ExtractSummary {
    pub fn count(&self) -> usize {
        self.countries.len()
    }
}

impl fmt::Display for ExtractSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Successfully extracted {} unique countries to {}",
            self.count(),
            self.output.display()
        )?;
        write!(f, "Countries found: {}", self.countries.join(", "))
    }
}

/// Turn the set into a list in ascending code-point order.
pub fn sort_countries(countries: HashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = countries.into_iter().collect();
    sorted.sort_unstable();
    sorted
}

/// Run the whole pipeline and hand back the outcome instead of printing it.
///
/// Nothing is written unless the input was read in full. The input must
/// exist; a missing path short-circuits before any file is opened.
#[tracing::instrument(level = "info", skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ExtractSummary> {
    let (input, output) = (input.as_ref(), output.as_ref());

    // 1) existence check
    if !input.exists() {
        return Err(ExtractError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    // 2) + 3) parse and collect
    let unique = read_countries(input)?;
    info!(unique = unique.len(), "collected countries");

    // 4) sort
    let countries = sort_countries(unique);

    // 5) write
    write_countries(output, &countries)?;
    info!(rows = countries.len(), "wrote sorted countries");

    Ok(ExtractSummary {
        output: output.to_path_buf(),
        countries,
    })
}

/// Extract the distinct `country` values of `input` into `output`, sorted,
/// and report the outcome on stdout.
///
/// Never fails: a missing input, an unreadable input or an unwritable output
/// each print one line and end the run.
pub fn extract_unique_countries<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) {
    match run(input, output) {
        Ok(summary) => println!("{summary}"),
        Err(err) => {
            error!(path = %err.path().display(), "extraction failed: {:?}", err);
            println!("{err}");
        }
    }
}
