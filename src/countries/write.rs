// src/countries/write.rs
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use super::read::COUNTRY_COLUMN;
use crate::error::{ExtractError, Result};

#[derive(Serialize)]
struct CountryRow<'a> {
    country: &'a str,
}

/// Create (or truncate) `output` and write a single `country` column:
/// header first, then `countries` in the order given.
///
/// Records end in CRLF. A failure part way through leaves whatever was
/// already written on disk.
pub fn write_countries<P: AsRef<Path>>(output: P, countries: &[String]) -> Result<()> {
    let output = output.as_ref();
    let write_err = |source: csv::Error| ExtractError::OutputWriteError {
        path: output.to_path_buf(),
        source,
    };

    // header is written by hand so an empty list still gets one
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_path(output)
        .map_err(write_err)?;

    wtr.write_record([COUNTRY_COLUMN]).map_err(write_err)?;
    for country in countries {
        wtr.serialize(CountryRow { country }).map_err(write_err)?;
    }
    wtr.flush()
        .map_err(|e| write_err(csv::Error::from(e)))?;

    debug!(path = %output.display(), rows = countries.len(), "wrote output");
    Ok(())
}
