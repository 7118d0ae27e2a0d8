// src/countries/read.rs
use csv::ReaderBuilder;
use std::{collections::HashSet, path::Path};
use tracing::debug;

use crate::error::{ExtractError, Result};

/// Header name whose cells are collected.
pub const COUNTRY_COLUMN: &str = "country";

/// Read `input` as a headed CSV and collect every distinct `country` cell.
///
/// Rows are matched to headers by position. A row that ends before the
/// `country` position, or a file whose header has no `country` field,
/// contributes nothing. When the header repeats `country`, the last one wins.
pub fn read_countries<P: AsRef<Path>>(input: P) -> Result<HashSet<String>> {
    let input = input.as_ref();
    let read_err = |source: csv::Error| ExtractError::InputReadError {
        path: input.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // short and long rows are legal, they just may lack `country`
        .from_path(input)
        .map_err(read_err)?;

    let country_idx = rdr
        .headers()
        .map_err(read_err)?
        .iter()
        .enumerate()
        .filter(|(_, name)| *name == COUNTRY_COLUMN)
        .map(|(i, _)| i)
        .last();
    match country_idx {
        Some(idx) => debug!(idx, "found country column"),
        None => debug!(path = %input.display(), "no country column in header"),
    }

    let mut countries = HashSet::new();
    let mut rows = 0usize;
    for result in rdr.records() {
        let record = result.map_err(read_err)?;
        rows += 1;
        if let Some(value) = country_idx.and_then(|i| record.get(i)) {
            if !countries.contains(value) {
                countries.insert(value.to_string());
            }
        }
    }
    // reader (and its file handle) dropped here, before any output is opened

    debug!(rows, unique = countries.len(), "read input");
    Ok(countries)
}
