//! Tabular dataset loading.
//!
//! Every dataset served to the dashboard is comma-delimited UTF-8 text with
//! a header row. `DataTable` keeps the header and the raw rows so fields can
//! be looked up by column name; typed extraction happens one layer up in
//! [`crate::observation`].
//!
//! There is no caching layer: each load re-fetches and re-parses, and row
//! order is preserved because the series are time-ordered.

use csv::{ReaderBuilder, StringRecord};
use std::fmt;

#[cfg(feature = "api")]
use log::warn;

/// Errors that can occur when fetching or parsing a dataset.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LoadError {
    /// The resource could not be fetched at all.
    HttpRequest,
    /// The resource responded with a non-success status code.
    HttpStatus(u16),
    /// The body could not be decoded as delimited tabular text.
    Malformed,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::HttpRequest => write!(f, "failed to fetch dataset"),
            LoadError::HttpStatus(status) => {
                write!(f, "dataset request returned status {status}")
            }
            LoadError::Malformed => write!(f, "dataset is not valid CSV"),
        }
    }
}

impl std::error::Error for LoadError {}

/// A parsed tabular dataset: one header row plus raw data rows.
#[derive(Debug, Clone)]
pub struct DataTable {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl DataTable {
    /// Parse CSV text into a table. The first row is the header, empty lines
    /// are skipped, and row order is preserved. A row with an inconsistent
    /// column count fails the whole parse.
    pub fn parse(text: &str) -> Result<DataTable, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|_| LoadError::Malformed)?
            .clone();

        let records = rdr
            .records()
            .collect::<Result<Vec<StringRecord>, _>>()
            .map_err(|_| LoadError::Malformed)?;

        Ok(DataTable { headers, records })
    }

    /// Position of a named column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Fetch a dataset over HTTP and parse it.
///
/// Only available natively; WASM apps go through the browser fetch in the
/// chart UI crate instead.
#[cfg(feature = "api")]
pub async fn fetch_table(client: &reqwest::Client, url: &str) -> Result<DataTable, LoadError> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Request failed for {url}: {e}");
            return Err(LoadError::HttpRequest);
        }
    };
    let status = response.status();
    if !status.is_success() {
        warn!("Bad response for {url}: {status}");
        return Err(LoadError::HttpStatus(status.as_u16()));
    }
    let body = response.text().await.map_err(|_| LoadError::HttpRequest)?;
    DataTable::parse(&body)
}
