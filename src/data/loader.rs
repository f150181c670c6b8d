use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{LaunchRecord, LaunchTable};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to fetch {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Fetching {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Failed to open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV row {row} is malformed")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where the launch CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` locations are URLs, anything else a path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch table once from its source.
pub fn load_table(source: &DataSource) -> Result<LaunchTable, LoadError> {
    let table = match source {
        DataSource::Url(url) => fetch_csv(url)?,
        DataSource::File(path) => load_file(path)?,
    };
    log::info!(
        "Loaded {} launches from {source} ({} sites)",
        table.len(),
        table.launch_sites().len()
    );
    Ok(table)
}

/// Download the CSV with a blocking GET. No retries.
pub fn fetch_csv(url: &str) -> Result<LaunchTable, LoadError> {
    log::debug!("GET {url}");
    let response = reqwest::blocking::get(url).map_err(|source| LoadError::Http {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }
    parse_csv(response)
}

pub fn load_file(path: &Path) -> Result<LaunchTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(file)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Decode launch rows from CSV text with a header line.
///
/// Columns are matched by header name; extra columns are ignored and
/// surrounding whitespace is trimmed. Row numbers in errors are 1-based and
/// exclude the header.
pub fn parse_csv<R: Read>(input: R) -> Result<LaunchTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result.map_err(|source| LoadError::Row {
            row: row_no + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(LaunchTable::from_records(records))
}
