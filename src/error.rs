// SPDX-License-Identifier: MIT
//!
//! Fatal errors, the ones which stop a run before any row is read
//!

/// Header row does not describe the requested columns
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("Unable to find {0} column, add it to row 1 and retry")]
    MissingColumn(String),
    #[error("{0} column found twice. Remove one and try again.")]
    DuplicateColumn(String),
    #[error("Column {0} is requested more than once")]
    DuplicateTarget(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Header(#[from] HeaderError),
    #[error("Can not open workbook {path:?} : {source}")]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: umya_spreadsheet::reader::xlsx::XlsxError,
    },
    #[error("Can not read {path:?} : {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Can not parse {path:?} : {source}")]
    Tsv {
        path: std::path::PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Workbook {0:?} has no worksheet")]
    NoWorksheet(std::path::PathBuf),
    #[error("{0:?} is empty, row 1 must hold the column names")]
    EmptySource(std::path::PathBuf),
    #[error("Unsupported file {0:?}, expected .xlsx, .tsv or .txt")]
    UnsupportedFormat(std::path::PathBuf),
    #[error("Can not parse config file {path:?} : {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, Error>;
