// SPDX-License-Identifier: MIT
mod config;
mod error;
mod extract;
mod glossary;
mod header;
mod report;
mod source;
mod xlsx;

// re-export
pub use config::{Config, DEFAULT_KEY_COLUMN, DEFAULT_VALUE_COLUMN};
pub use error::{Error, HeaderError, Result};
pub use extract::Extractor;
pub use glossary::{DuplicateKey, Glossary, OnDuplicate};
pub use header::{resolve_columns, HeaderMap};
pub use report::write_report;
pub use source::{
    open_source, parse_tsv, read_tsv, FileSource, MemorySource, Row, RowReader, TabularSource,
};
pub use xlsx::XlsxSource;
