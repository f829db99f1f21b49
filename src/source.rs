// SPDX-License-Identifier: MIT
//!
//! Tabular sources: a header row followed by data rows
//!

use crate::error::{Error, Result};

/// One spreadsheet row, every cell rendered as text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row(Vec<String>);

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Cell text at 0-based column, empty if the row is shorter
    pub fn cell(&self, col: usize) -> &str {
        self.0.get(col).map(|c| c.as_str()).unwrap_or_default()
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Forward-only reader over data rows
pub trait RowReader {
    /// True while another row can be read. Does not advance.
    fn has_more(&self) -> bool;

    /// Read the current row and advance, `None` once exhausted
    fn read_next(&mut self) -> Option<Row>;
}

/// Row reader which also knows its header row
pub trait TabularSource: RowReader {
    fn header(&self) -> &Row;
}

/// Rows held in memory
#[derive(Clone, Debug)]
pub struct MemorySource {
    header: Row,
    rows: std::vec::IntoIter<Row>,
}

impl MemorySource {
    pub fn new(header: Row, rows: Vec<Row>) -> Self {
        Self {
            header,
            rows: rows.into_iter(),
        }
    }

    /// First row becomes the header, the rest are data
    ///
    /// Returns `None` if there is no row at all.
    pub fn from_rows(rows: Vec<Row>) -> Option<Self> {
        let mut iter = rows.into_iter();
        let header = iter.next()?;
        Some(Self { header, rows: iter })
    }
}

impl RowReader for MemorySource {
    fn has_more(&self) -> bool {
        self.rows.len() > 0
    }

    fn read_next(&mut self) -> Option<Row> {
        self.rows.next()
    }
}

impl TabularSource for MemorySource {
    fn header(&self) -> &Row {
        &self.header
    }
}

/// Parse tab separated text, first line is the header
///
/// Cells may be quoted, rows may differ in length. `None` if there is no
/// row at all.
pub fn parse_tsv(text: &str) -> std::result::Result<Option<MemorySource>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let rows = reader
        .records()
        .map(|record| record.map(|r| r.iter().collect::<Row>()))
        .collect::<std::result::Result<Vec<Row>, csv::Error>>()?;
    Ok(MemorySource::from_rows(rows))
}

/// Read a tab separated glossary file
pub fn read_tsv<P: AsRef<std::path::Path>>(path: P) -> Result<MemorySource> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source = parse_tsv(&text)
        .map_err(|source| Error::Tsv {
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(|| Error::EmptySource(path.to_path_buf()))?;
    log::debug!(
        "Read {:?}: {} columns, {} data rows",
        path,
        source.header.len(),
        source.rows.len()
    );
    Ok(source)
}

/// Any source `open_source` can return
pub enum FileSource {
    Xlsx(crate::xlsx::XlsxSource),
    Tsv(MemorySource),
}

impl RowReader for FileSource {
    fn has_more(&self) -> bool {
        match self {
            Self::Xlsx(s) => s.has_more(),
            Self::Tsv(s) => s.has_more(),
        }
    }

    fn read_next(&mut self) -> Option<Row> {
        match self {
            Self::Xlsx(s) => s.read_next(),
            Self::Tsv(s) => s.read_next(),
        }
    }
}

impl TabularSource for FileSource {
    fn header(&self) -> &Row {
        match self {
            Self::Xlsx(s) => s.header(),
            Self::Tsv(s) => s.header(),
        }
    }
}

/// Open a glossary file, format chosen by extension
pub fn open_source<P: AsRef<std::path::Path>>(path: P) -> Result<FileSource> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("xlsx") => Ok(FileSource::Xlsx(crate::xlsx::XlsxSource::open(path)?)),
        Some("tsv") | Some("txt") => Ok(FileSource::Tsv(read_tsv(path)?)),
        _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
    }
}
