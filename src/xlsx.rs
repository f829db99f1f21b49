// SPDX-License-Identifier: MIT
//!
//! Read glossaries from .xlsx
//!

use crate::error::{Error, Result};
use crate::source::{Row, RowReader, TabularSource};

/// First worksheet of a workbook
///
/// Row 1 is the header, data rows run up to the highest used row.
pub struct XlsxSource {
    book: umya_spreadsheet::Spreadsheet,
    header: Row,
    columns: u32,
    last_row: u32,
    next_row: u32,
}

impl XlsxSource {
    pub fn open<P: AsRef<std::path::Path>>(xlsx_path: P) -> Result<Self> {
        let path = xlsx_path.as_ref();
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let sheets = book.get_sheet_collection();
        if 1 < sheets.len() {
            log::warn!(
                "More than one sheet present in {:?}. Only the first sheet will be processed. Please delete the remaining sheets",
                path
            );
        }
        let sheet = sheets
            .first()
            .ok_or_else(|| Error::NoWorksheet(path.to_path_buf()))?;

        let columns = sheet.get_highest_column();
        let last_row = sheet.get_highest_row();
        if last_row == 0 {
            return Err(Error::EmptySource(path.to_path_buf()));
        }
        let header = read_row(sheet, 1, columns);
        log::debug!(
            "Read {:?} sheet {:?}: {} columns, {} data rows",
            path,
            sheet.get_name(),
            columns,
            last_row - 1
        );

        Ok(Self {
            book,
            header,
            columns,
            last_row,
            // Skip row 1 since the header lives there
            next_row: 2,
        })
    }
}

/// Cells 1..=columns of a 1-based row
fn read_row(sheet: &umya_spreadsheet::Worksheet, row: u32, columns: u32) -> Row {
    (1..=columns)
        .map(|col| sheet.get_value((col, row)))
        .collect()
}

impl RowReader for XlsxSource {
    fn has_more(&self) -> bool {
        self.next_row <= self.last_row
    }

    fn read_next(&mut self) -> Option<Row> {
        if !self.has_more() {
            return None;
        }
        let sheet = self.book.get_sheet_collection().first()?;
        let row = read_row(sheet, self.next_row, self.columns);
        log::trace!("row {}: {:?}", self.next_row, row.cells());
        self.next_row += 1;
        Some(row)
    }
}

impl TabularSource for XlsxSource {
    fn header(&self) -> &Row {
        &self.header
    }
}
