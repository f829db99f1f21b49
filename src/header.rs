// SPDX-License-Identifier: MIT
//!
//! Locate named columns in the header row
//!

use crate::error::HeaderError;

/// Find the column index of every target name in the header row
///
/// Names match whole cells, ignoring case. Returned indices are in the
/// same order as `targets`.
pub fn resolve_columns<S: AsRef<str>>(
    header: &[S],
    targets: &[&str],
) -> Result<Vec<usize>, HeaderError> {
    let folded = targets
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<String>>();

    // Two equal targets would both claim the same cell
    for (i, name) in folded.iter().enumerate() {
        if folded[..i].contains(name) {
            return Err(HeaderError::DuplicateTarget(targets[i].to_string()));
        }
    }

    let mut found: Vec<Option<usize>> = vec![None; targets.len()];
    for (col, cell) in header.iter().enumerate() {
        let cell = cell.as_ref().to_lowercase();
        if let Some(t) = folded.iter().position(|name| *name == cell) {
            if found[t].is_some() {
                return Err(HeaderError::DuplicateColumn(targets[t].to_string()));
            }
            found[t] = Some(col);
        }
    }

    found
        .into_iter()
        .zip(targets)
        .map(|(col, name)| col.ok_or_else(|| HeaderError::MissingColumn(name.to_string())))
        .collect()
}

/// Resolved positions of the key and value columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMap {
    key_column: usize,
    value_column: usize,
}

impl HeaderMap {
    pub fn resolve<S: AsRef<str>>(
        header: &[S],
        key_name: &str,
        value_name: &str,
    ) -> Result<Self, HeaderError> {
        let cols = resolve_columns(header, &[key_name, value_name])?;
        Ok(Self {
            key_column: cols[0],
            value_column: cols[1],
        })
    }

    pub fn key_column(&self) -> usize {
        self.key_column
    }

    pub fn value_column(&self) -> usize {
        self.value_column
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn key_then_value() {
        let map = HeaderMap::resolve(&["stringID", "EN"], "stringID", "EN").unwrap();
        assert_eq!((map.key_column(), map.value_column()), (0, 1));
    }

    #[test]
    fn value_before_key() {
        let map = HeaderMap::resolve(&["EN", "stringID", "FR"], "stringID", "EN").unwrap();
        assert_eq!((map.key_column(), map.value_column()), (1, 0));
    }

    #[test]
    fn case_is_ignored() {
        let map = HeaderMap::resolve(&["", "STRINGid", "en"], "stringID", "EN").unwrap();
        assert_eq!((map.key_column(), map.value_column()), (1, 2));
    }

    #[test]
    fn partial_cell_does_not_match() {
        let err = HeaderMap::resolve(&["stringID", "EN-US"], "stringID", "EN").unwrap_err();
        assert_eq!(err, HeaderError::MissingColumn("EN".to_string()));
    }

    #[test]
    fn missing_key_column() {
        let err = HeaderMap::resolve(&["EN"], "stringID", "EN").unwrap_err();
        assert_eq!(err, HeaderError::MissingColumn("stringID".to_string()));
    }

    #[test]
    fn duplicate_key_column() {
        let err = HeaderMap::resolve(&["stringID", "stringID", "EN"], "stringID", "EN").unwrap_err();
        assert_eq!(err, HeaderError::DuplicateColumn("stringID".to_string()));
    }

    #[test]
    fn duplicate_value_column_ignoring_case() {
        let err = HeaderMap::resolve(&["en", "stringID", "EN"], "stringID", "EN").unwrap_err();
        assert_eq!(err, HeaderError::DuplicateColumn("EN".to_string()));
    }

    #[test]
    fn same_name_for_key_and_value() {
        let err = HeaderMap::resolve(&["EN"], "EN", "en").unwrap_err();
        assert_eq!(err, HeaderError::DuplicateTarget("en".to_string()));
    }

    #[test]
    fn many_columns() {
        let header = vec!["FR".to_string(), "stringID".to_string(), "DE".to_string(), "EN".to_string()];
        let cols = resolve_columns(&header[..], &["stringID", "EN", "DE", "FR"]).unwrap();
        assert_eq!(cols, vec![1, 3, 2, 0]);
    }

    #[test]
    fn empty_header() {
        let header: [&str; 0] = [];
        let err = resolve_columns(&header, &["stringID"]).unwrap_err();
        assert_eq!(err, HeaderError::MissingColumn("stringID".to_string()));
    }
}
