// SPDX-License-Identifier: MIT
//!
//! Drive a tabular source into a glossary
//!

use crate::config::Config;
use crate::error::{HeaderError, Result};
use crate::glossary::Glossary;
use crate::header::HeaderMap;
use crate::source::TabularSource;

pub struct Extractor {
    config: Config,
}

impl Extractor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Resolve header, then feed every data row into a new glossary
    ///
    /// Only a bad header fails. Duplicate keys are collected in the glossary.
    pub fn extract<S: TabularSource>(
        &self,
        name: &str,
        source: &mut S,
    ) -> std::result::Result<Glossary, HeaderError> {
        let header = HeaderMap::resolve(
            source.header().cells(),
            &self.config.key_column,
            &self.config.value_column,
        )?;
        log::debug!(
            "{}: {} in column {}, {} in column {}",
            name,
            self.config.key_column,
            header.key_column(),
            self.config.value_column,
            header.value_column()
        );

        let mut glossary = Glossary::with_policy(name, self.config.on_duplicate)
            .warn_on_duplicates(self.config.warn_on_duplicates);
        while source.has_more() {
            let row = match source.read_next() {
                Some(row) => row,
                None => break,
            };
            glossary.add_entry(row.cell(header.key_column()), row.cell(header.value_column()));
        }

        log::debug!(
            "{}: {} entries, {} duplicates",
            name,
            glossary.len(),
            glossary.errors().len()
        );
        Ok(glossary)
    }

    /// Open a glossary file and extract it, named after the file
    pub fn extract_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<Glossary> {
        let path = path.as_ref();
        let mut source = crate::source::open_source(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(self.extract(&name, &mut source)?)
    }
}
