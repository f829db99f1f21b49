// SPDX-License-Identifier: MIT
//!
//! Plain text report of an extracted glossary
//!

use crate::glossary::Glossary;

/// Write every entry, the entry count, then any duplicate-key issues
pub fn write_report<W: std::io::Write>(glossary: &Glossary, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    for (key, value) in glossary.entries() {
        writeln!(out, "StringID: {}\nLocString: {}\n", key, value)?;
    }
    writeln!(out, "Found {} entries in {}", glossary.len(), glossary.name())?;

    let errors = glossary.errors();
    if !errors.is_empty() {
        writeln!(out, "{} issues were reported", errors.len())?;
        for err in errors {
            writeln!(out, "{}", err)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn render(glossary: &Glossary) -> String {
        let mut buf = Vec::<u8>::new();
        write_report(glossary, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn entries_and_issues() {
        let mut glossary = Glossary::new("example.xlsx");
        glossary.add_entry("id2", "Bye");
        glossary.add_entry("id1", "Hello");
        glossary.add_entry("ID1", "Hi");

        assert_eq!(
            render(&glossary),
            "\n\
             StringID: id1\nLocString: Hi\n\n\
             StringID: id2\nLocString: Bye\n\n\
             Found 2 entries in example.xlsx\n\
             1 issues were reported\n\
             string id id1 duplicated. Was: \"Hello\" Now: \"Hi\"\n"
        );
    }

    #[test]
    fn no_issue_section_without_errors() {
        let glossary = Glossary::new("empty.tsv");
        assert_eq!(render(&glossary), "\nFound 0 entries in empty.tsv\n");
    }
}
