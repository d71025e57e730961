//! The kanji dictionary store: load-once XML document and read-only queries.
//!
//! The XML file is parsed into an element tree at construction and never
//! touched again; every query is a linear scan over the pre-parsed records.
//! A record is any element with a direct `<kanji>` child, matching the
//! dictionary schema without hardcoding the record element's name.

mod entry;
mod error;
mod tree;

pub use entry::Entry;
pub use error::{DictionaryError, Result};

use std::fs;
use std::path::Path;

use log::{debug, trace};

use tree::Element;

/// Read-only store over the parsed dictionary document.
///
/// Construction is fatal on a missing, unreadable, or ill-formed file;
/// there is no degraded mode. Queries cannot fail after a successful load.
pub struct Dictionary {
    records: Vec<Element>,
}

impl Dictionary {
    /// Load the dictionary from an XML file on disk.
    pub fn open(path: &Path) -> Result<Self> {
        debug!("loading dictionary from {}", path.display());
        let xml = fs::read_to_string(path)?;
        Self::from_str(&xml)
    }

    /// Parse a dictionary from an XML string.
    pub fn from_str(xml: &str) -> Result<Self> {
        let root = tree::parse(xml)?;
        let mut records = Vec::new();
        collect_records(root, &mut records);
        debug!("loaded {} dictionary records", records.len());
        Ok(Self { records })
    }

    /// Entries whose named field's text equals `value` byte-for-byte.
    pub fn exact(&self, field: &str, value: &str) -> Vec<Entry> {
        self.matching(field, |text| text == value)
    }

    /// Entries whose named field's text contains `value` as a substring.
    pub fn contains(&self, field: &str, value: &str) -> Vec<Entry> {
        self.matching(field, |text| text.contains(value))
    }

    /// Entries whose named field's text has length > 0.
    pub fn non_empty(&self, field: &str) -> Vec<Entry> {
        self.matching(field, |text| !text.is_empty())
    }

    /// Scan all records for direct children named `field` whose text
    /// satisfies the predicate. One [`Entry`] is produced per matching
    /// element, so a record with two matching elements of the same name
    /// appears twice; de-duplication is the caller's job.
    fn matching<P>(&self, field: &str, pred: P) -> Vec<Entry>
    where
        P: Fn(&str) -> bool,
    {
        let mut result = Vec::new();
        for record in &self.records {
            for child in record.children.iter().filter(|c| c.name == field) {
                let text = child.text.as_deref().unwrap_or("");
                if pred(text) {
                    result.push(Entry::from_record(record));
                }
            }
        }
        trace!("query on <{}> matched {} entries", field, result.len());
        result
    }

    // Named wrappers forming the public query surface.

    /// Entries for a single kanji character.
    pub fn by_kanji(&self, kanji: &str) -> Vec<Entry> {
        self.exact("kanji", kanji)
    }

    /// All kanji in the given JLPT level.
    pub fn by_jlpt_level(&self, level: u32) -> Vec<Entry> {
        self.exact("jlpt-level", &level.to_string())
    }

    /// All kanji taught in the given Jouyou grade.
    pub fn by_jouyou_grade(&self, grade: u32) -> Vec<Entry> {
        self.exact("jouyou-grade", &grade.to_string())
    }

    /// Kanji whose Heisig keyword contains the given word.
    pub fn by_keyword(&self, word: &str) -> Vec<Entry> {
        self.contains("keyword", word)
    }

    /// All kanji with the given stroke count.
    pub fn by_strokes(&self, strokes: u32) -> Vec<Entry> {
        self.exact("number-of-strokes", &strokes.to_string())
    }

    /// The kanji at the given Heisig index.
    pub fn by_rtk_index(&self, index: u32) -> Vec<Entry> {
        self.exact("rtk-index", &index.to_string())
    }

    /// All kanji covered by the Remembering the Kanji books.
    pub fn all_rtk_index(&self) -> Vec<Entry> {
        self.non_empty("rtk-index")
    }
}

/// Depth-first walk collecting every element that has a direct `<kanji>`
/// child. Record elements are taken whole and not descended into.
fn collect_records(element: Element, records: &mut Vec<Element>) {
    if element.child("kanji").is_some() {
        records.push(element);
        return;
    }
    for child in element.children {
        collect_records(child, records);
    }
}

#[cfg(test)]
mod tests;
