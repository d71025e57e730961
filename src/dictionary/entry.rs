//! Immutable entry snapshots built from dictionary records.

use std::collections::HashMap;

use crate::constants::{LIST_FIELDS, STR_FIELDS};

use super::tree::Element;

/// One dictionary entry, snapshotted from a record element at query time.
///
/// Scalar fields map to their text content; a missing element or an element
/// with no text both count as absent. List fields keep their items raw
/// (`None` for an item element with no text) so the formatter can apply its
/// truncation policy before flattening.
#[derive(Debug, Clone)]
pub struct Entry {
    scalars: HashMap<&'static str, String>,
    lists: HashMap<&'static str, Vec<Option<String>>>,
}

impl Entry {
    pub(crate) fn from_record(record: &Element) -> Self {
        let mut scalars = HashMap::new();
        for &field in STR_FIELDS.iter() {
            if let Some(text) = record.child(field).and_then(|e| e.text.clone()) {
                scalars.insert(field, text);
            }
        }

        let mut lists = HashMap::new();
        for &field in LIST_FIELDS.iter() {
            if let Some(parent) = record.child(field) {
                let items = parent.children.iter().map(|c| c.text.clone()).collect();
                lists.insert(field, items);
            }
        }

        Self { scalars, lists }
    }

    /// The entry's identifying character. Empty for malformed records.
    pub fn kanji(&self) -> &str {
        self.scalar("kanji").unwrap_or("")
    }

    /// Text of a scalar field, if present and non-empty.
    pub fn scalar(&self, field: &str) -> Option<&str> {
        self.scalars.get(field).map(String::as_str)
    }

    /// Raw items of a list field, if the field element is present.
    pub fn list(&self, field: &str) -> Option<&[Option<String>]> {
        self.lists.get(field).map(Vec::as_slice)
    }

    /// Whether the entry carries any scalar data at all.
    pub fn has_data(&self) -> bool {
        !self.scalars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn entry(xml: &str) -> Entry {
        let dict = Dictionary::from_str(xml).unwrap();
        let mut matches = dict.exact("kanji", "口");
        assert_eq!(matches.len(), 1);
        matches.remove(0)
    }

    #[test]
    fn scalar_fields_snapshot_text() {
        let e = entry(
            "<dict><entry><kanji>口</kanji><english>mouth</english>\
             <rtk-index>11</rtk-index></entry></dict>",
        );
        assert_eq!(e.kanji(), "口");
        assert_eq!(e.scalar("english"), Some("mouth"));
        assert_eq!(e.scalar("rtk-index"), Some("11"));
    }

    #[test]
    fn missing_and_empty_fields_are_absent() {
        let e = entry("<dict><entry><kanji>口</kanji><english></english></entry></dict>");
        assert_eq!(e.scalar("english"), None);
        assert_eq!(e.scalar("keyword"), None);
        assert!(e.has_data());
    }

    #[test]
    fn list_fields_keep_raw_items_in_document_order() {
        let e = entry(
            "<dict><entry><kanji>口</kanji><examples>\
             <example>口紅</example><example>人口</example>\
             </examples></entry></dict>",
        );
        let items = e.list("examples").unwrap();
        assert_eq!(
            items,
            &[Some("口紅".to_string()), Some("人口".to_string())]
        );
    }

    #[test]
    fn textless_list_item_is_none() {
        let e = entry(
            "<dict><entry><kanji>口</kanji><components>\
             <component>一</component><component/>\
             </components></entry></dict>",
        );
        let items = e.list("components").unwrap();
        assert_eq!(items, &[Some("一".to_string()), None]);
    }
}
