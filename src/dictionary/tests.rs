use super::*;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<kanji-dictionary>
  <entry>
    <kanji>日</kanji>
    <english>day</english>
    <keyword>day</keyword>
    <jlpt-level>5</jlpt-level>
    <jouyou-grade>1</jouyou-grade>
    <number-of-strokes>4</number-of-strokes>
    <rtk-index>12</rtk-index>
  </entry>
  <entry>
    <kanji>本</kanji>
    <english>book</english>
    <keyword>book</keyword>
    <jlpt-level>5</jlpt-level>
    <number-of-strokes>5</number-of-strokes>
    <rtk-index>224</rtk-index>
  </entry>
  <entry>
    <kanji>語</kanji>
    <english>language</english>
    <keyword>words</keyword>
    <jlpt-level>5</jlpt-level>
    <number-of-strokes>14</number-of-strokes>
    <rtk-index></rtk-index>
  </entry>
</kanji-dictionary>
"#;

fn sample() -> Dictionary {
    Dictionary::from_str(SAMPLE).unwrap()
}

#[test]
fn loads_all_records() {
    assert_eq!(sample().records.len(), 3);
}

#[test]
fn exact_requires_full_equality() {
    let dict = sample();
    let hits = dict.exact("keyword", "book");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kanji(), "本");
    // "wor" is a substring of "words" but not an exact match.
    assert!(dict.exact("keyword", "wor").is_empty());
}

#[test]
fn contains_is_superset_of_exact() {
    let dict = sample();
    assert_eq!(dict.contains("keyword", "wor").len(), 1);
    assert_eq!(dict.contains("keyword", "words").len(), 1);
    assert_eq!(dict.contains("keyword", "o").len(), 2);
}

#[test]
fn non_empty_skips_empty_and_absent_fields() {
    let dict = sample();
    // 語 has an empty rtk-index element; 日 and 本 have real values.
    let hits = dict.all_rtk_index();
    let kanji: Vec<&str> = hits.iter().map(Entry::kanji).collect();
    assert_eq!(kanji, vec!["日", "本"]);
    // nanori is absent everywhere.
    assert!(dict.non_empty("nanori").is_empty());
}

#[test]
fn numeric_wrappers_match_text_content() {
    let dict = sample();
    assert_eq!(dict.by_jlpt_level(5).len(), 3);
    assert_eq!(dict.by_jlpt_level(1).len(), 0);
    assert_eq!(dict.by_jouyou_grade(1).len(), 1);
    assert_eq!(dict.by_strokes(14).len(), 1);
    assert_eq!(dict.by_rtk_index(224)[0].kanji(), "本");
}

#[test]
fn by_kanji_returns_the_owning_entry() {
    let hits = sample().by_kanji("日");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].scalar("english"), Some("day"));
}

#[test]
fn one_entry_per_structural_match() {
    // A malformed record carrying the same field twice matches twice.
    let dict = Dictionary::from_str(
        "<dict><entry><kanji>口</kanji>\
         <keyword>mouth</keyword><keyword>mouth</keyword>\
         </entry></dict>",
    )
    .unwrap();
    assert_eq!(dict.exact("keyword", "mouth").len(), 2);
}

#[test]
fn open_fails_on_missing_file() {
    let err = Dictionary::open(Path::new("/nonexistent/kanji_all.xml"));
    assert!(matches!(err, Err(DictionaryError::Io(_))));
}

#[test]
fn from_str_fails_on_malformed_xml() {
    let err = Dictionary::from_str("<dict><entry><kanji>口</dict>");
    assert!(matches!(err, Err(DictionaryError::Xml(_))));
}
