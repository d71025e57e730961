//! Centralized constants for ji.
//!
//! All magic numbers, default strings, and the dictionary field tables live
//! here so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "ji";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Dictionary filename under the data directory.
pub const DICTIONARY_FILENAME: &str = "kanji_all.xml";

// --- CJK Unified Ideographs range ---

/// Exclusive lower bound of the kanji code-point range.
pub const KANJI_RANGE_LOW: u32 = 0x4E00;

/// Exclusive upper bound of the kanji code-point range.
pub const KANJI_RANGE_HIGH: u32 = 0x9FFF;

// --- Dictionary fields ---

/// Entry fields whose content is a single string.
pub const STR_FIELDS: [&str; 19] = [
    "kanji",
    "kunyomi",
    "onyomi",
    "nanori",
    "english",
    "jlpt-level",
    "jouyou-grade",
    "frequency",
    "number-of-strokes",
    "kanji-radical",
    "radical-number",
    "radical-strokes",
    "radical-reading",
    "traditional-form",
    "classification",
    "keyword",
    "koohii-story-1",
    "koohii-story-2",
    "rtk-index",
];

/// Entry fields whose content is a list of strings.
pub const LIST_FIELDS: [&str; 2] = ["examples", "components"];

// --- Output formats ---

/// Default output separator between formatted entries.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Template used by `--only-kanji`.
pub const ONLY_KANJI_FORMAT: &str = "{kanji}";

/// Template used by `--minimal`.
pub const MINIMAL_FORMAT: &str = "{kanji} {english}";

/// Default output template: a small information card per entry.
pub const DEFAULT_FORMAT: &str = "{kanji}\n\
{english} [{keyword}]\n\
Kun: {kunyomi}\n\
On: {onyomi}\n\
JLPT N{jlpt-level}, Jouyou: {jouyou-grade}, \
Freq.: {frequency}, Heisig: {rtk-index}, \
Strokes: {number-of-strokes}\n";

/// Help footer listing every placeholder usable in `--format`.
pub const PLACEHOLDER_HELP: &str = "Available placeholders: \
{kanji} {kunyomi} {onyomi} {nanori} {english} {jlpt-level} {jouyou-grade} \
{frequency} {number-of-strokes} {kanji-radical} {radical-number} \
{radical-strokes} {radical-reading} {traditional-form} {classification} \
{keyword} {koohii-story-1} {koohii-story-2} {rtk-index} {examples} {components}";
