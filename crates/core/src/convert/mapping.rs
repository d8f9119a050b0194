//! Embedded script-mapping dictionaries.
//!
//! The tables are OpenCC-style tab-separated text compiled into the binary.
//! Conversion is forward maximum matching: at each position the longest
//! dictionary key wins, which lets phrase entries (頭髮, 乾淨, 這裡)
//! override the per-character defaults.

use std::collections::HashMap;

use crate::convert::mode::{ConversionMode, MappingTableId};

const ST_CHARACTERS: &str = include_str!("../data/st_characters.txt");
const ST_PHRASES: &str = include_str!("../data/st_phrases.txt");
const TS_CHARACTERS: &str = include_str!("../data/ts_characters.txt");
const TS_PHRASES: &str = include_str!("../data/ts_phrases.txt");
const TW_VARIANTS: &str = include_str!("../data/tw_variants.txt");
const HK_VARIANTS: &str = include_str!("../data/hk_variants.txt");

/// One parsed dictionary, applied as a single conversion round.
#[derive(Debug)]
pub struct MappingTable {
    entries: HashMap<String, String>,
    max_key_chars: usize,
}

impl MappingTable {
    /// Parses one or more dictionary sources into a single table.
    ///
    /// Lines are `from<TAB>to`; blank lines, `#` comments, and malformed
    /// lines are skipped. Earlier sources win on duplicate keys.
    fn from_sources(sources: &[&str]) -> Self {
        let mut entries = HashMap::new();
        let mut max_key_chars = 0;

        for source in sources {
            for line in source.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let Some((from, to)) = line.split_once('\t') else {
                    continue;
                };
                let (from, to) = (from.trim(), to.trim());
                if from.is_empty() || to.is_empty() {
                    continue;
                }
                if !entries.contains_key(from) {
                    max_key_chars = max_key_chars.max(from.chars().count());
                    entries.insert(from.to_string(), to.to_string());
                }
            }
        }

        Self { entries, max_key_chars }
    }

    fn for_id(id: MappingTableId) -> Self {
        match id {
            MappingTableId::St => Self::from_sources(&[ST_PHRASES, ST_CHARACTERS]),
            MappingTableId::Ts => Self::from_sources(&[TS_PHRASES, TS_CHARACTERS]),
            MappingTableId::Tw => Self::from_sources(&[TW_VARIANTS]),
            MappingTableId::Hk => Self::from_sources(&[HK_VARIANTS]),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts `text` with forward maximum matching. Characters with no
    /// dictionary entry are copied through unchanged.
    pub fn convert(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            // ASCII never appears as a key; skip the lookup entirely.
            if chars[i].is_ascii() {
                out.push(chars[i]);
                i += 1;
                continue;
            }

            let longest = self.max_key_chars.min(chars.len() - i);
            let mut matched = false;
            for len in (1..=longest).rev() {
                let candidate: String = chars[i..i + len].iter().collect();
                if let Some(to) = self.entries.get(&candidate) {
                    out.push_str(to);
                    i += len;
                    matched = true;
                    break;
                }
            }
            if !matched {
                out.push(chars[i]);
                i += 1;
            }
        }

        out
    }
}

/// The full table chain for one conversion mode.
///
/// Construction parses every dictionary in the chain, which is why the
/// converter memoizes one instance per mode for the process lifetime.
#[derive(Debug)]
pub struct ScriptMapping {
    rounds: Vec<MappingTable>,
}

impl ScriptMapping {
    pub fn for_mode(mode: ConversionMode) -> Self {
        let rounds = mode.table_chain().iter().map(|id| MappingTable::for_id(*id)).collect();
        Self { rounds }
    }

    /// Applies each round of the chain in order.
    pub fn apply(&self, text: &str) -> String {
        let mut converted = text.to_string();
        for round in &self.rounds {
            converted = round.convert(&converted);
        }
        converted
    }
}
