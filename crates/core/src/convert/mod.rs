//! Chinese script conversion for feed content.
//!
//! [`ScriptConverter`] is the subsystem's entry point: construct one at
//! startup and share it by reference. It owns the per-mode memoization
//! cache — building a mode's mapping parses every dictionary in its table
//! chain, so each mode is constructed at most once per process and never
//! invalidated (the tables are static).

pub mod mode;
pub mod rules;

mod html;
mod mapping;

use std::borrow::Cow;
use std::sync::OnceLock;

use crate::convert::mapping::ScriptMapping;
use crate::convert::mode::ConversionMode;
use crate::convert::rules::{CustomRule, apply_rules, has_effective_rules, normalize_rules};
use crate::entry::FeedEntry;

const MODE_SLOTS: usize = 6;

/// Stateless converter apart from the lazily populated mapping cache.
///
/// The cache is one immutable slot per non-`Off` mode: safe under
/// concurrent reads, idempotent on racing first use, and never rebuilt.
///
/// # Example
///
/// ```rust
/// use feedtext_core::{ConversionMode, ScriptConverter};
///
/// let converter = ScriptConverter::new();
/// let traditional = converter.convert_text("汉语测试", ConversionMode::S2t, &[]);
/// assert_eq!(traditional, "漢語測試");
/// ```
#[derive(Debug)]
pub struct ScriptConverter {
    slots: [OnceLock<ScriptMapping>; MODE_SLOTS],
}

impl ScriptConverter {
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| OnceLock::new()) }
    }

    fn mapping(&self, mode: ConversionMode) -> Option<&ScriptMapping> {
        let index = mode.slot_index()?;
        Some(self.slots[index].get_or_init(|| ScriptMapping::for_mode(mode)))
    }

    /// Converts plain text: script mapping first (skipped when `mode` is
    /// `Off`), then each custom rule in list order as global literal
    /// replacement.
    ///
    /// Fast path: with `Off` and no effective rules the input is returned
    /// unchanged.
    pub fn convert_text(&self, text: &str, mode: ConversionMode, rules: &[CustomRule]) -> String {
        let normalized = normalize_rules(rules);
        self.convert_text_normalized(text, mode, &normalized)
    }

    /// Rule-application core; `normalized` must already be trimmed.
    fn convert_text_normalized(&self, text: &str, mode: ConversionMode, normalized: &[CustomRule]) -> String {
        if mode == ConversionMode::Off && !has_effective_rules(normalized) {
            return text.to_string();
        }

        let converted = match self.mapping(mode) {
            Some(mapping) => mapping.apply(text),
            None => text.to_string(),
        };

        apply_rules(converted, normalized)
    }

    /// Converts text nodes inside an HTML string, preserving markup.
    ///
    /// Fast paths return the input byte-for-byte: empty input, or `Off`
    /// with no effective rules. Otherwise the HTML is parsed into an owned
    /// tree, every prose text node is rewritten through
    /// [`convert_text`](Self::convert_text), and the tree is serialized
    /// back. Text under `style`/`script`/`code`/`pre`/`textarea`/
    /// `noscript` is never touched.
    pub fn convert_html(&self, html: &str, mode: ConversionMode, rules: &[CustomRule]) -> String {
        if html.is_empty() {
            return String::new();
        }

        let normalized = normalize_rules(rules);
        if mode == ConversionMode::Off && !has_effective_rules(&normalized) {
            return html.to_string();
        }

        html::rewrite_text_nodes(html, |raw| self.convert_text_normalized(raw, mode, &normalized))
    }

    /// Converts the title (as text) and content (as HTML) of a feed entry.
    ///
    /// Returns `Cow::Borrowed(entry)` untouched when there is nothing to
    /// do, so callers can short-circuit on reference identity.
    pub fn convert_entry<'a>(
        &self, entry: &'a FeedEntry, mode: ConversionMode, rules: &[CustomRule],
    ) -> Cow<'a, FeedEntry> {
        let normalized = normalize_rules(rules);
        if mode == ConversionMode::Off && !has_effective_rules(&normalized) {
            return Cow::Borrowed(entry);
        }

        let mut converted = entry.clone();
        converted.title = self.convert_text_normalized(&entry.title, mode, &normalized);
        converted.content = entry
            .content
            .as_deref()
            .map(|html| html::rewrite_text_nodes(html, |raw| self.convert_text_normalized(raw, mode, &normalized)));

        Cow::Owned(converted)
    }
}

impl Default for ScriptConverter {
    fn default() -> Self {
        Self::new()
    }
}
