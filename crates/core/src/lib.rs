pub mod classify;
pub mod convert;
pub mod entry;
pub mod error;
pub mod language;

pub use classify::{classify_code, format_for_language};
pub use convert::ScriptConverter;
pub use convert::mode::{ConversionMode, MappingTableId};
pub use convert::rules::{CustomRule, has_effective_rules, normalize_rules, parse_rules_json, rules_fingerprint};
pub use entry::FeedEntry;
pub use error::{FeedtextError, Result};
pub use language::LanguageTag;
