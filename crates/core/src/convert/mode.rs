//! Conversion mode presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeedtextError;

/// A script-variant pair for Chinese conversion.
///
/// The presets follow the OpenCC naming convention: `s2t` is simplified to
/// traditional, `s2tw`/`s2hk` add the Taiwan/Hong Kong variant pass, and the
/// `t2*` modes run the other direction. [`ConversionMode::Off`] is the
/// identity and also absorbs unknown tokens from persisted preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Simplified to traditional.
    S2t,
    /// Simplified to traditional, Taiwan variants.
    S2tw,
    /// Simplified to traditional, Hong Kong variants.
    S2hk,
    /// Traditional to simplified.
    T2s,
    /// Traditional to Taiwan variants.
    T2tw,
    /// Traditional to Hong Kong variants.
    T2hk,
    /// No script conversion. Custom rules still apply. Kept last: it also
    /// absorbs unknown tokens on deserialization.
    #[serde(other)]
    Off,
}

/// One embedded mapping table, applied as a round of forward maximum
/// matching. Non-`Off` modes name an ordered chain of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingTableId {
    /// Simplified to traditional (phrases + characters).
    St,
    /// Traditional to simplified (phrases + characters).
    Ts,
    /// Taiwan variant normalization.
    Tw,
    /// Hong Kong variant normalization.
    Hk,
}

impl ConversionMode {
    pub const ALL: [ConversionMode; 7] = [
        Self::S2t,
        Self::S2tw,
        Self::S2hk,
        Self::T2s,
        Self::T2tw,
        Self::T2hk,
        Self::Off,
    ];

    /// The stable lowercase token for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::S2t => "s2t",
            Self::S2tw => "s2tw",
            Self::S2hk => "s2hk",
            Self::T2s => "t2s",
            Self::T2tw => "t2tw",
            Self::T2hk => "t2hk",
        }
    }

    /// Lenient label parsing for persisted preferences.
    ///
    /// Unknown or empty labels map to [`ConversionMode::Off`] rather than an
    /// error, so preferences written before a schema change degrade to the
    /// identity instead of failing to load.
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label).unwrap_or(Self::Off)
    }

    /// The ordered chain of mapping tables this mode applies, empty for
    /// [`ConversionMode::Off`].
    pub fn table_chain(&self) -> &'static [MappingTableId] {
        match self {
            Self::Off => &[],
            Self::S2t => &[MappingTableId::St],
            Self::S2tw => &[MappingTableId::St, MappingTableId::Tw],
            Self::S2hk => &[MappingTableId::St, MappingTableId::Hk],
            Self::T2s => &[MappingTableId::Ts],
            Self::T2tw => &[MappingTableId::Tw],
            Self::T2hk => &[MappingTableId::Hk],
        }
    }

    /// Index into the converter's memoization slots; `None` for `Off`.
    pub(crate) fn slot_index(&self) -> Option<usize> {
        match self {
            Self::Off => None,
            Self::S2t => Some(0),
            Self::S2tw => Some(1),
            Self::S2hk => Some(2),
            Self::T2s => Some(3),
            Self::T2tw => Some(4),
            Self::T2hk => Some(5),
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strict label parsing. Used by the CLI, where a typo must not silently
/// disable conversion; library callers reading persisted preferences should
/// prefer [`ConversionMode::from_label`].
impl FromStr for ConversionMode {
    type Err = FeedtextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "s2t" => Ok(Self::S2t),
            "s2tw" => Ok(Self::S2tw),
            "s2hk" => Ok(Self::S2hk),
            "t2s" => Ok(Self::T2s),
            "t2tw" => Ok(Self::T2tw),
            "t2hk" => Ok(Self::T2hk),
            _ => Err(FeedtextError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for mode in ConversionMode::ALL {
            assert_eq!(ConversionMode::from_label(mode.label()), mode);
        }
    }

    #[test]
    fn test_from_label_lenient_on_unknown() {
        assert_eq!(ConversionMode::from_label("s2x"), ConversionMode::Off);
        assert_eq!(ConversionMode::from_label(""), ConversionMode::Off);
        assert_eq!(ConversionMode::from_label("S2TW"), ConversionMode::S2tw);
    }

    #[test]
    fn test_from_str_strict_on_unknown() {
        assert!(matches!(
            "s2x".parse::<ConversionMode>(),
            Err(FeedtextError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_table_chains() {
        assert!(ConversionMode::Off.table_chain().is_empty());
        assert_eq!(
            ConversionMode::S2tw.table_chain(),
            &[MappingTableId::St, MappingTableId::Tw]
        );
        assert_eq!(ConversionMode::T2s.table_chain(), &[MappingTableId::Ts]);
    }

    #[test]
    fn test_slot_indices_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for mode in ConversionMode::ALL {
            if let Some(idx) = mode.slot_index() {
                assert!(seen.insert(idx));
            }
        }
        assert_eq!(seen.len(), ConversionMode::ALL.len() - 1);
    }

    #[test]
    fn test_serde_unknown_token_deserializes_to_off() {
        let mode: ConversionMode = serde_json::from_str("\"t2sp\"").unwrap();
        assert_eq!(mode, ConversionMode::Off);

        let json = serde_json::to_string(&ConversionMode::S2hk).unwrap();
        assert_eq!(json, "\"s2hk\"");
    }

    #[test]
    fn test_serde_roundtrip_every_mode() {
        for mode in ConversionMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.label()));
            assert_eq!(serde_json::from_str::<ConversionMode>(&json).unwrap(), mode);
        }
    }
}
