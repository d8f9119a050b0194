//! The closed set of language tags the classifier can produce.
//!
//! [`LanguageTag`] is the currency between the classifier and an external
//! syntax-highlighting engine: a small, fixed vocabulary of grammar names.
//! [`LanguageTag::Text`] is the universal fallback and always a valid result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A syntax-highlighting grammar tag.
///
/// The set is closed: free-form labels from feed content (`py`, `yml`,
/// `language-rust`, ...) are folded onto it via [`LanguageTag::from_hint`],
/// and anything unrecognized becomes [`LanguageTag::Text`] rather than an
/// error. Deserialization follows the same rule so that persisted
/// preferences written before a schema change still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Json,
    Yaml,
    Toml,
    Sql,
    Html,
    Xml,
    Css,
    Bash,
    Python,
    Rust,
    Go,
    Cpp,
    Java,
    Kotlin,
    Swift,
    Javascript,
    Typescript,
    Jsx,
    Tsx,
    Markdown,
    /// Universal fallback; also absorbs unknown tokens on deserialization.
    #[serde(other)]
    Text,
}

impl LanguageTag {
    /// The canonical lowercase token for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Sql => "sql",
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Css => "css",
            Self::Bash => "bash",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Kotlin => "kotlin",
            Self::Swift => "swift",
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Jsx => "jsx",
            Self::Tsx => "tsx",
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }

    /// Normalizes a raw language label onto the canonical tag set.
    ///
    /// Accepts the aliases commonly seen in feed markup (`js`, `ts`, `py`,
    /// `sh`, `yml`, ...) and `language-`/`lang-` prefixed class tokens.
    /// Unrecognized input maps to [`LanguageTag::Text`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use feedtext_core::LanguageTag;
    ///
    /// assert_eq!(LanguageTag::from_hint("language-py"), LanguageTag::Python);
    /// assert_eq!(LanguageTag::from_hint("YML"), LanguageTag::Yaml);
    /// assert_eq!(LanguageTag::from_hint("brainfuck"), LanguageTag::Text);
    /// ```
    pub fn from_hint(hint: &str) -> Self {
        let token = hint.trim().to_lowercase();
        let token = token
            .strip_prefix("language-")
            .or_else(|| token.strip_prefix("lang-"))
            .unwrap_or(&token);

        match token {
            "json" | "jsonc" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            "toml" => Self::Toml,
            "sql" | "mysql" | "postgresql" | "sqlite" => Self::Sql,
            "html" | "htm" | "xhtml" => Self::Html,
            "xml" | "svg" | "rss" | "atom" => Self::Xml,
            "css" | "scss" | "less" => Self::Css,
            "bash" | "sh" | "shell" | "zsh" | "fish" | "console" => Self::Bash,
            "python" | "py" | "python3" => Self::Python,
            "rust" | "rs" => Self::Rust,
            "go" | "golang" => Self::Go,
            "cpp" | "c++" | "cxx" | "cc" | "c" | "h" | "hpp" => Self::Cpp,
            "java" => Self::Java,
            "kotlin" | "kt" | "kts" => Self::Kotlin,
            "swift" => Self::Swift,
            "javascript" | "js" | "mjs" | "cjs" | "node" => Self::Javascript,
            "typescript" | "ts" | "mts" => Self::Typescript,
            "jsx" => Self::Jsx,
            "tsx" => Self::Tsx,
            "markdown" | "md" | "mdown" => Self::Markdown,
            _ => Self::Text,
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
