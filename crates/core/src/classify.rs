//! Heuristic code-language classification.
//!
//! [`classify_code`] maps an arbitrary text blob (pasted code, a code fence
//! with no declared language) onto one [`LanguageTag`] so the caller can pick
//! a syntax-highlighting grammar. It is an ordered cascade of predicates:
//! signals that are syntactically unambiguous (a valid JSON document, Rust's
//! `::` paths, shebangs) are checked before signals that are common across
//! many languages (bare braces, colons, brackets). The first rule whose
//! predicate matches wins.
//!
//! This is a heuristic classifier, not a parser. Accuracy on adversarial or
//! minified input is not guaranteed; the function is only required to be
//! total and deterministic, with [`LanguageTag::Text`] as the fallback.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::language::LanguageTag;

type Predicate = fn(&str) -> bool;

/// The classification cascade, in priority order.
///
/// Kept as a flat table rather than dispatch so that precedence stays
/// auditable and each predicate can be unit-tested on its own.
const CLASSIFIER_RULES: &[(LanguageTag, Predicate)] = &[
    (LanguageTag::Json, is_json_document),
    (LanguageTag::Rust, has_rust_shape),
    (LanguageTag::Tsx, has_tsx_shape),
    (LanguageTag::Jsx, has_jsx_shape),
    (LanguageTag::Typescript, has_typescript_shape),
    (LanguageTag::Bash, has_bash_shape),
    (LanguageTag::Xml, has_xml_prolog),
    (LanguageTag::Html, has_tag_pair),
    (LanguageTag::Css, has_css_rule),
    (LanguageTag::Sql, has_sql_statement),
    (LanguageTag::Toml, has_toml_shape),
    (LanguageTag::Yaml, has_yaml_shape),
    (LanguageTag::Go, has_go_shape),
    (LanguageTag::Cpp, has_cpp_shape),
    (LanguageTag::Java, has_java_shape),
    (LanguageTag::Kotlin, has_kotlin_shape),
    (LanguageTag::Swift, has_swift_shape),
    (LanguageTag::Python, has_python_shape),
    (LanguageTag::Markdown, has_markdown_shape),
    (LanguageTag::Javascript, has_javascript_shape),
];

/// Guesses the programming language of a code snippet.
///
/// Total over every input: empty and whitespace-only strings, binary noise,
/// and prose all map to [`LanguageTag::Text`] rather than failing.
///
/// # Example
///
/// ```rust
/// use feedtext_core::{LanguageTag, classify_code};
///
/// assert_eq!(classify_code(r#"{"a": 1}"#), LanguageTag::Json);
/// assert_eq!(classify_code("SELECT id FROM t;"), LanguageTag::Sql);
/// assert_eq!(classify_code(""), LanguageTag::Text);
/// ```
pub fn classify_code(code: &str) -> LanguageTag {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return LanguageTag::Text;
    }

    for (tag, predicate) in CLASSIFIER_RULES {
        if predicate(trimmed) {
            return *tag;
        }
    }

    LanguageTag::Text
}

/// Pretty-prints a snippet when it is JSON; returns it unchanged otherwise.
///
/// Only `tag == Json` triggers reformatting (stable 2-space indentation via
/// serde_json). Malformed JSON is returned verbatim; the function never
/// fails.
pub fn format_for_language(code: &str, tag: LanguageTag) -> String {
    if tag != LanguageTag::Json {
        return code.to_string();
    }

    match serde_json::from_str::<Value>(code) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| code.to_string()),
        Err(_) => code.to_string(),
    }
}

/// Strict structural JSON check: a full parse, object or array root only.
fn is_json_document(s: &str) -> bool {
    if !s.starts_with('{') && !s.starts_with('[') {
        return false;
    }
    matches!(serde_json::from_str::<Value>(s), Ok(Value::Object(_)) | Ok(Value::Array(_)))
}

static RUST_USE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*use\s+[A-Za-z_][A-Za-z0-9_]*(::|\s*;)").unwrap());
static RUST_FN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfn\s+[A-Za-z_][A-Za-z0-9_]*\s*(<[^>]*>\s*)?\(").unwrap());
static RUST_IMPL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bimpl(\s*<[^>]*>)?\s+[A-Za-z_]").unwrap());
static RUST_PUB_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bpub\s+(struct|enum|fn|trait|mod|use|const|static)\b").unwrap());
static RUST_LET_MUT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\blet\s+mut\s+[A-Za-z_]").unwrap());
static RUST_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*::[A-Za-z_]|::<|>::").unwrap());

/// Rust signals. Deliberately checked before the TypeScript shapes: `::`
/// paths and turbofish-adjacent generics read as type annotations otherwise.
fn has_rust_shape(s: &str) -> bool {
    RUST_USE.is_match(s)
        || RUST_FN.is_match(s)
        || RUST_IMPL.is_match(s)
        || RUST_PUB_ITEM.is_match(s)
        || RUST_LET_MUT.is_match(s)
        || RUST_PATH.is_match(s)
}

static JSX_COMPONENT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Z][A-Za-z0-9]*\s+[A-Za-z_][^<>]*/?>|<[A-Z][A-Za-z0-9]*\s*/>").unwrap());
static JSX_CLOSE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</[A-Z][A-Za-z0-9]*>").unwrap());
static JSX_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<>.*</>").unwrap());
static JSX_RETURNED_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(return|=>)\s*\(?\s*<[A-Za-z]").unwrap());

fn has_jsx_shape(s: &str) -> bool {
    JSX_COMPONENT_TAG.is_match(s)
        || JSX_CLOSE_TAG.is_match(s)
        || JSX_FRAGMENT.is_match(s)
        || JSX_RETURNED_ELEMENT.is_match(s)
}

static TS_INTERFACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(export\s+)?interface\s+[A-Z]").unwrap());
static TS_TYPE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(export\s+)?type\s+[A-Za-z_][A-Za-z0-9_]*(<[^>]*>)?\s*=").unwrap());
static TS_ENUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(const\s+)?enum\s+[A-Z]").unwrap());
static TS_KEYWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(implements|readonly)\b").unwrap());
static TS_BINDING_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(let|const|var)\s+[A-Za-z_]\w*\s*:\s*[A-Za-z_]").unwrap());
static TS_PARAM_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(,]\s*[A-Za-z_]\w*\s*:\s*[A-Za-z_][\w.<>\[\], ]*").unwrap());
static TS_DESTRUCTURED_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\}\s*:\s*[A-Z]\w*").unwrap());
static TS_RETURN_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)\s*:\s*[A-Za-z_][\w<>\[\], ]*\s*(\{|=>|;)").unwrap());
static TS_AS_CAST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bas\s+[A-Z][A-Za-z0-9_]*").unwrap());
static PYTHON_DEF_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*def\s+\w+\s*\(").unwrap());

/// TypeScript signals, guarded against the two languages whose surface
/// syntax overlaps them: a full Java shape (`interface`, `enum`,
/// `implements`) and annotated Python parameters (`def f(x: int):`), both of
/// which belong to later rules.
fn has_typescript_shape(s: &str) -> bool {
    if has_java_shape(s) || PYTHON_DEF_LINE.is_match(s) {
        return false;
    }

    TS_INTERFACE.is_match(s)
        || TS_TYPE_DECL.is_match(s)
        || TS_ENUM.is_match(s)
        || TS_KEYWORD.is_match(s)
        || TS_BINDING_ANNOTATION.is_match(s)
        || TS_PARAM_ANNOTATION.is_match(s)
        || TS_DESTRUCTURED_ANNOTATION.is_match(s)
        || TS_RETURN_ANNOTATION.is_match(s)
        || TS_AS_CAST.is_match(s)
}

fn has_tsx_shape(s: &str) -> bool {
    has_jsx_shape(s) && has_typescript_shape(s)
}

static SHELL_SHEBANG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#!.*\b(bash|zsh|dash|ksh|fish|sh)\b").unwrap());
static SHELL_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*export\s+[A-Za-z_][A-Za-z0-9_]*=").unwrap());
static SHELL_COMMAND_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(cd|ls|pwd|cat|grep|find|curl|wget|chmod|chown|sudo)\b").unwrap());

fn has_bash_shape(s: &str) -> bool {
    SHELL_SHEBANG.is_match(s)
        || SHELL_EXPORT.is_match(s)
        || SHELL_COMMAND_LINE.find_iter(s).count() >= 2
}

fn has_xml_prolog(s: &str) -> bool {
    s.starts_with("<?xml")
}

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([A-Za-z][A-Za-z0-9]*)[\s>]").unwrap());

/// A generic open/close tag pair, case-insensitive. The regex crate has no
/// backreferences, so the close tag is matched with a substring scan.
fn has_tag_pair(s: &str) -> bool {
    let lowered = s.to_lowercase();
    OPEN_TAG.captures_iter(&lowered).any(|cap| {
        let close = format!("</{}", &cap[1]);
        lowered.contains(&close)
    })
}

static CSS_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*[.#]?[A-Za-z*][A-Za-z0-9_\-\s.#:,>~\[\]'"]*\{\s*[a-zA-Z-]+\s*:\s*[^;{}]+[;}]"#).unwrap()
});
static TYPE_DECL_BRACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(struct|enum|trait|union|impl|class|interface|protocol|type|object)\s+[A-Za-z_]\w*\s*(<[^>]*>)?\s*\{")
        .unwrap()
});

/// A `selector { property: value }` shaped line. Type declarations
/// (`struct Name { x: u32 }` and friends) fit the same shape and are
/// excluded here because later rules own them.
fn has_css_rule(s: &str) -> bool {
    CSS_RULE.is_match(s) && !TYPE_DECL_BRACE.is_match(s)
}

static SQL_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(insert\s+into|delete\s+from|create\s+table|alter\s+table|drop\s+table)\b").unwrap()
});
static SQL_SELECT_FROM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)\bselect\b.+\bfrom\b").unwrap());
static SQL_UPDATE_SET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)\bupdate\b.+\bset\b").unwrap());

/// SQL keywords. The single-word keywords `select` and `update` are anchored
/// to their companion clause so that prose and YAML (`update: true`) do not
/// match.
fn has_sql_statement(s: &str) -> bool {
    SQL_PHRASE.is_match(s) || SQL_SELECT_FROM.is_match(s) || SQL_UPDATE_SET.is_match(s)
}

static TOML_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^\s*\[[A-Za-z0-9_."'\-\s]+\]\s*$"#).unwrap());
static TOML_KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*[A-Za-z0-9_\-.]+\s*=\s*\S").unwrap());

fn has_toml_shape(s: &str) -> bool {
    TOML_SECTION.is_match(s) || TOML_KEY_VALUE.find_iter(s).count() >= 2
}

static YAML_KEY_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*[A-Za-z0-9_\-]+:\s+\S").unwrap());
static CODE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(function|class|const|let|var)\b").unwrap());

fn has_yaml_shape(s: &str) -> bool {
    if s.starts_with("---") {
        return true;
    }
    YAML_KEY_LINE.find_iter(s).count() >= 2
        && !s.contains(['{', '}', '(', ')', ';'])
        && !CODE_KEYWORD.is_match(s)
}

static GO_PACKAGE_MAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*package\s+main\b").unwrap());
static GO_FUNC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfunc\s+[A-Za-z_]\w*\s*\([^)]*\)[^{\n]*\{").unwrap());

fn has_go_shape(s: &str) -> bool {
    GO_PACKAGE_MAIN.is_match(s) || GO_FUNC.is_match(s)
}

static CPP_INCLUDE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?m)^\s*#\s*include\s*[<"]"#).unwrap());
static CPP_STD_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bstd::\w+").unwrap());
static CPP_INT_MAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bint\s+main\s*\(").unwrap());

fn has_cpp_shape(s: &str) -> bool {
    CPP_INCLUDE.is_match(s) || CPP_STD_PATH.is_match(s) || CPP_INT_MAIN.is_match(s)
}

static JAVA_IMPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*import\s+[a-z][\w.]*\s*;").unwrap());
static JAVA_TYPE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(class|interface|enum)\s+[A-Z]\w*").unwrap());
static JAVA_MAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"public\s+static\s+void\s+main\s*\(").unwrap());

/// Java needs all three signals; any one alone is too common elsewhere.
fn has_java_shape(s: &str) -> bool {
    JAVA_IMPORT.is_match(s) && JAVA_TYPE_DECL.is_match(s) && JAVA_MAIN.is_match(s)
}

static KOTLIN_FUN_MAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bfun\s+main\s*\(").unwrap());
static KOTLIN_DATA_CLASS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bdata\s+class\s+[A-Z]").unwrap());
static KOTLIN_VAL_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*(val|var)\s+[A-Za-z_]").unwrap());

fn has_kotlin_shape(s: &str) -> bool {
    KOTLIN_FUN_MAIN.is_match(s) || KOTLIN_DATA_CLASS.is_match(s) || KOTLIN_VAL_VAR.is_match(s)
}

static SWIFT_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*import\s+(Foundation|UIKit|SwiftUI|AppKit|Combine)\b").unwrap());
static SWIFT_TYPE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(struct|protocol|extension)\s+[A-Z]\w*").unwrap());
static SWIFT_FUNC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bfunc\s+\w+\s*\(").unwrap());

fn has_swift_shape(s: &str) -> bool {
    SWIFT_IMPORT.is_match(s) || SWIFT_TYPE_DECL.is_match(s) || SWIFT_FUNC.is_match(s)
}

static PYTHON_FROM_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*from\s+[\w.]+\s+import\s+\w").unwrap());
static PYTHON_BARE_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*import\s+[a-z_][\w.]*(\s*,\s*[\w.]+)*\s*$").unwrap());
static PYTHON_DEF_OR_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(def|class)\s+\w+\s*(\([^)]*\))?\s*:").unwrap());

fn has_python_shape(s: &str) -> bool {
    PYTHON_FROM_IMPORT.is_match(s) || PYTHON_BARE_IMPORT.is_match(s) || PYTHON_DEF_OR_CLASS.is_match(s)
}

static MARKDOWN_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^```[A-Za-z0-9_+\-]*\s*$").unwrap());
static MARKDOWN_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+\S").unwrap());

fn has_markdown_shape(s: &str) -> bool {
    MARKDOWN_FENCE.is_match(s) || MARKDOWN_HEADING.is_match(s)
}

static JS_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(function|const|let|var|return|async|await)\b").unwrap());
static JS_CONSOLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"console\.\w+\s*\(").unwrap());

fn has_javascript_shape(s: &str) -> bool {
    JS_KEYWORD.is_match(s) || JS_CONSOLE.is_match(s) || s.contains("=>")
}
