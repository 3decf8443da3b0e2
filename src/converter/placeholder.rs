use ahash::AHashMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Resolves `${key}` tokens in `text` against a flat key/value map.
///
/// Substitution is a single, non-recursive pass: a value containing further
/// `${...}` tokens is inserted verbatim, and a token whose key is absent from
/// the map is left as-is.
pub fn replace_placeholders(text: &str, values: &AHashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
