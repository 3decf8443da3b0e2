use super::placeholder::replace_placeholders;
use ahash::AHashMap;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// A run of non-whitespace characters ending in `.jar` or `.hql`.
static RESOURCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S*\.(jar|hql)").unwrap());

/// A task command after resource extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    /// The command text with every resource match rewritten.
    pub command: String,
    /// The resolved resource reference, or empty when the command names none.
    pub resource: String,
}

/// Scans a task command for an embedded resource-file reference.
///
/// The first match has its `${key}` placeholders resolved against the flow's
/// scope configuration, and that substituted value replaces every match of the
/// pattern in the command. Only the first match feeds the substitution even
/// though the replacement is pattern-wide.
pub fn extract_resource(
    command: &str,
    scope_config: &AHashMap<String, String>,
) -> ResolvedCommand {
    match RESOURCE.find(command) {
        None => ResolvedCommand {
            command: command.to_string(),
            resource: String::new(),
        },
        Some(matched) => {
            let resource = replace_placeholders(matched.as_str(), scope_config);
            let command = RESOURCE
                .replace_all(command, NoExpand(resource.as_str()))
                .into_owned();
            ResolvedCommand { command, resource }
        }
    }
}
