use crate::document::GlobalParam;
use crate::error::ConvertError;
use ahash::AHashMap;
use itertools::Itertools;

/// Configuration keys consumed by the converter itself; everything else in a
/// flow's scope becomes a global parameter on the output document.
const RESERVED_KEYS: [&str; 3] = ["project.name", "retry.backoff", "retries"];

const RETRIES_KEY: &str = "retries";
const RETRY_BACKOFF_KEY: &str = "retry.backoff";

/// The retry policy resolved from a flow's scope configuration. It applies
/// uniformly to every task produced from that flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Raw retry count, passed through as an opaque string.
    pub max_retry_times: String,
    /// Retry interval in whole minutes, bucketized to "1", "10" or "30".
    pub retry_interval: String,
}

/// Derives the flow-scoped retry policy.
///
/// The retry count defaults to `"0"` and is never validated numerically. The
/// backoff is read in milliseconds and bucketized to a minute granularity the
/// target scheduler accepts; an absent or blank value passes through
/// unprocessed, a non-numeric one is a hard error.
pub fn resolve_retry(scope_config: &AHashMap<String, String>) -> Result<RetryPolicy, ConvertError> {
    let max_retry_times = scope_config
        .get(RETRIES_KEY)
        .cloned()
        .unwrap_or_else(|| "0".to_string());

    let retry_interval = match scope_config.get(RETRY_BACKOFF_KEY) {
        None => "0".to_string(),
        Some(raw) if raw.trim().is_empty() => raw.clone(),
        Some(raw) => {
            let millis: i64 =
                raw.trim()
                    .parse()
                    .map_err(|_| ConvertError::InvalidRetryConfig {
                        value: raw.clone(),
                    })?;
            bucketize_minutes(millis / 1000 / 60).to_string()
        }
    };

    Ok(RetryPolicy {
        max_retry_times,
        retry_interval,
    })
}

fn bucketize_minutes(minutes: i64) -> &'static str {
    if minutes <= 1 {
        "1"
    } else if minutes <= 10 {
        "10"
    } else {
        "30"
    }
}

/// Publishes every non-reserved scope entry as a named text input parameter.
/// Emission order is sorted by key so output is deterministic.
pub fn global_params(scope_config: &AHashMap<String, String>) -> Vec<GlobalParam> {
    scope_config
        .iter()
        .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(key, value)| GlobalParam {
            prop: key.clone(),
            direct: "IN".to_string(),
            param_type: "VARCHAR".to_string(),
            value: value.clone(),
        })
        .collect()
}

/// Merges a parent flow's scope configuration into a promoted child's local
/// configuration. Parent entries win on key collision; this precedence is the
/// inheritance rule promoted subflows rely on. The merge is total,
/// deterministic and idempotent, and never mutates the parent.
pub fn merge_scope_into(
    child: AHashMap<String, String>,
    parent: &AHashMap<String, String>,
) -> AHashMap<String, String> {
    let mut merged = child;
    for (key, value) in parent {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
