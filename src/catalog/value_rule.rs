use serde::{Deserialize, Serialize};

/// Declarative per-column value normalization applied before a dimension
/// predicate is sent to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueRule {
    Lowercase,
}

impl ValueRule {
    pub fn apply(&self, value: &str) -> String {
        match self {
            ValueRule::Lowercase => value.to_lowercase(),
        }
    }
}
