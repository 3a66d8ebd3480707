use serde::{Deserialize, Serialize};

/// Body of the one-shot webhook call made after archive retries are
/// exhausted: the raw order payload wrapped with an explanatory error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationNotice {
    pub error: String,
    pub order_id: i64,
    pub payload: String,
}
