use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One inbound message available for scanning. Immutable, externally supplied
/// (mock inbox today, a real mail integration later), read-only input to the
/// extraction adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSimulation {
    pub id: String,
    pub subject: String,
    pub sender: String,
    pub body: String,
    pub date: DateTime<Utc>,
}
