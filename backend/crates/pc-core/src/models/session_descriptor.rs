use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An active session belonging to an identity.
///
/// Session tracking is not wired up yet, so documents are always written
/// with an empty session list. The shape is kept so exported documents stay
/// stable once it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}
