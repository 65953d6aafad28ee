use crate::{Identity, SessionDescriptor, UserPreferences};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full persisted record for one identity.
///
/// Replaced wholesale on every update; nothing is merged with the
/// previous version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub email: Identity,
    pub preferences: UserPreferences,
    pub last_access: DateTime<Utc>,
    pub last_consent_update: DateTime<Utc>,
    #[serde(default)]
    pub active_sessions: Vec<SessionDescriptor>,
}

impl UserData {
    /// Build a fresh record, stamping both timestamps with `now`
    pub fn new(email: Identity, preferences: UserPreferences, now: DateTime<Utc>) -> Self {
        Self {
            email,
            preferences,
            last_access: now,
            last_consent_update: now,
            active_sessions: Vec::new(),
        }
    }
}
