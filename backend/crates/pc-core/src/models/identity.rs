use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Longest identity accepted.
///
/// Records are stored as `<identity>.json` and file names are capped at
/// 255 bytes on common filesystems.
pub const MAX_IDENTITY_LENGTH: usize = 250;

/// The owner of a preference document, embedded as `sub` in access tokens.
///
/// An identity doubles as a file name on disk, so construction rejects
/// anything that could step outside the users directory: path separators,
/// `..`, control characters and a leading dot. Surrounding whitespace is
/// trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    #[track_caller]
    pub fn parse(raw: &str) -> CoreErrorResult<Self> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(invalid("identity cannot be empty"));
        }
        if value.len() > MAX_IDENTITY_LENGTH {
            return Err(invalid(format!(
                "identity exceeds {MAX_IDENTITY_LENGTH} bytes"
            )));
        }
        if value.contains(['/', '\\']) {
            return Err(invalid("identity cannot contain path separators"));
        }
        if value.contains("..") {
            return Err(invalid("identity cannot contain '..'"));
        }
        if value.starts_with('.') {
            return Err(invalid("identity cannot start with '.'"));
        }
        if value.chars().any(char::is_control) {
            return Err(invalid("identity cannot contain control characters"));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[track_caller]
fn invalid<S: Into<String>>(message: S) -> CoreError {
    CoreError::InvalidIdentity {
        message: message.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}

impl FromStr for Identity {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identity {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreErrorResult<Self> {
        Self::parse(&value)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
