//! Read-only inspection of the key material backing the service.

use crate::{
    DocumentCipher, ENCRYPTION_KEY_FILE, EncryptionKey, JwtIssuer, JwtValidator, KeyFile,
    SIGNING_KEY_FILE, SigningSecret,
};

use pc_core::Identity;

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

const SELF_TEST_PLAINTEXT: &[u8] = b"preference-center self test";
const SELF_TEST_IDENTITY: &str = "audit@localhost";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Warning,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub timestamp: DateTime<Utc>,
    pub keys_dir: String,
    pub checks: Vec<AuditCheck>,
}

impl AuditReport {
    /// True unless some check failed outright (warnings do not fail the audit)
    pub fn passed(&self) -> bool {
        self.checks
            .iter()
            .all(|check| check.status != CheckStatus::Failed)
    }
}

/// Audits key files and exercises the primitives built from them.
///
/// Never generates or rewrites keys.
pub struct KeyAudit<'a> {
    keys_dir: &'a Path,
    configured_secret: Option<&'a str>,
    configured_key: Option<&'a str>,
    checks: Vec<AuditCheck>,
}

impl<'a> KeyAudit<'a> {
    pub fn new(
        keys_dir: &'a Path,
        configured_secret: Option<&'a str>,
        configured_key: Option<&'a str>,
    ) -> Self {
        Self {
            keys_dir,
            configured_secret,
            configured_key,
            checks: Vec::new(),
        }
    }

    pub fn run(mut self) -> AuditReport {
        let signing_file = KeyFile::new(self.keys_dir, SIGNING_KEY_FILE);
        let encryption_file = KeyFile::new(self.keys_dir, ENCRYPTION_KEY_FILE);

        self.check_presence("signing_key", &signing_file, self.configured_secret.is_some());
        self.check_presence(
            "encryption_key",
            &encryption_file,
            self.configured_key.is_some(),
        );

        #[cfg(unix)]
        for file in [&signing_file, &encryption_file] {
            self.check_permissions(file);
        }

        let secret = match self.configured_secret {
            Some(secret) => SigningSecret::new(secret).map_err(|e| e.to_string()),
            None => Self::stored(&signing_file)
                .and_then(|stored| SigningSecret::new(&stored).map_err(|e| e.to_string())),
        };
        self.check_signing(secret);

        let key = match self.configured_key {
            Some(key) => EncryptionKey::from_base64(key).map_err(|e| e.to_string()),
            None => Self::stored(&encryption_file)
                .and_then(|stored| EncryptionKey::from_base64(&stored).map_err(|e| e.to_string())),
        };
        self.check_encryption(key);

        AuditReport {
            timestamp: Utc::now(),
            keys_dir: self.keys_dir.display().to_string(),
            checks: self.checks,
        }
    }

    fn stored(file: &KeyFile) -> Result<String, String> {
        match file.read() {
            Ok(Some(stored)) => Ok(stored.to_string()),
            Ok(None) => Err(format!("{} does not exist", file.path().display())),
            Err(e) => Err(e.to_string()),
        }
    }

    fn check_presence(&mut self, name: &str, file: &KeyFile, configured: bool) {
        let (status, message) = if configured {
            (CheckStatus::Passed, "provided by configuration".to_string())
        } else if file.exists() {
            (
                CheckStatus::Passed,
                format!("present at {}", file.path().display()),
            )
        } else {
            (
                CheckStatus::Failed,
                format!("missing: {}", file.path().display()),
            )
        };
        self.push(name.to_string(), status, message);
    }

    #[cfg(unix)]
    fn check_permissions(&mut self, file: &KeyFile) {
        if !file.exists() {
            return;
        }

        let name = format!(
            "permissions_{}",
            file.path()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        );

        match file.mode() {
            Ok(0o600) => self.push(name, CheckStatus::Passed, "file permissions: 0o600".into()),
            Ok(mode) => self.push(
                name,
                CheckStatus::Warning,
                format!("file permissions: {mode:#o} (expected 0o600)"),
            ),
            Err(e) => self.push(name, CheckStatus::Failed, e.to_string()),
        }
    }

    fn check_signing(&mut self, secret: Result<SigningSecret, String>) {
        let outcome = secret.and_then(|secret| {
            let identity = Identity::parse(SELF_TEST_IDENTITY).map_err(|e| e.to_string())?;
            let issuer = JwtIssuer::with_hs256(secret.as_bytes(), Duration::minutes(1));
            let validator = JwtValidator::with_hs256(secret.as_bytes(), 0);
            let token = issuer.issue(&identity).map_err(|e| e.to_string())?;
            let verified = validator.verify(&token).map_err(|e| e.to_string())?;
            if verified == identity {
                Ok(())
            } else {
                Err("verified identity does not match issued identity".to_string())
            }
        });

        match outcome {
            Ok(()) => self.push(
                "signing_test".into(),
                CheckStatus::Passed,
                "token issue/verify round trip succeeded".into(),
            ),
            Err(message) => self.push("signing_test".into(), CheckStatus::Failed, message),
        }
    }

    fn check_encryption(&mut self, key: Result<EncryptionKey, String>) {
        let outcome = key.and_then(|key| {
            let cipher = DocumentCipher::new(&key).map_err(|e| e.to_string())?;
            let sealed = cipher
                .encrypt(SELF_TEST_PLAINTEXT)
                .map_err(|e| e.to_string())?;
            let opened = cipher.decrypt(&sealed).map_err(|e| e.to_string())?;
            if opened == SELF_TEST_PLAINTEXT {
                Ok(())
            } else {
                Err("decrypted text does not match".to_string())
            }
        });

        match outcome {
            Ok(()) => self.push(
                "encryption_test".into(),
                CheckStatus::Passed,
                "encryption/decryption round trip succeeded".into(),
            ),
            Err(message) => self.push("encryption_test".into(), CheckStatus::Failed, message),
        }
    }

    fn push(&mut self, name: String, status: CheckStatus, message: String) {
        self.checks.push(AuditCheck {
            name,
            status,
            message,
        });
    }
}
