use crate::error::Result as ServerErrorResult;

use pc_auth::{CredentialStore, KeyMaterial, TokenConfig};
use pc_config::Config;
use pc_store::PreferenceStore;

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialStore>,
    pub store: PreferenceStore,
}

impl AppState {
    pub fn new(credentials: Arc<CredentialStore>, data_dir: &Path) -> Self {
        let store = PreferenceStore::new(data_dir, credentials.cipher());
        Self { credentials, store }
    }

    /// Resolve key material and build the state described by `config`.
    ///
    /// May generate and persist keys on first start.
    pub fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let keys_dir = config.keys_path()?;
        let keys = KeyMaterial::load_or_generate(
            config.auth.jwt_secret.as_deref(),
            config.auth.encryption_key.as_deref(),
            &keys_dir,
        )?;

        let token_config =
            TokenConfig::from_minutes(config.auth.token_ttl_minutes, config.auth.leeway_secs);
        let credentials = Arc::new(CredentialStore::new(&keys, token_config)?);

        let data_dir = config.data_path()?;
        info!("Preference records stored under {}", data_dir.display());

        warn!(
            "POST /token issues a token for any submitted username without checking a credential; \
             place an authenticating proxy in front of this service before exposing it"
        );

        Ok(Self::new(credentials, &data_dir))
    }
}
