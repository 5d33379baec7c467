use std::path::PathBuf;
use std::sync::Arc;

use vola_api::ApiClient;
use vola_auth::jar::{FallbackJar, FileJar, KeyringJar, MemoryJar};
use vola_auth::{CookiePolicy, TokenStore};
use vola_config::{SessionConfig, StoreBackend, VolaConfig};

/// Shared resources for one command run.
pub struct AppContext {
    pub config: VolaConfig,
    pub store: Arc<TokenStore>,
    pub client: ApiClient,
}

impl AppContext {
    pub fn init(config: VolaConfig) -> anyhow::Result<Self> {
        let store = Arc::new(build_store(&config.session)?);
        let client = ApiClient::from_config(&config, Arc::clone(&store));
        tracing::debug!(
            backend = ?config.session.store,
            configured = config.api.is_configured(),
            "context ready"
        );
        Ok(Self {
            config,
            store,
            client,
        })
    }

    /// Page size for list views.
    pub fn page_limit(&self, flag: Option<u32>) -> u32 {
        flag.filter(|limit| *limit > 0)
            .unwrap_or(self.config.general.default_limit)
    }
}

pub fn cookie_policy(session: &SessionConfig) -> CookiePolicy {
    CookiePolicy {
        name: session.cookie_name.clone(),
        path: session.path.clone(),
        secure: session.secure,
        same_site: session.same_site,
    }
}

fn build_store(session: &SessionConfig) -> anyhow::Result<TokenStore> {
    let policy = cookie_policy(session);
    let store = match session.store {
        StoreBackend::Memory => TokenStore::new(MemoryJar::new(), policy),
        StoreBackend::Keyring => {
            TokenStore::new(KeyringJar::new(&session.keyring_service), policy)
        }
        StoreBackend::File => TokenStore::new(file_jar(session)?, policy),
        StoreBackend::Auto => TokenStore::new(
            FallbackJar::new(KeyringJar::new(&session.keyring_service), file_jar(session)?),
            policy,
        ),
    };
    Ok(store)
}

fn file_jar(session: &SessionConfig) -> anyhow::Result<FileJar> {
    if session.file_path.trim().is_empty() {
        Ok(FileJar::at_default_location()?)
    } else {
        Ok(FileJar::new(PathBuf::from(session.file_path.trim())))
    }
}
