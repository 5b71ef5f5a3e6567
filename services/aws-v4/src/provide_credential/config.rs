use crate::{Config, Credential};
use async_trait::async_trait;
use std::sync::Arc;
use zonesign_core::{Context, ProvideCredential, Result};

/// ConfigCredentialProvider loads credential from [`Config`].
///
/// Config values are used as they are. Call [`Config::from_env`] first to
/// fill missing fields from env.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let (Some(ak), Some(sk)) = (
            self.config.access_key_id.as_deref(),
            self.config.secret_access_key.as_deref(),
        ) else {
            return Ok(None);
        };

        let mut cred = Credential::new(ak, sk);
        if let Some(token) = self.config.session_token.as_deref() {
            cred = cred.with_session_token(token);
        }
        Ok(Some(cred))
    }
}
