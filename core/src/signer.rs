use crate::time::now;
use crate::{
    Context, Error, ProvideCredential, ReplayableBody, Result, SignRequest, SigningCredential,
};
use log::debug;
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Credentials are loaded on every call and never cached, so a rotated
/// session token is picked up by the very next request.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Replace the credential provider.
    pub fn with_credential_provider(
        mut self,
        loader: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.loader = Arc::new(loader);
        self
    }

    /// Signing request.
    pub async fn sign(
        &self,
        req: &mut http::request::Parts,
        body: &dyn ReplayableBody,
    ) -> Result<()> {
        let credential = self.loader.provide_credential(&self.ctx).await?;
        let Some(credential) = credential else {
            return Err(Error::config_invalid(
                "no credential available from the configured provider",
            ));
        };
        if !credential.is_valid() {
            debug!("loaded credential is not valid: {credential:?}");
            return Err(Error::config_invalid(
                "loaded credential is incomplete or expired",
            ));
        }

        // Sampled once, every timestamp in the signature derives from it.
        let now = now();
        self.builder.sign_request(req, body, &credential, now)
    }
}
