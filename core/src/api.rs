use crate::time::DateTime;
use crate::{Context, ReplayableBody, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing right now.
    fn is_valid(&self) -> bool;
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// Credentials are owned by the caller. Implementations hand out a fresh copy
/// on every call and the signer drops it once the request is signed.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    ///
    /// Returns `Ok(None)` if this provider has nothing to offer.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request.
///
/// Signing is a pure transform: implementations must not read the clock,
/// must not keep derived state between calls and must leave `req` untouched
/// when they return an error.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `body` must replay the exact bytes that will be transmitted; it is read
    /// once here to compute the payload hash.
    ///
    /// ## Now
    ///
    /// `now` is the single instant every timestamp in the signature is derived from.
    fn sign_request(
        &self,
        req: &mut http::request::Parts,
        body: &dyn ReplayableBody,
        credential: &Self::Credential,
        now: DateTime,
    ) -> Result<()>;
}
