use crate::authorization::AuthorizationResult;
use crate::descriptor::{RequestDescriptor, SigningContext};
use crate::sign::sign_request;
use crate::{Config, Credential};
use http::request::Parts;
use http::{header, HeaderValue};
use log::debug;
use zonesign_core::time::DateTime;
use zonesign_core::{replay_body, Error, ReplayableBody, Result, SignRequest};

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,
}

impl RequestSigner {
    /// Create a new signer for `service` in `region`.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),
        }
    }

    /// Create a signer from config.
    ///
    /// Both region and service must be set, there is no fallback value.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let region = cfg
            .region
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("region is missing"))?;
        let service = cfg
            .service
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("service is missing"))?;

        Ok(Self::new(service, region))
    }

    /// Signing service.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Signing region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Compute the authorization headers for `req` at `now`.
    pub fn sign(
        &self,
        cred: &Credential,
        req: &RequestDescriptor,
        now: DateTime,
    ) -> Result<AuthorizationResult> {
        let ctx = SigningContext::new(req, &self.region, &self.service, now)?;
        sign_request(cred, &ctx)
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        req: &mut Parts,
        body: &dyn ReplayableBody,
        credential: &Self::Credential,
        now: DateTime,
    ) -> Result<()> {
        let descriptor = RequestDescriptor::from_parts(req, replay_body(body)?)?;
        let result = self.sign(credential, &descriptor, now)?;
        let host = HeaderValue::from_str(&descriptor.host)?;

        result.apply(&mut req.headers)?;
        // Send exactly the host that has been signed.
        if req.headers.get(header::HOST).is_none() {
            req.headers.insert(header::HOST, host);
        }
        debug!(
            "signed {} {} for {}/{}",
            req.method, req.uri, self.region, self.service
        );
        Ok(())
    }
}
