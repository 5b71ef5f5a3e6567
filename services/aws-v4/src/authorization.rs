use crate::constants::{AWS4_HMAC_SHA256, X_AMZ_CONTENT_SHA_256, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN};
use http::header::{self, HeaderName};
use http::{HeaderMap, HeaderValue};
use std::fmt::{Debug, Formatter};
use zonesign_core::utils::Redact;
use zonesign_core::Result;

/// AuthorizationResult carries every header a signed request must send.
///
/// Values are exactly the ones that went into the signature, so the request
/// must be sent with all of them unchanged.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationResult {
    /// Value of the `Authorization` header.
    pub authorization_header: String,
    /// Value of the `X-Amz-Date` header.
    pub x_amz_date: String,
    /// Value of the `X-Amz-Content-Sha256` header.
    pub x_amz_content_sha256: String,
    /// Value of the `X-Amz-Security-Token` header, only set for session credentials.
    pub x_amz_security_token: Option<String>,
}

impl AuthorizationResult {
    /// Write all headers into `headers`, replacing any previous value.
    ///
    /// A security token left over from an earlier signing is removed when
    /// this result carries none. Either every header is written or `headers`
    /// is left untouched.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        let mut values: Vec<(HeaderName, HeaderValue)> = Vec::with_capacity(4);

        let mut authorization = HeaderValue::from_str(&self.authorization_header)?;
        authorization.set_sensitive(true);
        values.push((header::AUTHORIZATION, authorization));
        values.push((
            HeaderName::from_static(X_AMZ_DATE),
            HeaderValue::from_str(&self.x_amz_date)?,
        ));
        values.push((
            HeaderName::from_static(X_AMZ_CONTENT_SHA_256),
            HeaderValue::from_str(&self.x_amz_content_sha256)?,
        ));
        if let Some(token) = &self.x_amz_security_token {
            let mut value = HeaderValue::from_str(token)?;
            // Set token value sensitive to avoid leaking.
            value.set_sensitive(true);
            values.push((HeaderName::from_static(X_AMZ_SECURITY_TOKEN), value));
        }

        if self.x_amz_security_token.is_none() {
            headers.remove(X_AMZ_SECURITY_TOKEN);
        }
        for (k, v) in values {
            headers.insert(k, v);
        }
        Ok(())
    }
}

impl Debug for AuthorizationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationResult")
            .field("authorization_header", &Redact::from(&self.authorization_header))
            .field("x_amz_date", &self.x_amz_date)
            .field("x_amz_content_sha256", &self.x_amz_content_sha256)
            .field("x_amz_security_token", &Redact::from(&self.x_amz_security_token))
            .finish()
    }
}

/// Format the `Authorization` header value.
///
/// `AWS4-HMAC-SHA256 Credential=<ak>/<scope>, SignedHeaders=<names>, Signature=<hex>`
pub fn authorization_header(
    access_key_id: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{AWS4_HMAC_SHA256} Credential={access_key_id}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}
