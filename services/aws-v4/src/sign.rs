use crate::authorization::{authorization_header, AuthorizationResult};
use crate::canonical_request::CanonicalRequestBuilder;
use crate::constants::{CONTENT_TYPE, HOST, X_AMZ_CONTENT_SHA_256, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN};
use crate::descriptor::SigningContext;
use crate::signing_key::SigningKey;
use crate::string_to_sign::{string_to_sign, CredentialScope};
use crate::Credential;
use log::debug;
use zonesign_core::time::format_iso8601;
use zonesign_core::Result;

/// Sign one request.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signed headers are `host`, `content-type` when the request has one,
/// `x-amz-content-sha256`, `x-amz-date` and `x-amz-security-token` when the
/// credential carries a session token.
///
/// Nothing is returned unless every step succeeds.
pub fn sign_request(cred: &Credential, ctx: &SigningContext) -> Result<AuthorizationResult> {
    cred.validate()?;

    let now = ctx.timestamp();
    let x_amz_date = format_iso8601(now);
    let token = cred.security_token();

    let mut builder = CanonicalRequestBuilder::new(ctx.method(), ctx.path(), ctx.query())
        .payload(ctx.body())
        .header(HOST, ctx.host())?;
    if let Some(content_type) = ctx.content_type() {
        builder = builder.header(CONTENT_TYPE, content_type)?;
    }
    let x_amz_content_sha256 = builder.payload_hash().to_string();
    builder = builder
        .header(X_AMZ_CONTENT_SHA_256, &x_amz_content_sha256)?
        .header(X_AMZ_DATE, &x_amz_date)?;
    if let Some(token) = token {
        builder = builder.header(X_AMZ_SECURITY_TOKEN, token)?;
    }
    let creq = builder.build()?;

    // Scope: "20220313/<region>/<service>/aws4_request"
    let scope = CredentialScope::new(now, ctx.region(), ctx.service());
    debug!("calculated scope: {scope}");

    let string_to_sign = string_to_sign(now, &scope, &creq.hash());
    debug!("calculated string to sign: {string_to_sign}");

    let signature = SigningKey::derive(&cred.secret_access_key, &scope).sign(&string_to_sign);

    Ok(AuthorizationResult {
        authorization_header: authorization_header(
            &cred.access_key_id,
            &scope.to_string(),
            creq.signed_headers(),
            &signature,
        ),
        x_amz_date,
        x_amz_content_sha256,
        x_amz_security_token: token.map(str::to_string),
    })
}
