use crate::constants::AWS4_REQUEST;
use crate::string_to_sign::CredentialScope;
use std::fmt::{Debug, Formatter};
use zonesign_core::hash::{hex_hmac_sha256, hmac_sha256};

/// SigningKey is the per request key derived from the secret access key.
///
/// It is derived again for every signature and never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Derive the signing key for `scope`.
    ///
    /// Each step is keyed by the raw bytes of the previous one:
    ///
    /// ```text
    /// kDate    = HMAC("AWS4" + secret, date)
    /// kRegion  = HMAC(kDate, region)
    /// kService = HMAC(kRegion, service)
    /// kSigning = HMAC(kService, "aws4_request")
    /// ```
    pub fn derive(secret_access_key: &str, scope: &CredentialScope) -> Self {
        // Sign secret
        let secret = format!("AWS4{secret_access_key}");
        // Sign date
        let sign_date = hmac_sha256(secret.as_bytes(), scope.date().as_bytes());
        // Sign region
        let sign_region = hmac_sha256(&sign_date, scope.region().as_bytes());
        // Sign service
        let sign_service = hmac_sha256(&sign_region, scope.service().as_bytes());
        // Sign request
        Self(hmac_sha256(&sign_service, AWS4_REQUEST.as_bytes()))
    }

    /// Hex encoded signature of `string_to_sign`.
    pub fn sign(&self, string_to_sign: &str) -> String {
        hex_hmac_sha256(&self.0, string_to_sign.as_bytes())
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonesign_core::time::parse_iso8601;

    fn scope(ts: &str, region: &str, service: &str) -> CredentialScope {
        CredentialScope::new(parse_iso8601(ts).expect("must be valid"), region, service)
    }

    /// Example from the AWS SigV4 documentation.
    #[test]
    fn test_derive_documented_example() {
        let key = SigningKey::derive(
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            &scope("20150830T123600Z", "us-east-1", "iam"),
        );

        assert_eq!(
            hex::encode(key.as_bytes()),
            "c4afb1cc5771d871763a393e44b703571b55cc28424d1a5e86da6ed3c154a4b9"
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let scope = scope("20230101T000000Z", "eu-central-1", "execute-api");

        let first = SigningKey::derive("secret", &scope);
        let second = SigningKey::derive("secret", &scope);
        assert_eq!(first, second);
        assert_eq!(
            hex::encode(first.as_bytes()),
            "7a4d81361568eff00513529dec8d4f118a7dc711e87531d79982d7809e7c1fed"
        );
    }

    #[test]
    fn test_derive_depends_on_every_scope_part() {
        let base = SigningKey::derive(
            "secret",
            &scope("20230101T000000Z", "eu-central-1", "execute-api"),
        );

        for other in [
            scope("20230102T000000Z", "eu-central-1", "execute-api"),
            scope("20230101T000000Z", "eu-west-1", "execute-api"),
            scope("20230101T000000Z", "eu-central-1", "s3"),
        ] {
            assert_ne!(base, SigningKey::derive("secret", &other), "{other}");
        }
        assert_ne!(
            base,
            SigningKey::derive("Secret", &scope("20230101T000000Z", "eu-central-1", "execute-api"))
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let key = SigningKey::derive(
            "secret",
            &scope("20230101T000000Z", "eu-central-1", "execute-api"),
        );
        assert_eq!(format!("{key:?}"), "SigningKey(***)");
    }
}
