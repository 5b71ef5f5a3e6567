use crate::constants::{AWS4_HMAC_SHA256, AWS4_REQUEST};
use std::fmt::{Display, Formatter};
use zonesign_core::time::{format_date, format_iso8601, DateTime};

/// CredentialScope limits a signature to one day, region and service.
///
/// The scope is rendered once per signature and the same value is embedded
/// in both the string to sign and the authorization header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialScope {
    date: String,
    region: String,
    service: String,
}

impl CredentialScope {
    /// Build the scope for the date of `time`.
    pub fn new(time: DateTime, region: &str, service: &str) -> Self {
        Self {
            date: format_date(time),
            region: region.to_string(),
            service: service.to_string(),
        }
    }

    /// Date part of the scope: `20220313`
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Region part of the scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Service part of the scope.
    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Display for CredentialScope {
    /// Scope: "20220313/<region>/<service>/aws4_request"
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{AWS4_REQUEST}",
            self.date, self.region, self.service
        )
    }
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(
    time: DateTime,
    scope: &CredentialScope,
    canonical_request_hash: &str,
) -> String {
    format!(
        "{AWS4_HMAC_SHA256}\n{}\n{scope}\n{canonical_request_hash}",
        format_iso8601(time)
    )
}
