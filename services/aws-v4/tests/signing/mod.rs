mod special_chars;
mod zones;

use anyhow::Result;
use bytes::Bytes;
use http::{Request, StatusCode};
use log::debug;
use std::env;
use zonesign_aws_v4::{RequestSigner, StaticCredentialProvider};
use zonesign_core::{Context, HttpSend, Signer, SigningHttpSend};
use zonesign_http_send_reqwest::ReqwestHttpSend;

type Client = SigningHttpSend<zonesign_aws_v4::Credential, ReqwestHttpSend>;

/// Initialize test environment
///
/// Returns the signing client and the base url of the zone API, or `None`
/// if live tests are disabled.
pub fn init_signing_test() -> Option<(Client, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("ZONESIGN_AWS_V4_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let region = env::var("ZONESIGN_AWS_V4_REGION").expect("ZONESIGN_AWS_V4_REGION must be set");
    let service =
        env::var("ZONESIGN_AWS_V4_SERVICE").unwrap_or_else(|_| "execute-api".to_string());
    let url = env::var("ZONESIGN_AWS_V4_URL").expect("ZONESIGN_AWS_V4_URL must be set");

    let access_key =
        env::var("ZONESIGN_AWS_V4_ACCESS_KEY").expect("ZONESIGN_AWS_V4_ACCESS_KEY must be set");
    let secret_key =
        env::var("ZONESIGN_AWS_V4_SECRET_KEY").expect("ZONESIGN_AWS_V4_SECRET_KEY must be set");
    let mut provider = StaticCredentialProvider::new(&access_key, &secret_key);
    if let Ok(token) = env::var("ZONESIGN_AWS_V4_SESSION_TOKEN") {
        provider = provider.with_session_token(&token);
    }

    let signer = Signer::new(
        Context::new(),
        provider,
        RequestSigner::new(&service, &region),
    );
    Some((
        SigningHttpSend::new(signer, ReqwestHttpSend::default()),
        url.trim_end_matches('/').to_string(),
    ))
}

/// Send signed request and return response
pub async fn send_signed_request(
    client: &Client,
    req: Request<Bytes>,
) -> Result<(StatusCode, String)> {
    let resp = client.http_send(req).await?;

    let status = resp.status();
    let body = String::from_utf8_lossy(resp.body()).to_string();

    debug!("response status: {status}, body: {body}");
    Ok((status, body))
}
