use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::{header, Request, Response, StatusCode};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use zonesign_aws_v4::{
    Credential, EnvCredentialProvider, RequestDescriptor, RequestSigner, StaticCredentialProvider,
};
use zonesign_core::time::parse_iso8601;
use zonesign_core::{Context, ErrorKind, HttpSend, Signer, SigningHttpSend, StaticEnv};

/// VerifyingHttpSend checks signatures the way the gateway does and records
/// every request it receives.
#[derive(Debug)]
struct VerifyingHttpSend {
    credential: Credential,
    signer: RequestSigner,
    received: Arc<Mutex<Vec<Request<Bytes>>>>,
}

impl VerifyingHttpSend {
    fn new(credential: Credential) -> Self {
        Self {
            credential,
            signer: RequestSigner::new("execute-api", "eu-central-1"),
            received: Arc::default(),
        }
    }

    fn verify(&self, req: &Request<Bytes>) -> zonesign_core::Result<bool> {
        let Some(authorization) = req.headers().get(header::AUTHORIZATION) else {
            return Ok(false);
        };
        let Some(date) = req.headers().get("x-amz-date") else {
            return Ok(false);
        };
        let now = parse_iso8601(date.to_str()?)?;

        let (parts, body) = req.clone().into_parts();
        let descriptor = RequestDescriptor::from_parts(&parts, body)?;
        let expected = self.signer.sign(&self.credential, &descriptor, now)?;

        Ok(expected.authorization_header == authorization.to_str()?
            && req.headers().get("x-amz-content-sha256").map(|v| v.as_bytes())
                == Some(expected.x_amz_content_sha256.as_bytes()))
    }
}

#[async_trait]
impl HttpSend for VerifyingHttpSend {
    async fn http_send(&self, req: Request<Bytes>) -> zonesign_core::Result<Response<Bytes>> {
        let status = if self.verify(&req)? {
            StatusCode::OK
        } else {
            StatusCode::FORBIDDEN
        };
        self.received.lock().expect("lock must be valid").push(req);

        Ok(Response::builder()
            .status(status)
            .body(Bytes::new())?)
    }
}

fn credential() -> Credential {
    Credential::new("AKID", "secret").with_session_token("token")
}

fn create_zone() -> Result<Request<Bytes>> {
    Ok(Request::post("https://api.zones.example.com/v1/zones?dry-run")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Bytes::from_static(
            br#"{"name":"example.org","name_servers":["ns1.example.net"]}"#,
        ))?)
}

#[tokio::test]
async fn test_signed_request_is_accepted() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let transport = VerifyingHttpSend::new(credential());
    let received = transport.received.clone();
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("AKID", "secret").with_session_token("token"),
        RequestSigner::new("execute-api", "eu-central-1"),
    );
    let client = SigningHttpSend::new(signer, transport);

    let resp = client.http_send(create_zone()?).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let received = received.lock().expect("lock must be valid");
    assert_eq!(received.len(), 1);
    let req = &received[0];
    // Body reaches the transport unchanged after hashing.
    assert_eq!(
        req.body(),
        &Bytes::from_static(br#"{"name":"example.org","name_servers":["ns1.example.net"]}"#)
    );
    assert_eq!(req.headers()["x-amz-security-token"], "token");
    assert_eq!(req.headers()[header::HOST], "api.zones.example.com");
    Ok(())
}

#[tokio::test]
async fn test_wrong_secret_is_rejected() -> Result<()> {
    let transport = VerifyingHttpSend::new(credential());
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("AKID", "not-the-secret").with_session_token("token"),
        RequestSigner::new("execute-api", "eu-central-1"),
    );
    let client = SigningHttpSend::new(signer, transport);

    let resp = client.http_send(create_zone()?).await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn test_tampered_body_is_rejected() -> Result<()> {
    let transport = VerifyingHttpSend::new(credential());
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("AKID", "secret").with_session_token("token"),
        RequestSigner::new("execute-api", "eu-central-1"),
    );

    let (mut parts, body) = create_zone()?.into_parts();
    signer.sign(&mut parts, &body).await?;

    let tampered = Request::from_parts(
        parts,
        Bytes::from_static(br#"{"name":"evil.org","name_servers":["ns1.example.net"]}"#),
    );
    let resp = transport.http_send(tampered).await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn test_missing_env_credential_sends_nothing() -> Result<()> {
    let transport = VerifyingHttpSend::new(credential());
    let received = transport.received.clone();
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([("AWS_ACCESS_KEY_ID".to_string(), "AKID".to_string())]),
    });
    let signer = Signer::new(
        ctx,
        EnvCredentialProvider::new(),
        RequestSigner::new("execute-api", "eu-central-1"),
    );
    let client = SigningHttpSend::new(signer, transport);

    let err = client.http_send(create_zone()?).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(received.lock().expect("lock must be valid").is_empty());
    Ok(())
}

#[tokio::test]
async fn test_env_credential_signs_every_request() -> Result<()> {
    let transport = VerifyingHttpSend::new(Credential::new("AKID", "rotated"));
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            ("AWS_ACCESS_KEY_ID".to_string(), "AKID".to_string()),
            ("AWS_SECRET_ACCESS_KEY".to_string(), "rotated".to_string()),
        ]),
    });
    let signer = Signer::new(
        ctx,
        EnvCredentialProvider::new(),
        RequestSigner::new("execute-api", "eu-central-1"),
    );
    let client = SigningHttpSend::new(signer, transport);

    for _ in 0..2 {
        let resp = client.http_send(create_zone()?).await?;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    Ok(())
}
