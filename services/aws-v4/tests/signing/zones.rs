use super::{init_signing_test, send_signed_request};
use anyhow::Result;
use bytes::Bytes;
use http::{Method, Request, StatusCode};
use log::warn;

#[tokio::test]
async fn test_list_zones() -> Result<()> {
    let Some((client, url)) = init_signing_test() else {
        warn!("ZONESIGN_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let req = Request::builder()
        .method(Method::GET)
        .uri(format!("{url}/v1/zones"))
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Bytes::new())?;

    let (status, _body) = send_signed_request(&client, req).await?;
    assert_eq!(StatusCode::OK, status);
    Ok(())
}

#[tokio::test]
async fn test_list_zones_with_query() -> Result<()> {
    let Some((client, url)) = init_signing_test() else {
        warn!("ZONESIGN_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let req = Request::builder()
        .method(Method::GET)
        .uri(format!("{url}/v1/zones?per_page=10&page=1"))
        .body(Bytes::new())?;

    let (status, _body) = send_signed_request(&client, req).await?;
    assert_eq!(StatusCode::OK, status);
    Ok(())
}

#[tokio::test]
async fn test_get_missing_zone() -> Result<()> {
    let Some((client, url)) = init_signing_test() else {
        warn!("ZONESIGN_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let req = Request::builder()
        .method(Method::GET)
        .uri(format!("{url}/v1/zones/not-exist.zonesign.invalid"))
        .body(Bytes::new())?;

    let (status, _body) = send_signed_request(&client, req).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}

#[tokio::test]
async fn test_create_and_delete_zone() -> Result<()> {
    let Some((client, url)) = init_signing_test() else {
        warn!("ZONESIGN_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let name = format!("zonesign-{}.example.org", chrono::Utc::now().timestamp());
    let body = format!(r#"{{"name":"{name}","name_servers":["ns1.example.net"]}}"#);

    let req = Request::builder()
        .method(Method::POST)
        .uri(format!("{url}/v1/zones"))
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Bytes::from(body))?;
    let (status, _body) = send_signed_request(&client, req).await?;
    assert!(status.is_success(), "create zone got {status}");

    let req = Request::builder()
        .method(Method::DELETE)
        .uri(format!("{url}/v1/zones/{name}"))
        .body(Bytes::new())?;
    let (status, _body) = send_signed_request(&client, req).await?;
    assert!(status.is_success(), "delete zone got {status}");
    Ok(())
}
