// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use super::{init_signing_test, send_signed_request};
use anyhow::Result;
use bytes::Bytes;
use http::{Method, Request, StatusCode};
use log::warn;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

#[tokio::test]
async fn test_get_zone_with_special_characters() -> Result<()> {
    let Some((client, url)) = init_signing_test() else {
        warn!("ZONESIGN_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let req = Request::builder()
        .method(Method::GET)
        .uri(format!(
            "{url}/v1/zones/{}",
            utf8_percent_encode("!@#$%^&*()_+-=;:'><,?.example", NON_ALPHANUMERIC)
        ))
        .body(Bytes::new())?;

    let (status, _body) = send_signed_request(&client, req).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}

#[tokio::test]
async fn test_get_zone_with_unicode_characters() -> Result<()> {
    let Some((client, url)) = init_signing_test() else {
        warn!("ZONESIGN_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let req = Request::builder()
        .method(Method::GET)
        .uri(format!(
            "{url}/v1/zones/{}",
            utf8_percent_encode("bücher.example", NON_ALPHANUMERIC)
        ))
        .body(Bytes::new())?;

    let (status, _body) = send_signed_request(&client, req).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}

#[tokio::test]
async fn test_list_records_with_encoded_query() -> Result<()> {
    let Some((client, url)) = init_signing_test() else {
        warn!("ZONESIGN_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let req = Request::builder()
        .method(Method::GET)
        .uri(format!(
            "{url}/v1/zones/not-exist.zonesign.invalid/records?name={}&type=TXT",
            utf8_percent_encode("_dmarc mail", NON_ALPHANUMERIC)
        ))
        .body(Bytes::new())?;

    let (status, _body) = send_signed_request(&client, req).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}
