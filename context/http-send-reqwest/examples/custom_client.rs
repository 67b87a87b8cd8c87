//! Tunes the reqwest client that backs a context.
//!
//! Credential endpoints sit on the signing path, so the client wants
//! tight timeouts rather than reqwest defaults.

use bytes::Bytes;
use gwsign_core::{Context, Result};
use gwsign_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(5))
        .connect_timeout(Duration::from_secs(2))
        .user_agent("gwsign-example/1.0")
        .build()
        .map_err(|e| gwsign_core::Error::unexpected("failed to build client").with_source(e))?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    // Stands in for an internal endpoint that serves an app key pair.
    let req = http::Request::get("https://httpbin.org/base64/ZGVtby1rZXk6ZGVtby1zZWNyZXQ=")
        .body(Bytes::new())?;

    let resp = ctx.http_send(req).await?;
    println!("Status: {}", resp.status());

    let body = String::from_utf8_lossy(resp.body());
    match body.split_once(':') {
        Some((app_key, _)) => println!("Fetched pair for app key {app_key}"),
        None => println!("Endpoint returned something unexpected: {body}"),
    }

    Ok(())
}
