use anyhow::Result;
use bytes::Bytes;
use gwsign_aliyun_apigw::{DefaultCredentialProvider, RequestSigner};
use gwsign_core::{Context, OsEnv, Signer};
use gwsign_file_read_tokio::TokioFileRead;
use gwsign_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = Client::new();

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::new(client.clone()))
        .with_env(OsEnv);

    // Load the app key pair from the environment:
    // ALIBABA_CLOUD_GATEWAY_APP_KEY and ALIBABA_CLOUD_GATEWAY_APP_SECRET
    let loader = DefaultCredentialProvider::new();

    let builder = RequestSigner::new();

    let signer = Signer::new(ctx.clone(), loader, builder);

    // Replace with the host of your deployed API
    let host = "https://abcdef.gateway.example.com";

    // Example 1: GET with query parameters
    println!("Example 1: GET with query parameters");
    let url = format!("{host}/v1/items?page=1&size=10");

    let req = http::Request::get(&url).body(reqwest::Body::from("")).unwrap();

    let (mut parts, body) = req.into_parts();

    match signer.sign(&mut parts, None).await {
        Ok(_) => {
            println!("GET request signed successfully!");
            println!("X-Ca-Key: {:?}", parts.headers.get("x-ca-key"));
            println!(
                "X-Ca-Signature-Headers: {:?}",
                parts.headers.get("x-ca-signature-headers")
            );

            let req = http::Request::from_parts(parts, body).try_into()?;
            match client.execute(req).await {
                Ok(resp) => {
                    println!("status: {}", resp.status());
                    if resp.status().is_success() {
                        let text = resp.text().await?;
                        println!("Response preview:");
                        println!("{}", text.chars().take(400).collect::<String>());
                    }
                }
                Err(e) => eprintln!("request failed: {e}"),
            }
        }
        Err(e) => eprintln!("signing failed: {e}"),
    }

    // Example 2: POST with a form body
    println!("\nExample 2: POST with a form body");
    let form_body = Bytes::from_static(b"name=sample&size=10");
    let url = format!("{host}/v1/items");

    let req = http::Request::post(&url)
        .header(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=utf-8",
        )
        .body(reqwest::Body::from(form_body.clone()))
        .unwrap();

    let (mut parts, _body) = req.into_parts();

    match signer.sign(&mut parts, Some(&form_body)).await {
        Ok(_) => {
            println!("Form request signed successfully!");
            println!("The form pairs were signed through the resource block");
        }
        Err(e) => eprintln!("signing failed: {e}"),
    }

    // Example 3: POST with a JSON body
    println!("\nExample 3: POST with a JSON body");
    let json_body = Bytes::from_static(b"{\"name\":\"sample\",\"size\":10}");
    let url = format!("{host}/v1/items");

    let req = http::Request::post(&url)
        .body(reqwest::Body::from(json_body.clone()))
        .unwrap();

    let (mut parts, _body) = req.into_parts();

    match signer.sign(&mut parts, Some(&json_body)).await {
        Ok(_) => {
            println!("JSON request signed successfully!");
            println!("Content-MD5: {:?}", parts.headers.get("content-md5"));
        }
        Err(e) => eprintln!("signing failed: {e}"),
    }

    // Example 4: Route to the TEST stage
    println!("\nExample 4: Route to the TEST stage");
    let stage_signer = Signer::new(
        ctx.clone(),
        DefaultCredentialProvider::new(),
        RequestSigner::new().with_stage("TEST"),
    );
    let url = format!("{host}/v1/items");

    let req = http::Request::get(&url).body(reqwest::Body::from("")).unwrap();

    let (mut parts, _body) = req.into_parts();

    match stage_signer.sign(&mut parts, None).await {
        Ok(_) => {
            println!("Stage request signed successfully!");
            println!("X-Ca-Stage: {:?}", parts.headers.get("x-ca-stage"));
        }
        Err(e) => eprintln!("signing failed: {e}"),
    }

    // Example 5: Opt extra headers into the signature
    println!("\nExample 5: Opt extra headers into the signature");
    let trace_signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::new().with_sign_headers(vec!["x-trace-".to_string()]),
    );
    let url = format!("{host}/v1/items");

    let req = http::Request::get(&url)
        .header("x-trace-id", "8a1b2c3d")
        .body(reqwest::Body::from(""))
        .unwrap();

    let (mut parts, _body) = req.into_parts();

    match trace_signer.sign(&mut parts, None).await {
        Ok(_) => {
            println!("Trace request signed successfully!");
            println!(
                "X-Ca-Signature-Headers: {:?}",
                parts.headers.get("x-ca-signature-headers")
            );
        }
        Err(e) => eprintln!("signing failed: {e}"),
    }

    Ok(())
}
