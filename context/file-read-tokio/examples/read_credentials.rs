use gwsign_core::{Context, Result};
use gwsign_file_read_tokio::TokioFileRead;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_file_read(TokioFileRead);

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "/etc/gateway/app_key".to_string());

    // A gateway key file holds a single app_key:app_secret line.
    let content = ctx.file_read(&path).await?;
    println!("{path}: {} bytes", content.len());

    if let Ok(text) = String::from_utf8(content) {
        match text.trim().split_once(':') {
            Some((app_key, _)) => println!("App key: {app_key}"),
            None => println!("File is not in app_key:app_secret form"),
        }
    }

    Ok(())
}
