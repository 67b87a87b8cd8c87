use anyhow::Result;
use async_trait::async_trait;
use gwsign_aliyun_apigw::{
    Credential, EnvCredentialProvider, RequestSigner, StaticCredentialProvider,
};
use gwsign_core::{Context, OsEnv, ProvideCredential, ProvideCredentialChain, Signer};
use gwsign_file_read_tokio::TokioFileRead;
use gwsign_http_send_reqwest::ReqwestHttpSend;

/// Loads an app key pair from a local file holding `app_key:app_secret`.
///
/// File access goes through the context, so tests can swap in a fake
/// file system.
#[derive(Debug)]
struct KeyFileCredentialProvider {
    path: String,
}

#[async_trait]
impl ProvideCredential for KeyFileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        ctx: &Context,
    ) -> gwsign_core::Result<Option<Self::Credential>> {
        let content = match ctx.file_read(&self.path).await {
            Ok(bs) => bs,
            // A missing key file is not an error, the next provider takes over.
            Err(_) => return Ok(None),
        };

        let content = String::from_utf8_lossy(&content);
        match content.trim().split_once(':') {
            Some((app_key, app_secret)) => Ok(Some(Credential::new(
                app_key.to_string(),
                app_secret.to_string(),
            ))),
            None => Ok(None),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    // Providers are consulted in order; the first credential wins.
    let chain = ProvideCredentialChain::new()
        .push(KeyFileCredentialProvider {
            path: "/etc/gateway/app_key".to_string(),
        })
        .push(EnvCredentialProvider::new())
        .push(StaticCredentialProvider::new(
            "demo_app_key",
            "demo_app_secret",
        ));

    let signer = Signer::new(ctx, chain, RequestSigner::new());

    let req = http::Request::get("https://abcdef.gateway.example.com/v1/items?page=1")
        .body(())
        .unwrap();

    let (mut parts, _) = req.into_parts();
    signer.sign(&mut parts, None).await?;

    println!("Signed with the first credential the chain produced");
    println!("X-Ca-Key: {:?}", parts.headers.get("x-ca-key"));
    println!(
        "X-Ca-Signature-Headers: {:?}",
        parts.headers.get("x-ca-signature-headers")
    );

    Ok(())
}
