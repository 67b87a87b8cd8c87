//! Wires a minimal custom signing scheme into `Signer`.
//!
//! The scheme is deliberately small: HMAC the request path with an app
//! secret and attach the tag. Real schemes canonicalize much more, but
//! the trait wiring is the same.

use async_trait::async_trait;
use bytes::Bytes;
use gwsign_core::{
    hash, Context, OsEnv, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
};
use http::request::Parts;

#[derive(Clone, Debug)]
struct AppKeyPair {
    app_key: String,
    app_secret: String,
}

impl SigningCredential for AppKeyPair {
    fn is_valid(&self) -> bool {
        !self.app_key.is_empty() && !self.app_secret.is_empty()
    }
}

/// Loads the pair from `DEMO_APP_KEY` / `DEMO_APP_SECRET`, falling back
/// to a built-in demo pair so the example runs anywhere.
#[derive(Debug)]
struct DemoLoader;

#[async_trait]
impl ProvideCredential for DemoLoader {
    type Credential = AppKeyPair;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(app_key), Some(app_secret)) =
            (ctx.env_var("DEMO_APP_KEY"), ctx.env_var("DEMO_APP_SECRET"))
        else {
            println!("No credentials in the environment, using the demo pair");
            return Ok(Some(AppKeyPair {
                app_key: "demo-app-key".to_string(),
                app_secret: "demo-app-secret".to_string(),
            }));
        };

        Ok(Some(AppKeyPair {
            app_key,
            app_secret,
        }))
    }
}

#[derive(Debug)]
struct PathHmacBuilder;

#[async_trait]
impl SignRequest for PathHmacBuilder {
    type Credential = AppKeyPair;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        _body: Option<&Bytes>,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential
            .ok_or_else(|| gwsign_core::Error::credential_invalid("no credential loaded"))?;

        let tag = hash::base64_hmac_sha256(cred.app_secret.as_bytes(), req.uri.path().as_bytes());

        req.headers.insert("x-demo-key", cred.app_key.parse()?);
        req.headers.insert("x-demo-signature", tag.parse()?);

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let signer = Signer::new(Context::new().with_env(OsEnv), DemoLoader, PathHmacBuilder);

    let mut parts = http::Request::get("https://api.example.com/v1/users")
        .body(())
        .unwrap()
        .into_parts()
        .0;

    signer.sign(&mut parts, None).await?;
    println!("signed headers: {:?}", parts.headers);

    Ok(())
}
