use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
use bytes::Bytes;
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// It loads a credential through the configured provider, caches it while
/// it stays valid and delegates the actual signing to the request builder.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Signing request.
    ///
    /// The optional `body` is consumed by schemes that sign the request
    /// content; it is never modified.
    pub async fn sign(&self, req: &mut http::request::Parts, body: Option<&Bytes>) -> Result<()> {
        let cred = self.credential.lock().expect("lock poisoned").clone();
        let cred = if cred.is_valid() {
            cred
        } else {
            let loaded = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, body, cred.as_ref())
            .await
    }
}
