use crate::{Context, Result};
use bytes::Bytes;
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing key.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// Services may require different credentials to sign the request. An API
/// gateway typically requires an app key and an app secret.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + 'static;

    /// Load credential from current env.
    ///
    /// - Returns `Ok(None)` if the provider finds nothing in this environment.
    /// - Returns `Err(..)` if the provider found something but could not use it.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + 'static;

    /// Sign the request parts in place.
    ///
    /// ## Body
    ///
    /// Signing schemes that cover the request content receive the body via
    /// the `body` parameter. Pass `None` for requests without a body; the
    /// request itself stays untouched.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: Option<&Bytes>,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}
