use async_trait::async_trait;
use gwsign_core::Result;
use gwsign_core::{Context, ProvideCredential, ProvideCredentialChain};

use crate::credential::Credential;
use crate::provide_credential::EnvCredentialProvider;

/// The stock credential resolution for this service.
///
/// Out of the box only the environment is consulted:
///
/// 1. `ALIBABA_CLOUD_GATEWAY_APP_KEY` / `ALIBABA_CLOUD_GATEWAY_APP_SECRET`
///
/// Deployments with other sources hang them onto the chain via
/// [`push_front`](Self::push_front) or [`with_chain`](Self::with_chain).
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Build the provider with the stock chain.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Replace the chain entirely.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Put a provider ahead of the stock chain.
    ///
    /// Whatever it yields wins over the environment.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gwsign_aliyun_apigw::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("app_key", "app_secret"));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
