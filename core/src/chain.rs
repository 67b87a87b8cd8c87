use crate::{Context, ProvideCredential, Result};
use async_trait::async_trait;
use std::fmt::{self, Debug};

/// Credential providers tried in order until one produces a credential.
///
/// The first provider returning a credential wins; providers behind it are
/// not consulted. A failing provider is logged and skipped.
pub struct ProvideCredentialChain<K> {
    providers: Vec<Box<dyn ProvideCredential<Credential = K>>>,
}

impl<K: Send + Sync + 'static> ProvideCredentialChain<K> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = K> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add a credential provider to the front of the chain.
    ///
    /// The provider will be tried before everything already in the chain.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = K> + 'static,
    ) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    /// Build a chain from already-boxed providers.
    pub fn from_vec(providers: Vec<Box<dyn ProvideCredential<Credential = K>>>) -> Self {
        Self { providers }
    }
}

impl<K: Send + Sync + 'static> Default for ProvideCredentialChain<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Debug for ProvideCredentialChain<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("len", &self.providers.len())
            .finish()
    }
}

#[async_trait]
impl<K: Send + Sync + 'static> ProvideCredential for ProvideCredentialChain<K> {
    type Credential = K;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("trying provider {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("provider {provider:?} produced a credential");
                    return Ok(Some(cred));
                }
                Ok(None) => {
                    log::debug!("provider {provider:?} had nothing");
                    continue;
                }
                Err(e) => {
                    // A failing provider is skipped, not fatal.
                    log::warn!("provider {provider:?} failed: {e:?}");
                    continue;
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Clone, Debug)]
    struct TestCredential {
        app_key: String,
    }

    #[derive(Debug)]
    struct FixedProvider {
        app_key: String,
    }

    #[async_trait]
    impl ProvideCredential for FixedProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Ok(Some(TestCredential {
                app_key: self.app_key.clone(),
            }))
        }
    }

    #[derive(Debug)]
    struct BrokenProvider;

    #[async_trait]
    impl ProvideCredential for BrokenProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Err(Error::unexpected("this provider never works"))
        }
    }

    #[derive(Debug)]
    struct SilentProvider;

    #[async_trait]
    impl ProvideCredential for SilentProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_first_credential_wins() {
        let ctx = Context::new();

        let chain = ProvideCredentialChain::new()
            .push(BrokenProvider)
            .push(SilentProvider)
            .push(FixedProvider {
                app_key: "primary".to_string(),
            })
            .push(FixedProvider {
                app_key: "never reached".to_string(),
            });

        let cred = chain.provide_credential(&ctx).await.unwrap().unwrap();
        assert_eq!(cred.app_key, "primary");
    }

    #[tokio::test]
    async fn test_push_front_takes_priority() {
        let ctx = Context::new();

        let chain = ProvideCredentialChain::new()
            .push(FixedProvider {
                app_key: "fallback".to_string(),
            })
            .push_front(FixedProvider {
                app_key: "preferred".to_string(),
            });

        let cred = chain.provide_credential(&ctx).await.unwrap().unwrap();
        assert_eq!(cred.app_key, "preferred");
    }

    #[tokio::test]
    async fn test_broken_and_silent_providers_are_skipped() {
        let ctx = Context::new();

        let chain = ProvideCredentialChain::new()
            .push(BrokenProvider)
            .push(SilentProvider)
            .push(BrokenProvider);

        let result = chain.provide_credential(&ctx).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() {
        let ctx = Context::new();

        let chain: ProvideCredentialChain<TestCredential> = ProvideCredentialChain::new();

        let result = chain.provide_credential(&ctx).await.unwrap();
        assert!(result.is_none());
    }
}
