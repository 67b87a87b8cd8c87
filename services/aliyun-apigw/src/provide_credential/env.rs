use crate::config::Config;
use crate::Credential;
use async_trait::async_trait;
use gwsign_core::{Context, ProvideCredential, Result};

/// Loads the gateway app key pair from the environment.
///
/// Two variables are read:
/// - `ALIBABA_CLOUD_GATEWAY_APP_KEY`: the app key issued by the gateway
/// - `ALIBABA_CLOUD_GATEWAY_APP_SECRET`: the app secret belonging to the key
#[derive(Debug, Default)]
pub struct EnvCredentialProvider {
    config: Config,
}

impl EnvCredentialProvider {
    /// Create a provider with no pre-seeded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the provider with explicit configuration.
    ///
    /// Values already present in the config win over the environment.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.clone().from_env(ctx);

        match (&config.app_key, &config.app_secret) {
            (Some(app_key), Some(app_secret)) => {
                Ok(Some(Credential::new(app_key.clone(), app_secret.clone())))
            }
            _ => Ok(None),
        }
    }
}
