use std::fmt::{Debug, Formatter};

use super::constants::*;
use gwsign_core::{utils::Redact, Context};

/// Config carries all the configuration for api gateway clients.
#[derive(Clone, Default)]
pub struct Config {
    /// `app_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ALIBABA_CLOUD_GATEWAY_APP_KEY`]
    pub app_key: Option<String>,
    /// `app_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ALIBABA_CLOUD_GATEWAY_APP_SECRET`]
    pub app_secret: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set app_key
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Set app_secret
    pub fn with_app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_GATEWAY_APP_KEY) {
            self.app_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_GATEWAY_APP_SECRET) {
            self.app_secret.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_key", &self.app_key.as_ref().map(Redact::from))
            .field("app_secret", &self.app_secret.as_ref().map(Redact::from))
            .finish()
    }
}
