//! Resend credentials loaded via OrthoConfig.
//!
//! Missing credentials are not a startup error: the server still starts and
//! answers signups with a configuration failure until they are provided.

use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use zeroize::Zeroizing;

use super::ResendContactRegistry;
use crate::domain::{AudienceId, RegistryBinding};

/// Resend API root used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";
/// Request timeout used when no override is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

/// Failures building the Resend adapter from otherwise present settings.
#[derive(Debug, thiserror::Error)]
pub enum ResendSetupError {
    /// `RESEND_BASE_URL` is not a valid URL.
    #[error("invalid Resend base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    /// The HTTP client could not be constructed.
    #[error("failed to build Resend HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Contact registry settings (`RESEND_*`).
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RESEND")]
pub struct ResendSettings {
    /// API key sent as a bearer token.
    pub api_key: Option<String>,
    /// Audience new contacts are added to.
    pub audience_id: Option<String>,
    /// API root; defaults to [`DEFAULT_BASE_URL`].
    #[ortho_config(default = default_base_url())]
    pub base_url: String,
    /// Request timeout in seconds; defaults to [`DEFAULT_TIMEOUT_SECS`].
    #[ortho_config(default = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ResendSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("audience_id", &self.audience_id)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ResendSettings {
    /// Configured API root; a blank value falls back to [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> &str {
        let url = self.base_url.trim();
        if url.is_empty() { DEFAULT_BASE_URL } else { url }
    }

    /// Configured request timeout.
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn api_key(&self) -> Option<Zeroizing<String>> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| Zeroizing::new(key.to_owned()))
    }

    fn audience(&self) -> Option<AudienceId> {
        self.audience_id
            .as_deref()
            .and_then(|id| AudienceId::new(id).ok())
    }

    /// Build the registry binding.
    ///
    /// Returns `Ok(None)` when the API key or audience id is absent or blank.
    ///
    /// # Errors
    ///
    /// Returns [`ResendSetupError`] when the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn registry_binding(
        &self,
    ) -> Result<Option<RegistryBinding<ResendContactRegistry>>, ResendSetupError> {
        let (Some(api_key), Some(audience_id)) = (self.api_key(), self.audience()) else {
            return Ok(None);
        };
        let base_url = Url::parse(self.base_url())?;
        let registry = ResendContactRegistry::new(base_url, api_key, self.timeout())?;
        Ok(Some(RegistryBinding::new(Arc::new(registry), audience_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "RESEND_API_KEY",
        "RESEND_AUDIENCE_ID",
        "RESEND_BASE_URL",
        "RESEND_TIMEOUT_SECS",
    ];

    fn load(values: [Option<&str>; 4]) -> ResendSettings {
        let _guard = lock_env(
            VARS.into_iter()
                .zip(values)
                .map(|(name, value)| (name, value.map(str::to_owned))),
        );
        ResendSettings::load_from_iter([OsString::from("waitlist")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let settings = load([None, None, None, None]);
        assert!(settings.api_key.is_none());
        assert!(settings.audience_id.is_none());
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
        assert_eq!(settings.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(settings.registry_binding().expect("no setup error").is_none());
    }

    #[rstest]
    fn blank_base_url_falls_back_to_default() {
        let settings = ResendSettings {
            api_key: None,
            audience_id: None,
            base_url: "  ".to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let settings = load([
            Some("re_123"),
            Some("aud_456"),
            Some("http://127.0.0.1:9000"),
            Some("3"),
        ]);
        assert_eq!(settings.audience_id.as_deref(), Some("aud_456"));
        assert_eq!(settings.base_url(), "http://127.0.0.1:9000");
        assert_eq!(settings.timeout(), Duration::from_secs(3));
        let binding = settings
            .registry_binding()
            .expect("binding builds")
            .expect("configured");
        assert_eq!(binding.audience_id().as_ref(), "aud_456");
    }

    #[rstest]
    #[case(None, Some("aud_1"))]
    #[case(Some("re_1"), None)]
    #[case(Some("   "), Some("aud_1"))]
    #[case(Some("re_1"), Some(""))]
    fn missing_credentials_leave_registry_unbound(
        #[case] api_key: Option<&str>,
        #[case] audience_id: Option<&str>,
    ) {
        let settings = ResendSettings {
            api_key: api_key.map(str::to_owned),
            audience_id: audience_id.map(str::to_owned),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };
        assert!(settings.registry_binding().expect("no setup error").is_none());
    }

    #[rstest]
    fn invalid_base_url_is_a_setup_error() {
        let settings = ResendSettings {
            api_key: Some("re_1".to_owned()),
            audience_id: Some("aud_1".to_owned()),
            base_url: "not a url".to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };
        assert!(matches!(
            settings.registry_binding(),
            Err(ResendSetupError::BaseUrl(_))
        ));
    }

    #[rstest]
    fn debug_output_redacts_api_key() {
        let settings = ResendSettings {
            api_key: Some("re_secret".to_owned()),
            audience_id: None,
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("re_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
