//! Client-side configuration.

/// Configuration for the submit client.
///
/// | Env Var       | Meaning                                   |
/// |---------------|-------------------------------------------|
/// | `ONBOARD_URL` | Full URL of the submission endpoint.      |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Where validated submissions are POSTed.
    pub onboard_url: String,
}

/// Error raised when the environment is missing required configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ONBOARD_URL must be set")]
    MissingOnboardUrl,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let onboard_url =
            std::env::var("ONBOARD_URL").map_err(|_| ConfigError::MissingOnboardUrl)?;
        Ok(Self { onboard_url })
    }
}
