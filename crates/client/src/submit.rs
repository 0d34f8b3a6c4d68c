//! HTTP submitter for validated onboarding records.
//!
//! Wraps the service's `POST /onboard` endpoint using [`reqwest`].

use serde::Deserialize;

use onboard_core::submission::OnboardingSubmission;

use crate::config::{ClientConfig, ConfigError};
use crate::form::{FormState, SubmitBlocked, SubmitOutcome};

/// HTTP client for the submission endpoint.
pub struct OnboardClient {
    http: reqwest::Client,
    onboard_url: String,
}

/// The service's `{ success, message }` acknowledgment.
#[derive(Debug, Deserialize)]
pub struct SubmitAck {
    pub success: bool,
    pub message: String,
}

/// Errors from the submission transport.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request never completed (connect, DNS, TLS, decode).
    #[error("Submission request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Submission rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message from the failure envelope, when one was decodable.
        message: String,
    },
}

impl OnboardClient {
    /// Create a client for the given submission URL.
    pub fn new(onboard_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            onboard_url: onboard_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, onboard_url: impl Into<String>) -> Self {
        Self {
            http,
            onboard_url: onboard_url.into(),
        }
    }

    /// Create a client from `ONBOARD_URL` in the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ClientConfig::from_env()?;
        Ok(Self::new(config.onboard_url))
    }

    /// POST one validated record as JSON and decode the acknowledgment.
    #[tracing::instrument(name = "Submit onboarding record", skip(self, submission))]
    pub async fn submit(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<SubmitAck, SubmitError> {
        let response = self
            .http
            .post(&self.onboard_url)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let ack: SubmitAck = response.json().await?;
            Ok(ack)
        } else {
            // Best-effort read of the failure envelope; the body may
            // not be JSON (e.g. extractor rejections).
            let message = match response.json::<SubmitAck>().await {
                Ok(ack) => ack.message,
                Err(_) => format!("The service answered {status}"),
            };
            Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Drive one full submit attempt.
///
/// Gates on the form's validity and in-flight state, POSTs the record,
/// and settles the form with the outcome: delivery clears the draft,
/// any failure preserves it and records a blocking failure notice.
pub async fn submit_form(
    form: &mut FormState,
    client: &OnboardClient,
) -> Result<(), SubmitBlocked> {
    let record = form.begin_submit()?;

    let outcome = match client.submit(&record).await {
        Ok(ack) => SubmitOutcome::Delivered(ack.message),
        Err(err) => {
            tracing::warn!(error = %err, "Submission attempt failed");
            SubmitOutcome::Failed(err.to_string())
        }
    };
    form.finish_submit(outcome);

    Ok(())
}
