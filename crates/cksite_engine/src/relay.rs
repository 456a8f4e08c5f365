use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::{SubmissionFields, SubmitError};
use site_logging::site_debug;

/// Production form-relay endpoint.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/mblpdgqe";

/// Relay client configuration.
///
/// There is deliberately no request timeout: the UI keeps its submit
/// control disabled while a submission is pending, and a hung request
/// simply stays pending.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub endpoint: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
        }
    }
}

/// Seam for tests and alternate relay backends.
#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
pub trait FormRelay: Send + Sync {
    async fn submit(&self, fields: &SubmissionFields) -> Result<(), SubmitError>;
}

/// HTTP client for the hosted form relay. One multipart POST per
/// submission; success is decided by HTTP status alone.
#[derive(Debug, Clone)]
pub struct FormspreeRelay {
    settings: RelaySettings,
}

impl FormspreeRelay {
    pub fn new(settings: RelaySettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| SubmitError::Network {
                message: err.to_string(),
            })
    }

    /// POST the fields to the relay and map the response to an outcome.
    pub async fn submit(&self, fields: &SubmissionFields) -> Result<(), SubmitError> {
        let client = self.build_client()?;

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name.clone(), value.clone());
        }

        let response = client
            .post(&self.settings.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|err| SubmitError::Network {
                message: err.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            site_debug!("relay accepted submission: {status}");
            return Ok(());
        }

        // A failure body is optionally JSON with structured error entries;
        // anything unparseable just means no relay-provided message.
        let message = match response.text().await {
            Ok(body) => first_error_message(&body),
            Err(_) => None,
        };
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl FormRelay for FormspreeRelay {
    async fn submit(&self, fields: &SubmissionFields) -> Result<(), SubmitError> {
        FormspreeRelay::submit(self, fields).await
    }
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Vec<RelayErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct RelayErrorEntry {
    message: Option<String>,
}

/// First structured error message in a relay failure body, if any.
fn first_error_message(body: &str) -> Option<String> {
    let parsed: RelayErrorBody = serde_json::from_str(body).ok()?;
    parsed.errors.into_iter().find_map(|entry| entry.message)
}

#[cfg(test)]
mod tests {
    use super::first_error_message;

    #[test]
    fn reads_first_structured_message() {
        let body = r#"{"errors":[{"message":"Email is required"},{"message":"second"}]}"#;
        assert_eq!(
            first_error_message(body),
            Some("Email is required".to_owned())
        );
    }

    #[test]
    fn skips_entries_without_a_message() {
        let body = r#"{"errors":[{"field":"email"},{"message":"late"}]}"#;
        assert_eq!(first_error_message(body), Some("late".to_owned()));
    }

    #[test]
    fn tolerates_opaque_bodies() {
        assert_eq!(first_error_message("oops"), None);
        assert_eq!(first_error_message("{}"), None);
        assert_eq!(first_error_message(r#"{"errors":[]}"#), None);
    }
}
