use super::SubmissionRequest;
use crate::error::SubmitError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default form-to-email endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Connection-level timeout; the endpoint is not retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can deliver a configuration summary.
///
/// `Ok(false)` means the endpoint answered but declined the submission.
pub trait SubmissionEndpoint: Send + Sync {
    fn submit(&self, request: &SubmissionRequest) -> Result<bool, SubmitError>;
}

#[derive(Serialize)]
struct FormPayload<'a> {
    access_key: &'a str,
    from_name: &'a str,
    subject: String,
    message: String,
}

#[derive(Deserialize)]
struct FormReply {
    #[serde(default)]
    success: bool,
}

/// Client for the Web3Forms JSON form endpoint.
pub struct Web3FormsClient {
    client: Client,
    endpoint: String,
    access_key: String,
}

impl Web3FormsClient {
    pub fn new(endpoint: &str, access_key: &str) -> Result<Self, SubmitError> {
        if access_key.trim().is_empty() {
            return Err(SubmitError::NotConfigured);
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            access_key: access_key.to_string(),
        })
    }
}

impl SubmissionEndpoint for Web3FormsClient {
    fn submit(&self, request: &SubmissionRequest) -> Result<bool, SubmitError> {
        let payload = FormPayload {
            access_key: &self.access_key,
            from_name: request.contact.name.trim(),
            subject: request.subject(),
            message: request.message(),
        };

        debug!(endpoint = %self.endpoint, "posting configuration summary");
        let response = self.client.post(&self.endpoint).json(&payload).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
            });
        }

        let reply: FormReply = response.json()?;
        info!(success = reply.success, "submission answered");
        Ok(reply.success)
    }
}
