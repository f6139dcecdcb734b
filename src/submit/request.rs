use super::ContactDetails;
use crate::summary::ConfigurationSummary;
use serde::Serialize;
use std::fmt::Write;

/// Immutable snapshot handed to a submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub contact: ContactDetails,
    pub summary: ConfigurationSummary,
}

impl SubmissionRequest {
    #[must_use]
    pub fn new(contact: ContactDetails, summary: ConfigurationSummary) -> Self {
        Self { contact, summary }
    }

    #[must_use]
    pub fn subject(&self) -> String {
        format!(
            "Van Configuration Request - {} - {}",
            self.contact.name.trim(),
            self.summary.model_name().unwrap_or("Package Not Selected")
        )
    }

    /// Plain-text body: configuration, customer details, then notes.
    #[must_use]
    pub fn message(&self) -> String {
        let c = &self.contact;
        let mut body = self.summary.to_string();

        let _ = write!(
            body,
            "\n\nCustomer Details\n---------------\nName: {}\nEmail: {}\nPhone: {}\nLocation: {}",
            c.name.trim(),
            c.email.trim(),
            c.phone.trim(),
            c.location.trim()
        );
        if !c.comments.trim().is_empty() {
            let _ = write!(body, "\n\nAdditional Notes:\n{}", c.comments.trim());
        }
        body
    }
}
