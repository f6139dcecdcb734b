pub mod client;
pub mod contact;
pub mod dispatch;
pub mod request;

pub use crate::error::SubmitError;
pub use client::{Web3FormsClient, SubmissionEndpoint, DEFAULT_ENDPOINT};
pub use contact::{ContactDetails, ContactField, FieldError};
pub use dispatch::{dispatch, PendingSubmission, SubmissionOutcome, RETRY_MESSAGE};
pub use request::SubmissionRequest;
