use super::{SubmissionEndpoint, SubmissionRequest};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use tracing::{info, warn};

/// The only message shown for any failed submission.
pub const RETRY_MESSAGE: &str = "Failed to send form. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Failed(String),
}

/// Handle to a submission running in the background.
///
/// Dropping the handle stops listening; the request itself is not cancelled.
pub struct PendingSubmission {
    receiver: Receiver<SubmissionOutcome>,
}

impl PendingSubmission {
    /// Non-blocking check. `None` while the request is still in flight.
    #[must_use]
    pub fn poll(&self) -> Option<SubmissionOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(SubmissionOutcome::Failed(
                RETRY_MESSAGE.to_string(),
            )),
        }
    }

    /// Blocks until the outcome arrives.
    #[must_use]
    pub fn wait(self) -> SubmissionOutcome {
        self.receiver
            .recv()
            .unwrap_or_else(|_| SubmissionOutcome::Failed(RETRY_MESSAGE.to_string()))
    }
}

/// Sends the request on a worker thread and returns immediately.
#[must_use]
pub fn dispatch(
    endpoint: Arc<dyn SubmissionEndpoint>,
    request: SubmissionRequest,
) -> PendingSubmission {
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let outcome = match endpoint.submit(&request) {
            Ok(true) => {
                info!("configuration submitted");
                SubmissionOutcome::Sent
            }
            Ok(false) => {
                warn!("endpoint declined submission");
                SubmissionOutcome::Failed(RETRY_MESSAGE.to_string())
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                SubmissionOutcome::Failed(RETRY_MESSAGE.to_string())
            }
        };
        // Receiver gone means the dialog was closed.
        let _ = sender.send(outcome);
    });

    PendingSubmission { receiver }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;
    use crate::loader::builtin_catalog;
    use crate::model::SelectionState;
    use crate::submit::ContactDetails;
    use crate::summary::ConfigurationSummary;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    struct Recording {
        answer: fn() -> Result<bool, SubmitError>,
        seen: Mutex<Vec<String>>,
    }

    impl SubmissionEndpoint for Recording {
        fn submit(&self, request: &SubmissionRequest) -> Result<bool, SubmitError> {
            self.seen.lock().unwrap().push(request.subject());
            (self.answer)()
        }
    }

    fn request() -> SubmissionRequest {
        let catalog = builtin_catalog().unwrap();
        SubmissionRequest::new(
            ContactDetails {
                name: "Sam".to_string(),
                ..ContactDetails::default()
            },
            ConfigurationSummary::new(&SelectionState::new(), &catalog),
        )
    }

    #[test]
    fn success_is_sent() {
        let endpoint = Arc::new(Recording {
            answer: || Ok(true),
            seen: Mutex::new(Vec::new()),
        });

        let outcome = dispatch(endpoint.clone(), request()).wait();

        assert_eq!(outcome, SubmissionOutcome::Sent);
        assert_eq!(
            *endpoint.seen.lock().unwrap(),
            vec!["Van Configuration Request - Sam - Package Not Selected".to_string()]
        );
    }

    #[test]
    fn declined_and_failed_share_one_message() {
        for answer in [
            (|| Ok(false)) as fn() -> Result<bool, SubmitError>,
            || Err(SubmitError::Status { status: 500 }),
        ] {
            let endpoint = Arc::new(Recording {
                answer,
                seen: Mutex::new(Vec::new()),
            });
            assert_eq!(
                dispatch(endpoint, request()).wait(),
                SubmissionOutcome::Failed(RETRY_MESSAGE.to_string())
            );
        }
    }
}
