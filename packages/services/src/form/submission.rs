use super::session::FormSession;
use crate::validation::{ErrorMap, InputValidator};
use models::FormValues;
use serde::Serialize;

/// Terminal decision of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "payload", rename_all = "camelCase")]
pub enum Outcome {
    /// Every field passed; carries the submitted values
    Accepted(FormValues),
    /// At least one field failed; carries the complete error map
    Rejected(ErrorMap),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

pub struct SubmissionGate;

impl SubmissionGate {
    /// Run a full pass over `session`, store its result as the live errors and
    /// decide. Reactive results cached in the session are not consulted.
    pub fn try_submit(session: &mut FormSession) -> Outcome {
        match session.values().validate() {
            Ok(()) => {
                session.replace_errors(ErrorMap::new());
                tracing::info!("form submitted successfully");
                Outcome::Accepted(session.snapshot())
            }
            Err(errors) => {
                session.replace_errors(errors.clone());
                tracing::warn!(
                    error_count = errors.len(),
                    "form submission failed due to validation errors"
                );
                Outcome::Rejected(errors)
            }
        }
    }
}
