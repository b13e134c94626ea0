use super::SubmitFormResult;
use crate::errors::SessionNotFound;
use crate::types::form::{field_errors, SubmissionAccepted, SubmissionRejected};
use crate::utilities::FormSessions;
use async_graphql::{Context, Result};
use services::Outcome;
use uuid::Uuid;

pub(super) async fn submit_form(ctx: &Context<'_>, id: Uuid) -> Result<SubmitFormResult> {
    let sessions = ctx.data::<FormSessions>()?;

    let outcome = match sessions.with_session(&id, |session| session.submit()) {
        Some(outcome) => outcome,
        None => return Ok(SubmitFormResult::SessionNotFound(SessionNotFound::new(id))),
    };

    match outcome {
        Outcome::Accepted(values) => {
            sessions.discard(&id);
            tracing::info!(session_id = %id, "form accepted");
            Ok(SubmitFormResult::Accepted(SubmissionAccepted { id, values }))
        }
        Outcome::Rejected(errors) => {
            tracing::warn!(session_id = %id, error_count = errors.len(), "form rejected");
            Ok(SubmitFormResult::Rejected(SubmissionRejected {
                id,
                errors: field_errors(&errors),
            }))
        }
    }
}
