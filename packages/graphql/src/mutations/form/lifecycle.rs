use crate::types::form::FormView;
use crate::utilities::FormSessions;
use async_graphql::{Context, Result};
use uuid::Uuid;

pub(super) async fn create_form(ctx: &Context<'_>) -> Result<FormView> {
    let sessions = ctx.data::<FormSessions>()?;
    let id = sessions.create();

    let view = sessions
        .with_session(&id, |session| FormView::from_session(id, session))
        .ok_or("Form session not found")?;

    tracing::info!(session_id = %id, "form session started");
    Ok(view)
}

pub(super) async fn discard_form(ctx: &Context<'_>, id: Uuid) -> Result<bool> {
    let sessions = ctx.data::<FormSessions>()?;
    let discarded = sessions.discard(&id);

    if discarded {
        tracing::info!(session_id = %id, "form session discarded");
    }
    Ok(discarded)
}
