use super::{to_mutation_result, AddListEntryInput, FormMutationResult, RemoveListEntryInput};
use crate::types::form::FormView;
use crate::utilities::FormSessions;
use async_graphql::{Context, Result};

pub(super) async fn add_list_entry(
    ctx: &Context<'_>,
    input: AddListEntryInput,
) -> Result<FormMutationResult> {
    let sessions = ctx.data::<FormSessions>()?;
    let id = input.id;

    let result = sessions.with_session(&id, |session| {
        let key = session.add_list_entry(input.group);
        tracing::debug!(session_id = %id, field = %key, "list entry added");
        Ok(FormView::from_session(id, session))
    });

    Ok(to_mutation_result(id, result))
}

pub(super) async fn remove_list_entry(
    ctx: &Context<'_>,
    input: RemoveListEntryInput,
) -> Result<FormMutationResult> {
    let sessions = ctx.data::<FormSessions>()?;
    let id = input.id;

    let result = sessions.with_session(&id, |session| {
        session
            .remove_list_entry(input.group, input.index as usize)
            .map(|_| FormView::from_session(id, session))
    });

    Ok(to_mutation_result(id, result))
}
