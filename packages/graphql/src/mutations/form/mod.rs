use crate::errors::{FormErrorType, SessionNotFound};
use crate::types::form::{FormView, SubmissionAccepted, SubmissionRejected};
use async_graphql::{Context, InputObject, Object, Result, Union};
use models::{ListGroup, ScalarField};
use services::FormError;
use uuid::Uuid;

mod lifecycle;
mod list_entries;
mod set_field;
mod submit_form;

#[derive(Union)]
pub enum FormMutationResult {
    Form(FormView),
    FormError(FormErrorType),
    SessionNotFound(SessionNotFound),
}

#[derive(Union)]
pub enum SubmitFormResult {
    Accepted(SubmissionAccepted),
    Rejected(SubmissionRejected),
    SessionNotFound(SessionNotFound),
}

#[derive(InputObject)]
pub struct SetScalarInput {
    pub id: Uuid,
    pub field: ScalarField,
    pub value: String,
}

#[derive(InputObject)]
pub struct SetListEntryInput {
    pub id: Uuid,
    pub group: ListGroup,
    pub index: u32,
    pub value: String,
}

#[derive(InputObject)]
pub struct AddListEntryInput {
    pub id: Uuid,
    pub group: ListGroup,
}

#[derive(InputObject)]
pub struct RemoveListEntryInput {
    pub id: Uuid,
    pub group: ListGroup,
    pub index: u32,
}

/// Map the result of running an intent against a session.
pub(super) fn to_mutation_result(
    id: Uuid,
    result: Option<Result<FormView, FormError>>,
) -> FormMutationResult {
    match result {
        Some(Ok(view)) => FormMutationResult::Form(view),
        Some(Err(e)) => {
            tracing::warn!(session_id = %id, error = %e, "form intent refused");
            FormMutationResult::FormError(e.into())
        }
        None => FormMutationResult::SessionNotFound(SessionNotFound::new(id)),
    }
}

#[derive(Default)]
pub struct FormMutation;

#[Object]
impl FormMutation {
    /// Start a new, empty form session
    async fn create_form(&self, ctx: &Context<'_>) -> Result<FormView> {
        lifecycle::create_form(ctx).await
    }

    /// Abandon a form session
    async fn discard_form(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        lifecycle::discard_form(ctx, id).await
    }

    async fn set_scalar(
        &self,
        ctx: &Context<'_>,
        input: SetScalarInput,
    ) -> Result<FormMutationResult> {
        set_field::set_scalar(ctx, input).await
    }

    async fn set_list_entry(
        &self,
        ctx: &Context<'_>,
        input: SetListEntryInput,
    ) -> Result<FormMutationResult> {
        set_field::set_list_entry(ctx, input).await
    }

    async fn add_list_entry(
        &self,
        ctx: &Context<'_>,
        input: AddListEntryInput,
    ) -> Result<FormMutationResult> {
        list_entries::add_list_entry(ctx, input).await
    }

    async fn remove_list_entry(
        &self,
        ctx: &Context<'_>,
        input: RemoveListEntryInput,
    ) -> Result<FormMutationResult> {
        list_entries::remove_list_entry(ctx, input).await
    }

    /// Validate every field and accept or reject the form. An accepted session
    /// is discarded.
    async fn submit_form(&self, ctx: &Context<'_>, id: Uuid) -> Result<SubmitFormResult> {
        submit_form::submit_form(ctx, id).await
    }
}
