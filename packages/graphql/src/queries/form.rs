use crate::types::form::FormView;
use crate::utilities::FormSessions;
use async_graphql::{Context, Object, Result};
use services::{FieldValidator, ValidationContext};
use uuid::Uuid;

#[derive(Default)]
pub struct FormQueries;

#[Object]
impl FormQueries {
    /// Current values and errors of a form session
    async fn form(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<FormView>> {
        let sessions = ctx.data::<FormSessions>()?;
        Ok(sessions
            .get(&id)
            .map(|session| FormView::from_session(id, &session)))
    }

    /// Check one value against the rule for `name` without touching a session.
    /// `password` is what `confirmPassword` is compared with.
    async fn validate_field(
        &self,
        name: String,
        value: String,
        password: Option<String>,
    ) -> Option<String> {
        let ctx = ValidationContext {
            password: password.as_deref().unwrap_or_default(),
        };
        FieldValidator::validate_named(&name, &value, ctx)
    }
}
