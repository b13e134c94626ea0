use super::{to_mutation_result, FormMutationResult, SetListEntryInput, SetScalarInput};
use crate::types::form::FormView;
use crate::utilities::FormSessions;
use async_graphql::{Context, Result};

pub(super) async fn set_scalar(
    ctx: &Context<'_>,
    input: SetScalarInput,
) -> Result<FormMutationResult> {
    let sessions = ctx.data::<FormSessions>()?;
    let id = input.id;

    let result = sessions.with_session(&id, |session| {
        session.set_scalar(input.field, input.value);
        Ok(FormView::from_session(id, session))
    });

    Ok(to_mutation_result(id, result))
}

pub(super) async fn set_list_entry(
    ctx: &Context<'_>,
    input: SetListEntryInput,
) -> Result<FormMutationResult> {
    let sessions = ctx.data::<FormSessions>()?;
    let id = input.id;

    let result = sessions.with_session(&id, |session| {
        session
            .set_list_entry(input.group, input.index as usize, input.value)
            .map(|()| FormView::from_session(id, session))
    });

    Ok(to_mutation_result(id, result))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;

    #[tokio::test]
    async fn test_set_scalar_revalidates_field() {
        let (schema, sessions) = create_test_schema();
        let id = sessions.create();

        let query = format!(
            r#"mutation {{ setScalar(input: {{ id: "{}", field: USERNAME, value: "abc" }}) {{
                ... on FormView {{ values {{ username }} errors {{ key message }} }}
                ... on SessionNotFound {{ message }}
            }} }}"#,
            id
        );

        let res = schema.execute(Request::new(&query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["setScalar"]["values"]["username"], "abc");
        let errors = data["setScalar"]["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["key"] == "username"
            && e["message"] == "Username must be at least 4 characters long"));
    }

    #[tokio::test]
    async fn test_set_password_revalidates_confirmation() {
        let (schema, sessions) = create_test_schema();
        let id = sessions.create();

        for (field, value) in [("CONFIRM_PASSWORD", valid_password()), ("PASSWORD", valid_password())] {
            let query = format!(
                r#"mutation {{ setScalar(input: {{ id: "{}", field: {}, value: "{}" }}) {{
                    ... on FormView {{ id }}
                }} }}"#,
                id, field, value
            );
            let res = schema.execute(Request::new(&query)).await;
            assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        }

        let session = sessions.get(&id).unwrap();
        assert!(session.errors().get("confirmPassword").is_none());
        assert!(session.errors().get("password").is_none());
    }

    #[tokio::test]
    async fn test_set_list_entry() {
        let (schema, sessions) = create_test_schema();
        let id = sessions.create();

        let query = format!(
            r#"mutation {{ setListEntry(input: {{ id: "{}", group: PHONE_NUMBER, index: 0, value: "12345" }}) {{
                ... on FormView {{ phonenumber {{ key value error }} }}
            }} }}"#,
            id
        );

        let res = schema.execute(Request::new(&query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        let entry = &data["setListEntry"]["phonenumber"][0];
        assert_eq!(entry["value"], "12345");
        assert_eq!(entry["error"], "Phone number is invalid");
    }

    #[tokio::test]
    async fn test_set_list_entry_out_of_range_returns_form_error() {
        let (schema, sessions) = create_test_schema();
        let id = sessions.create();

        let query = format!(
            r#"mutation {{ setListEntry(input: {{ id: "{}", group: ADDRESS, index: 3, value: "1 Main St" }}) {{
                ... on FormErrorType {{ message }}
                ... on FormView {{ id }}
            }} }}"#,
            id
        );

        let res = schema.execute(Request::new(&query)).await;
        let data = res.data.into_json().unwrap();
        assert_eq!(
            data["setListEntry"]["message"],
            "`address` has no entry at index 3 (length 1)"
        );
        assert_eq!(sessions.get(&id).unwrap().values().address, vec![String::new()]);
    }

    #[tokio::test]
    async fn test_unknown_session_returns_not_found() {
        let (schema, _) = create_test_schema();

        let query = format!(
            r#"mutation {{ setScalar(input: {{ id: "{}", field: EMAIL, value: "a@b.com" }}) {{
                ... on SessionNotFound {{ message }}
            }} }}"#,
            uuid::Uuid::new_v4()
        );

        let res = schema.execute(Request::new(&query)).await;
        let data = res.data.into_json().unwrap();
        assert_eq!(data["setScalar"]["message"], "Form session not found");
    }

    #[tokio::test]
    async fn test_abandoned_session_returns_not_found() {
        let (schema, sessions) = create_test_schema_with_ttl(std::time::Duration::ZERO);
        let id = sessions.create();

        let query = format!(
            r#"mutation {{ setScalar(input: {{ id: "{}", field: EMAIL, value: "a@b.com" }}) {{
                ... on SessionNotFound {{ id message }}
                ... on FormView {{ id }}
            }} }}"#,
            id
        );

        let res = schema.execute(Request::new(&query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["setScalar"]["message"], "Form session not found");
        assert_eq!(data["setScalar"]["id"], id.to_string());
        assert!(sessions.is_empty());
    }
}
