use async_graphql::SimpleObject;
use models::{FieldKey, FormValues, ListGroup};
use services::{ErrorMap, ErrorMapExt, FormSession};
use uuid::Uuid;

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub key: String,
    pub message: String,
}

/// One entry of a list field as the form renders it
#[derive(SimpleObject, Debug, Clone)]
pub struct ListEntry {
    pub key: String,
    pub index: u32,
    pub value: String,
    /// The first entry has no removal control
    pub removable: bool,
    pub error: Option<String>,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct FormView {
    pub id: Uuid,
    pub values: FormValues,
    pub phonenumber: Vec<ListEntry>,
    pub address: Vec<ListEntry>,
    pub errors: Vec<FieldError>,
    pub is_valid: bool,
}

impl FormView {
    pub fn from_session(id: Uuid, session: &FormSession) -> Self {
        FormView {
            id,
            values: session.snapshot(),
            phonenumber: list_entries(session, ListGroup::PhoneNumber),
            address: list_entries(session, ListGroup::Address),
            errors: field_errors(session.errors()),
            is_valid: session.is_valid(),
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct SubmissionAccepted {
    pub id: Uuid,
    pub values: FormValues,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct SubmissionRejected {
    pub id: Uuid,
    pub errors: Vec<FieldError>,
}

pub fn field_errors(errors: &ErrorMap) -> Vec<FieldError> {
    errors
        .iter()
        .map(|(key, message)| FieldError {
            key: key.clone(),
            message: message.clone(),
        })
        .collect()
}

fn list_entries(session: &FormSession, group: ListGroup) -> Vec<ListEntry> {
    session
        .values()
        .list(group)
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let key = FieldKey::list(group, index);
            ListEntry {
                key: key.to_string(),
                index: index as u32,
                value: value.clone(),
                removable: index > 0,
                error: session.errors().error_for(key).map(str::to_string),
            }
        })
        .collect()
}
