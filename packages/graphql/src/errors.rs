use async_graphql::SimpleObject;
use services::FormError;
use uuid::Uuid;

#[derive(SimpleObject, Debug)]
pub struct FormErrorType {
    pub message: String,
}

impl From<FormError> for FormErrorType {
    fn from(e: FormError) -> Self {
        FormErrorType { message: e.to_string() }
    }
}

#[derive(SimpleObject, Debug)]
pub struct SessionNotFound {
    pub id: Uuid,
    pub message: String,
}

impl SessionNotFound {
    pub fn new(id: Uuid) -> Self {
        SessionNotFound {
            id,
            message: "Form session not found".to_string(),
        }
    }
}
