use models::{FieldKeyParseError, ListGroup};
use thiserror::Error;

/// Structural misuse of a form. The operation that returned it changed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("`{group}` has no entry at index {index} (length {len})")]
    IndexOutOfRange {
        group: ListGroup,
        index: usize,
        len: usize,
    },

    #[error("`{group}` must keep at least one entry")]
    LastEntry { group: ListGroup },
}

impl From<FieldKeyParseError> for FormError {
    fn from(e: FieldKeyParseError) -> Self {
        FormError::UnknownField(e.input)
    }
}
