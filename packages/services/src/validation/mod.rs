pub mod field_validators;
pub mod form_validator;
pub mod input_validator;
pub mod password;

// Re-export common types and functions
pub use field_validators::{FieldValidator, ValidationContext, USERNAME_MIN_LEN};
pub use input_validator::{ErrorMap, ErrorMapExt, InputValidator};
pub use password::{validate_password, PasswordValidationError, PASSWORD_MIN_LEN};
