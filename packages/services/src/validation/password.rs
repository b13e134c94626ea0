use std::fmt;

/// Minimum number of characters in a password
pub const PASSWORD_MIN_LEN: usize = 8;

/// Reasons a password is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordValidationError {
    /// Password is empty
    Required,
    /// Password is shorter than [`PASSWORD_MIN_LEN`]
    TooShort,
}

impl fmt::Display for PasswordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordValidationError::Required => write!(f, "Password is required"),
            PasswordValidationError::TooShort => write!(
                f,
                "Password must be at least {} characters long",
                PASSWORD_MIN_LEN
            ),
        }
    }
}

impl std::error::Error for PasswordValidationError {}

/// Validates a password against the sign-up requirements.
///
/// Only the empty string counts as missing: a password made of spaces is
/// accepted once it is long enough.
///
/// # Returns
/// * `Ok(())` if the password is valid
/// * `Err(PasswordValidationError)` if the password is invalid
pub fn validate_password(password: &str) -> Result<(), PasswordValidationError> {
    if password.is_empty() {
        return Err(PasswordValidationError::Required);
    }

    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(PasswordValidationError::TooShort);
    }

    Ok(())
}
