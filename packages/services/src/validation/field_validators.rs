use super::password::validate_password;
use models::{FieldKey, FormValues, ListGroup, ScalarField};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of characters in a username
pub const USERNAME_MIN_LEN: usize = 4;

// something@something.something, no whitespace in any part
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

static PHONE_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone number pattern compiles"));

/// Values other fields are checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    pub password: &'a str,
}

impl<'a> From<&'a FormValues> for ValidationContext<'a> {
    fn from(values: &'a FormValues) -> Self {
        Self {
            password: &values.password,
        }
    }
}

/// Per-field rules of the sign-up form. Every function returns the message to
/// show, or `None` when the value is valid.
pub struct FieldValidator;

impl FieldValidator {
    pub fn validate(key: FieldKey, value: &str, ctx: ValidationContext<'_>) -> Option<String> {
        match key {
            FieldKey::Scalar(ScalarField::Username) => Self::validate_username(value),
            FieldKey::Scalar(ScalarField::Email) => Self::validate_email(value),
            FieldKey::Scalar(ScalarField::Password) => Self::validate_password_field(value),
            FieldKey::Scalar(ScalarField::ConfirmPassword) => {
                Self::validate_confirm_password(value, ctx.password)
            }
            FieldKey::List {
                group: ListGroup::PhoneNumber,
                ..
            } => Self::validate_phone_number(value),
            FieldKey::List {
                group: ListGroup::Address,
                ..
            } => Self::validate_address(value),
        }
    }

    /// Validate by rendered key name. Names that are not form fields are valid.
    pub fn validate_named(name: &str, value: &str, ctx: ValidationContext<'_>) -> Option<String> {
        name.parse::<FieldKey>()
            .ok()
            .and_then(|key| Self::validate(key, value, ctx))
    }

    pub fn validate_username(username: &str) -> Option<String> {
        if username.trim().is_empty() {
            return Some("Username is required".to_string());
        }

        if username.chars().count() < USERNAME_MIN_LEN {
            return Some(format!(
                "Username must be at least {} characters long",
                USERNAME_MIN_LEN
            ));
        }

        None
    }

    pub fn validate_email(email: &str) -> Option<String> {
        if email.trim().is_empty() {
            return Some("Email is required".to_string());
        }

        if !EMAIL_PATTERN.is_match(email) {
            return Some("Email is invalid".to_string());
        }

        None
    }

    pub fn validate_password_field(password: &str) -> Option<String> {
        validate_password(password).err().map(|e| e.to_string())
    }

    // An empty confirmation matching an empty password passes here; the
    // password field reports the missing value.
    pub fn validate_confirm_password(confirm: &str, password: &str) -> Option<String> {
        if confirm != password {
            return Some("Passwords do not match".to_string());
        }

        None
    }

    pub fn validate_phone_number(phone: &str) -> Option<String> {
        if phone.trim().is_empty() {
            return Some("Phone number is required".to_string());
        }

        if !PHONE_NUMBER_PATTERN.is_match(phone) {
            return Some("Phone number is invalid".to_string());
        }

        None
    }

    pub fn validate_address(address: &str) -> Option<String> {
        if address.trim().is_empty() {
            return Some("Address is required".to_string());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, value: &str) -> Option<String> {
        FieldValidator::validate_named(name, value, ValidationContext::default())
    }

    #[test]
    fn test_username_rules() {
        assert_eq!(check("username", "").as_deref(), Some("Username is required"));
        assert_eq!(check("username", "   ").as_deref(), Some("Username is required"));

        for short in ["a", "ab", "abc", " ab", "x y"] {
            assert_eq!(
                check("username", short).as_deref(),
                Some("Username must be at least 4 characters long"),
                "{short:?}"
            );
        }

        assert_eq!(check("username", "abcd"), None);
        // length is measured on the raw value
        assert_eq!(check("username", " abc"), None);
    }

    #[test]
    fn test_username_length_counts_characters_not_utf16_units() {
        // two characters, four UTF-16 code units
        assert_eq!(
            check("username", "😀😀").as_deref(),
            Some("Username must be at least 4 characters long")
        );
        assert_eq!(check("username", "😀😀😀😀"), None);
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(check("email", "").as_deref(), Some("Email is required"));
        assert_eq!(check("email", " \t").as_deref(), Some("Email is required"));

        for invalid in ["plainaddress", "a@b", "@b.com", "a@.com", "a.b@c", "a @b.c"] {
            assert_eq!(check("email", invalid).as_deref(), Some("Email is invalid"), "{invalid:?}");
        }

        for valid in ["a@b.com", "first.last@example.co.uk", "x@y.z"] {
            assert_eq!(check("email", valid), None, "{valid:?}");
        }
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(check("password", "").as_deref(), Some("Password is required"));
        assert_eq!(
            check("password", "1234567").as_deref(),
            Some("Password must be at least 8 characters long")
        );
        assert_eq!(check("password", "12345678"), None);
    }

    #[test]
    fn test_confirm_password_matches_context() {
        let ctx = ValidationContext { password: "longenough1" };
        assert_eq!(
            FieldValidator::validate(ScalarField::ConfirmPassword.into(), "longenough1", ctx),
            None
        );
        assert_eq!(
            FieldValidator::validate(ScalarField::ConfirmPassword.into(), "longenough2", ctx)
                .as_deref(),
            Some("Passwords do not match")
        );
        assert_eq!(
            FieldValidator::validate(ScalarField::ConfirmPassword.into(), "", ctx).as_deref(),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_empty_confirm_password_matching_empty_password_is_valid() {
        // never reports "required"
        assert_eq!(check("confirmPassword", ""), None);
    }

    #[test]
    fn test_phone_number_rules() {
        assert_eq!(check("phonenumber-0", "").as_deref(), Some("Phone number is required"));
        assert_eq!(check("phonenumber-4", "  ").as_deref(), Some("Phone number is required"));

        for invalid in ["123456789", "12345678901", "12345abcde", "123 456 7890", " 1234567890", "１２３４５６７８９０"] {
            assert_eq!(
                check("phonenumber-0", invalid).as_deref(),
                Some("Phone number is invalid"),
                "{invalid:?}"
            );
        }

        assert_eq!(check("phonenumber-0", "1234567890"), None);
        assert_eq!(check("phonenumber-7", "0000000000"), None);
    }

    #[test]
    fn test_address_rules() {
        assert_eq!(check("address-0", "").as_deref(), Some("Address is required"));
        assert_eq!(check("address-1", "\n").as_deref(), Some("Address is required"));
        assert_eq!(check("address-0", "1 Main St"), None);
    }

    #[test]
    fn test_unknown_names_are_valid() {
        assert_eq!(check("nickname", ""), None);
        assert_eq!(check("phonenumber", ""), None);
        assert_eq!(check("address-x", ""), None);
    }
}
