use models::FieldKey;
use std::collections::BTreeMap;

/// Rendered field key (see [`FieldKey`]'s `Display`) to the message shown for
/// it. Only failing fields have an entry.
pub type ErrorMap = BTreeMap<String, String>;

pub trait InputValidator {
    fn validate(&self) -> Result<(), ErrorMap>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// Helper trait for keeping an error map in step with field results
pub trait ErrorMapExt {
    /// Store the result of validating `key`: a message replaces the entry,
    /// `None` removes it.
    fn record(&mut self, key: FieldKey, message: Option<String>);
    fn error_for(&self, key: FieldKey) -> Option<&str>;
    fn clear_key(&mut self, key: FieldKey);
}

impl ErrorMapExt for ErrorMap {
    fn record(&mut self, key: FieldKey, message: Option<String>) {
        match message {
            Some(message) => {
                self.insert(key.to_string(), message);
            }
            None => self.clear_key(key),
        }
    }

    fn error_for(&self, key: FieldKey) -> Option<&str> {
        self.get(&key.to_string()).map(String::as_str)
    }

    fn clear_key(&mut self, key: FieldKey) {
        self.remove(&key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{ListGroup, ScalarField};

    #[test]
    fn test_record_inserts_and_clears() {
        let mut errors = ErrorMap::new();
        let key = FieldKey::from(ScalarField::Username);

        errors.record(key, Some("Username is required".to_string()));
        assert_eq!(errors.error_for(key), Some("Username is required"));

        errors.record(key, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_list_keys_are_rendered() {
        let mut errors = ErrorMap::new();
        errors.record(
            FieldKey::list(ListGroup::PhoneNumber, 2),
            Some("Phone number is invalid".to_string()),
        );
        assert_eq!(
            errors.get("phonenumber-2").map(String::as_str),
            Some("Phone number is invalid")
        );
    }
}
