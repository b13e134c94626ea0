use crate::utilities::FormSessions;
use crate::{build_schema, FormSchema};
use std::time::Duration;

pub fn create_test_schema() -> (FormSchema, FormSessions) {
    create_test_schema_with_ttl(Duration::from_secs(60))
}

pub fn create_test_schema_with_ttl(ttl: Duration) -> (FormSchema, FormSessions) {
    let sessions = FormSessions::with_ttl(ttl);
    (build_schema(sessions.clone()), sessions)
}

pub fn valid_password() -> String {
    "longenough1".to_string()
}
