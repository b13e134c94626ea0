pub mod session_store;

pub use session_store::{FormSessions, DEFAULT_SESSION_TTL};
