pub mod error;
pub mod orchestrator;
pub mod session;
pub mod submission;

pub use error::FormError;
pub use orchestrator::ValidationOrchestrator;
pub use session::FormSession;
pub use submission::{Outcome, SubmissionGate};
