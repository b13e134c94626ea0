use crate::form::orchestrator::ValidationOrchestrator;
use crate::validation::input_validator::{ErrorMap, InputValidator};
use models::FormValues;

impl InputValidator for FormValues {
    fn validate(&self) -> Result<(), ErrorMap> {
        let errors = ValidationOrchestrator::full(self);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
