use super::error::FormError;
use super::orchestrator::ValidationOrchestrator;
use super::submission::{Outcome, SubmissionGate};
use crate::validation::{ErrorMap, ErrorMapExt};
use models::{FieldKey, FormValues, ListGroup, ScalarField};

/// One user's in-progress form: the entered values and the errors derived
/// from them.
///
/// Values only change through the mutation methods below, and each of them
/// recomputes the errors of the keys it touched before returning. A method
/// returning `Err` leaves both values and errors as they were.
#[derive(Debug, Clone)]
pub struct FormSession {
    values: FormValues,
    errors: ErrorMap,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::from_values(FormValues::default())
    }

    /// Start from existing values. Empty lists get one blank entry.
    pub fn from_values(mut values: FormValues) -> Self {
        for group in ListGroup::ALL {
            let entries = values.list_mut(group);
            if entries.is_empty() {
                entries.push(String::new());
            }
        }

        let errors = ValidationOrchestrator::full(&values);
        Self { values, errors }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, key: FieldKey) -> Option<&str> {
        self.errors.error_for(key)
    }

    /// Whether the cached errors are empty. Submission does not trust this and
    /// validates everything again.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn snapshot(&self) -> FormValues {
        self.values.clone()
    }

    pub fn set_scalar(&mut self, field: ScalarField, value: impl Into<String>) {
        *self.values.scalar_mut(field) = value.into();

        match field {
            ScalarField::Password => self.revalidate(&[
                ScalarField::Password.into(),
                ScalarField::ConfirmPassword.into(),
            ]),
            _ => self.revalidate(&[field.into()]),
        }
    }

    pub fn set_list_entry(
        &mut self,
        group: ListGroup,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let entries = self.values.list_mut(group);
        let len = entries.len();
        let entry = entries
            .get_mut(index)
            .ok_or(FormError::IndexOutOfRange { group, index, len })?;
        *entry = value.into();

        self.revalidate(&[FieldKey::list(group, index)]);
        Ok(())
    }

    /// Set a value by its rendered key, e.g. `"email"` or `"address-1"`.
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        match name.parse::<FieldKey>()? {
            FieldKey::Scalar(field) => {
                self.set_scalar(field, value);
                Ok(())
            }
            FieldKey::List { group, index } => self.set_list_entry(group, index, value),
        }
    }

    /// Append a blank entry to `group` and return its key.
    pub fn add_list_entry(&mut self, group: ListGroup) -> FieldKey {
        let entries = self.values.list_mut(group);
        entries.push(String::new());
        let key = FieldKey::list(group, entries.len() - 1);

        self.revalidate(&[key]);
        key
    }

    /// Remove the entry at `index`, shifting later entries down. The group's
    /// errors are rebuilt so none stay attached to an old index.
    pub fn remove_list_entry(&mut self, group: ListGroup, index: usize) -> Result<String, FormError> {
        let entries = self.values.list_mut(group);
        let len = entries.len();
        if len <= 1 {
            tracing::warn!(group = %group, index, "refused to remove the last list entry");
            return Err(FormError::LastEntry { group });
        }
        if index >= len {
            tracing::warn!(group = %group, index, len, "refused to remove a missing list entry");
            return Err(FormError::IndexOutOfRange { group, index, len });
        }
        let removed = entries.remove(index);

        ValidationOrchestrator::revalidate_group(&self.values, &mut self.errors, group);
        Ok(removed)
    }

    /// Validate everything and decide whether the form is accepted. The live
    /// errors are replaced by the full result either way.
    pub fn submit(&mut self) -> Outcome {
        SubmissionGate::try_submit(self)
    }

    pub(crate) fn replace_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    fn revalidate(&mut self, keys: &[FieldKey]) {
        ValidationOrchestrator::revalidate(&self.values, &mut self.errors, keys);
    }
}
