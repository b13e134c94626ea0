use crate::validation::{ErrorMap, ErrorMapExt, FieldValidator, ValidationContext};
use models::{FieldKey, FormValues, ListGroup};

/// Keeps an [`ErrorMap`] derived from the values it was computed from.
///
/// The reactive entry points recompute only the keys a mutation touched and
/// write them into an existing map. [`ValidationOrchestrator::full`] builds a
/// fresh map from every value and is what submission relies on.
pub struct ValidationOrchestrator;

impl ValidationOrchestrator {
    /// Recompute `keys` against the current values. A key whose list entry no
    /// longer exists is cleared.
    pub fn revalidate(values: &FormValues, errors: &mut ErrorMap, keys: &[FieldKey]) {
        let ctx = ValidationContext::from(values);

        for &key in keys {
            let message = values
                .value(key)
                .and_then(|value| FieldValidator::validate(key, value, ctx));
            tracing::debug!(field = %key, valid = message.is_none(), "field revalidated");
            errors.record(key, message);
        }
    }

    /// Drop every cached error of `group` and validate its entries again under
    /// their current indices.
    pub fn revalidate_group(values: &FormValues, errors: &mut ErrorMap, group: ListGroup) {
        errors.retain(|key, _| {
            key.parse::<FieldKey>()
                .map_or(true, |key| key.group() != Some(group))
        });

        let keys: Vec<FieldKey> = values.group_keys(group).collect();
        Self::revalidate(values, errors, &keys);
    }

    pub fn full(values: &FormValues) -> ErrorMap {
        let ctx = ValidationContext::from(values);

        values
            .keys()
            .filter_map(|key| {
                let value = values.value(key)?;
                FieldValidator::validate(key, value, ctx).map(|message| (key.to_string(), message))
            })
            .collect()
    }
}
