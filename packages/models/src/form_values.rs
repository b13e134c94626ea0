use crate::field_key::{FieldKey, ListGroup, ScalarField};
use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// Every value entered into the sign-up form.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phonenumber: Vec<String>,
    pub address: Vec<String>,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            phonenumber: vec![String::new()],
            address: vec![String::new()],
        }
    }
}

impl FormValues {
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Username => &self.username,
            ScalarField::Email => &self.email,
            ScalarField::Password => &self.password,
            ScalarField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Username => &mut self.username,
            ScalarField::Email => &mut self.email,
            ScalarField::Password => &mut self.password,
            ScalarField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn list(&self, group: ListGroup) -> &[String] {
        match group {
            ListGroup::PhoneNumber => &self.phonenumber,
            ListGroup::Address => &self.address,
        }
    }

    pub fn list_mut(&mut self, group: ListGroup) -> &mut Vec<String> {
        match group {
            ListGroup::PhoneNumber => &mut self.phonenumber,
            ListGroup::Address => &mut self.address,
        }
    }

    /// Current value behind `key`, `None` when a list index is past the end.
    pub fn value(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::Scalar(field) => Some(self.scalar(field)),
            FieldKey::List { group, index } => self.list(group).get(index).map(String::as_str),
        }
    }

    /// Keys of all values in form order: scalars first, then each list entry.
    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        ScalarField::ALL.into_iter().map(FieldKey::from).chain(
            ListGroup::ALL
                .into_iter()
                .flat_map(move |group| (0..self.list(group).len()).map(move |i| FieldKey::list(group, i))),
        )
    }

    pub fn group_keys(&self, group: ListGroup) -> impl Iterator<Item = FieldKey> {
        (0..self.list(group).len()).map(move |index| FieldKey::list(group, index))
    }
}
