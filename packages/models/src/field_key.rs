use async_graphql::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single-valued fields of the sign-up form.
#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl ScalarField {
    pub const ALL: [ScalarField; 4] = [
        ScalarField::Username,
        ScalarField::Email,
        ScalarField::Password,
        ScalarField::ConfirmPassword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarField::Username => "username",
            ScalarField::Email => "email",
            ScalarField::Password => "password",
            ScalarField::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarField {
    type Err = FieldKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldKeyParseError::new(s))
    }
}

/// Fields holding a variable-length list of entries. Every group keeps at
/// least one entry.
#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListGroup {
    PhoneNumber,
    Address,
}

impl ListGroup {
    pub const ALL: [ListGroup; 2] = [ListGroup::PhoneNumber, ListGroup::Address];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListGroup::PhoneNumber => "phonenumber",
            ListGroup::Address => "address",
        }
    }
}

impl fmt::Display for ListGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListGroup {
    type Err = FieldKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| FieldKeyParseError::new(s))
    }
}

/// Returned when a string does not name a field of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKeyParseError {
    pub input: String,
}

impl FieldKeyParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for FieldKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field key: {}", self.input)
    }
}

impl std::error::Error for FieldKeyParseError {}

/// Identifies one validated value of the form.
///
/// The `Display` form is the key used in the error map: the scalar name
/// (`"confirmPassword"`) or `"{group}-{index}"` (`"phonenumber-0"`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Scalar(ScalarField),
    List { group: ListGroup, index: usize },
}

impl FieldKey {
    pub fn list(group: ListGroup, index: usize) -> Self {
        FieldKey::List { group, index }
    }

    pub fn group(&self) -> Option<ListGroup> {
        match self {
            FieldKey::Scalar(_) => None,
            FieldKey::List { group, .. } => Some(*group),
        }
    }
}

impl From<ScalarField> for FieldKey {
    fn from(field: ScalarField) -> Self {
        FieldKey::Scalar(field)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Scalar(field) => f.write_str(field.as_str()),
            FieldKey::List { group, index } => write!(f, "{}-{}", group, index),
        }
    }
}

impl FromStr for FieldKey {
    type Err = FieldKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(field) = s.parse::<ScalarField>() {
            return Ok(FieldKey::Scalar(field));
        }

        let (group, index) = s.rsplit_once('-').ok_or_else(|| FieldKeyParseError::new(s))?;
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldKeyParseError::new(s));
        }

        let group = group.parse::<ListGroup>().map_err(|_| FieldKeyParseError::new(s))?;
        let index = index.parse::<usize>().map_err(|_| FieldKeyParseError::new(s))?;
        Ok(FieldKey::List { group, index })
    }
}
