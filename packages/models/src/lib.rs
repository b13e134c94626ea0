pub mod field_key;
pub mod form_values;

pub use field_key::*;
pub use form_values::*;
