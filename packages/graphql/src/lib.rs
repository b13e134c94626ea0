pub mod types;
pub mod queries;
pub mod mutations;
pub mod utilities;
pub mod errors;

#[cfg(test)]
pub mod test_helpers;

use async_graphql::{EmptySubscription, Schema};
use mutations::Mutations;
use queries::Queries;
use utilities::FormSessions;

pub type FormSchema = Schema<Queries, Mutations, EmptySubscription>;

pub fn build_schema(sessions: FormSessions) -> FormSchema {
    Schema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .data(sessions)
        .finish()
}
