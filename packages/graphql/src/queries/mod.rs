use async_graphql::MergedObject;
mod form;

#[derive(MergedObject, Default)]
pub struct Queries(form::FormQueries);
