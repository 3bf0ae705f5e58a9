use std::sync::Arc;

use async_graphql::*;

use crate::app_context::AppContext;
use crate::graphql::context::GraphQLContext;
use crate::graphql::mutations::Mutation;
use crate::graphql::queries::Query;

pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema(app: Arc<AppContext>) -> GraphQLSchema {
    Schema::build(Query, Mutation::default(), EmptySubscription)
        .data(GraphQLContext::new(app))
        .finish()
}
