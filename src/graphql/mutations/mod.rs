// Mutation root, one submodule per functional area

mod author;

use async_graphql::*;

/// Main mutation root that combines all mutation submodules
#[derive(Default, MergedObject)]
pub struct Mutation(pub author::AuthorMutation);
