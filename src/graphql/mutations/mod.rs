use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Tweet;

pub struct Mutation;

#[Object]
impl Mutation {
    /// Post a tweet for an existing user.
    ///
    /// When no user with `user_id` exists, nothing is appended and the
    /// empty sentinel tweet is returned instead of an error. Callers detect
    /// the miss by the empty id.
    async fn post_tweet(&self, ctx: &Context<'_>, text: String, user_id: ID) -> Result<Tweet> {
        let context = ctx.data::<GraphQLContext>()?;
        match context.store.append_tweet(&text, user_id.as_str()).await {
            Some(tweet) => Ok(Tweet::from(tweet)),
            None => Ok(Tweet::sentinel()),
        }
    }

    /// Delete a tweet by id; false when no such tweet exists
    async fn delete_tweet(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(context.store.remove_tweet(id.as_str()).await)
    }
}
