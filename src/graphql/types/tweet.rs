use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::user::User;
use crate::store::TweetRecord;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Tweet {
    pub id: ID,
    pub text: String,
    pub user_id: ID,
}

impl Tweet {
    /// The empty-valued tweet returned when a post targets a missing user.
    /// Kept for wire compatibility with existing clients.
    pub fn sentinel() -> Self {
        Self {
            id: ID::from(""),
            text: String::new(),
            user_id: ID::from(""),
        }
    }
}

impl From<TweetRecord> for Tweet {
    fn from(record: TweetRecord) -> Self {
        Self {
            id: ID::from(record.id),
            text: record.text,
            user_id: ID::from(record.user_id),
        }
    }
}

#[ComplexObject]
impl Tweet {
    /// The posting user; null when the user id matches no user.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(context
            .store
            .find_user(self.user_id.as_str())
            .await
            .map(User::from))
    }
}
