use async_graphql::*;
use tracing::warn;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{Movie, Tweet, User};

pub struct Query;

#[Object]
impl Query {
    /// Look up a single tweet by id
    async fn tweet(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Tweet>> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(context.store.find_tweet(id.as_str()).await.map(Tweet::from))
    }

    /// All tweets, in insertion order
    async fn all_tweets(&self, ctx: &Context<'_>) -> Result<Vec<Tweet>> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(context
            .store
            .list_tweets()
            .await
            .into_iter()
            .map(Tweet::from)
            .collect())
    }

    /// All users, in insertion order
    async fn all_users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(context
            .store
            .list_users()
            .await
            .into_iter()
            .map(User::from)
            .collect())
    }

    /// Current listing from the external movie catalog
    async fn all_movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let context = ctx.data::<GraphQLContext>()?;
        let movies = context.movies.list_movies().await.map_err(|e| {
            warn!("movie catalog listing failed: {}", e);
            StructuredError::gateway("list_movies", e)
        })?;

        Ok(movies.into_iter().map(Movie::from).collect())
    }

    /// Movie details by catalog id; null when the catalog has no such movie
    async fn movie(&self, ctx: &Context<'_>, id: String) -> Result<Option<Movie>> {
        let context = ctx.data::<GraphQLContext>()?;
        let movie = context.movies.movie_details(&id).await.map_err(|e| {
            warn!("movie catalog details failed for {}: {}", id, e);
            StructuredError::gateway("movie_details", e)
        })?;

        Ok(movie.map(Movie::from))
    }
}
