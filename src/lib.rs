pub mod graphql;
pub mod movies;
pub mod server;
pub mod store;
