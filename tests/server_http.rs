use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use minitweet::movies::{Movie, MovieCatalog, MovieError};
use minitweet::server::app::create_app;
use minitweet::store::Store;
use serde_json::{json, Value};

struct EmptyCatalog;

#[async_trait]
impl MovieCatalog for EmptyCatalog {
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        Ok(vec![])
    }

    async fn movie_details(&self, _id: &str) -> Result<Option<Movie>, MovieError> {
        Ok(None)
    }
}

fn test_server() -> TestServer {
    let app = create_app(Arc::new(Store::seeded()), Arc::new(EmptyCatalog), None)
        .expect("router should build");
    TestServer::new(app).expect("test server should start")
}

#[tokio::test]
async fn health_endpoint_reports_service() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "minitweet");
}

#[tokio::test]
async fn graphql_query_round_trips_over_http() {
    let server = test_server();

    let response = server
        .post("/graphql")
        .json(&json!({ "query": "{ allUsers { id fullName } }" }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["data"]["allUsers"][0]["fullName"], "pill sang sung");
    assert_eq!(body["data"]["allUsers"][1]["fullName"], "pill won sung");
}

#[tokio::test]
async fn graphql_mutation_round_trips_over_http() {
    let server = test_server();

    let response = server
        .post("/graphql")
        .json(&json!({
            "query": r#"mutation { postTweet(text: "over http", userId: "2") { id text } }"#
        }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["data"]["postTweet"]["id"], "3");
    assert_eq!(body["data"]["postTweet"]["text"], "over http");
}

#[tokio::test]
async fn playground_is_served_on_get() {
    let server = test_server();

    let response = server.get("/graphql").await;
    response.assert_status_ok();
    assert!(response.text().contains("GraphQL Playground"));
}
