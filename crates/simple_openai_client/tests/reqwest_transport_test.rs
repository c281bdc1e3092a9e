//! End-to-end requests through the reqwest transport against a mock server.

mod test_utils;

use httpmock::prelude::*;
use serde_json::json;
use simple_openai_client::SimpleOpenAI;
use simple_openai_core::{Order, ThreadMessageModifyRequest, ThreadMessageQuery};
use std::collections::HashMap;
use std::time::Duration;

fn client_for(server: &MockServer) -> SimpleOpenAI {
    SimpleOpenAI::builder()
        .api_key("test-key")
        .base_url(server.url("/v1"))
        .project("proj_test")
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Valid client")
}

#[tokio::test]
async fn test_list_sends_query_and_headers() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/threads/thread_1/messages")
                .query_param("limit", "2")
                .query_param("order", "asc")
                .header("Authorization", "Bearer test-key")
                .header("OpenAI-Beta", "assistants=v2")
                .header("OpenAI-Project", "proj_test");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(test_utils::fixture("threads_messages_getlist.json"));
        })
        .await;

    let query = ThreadMessageQuery::builder()
        .limit(2u32)
        .order(Order::Asc)
        .build()?;
    let messages = client_for(&server)
        .thread_messages()
        .get_list_with("thread_1", &query)
        .await?;

    assert_eq!(messages.len(), 2);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_post_sends_json_body() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/threads/thread_1/messages/msg_1")
                .json_body(json!({"metadata": {"item": "firstly"}}));
            then.status(200)
                .header("Content-Type", "application/json")
                .body(test_utils::fixture("threads_messages_modify.json"));
        })
        .await;

    let request = ThreadMessageModifyRequest::builder()
        .metadata(HashMap::from([("item".to_string(), "firstly".to_string())]))
        .build()?;
    let message = client_for(&server)
        .thread_messages()
        .modify("thread_1", "msg_1", &request)
        .await?;

    assert_eq!(message.id(), "msg_EjVugbYq6vzmpbUbCGFL5Uqt");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_error_status_becomes_api_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/v1/threads/missing");
            then.status(404)
                .header("Content-Type", "application/json")
                .body(test_utils::fixture("error_not_found.json"));
        })
        .await;

    let err = client_for(&server)
        .threads()
        .delete("missing")
        .await
        .unwrap_err();

    let api = err.api().expect("API error");
    assert_eq!(api.status, 404);
    assert_eq!(api.error_type.as_deref(), Some("invalid_request_error"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let openai = SimpleOpenAI::builder()
        .api_key("test-key")
        .base_url("http://127.0.0.1:9/v1")
        .timeout(Duration::from_secs(2))
        .build()
        .expect("Valid client");

    let err = openai.models().get_list().await.unwrap_err();
    match err.kind() {
        simple_openai_error::OpenAIErrorKind::Http(http) => {
            assert_eq!(http.url.as_deref(), Some("http://127.0.0.1:9/v1/models"));
            assert!(http.message.starts_with("Request failed"));
        }
        other => panic!("expected a transport failure, got {}", other),
    }
}
