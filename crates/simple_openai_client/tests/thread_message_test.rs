//! Thread message operations against canned API responses.

mod test_utils;

use simple_openai_client::HttpMethod;
use simple_openai_core::{
    Attachment, AttachmentTool, Order, ThreadMessageModifyRequest, ThreadMessageQuery,
    ThreadMessageRequest, ThreadMessageRole,
};
use std::collections::HashMap;
use test_utils::{FixtureTransport, client_with};

#[tokio::test]
async fn test_create_thread_message() -> anyhow::Result<()> {
    let transport = FixtureTransport::new();
    transport.respond_with_fixture("threads_messages_create.json");
    let openai = client_with(&transport);

    let request = ThreadMessageRequest::builder()
        .role(ThreadMessageRole::User)
        .content("Please, tell me what an LLM is?")
        .attachment(
            Attachment::builder()
                .file_id("fileId")
                .tool(AttachmentTool::FileSearch)
                .build()?,
        )
        .metadata(HashMap::from([("item".to_string(), "first".to_string())]))
        .build()?;

    let message = openai.thread_messages().create("threadId", &request).await?;

    assert_eq!(message.id(), "msg_EjVugbYq6vzmpbUbCGFL5Uqt");
    assert_eq!(*message.role(), ThreadMessageRole::User);
    assert_eq!(message.text(), "Please, tell me what an LLM is?");
    assert_eq!(message.metadata().get("item").map(String::as_str), Some("first"));

    let sent = transport.last_request();
    assert_eq!(*sent.method(), HttpMethod::Post);
    assert_eq!(sent.url(), "https://api.openai.com/v1/threads/threadId/messages");
    assert_eq!(sent.header("authorization"), Some("Bearer apiKey"));
    assert_eq!(sent.header("OpenAI-Beta"), Some("assistants=v2"));

    let body = sent.body().clone().expect("create sends a body");
    assert_eq!(body["role"], "user");
    assert_eq!(body["content"], "Please, tell me what an LLM is?");
    assert_eq!(body["attachments"][0]["tools"][0]["type"], "file_search");
    Ok(())
}

#[tokio::test]
async fn test_modify_thread_message() -> anyhow::Result<()> {
    let transport = FixtureTransport::new();
    transport.respond_with_fixture("threads_messages_modify.json");
    let openai = client_with(&transport);

    let request = ThreadMessageModifyRequest::builder()
        .metadata(HashMap::from([
            ("item".to_string(), "firstly".to_string()),
            ("user".to_string(), "dummy".to_string()),
        ]))
        .build()?;

    let message = openai
        .thread_messages()
        .modify("threadId", "threadMessageId", &request)
        .await?;

    assert_eq!(message.metadata().len(), 2);
    let sent = transport.last_request();
    assert_eq!(*sent.method(), HttpMethod::Post);
    assert_eq!(
        sent.url(),
        "https://api.openai.com/v1/threads/threadId/messages/threadMessageId"
    );
    assert_eq!(
        sent.body().as_ref().map(|b| b["metadata"]["user"].clone()),
        Some(serde_json::json!("dummy"))
    );
    Ok(())
}

#[tokio::test]
async fn test_retrieve_thread_message() -> anyhow::Result<()> {
    let transport = FixtureTransport::new();
    transport.respond_with_fixture("threads_messages_getone.json");
    let openai = client_with(&transport);

    let message = openai
        .thread_messages()
        .get_one("threadId", "threadMessageId")
        .await?;

    assert_eq!(message.thread_id(), "thread_n7fnAaLMOTgs6ViFUEUh8pJy");
    assert!(message.attachments().is_empty());

    let sent = transport.last_request();
    assert_eq!(*sent.method(), HttpMethod::Get);
    assert!(sent.body().is_none());
    assert!(sent.query().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_list_thread_messages() -> anyhow::Result<()> {
    let transport = FixtureTransport::new();
    transport.respond_with_fixture("threads_messages_getlist.json");
    let openai = client_with(&transport);

    let messages = openai.thread_messages().get_list("threadId").await?;

    assert_eq!(messages.len(), 2);
    assert!(!messages.has_more());
    let roles: Vec<_> = messages.iter().map(|m| *m.role()).collect();
    assert_eq!(
        roles,
        vec![ThreadMessageRole::Assistant, ThreadMessageRole::User]
    );
    assert!(messages.data()[0].text().starts_with("An LLM"));

    assert_eq!(
        transport.last_request().url(),
        "https://api.openai.com/v1/threads/threadId/messages"
    );
    Ok(())
}

#[tokio::test]
async fn test_list_thread_messages_with_query() -> anyhow::Result<()> {
    let transport = FixtureTransport::new();
    transport.respond_with_fixture("threads_messages_getlist.json");
    let openai = client_with(&transport);

    let query = ThreadMessageQuery::builder()
        .limit(2u32)
        .order(Order::Desc)
        .run_id("run_UzKb8bCwL0nvpTBmKRJ6VDQD")
        .build()?;
    let messages = openai
        .thread_messages()
        .get_list_with("threadId", &query)
        .await?;
    assert_eq!(messages.last_id().as_deref(), Some("msg_EjVugbYq6vzmpbUbCGFL5Uqt"));

    let mut params = transport.last_request().query().clone();
    params.sort();
    assert_eq!(
        params,
        vec![
            ("limit".to_string(), "2".to_string()),
            ("order".to_string(), "desc".to_string()),
            ("run_id".to_string(), "run_UzKb8bCwL0nvpTBmKRJ6VDQD".to_string()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_delete_thread_message() -> anyhow::Result<()> {
    let transport = FixtureTransport::new();
    transport.respond_with_fixture("threads_messages_delete.json");
    let openai = client_with(&transport);

    let deleted = openai
        .thread_messages()
        .delete("threadId", "threadMessageId")
        .await?;

    assert!(*deleted.deleted());
    assert_eq!(deleted.object(), "thread.message.deleted");
    assert_eq!(*transport.last_request().method(), HttpMethod::Delete);
    Ok(())
}

#[tokio::test]
async fn test_api_error_is_surfaced() -> anyhow::Result<()> {
    let transport = FixtureTransport::new();
    transport.respond_with(404, test_utils::fixture("error_not_found.json"));
    let openai = client_with(&transport);

    let err = openai
        .thread_messages()
        .get_one("threadId", "threadMessageId")
        .await
        .unwrap_err();

    let api = err.api().expect("API error");
    assert_eq!(api.status, 404);
    assert_eq!(api.error_type.as_deref(), Some("invalid_request_error"));
    assert!(api.message.contains("No thread found"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_json_error() -> anyhow::Result<()> {
    let transport = FixtureTransport::new();
    transport.respond_with(200, r#"{"id": "msg_1", "object": "thread.message"}"#);
    let openai = client_with(&transport);

    let err = openai
        .thread_messages()
        .get_one("threadId", "msg_1")
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        simple_openai_error::OpenAIErrorKind::Json(_)
    ));
    assert!(err.to_string().contains("thread_messages.get_one"));
    Ok(())
}
