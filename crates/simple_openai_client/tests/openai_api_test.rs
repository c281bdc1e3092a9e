use simple_openai_client::SimpleOpenAI;
use simple_openai_core::{
    ThreadMessageModifyRequest, ThreadMessageRequest, ThreadMessageRole, ThreadRequest,
};
use std::collections::HashMap;

fn live_client() -> SimpleOpenAI {
    let _ = dotenvy::dotenv();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    SimpleOpenAI::from_env().expect("OPENAI_API_KEY must be set for API tests")
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_thread_message_lifecycle() {
    let openai = live_client();

    let thread = openai
        .threads()
        .create(&ThreadRequest::default())
        .await
        .expect("Thread created");

    let request = ThreadMessageRequest::builder()
        .role(ThreadMessageRole::User)
        .content("Please, tell me what an LLM is?")
        .metadata(HashMap::from([("item".to_string(), "first".to_string())]))
        .build()
        .expect("Valid request");
    let message = openai
        .thread_messages()
        .create(thread.id(), &request)
        .await
        .expect("Message created");

    let modify = ThreadMessageModifyRequest::builder()
        .metadata(HashMap::from([("item".to_string(), "firstly".to_string())]))
        .build()
        .expect("Valid request");
    let modified = openai
        .thread_messages()
        .modify(thread.id(), message.id(), &modify)
        .await
        .expect("Message modified");
    assert_eq!(
        modified.metadata().get("item").map(String::as_str),
        Some("firstly")
    );

    let messages = openai
        .thread_messages()
        .get_list(thread.id())
        .await
        .expect("Messages listed");
    assert_eq!(messages.len(), 1);

    let deleted = openai
        .thread_messages()
        .delete(thread.id(), message.id())
        .await
        .expect("Message deleted");
    assert!(*deleted.deleted());

    openai
        .threads()
        .delete(thread.id())
        .await
        .expect("Thread deleted");
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_list_models() {
    let openai = live_client();

    let models = openai.models().get_list().await.expect("Models listed");
    assert!(!models.is_empty());
    println!("Models: {:?}", models.iter().map(|m| m.id()).collect::<Vec<_>>());
}
