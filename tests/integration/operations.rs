//! Generate, chat and embed against the mock backend

use crate::mock_server::{MockServerFixture, MODEL};
use ollama_lib_rust::client::{CHAT_PATH, EMBED_PATH, GENERATE_PATH};
use ollama_lib_rust::{ChatMessage, KeepAlive, ModelOptions, ModelResponse};
use serde_json::json;

#[test]
fn generate_sends_deterministic_defaults() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json_matching(
        GENERATE_PATH,
        json!({
            "model": MODEL,
            "prompt": "hi",
            "stream": false,
            "raw": false,
            "options": {"temperature": 0.0}
        }),
        &json!({"model": MODEL, "response": "woof", "done": true, "eval_count": 4}),
    );

    let request = fixture.endpoint.text_request("hi");
    let response = fixture.client().generate(&request).unwrap();

    mock.assert();
    assert_eq!(response.message(), "woof");
    assert!(response.done);
    assert_eq!(response.eval_count, 4);
}

#[test]
fn generate_sets_json_headers() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json(GENERATE_PATH, &json!({"response": "ok"}));

    fixture
        .client()
        .generate(&fixture.endpoint.text_request("ping"))
        .unwrap();
    mock.assert();
}

#[test]
fn missing_model_defaults_to_request_model() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_json(GENERATE_PATH, &json!({"response": "woof"}));

    let response = fixture
        .client()
        .generate(&fixture.endpoint.text_request("bark"))
        .unwrap();
    assert_eq!(response.model, MODEL);
    assert_eq!(response.created_at, "");
    assert_eq!(response.prompt_eval_count, 0);
}

#[test]
fn chat_sends_messages_in_order() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json_matching(
        CHAT_PATH,
        json!({
            "model": MODEL,
            "messages": [
                {"role": "system", "content": "be terse"},
                {"role": "user", "content": "hi"}
            ],
            "stream": false,
            "keep_alive": "5m"
        }),
        &json!({
            "model": MODEL,
            "message": {"role": "assistant", "content": "hello"},
            "done": true,
            "total_duration": 1200
        }),
    );

    let request = fixture.endpoint.chat_request(vec![
        ChatMessage::system("be terse"),
        ChatMessage::user("hi"),
    ]);
    let response = fixture.client().chat(&request).unwrap();

    mock.assert();
    assert_eq!(response.message(), "hello");
    assert_eq!(response.done_reason, "");
    assert_eq!(response.total_duration, 1200);
}

#[test]
fn chat_forwards_caller_options_verbatim() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json_matching(
        CHAT_PATH,
        json!({"options": {"seed": 7, "mirostat": 2}, "keep_alive": "-1"}),
        &json!({"message": {"role": "assistant", "content": "ok"}}),
    );

    let request = fixture
        .endpoint
        .chat_request(vec![ChatMessage::user("hi")])
        .with_options(ModelOptions::new().seed(7).set("mirostat", 2))
        .with_keep_alive(KeepAlive::forever());
    let response = fixture.client().chat(&request).unwrap();

    mock.assert();
    assert_eq!(response.model, MODEL);
}

#[test]
fn streamed_chat_is_folded_into_one_reply() {
    let mut fixture = MockServerFixture::new();
    let body = concat!(
        "{\"model\":\"llama3:latest\",\"message\":{\"role\":\"assistant\",\"content\":\"Hel\"},\"done\":false}\n",
        "{\"model\":\"llama3:latest\",\"message\":{\"role\":\"assistant\",\"content\":\"lo\"},\"done\":false}\n",
        "{\"model\":\"llama3:latest\",\"message\":{\"role\":\"assistant\",\"content\":\"\"},\"done\":true,\"done_reason\":\"stop\",\"eval_count\":2}\n",
    );
    let _mock = fixture.mock_raw(CHAT_PATH, 200, body);

    let request = fixture
        .endpoint
        .chat_request(vec![ChatMessage::user("hi")])
        .with_stream(true);
    let response = fixture.client().chat(&request).unwrap();

    assert_eq!(response.message(), "Hello");
    assert_eq!(response.done_reason, "stop");
    assert_eq!(response.eval_count, 2);
}

#[test]
fn embed_returns_one_vector_per_input() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json_matching(
        EMBED_PATH,
        json!({"model": MODEL, "input": ["a", "b"]}),
        &json!({"embeddings": [[0.1, 0.2], [0.3, 0.4]]}),
    );

    let request = fixture
        .endpoint
        .embedding_request(vec!["a".to_string(), "b".to_string()]);
    let response = fixture.client().embed(&request).unwrap();

    mock.assert();
    assert_eq!(response.model, MODEL);
    assert_eq!(response.len(), 2);
    assert_eq!(response.dimensions(), 2);
    assert_eq!(response.embeddings[1], vec![0.3, 0.4]);
}
