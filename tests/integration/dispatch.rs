//! Dispatcher routing

use crate::mock_server::{MockServerFixture, MODEL};
use ollama_lib_rust::client::{CHAT_PATH, EMBED_PATH, GENERATE_PATH};
use ollama_lib_rust::{
    ChatMessage, Error, InferenceBackend, ModelRequest, ModelResponse, Request, Response,
};
use serde_json::json;

#[test]
fn text_dispatch_matches_direct_generate() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json_hits(
        GENERATE_PATH,
        &json!({"model": MODEL, "response": "woof", "done": true, "eval_count": 3}),
        2,
    );

    let client = fixture.client();
    let request = fixture.endpoint.text_request("impersonate a dog");
    let direct = client.generate(&request).unwrap();
    let routed = client.query(Request::from(request)).unwrap();

    mock.assert();
    assert_eq!(routed, Response::Text(direct));
}

#[test]
fn chat_dispatch_matches_direct_chat() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json_hits(
        CHAT_PATH,
        &json!({"model": MODEL, "message": {"role": "assistant", "content": "fine"}}),
        2,
    );

    let client = fixture.client();
    let request = fixture
        .endpoint
        .chat_request(vec![ChatMessage::user("how are you?")]);
    let direct = client.chat(&request).unwrap();
    let routed = client.dispatch(&request).unwrap();

    mock.assert();
    assert_eq!(routed, Response::Chat(direct));
    assert_eq!(routed.message(), "fine");
}

struct EchoRequest;

impl ModelRequest for EchoRequest {
    fn model(&self) -> &str {
        "echo"
    }

    fn messages(&self) -> Vec<&str> {
        vec!["echo"]
    }
}

#[test]
fn unsupported_variant_fails_without_network_calls() {
    let mut fixture = MockServerFixture::new();
    let mocks = [
        fixture.mock_never(GENERATE_PATH),
        fixture.mock_never(CHAT_PATH),
        fixture.mock_never(EMBED_PATH),
    ];

    let err = fixture.client().dispatch(&EchoRequest).unwrap_err();

    assert!(matches!(err, Error::UnsupportedRequest { .. }));
    assert!(!err.is_retryable());
    assert_eq!(err.status(), None);
    for mock in &mocks {
        mock.assert();
    }
}

fn ask<B: InferenceBackend>(backend: &B, request: Request) -> String {
    backend
        .query(request)
        .map(|r| r.message().to_string())
        .unwrap_or_default()
}

#[test]
fn client_serves_as_generic_backend() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_json(GENERATE_PATH, &json!({"response": "generic"}));

    let request: Request = fixture.endpoint.text_request("hi").into();
    assert_eq!(ask(&fixture.client(), request), "generic");
}
