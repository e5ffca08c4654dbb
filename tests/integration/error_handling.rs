//! Error surfacing: every failure aborts the call with no partial result

use crate::mock_server::MockServerFixture;
use ollama_lib_rust::client::{CHAT_PATH, EMBED_PATH, GENERATE_PATH};
use ollama_lib_rust::{ChatMessage, Error, ModelEndpoint, OllamaClient};

#[test]
fn server_error_fails_every_operation() {
    let mut fixture = MockServerFixture::new();
    let body = r#"{"error":"model crashed"}"#;
    let _generate = fixture.mock_raw(GENERATE_PATH, 500, body);
    let _chat = fixture.mock_raw(CHAT_PATH, 500, body);
    let _embed = fixture.mock_raw(EMBED_PATH, 500, body);

    let client = fixture.client();
    let endpoint = &fixture.endpoint;
    let errors = [
        client.generate(&endpoint.text_request("hi")).unwrap_err(),
        client
            .chat(&endpoint.chat_request(vec![ChatMessage::user("hi")]))
            .unwrap_err(),
        client
            .embed(&endpoint.embedding_request(vec!["hi".into()]))
            .unwrap_err(),
    ];

    for err in errors {
        assert!(err.to_string().contains("500"), "unexpected error: {}", err);
        match err {
            Error::Status { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body.as_deref(), Some(r#"{"error":"model crashed"}"#));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }
}

#[test]
fn not_found_is_a_status_error_too() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_raw(GENERATE_PATH, 404, r#"{"error":"model 'x' not found"}"#);

    let err = fixture
        .client()
        .generate(&fixture.endpoint.text_request("hi"))
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_retryable());
}

#[test]
fn malformed_body_is_a_decode_error() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_raw(CHAT_PATH, 200, "<html>proxy error</html>");

    let err = fixture
        .client()
        .chat(&fixture.endpoint.chat_request(vec![ChatMessage::user("hi")]))
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn wrong_shape_is_a_decode_error() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_raw(EMBED_PATH, 200, r#"{"embeddings": "not a list"}"#);

    let err = fixture
        .client()
        .embed(&fixture.endpoint.embedding_request(vec!["a".into()]))
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn unreachable_backend_is_a_transport_error() {
    let endpoint = ModelEndpoint::new("http://127.0.0.1:1", "llama3").unwrap();
    let client = OllamaClient::new(endpoint.clone());

    let err = client.generate(&endpoint.text_request("hi")).unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_retryable());
}
