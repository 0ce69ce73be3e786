use arte_connectors::{
    google::{GoogleModel, GoogleModelOptions},
    ConnectorError, LanguageModel, LanguageModelInput, Message, Part, ResponseFormatJson,
    ResponseFormatOption,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn google_model(base_url: &str) -> GoogleModel {
    google_model_with_key(base_url, "test-key")
}

fn google_model_with_key(base_url: &str, api_key: &str) -> GoogleModel {
    GoogleModel::new(
        "gemini-test",
        GoogleModelOptions {
            api_key: api_key.to_string(),
            base_url: Some(format!("{base_url}/")),
            ..Default::default()
        },
    )
}

fn structured_input() -> LanguageModelInput {
    LanguageModelInput {
        messages: vec![Message::user(vec![Part::text("Analyse Mona Lisa")])],
        response_format: Some(ResponseFormatOption::Json(ResponseFormatJson {
            name: "analysis".to_string(),
            description: None,
            schema: Some(json!({
                "type": "object",
                "properties": { "summary": { "type": "string" } },
                "required": ["summary"]
            })),
        })),
        ..Default::default()
    }
}

#[tokio::test]
async fn generate_posts_structured_request_and_returns_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "{\"summary\":\"ok\"}" }] },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 5, "totalTokenCount": 17 },
            "modelVersion": "gemini-test"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = google_model(&server.uri())
        .generate(structured_input())
        .await
        .expect("generate succeeds");

    assert_eq!(response.text().as_deref(), Some("{\"summary\":\"ok\"}"));
    assert_eq!(response.usage.map(|u| u.input_tokens), Some(12));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        json!("application/json")
    );
    assert_eq!(
        body["generationConfig"]["responseJsonSchema"]["required"],
        json!(["summary"])
    );
    assert_eq!(body["contents"][0]["parts"][0]["text"], json!("Analyse Mona Lisa"));
}

#[tokio::test]
async fn generate_surfaces_server_errors_as_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = google_model(&server.uri())
        .generate(structured_input())
        .await
        .unwrap_err();

    match err {
        ConnectorError::StatusCode(status, body) => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn generate_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = google_model(&server.uri())
        .generate(structured_input())
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectorError::Transport(_)));
}

#[tokio::test]
async fn generate_fails_on_unreachable_host() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let err = google_model(&format!("http://{address}"))
        .generate(structured_input())
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectorError::Transport(_)));
}

#[tokio::test]
async fn transport_errors_do_not_expose_the_api_key() {
    let err = google_model_with_key("http://127.0.0.1:1", "SUPERSECRETKEY")
        .generate(structured_input())
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectorError::Transport(_)));
    assert!(!err.to_string().contains("SUPERSECRETKEY"));
    assert!(!format!("{err:?}").contains("SUPERSECRETKEY"));
}
