use arte_connectors::{
    sparql::{RdfTerm, SparqlClient, SparqlClientOptions, SparqlEndpoint},
    ConnectorError,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY: &str = "SELECT ?item WHERE { ?item wdt:P31 wd:Q3305213 } LIMIT 1";

fn client(server: &MockServer) -> SparqlClient {
    SparqlClient::new(SparqlClientOptions {
        endpoint: Some(format!("{}/sparql", server.uri())),
        user_agent: Some("arte-tests/1.0".to_string()),
        ..Default::default()
    })
}

#[tokio::test]
async fn select_sends_encoded_query_and_decodes_bindings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sparql"))
        .and(query_param("query", QUERY))
        .and(query_param("format", "json"))
        .and(header("user-agent", "arte-tests/1.0"))
        .and(header("accept", "application/sparql-results+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "head": { "vars": ["item"] },
            "results": {
                "bindings": [
                    { "item": { "type": "uri", "value": "http://www.wikidata.org/entity/Q12418" } }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client(&server).select(QUERY).await.expect("select succeeds");

    assert_eq!(results.bindings.len(), 1);
    assert_eq!(
        results.bindings[0]["item"],
        RdfTerm::uri("http://www.wikidata.org/entity/Q12418")
    );

    let requests = server.received_requests().await.unwrap();
    let raw_query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!raw_query.contains(' '), "query text must be URL-encoded");
}

#[tokio::test]
async fn select_reports_rate_limiting() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let err = client(&server).select(QUERY).await.unwrap_err();
    assert!(matches!(err, ConnectorError::StatusCode(status, _) if status.as_u16() == 429));
}

#[tokio::test]
async fn select_accepts_empty_result_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "head": { "vars": ["item"] },
            "results": { "bindings": [] }
        })))
        .mount(&server)
        .await;

    let results = client(&server).select(QUERY).await.unwrap();
    assert!(results.bindings.is_empty());
}

#[test]
fn defaults_to_wikidata() {
    let client = SparqlClient::default();
    assert_eq!(client.endpoint(), "https://query.wikidata.org/sparql");
}
