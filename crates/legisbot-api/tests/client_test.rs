//! HTTP-level tests for `ApiClient` against a mock server.

use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use legisbot_api::ApiClient;
use legisbot_core::api::LegisApi;
use legisbot_core::user::Role;

#[tokio::test]
async fn obtain_token_posts_form_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .and(body_string_contains("username=a%40b.com"))
        .and(body_string_contains("password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "T"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let token = client.obtain_token("a@b.com", "secret").await.unwrap();
    assert_eq!(token, "T");
}

#[tokio::test]
async fn current_user_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/users/me"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "email": "a@b.com",
            "role": "user",
            "has_completed_onboarding": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client.set_token("T");
    let user = client.current_user().await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.role, Role::User);
    assert!(!user.has_completed_onboarding);
}

#[tokio::test]
async fn rejected_register_surfaces_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "detail": "Email ya registrado"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.register("a@b.com", "secret").await.unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.server_message(), Some("Email ya registrado"));
}

#[tokio::test]
async fn submit_query_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/query"))
        .and(body_json(serde_json::json!({
            "query": "¿qué dice el acta?",
            "history_id": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "El acta aprueba el presupuesto.",
            "sources": [{"source": "acta.pdf", "page": 2}],
            "history_id": 9
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client.set_token("T");
    let answer = client.submit_query("¿qué dice el acta?", None).await.unwrap();
    assert_eq!(answer.answer, "El acta aprueba el presupuesto.");
    assert_eq!(answer.sources.len(), 1);
    assert_eq!(answer.history_id, Some(9));
}

#[tokio::test]
async fn submit_query_threads_history_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/query"))
        .and(body_json(serde_json::json!({
            "query": "¿y el artículo 4?",
            "history_id": 9
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "Se modifica.",
            "history_id": 9
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let answer = client.submit_query("¿y el artículo 4?", Some(9)).await.unwrap();
    assert!(answer.sources.is_empty());
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.submit_query("hola", None).await.unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    // Nothing listens on this port.
    let client = ApiClient::new("http://127.0.0.1:9");
    let err = client.list_contexts().await.unwrap_err();
    assert!(err.is_network());
}

#[tokio::test]
async fn list_contexts_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/contexts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "contexts": [{"id": "vt-2024", "name": "Versión Taquigráfica"}]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let contexts = client.list_contexts().await.unwrap();
    assert_eq!(contexts.len(), 1);
    assert_eq!(contexts[0].label(), "Versión Taquigráfica");
}
