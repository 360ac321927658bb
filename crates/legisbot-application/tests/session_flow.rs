//! End-to-end session flows: real HTTP client and real credential file
//! against a mock server.

use std::sync::Arc;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use legisbot_api::ApiClient;
use legisbot_application::session_usecase::REGISTER_REDIRECT_DELAY;
use legisbot_application::{NavTarget, SessionUseCase};
use legisbot_core::guard::AuthState;
use legisbot_infrastructure::TokenStorage;

fn session_against(
    server: &MockServer,
    dir: &tempfile::TempDir,
) -> (SessionUseCase, Arc<TokenStorage>) {
    let api = Arc::new(ApiClient::new(server.uri()));
    let storage = Arc::new(TokenStorage::with_path(dir.path().join("token.json")));
    (SessionUseCase::new(api, storage.clone()), storage)
}

async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "T"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_fetches_identity_and_persists_token() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
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

    let dir = tempfile::tempdir().unwrap();
    let (session, storage) = session_against(&server, &dir);

    let user = session.login("a@b.com", "secret").await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(NavTarget::for_user(&user), NavTarget::Onboarding);
    assert_eq!(storage.load().unwrap(), Some("T".to_string()));
    assert!(session.state().await.is_authenticated());
}

#[tokio::test]
async fn login_then_logout_leaves_no_credential() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    Mock::given(method("GET"))
        .and(path("/auth/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "email": "a@b.com",
            "role": "user",
            "has_completed_onboarding": true
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let (session, storage) = session_against(&server, &dir);

    session.login("a@b.com", "secret").await.unwrap();
    session.logout().await;

    assert_eq!(session.state().await, AuthState::Anonymous);
    assert_eq!(storage.load().unwrap(), None);
}

#[tokio::test]
async fn bootstrap_with_invalid_token_removes_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "Token inválido"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let (session, storage) = session_against(&server, &dir);
    storage.save("expired").unwrap();

    assert_eq!(session.bootstrap().await, AuthState::Anonymous);
    assert_eq!(storage.load().unwrap(), None);
}

#[tokio::test]
async fn bootstrap_with_valid_token_restores_identity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/users/me"))
        .and(header("authorization", "Bearer stored"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 7,
            "email": "a@b.com",
            "role": "admin",
            "has_completed_onboarding": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let (session, _storage) = session_against(&server, &dir);
    _storage.save("stored").unwrap();

    let state = session.bootstrap().await;
    assert_eq!(state.user().map(|u| u.id), Some(7));
    assert!(state.user().unwrap().is_admin());
}

#[tokio::test]
async fn register_auto_login_targets_home_after_fixed_delay() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 2,
            "email": "nuevo@b.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_token_endpoint(&server).await;
    Mock::given(method("GET"))
        .and(path("/auth/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 2,
            "email": "nuevo@b.com",
            "role": "user",
            "has_completed_onboarding": true
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let (session, _) = session_against(&server, &dir);

    let user = session.register("nuevo@b.com", "secret").await.unwrap();
    assert_eq!(NavTarget::for_user(&user), NavTarget::Home);
    assert_eq!(REGISTER_REDIRECT_DELAY.as_millis(), 1500);
}
