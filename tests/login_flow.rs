mod common;

use havenauth::actions::{
    login_failure, login_success, login_user, logout, social_action, social_login, Action,
};
use havenauth::models::{
    FailurePayload, FieldErrors, LoginCredentials, LoginPayload, SocialLoginRequest,
    SocialProfile, UserData,
};
use havenauth::reducers::{auth_reducer, AuthState};
use havenauth::store::Store;
use mockito::{Matcher, Server};
use serde_json::json;

use common::{ben_login_body, context_for, http_config, BEN_TOKEN, LOGIN_NOT_FOUND};

fn credentials() -> LoginCredentials {
    LoginCredentials {
        email: "test@gmail.com".to_string(),
        password: "TechAt254".to_string(),
    }
}

#[tokio::test]
async fn login_success_action_authenticates() {
    let store = Store::new();
    store
        .dispatch(login_success(LoginPayload::new(UserData::new(
            "test@gmail.com",
            "benkim",
            BEN_TOKEN,
        ))))
        .await;
    assert!(store.get_state().login.is_authenticated);
}

#[tokio::test]
async fn login_failure_action_does_not_authenticate() {
    let store = Store::new();
    store
        .dispatch(login_failure(FailurePayload::new(
            FieldErrors::single("error", LOGIN_NOT_FOUND),
            Some(400),
        )))
        .await;
    let login = &store.get_state().login;
    assert!(!login.is_authenticated);
    assert_eq!(login.field_error("error"), Some(LOGIN_NOT_FOUND));
}

#[tokio::test]
async fn logout_after_login_resets_state() {
    let store = Store::new();
    store
        .dispatch(login_success(LoginPayload::new(UserData::new(
            "test@gmail.com",
            "benkim",
            BEN_TOKEN,
        ))))
        .await;
    store.dispatch(logout()).await;

    let login = &store.get_state().login;
    assert!(!login.is_authenticated);
    assert!(login.data.is_empty());
}

#[test]
fn empty_social_payload_is_a_failure() {
    assert_eq!(social_action(SocialProfile::default()).kind(), "LOGIN_USER_FAILURE");
}

#[test]
fn default_reducer_state() {
    let state = auth_reducer(None, &Action::Unknown);
    assert_eq!(state.data, UserData::default());
    assert!(!state.is_authenticated);
}

#[tokio::test]
async fn login_user_against_mock_server() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/login")
        .match_body(Matcher::Json(json!({
            "email": "test@gmail.com",
            "password": "TechAt254"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ben_login_body())
        .create_async()
        .await;

    let context = context_for(http_config(&server.url()));
    let mut rx = context.store.subscribe();
    let handle = context
        .store
        .spawn_dispatch(login_user(context.api.clone(), credentials()));

    // first notification is the request marker
    rx.changed().await.expect("store alive");
    handle.await.expect("dispatch task");
    m.assert_async().await;

    let login = &context.store.get_state().login;
    assert!(login.is_authenticated);
    assert!(!login.is_loading);
    assert_eq!(login.data.token.as_deref(), Some(BEN_TOKEN));
}

#[tokio::test]
async fn rejected_login_surfaces_field_errors() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/login")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({"errors": {"error": [LOGIN_NOT_FOUND]}}).to_string())
        .create_async()
        .await;

    let context = context_for(http_config(&server.url()));
    context
        .store
        .dispatch(login_user(context.api.clone(), credentials()))
        .await;
    m.assert_async().await;

    let login = &context.store.get_state().login;
    assert!(!login.is_authenticated);
    assert!(login.data.is_empty());
    assert_eq!(login.error.as_ref().and_then(|e| e.status), Some(400));
    assert_eq!(login.field_error("error"), Some(LOGIN_NOT_FOUND));
}

#[tokio::test]
async fn login_reply_without_user_does_not_authenticate() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let context = context_for(http_config(&server.url()));
    context
        .store
        .dispatch(login_user(context.api.clone(), credentials()))
        .await;
    m.assert_async().await;

    let login = &context.store.get_state().login;
    assert!(!login.is_authenticated);
    assert!(!login.is_loading);
    assert!(login.data.is_empty());
    assert!(login.field_error("error").is_some());
}

#[tokio::test]
async fn unreachable_backend_is_a_failure_not_a_panic() {
    let context = context_for(http_config("http://127.0.0.1:1"));
    context
        .store
        .dispatch(login_user(context.api.clone(), credentials()))
        .await;

    let login = &context.store.get_state().login;
    assert!(!login.is_authenticated);
    assert!(!login.is_loading);
    assert!(login.field_error("error").is_some());
}

#[tokio::test]
async fn social_login_against_mock_server() {
    let mut server = Server::new_async().await;
    let ok = server
        .mock("POST", "/social/login")
        .match_body(Matcher::PartialJson(json!({"access_token": "good"})))
        .with_status(200)
        .with_body(r#"{"email": "kathiekim95@gmail.com", "username": "kathiekim", "token": "jwt"}"#)
        .create_async()
        .await;
    let no_email = server
        .mock("POST", "/social/login")
        .match_body(Matcher::PartialJson(json!({"access_token": "no-email"})))
        .with_status(200)
        .with_body(r#"{"username": "ghost"}"#)
        .create_async()
        .await;

    let context = context_for(http_config(&server.url()));
    let request = |token: &str| SocialLoginRequest {
        provider: "google".to_string(),
        access_token: token.to_string(),
    };

    context
        .store
        .dispatch(social_login(context.api.clone(), request("good")))
        .await;
    ok.assert_async().await;
    let login = context.store.get_state().login.clone();
    assert!(login.is_authenticated);
    assert_eq!(
        login.data,
        UserData::new("kathiekim95@gmail.com", "kathiekim", "jwt")
    );

    context
        .store
        .dispatch(social_login(context.api.clone(), request("no-email")))
        .await;
    no_email.assert_async().await;
    let login = &context.store.get_state().login;
    assert!(!login.is_authenticated);
    assert!(login.data.is_empty());
    assert!(login.field_error("email").is_some());
}

#[tokio::test]
async fn stale_response_after_logout_is_still_reducible() {
    let store = Store::new();
    store.dispatch(Action::LoginUserRequest).await;
    store.dispatch(logout()).await;
    // the in-flight request settles after the logout: last write wins
    store
        .dispatch(login_failure(FailurePayload::default()))
        .await;

    let login = &store.get_state().login;
    assert!(!login.is_authenticated);
    assert!(login.data.is_empty());
    assert!(!login.is_loading);

    store.dispatch(logout()).await;
    assert_eq!(store.get_state().login, AuthState::default());
}
