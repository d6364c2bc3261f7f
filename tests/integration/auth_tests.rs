use crate::common::*;
use mockito::Matcher;
use serde_json::json;
use std::path::PathBuf;
use task_client::prelude::*;
use task_client::utils::scratch_name;

const USER: &str = r#"{"id":7,"username":"jdoe","email":"jdoe@example.com","first_name":"Jane","last_name":"Doe"}"#;

fn login_body() -> String {
    format!(r#"{{"user":{USER},"access":"{ACCESS}","refresh":"{REFRESH}"}}"#)
}

#[tokio::test]
async fn test_login_stores_tokens_and_user() {
    let mut server = mockito::Server::new_async().await;
    let login = server
        .mock("POST", "/api/auth/login/")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({"username": "jdoe", "password": "s3cret"})))
        .with_status(200)
        .with_body(login_body())
        .create_async()
        .await;

    let (client, store) = signed_out_client(&server);
    let auth = client.auth();
    assert!(!auth.is_authenticated().await.unwrap());

    let response = auth
        .login(&LoginRequest::new("jdoe", "s3cret"))
        .await
        .unwrap();
    assert_eq!(response.user.unwrap().username, "jdoe");

    assert!(auth.is_authenticated().await.unwrap());
    assert_eq!(
        store.get(CredentialKey::RefreshToken).await.unwrap().as_deref(),
        Some(REFRESH)
    );
    let cached = auth.cached_user().await.unwrap().unwrap();
    assert_eq!(cached.display_name(), "Jane Doe");

    login.assert_async().await;
}

#[tokio::test]
async fn test_login_without_tokens_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/auth/login/")
        .with_status(200)
        .with_body(format!(r#"{{"user":{USER}}}"#))
        .create_async()
        .await;

    let (client, store) = signed_out_client(&server);
    let result = client.auth().login(&LoginRequest::new("jdoe", "s3cret")).await;

    assert!(matches!(result, Err(AppError::Deserialization(_))));
    assert_eq!(store.get(CredentialKey::AccessToken).await.unwrap(), None);
}

#[tokio::test]
async fn test_rejected_login_without_session_ends_in_refresh_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/auth/login/")
        .with_status(401)
        .with_body(r#"{"detail":"No active account found with the given credentials"}"#)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh/")
        .expect(0)
        .create_async()
        .await;

    let (client, _) = signed_out_client(&server);
    let error = client
        .auth()
        .login(&LoginRequest::new("jdoe", "wrong"))
        .await
        .unwrap_err();

    assert!(error.is_session_expired());
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_register_with_nested_tokens_starts_session() {
    let mut server = mockito::Server::new_async().await;
    let register = server
        .mock("POST", "/api/auth/register/")
        .match_body(Matcher::PartialJson(json!({
            "username": "jdoe",
            "password": "s3cret",
            "password2": "s3cret"
        })))
        .with_status(201)
        .with_body(format!(
            r#"{{"user":{USER},"tokens":{{"access":"{ACCESS}","refresh":"{REFRESH}"}},"message":"User registered successfully"}}"#
        ))
        .create_async()
        .await;

    let (client, store) = signed_out_client(&server);
    let request = RegisterRequest::new("jdoe", "jdoe@example.com", "s3cret").with_name("Jane", "Doe");
    let response = client.auth().register(&request).await.unwrap();

    assert_eq!(response.message.as_deref(), Some("User registered successfully"));
    assert_eq!(
        store.get(CredentialKey::AccessToken).await.unwrap().as_deref(),
        Some(ACCESS)
    );
    register.assert_async().await;
}

#[tokio::test]
async fn test_profile_update_refreshes_cache() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/auth/profile/")
        .match_header("authorization", bearer(ACCESS).as_str())
        .with_status(200)
        .with_body(USER)
        .create_async()
        .await;
    let update = server
        .mock("PATCH", "/api/auth/profile/update/")
        .match_body(Matcher::Json(json!({"first_name": "Janet"})))
        .with_status(200)
        .with_body(r#"{"id":7,"username":"jdoe","first_name":"Janet","last_name":"Doe"}"#)
        .create_async()
        .await;

    let (client, _) = signed_in_client(&server);
    let auth = client.auth();

    assert_eq!(auth.get_profile().await.unwrap().email, "jdoe@example.com");
    let updated = auth
        .update_profile(&UpdateProfileRequest {
            first_name: Some("Janet".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Janet");
    assert_eq!(auth.cached_user().await.unwrap().unwrap().first_name, "Janet");
    update.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_store() {
    let server = mockito::Server::new_async().await;
    let (client, store) = signed_in_client(&server);
    store.set(CredentialKey::UserData, USER).await.unwrap();

    client.auth().logout().await.unwrap();

    for key in CredentialKey::ALL {
        assert_eq!(store.get(key).await.unwrap(), None);
    }
    assert!(!client.auth().is_authenticated().await.unwrap());
}

#[tokio::test]
async fn test_file_store_keeps_session_across_clients() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/auth/login/")
        .with_status(200)
        .with_body(login_body())
        .create_async()
        .await;
    let pending = server
        .mock("GET", "/api/tasks/pending/")
        .match_header("authorization", bearer(ACCESS).as_str())
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let path: PathBuf = std::env::temp_dir().join(scratch_name("task-client-session"));

    let first = client_with_store(&server, Arc::new(FileCredentialStore::new(&path))).unwrap();
    first
        .auth()
        .login(&LoginRequest::new("jdoe", "s3cret"))
        .await
        .unwrap();

    let second = client_with_store(&server, Arc::new(FileCredentialStore::new(&path))).unwrap();
    assert!(second.tasks().get_pending().await.unwrap().is_empty());
    assert_eq!(
        second.auth().cached_user().await.unwrap().unwrap().id,
        7
    );

    pending.assert_async().await;
    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_corrupt_credential_file_is_repaired_by_logout_and_login() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/auth/login/")
        .with_status(200)
        .with_body(login_body())
        .create_async()
        .await;

    let path: PathBuf = std::env::temp_dir().join(scratch_name("task-client-corrupt"));
    tokio::fs::write(&path, r#"{"access_token":"#).await.unwrap();
    let client = client_with_store(&server, Arc::new(FileCredentialStore::new(&path))).unwrap();

    assert!(matches!(
        client.auth().is_authenticated().await,
        Err(AppError::Deserialization(_))
    ));
    client.auth().logout().await.unwrap();
    assert!(!client.auth().is_authenticated().await.unwrap());

    tokio::fs::write(&path, "garbage").await.unwrap();
    client
        .auth()
        .login(&LoginRequest::new("jdoe", "s3cret"))
        .await
        .unwrap();
    assert!(client.auth().is_authenticated().await.unwrap());

    let _ = tokio::fs::remove_file(&path).await;
}
