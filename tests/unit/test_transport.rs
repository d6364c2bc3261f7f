use mockito::Matcher;
use serde_json::json;
use task_client::application::transport::{HttpTransport, ReqwestTransport};
use task_client::config::Config;
use task_client::constants::USER_AGENT;
use task_client::error::AppError;
use task_client::model::http::{HttpRequest, MultipartPart};
use reqwest::Method;

#[tokio::test]
async fn test_sends_query_headers_and_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/echo")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .match_header("user-agent", USER_AGENT)
        .match_header("accept", "application/json")
        .match_header("x-trace", "abc")
        .match_body(Matcher::Json(json!({"title": "x"})))
        .with_status(202)
        .with_header("x-served-by", "mock")
        .with_body("accepted")
        .create_async()
        .await;

    let transport = ReqwestTransport::new(&Config::with_base_url(&server.url())).unwrap();
    let request = HttpRequest::new(Method::POST, "/echo")
        .with_query("page", 2)
        .with_header("X-Trace", "abc")
        .with_json(&json!({"title": "x"}))
        .unwrap();

    let response = transport
        .execute(&format!("{}/echo", server.url()), &request)
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 202);
    assert_eq!(response.body, "accepted");
    assert_eq!(
        response.headers.get("x-served-by").and_then(|v| v.to_str().ok()),
        Some("mock")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_a_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("gone")
        .create_async()
        .await;

    let transport = ReqwestTransport::new(&Config::with_base_url(&server.url())).unwrap();
    let response = transport
        .execute(&format!("{}/missing", server.url()), &HttpRequest::get("/missing"))
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_multipart_text_and_file_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="note"\r\n\r\nhello"#.to_string()),
            Matcher::Regex(r#"name="file"; filename="a.csv""#.to_string()),
            Matcher::Regex("content-type: text/csv".to_string()),
        ]))
        .with_status(201)
        .create_async()
        .await;

    let transport = ReqwestTransport::new(&Config::with_base_url(&server.url())).unwrap();
    let request = HttpRequest::new(Method::POST, "/upload").with_multipart(vec![
        MultipartPart::text("note", "hello"),
        MultipartPart::file("file", "a.csv", Some("text/csv"), b"a,b\n1,2\n".to_vec()),
    ]);

    let response = transport
        .execute(&format!("{}/upload", server.url()), &request)
        .await
        .unwrap();
    assert_eq!(response.status.as_u16(), 201);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bad_mime_is_invalid_input() {
    let transport = ReqwestTransport::new(&Config::with_base_url("http://127.0.0.1:9")).unwrap();
    let request = HttpRequest::new(Method::POST, "/upload").with_multipart(vec![
        MultipartPart::file("file", "a.bin", Some("not a mime"), vec![0]),
    ]);

    let result = transport.execute("http://127.0.0.1:9/upload", &request).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let transport = ReqwestTransport::new(&Config::with_base_url("http://127.0.0.1:9")).unwrap();
    let result = transport
        .execute("http://127.0.0.1:9/tasks/", &HttpRequest::get("/tasks/"))
        .await;
    assert!(matches!(result, Err(AppError::Network(_))));
}

#[tokio::test]
async fn test_zero_timeout_means_no_timeout() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/tasks/")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let mut config = Config::with_base_url(&server.url());
    config.rest_api.timeout = 0;
    let transport = ReqwestTransport::new(&config).unwrap();

    let response = transport
        .execute(&format!("{}/tasks/", server.url()), &HttpRequest::get("/tasks/"))
        .await
        .expect("a zero timeout must not fail every request");
    assert_eq!(response.status.as_u16(), 200);
    mock.assert_async().await;
}
