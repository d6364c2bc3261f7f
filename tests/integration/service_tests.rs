use crate::common::*;
use mockito::Matcher;
use serde_json::json;
use task_client::prelude::*;

#[tokio::test]
async fn test_get_all_sends_filters_and_reads_pages() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/tasks/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "completed".into()),
            Matcher::UrlEncoded("search".into(), "rent".into()),
        ]))
        .with_status(200)
        .with_body(format!(
            r#"{{"count":1,"next":null,"previous":null,"results":[{}]}}"#,
            task_json(4, "Pay rent")
        ))
        .create_async()
        .await;

    let (client, _) = signed_in_client(&server);
    let query = TaskQuery::new()
        .with_status(TaskStatus::Completed)
        .with_search("rent");
    let tasks = client.tasks().get_all(&query).await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, 4);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_filtered_lists_use_their_endpoints() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for path in ["/api/tasks/today/", "/api/tasks/completed/", "/api/tasks/pending/"] {
        mocks.push(
            server
                .mock("GET", path)
                .with_status(200)
                .with_body(format!("[{}]", task_json(1, "x")))
                .expect(1)
                .create_async()
                .await,
        );
    }

    let (client, _) = signed_in_client(&server);
    let tasks = client.tasks();
    assert_eq!(tasks.get_today().await.unwrap().len(), 1);
    assert_eq!(tasks.get_completed().await.unwrap().len(), 1);
    assert_eq!(tasks.get_pending().await.unwrap().len(), 1);

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_create_update_and_patch_task() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/api/tasks/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"title": "Write report", "priority": "high"})))
        .with_status(201)
        .with_body(task_json(10, "Write report"))
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/tasks/10/")
        .match_body(Matcher::Json(json!({"title": "Write final report"})))
        .with_status(200)
        .with_body(task_json(10, "Write final report"))
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/api/tasks/10/")
        .match_body(Matcher::Json(json!({"status": "completed"})))
        .with_status(200)
        .with_body(r#"{"id":10,"title":"Write final report","status":"completed"}"#)
        .create_async()
        .await;

    let (client, _) = signed_in_client(&server);
    let tasks = client.tasks();

    let created = tasks
        .create(&TaskRequest::new("Write report").with_priority(TaskPriority::High))
        .await
        .unwrap();
    assert_eq!(created.id, 10);

    let updated = tasks
        .update(10, &TaskRequest::new("Write final report"))
        .await
        .unwrap();
    assert_eq!(updated.title, "Write final report");

    let patched = tasks
        .partial_update(
            10,
            &TaskPatch {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(patched.is_completed());

    create.assert_async().await;
    update.assert_async().await;
    patch.assert_async().await;
}

#[tokio::test]
async fn test_validation_error_keeps_server_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/tasks/")
        .with_status(400)
        .with_body(r#"{"title":["This field may not be blank."]}"#)
        .create_async()
        .await;

    let (client, _) = signed_in_client(&server);
    match client.tasks().create(&TaskRequest::new("")).await {
        Err(AppError::Api { status, body }) => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("may not be blank"));
        }
        other => panic!("expected an api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_toggle_delete_and_statistics() {
    let mut server = mockito::Server::new_async().await;
    let toggle = server
        .mock("PATCH", "/api/tasks/3/toggle_status/")
        .with_status(200)
        .with_body(r#"{"id":3,"title":"x","status":"completed"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/tasks/3/")
        .with_status(204)
        .create_async()
        .await;
    let stats = server
        .mock("GET", "/api/tasks/statistics/")
        .with_status(200)
        .with_body(r#"{"total_tasks":4,"completed_tasks":3,"pending_tasks":1,"overdue_tasks":0}"#)
        .create_async()
        .await;

    let (client, _) = signed_in_client(&server);
    let tasks = client.tasks();

    assert!(tasks.toggle_status(3).await.unwrap().is_completed());
    tasks.delete(3).await.unwrap();
    assert_eq!(tasks.get_statistics().await.unwrap().completion_rate(), 0.75);

    toggle.assert_async().await;
    delete.assert_async().await;
    stats.assert_async().await;
}

#[tokio::test]
async fn test_attachment_upload_and_delete() {
    let mut server = mockito::Server::new_async().await;
    let upload = server
        .mock("POST", "/api/tasks/5/upload_attachment/")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_header("authorization", bearer(ACCESS).as_str())
        .match_body(Matcher::Regex(r#"name="file"; filename="notes.txt""#.to_string()))
        .with_status(201)
        .with_body(r#"{"id":12,"file":"/media/attachments/notes.txt","filename":"notes.txt"}"#)
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/api/tasks/5/delete_attachment/")
        .match_query(Matcher::UrlEncoded("attachment_id".into(), "12".into()))
        .with_status(204)
        .create_async()
        .await;

    let (client, _) = signed_in_client(&server);
    let file = AttachmentFile::new("notes.txt", b"remember the milk".to_vec())
        .unwrap()
        .with_mime("text/plain");

    let attachment = client.tasks().upload_attachment(5, file).await.unwrap();
    assert_eq!(attachment.id, 12);
    assert_eq!(attachment.filename.as_deref(), Some("notes.txt"));

    client.tasks().delete_attachment(5, attachment.id).await.unwrap();

    upload.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_upload_is_replayed_after_renewal() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/tasks/5/upload_attachment/")
        .match_header("authorization", bearer(ACCESS).as_str())
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("POST", "/api/auth/refresh/")
        .with_status(200)
        .with_body(json!({"access": RENEWED}).to_string())
        .create_async()
        .await;
    let replayed = server
        .mock("POST", "/api/tasks/5/upload_attachment/")
        .match_header("authorization", bearer(RENEWED).as_str())
        .match_body(Matcher::Regex("remember the milk".to_string()))
        .with_status(201)
        .with_body(r#"{"id":13,"file":"/media/attachments/notes.txt"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _) = signed_in_client(&server);
    let file = AttachmentFile::new("notes.txt", b"remember the milk".to_vec()).unwrap();
    let attachment = client.tasks().upload_attachment(5, file).await.unwrap();

    assert_eq!(attachment.id, 13);
    replayed.assert_async().await;
}

#[tokio::test]
async fn test_category_endpoints() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/api/categories/")
        .with_status(200)
        .with_body(r##"[{"id":1,"name":"Home","color":"#22c55e","task_count":2}]"##)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/api/categories/")
        .match_body(Matcher::Json(json!({"name": "Work", "color": "#3b82f6"})))
        .with_status(201)
        .with_body(r##"{"id":2,"name":"Work","color":"#3b82f6"}"##)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/categories/2/")
        .match_body(Matcher::Json(json!({"name": "Office"})))
        .with_status(200)
        .with_body(r#"{"id":2,"name":"Office"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/categories/2/")
        .with_status(204)
        .create_async()
        .await;

    let (client, _) = signed_in_client(&server);
    let categories = client.categories();

    let all = categories.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Home");

    let created = categories
        .create(&CategoryRequest::new("Work").with_color("#3b82f6"))
        .await
        .unwrap();
    assert_eq!(created.id, 2);

    let renamed = categories
        .update(2, &CategoryRequest::new("Office"))
        .await
        .unwrap();
    assert_eq!(renamed.name, "Office");

    categories.delete(2).await.unwrap();

    list.assert_async().await;
    create.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}
