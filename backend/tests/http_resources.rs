//! End-to-end HTTP behaviour over the in-memory store.

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, test};
use rstest::rstest;
use serde_json::{Value, json};

use todo_backend::Trace;
use todo_backend::domain::ports::RepositoryError;
use todo_backend::domain::{CredentialHash, TRACE_ID_HEADER};
use todo_backend::inbound::http::resources::MAX_BODY_BYTES;
use todo_backend::inbound::http::{ErrorBody, default_service};
use todo_backend::test_support::InMemoryApp;

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(Trace)
                .configure(|cfg| $state.routes.configure(cfg))
                .default_service(default_service()),
        )
        .await
    };
}

fn task_body(title: &str) -> Value {
    json!({"title": title, "description": "write the report", "status": "open"})
}

#[actix_web::test]
async fn task_lifecycle_create_list_conflict() {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(task_body("t1"))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let message: String = test::read_body_json(created).await;
    assert_eq!(message, "Task t1 created");

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tasks").to_request(),
    )
    .await;
    assert_eq!(
        listed,
        json!([{"title": "t1", "description": "write the report", "status": "open"}])
    );

    let repeated = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(task_body("t1"))
            .to_request(),
    )
    .await;
    assert_eq!(repeated.status(), StatusCode::CONFLICT);
    let body: ErrorBody = test::read_body_json(repeated).await;
    assert_eq!(body.status, 409);
    assert_eq!(body.message, "Task name already exists");
    assert_eq!(state.tasks.len(), 1);
}

#[actix_web::test]
async fn user_credentials_are_hashed_before_storage() {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "ada", "hash": "correct horse"}))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let message: String = test::read_body_json(created).await;
    assert_eq!(message, "User ada created");

    let fetched: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/users/ada").to_request(),
    )
    .await;
    assert_eq!(fetched["id"], json!(1));
    assert_eq!(fetched["username"], json!("ada"));
    let stored = fetched["hash"].as_str().expect("hash string");
    assert_ne!(stored, "correct horse");
    assert!(stored.starts_with("$argon2id$"));
    assert!(
        state
            .hasher
            .verify("correct horse", &CredentialHash::from_phc(stored))
    );
}

#[actix_web::test]
async fn password_alias_is_accepted() {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "grace", "password": "cobol"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(state.users.len(), 1);
}

#[rstest]
#[case("/api/tasks", json!({"title": "t1", "description": "d"}), "Missing one or more fields: title, description, status")]
#[case("/api/tasks", json!({"title": "", "description": "d", "status": "open"}), "Missing one or more fields: title, description, status")]
#[case("/api/users", json!({"username": "ada"}), "Missing one or more fields: username, hash")]
#[case("/api/users", json!({"username": "", "hash": "pw"}), "Missing one or more fields: username, hash")]
#[actix_web::test]
async fn missing_fields_are_rejected(
    #[case] uri: &str,
    #[case] payload: Value,
    #[case] expected: &str,
) {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::post().uri(uri).set_json(payload).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = test::read_body_json(res).await;
    assert_eq!(body.message, expected);
    assert!(state.users.is_empty());
    assert!(state.tasks.is_empty());
}

#[rstest]
#[case("/api/users", json!({"username": "ada", "hash": null}), "Missing one or more fields: username, hash")]
#[case("/api/users", json!({"username": null, "password": "pw"}), "Missing one or more fields: username, hash")]
#[case("/api/tasks", json!({"title": "t1", "description": "d", "status": null}), "Missing one or more fields: title, description, status")]
#[actix_web::test]
async fn null_fields_count_as_missing(
    #[case] uri: &str,
    #[case] payload: Value,
    #[case] expected: &str,
) {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::post().uri(uri).set_json(payload).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = test::read_body_json(res).await;
    assert_eq!(body, ErrorBody { status: 400, message: expected.to_owned() });
    assert!(state.users.is_empty());
    assert!(state.tasks.is_empty());
}

#[actix_web::test]
async fn duplicate_username_is_a_conflict() {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let first = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "ada", "hash": "first"}))
            .to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "ada", "hash": "second"}))
            .to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body: ErrorBody = test::read_body_json(second).await;
    assert_eq!(body, ErrorBody { status: 409, message: "Username already exists".to_owned() });
    assert_eq!(state.users.len(), 1);
}

#[actix_web::test]
async fn oversized_bodies_are_bad_requests() {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let payload = json!({
        "title": "t1",
        "description": "a".repeat(MAX_BODY_BYTES),
        "status": "open",
    });
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = test::read_body_json(res).await;
    assert_eq!(body.message, "Bad request");
    assert!(state.tasks.is_empty());
}

#[rstest]
#[case("/api/tasks", "{not json")]
#[case("/api/users", "[1, 2, 3]")]
#[case("/api/tasks", "")]
#[actix_web::test]
async fn malformed_bodies_are_bad_requests(#[case] uri: &str, #[case] raw: &'static str) {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(uri)
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(raw)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = test::read_body_json(res).await;
    assert_eq!(body, ErrorBody { status: 400, message: "Bad request".to_owned() });
}

#[actix_web::test]
async fn delete_removes_existing_and_reports_missing() {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(task_body("t1"))
            .to_request(),
    )
    .await;

    let deleted = test::call_service(
        &app,
        test::TestRequest::delete().uri("/api/tasks/t1").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let message: String = test::read_body_json(deleted).await;
    assert_eq!(message, "Task t1 deleted");

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tasks").to_request(),
    )
    .await;
    assert_eq!(listed, json!([]));

    let missing = test::call_service(
        &app,
        test::TestRequest::delete().uri("/api/users/ghost").to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(missing).await;
    assert_eq!(body.message, "User ghost does not exist");
}

#[rstest]
#[case("/api/users/ada", "Updating user ada is not implemented")]
#[case("/api/tasks/t1", "Updating task t1 is not implemented")]
#[actix_web::test]
async fn update_is_not_implemented(#[case] uri: &str, #[case] expected: &str) {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(uri)
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
    let body: ErrorBody = test::read_body_json(res).await;
    assert_eq!(body, ErrorBody { status: 501, message: expected.to_owned() });
}

#[rstest]
#[case(test::TestRequest::patch().uri("/api/tasks"))]
#[case(test::TestRequest::delete().uri("/api/users"))]
#[case(test::TestRequest::post().uri("/api/tasks/t1"))]
#[actix_web::test]
async fn unsupported_methods_are_405(#[case] request: test::TestRequest) {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let res = test::call_service(&app, request.to_request()).await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: ErrorBody = test::read_body_json(res).await;
    assert_eq!(body.status, 405);
}

#[actix_web::test]
async fn unknown_paths_are_json_404() {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/projects").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(res).await;
    assert_eq!(body, ErrorBody { status: 404, message: "Not found".to_owned() });
}

#[actix_web::test]
async fn get_of_missing_record_is_404() {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/tasks/ghost").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(res).await;
    assert_eq!(body.message, "Task ghost does not exist");
}

#[actix_web::test]
async fn store_failures_do_not_leak_driver_text() {
    let state = InMemoryApp::new();
    let app = init_app!(state);
    state
        .tasks
        .fail_with(RepositoryError::query("relation \"tasks\" does not exist"));

    let listed = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/tasks").to_request(),
    )
    .await;
    assert_eq!(listed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = test::read_body_json(listed).await;
    assert_eq!(body.message, "Error executing query");

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(task_body("t1"))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = test::read_body_json(created).await;
    assert_eq!(body.message, "Error creating task");
    assert!(!body.message.contains("relation"));

    state.tasks.clear_failure();
    assert!(state.tasks.is_empty());
}

#[rstest]
#[case(test::TestRequest::get().uri("/api/users"))]
#[case(test::TestRequest::get().uri("/api/users/nobody"))]
#[case(test::TestRequest::put().uri("/api/tasks/t1"))]
#[actix_web::test]
async fn responses_are_json_with_trace_id(#[case] request: test::TestRequest) {
    let state = InMemoryApp::new();
    let app = init_app!(state);

    let res = test::call_service(&app, request.to_request()).await;
    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
}
