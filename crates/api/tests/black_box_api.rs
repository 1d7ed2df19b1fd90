use reqwest::StatusCode;
use serde_json::json;

use roster_api::context::Locale;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with_locale(Locale::En).await
    }

    async fn spawn_with_locale(default_locale: Locale) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = roster_api::app::build_app(default_locale);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn user_payload(name: &str, email: &str) -> serde_json::Value {
    json!({ "name": name, "email": email, "password": "s3cret-pass" })
}

async fn create_user(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    email: &str,
) -> serde_json::Value {
    let res = client
        .post(format!("{}/api/v1/users", base_url))
        .json(&user_payload(name, email))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

fn content_language(res: &reqwest::Response) -> Option<String> {
    res.headers()
        .get(reqwest::header::CONTENT_LANGUAGE)
        .map(|value| value.to_str().unwrap().to_string())
}

#[tokio::test]
async fn health_answers_outside_the_api_namespace() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    // No locale negotiation outside the namespace.
    assert_eq!(content_language(&res), None);
}

#[tokio::test]
async fn user_lifecycle_create_read_update_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Create
    let created = create_user(&client, &srv.base_url, "Linh Tran", "linh@example.com").await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Linh Tran");
    assert_eq!(created["email"], "linh@example.com");
    assert!(created["created_at"].is_string());
    assert!(created.get("password").is_none());

    // Read back
    let res = client
        .get(format!("{}/api/v1/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["email"], "linh@example.com");

    // Update
    let res = client
        .put(format!("{}/api/v1/users/{}", srv.base_url, id))
        .json(&json!({ "name": "Linh T.", "email": "linh.t@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Linh T.");
    assert_eq!(updated["email"], "linh.t@example.com");

    // Delete
    let res = client
        .delete(format!("{}/api/v1/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Deleted" }));

    // Gone
    let res = client
        .get(format!("{}/api/v1/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "User not found", "status": 404 }));
}

#[tokio::test]
async fn listing_returns_users_in_creation_order() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_user(&client, &srv.base_url, "First", "first@example.com").await;
    create_user(&client, &srv.base_url, "Second", "second@example.com").await;

    let res = client
        .get(format!("{}/api/v1/users", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|user| user["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn empty_payload_reports_every_field_violation() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/v1/users", srv.base_url))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "message": "Validation Failed",
            "status": 422,
            "errors": {
                "email": ["is required"],
                "name": ["is required"],
                "password": ["is required"],
            },
        })
    );
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_user(&client, &srv.base_url, "Linh", "linh@example.com").await;

    let res = client
        .post(format!("{}/api/v1/users", srv.base_url))
        .json(&user_payload("Other", "linh@example.com"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["errors"]["email"], json!(["has already been taken"]));
}

#[tokio::test]
async fn unknown_api_paths_answer_with_the_json_contract() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/v1/widgets", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Resource Not Found", "status": 404 }));
}

#[tokio::test]
async fn unknown_paths_outside_the_namespace_stay_plain() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/nope", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(content_language(&res), None);
    assert_eq!(res.text().await.unwrap(), "");
}

#[tokio::test]
async fn wrong_method_answers_with_the_json_contract() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // On the collection route.
    let res = client
        .patch(format!("{}/api/v1/users", srv.base_url))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Method Not Allowed", "status": 405 }));

    // And on the item route.
    let user = create_user(&client, &srv.base_url, "Linh", "linh@example.com").await;
    let res = client
        .patch(format!(
            "{}/api/v1/users/{}",
            srv.base_url,
            user["id"].as_str().unwrap()
        ))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn malformed_json_surfaces_as_bad_request() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/v1/users", srv.base_url))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], 400);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn non_json_content_type_is_swallowed_into_500() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/v1/users", srv.base_url))
        .header(reqwest::header::CONTENT_TYPE, "text/plain")
        .body("name=Linh")
        .send()
        .await
        .unwrap();

    // The body rejection hints 415; anything but exactly 400 is not
    // trusted and resolves to a 500.
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn non_uuid_ids_read_as_route_misses() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/v1/users/abc", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Resource Not Found", "status": 404 }));
}

#[tokio::test]
async fn updates_and_deletes_of_missing_users_are_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let missing = uuid::Uuid::now_v7();

    let res = client
        .put(format!("{}/api/v1/users/{}", srv.base_url, missing))
        .json(&user_payload("Linh", "linh@example.com"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "User not found", "status": 404 }));

    let res = client
        .delete(format!("{}/api/v1/users/{}", srv.base_url, missing))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payload_wins_over_a_missing_user() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let missing = uuid::Uuid::now_v7();

    let res = client
        .put(format!("{}/api/v1/users/{}", srv.base_url, missing))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn lang_param_selects_the_locale() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/v1/users?lang=vi", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(content_language(&res).as_deref(), Some("vi"));
}

#[tokio::test]
async fn accept_language_selects_the_locale() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/v1/users", srv.base_url))
        .header(reqwest::header::ACCEPT_LANGUAGE, "vi-VN,vi;q=0.9")
        .send()
        .await
        .unwrap();
    assert_eq!(content_language(&res).as_deref(), Some("vi"));

    // Unsupported languages fall back to the default.
    let res = client
        .get(format!("{}/api/v1/users", srv.base_url))
        .header(reqwest::header::ACCEPT_LANGUAGE, "fr-FR,fr;q=0.9")
        .send()
        .await
        .unwrap();
    assert_eq!(content_language(&res).as_deref(), Some("en"));
}

#[tokio::test]
async fn configured_default_locale_applies_without_signals() {
    let srv = TestServer::spawn_with_locale(Locale::Vi).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/v1/users", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(content_language(&res).as_deref(), Some("vi"));
}

#[tokio::test]
async fn error_responses_carry_the_locale_too() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/v1/widgets?lang=vi", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(content_language(&res).as_deref(), Some("vi"));
}
