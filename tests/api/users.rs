use crate::helper::{created_location, spawn_app};
use serde_json::{json, Value};

fn user_body() -> Value {
    json!({
        "first_name": "A",
        "last_name": "B",
        "age": 30,
        "email": "a@b.com",
        "role": "client",
        "phone": "123"
    })
}

#[tokio::test]
async fn list_users_returns_every_seeded_user() {
    let app = spawn_app().await;

    let users = app.get_json("/users").await;

    let users = users.as_array().expect("Expected a JSON array");
    assert_eq!(users.len(), app.fixtures.users.len());
    let first = &users[0];
    for key in ["id", "first_name", "last_name", "age", "email", "role", "phone"] {
        assert!(first.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(first.as_object().unwrap().len(), 7);
}

#[tokio::test]
async fn responses_are_json() {
    let app = spawn_app().await;

    let response = app.get("/users/1").await;

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .expect("Content-Type missing")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn created_user_can_be_read_back() {
    let app = spawn_app().await;

    // Step: 1= Creating a new user
    let response = app.post("/users", user_body()).await;
    let location = created_location(&response);
    assert_eq!(response.content_length(), Some(0));

    // Step: 2= Reading it back through the Location header
    let user = app.get_json(&location).await;
    let mut expected = user_body();
    expected["id"] = user["id"].clone();
    assert_eq!(user, expected);
    assert_eq!(location, format!("/users/{}", user["id"]));

    let users = app.get_json("/users").await;
    assert_eq!(users.as_array().unwrap().len(), app.fixtures.users.len() + 1);
}

#[tokio::test]
async fn update_user_overwrites_every_field() {
    let app = spawn_app().await;
    let body = json!({
        "first_name": "Updated",
        "last_name": "Name",
        "age": 55,
        "email": "updated@mymail.com",
        "role": "executor",
        "phone": "000"
    });

    let response = app.put("/users/1", body.clone()).await;
    assert_eq!(response.status().as_u16(), 204);

    let user = app.get_json("/users/1").await;
    let mut expected = body;
    expected["id"] = json!(1);
    assert_eq!(user, expected);
}

#[tokio::test]
async fn update_user_with_missing_field_is_bad_request() {
    let app = spawn_app().await;
    let mut body = user_body();
    body.as_object_mut().unwrap().remove("age");

    let response = app.put("/users/1", body).await;

    assert_eq!(response.status().as_u16(), 400);
    let error: Value = response.json().await.unwrap();
    assert!(error["error"].as_str().unwrap().contains("age"));

    // Nothing was written
    let user = app.get_json("/users/1").await;
    assert_eq!(user["first_name"], app.fixtures.users[0].first_name.as_str());
}

#[tokio::test]
async fn create_user_rejects_unknown_and_mistyped_fields() {
    let app = spawn_app().await;

    let mut unknown = user_body();
    unknown["nickname"] = json!("ab");
    let mut mistyped = user_body();
    mistyped["age"] = json!("thirty");

    for body in [unknown, mistyped, json!({})] {
        let response = app.post("/users", body).await;
        assert_eq!(response.status().as_u16(), 400);
    }
    let users = app.get_json("/users").await;
    assert_eq!(users.as_array().unwrap().len(), app.fixtures.users.len());
}

#[tokio::test]
async fn update_unknown_user_is_not_found() {
    let app = spawn_app().await;

    let response = app.put("/users/999999", user_body()).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn deleted_user_is_gone() {
    let app = spawn_app().await;

    let response = app.delete("/users/2").await;
    assert_eq!(response.status().as_u16(), 204);

    let response = app.get("/users/2").await;
    assert_eq!(response.status().as_u16(), 404);

    let response = app.delete("/users/2").await;
    assert_eq!(response.status().as_u16(), 404);
}
