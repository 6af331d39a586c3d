//! HTTP-level integration tests for the contact form endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, build_app, build_test_app, get, post_json};
use learnpath_db::models::contact::ContactSubmission;
use learnpath_db::repositories::ContactRepo;
use serde_json::json;

fn form(subject: &str) -> serde_json::Value {
    json!({
        "name": "Grace",
        "email": "grace@example.com",
        "subject": subject,
        "message": "We would like to volunteer."
    })
}

#[tokio::test]
async fn submit_returns_id_and_defaults() {
    let app = build_test_app();
    let response = post_json(app.clone(), "/api/v1/contact", form("Hello")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let listed = body_json(get(app, "/api/v1/admin/contacts").await).await;
    let contacts = listed["data"].as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["id"], id.as_str());
    assert_eq!(contacts[0]["type"], "general");
    assert_eq!(contacts[0]["status"], "new");
}

#[tokio::test]
async fn submit_with_missing_field_returns_400() {
    for field in ["name", "email", "subject", "message"] {
        let mut body = form("Hello");
        body.as_object_mut().unwrap().remove(field);
        let response = post_json(build_test_app(), "/api/v1/contact", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn empty_listing_is_an_empty_array() {
    let response = get(build_test_app(), "/api/v1/admin/contacts").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[tokio::test]
async fn listing_is_newest_first() {
    let store = learnpath_db::in_memory_store();
    for (id, minutes_ago) in [("older", 30), ("oldest", 90)] {
        ContactRepo::insert(
            &store,
            &ContactSubmission {
                id: id.to_string(),
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
                subject: "Earlier".to_string(),
                message: "Hi".to_string(),
                kind: "media".to_string(),
                submitted_at: Utc::now() - Duration::minutes(minutes_ago),
                status: "new".to_string(),
            },
        )
        .await
        .unwrap();
    }

    let app = build_app(store);
    let response = post_json(app.clone(), "/api/v1/contact", form("Latest")).await;
    let newest = body_json(response).await["data"]["id"].clone();

    let listed = body_json(get(app, "/api/v1/admin/contacts").await).await;
    let ids: Vec<&serde_json::Value> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| &c["id"])
        .collect();
    assert_eq!(ids, vec![&newest, &json!("older"), &json!("oldest")]);
}
