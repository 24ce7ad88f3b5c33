//! GET /admin/signups: authentication and listing order.

mod common;

use chrono::DateTime;
use common::{ADMIN_PASSWORD, ADMIN_USER, basic_auth, test_app};
use poem::http::StatusCode;

#[tokio::test]
async fn missing_credentials_get_a_challenge() {
    let (cli, _dir) = test_app().await;

    let resp = cli.get("/admin/signups").send().await;

    resp.assert_status(StatusCode::UNAUTHORIZED);
    resp.assert_header("www-authenticate", "Basic realm=\"Signups Admin\"");
    resp.assert_text(r#"{"error":"Unauthorized"}"#).await;
}

#[tokio::test]
async fn wrong_credentials_are_rejected() {
    let (cli, _dir) = test_app().await;

    let resp = cli
        .get("/admin/signups")
        .header("Authorization", basic_auth(ADMIN_USER, "wrong-password"))
        .send()
        .await;

    resp.assert_status(StatusCode::UNAUTHORIZED);
    resp.assert_text(r#"{"error":"Unauthorized"}"#).await;
}

#[tokio::test]
async fn garbage_authorization_header_is_rejected() {
    let (cli, _dir) = test_app().await;

    let resp = cli
        .get("/admin/signups")
        .header("Authorization", "Basic not-base64!!!")
        .send()
        .await;

    resp.assert_status(StatusCode::UNAUTHORIZED);
    resp.assert_header("www-authenticate", "Basic realm=\"Signups Admin\"");
}

#[tokio::test]
async fn listing_returns_all_records_newest_first() {
    let (cli, _dir) = test_app().await;

    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        let resp = cli
            .post("/api/signup")
            .body_json(&serde_json::json!({ "email": email }))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
    }

    let resp = cli
        .get("/admin/signups")
        .header("Authorization", basic_auth(ADMIN_USER, ADMIN_PASSWORD))
        .send()
        .await;

    resp.assert_status_is_ok();
    let json = resp.json().await;
    json.value().object().get("count").assert_i64(3);

    let value = json.value();
    let object = value.object();
    let signups = object.get("signups").object_array();
    assert_eq!(signups.len(), 3);

    signups[0].get("id").assert_i64(3);
    signups[0].get("email").assert_string("c@example.com");
    signups[1].get("id").assert_i64(2);
    signups[2].get("id").assert_i64(1);
    signups[2].get("email").assert_string("a@example.com");

    let created_at = signups[0].get("created_at").string();
    DateTime::parse_from_rfc3339(created_at).expect("created_at should be RFC 3339");
}

#[tokio::test]
async fn listing_an_empty_store_reports_zero() {
    let (cli, _dir) = test_app().await;

    let resp = cli
        .get("/admin/signups")
        .header("Authorization", basic_auth(ADMIN_USER, ADMIN_PASSWORD))
        .send()
        .await;

    resp.assert_status_is_ok();
    let json = resp.json().await;
    json.value().object().get("count").assert_i64(0);
}
