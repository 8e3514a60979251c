//! Integration tests for login, refresh rotation, reuse detection, and
//! logout.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn login_success_sets_refresh_cookie() {
    let app = helpers::TestApp::new().await;
    app.register_user("alice@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "password123",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());
    // Refresh credential travels only in the cookie.
    assert!(response.body.get("refresh_token").is_none());
    assert!(response.refresh_cookie.is_some());
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new().await;
    app.register_user("bob@example.com", "password123").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "bob@example.com",
                "password": "wrongpassword",
            })),
            None,
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "password123",
            })),
            None,
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.raw_body, unknown_email.raw_body);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn refresh_rotates_and_detects_reuse() {
    let app = helpers::TestApp::new().await;
    app.register_user("carol@example.com", "password123").await;
    let (_access, r1) = app.login("carol@example.com", "password123").await;

    // R1 -> R2
    let resp = app
        .request("POST", "/api/auth/refresh", None, None, Some(&r1))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    let r2 = resp.refresh_cookie.clone().expect("rotation returns a new cookie");
    assert_ne!(r1, r2);

    // R2 -> R3: the fresh chain keeps working.
    let resp = app
        .request("POST", "/api/auth/refresh", None, None, Some(&r2))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    let r3 = resp.refresh_cookie.clone().unwrap();

    // Replaying the stale R1 is reuse: rejected, and the whole session
    // family is revoked.
    let resp = app
        .request("POST", "/api/auth/refresh", None, None, Some(&r1))
        .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

    let resp = app
        .request("POST", "/api/auth/refresh", None, None, Some(&r3))
        .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn logout_is_best_effort_and_revokes() {
    let app = helpers::TestApp::new().await;
    app.register_user("dave@example.com", "password123").await;
    let (_access, refresh) = app.login("dave@example.com", "password123").await;

    // Logout with a valid cookie revokes the session.
    let resp = app
        .request("POST", "/api/auth/logout", None, None, Some(&refresh))
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let resp = app
        .request("POST", "/api/auth/refresh", None, None, Some(&refresh))
        .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

    // Logout with garbage still answers 200.
    let resp = app
        .request("POST", "/api/auth/logout", None, None, Some("garbage"))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn me_requires_valid_token() {
    let app = helpers::TestApp::new().await;
    app.register_user("erin@example.com", "password123").await;
    let (access, _refresh) = app.login("erin@example.com", "password123").await;

    let resp = app
        .request("GET", "/api/auth/me", None, Some(&access), None)
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body.get("email").and_then(|v| v.as_str()),
        Some("erin@example.com")
    );

    let resp = app.request("GET", "/api/auth/me", None, None, None).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}
