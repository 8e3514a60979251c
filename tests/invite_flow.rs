//! Integration tests for the invite lifecycle and membership invariants.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

/// Bootstrap: platform admin + tenant "acme" with them as tenant admin.
/// Returns (admin_id, admin_token).
async fn bootstrap(app: &helpers::TestApp) -> (Uuid, String) {
    let admin_id = app.register_user("root@example.com", "password123").await;
    app.make_platform_admin(admin_id).await;
    let (token, _) = app.login("root@example.com", "password123").await;

    let resp = app
        .request(
            "POST",
            "/api/tenants",
            Some(serde_json::json!({
                "slug": "acme",
                "name": "Acme",
                "first_admin_id": admin_id,
            })),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED, "{:?}", resp.body);

    (admin_id, token)
}

async fn create_invite(app: &helpers::TestApp, token: &str, email: &str) -> helpers::TestResponse {
    app.request(
        "POST",
        "/api/tenants/acme/invites",
        Some(serde_json::json!({ "email": email, "role": "member" })),
        Some(token),
        None,
    )
    .await
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn duplicate_pending_invite_is_rejected() {
    let app = helpers::TestApp::new().await;
    let (_admin_id, token) = bootstrap(&app).await;

    let first = create_invite(&app, &token, "bob@example.com").await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert!(first.body.get("token").is_some());

    let second = create_invite(&app, &token, "Bob@Example.com").await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(
        second.body.get("error").and_then(|v| v.as_str()),
        Some("DUPLICATE_INVITE")
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn accept_is_idempotent_and_membership_is_unique() {
    let app = helpers::TestApp::new().await;
    let (_admin_id, admin_token) = bootstrap(&app).await;

    let created = create_invite(&app, &admin_token, "bob@example.com").await;
    assert_eq!(created.status, StatusCode::CREATED);
    let raw_token = created.body.get("token").unwrap().as_str().unwrap().to_string();

    let bob_id = app.register_user("bob@example.com", "password123").await;
    let (bob_token, _) = app.login("bob@example.com", "password123").await;

    // First accept materializes the membership.
    let resp = app
        .request(
            "POST",
            "/api/tenants/acme/invites/accept",
            Some(serde_json::json!({ "token": raw_token })),
            Some(&bob_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK, "{:?}", resp.body);
    assert_eq!(resp.body.get("role").and_then(|v| v.as_str()), Some("member"));

    // Second accept: the invite is no longer pending.
    let resp = app
        .request(
            "POST",
            "/api/tenants/acme/invites/accept",
            Some(serde_json::json!({ "token": raw_token })),
            Some(&bob_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    // The retry altered nothing: exactly one membership row, still active.
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM memberships WHERE user_id = $1",
    )
    .bind(bob_id)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(count, 1);

    let resp = app
        .request("GET", "/api/tenants/acme", None, Some(&bob_token), None)
        .await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn expired_invites_are_swept_and_unacceptable() {
    let app = helpers::TestApp::new().await;
    let (_admin_id, admin_token) = bootstrap(&app).await;

    let created = create_invite(&app, &admin_token, "late@example.com").await;
    assert_eq!(created.status, StatusCode::CREATED);
    let invite_id = created.body.get("id").unwrap().as_str().unwrap().to_string();
    let raw_token = created.body.get("token").unwrap().as_str().unwrap().to_string();

    // Force the invite past its expiry.
    sqlx::query("UPDATE invites SET expires_at = NOW() - INTERVAL '1 hour' WHERE id = $1::uuid")
        .bind(&invite_id)
        .execute(&app.db_pool)
        .await
        .unwrap();

    app.register_user("late@example.com", "password123").await;
    let (late_token, _) = app.login("late@example.com", "password123").await;

    let resp = app
        .request(
            "POST",
            "/api/tenants/acme/invites/accept",
            Some(serde_json::json!({ "token": raw_token })),
            Some(&late_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    // The lazy sweep flipped the row to expired.
    let status: String =
        sqlx::query_scalar("SELECT status::text FROM invites WHERE id = $1::uuid")
            .bind(&invite_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(status, "expired");
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn revoke_only_works_on_pending_invites() {
    let app = helpers::TestApp::new().await;
    let (_admin_id, admin_token) = bootstrap(&app).await;

    let created = create_invite(&app, &admin_token, "gone@example.com").await;
    let invite_id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    let resp = app
        .request(
            "DELETE",
            &format!("/api/tenants/acme/invites/{invite_id}"),
            None,
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    // Revoking again answers exactly like an unknown id.
    let again = app
        .request(
            "DELETE",
            &format!("/api/tenants/acme/invites/{invite_id}"),
            None,
            Some(&admin_token),
            None,
        )
        .await;
    let unknown = app
        .request(
            "DELETE",
            &format!("/api/tenants/acme/invites/{}", Uuid::new_v4()),
            None,
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(again.raw_body, unknown.raw_body);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn last_active_admin_cannot_be_removed_or_demoted() {
    let app = helpers::TestApp::new().await;
    let (admin_id, admin_token) = bootstrap(&app).await;

    let resp = app
        .request(
            "DELETE",
            &format!("/api/tenants/acme/members/{admin_id}"),
            None,
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::CONFLICT);

    let resp = app
        .request(
            "PUT",
            &format!("/api/tenants/acme/members/{admin_id}/role"),
            Some(serde_json::json!({ "role": "member" })),
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::CONFLICT);

    // With a second active admin in place, the demotion goes through.
    let created = create_invite(&app, &admin_token, "co-admin@example.com").await;
    // Re-issue as tenant_admin role.
    assert_eq!(created.status, StatusCode::CREATED);
    let resp = app
        .request(
            "DELETE",
            &format!(
                "/api/tenants/acme/invites/{}",
                created.body.get("id").unwrap().as_str().unwrap()
            ),
            None,
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let created = app
        .request(
            "POST",
            "/api/tenants/acme/invites",
            Some(serde_json::json!({ "email": "co-admin@example.com", "role": "tenant_admin" })),
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let raw_token = created.body.get("token").unwrap().as_str().unwrap().to_string();

    app.register_user("co-admin@example.com", "password123").await;
    let (co_token, _) = app.login("co-admin@example.com", "password123").await;
    let resp = app
        .request(
            "POST",
            "/api/tenants/acme/invites/accept",
            Some(serde_json::json!({ "token": raw_token })),
            Some(&co_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK, "{:?}", resp.body);

    let resp = app
        .request(
            "PUT",
            &format!("/api/tenants/acme/members/{admin_id}/role"),
            Some(serde_json::json!({ "role": "member" })),
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK, "{:?}", resp.body);
}
