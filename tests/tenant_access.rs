//! Integration tests for tenant resolution opacity and the RBAC pipeline.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

/// Create a tenant with `admin_id` as its first tenant admin and return
/// its slug.
async fn create_tenant(
    app: &helpers::TestApp,
    platform_admin_token: &str,
    slug: &str,
    admin_id: Uuid,
) {
    let resp = app
        .request(
            "POST",
            "/api/tenants",
            Some(serde_json::json!({
                "slug": slug,
                "name": slug,
                "first_admin_id": admin_id,
            })),
            Some(platform_admin_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED, "{:?}", resp.body);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn unknown_and_archived_tenants_are_indistinguishable() {
    let app = helpers::TestApp::new().await;
    let admin_id = app.register_user("root@example.com", "password123").await;
    app.make_platform_admin(admin_id).await;
    let (token, _) = app.login("root@example.com", "password123").await;

    create_tenant(&app, &token, "ghost-corp", admin_id).await;

    let resp = app
        .request(
            "POST",
            "/api/tenants/ghost-corp/archive",
            None,
            Some(&token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let archived = app
        .request("GET", "/api/tenants/ghost-corp", None, Some(&token), None)
        .await;
    let missing = app
        .request("GET", "/api/tenants/never-existed", None, Some(&token), None)
        .await;

    assert_eq!(archived.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(archived.raw_body, missing.raw_body);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn non_members_get_403_after_tenant_resolves() {
    let app = helpers::TestApp::new().await;
    let admin_id = app.register_user("root@example.com", "password123").await;
    app.make_platform_admin(admin_id).await;
    let (admin_token, _) = app.login("root@example.com", "password123").await;

    create_tenant(&app, &admin_token, "acme", admin_id).await;

    app.register_user("outsider@example.com", "password123").await;
    let (outsider_token, _) = app.login("outsider@example.com", "password123").await;

    // The tenant exists, so the failure is a role failure, not a 404.
    let resp = app
        .request("GET", "/api/tenants/acme", None, Some(&outsider_token), None)
        .await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set WORKHUB_TEST_DATABASE_URL)"]
async fn role_changes_take_effect_on_the_next_request() {
    let app = helpers::TestApp::new().await;
    let root_id = app.register_user("root@example.com", "password123").await;
    app.make_platform_admin(root_id).await;
    let (root_token, _) = app.login("root@example.com", "password123").await;

    create_tenant(&app, &root_token, "acme", root_id).await;

    // Second admin, promoted via the API.
    let second_id = app.register_user("second@example.com", "password123").await;
    let resp = app
        .request(
            "PUT",
            &format!("/api/tenants/acme/members/{second_id}/role"),
            Some(serde_json::json!({ "role": "tenant_admin" })),
            Some(&root_token),
            None,
        )
        .await;
    // No existing membership: role change is an assignment via invite or
    // admin upsert; a missing member is 404 here.
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    // Materialize the membership through an invite instead.
    let resp = app
        .request(
            "POST",
            "/api/tenants/acme/invites",
            Some(serde_json::json!({ "email": "second@example.com", "role": "tenant_admin" })),
            Some(&root_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let invite_token = resp.body.get("token").unwrap().as_str().unwrap().to_string();

    let (second_token, _) = app.login("second@example.com", "password123").await;
    let resp = app
        .request(
            "POST",
            "/api/tenants/acme/invites/accept",
            Some(serde_json::json!({ "token": invite_token })),
            Some(&second_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK, "{:?}", resp.body);

    // As a tenant admin, the second user can list invites.
    let resp = app
        .request(
            "GET",
            "/api/tenants/acme/invites",
            None,
            Some(&second_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    // Demote them; the very next request must be refused, with no token
    // refresh in between.
    let resp = app
        .request(
            "PUT",
            &format!("/api/tenants/acme/members/{second_id}/role"),
            Some(serde_json::json!({ "role": "member" })),
            Some(&root_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK, "{:?}", resp.body);

    let resp = app
        .request(
            "GET",
            "/api/tenants/acme/invites",
            None,
            Some(&second_token),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
}
