#![cfg(not(coverage))]

use super::*;
use chrono::{Duration, NaiveDate, Utc};
use httpmock::prelude::*;
use serde_json::json;

const ANON: &str = "anon-key";

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_backend(server.base_url(), ANON)
}

fn token_json(access: &str) -> serde_json::Value {
    json!({
        "access_token": access,
        "refresh_token": "refresh-1",
        "expires_in": 3600,
        "token_type": "bearer",
        "user": { "id": "u1", "email": "ops@technolease.com" }
    })
}

fn admin_session(expires_in: Duration) -> Session {
    Session {
        access_token: "access-1".into(),
        refresh_token: "refresh-1".into(),
        expires_at: Utc::now() + expires_in,
        user: UserProfile {
            id: "u1".into(),
            email: "ops@technolease.com".into(),
            role: Role::Admin,
            name: Some("Ops".into()),
        },
    }
}

fn application_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "company_name": "Acme Resellers",
        "applicant_name": "Jo Doe",
        "email": "jo@acme.test",
        "phone": null,
        "notes": null,
        "status": status,
        "created_at": "2025-01-02T10:00:00Z"
    })
}

fn kit_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Executive Suite",
        "description": "MacBook Pro, iPad Pro",
        "deal_code": "DEAL-1",
        "rental_price": 299.0,
        "rental_term": "24 Months",
        "hero_image_url": null,
        "status": "active",
        "created_at": "2025-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn login_fetches_profile_and_stores_session() {
    let server = MockServer::start_async().await;
    let token = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/v1/token")
            .query_param("grant_type", "password")
            .header("apikey", ANON)
            .json_body(json!({ "email": "ops@technolease.com", "password": "secret" }));
        then.status(200).json_body(token_json("access-1"));
    });
    let profile = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/profiles")
            .query_param("id", "eq.u1")
            .header("authorization", "Bearer access-1")
            .header("accept", "application/vnd.pgrst.object+json");
        then.status(200).json_body(json!({
            "id": "u1",
            "role": "admin",
            "full_name": "Ops Lead"
        }));
    });

    let client = api_client(&server);
    let session = client.login(" ops@technolease.com ", "secret").await.unwrap();

    token.assert();
    profile.assert();
    assert_eq!(session.user.role, Role::Admin);
    assert_eq!(session.user.email, "ops@technolease.com");
    assert_eq!(session.user.name.as_deref(), Some("Ops Lead"));
    assert!(session.expires_at > Utc::now());
    assert_eq!(client.session(), Some(session));
}

#[tokio::test]
async fn login_without_profile_row_is_rejected() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/v1/token");
        then.status(200).json_body(token_json("access-1"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/profiles");
        then.status(406).json_body(json!({
            "code": "PGRST116",
            "message": "JSON object requested, multiple (or no) rows returned"
        }));
    });

    let client = api_client(&server);
    let err = client.login("new@technolease.com", "secret").await.unwrap_err();
    assert_eq!(err.code, "PROFILE_NOT_FOUND");
    assert!(client.session().is_none());
}

#[tokio::test]
async fn login_surfaces_auth_error_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/v1/token");
        then.status(400).json_body(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        }));
    });

    let err = api_client(&server)
        .login("ops@technolease.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.error, "Invalid login credentials");
}

#[tokio::test]
async fn create_application_always_inserts_new_status() {
    let server = MockServer::start_async().await;
    let insert = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/reseller_applications")
            .header("prefer", "return=representation")
            .json_body_partial(r#"{ "status": "new", "company_name": "Acme Resellers" }"#);
        then.status(201)
            .json_body(json!([application_json("a1", "new")]));
    });

    let created = api_client(&server)
        .create_application(&NewApplication {
            company_name: "Acme Resellers".into(),
            applicant_name: "Jo Doe".into(),
            email: "jo@acme.test".into(),
            phone: None,
            notes: None,
            status: ApplicationStatus::Approved,
        })
        .await
        .unwrap();

    insert.assert();
    assert_eq!(created.status, ApplicationStatus::New);
}

#[tokio::test]
async fn status_update_is_sent_for_backwards_transitions() {
    let server = MockServer::start_async().await;
    let patch = server.mock(|when, then| {
        when.method("PATCH")
            .path("/rest/v1/reseller_applications")
            .query_param("id", "eq.a1")
            .json_body(json!({ "status": "new" }));
        then.status(204);
    });

    api_client(&server)
        .update_application_status("a1", ApplicationStatus::New)
        .await
        .unwrap();
    patch.assert();
}

#[tokio::test]
async fn list_applications_requests_newest_first() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/reseller_applications")
            .query_param("order", "created_at.desc")
            .query_param("select", "*");
        then.status(200).json_body(json!([
            application_json("a2", "reviewing"),
            application_json("a1", "new")
        ]));
    });

    let apps = api_client(&server).list_applications().await.unwrap();
    list.assert();
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].status, ApplicationStatus::Reviewing);
}

#[tokio::test]
async fn kit_listing_and_deletion_hit_kits_table() {
    let server = MockServer::start_async().await;
    let all = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/kits")
            .query_param("order", "created_at.desc");
        then.status(200).json_body(json!([kit_json("k1")]));
    });
    let active = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/kits")
            .query_param("status", "eq.active");
        then.status(200).json_body(json!([kit_json("k1")]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/rest/v1/kits")
            .query_param("id", "eq.k1");
        then.status(204);
    });

    let client = api_client(&server);
    assert_eq!(client.list_kits().await.unwrap().len(), 1);
    assert_eq!(client.list_active_kits().await.unwrap()[0].id, "k1");
    client.delete_kit("k1").await.unwrap();
    all.assert();
    active.assert();
    delete.assert();
}

#[tokio::test]
async fn kit_assignment_toggles_rows() {
    let server = MockServer::start_async().await;
    let assigned = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/reseller_kits")
            .query_param("select", "kit_id")
            .query_param("reseller_id", "eq.r1");
        then.status(200)
            .json_body(json!([{ "kit_id": "k1" }, { "kit_id": "k2" }]));
    });
    let insert = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/reseller_kits")
            .json_body(json!({ "reseller_id": "r1", "kit_id": "k3" }));
        then.status(201)
            .json_body(json!([{ "reseller_id": "r1", "kit_id": "k3" }]));
    });
    let remove = server.mock(|when, then| {
        when.method(DELETE)
            .path("/rest/v1/reseller_kits")
            .query_param("reseller_id", "eq.r1")
            .query_param("kit_id", "eq.k1");
        then.status(204);
    });

    let client = api_client(&server);
    assert_eq!(
        client.list_assigned_kit_ids("r1").await.unwrap(),
        vec!["k1".to_string(), "k2".to_string()]
    );
    client.assign_kit("r1", "k3").await.unwrap();
    client.unassign_kit("r1", "k1").await.unwrap();
    assigned.assert();
    insert.assert();
    remove.assert();
}

#[tokio::test]
async fn resellers_are_filtered_by_role() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/profiles")
            .query_param("role", "eq.reseller");
        then.status(200).json_body(json!([
            { "id": "r1", "email": "partner@shop.test", "role": "reseller", "full_name": null }
        ]));
    });

    let resellers = api_client(&server).list_resellers().await.unwrap();
    list.assert();
    assert_eq!(resellers[0].display_name(), "Unnamed Reseller");
}

#[tokio::test]
async fn leads_are_scoped_to_reseller() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/leads")
            .query_param("reseller_id", "eq.r1")
            .query_param("order", "last_contact.desc");
        then.status(200).json_body(json!([{
            "id": "l1",
            "reseller_id": "r1",
            "name": "Alice Freeman",
            "email": "alice@techcorp.com",
            "company": "TechCorp",
            "status": "qualified",
            "value": 15000,
            "last_contact": "2025-01-25"
        }]));
    });
    let insert = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/leads")
            .json_body_partial(r#"{ "reseller_id": "r1", "status": "new", "last_contact": "2025-02-01" }"#);
        then.status(201).json_body(json!([{
            "id": "l2",
            "reseller_id": "r1",
            "name": "Marcus Chen",
            "email": "m.chen@startuplab.io",
            "company": "StartupLab",
            "status": "new",
            "value": 8500,
            "last_contact": "2025-02-01"
        }]));
    });
    let patch = server.mock(|when, then| {
        when.method("PATCH")
            .path("/rest/v1/leads")
            .query_param("id", "eq.l1")
            .json_body(json!({ "status": "closed" }));
        then.status(204);
    });

    let client = api_client(&server);
    let leads = client.list_leads("r1").await.unwrap();
    assert_eq!(leads[0].status, LeadStatus::Qualified);
    assert_eq!(leads[0].value, 15000.0);
    client
        .create_lead(&NewLead {
            reseller_id: "r1".into(),
            name: "Marcus Chen".into(),
            email: "m.chen@startuplab.io".into(),
            company: "StartupLab".into(),
            status: LeadStatus::New,
            value: 8500.0,
            last_contact: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        })
        .await
        .unwrap();
    client
        .update_lead_status("l1", LeadStatus::Closed)
        .await
        .unwrap();
    list.assert();
    insert.assert();
    patch.assert();
}

#[tokio::test]
async fn data_requests_use_session_token_and_401_clears_it() {
    let server = MockServer::start_async().await;
    let rejected = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/kits")
            .header("authorization", "Bearer access-1")
            .header("apikey", ANON);
        then.status(401).json_body(json!({ "message": "JWT expired" }));
    });

    let client = api_client(&server);
    client.set_session(admin_session(Duration::hours(1)));
    let err = client.list_kits().await.unwrap_err();

    rejected.assert();
    assert_eq!(err.error, "JWT expired");
    assert!(client.session().is_none());
}

#[tokio::test]
async fn anonymous_requests_use_anon_key_as_bearer() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/kits")
            .header("authorization", format!("Bearer {}", ANON));
        then.status(200).json_body(json!([]));
    });

    assert!(api_client(&server).list_kits().await.unwrap().is_empty());
    list.assert();
}

#[tokio::test]
async fn upload_public_image_returns_public_url() {
    let server = MockServer::start_async().await;
    let upload = server.mock(|when, then| {
        when.method(POST)
            .path_contains("/storage/v1/object/kit-images/")
            .header("content-type", "image/png")
            .body("png-bytes");
        then.status(200)
            .json_body(json!({ "Key": "kit-images/abc.png" }));
    });

    let url = api_client(&server)
        .upload_public_image(
            storage::KIT_IMAGES_BUCKET,
            "hero.png",
            b"png-bytes".to_vec(),
            "image/png",
        )
        .await
        .unwrap();

    upload.assert();
    let prefix = format!(
        "{}/storage/v1/object/public/kit-images/",
        server.base_url()
    );
    assert!(url.starts_with(&prefix));
    assert!(url.ends_with(".png"));
}

#[tokio::test]
async fn update_password_puts_to_auth_user() {
    let server = MockServer::start_async().await;
    let put = server.mock(|when, then| {
        when.method(PUT)
            .path("/auth/v1/user")
            .header("authorization", "Bearer access-1")
            .json_body(json!({ "password": "new-secret" }));
        then.status(200).json_body(json!({ "id": "u1" }));
    });

    let client = api_client(&server);
    client.set_session(admin_session(Duration::hours(1)));
    client.update_password("new-secret").await.unwrap();
    put.assert();
}

#[tokio::test]
async fn sign_out_clears_session_even_when_backend_fails() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/v1/logout");
        then.status(500).json_body(json!({ "message": "boom" }));
    });

    let client = api_client(&server);
    client.set_session(admin_session(Duration::hours(1)));
    assert!(client.sign_out().await.is_err());
    assert!(client.session().is_none());
}

#[tokio::test]
async fn restore_session_refreshes_expired_tokens() {
    let server = MockServer::start_async().await;
    let refresh = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/v1/token")
            .query_param("grant_type", "refresh_token")
            .json_body(json!({ "refresh_token": "refresh-1" }));
        then.status(200).json_body(token_json("access-2"));
    });

    let client = api_client(&server);
    client.set_session(admin_session(Duration::minutes(-5)));
    let restored = client.restore_session().await.unwrap();

    refresh.assert();
    assert_eq!(restored.access_token, "access-2");
    assert_eq!(restored.user.role, Role::Admin);
}

#[tokio::test]
async fn restore_session_drops_session_when_refresh_fails() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/v1/token");
        then.status(400).json_body(json!({
            "error": "invalid_grant",
            "error_description": "Refresh Token Not Found"
        }));
    });

    let client = api_client(&server);
    client.set_session(admin_session(Duration::minutes(-5)));
    assert!(client.restore_session().await.is_none());
    assert!(client.session().is_none());
}

#[tokio::test]
async fn restore_session_keeps_fresh_session_without_network() {
    let server = MockServer::start_async().await;
    let client = api_client(&server);
    let session = admin_session(Duration::hours(1));
    client.set_session(session.clone());
    assert_eq!(client.restore_session().await, Some(session));
}

#[tokio::test]
async fn unknown_status_from_backend_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/reseller_applications");
        then.status(200)
            .json_body(json!([application_json("a1", "archived")]));
    });

    let err = api_client(&server).list_applications().await.unwrap_err();
    assert_eq!(err.code, "PARSE_ERROR");
}

#[tokio::test]
async fn insert_without_returned_row_is_rejected() {
    let server = MockServer::start_async().await;
    let insert = server.mock(|when, then| {
        when.method(POST).path("/rest/v1/reseller_applications");
        then.status(201).json_body(json!([]));
    });

    let err = api_client(&server)
        .create_application(&NewApplication {
            company_name: "Acme Resellers".into(),
            applicant_name: "Jo Doe".into(),
            email: "jo@acme.test".into(),
            phone: None,
            notes: None,
            status: ApplicationStatus::New,
        })
        .await
        .unwrap_err();
    insert.assert();
    assert_eq!(err.code, "NO_ROW_RETURNED");
}

#[tokio::test]
async fn unreachable_backend_reports_request_failure() {
    let client = ApiClient::new_with_backend("http://127.0.0.1:1", ANON);
    let err = client.list_kits().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(err.error.starts_with("Request failed"));
}
