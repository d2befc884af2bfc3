// crates/backend-lib/tests/common/mod.rs

//! Shared setup for the integration tests: a seeded in-memory store
//! and a fully wired router.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use backend_lib::{
    auth::hash_password,
    config::Settings,
    router,
    store::{InMemoryStore, UserRecord},
    AppState,
};
use schoolhub_common::Role;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub const PASSWORD: &str = "Correct-horse-7!";

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState<InMemoryStore>>,
    pub student_linkage: Uuid,
    pub parent_linkage: Uuid,
}

pub async fn test_app() -> TestApp {
    let store = InMemoryStore::new();
    let hash = hash_password(PASSWORD).unwrap();

    let mut student_linkage = Uuid::nil();
    let mut parent_linkage = Uuid::nil();

    for (email, name, role) in [
        ("admin@example.com", "Head Admin", Role::Admin),
        ("staff@example.com", "Front Desk", Role::Staff),
        ("student@example.com", "Jamie Student", Role::Student),
        ("parent@example.com", "Parent Guardian", Role::Parent),
    ] {
        let user_id = Uuid::new_v4();
        store
            .insert_user(UserRecord {
                id: user_id,
                email: email.to_string(),
                password_hash: hash.clone(),
                display_name: name.to_string(),
                role,
            })
            .await;
        if role.has_linkage() {
            let linkage = Uuid::new_v4();
            store.insert_linkage(role, user_id, linkage).await;
            match role {
                Role::Student => student_linkage = linkage,
                Role::Parent => parent_linkage = linkage,
                _ => {}
            }
        }
    }

    let mut settings = Settings::default();
    settings.token_secret = "integration-test-secret".to_string();
    settings.auth_rate_limit.max_attempts = 5;

    let state = Arc::new(AppState::new(store, settings));
    TestApp {
        router: router::create_router(state.clone()),
        state,
        student_linkage,
        parent_linkage,
    }
}

impl TestApp {
    /// POST /auth/login and return the raw response.
    pub async fn login_response(&self, email: &str, password: &str) -> Response<Body> {
        let body = serde_json::json!({ "email": email, "password": password }).to_string();
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Log in and return the session token from the Set-Cookie header.
    pub async fn login_token(&self, email: &str) -> String {
        let response = self.login_response(email, PASSWORD).await;
        assert!(response.status().is_success(), "login failed for {email}");
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login must set the session cookie")
            .to_str()
            .unwrap();
        let (name_value, _) = cookie.split_once(';').unwrap_or((cookie, ""));
        let (_, token) = name_value.split_once('=').unwrap();
        token.to_string()
    }

    /// GET a path, optionally with a bearer token.
    pub async fn get(&self, path: &str, token: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
