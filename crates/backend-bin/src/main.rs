// ============================
// schoolhub-backend-bin/src/main.rs
// ============================
//! Backend binary: config, logging, store seeding and serve loop.
use std::sync::Arc;

use backend_lib::auth::hash_password;
use backend_lib::config::Settings;
use backend_lib::router;
use backend_lib::store::{InMemoryStore, UserRecord};
use backend_lib::AppState;
use schoolhub_common::Role;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone())),
        )
        .init();

    // In-memory stand-in for the relational persistence service.
    // Account provisioning is out of scope; seed one account per role
    // so the surface is exercisable out of the box.
    let store = InMemoryStore::new();
    seed_demo_accounts(&store).await?;

    let state = Arc::new(AppState::new(store, settings));
    let app = router::create_router(state.clone());

    let listener = TcpListener::bind(state.settings.bind_addr).await?;
    tracing::info!(addr = %state.settings.bind_addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn seed_demo_accounts(store: &InMemoryStore) -> anyhow::Result<()> {
    let accounts = [
        ("admin@example.com", "Head Admin", Role::Admin),
        ("staff@example.com", "Front Desk", Role::Staff),
        ("student@example.com", "Jamie Student", Role::Student),
        ("parent@example.com", "Parent Guardian", Role::Parent),
    ];

    for (email, name, role) in accounts {
        let user_id = Uuid::new_v4();
        store
            .insert_user(UserRecord {
                id: user_id,
                email: email.to_string(),
                password_hash: hash_password("Change-me-today1!")?,
                display_name: name.to_string(),
                role,
            })
            .await;
        if role.has_linkage() {
            store.insert_linkage(role, user_id, Uuid::new_v4()).await;
        }
        tracing::info!(email, role = %role, "seeded demo account");
    }

    Ok(())
}
