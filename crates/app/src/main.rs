use std::sync::Arc;

use engine::{ExpenseStore, MemoryStore, MongoStore};
use settings::Store;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "spesa={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = engine::Engine::builder()
        .store(parse_store(&settings.server.store))
        .build()?;

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    server::run_with_listener(engine, listener).await?;

    Ok(())
}

fn parse_store(config: &Store) -> Arc<dyn ExpenseStore> {
    match config {
        Store::Memory => {
            tracing::info!("using in-memory store; records are lost on shutdown");
            Arc::new(MemoryStore::new())
        }
        Store::Mongo(mongo) => Arc::new(MongoStore::new(&mongo.uri, &mongo.database)),
    }
}
