use serde_json::json;
use statevault::{CheckpointStore, NamedCheckpoint, StoreConfig, connect};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Store, retrieve, and list checkpoints against a local SQLite file.
///
/// Run with `RUST_LOG=statevault=debug` to watch the instrumented store
/// operations.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(true),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive("statevault=info".parse().unwrap())
                .add_directive("quickstart=info".parse().unwrap()),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = StoreConfig::from_env().unwrap_or(StoreConfig::Sqlite {
        file_path: "statevault.db".into(),
    });
    tracing::info!(backend = config.kind(), "connecting");

    let store = connect(&config).await?;
    store.ensure_schema().await?;

    let first = NamedCheckpoint::now(
        "agent-7",
        "before-tool-call",
        &json!({"step": 3, "messages": ["hello"]}),
    )?
    .with_config(&json!({"temperature": 0.2}))?;
    let first_id = store.store_checkpoint(&first).await?;
    println!("stored checkpoint {first_id}");

    let second = NamedCheckpoint::now("agent-7", "after-tool-call", &json!({"step": 4}))?;
    let second_id = store.store_checkpoint(&second).await?;
    println!("stored checkpoint {second_id}");

    let restored = store
        .retrieve_checkpoint(&first_id)
        .await?
        .expect("checkpoint was just stored");
    println!(
        "retrieved {}: state={} config={:?}",
        restored.id, restored.state, restored.config
    );

    println!("newest first:");
    for item in store.list_checkpoints().await? {
        println!("  #{} {} ({}) @ {}", item.id, item.name, item.agent_id, item.created_at);
    }

    Ok(())
}
