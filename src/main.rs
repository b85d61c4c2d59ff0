use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studydesk::api::router;
use studydesk::config::Config;
use studydesk::question_bank::QuestionBank;
use studydesk::rowstore::{InMemoryRowStore, RestRowStore, RowStore};
use studydesk::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "studydesk=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new_from_env();

    let question_bank = QuestionBank::load_or_empty(&config.question_bank_path);

    let row_store: Arc<dyn RowStore> = match config.row_store.clone() {
        Some(rs_config) => Arc::new(RestRowStore::new(rs_config)?),
        None => {
            warn!("no row store configured, timetable data will not persist");
            Arc::new(InMemoryRowStore::new())
        }
    };

    let state = AppState::new(question_bank, row_store);

    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
