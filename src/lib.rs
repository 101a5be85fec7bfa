pub mod api;
pub mod chart;
pub mod config;
pub mod core_state;
pub mod export;
pub mod llm;
pub mod reference;
pub mod study;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Start CasoLab: load the reference document, build the shared state, and
/// serve the study API until interrupted.
pub async fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("CasoLab starting v{}", config::APP_VERSION);

    // State construction reads the reference document and builds the
    // blocking HTTP client — keep it off the async threads.
    let core = tokio::task::spawn_blocking(core_state::CoreState::new)
        .await
        .expect("error while initializing CasoLab");
    let core = Arc::new(core);
    if !core.reference().is_loaded() {
        tracing::warn!(
            path = %config::reference_doc_path().display(),
            "Reference document unavailable; prompts will carry the fallback message"
        );
    }
    tracing::info!(model = core.model(), "Generation model configured");

    let mut server = api::start_study_api_server(core, config::listen_addr())
        .await
        .expect("error while starting CasoLab");

    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Shutting down");
    server.shutdown();
}
