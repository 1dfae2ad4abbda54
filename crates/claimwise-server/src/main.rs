//! Claimwise HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use claimwise::config::Config;
use claimwise::embedding::{DEFAULT_EMBEDDING_DIM, Embedder, TextEmbedder};
use claimwise::engine::RetrievalEngine;
use claimwise::records::load_tables;
use claimwise_server::gateway::{HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
 ██████╗██╗      █████╗ ██╗███╗   ███╗██╗    ██╗██╗███████╗███████╗
██╔════╝██║     ██╔══██╗██║████╗ ████║██║    ██║██║██╔════╝██╔════╝
██║     ██║     ███████║██║██╔████╔██║██║ █╗ ██║██║███████╗█████╗
██║     ██║     ██╔══██║██║██║╚██╔╝██║██║███╗██║██║╚════██║██╔══╝
╚██████╗███████╗██║  ██║██║██║ ╚═╝ ██║╚███╔███╔╝██║███████║███████╗
 ╚═════╝╚══════╝╚═╝  ╚═╝╚═╝╚═╝     ╚═╝ ╚══╝╚══╝ ╚═╝╚══════╝╚══════╝

        LOOK UP. FALL BACK. ANSWER.
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        data_dir = %config.data_dir.display(),
        "Claimwise starting"
    );

    let embedder = match &config.embedding_url {
        Some(url) => {
            tracing::info!(url = %url, model = %config.embedding_model, "using remote embedder");
            Embedder::remote(url.clone(), config.embedding_model.clone())
        }
        None => {
            tracing::warn!(
                model = %config.embedding_model,
                "no CLAIMWISE_EMBEDDING_URL configured, using deterministic hashed embedder"
            );
            Embedder::hashed(DEFAULT_EMBEDDING_DIM, config.embedding_model.clone())
        }
    };

    let tables = load_tables(&config.data_dir);
    let engine = Arc::new(RetrievalEngine::initialize(tables, embedder, config.top_k).await);

    tracing::info!(
        readiness = %engine.readiness(),
        documents = engine.corpus_len(),
        model = engine.embedder().model_id(),
        top_k = config.top_k,
        "retrieval engine initialized"
    );

    let state = HandlerState::new(engine);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Claimwise shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("CLAIMWISE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/health", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
