//! Wordgrid Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordgrid_engine::api;
use wordgrid_engine::infrastructure::{
    config::AppConfig,
    dictionary::DictionaryApiClient,
    memory::{InMemoryGameStore, WordList},
    ports::{RandomPort, WordValidator},
    random::SystemRandom,
};
use wordgrid_engine::use_cases::session::GameSettings;
use wordgrid_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordgrid_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wordgrid Engine");

    // Load configuration
    let config = AppConfig::from_env();
    GameSettings::from_config(&config).validate()?;

    let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());

    // Word list: configured file or the bundled one
    let words = Arc::new(match &config.word_list_path {
        Some(path) => WordList::load(path, random.clone()).await?,
        None => {
            tracing::info!("WORD_LIST_PATH not set, using bundled word list");
            WordList::builtin(random.clone())?
        }
    });
    if words.count_in(config.word_category) == 0 {
        anyhow::bail!(
            "Word list has no words in category {}",
            config.word_category
        );
    }

    let validator: Arc<dyn WordValidator> = match config.dictionary_api() {
        Some((url, key)) => {
            tracing::info!(url = %url, "Validating words against dictionary API");
            Arc::new(DictionaryApiClient::new(url, key))
        }
        None => {
            tracing::info!("Validating words against the word list");
            words.clone()
        }
    };

    let server_host = config.server_host.clone();
    let server_port = config.server_port;

    // Create application
    let app = Arc::new(App::new(
        config,
        Arc::new(InMemoryGameStore::new()),
        words,
        validator,
        random,
    ));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer_from_env() {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer_from_env() -> Option<CorsLayer> {
    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
