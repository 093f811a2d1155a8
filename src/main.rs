//! Folio Chat - chat-styled portfolio API
//!
//! Backs a website chat widget that answers questions about a developer's
//! profile, skills, projects and contact details. Replies come from keyword
//! matching against a fixed set of canned responses; there is no LLM behind it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod conversation;
mod core;
mod portfolio;
mod routes;

use config::Config;
use crate::core::{ChatEngine, ConversationStore, ReplyDelay, Resolver};
use portfolio::Portfolio;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub chat_engine: Arc<ChatEngine>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_chat=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let portfolio = match &config.portfolio_file {
        Some(path) => {
            let portfolio = Portfolio::from_file(path)?;
            tracing::info!("📄 Loaded portfolio from {}", path.display());
            portfolio
        }
        None => Portfolio::builtin(),
    };

    tracing::info!(
        "👤 Serving portfolio of {} ({} skills, {} projects)",
        portfolio.profile().name,
        portfolio.skills().len(),
        portfolio.projects().len()
    );

    let resolver = Resolver::new(Arc::new(portfolio)).with_mode(config.match_mode);
    tracing::info!("🔎 Keyword match mode: {:?}", resolver.mode());

    tracing::info!("🗂️ Keeping up to {} conversations in memory", config.max_conversations);

    let (min_delay, max_delay) = config.reply_delay_bounds();
    let chat_engine = Arc::new(ChatEngine::new(
        resolver,
        Arc::new(ConversationStore::with_capacity(config.max_conversations)),
        ReplyDelay::new(min_delay, max_delay),
    ));

    let state = AppState {
        config,
        chat_engine,
    };

    let app = Router::new()
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("💬 Folio Chat running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
