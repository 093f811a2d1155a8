//! API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::conversation::{Conversation, Message};
use crate::core::{ChatError, ChatRequest, MatchMode, QuickAction, ReplyPayload, Topic};
use crate::portfolio::Portfolio;
use crate::AppState;

type ApiError = (StatusCode, Json<serde_json::Value>);

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    match_mode: MatchMode,
    conversations: usize,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse<'a> {
    pub conversation_id: Uuid,
    pub user: Message,
    pub reply: Message,
    pub topic: Topic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ReplyPayload<'a>>,
}

fn error_response(status: StatusCode, message: impl std::fmt::Display) -> ApiError {
    (status, Json(json!({ "error": message.to_string() })))
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        let status = match &err {
            ChatError::EmptyMessage | ChatError::UnknownQuickAction(_) => StatusCode::BAD_REQUEST,
            ChatError::ConversationNotFound(_) | ChatError::Store(_) => StatusCode::NOT_FOUND,
        };
        error_response(status, err)
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        match_mode: state.config.match_mode,
        conversations: state.chat_engine.store().len().await,
    })
}

async fn portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.chat_engine.resolver().portfolio().clone())
}

async fn quick_actions(State(state): State<AppState>) -> Json<&'static [QuickAction]> {
    Json(state.chat_engine.quick_actions())
}

async fn resolve(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Response {
    Json(state.chat_engine.resolve(&request.message)).into_response()
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    let exchange = state.chat_engine.chat(request).await?;
    let category = exchange.category();

    let response = ChatResponse {
        conversation_id: exchange.conversation_id,
        user: exchange.user,
        reply: exchange.reply,
        topic: exchange.topic,
        payload: ReplyPayload::for_category(category, state.chat_engine.resolver().portfolio()),
    };

    Ok(Json(response).into_response())
}

async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Conversation>, ApiError> {
    state
        .chat_engine
        .store()
        .get_conversation(id)
        .await
        .map(Json)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, ChatError::ConversationNotFound(id)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/v1/portfolio", get(portfolio))
        .route("/v1/quick-actions", get(quick_actions))
        .route("/v1/resolve", post(resolve))
        .route("/v1/chat", post(chat))
        .route("/v1/conversations/:id", get(get_conversation))
}
