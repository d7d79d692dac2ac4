// src/handlers/status.rs

use axum::{
    Json,
    extract::{OriginalUri, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::{config::AppState, middleware::auth::UsuarioAutenticado};

const SERVICO: &str = "Vendas API";
const VERSAO: &str = env!("CARGO_PKG_VERSION");

fn agora() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// GET / (público)
#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    responses(
        (status = 200, description = "Identificação do serviço")
    )
)]
pub async fn raiz() -> impl IntoResponse {
    Json(json!({
        "status": "online",
        "service": SERVICO,
        "version": VERSAO,
        "timestamp": agora(),
    }))
}

// GET /health (público)
// Responde 200 mesmo sem banco; o estado vai no corpo.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Status",
    responses(
        (status = 200, description = "Saúde do serviço e alcance do banco")
    )
)]
pub async fn health(State(estado): State<AppState>) -> impl IntoResponse {
    let (status, database) = match estado.vendas_service.contar_vendas().await {
        Ok(_) => ("healthy", "connected"),
        Err(erro) => {
            tracing::warn!("Health check sem alcance ao banco: {}", erro);
            ("unhealthy", "disconnected")
        }
    };

    Json(json!({
        "status": status,
        "database": database,
        "timestamp": agora(),
        "service": SERVICO,
    }))
}

// GET /api/status
// Usado pelo painel para detectar queda de conexão ou sessão expirada.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 200, description = "Sessão válida e serviço no ar"),
        (status = 401, description = "Sessão ausente ou inválida")
    ),
    security(
        ("session_token" = [])
    )
)]
pub async fn status(UsuarioAutenticado(sessao): UsuarioAutenticado) -> impl IntoResponse {
    Json(json!({
        "status": "online",
        "usuario": sessao.username,
        "timestamp": agora(),
    }))
}

// Fallback para qualquer rota fora do mapa. OriginalUri porque dentro de
// um nest o Uri comum chega sem o prefixo.
pub async fn rota_desconhecida(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "404 - Rota não encontrada",
            "path": uri.path(),
        })),
    )
}
