use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Token de sessão não encontrado")]
    TokenAusente,

    #[error("Sessão inválida: {motivo}")]
    SessaoInvalida { motivo: String },

    // Falha de transporte ou de desserialização ao consultar o portal
    #[error("Erro ao verificar autenticação")]
    Portal(#[from] reqwest::Error),

    #[error("Erro de banco de dados")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::TokenAusente => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "error": "Não autenticado",
                    "message": "Token de sessão não encontrado",
                }),
            ),
            AppError::SessaoInvalida { motivo } => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "error": "Sessão inválida",
                    "message": motivo,
                }),
            ),
            AppError::Portal(erro) => {
                tracing::error!("❌ Erro ao verificar sessão no portal: {}", erro);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Erro interno",
                        "message": "Erro ao verificar autenticação",
                    }),
                )
            }
            AppError::Database(erro) => {
                tracing::error!("❌ Erro de banco de dados: {}", erro);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Erro interno",
                        "details": erro.to_string(),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
