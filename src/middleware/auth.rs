// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::{common::error::AppError, config::AppState, models::Sessao};

/// Guarda das rotas /api: exige o header X-Session-Token e confirma o
/// token no portal a cada requisição. Sem cache de sessão.
pub async fn exigir_sessao(
    State(estado): State<AppState>,
    mut requisicao: Request,
    proximo: Next,
) -> Result<Response, AppError> {
    let token = requisicao
        .headers()
        .get("x-session-token")
        .and_then(|valor| valor.to_str().ok())
        .filter(|valor| !valor.is_empty())
        .ok_or(AppError::TokenAusente)?;

    let sessao = estado.portal.verificar_sessao(token).await?;
    tracing::debug!("Sessão confirmada para {}", sessao.username);

    requisicao.extensions_mut().insert(sessao);

    Ok(proximo.run(requisicao).await)
}

/// Extrator da sessão que o `exigir_sessao` deixou nas extensions.
pub struct UsuarioAutenticado(pub Sessao);

impl<S> FromRequestParts<S> for UsuarioAutenticado
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Sessao>()
            .cloned()
            .map(UsuarioAutenticado)
            .ok_or(AppError::TokenAusente)
    }
}
