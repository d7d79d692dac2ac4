// src/handlers/vendas.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::UsuarioAutenticado,
    // Models referenciados no Swagger
    models::{ContaReceber, Entrega, Venda},
};

/// Filtro opcional por vendedor, aplicado por cima do escopo da sessão.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FiltroVendedor {
    pub vendedor: Option<String>,
}

// GET /api/vendas
#[utoipa::path(
    get,
    path = "/api/vendas",
    tag = "Vendas",
    params(FiltroVendedor),
    responses(
        (status = 200, description = "Vendas visíveis para o usuário, entrega mais recente primeiro", body = Vec<Venda>),
        (status = 401, description = "Sessão ausente ou inválida")
    ),
    security(
        ("session_token" = [])
    )
)]
pub async fn listar_vendas(
    State(estado): State<AppState>,
    UsuarioAutenticado(sessao): UsuarioAutenticado,
    Query(filtro): Query<FiltroVendedor>,
) -> Result<impl IntoResponse, AppError> {
    let vendas = estado
        .vendas_service
        .listar_vendas(&sessao.username, filtro.vendedor.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(vendas)))
}

// GET /api/entregas
#[utoipa::path(
    get,
    path = "/api/entregas",
    tag = "Vendas",
    params(FiltroVendedor),
    responses(
        (status = 200, description = "Entregas do controle de frete, previsão mais recente primeiro", body = Vec<Entrega>),
        (status = 401, description = "Sessão ausente ou inválida")
    ),
    security(
        ("session_token" = [])
    )
)]
pub async fn listar_entregas(
    State(estado): State<AppState>,
    UsuarioAutenticado(sessao): UsuarioAutenticado,
    Query(filtro): Query<FiltroVendedor>,
) -> Result<impl IntoResponse, AppError> {
    let entregas = estado
        .vendas_service
        .listar_entregas(&sessao.username, filtro.vendedor.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(entregas)))
}

// GET /api/liquidadas
#[utoipa::path(
    get,
    path = "/api/liquidadas",
    tag = "Vendas",
    params(FiltroVendedor),
    responses(
        (status = 200, description = "Títulos do contas a receber, pagamento mais recente primeiro", body = Vec<ContaReceber>),
        (status = 401, description = "Sessão ausente ou inválida")
    ),
    security(
        ("session_token" = [])
    )
)]
pub async fn listar_liquidadas(
    State(estado): State<AppState>,
    UsuarioAutenticado(sessao): UsuarioAutenticado,
    Query(filtro): Query<FiltroVendedor>,
) -> Result<impl IntoResponse, AppError> {
    let contas = estado
        .vendas_service
        .listar_liquidadas(&sessao.username, filtro.vendedor.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(contas)))
}
