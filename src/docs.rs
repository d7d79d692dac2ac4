// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Status ---
        handlers::status::raiz,
        handlers::status::health,
        handlers::status::status,

        // --- Vendas ---
        handlers::vendas::listar_vendas,
        handlers::vendas::listar_entregas,
        handlers::vendas::listar_liquidadas,

        // --- Sincronização ---
        handlers::sync::sincronizar_entregas,
        handlers::sync::sincronizar_pagamentos,
    ),
    components(
        schemas(
            models::vendas::Venda,
            models::frete::Entrega,
            models::contas::ContaReceber,
            handlers::sync::SyncEntregasResponse,
            handlers::sync::SyncPagamentosResponse,
        )
    ),
    tags(
        (name = "Status", description = "Identificação e saúde do serviço"),
        (name = "Vendas", description = "Consultas do painel de vendas"),
        (name = "Sincronização", description = "Espelhamento do frete e do contas a receber")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-session-token"))),
        );
    }
}
