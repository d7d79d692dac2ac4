// src/handlers/sync.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    common::error::AppError,
    config::AppState,
    models::Venda,
    services::sync_service::{ResultadoSyncEntregas, ResultadoSyncPagamentos},
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SyncEntregasResponse {
    #[schema(example = "Sincronização concluída")]
    pub message: String,

    pub synced: usize,

    /// Presente só quando houve inserção.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Venda>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SyncPagamentosResponse {
    #[schema(example = "Sincronização de pagamentos concluída")]
    pub message: String,

    pub updated: usize,

    /// NFs cuja atualização falhou neste ciclo.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub falhas: Vec<String>,
}

impl From<ResultadoSyncEntregas> for SyncEntregasResponse {
    fn from(resultado: ResultadoSyncEntregas) -> Self {
        match resultado {
            ResultadoSyncEntregas::SemEntregas => Self {
                message: "Nenhuma entrega nova encontrada".to_string(),
                synced: 0,
                data: None,
            },
            ResultadoSyncEntregas::JaSincronizadas => Self {
                message: "Todas as entregas já estão sincronizadas".to_string(),
                synced: 0,
                data: None,
            },
            ResultadoSyncEntregas::Inseridas(vendas) => Self {
                message: "Sincronização concluída".to_string(),
                synced: vendas.len(),
                data: Some(vendas),
            },
        }
    }
}

impl From<ResultadoSyncPagamentos> for SyncPagamentosResponse {
    fn from(resultado: ResultadoSyncPagamentos) -> Self {
        match resultado {
            ResultadoSyncPagamentos::SemVendas => Self {
                message: "Nenhuma venda para atualizar".to_string(),
                updated: 0,
                falhas: Vec::new(),
            },
            ResultadoSyncPagamentos::Concluido { atualizadas, falhas } => Self {
                message: "Sincronização de pagamentos concluída".to_string(),
                updated: atualizadas,
                falhas,
            },
        }
    }
}

// GET /api/sync-entregas
#[utoipa::path(
    get,
    path = "/api/sync-entregas",
    tag = "Sincronização",
    responses(
        (status = 200, description = "Entregas concluídas espelhadas em vendas", body = SyncEntregasResponse),
        (status = 401, description = "Sessão ausente ou inválida"),
        (status = 500, description = "Falha de banco ao inserir o lote")
    ),
    security(
        ("session_token" = [])
    )
)]
pub async fn sincronizar_entregas(
    State(estado): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let resultado = estado.sync_service.sincronizar_entregas().await?;

    Ok((StatusCode::OK, Json(SyncEntregasResponse::from(resultado))))
}

// GET /api/sync-pagamentos
#[utoipa::path(
    get,
    path = "/api/sync-pagamentos",
    tag = "Sincronização",
    responses(
        (status = 200, description = "Flags de pagamento conferidas contra o contas a receber", body = SyncPagamentosResponse),
        (status = 401, description = "Sessão ausente ou inválida")
    ),
    security(
        ("session_token" = [])
    )
)]
pub async fn sincronizar_pagamentos(
    State(estado): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let resultado = estado.sync_service.sincronizar_pagamentos().await?;

    Ok((StatusCode::OK, Json(SyncPagamentosResponse::from(resultado))))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;

    fn venda(numero_nf: &str) -> Venda {
        Venda {
            id: 1,
            numero_nf: numero_nf.to_string(),
            vendedor: "ISAQUE".to_string(),
            valor_nf: Decimal::new(1500050, 2),
            data_emissao: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            data_entrega: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            nome_orgao: "PREFEITURA DE CAMPO GRANDE".to_string(),
            cidade_destino: "CAMPO GRANDE".to_string(),
            status_pagamento: false,
            data_pagamento: None,
        }
    }

    #[test]
    fn cada_resultado_de_entregas_tem_a_sua_mensagem() {
        let sem = SyncEntregasResponse::from(ResultadoSyncEntregas::SemEntregas);
        assert_eq!(sem.message, "Nenhuma entrega nova encontrada");
        assert_eq!(sem.synced, 0);

        let repetidas = SyncEntregasResponse::from(ResultadoSyncEntregas::JaSincronizadas);
        assert_eq!(repetidas.message, "Todas as entregas já estão sincronizadas");
        assert_eq!(repetidas.synced, 0);

        let inseridas = SyncEntregasResponse::from(ResultadoSyncEntregas::Inseridas(vec![
            venda("100"),
            venda("101"),
        ]));
        assert_eq!(inseridas.message, "Sincronização concluída");
        assert_eq!(inseridas.synced, 2);
    }

    #[test]
    fn cada_resultado_de_pagamentos_tem_a_sua_mensagem() {
        let sem = SyncPagamentosResponse::from(ResultadoSyncPagamentos::SemVendas);
        assert_eq!(sem.message, "Nenhuma venda para atualizar");
        assert_eq!(sem.updated, 0);

        let concluido = SyncPagamentosResponse::from(ResultadoSyncPagamentos::Concluido {
            atualizadas: 3,
            falhas: vec!["100".to_string()],
        });
        assert_eq!(concluido.message, "Sincronização de pagamentos concluída");
        assert_eq!(concluido.updated, 3);
        assert_eq!(concluido.falhas, vec!["100".to_string()]);
    }

    #[test]
    fn data_so_entra_no_json_quando_houve_insercao() {
        let sem = serde_json::to_value(SyncEntregasResponse::from(
            ResultadoSyncEntregas::SemEntregas,
        ))
        .unwrap();
        assert!(sem.get("data").is_none());

        let inseridas = serde_json::to_value(SyncEntregasResponse::from(
            ResultadoSyncEntregas::Inseridas(vec![venda("100")]),
        ))
        .unwrap();
        assert_eq!(inseridas["data"][0]["numero_nf"], "100");
    }

    #[test]
    fn falhas_so_entram_no_json_quando_existem() {
        let limpo = serde_json::to_value(SyncPagamentosResponse::from(
            ResultadoSyncPagamentos::Concluido {
                atualizadas: 2,
                falhas: Vec::new(),
            },
        ))
        .unwrap();
        assert_eq!(limpo["updated"], 2);
        assert!(limpo.get("falhas").is_none());

        let com_falhas = serde_json::to_value(SyncPagamentosResponse::from(
            ResultadoSyncPagamentos::Concluido {
                atualizadas: 1,
                falhas: vec!["100".to_string()],
            },
        ))
        .unwrap();
        assert_eq!(com_falhas["falhas"][0], "100");
    }
}
