// src/db/frete_repo.rs

use sqlx::PgPool;

use crate::common::error::AppError;
use crate::models::frete::{Entrega, STATUS_ENTREGUE};

#[derive(Clone)]
pub struct FreteRepository {
    pool: PgPool,
}

impl FreteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista as entregas do controle de frete, previsão mais recente primeiro.
    pub async fn listar(&self, vendedor: Option<&str>) -> Result<Vec<Entrega>, AppError> {
        let entregas = sqlx::query_as::<_, Entrega>(
            r#"
            SELECT id, numero_nf, documento, vendedor, valor_nf, valor_frete,
                   data_emissao, data_coleta, previsao_entrega, nome_orgao,
                   contato_orgao, cidade_destino, transportadora, status
            FROM "controle frete"
            WHERE ($1::text IS NULL OR vendedor = $1)
            ORDER BY previsao_entrega DESC
            "#,
        )
        .bind(vendedor)
        .fetch_all(&self.pool)
        .await?;

        Ok(entregas)
    }

    /// Só as entregas concluídas, insumo da sincronização de vendas.
    pub async fn listar_entregues(&self) -> Result<Vec<Entrega>, AppError> {
        let entregas = sqlx::query_as::<_, Entrega>(
            r#"
            SELECT id, numero_nf, documento, vendedor, valor_nf, valor_frete,
                   data_emissao, data_coleta, previsao_entrega, nome_orgao,
                   contato_orgao, cidade_destino, transportadora, status
            FROM "controle frete"
            WHERE status = $1
            "#,
        )
        .bind(STATUS_ENTREGUE)
        .fetch_all(&self.pool)
        .await?;

        Ok(entregas)
    }
}
