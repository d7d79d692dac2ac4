// src/db/contas_repo.rs

use sqlx::PgPool;

use crate::common::error::AppError;
use crate::models::contas::{ContaReceber, PagamentoConta};

#[derive(Clone)]
pub struct ContasRepository {
    pool: PgPool,
}

impl ContasRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista os títulos do contas a receber, pagamento mais recente primeiro.
    /// Títulos sem data de pagamento ficam no fim.
    pub async fn listar(&self, vendedor: Option<&str>) -> Result<Vec<ContaReceber>, AppError> {
        let contas = sqlx::query_as::<_, ContaReceber>(
            r#"
            SELECT id, numero_nf, vendedor, orgao, banco, tipo_nf, valor,
                   data_emissao, data_vencimento, data_pagamento, status, observacoes
            FROM "contas receber"
            WHERE ($1::text IS NULL OR vendedor = $1)
            ORDER BY data_pagamento DESC NULLS LAST
            "#,
        )
        .bind(vendedor)
        .fetch_all(&self.pool)
        .await?;

        Ok(contas)
    }

    /// Projeção enxuta para a sincronização de pagamentos.
    pub async fn listar_pagamentos(&self) -> Result<Vec<PagamentoConta>, AppError> {
        let pagamentos = sqlx::query_as::<_, PagamentoConta>(
            r#"SELECT numero_nf, status, data_pagamento FROM "contas receber""#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(pagamentos)
    }
}
