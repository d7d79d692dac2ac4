// src/db/vendas_repo.rs

use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::common::error::AppError;
use crate::models::vendas::{NovaVenda, Venda};

#[derive(Clone)]
pub struct VendasRepository {
    pool: PgPool,
}

impl VendasRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista as vendas, da entrega mais recente para a mais antiga.
    /// Com `vendedor` presente, restringe ao vendedor exato.
    pub async fn listar(&self, vendedor: Option<&str>) -> Result<Vec<Venda>, AppError> {
        let vendas = sqlx::query_as::<_, Venda>(
            r#"
            SELECT id, numero_nf, vendedor, valor_nf, data_emissao, data_entrega,
                   nome_orgao, cidade_destino, status_pagamento, data_pagamento
            FROM vendas
            WHERE ($1::text IS NULL OR vendedor = $1)
            ORDER BY data_entrega DESC
            "#,
        )
        .bind(vendedor)
        .fetch_all(&self.pool)
        .await?;

        Ok(vendas)
    }

    /// Notas fiscais já presentes na tabela, para o cálculo do que falta inserir.
    pub async fn listar_numeros_nf(&self) -> Result<Vec<String>, AppError> {
        let numeros = sqlx::query_scalar::<_, String>("SELECT numero_nf FROM vendas")
            .fetch_all(&self.pool)
            .await?;

        Ok(numeros)
    }

    /// Insere o lote inteiro em um único INSERT e devolve as linhas criadas.
    /// O chamador garante que o lote não é vazio.
    pub async fn inserir_lote(&self, novas: &[NovaVenda]) -> Result<Vec<Venda>, AppError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO vendas (numero_nf, vendedor, valor_nf, data_emissao, data_entrega, \
             nome_orgao, cidade_destino, status_pagamento, data_pagamento) ",
        );

        builder.push_values(novas, |mut linha, venda| {
            linha
                .push_bind(&venda.numero_nf)
                .push_bind(&venda.vendedor)
                .push_bind(venda.valor_nf)
                .push_bind(venda.data_emissao)
                .push_bind(venda.data_entrega)
                .push_bind(&venda.nome_orgao)
                .push_bind(&venda.cidade_destino)
                .push_bind(venda.status_pagamento)
                .push_bind(venda.data_pagamento);
        });

        builder.push(
            " RETURNING id, numero_nf, vendedor, valor_nf, data_emissao, data_entrega, \
             nome_orgao, cidade_destino, status_pagamento, data_pagamento",
        );

        let inseridas = builder
            .build_query_as::<Venda>()
            .fetch_all(&self.pool)
            .await?;

        Ok(inseridas)
    }

    /// Atualiza os dois campos de pagamento de uma venda.
    pub async fn atualizar_pagamento(
        &self,
        id: i64,
        pago: bool,
        data_pagamento: Option<NaiveDate>,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE vendas SET status_pagamento = $1, data_pagamento = $2 WHERE id = $3")
            .bind(pago)
            .bind(data_pagamento)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Contagem simples, usada pelo health check como prova de conectividade.
    pub async fn contar(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vendas")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
