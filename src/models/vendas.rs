// src/models/vendas.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- Structs ---

/// Venda consolidada na tabela `vendas`. Existe no máximo uma por nota fiscal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Venda {
    pub id: i64,

    #[schema(example = "100")]
    pub numero_nf: String,

    #[schema(example = "ISAQUE")]
    pub vendedor: String,

    #[schema(example = "15000.50")]
    pub valor_nf: Decimal,

    pub data_emissao: NaiveDate,

    pub data_entrega: NaiveDate,

    #[schema(example = "PREFEITURA DE CAMPO GRANDE")]
    pub nome_orgao: String,

    #[schema(example = "CAMPO GRANDE")]
    pub cidade_destino: String,

    pub status_pagamento: bool,

    pub data_pagamento: Option<NaiveDate>,
}

/// Venda ainda não persistida, montada a partir de uma entrega concluída.
#[derive(Debug, Clone, PartialEq)]
pub struct NovaVenda {
    pub numero_nf: String,
    pub vendedor: String,
    pub valor_nf: Decimal,
    pub data_emissao: NaiveDate,
    pub data_entrega: NaiveDate,
    pub nome_orgao: String,
    pub cidade_destino: String,
    pub status_pagamento: bool,
    pub data_pagamento: Option<NaiveDate>,
}
