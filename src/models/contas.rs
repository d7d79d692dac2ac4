// src/models/contas.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Status que marca um título como quitado no contas a receber.
pub const STATUS_PAGO: &str = "PAGO";

/// Título da tabela `"contas receber"`, mantida pelo financeiro.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContaReceber {
    pub id: i64,

    #[schema(example = "100")]
    pub numero_nf: String,

    #[schema(example = "ISAQUE")]
    pub vendedor: String,

    #[schema(example = "PREFEITURA DE CAMPO GRANDE")]
    pub orgao: String,

    #[schema(example = "SICREDI")]
    pub banco: String,

    #[schema(example = "VENDA")]
    pub tipo_nf: String,

    #[schema(example = "15000.50")]
    pub valor: Decimal,

    pub data_emissao: NaiveDate,

    pub data_vencimento: NaiveDate,

    pub data_pagamento: Option<NaiveDate>,

    #[schema(example = "PAGO")]
    pub status: String,

    pub observacoes: Option<String>,
}

/// Projeção usada pela sincronização: só o que importa para casar pagamento.
#[derive(Debug, Clone, FromRow)]
pub struct PagamentoConta {
    pub numero_nf: String,
    pub status: String,
    pub data_pagamento: Option<NaiveDate>,
}

impl PagamentoConta {
    pub fn pago(&self) -> bool {
        self.status == STATUS_PAGO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conta(status: &str) -> PagamentoConta {
        PagamentoConta {
            numero_nf: "100".to_string(),
            status: status.to_string(),
            data_pagamento: None,
        }
    }

    #[test]
    fn pago_exige_status_exato() {
        assert!(conta("PAGO").pago());
        assert!(!conta("pago").pago());
        assert!(!conta("PENDENTE").pago());
        assert!(!conta("").pago());
    }
}
