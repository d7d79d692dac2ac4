// src/models/frete.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Status que marca uma entrega como concluída na planilha de frete.
pub const STATUS_ENTREGUE: &str = "ENTREGUE";

/// Registro da tabela `"controle frete"`, alimentada pela equipe de logística.
/// A tabela não é nossa: o status fica como texto livre.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Entrega {
    pub id: i64,

    #[schema(example = "100")]
    pub numero_nf: String,

    pub documento: Option<String>,

    #[schema(example = "ISAQUE")]
    pub vendedor: String,

    #[schema(example = "15000.50")]
    pub valor_nf: Decimal,

    #[schema(example = "850.00")]
    pub valor_frete: Decimal,

    pub data_emissao: NaiveDate,

    pub data_coleta: Option<NaiveDate>,

    pub previsao_entrega: NaiveDate,

    #[schema(example = "PREFEITURA DE CAMPO GRANDE")]
    pub nome_orgao: String,

    pub contato_orgao: Option<String>,

    #[schema(example = "CAMPO GRANDE")]
    pub cidade_destino: String,

    #[schema(example = "JADLOG")]
    pub transportadora: String,

    #[schema(example = "ENTREGUE")]
    pub status: String,
}
