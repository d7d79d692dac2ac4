// src/models/sessao.rs

use serde::{Deserialize, Serialize};

/// Sessão confirmada pelo portal. Vive só durante a requisição,
/// dentro das extensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sessao {
    pub username: String,
}

// --- Payloads do portal (verify-session) ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PedidoVerificacao {
    pub session_token: String,
}

#[derive(Debug, Deserialize)]
pub struct RespostaVerificacao {
    pub valid: bool,
    pub session: Option<Sessao>,
    pub message: Option<String>,
}
