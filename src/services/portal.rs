// src/services/portal.rs

use std::time::Duration;

use crate::common::error::AppError;
use crate::models::sessao::{PedidoVerificacao, RespostaVerificacao, Sessao};

const MOTIVO_EXPIRADA: &str = "Sua sessão expirou";

/// Cliente do portal de autenticação (verify-session).
#[derive(Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Confirma o token junto ao portal. Toda requisição protegida passa por
    /// aqui; não há cache de sessão.
    pub async fn verificar_sessao(&self, token: &str) -> Result<Sessao, AppError> {
        let resposta = self
            .http
            .post(format!("{}/api/verify-session", self.base_url))
            .json(&PedidoVerificacao {
                session_token: token.to_string(),
            })
            .send()
            .await?;

        if !resposta.status().is_success() {
            return Err(AppError::SessaoInvalida {
                motivo: MOTIVO_EXPIRADA.to_string(),
            });
        }

        let dados = resposta.json::<RespostaVerificacao>().await?;

        if !dados.valid {
            return Err(AppError::SessaoInvalida {
                motivo: dados.message.unwrap_or_else(|| MOTIVO_EXPIRADA.to_string()),
            });
        }

        // `valid` sem objeto de sessão conta como sessão inválida.
        dados.session.ok_or_else(|| AppError::SessaoInvalida {
            motivo: MOTIVO_EXPIRADA.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    use super::*;

    async fn portal_fake(status: StatusCode, corpo: Value) -> String {
        let app = Router::new().route(
            "/api/verify-session",
            post(move || async move { (status, Json(corpo)) }),
        );

        servir(app).await
    }

    async fn servir(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endereco = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{endereco}")
    }

    #[tokio::test]
    async fn sessao_valida_devolve_o_usuario() {
        let base = portal_fake(
            StatusCode::OK,
            json!({"valid": true, "session": {"username": "vendas"}}),
        )
        .await;

        let portal = PortalClient::new(base).unwrap();
        let sessao = portal.verificar_sessao("tok-1").await.unwrap();

        assert_eq!(sessao.username, "vendas");
    }

    #[tokio::test]
    async fn envia_o_token_no_campo_session_token() {
        let recebido: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let espiao = recebido.clone();

        let app = Router::new().route(
            "/api/verify-session",
            post(move |Json(corpo): Json<Value>| async move {
                *espiao.lock().unwrap() = Some(corpo);
                Json(json!({"valid": true, "session": {"username": "vendas"}}))
            }),
        );

        let portal = PortalClient::new(servir(app).await).unwrap();
        portal.verificar_sessao("tok-42").await.unwrap();

        let corpo = recebido.lock().unwrap().take().unwrap();
        assert_eq!(corpo["sessionToken"], "tok-42");
    }

    #[tokio::test]
    async fn sessao_recusada_usa_a_mensagem_do_portal() {
        let base = portal_fake(
            StatusCode::OK,
            json!({"valid": false, "message": "Sessão encerrada em outro dispositivo"}),
        )
        .await;

        let portal = PortalClient::new(base).unwrap();
        let erro = portal.verificar_sessao("tok-1").await.unwrap_err();

        match erro {
            AppError::SessaoInvalida { motivo } => {
                assert_eq!(motivo, "Sessão encerrada em outro dispositivo")
            }
            outro => panic!("esperava SessaoInvalida, veio {outro:?}"),
        }
    }

    #[tokio::test]
    async fn sessao_recusada_sem_mensagem_usa_o_motivo_padrao() {
        let base = portal_fake(StatusCode::OK, json!({"valid": false})).await;

        let portal = PortalClient::new(base).unwrap();
        let erro = portal.verificar_sessao("tok-1").await.unwrap_err();

        match erro {
            AppError::SessaoInvalida { motivo } => assert_eq!(motivo, MOTIVO_EXPIRADA),
            outro => panic!("esperava SessaoInvalida, veio {outro:?}"),
        }
    }

    #[tokio::test]
    async fn resposta_nao_2xx_conta_como_sessao_invalida() {
        let base = portal_fake(StatusCode::UNAUTHORIZED, json!({"error": "x"})).await;

        let portal = PortalClient::new(base).unwrap();
        let erro = portal.verificar_sessao("tok-1").await.unwrap_err();

        assert!(matches!(erro, AppError::SessaoInvalida { .. }));
    }

    #[tokio::test]
    async fn valida_sem_objeto_de_sessao_conta_como_invalida() {
        let base = portal_fake(StatusCode::OK, json!({"valid": true})).await;

        let portal = PortalClient::new(base).unwrap();
        let erro = portal.verificar_sessao("tok-1").await.unwrap_err();

        assert!(matches!(erro, AppError::SessaoInvalida { .. }));
    }

    #[tokio::test]
    async fn corpo_ilegivel_vira_erro_de_portal() {
        let app = Router::new().route(
            "/api/verify-session",
            post(|| async { "isso não é json" }),
        );

        let portal = PortalClient::new(servir(app).await).unwrap();
        let erro = portal.verificar_sessao("tok-1").await.unwrap_err();

        assert!(matches!(erro, AppError::Portal(_)));
    }

    #[tokio::test]
    async fn portal_inacessivel_vira_erro_de_portal() {
        let portal = PortalClient::new("http://127.0.0.1:9".to_string()).unwrap();
        let erro = portal.verificar_sessao("tok-1").await.unwrap_err();

        assert!(matches!(erro, AppError::Portal(_)));
    }
}
