// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{ContasRepository, FreteRepository, VendasRepository},
    services::{PortalClient, SyncService, VendasService},
};

/// Portal de autenticação usado quando PORTAL_URL não está definida.
pub const PORTAL_URL_PADRAO: &str = "https://ir-comercio-portal-zcan.onrender.com";

#[derive(Clone)]
pub struct AppState {
    pub portal: PortalClient,
    pub vendas_service: VendasService,
    pub sync_service: SyncService,
}

impl AppState {
    // .expect() nas variáveis: sem configuração a aplicação não deve subir.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let portal_url = env::var("PORTAL_URL").unwrap_or_else(|_| PORTAL_URL_PADRAO.to_string());

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
        tracing::info!("🌐 Portal URL: {}", portal_url);

        Self::montar(db_pool, portal_url)
    }

    /// Monta os repositórios e serviços a partir de um pool já criado.
    /// Os testes entram por aqui, com um pool lazy e um portal local.
    pub fn montar(db_pool: PgPool, portal_url: String) -> anyhow::Result<Self> {
        let portal = PortalClient::new(portal_url)?;

        // --- Monta o gráfico de dependências ---
        let vendas_repo = VendasRepository::new(db_pool.clone());
        let frete_repo = FreteRepository::new(db_pool.clone());
        let contas_repo = ContasRepository::new(db_pool);

        let vendas_service = VendasService::new(
            vendas_repo.clone(),
            frete_repo.clone(),
            contas_repo.clone(),
        );
        let sync_service = SyncService::new(frete_repo, contas_repo, vendas_repo);

        Ok(Self {
            portal,
            vendas_service,
            sync_service,
        })
    }
}
