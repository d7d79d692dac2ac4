// src/services/vendas_service.rs

use crate::{
    common::error::AppError,
    db::{ContasRepository, FreteRepository, VendasRepository},
    models::{ContaReceber, Entrega, Venda},
};

use super::Escopo;

/// Consultas das três telas, sempre passando pelo escopo do usuário.
/// Escopo vazio (vendedor pedindo outro vendedor) devolve `[]` sem
/// tocar o banco.
#[derive(Clone)]
pub struct VendasService {
    vendas_repo: VendasRepository,
    frete_repo: FreteRepository,
    contas_repo: ContasRepository,
}

impl VendasService {
    pub fn new(
        vendas_repo: VendasRepository,
        frete_repo: FreteRepository,
        contas_repo: ContasRepository,
    ) -> Self {
        Self {
            vendas_repo,
            frete_repo,
            contas_repo,
        }
    }

    pub async fn listar_vendas(
        &self,
        username: &str,
        vendedor: Option<&str>,
    ) -> Result<Vec<Venda>, AppError> {
        match Escopo::para_usuario(username).com_filtro(vendedor) {
            Some(escopo) => self.vendas_repo.listar(escopo.filtro()).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn listar_entregas(
        &self,
        username: &str,
        vendedor: Option<&str>,
    ) -> Result<Vec<Entrega>, AppError> {
        match Escopo::para_usuario(username).com_filtro(vendedor) {
            Some(escopo) => self.frete_repo.listar(escopo.filtro()).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn listar_liquidadas(
        &self,
        username: &str,
        vendedor: Option<&str>,
    ) -> Result<Vec<ContaReceber>, AppError> {
        match Escopo::para_usuario(username).com_filtro(vendedor) {
            Some(escopo) => self.contas_repo.listar(escopo.filtro()).await,
            None => Ok(Vec::new()),
        }
    }

    /// Prova de vida do banco, usada pelo health check.
    pub async fn contar_vendas(&self) -> Result<i64, AppError> {
        self.vendas_repo.contar().await
    }
}
