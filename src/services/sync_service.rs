// src/services/sync_service.rs

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    db::{ContasRepository, FreteRepository, VendasRepository},
    models::{Entrega, NovaVenda, PagamentoConta, Venda},
};

/// Resultado da sincronização de entregas, na granularidade que a API expõe.
#[derive(Debug)]
pub enum ResultadoSyncEntregas {
    /// Nenhuma entrega concluída no controle de frete.
    SemEntregas,
    /// Há entregas concluídas, mas todas já viraram venda.
    JaSincronizadas,
    /// Vendas criadas neste ciclo, como saíram do banco.
    Inseridas(Vec<Venda>),
}

#[derive(Debug)]
pub enum ResultadoSyncPagamentos {
    /// Tabela de vendas vazia, nada a conferir.
    SemVendas,
    /// Ciclo completo: quantas vendas mudaram e quais NFs falharam.
    Concluido {
        atualizadas: usize,
        falhas: Vec<String>,
    },
}

/// Situação de pagamento de uma NF segundo o contas a receber.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SituacaoPagamento {
    pago: bool,
    data: Option<NaiveDate>,
}

/// Atualização pendente de uma venda cujo flag diverge do contas a receber.
#[derive(Debug, Clone, PartialEq)]
struct AtualizacaoPagamento {
    id: i64,
    numero_nf: String,
    pago: bool,
    data_pagamento: Option<NaiveDate>,
}

/// Indexa os títulos por NF. NFs repetidas: a última ocorrência vence.
fn indexar_pagamentos(contas: &[PagamentoConta]) -> HashMap<&str, SituacaoPagamento> {
    let mut indice = HashMap::with_capacity(contas.len());

    for conta in contas {
        indice.insert(
            conta.numero_nf.as_str(),
            SituacaoPagamento {
                pago: conta.pago(),
                data: conta.data_pagamento,
            },
        );
    }

    indice
}

/// Entregas concluídas que ainda não têm venda, sem repetir NF dentro do
/// próprio lote (a primeira ocorrência vence).
fn filtrar_nao_sincronizadas<'a>(
    entregues: &'a [Entrega],
    numeros_existentes: &[String],
) -> Vec<&'a Entrega> {
    let mut vistos: HashSet<&str> = numeros_existentes.iter().map(String::as_str).collect();

    entregues
        .iter()
        .filter(|entrega| vistos.insert(entrega.numero_nf.as_str()))
        .collect()
}

/// Monta as vendas a inserir, semeando o pagamento pelo contas a receber.
/// NF sem título entra como não paga e sem data.
fn montar_novas_vendas(
    entregas: &[&Entrega],
    pagamentos: &HashMap<&str, SituacaoPagamento>,
) -> Vec<NovaVenda> {
    entregas
        .iter()
        .map(|entrega| {
            let situacao = pagamentos.get(entrega.numero_nf.as_str());

            NovaVenda {
                numero_nf: entrega.numero_nf.clone(),
                vendedor: entrega.vendedor.clone(),
                valor_nf: entrega.valor_nf,
                data_emissao: entrega.data_emissao,
                data_entrega: entrega.previsao_entrega,
                nome_orgao: entrega.nome_orgao.clone(),
                cidade_destino: entrega.cidade_destino.clone(),
                status_pagamento: situacao.map(|s| s.pago).unwrap_or(false),
                data_pagamento: situacao.and_then(|s| s.data),
            }
        })
        .collect()
}

/// Vendas cujo flag de pagamento diverge do contas a receber, nas duas
/// direções. NF sem título e flag igual (mesmo com data diferente) ficam
/// de fora.
fn planejar_atualizacoes(
    vendas: &[Venda],
    pagamentos: &HashMap<&str, SituacaoPagamento>,
) -> Vec<AtualizacaoPagamento> {
    vendas
        .iter()
        .filter_map(|venda| {
            let situacao = pagamentos.get(venda.numero_nf.as_str())?;

            if venda.status_pagamento == situacao.pago {
                return None;
            }

            Some(AtualizacaoPagamento {
                id: venda.id,
                numero_nf: venda.numero_nf.clone(),
                pago: situacao.pago,
                data_pagamento: situacao.data,
            })
        })
        .collect()
}

/// Fecha a contagem do ciclo: sucesso soma em `atualizadas`, falha registra
/// a NF em `falhas` e fica fora da contagem.
fn contabilizar_atualizacoes(
    resultados: Vec<(String, Result<(), AppError>)>,
) -> (usize, Vec<String>) {
    let mut atualizadas = 0;
    let mut falhas = Vec::new();

    for (numero_nf, resultado) in resultados {
        match resultado {
            Ok(()) => atualizadas += 1,
            Err(erro) => {
                tracing::warn!("Falha ao atualizar pagamento da NF {}: {}", numero_nf, erro);
                falhas.push(numero_nf);
            }
        }
    }

    (atualizadas, falhas)
}

#[derive(Clone)]
pub struct SyncService {
    frete_repo: FreteRepository,
    contas_repo: ContasRepository,
    vendas_repo: VendasRepository,
}

impl SyncService {
    pub fn new(
        frete_repo: FreteRepository,
        contas_repo: ContasRepository,
        vendas_repo: VendasRepository,
    ) -> Self {
        Self {
            frete_repo,
            contas_repo,
            vendas_repo,
        }
    }

    /// Espelha as entregas concluídas do controle de frete em novas vendas.
    /// Nunca altera nem apaga vendas existentes.
    pub async fn sincronizar_entregas(&self) -> Result<ResultadoSyncEntregas, AppError> {
        tracing::info!("🔄 Sincronizando entregas do Controle de Frete...");

        let entregues = self.frete_repo.listar_entregues().await?;
        if entregues.is_empty() {
            return Ok(ResultadoSyncEntregas::SemEntregas);
        }
        tracing::info!("{} fretes entregues encontrados", entregues.len());

        let existentes = self.vendas_repo.listar_numeros_nf().await?;
        tracing::info!("{} notas já existem em vendas", existentes.len());

        let novas_entregas = filtrar_nao_sincronizadas(&entregues, &existentes);
        if novas_entregas.is_empty() {
            return Ok(ResultadoSyncEntregas::JaSincronizadas);
        }
        tracing::info!("{} novas entregas para sincronizar", novas_entregas.len());

        let contas = self.contas_repo.listar_pagamentos().await?;
        let pagamentos = indexar_pagamentos(&contas);
        let novas_vendas = montar_novas_vendas(&novas_entregas, &pagamentos);

        let inseridas = self.vendas_repo.inserir_lote(&novas_vendas).await?;
        tracing::info!("✅ {} novas vendas sincronizadas", inseridas.len());

        Ok(ResultadoSyncEntregas::Inseridas(inseridas))
    }

    /// Confere o flag de pagamento de cada venda contra o contas a receber
    /// e corrige as divergentes, uma a uma. Falha em uma NF não interrompe
    /// as demais: ela é registrada e devolvida na lista de falhas.
    pub async fn sincronizar_pagamentos(&self) -> Result<ResultadoSyncPagamentos, AppError> {
        tracing::info!("🔄 Sincronizando pagamentos do Contas a Receber...");

        let vendas = self.vendas_repo.listar(None).await?;
        if vendas.is_empty() {
            return Ok(ResultadoSyncPagamentos::SemVendas);
        }

        let contas = self.contas_repo.listar_pagamentos().await?;
        let pagamentos = indexar_pagamentos(&contas);
        let atualizacoes = planejar_atualizacoes(&vendas, &pagamentos);

        let mut resultados = Vec::with_capacity(atualizacoes.len());
        for atualizacao in atualizacoes {
            let resultado = self
                .vendas_repo
                .atualizar_pagamento(atualizacao.id, atualizacao.pago, atualizacao.data_pagamento)
                .await;
            resultados.push((atualizacao.numero_nf, resultado));
        }

        let (atualizadas, falhas) = contabilizar_atualizacoes(resultados);
        tracing::info!("✅ {} vendas atualizadas", atualizadas);

        Ok(ResultadoSyncPagamentos::Concluido { atualizadas, falhas })
    }
}
