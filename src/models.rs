pub mod contas;
pub mod frete;
pub mod sessao;
pub mod vendas;

pub use contas::{ContaReceber, PagamentoConta};
pub use frete::Entrega;
pub use sessao::Sessao;
pub use vendas::{NovaVenda, Venda};
