pub mod vendas_repo;
pub use vendas_repo::VendasRepository;
pub mod frete_repo;
pub use frete_repo::FreteRepository;
pub mod contas_repo;
pub use contas_repo::ContasRepository;
