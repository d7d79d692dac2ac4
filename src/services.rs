pub mod escopo;
pub use escopo::Escopo;
pub mod portal;
pub use portal::PortalClient;
pub mod sync_service;
pub use sync_service::SyncService;
pub mod vendas_service;
pub use vendas_service::VendasService;
