//! Clientes HTTP hacia los microservicios de MediSupply

pub mod backend_client;

pub use backend_client::BackendClient;
