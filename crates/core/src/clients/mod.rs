//! Clients module - domain models, services, and traits.

mod clients_model;
mod clients_service;
mod clients_traits;

pub use clients_model::{Client, ClientFilter, ClientStatus, ClientUpdate, NewClient};
pub use clients_service::ClientService;
pub use clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
