//! Client repository and service traits.
//!
//! These traits define the contract for client operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::clients_model::{Client, ClientFilter, ClientUpdate, NewClient};
use crate::errors::Result;
use crate::financials::FinancialRecord;

/// Trait defining the contract for Client repository operations.
///
/// Implementations own the keyed collection of clients. Unknown ids are
/// reported as `DatabaseError::NotFound`.
#[async_trait]
pub trait ClientRepositoryTrait: Send + Sync {
    /// Creates a new client. A missing id is generated.
    async fn create(&self, new_client: NewClient) -> Result<Client>;

    /// Updates an existing client's details, keeping its financial data.
    async fn update(&self, client_update: ClientUpdate) -> Result<Client>;

    /// Replaces the client's financial record wholesale.
    async fn save_financial_record(
        &self,
        client_id: &str,
        record: FinancialRecord,
    ) -> Result<Client>;

    /// Deletes a client (and with it, its financial record).
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, client_id: &str) -> Result<usize>;

    /// Retrieves a client by its ID.
    fn get_by_id(&self, client_id: &str) -> Result<Client>;

    /// Lists clients matching the filter.
    fn list(&self, filter: &ClientFilter) -> Result<Vec<Client>>;
}

/// Trait defining the contract for Client service operations.
#[async_trait]
pub trait ClientServiceTrait: Send + Sync {
    /// Creates a new client with validation.
    async fn create_client(&self, new_client: NewClient) -> Result<Client>;

    /// Updates an existing client with validation.
    async fn update_client(&self, client_update: ClientUpdate) -> Result<Client>;

    /// Saves the full financial record for a client.
    async fn save_financial_record(
        &self,
        client_id: &str,
        record: FinancialRecord,
    ) -> Result<Client>;

    /// Deletes a client.
    async fn delete_client(&self, client_id: &str) -> Result<()>;

    /// Retrieves a client by ID.
    fn get_client(&self, client_id: &str) -> Result<Client>;

    /// Lists clients with optional filters.
    fn list_clients(&self, filter: &ClientFilter) -> Result<Vec<Client>>;
}
