use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::clients_model::{Client, ClientFilter, ClientUpdate, NewClient};
use super::clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
use crate::errors::Result;
use crate::financials::FinancialRecord;

/// Service for managing clients.
pub struct ClientService {
    repository: Arc<dyn ClientRepositoryTrait>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn ClientRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ClientServiceTrait for ClientService {
    async fn create_client(&self, new_client: NewClient) -> Result<Client> {
        new_client.validate()?;
        debug!("Creating client '{}'", new_client.name);
        self.repository.create(new_client).await
    }

    async fn update_client(&self, client_update: ClientUpdate) -> Result<Client> {
        client_update.validate()?;
        debug!("Updating client {:?}", client_update.id);
        self.repository.update(client_update).await
    }

    async fn save_financial_record(
        &self,
        client_id: &str,
        record: FinancialRecord,
    ) -> Result<Client> {
        debug!("Saving financial record for client {}", client_id);
        self.repository.save_financial_record(client_id, record).await
    }

    async fn delete_client(&self, client_id: &str) -> Result<()> {
        self.repository.delete(client_id).await?;
        Ok(())
    }

    fn get_client(&self, client_id: &str) -> Result<Client> {
        self.repository.get_by_id(client_id)
    }

    fn list_clients(&self, filter: &ClientFilter) -> Result<Vec<Client>> {
        self.repository.list(filter)
    }
}
