use advisory_core::clients::{Client, ClientFilter, ClientRepositoryTrait, ClientUpdate, NewClient};
use advisory_core::errors::{DatabaseError, Error, Result, ValidationError};
use advisory_core::financials::FinancialRecord;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::StorageError;
use crate::snapshot::SnapshotFile;

type ClientMap = HashMap<String, Client>;

/// Client store backed by a map, optionally mirrored to a snapshot file.
///
/// Writers are serialized. Each write is applied to a copy of the map, the
/// snapshot (if any) is saved on the blocking pool, and only then is the copy
/// swapped in, so a failed save leaves the store unchanged. Readers never
/// wait on file I/O.
pub struct ClientRepository {
    clients: RwLock<ClientMap>,
    writer: Mutex<()>,
    snapshot: Option<SnapshotFile>,
}

impl Default for ClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientRepository {
    pub fn new() -> Self {
        ClientRepository {
            clients: RwLock::new(HashMap::new()),
            writer: Mutex::new(()),
            snapshot: None,
        }
    }

    /// Creates a store mirrored to `snapshot`, loading any clients it holds.
    pub fn with_snapshot(snapshot: SnapshotFile) -> Result<Self> {
        let records: Vec<Client> = snapshot.load()?;
        info!(
            "Loaded {} clients from {}",
            records.len(),
            snapshot.path().display()
        );
        let clients = records
            .into_iter()
            .map(|client| (client.id.clone(), client))
            .collect();
        Ok(ClientRepository {
            clients: RwLock::new(clients),
            writer: Mutex::new(()),
            snapshot: Some(snapshot),
        })
    }

    /// Inserts the given clients when the store is empty.
    ///
    /// Returns the number of clients inserted.
    pub async fn seed_if_empty(&self, clients: Vec<NewClient>) -> Result<usize> {
        if !self.current()?.is_empty() {
            return Ok(0);
        }
        self.mutate(|map| {
            let now = Utc::now().naive_utc();
            let mut inserted = 0;
            for new_client in clients {
                let client = build_client(new_client, now);
                if map.insert(client.id.clone(), client).is_none() {
                    inserted += 1;
                }
            }
            Ok(inserted)
        })
        .await
    }

    async fn mutate<R, F>(&self, apply: F) -> Result<R>
    where
        F: FnOnce(&mut ClientMap) -> Result<R> + Send,
        R: Send,
    {
        let _writer = self.writer.lock().await;
        let mut next = self.current()?;
        let result = apply(&mut next)?;
        self.persist(&next).await?;
        self.commit(next)?;
        Ok(result)
    }

    fn current(&self) -> Result<ClientMap> {
        let clients = self.clients.read().map_err(poisoned)?;
        Ok(clients.clone())
    }

    fn commit(&self, next: ClientMap) -> Result<()> {
        let mut clients = self.clients.write().map_err(poisoned)?;
        *clients = next;
        Ok(())
    }

    async fn persist(&self, clients: &ClientMap) -> Result<()> {
        let Some(snapshot) = self.snapshot.clone() else {
            return Ok(());
        };
        let records: Vec<Client> = sorted(clients.values()).into_iter().cloned().collect();
        let count = records.len();
        let path = snapshot.path().display().to_string();

        tokio::task::spawn_blocking(move || snapshot.save(&records))
            .await
            .map_err(|e| StorageError::Task(e.to_string()))??;
        debug!("Wrote {} clients to {}", count, path);
        Ok(())
    }
}

#[async_trait]
impl ClientRepositoryTrait for ClientRepository {
    async fn create(&self, new_client: NewClient) -> Result<Client> {
        self.mutate(|map| {
            let client = build_client(new_client, Utc::now().naive_utc());
            if map.contains_key(&client.id) {
                return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                    "Client {} already exists",
                    client.id
                ))));
            }
            map.insert(client.id.clone(), client.clone());
            Ok(client)
        })
        .await
    }

    async fn update(&self, client_update: ClientUpdate) -> Result<Client> {
        let client_id = client_update
            .id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::Validation(ValidationError::MissingField("id".to_string())))?;

        self.mutate(|map| {
            let client = map.get_mut(&client_id).ok_or_else(|| not_found(&client_id))?;
            client.name = client_update.name;
            client.email = client_update.email;
            client.phone = client_update.phone;
            client.status = client_update.status;
            client.notes = client_update.notes;
            client.updated_at = Utc::now().naive_utc();
            Ok(client.clone())
        })
        .await
    }

    async fn save_financial_record(
        &self,
        client_id: &str,
        record: FinancialRecord,
    ) -> Result<Client> {
        self.mutate(|map| {
            let client = map.get_mut(client_id).ok_or_else(|| not_found(client_id))?;
            client.financial_data = Some(record);
            client.updated_at = Utc::now().naive_utc();
            Ok(client.clone())
        })
        .await
    }

    async fn delete(&self, client_id: &str) -> Result<usize> {
        self.mutate(|map| match map.remove(client_id) {
            Some(_) => Ok(1),
            None => Err(not_found(client_id)),
        })
        .await
    }

    fn get_by_id(&self, client_id: &str) -> Result<Client> {
        self.clients
            .read()
            .map_err(poisoned)?
            .get(client_id)
            .cloned()
            .ok_or_else(|| not_found(client_id))
    }

    fn list(&self, filter: &ClientFilter) -> Result<Vec<Client>> {
        let clients = self.clients.read().map_err(poisoned)?;
        Ok(sorted(clients.values().filter(|c| filter.matches(c)))
            .into_iter()
            .cloned()
            .collect())
    }
}

fn build_client(new_client: NewClient, now: chrono::NaiveDateTime) -> Client {
    let id = new_client
        .id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    Client {
        id,
        name: new_client.name.trim().to_string(),
        email: new_client.email,
        phone: new_client.phone,
        status: new_client.status,
        notes: new_client.notes,
        financial_data: new_client.financial_data,
        created_at: now,
        updated_at: now,
    }
}

/// Orders clients by name (case-insensitive), then id.
fn sorted<'a>(clients: impl Iterator<Item = &'a Client>) -> Vec<&'a Client> {
    let mut clients: Vec<&Client> = clients.collect();
    clients.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
    clients
}

fn not_found(client_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!("Client {}", client_id)))
}

fn poisoned<T>(err: PoisonError<T>) -> StorageError {
    StorageError::LockPoisoned(err.to_string())
}
