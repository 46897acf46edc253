use std::sync::Arc;

use advisory_core::{
    clients::{ClientRepositoryTrait, ClientService, ClientServiceTrait},
    financials::{FinancialReportService, FinancialReportServiceTrait},
};
use advisory_storage_memory::{demo_clients, ClientRepository, SnapshotFile};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub client_service: Arc<dyn ClientServiceTrait>,
    pub report_service: Arc<dyn FinancialReportServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("ADV_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let repository = match &config.data_file {
        Some(path) => {
            tracing::info!("Client data file in use: {}", path.display());
            ClientRepository::with_snapshot(SnapshotFile::new(path))?
        }
        None => {
            tracing::info!("No data file configured, clients are kept in memory only");
            ClientRepository::new()
        }
    };

    if config.seed_demo_data {
        let seeded = repository.seed_if_empty(demo_clients()).await?;
        if seeded > 0 {
            tracing::info!("Seeded {} demo clients", seeded);
        }
    }

    let client_repository: Arc<dyn ClientRepositoryTrait> = Arc::new(repository);
    let client_service = Arc::new(ClientService::new(client_repository.clone()));
    let report_service = Arc::new(FinancialReportService::new(client_repository));

    Ok(Arc::new(AppState {
        client_service,
        report_service,
    }))
}
