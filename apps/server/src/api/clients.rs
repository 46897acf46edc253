use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use advisory_core::clients::{Client, ClientFilter, ClientStatus, ClientUpdate, NewClient};
use advisory_core::financials::FinancialRecord;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct ListClientsQuery {
    status: Option<String>,
    search: Option<String>,
}

impl ListClientsQuery {
    fn into_filter(self) -> ApiResult<ClientFilter> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<ClientStatus>()?),
        };
        Ok(ClientFilter {
            status,
            search: self.search.filter(|s| !s.trim().is_empty()),
        })
    }
}

async fn list_clients(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListClientsQuery>,
) -> ApiResult<Json<Vec<Client>>> {
    let filter = query.into_filter()?;
    let clients = state.client_service.list_clients(&filter)?;
    Ok(Json(clients))
}

async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewClient>,
) -> ApiResult<(StatusCode, Json<Client>)> {
    let created = state.client_service.create_client(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_client(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Client>> {
    let client = state.client_service.get_client(&id)?;
    Ok(Json(client))
}

async fn update_client(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<ClientUpdate>,
) -> ApiResult<Json<Client>> {
    if let Some(body_id) = payload.id.as_deref() {
        if body_id != id {
            return Err(ApiError::BadRequest(format!(
                "Client id in body ({}) does not match path ({})",
                body_id, id
            )));
        }
    }
    payload.id = Some(id);
    let updated = state.client_service.update_client(payload).await?;
    Ok(Json(updated))
}

async fn delete_client(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.client_service.delete_client(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn save_financials(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(record): Json<FinancialRecord>,
) -> ApiResult<Json<Client>> {
    let client = state
        .client_service
        .save_financial_record(&id, record)
        .await?;
    Ok(Json(client))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route(
            "/clients/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route("/clients/{id}/financials", put(save_financials))
}
