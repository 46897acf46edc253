//! Client domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::financials::FinancialRecord;
use crate::{Error, Result};

/// Relationship status of a client with the practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Prospect,
    Inactive,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Prospect => "prospect",
            ClientStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for ClientStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ClientStatus::Active),
            "prospect" => Ok(ClientStatus::Prospect),
            "inactive" => Ok(ClientStatus::Inactive),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown client status: {}",
                other
            )))),
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing a client of the practice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: ClientStatus,
    pub notes: Option<String>,
    /// Financial data, once the client has been given some
    pub financial_data: Option<FinancialRecord>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Client {
    /// Case-insensitive match against name and email.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self
                .email
                .as_deref()
                .is_some_and(|email| email.to_lowercase().contains(&needle))
    }
}

/// Input model for creating a new client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub status: ClientStatus,
    pub notes: Option<String>,
    #[serde(default)]
    pub financial_data: Option<FinancialRecord>,
}

impl NewClient {
    /// Validates the new client data.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_email(self.email.as_deref())
    }
}

/// Input model for updating an existing client's details.
///
/// Financial data is saved separately, see
/// [`ClientServiceTrait::save_financial_record`](super::ClientServiceTrait::save_financial_record).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: ClientStatus,
    pub notes: Option<String>,
}

impl ClientUpdate {
    /// Validates the client update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_deref().unwrap_or_default().trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_name(&self.name)?;
        validate_email(self.email.as_deref())
    }
}

/// Filters for listing clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFilter {
    pub status: Option<ClientStatus>,
    pub search: Option<String>,
}

impl ClientFilter {
    pub fn matches(&self, client: &Client) -> bool {
        if let Some(status) = self.status {
            if client.status != status {
                return false;
            }
        }
        match self.search.as_deref() {
            Some(needle) => client.matches_search(needle),
            None => true,
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Client name cannot be empty".to_string(),
        )));
    }
    Ok(())
}

fn validate_email(email: Option<&str>) -> Result<()> {
    match email.map(str::trim) {
        Some(e) if !e.is_empty() && !e.contains('@') => Err(Error::Validation(
            ValidationError::InvalidInput(format!("Invalid email address: {}", e)),
        )),
        _ => Ok(()),
    }
}
