//! Data models for the marketplace backend
//!
//! Field names on the wire follow the casing of the public API
//! (`firstName`, `ClientId`, `paymentDate`, ...), while the columns in the
//! database are snake_case.

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};

/// Profile model, either a client or a contractor
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub profession: String,
    pub balance: f64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub profile_type: ProfileType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn is_client(&self) -> bool {
        self.profile_type == ProfileType::Client
    }
}

/// Profile kinds
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ProfileType {
    Client,
    Contractor,
}

/// Contract binding one client and one contractor
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq)]
pub struct Contract {
    pub id: i64,
    pub terms: String,
    pub status: ContractStatus,
    #[serde(rename = "ClientId")]
    pub client_id: i64,
    #[serde(rename = "ContractorId")]
    pub contractor_id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// Whether the profile is either side of this contract
    pub fn involves(&self, profile_id: i64) -> bool {
        self.client_id == profile_id || self.contractor_id == profile_id
    }
}

/// Contract lifecycle status
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ContractStatus {
    New,
    InProgress,
    Terminated,
}

/// Contract together with both participants
#[derive(Debug, Serialize, Clone)]
pub struct ContractDetails {
    #[serde(flatten)]
    pub contract: Contract,
    #[serde(rename = "Client")]
    pub client: Profile,
    #[serde(rename = "Contractor")]
    pub contractor: Profile,
}

/// Billable unit of work under a contract
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq)]
pub struct Job {
    pub id: i64,
    pub description: String,
    pub price: f64,
    pub paid: Option<bool>,
    #[serde(rename = "paymentDate")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(rename = "ContractId")]
    pub contract_id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
