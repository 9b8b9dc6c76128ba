//! Domain entities read from the tickle repo and the flow store
//!
//! These are read-only views: the service never creates or mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named grouping of records in the tickle repo
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DataSet {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "agencyid")]
    pub agency_id: i32,
    #[sqlx(rename = "displayname")]
    pub display_name: Option<String>,
}

/// Lifecycle state of a record as tracked by the repo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordStatus {
    Active,
    Deleted,
    Reset,
}

impl RecordStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Active => "ACTIVE",
            RecordStatus::Deleted => "DELETED",
            RecordStatus::Reset => "RESET",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown record status: {0}")]
pub struct UnknownRecordStatus(pub String);

impl FromStr for RecordStatus {
    type Err = UnknownRecordStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(RecordStatus::Active),
            "DELETED" => Ok(RecordStatus::Deleted),
            "RESET" => Ok(RecordStatus::Reset),
            _ => Err(UnknownRecordStatus(s.to_string())),
        }
    }
}

/// A record held by the tickle repo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i32,
    /// Id of the owning dataset
    pub dataset: i32,
    pub local_id: String,
    pub tracking_id: Option<String>,
    pub status: RecordStatus,
    pub checksum: Option<String>,
    pub content: Vec<u8>,
    pub time_of_creation: DateTime<Utc>,
    pub time_of_last_modification: DateTime<Utc>,
    pub batch: i32,
}

/// Aggregate record counts for one dataset, computed by the store per request
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DataSetSummary {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "displayname")]
    pub display_name: Option<String>,
    pub sum: i64,
    pub active: i64,
    pub deleted: i64,
    pub reset: i64,
    #[sqlx(rename = "timeoflastmodification")]
    pub time_of_last_modification: Option<DateTime<Utc>>,
    #[sqlx(rename = "batchid")]
    pub batch_id: Option<i32>,
}

/// Harvester configuration as stored in the flow store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvesterConfig {
    pub id: i64,
    pub version: i64,
    #[serde(default, rename = "type")]
    pub config_type: Option<String>,
    pub content: HarvesterConfigContent,
}

/// The harvester-specific part of a flow store config; unknown fields are ignored
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HarvesterConfigContent {
    /// The harvester's name
    pub id: String,
    pub description: Option<String>,
    pub dataset_name: Option<String>,
    pub destination: Option<String>,
    pub format: Option<String>,
    #[serde(rename = "type")]
    pub harvest_type: Option<String>,
    pub enabled: bool,
    pub notifications_enabled: bool,
}

/// Reference to one record in a harvest request, in the task service's shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddiMetaData {
    pub submitter_number: u32,
    pub bibliographic_record_id: String,
}

/// Harvest task submitted to the tickle harvester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HarvestRequest {
    #[serde(rename = "HarvestRecordsRequest")]
    Records { records: Vec<AddiMetaData> },
}

impl HarvestRequest {
    pub fn records(&self) -> &[AddiMetaData] {
        match self {
            HarvestRequest::Records { records } => records,
        }
    }
}
