//! Transport objects and the conversions between them and the domain models
//!
//! Everything here is pure data shaping. JSON field names are camelCase.

pub mod content;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    AddiMetaData, DataSet, DataSetSummary, HarvestRequest, HarvesterConfig, Record, RecordStatus,
};

// ============================================================================
// Records and datasets
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDto {
    pub id: i32,
    pub dataset: i32,
    pub local_id: String,
    pub tracking_id: Option<String>,
    pub status: RecordStatus,
    pub checksum: Option<String>,
    pub time_of_creation: DateTime<Utc>,
    pub time_of_last_modification: DateTime<Utc>,
    pub batch: i32,
    /// Raw content decoded as UTF-8
    pub content: String,
    /// Indented XML, empty when the content is not XML
    pub content_xml: String,
    /// MARC line format, empty when the content is not MarcXchange
    pub content_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetDto {
    pub id: i32,
    pub name: String,
    pub agency_id: i32,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSetListDto {
    pub datasets: Vec<DataSetDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetSummaryDto {
    pub id: i32,
    pub name: String,
    pub display_name: Option<String>,
    pub sum: i64,
    pub active: i64,
    pub deleted: i64,
    pub reset: i64,
    pub time_of_last_modification: Option<DateTime<Utc>>,
    pub batch_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetSummaryListDto {
    pub data_sets: Vec<DataSetSummaryDto>,
}

pub fn record_to_dto(record: Record) -> RecordDto {
    let content = String::from_utf8_lossy(&record.content).into_owned();
    let content_xml = content::indent_xml(&content).unwrap_or_default();
    let content_line = content::marc_line_format(&content).unwrap_or_default();

    RecordDto {
        id: record.id,
        dataset: record.dataset,
        local_id: record.local_id,
        tracking_id: record.tracking_id,
        status: record.status,
        checksum: record.checksum,
        time_of_creation: record.time_of_creation,
        time_of_last_modification: record.time_of_last_modification,
        batch: record.batch,
        content,
        content_xml,
        content_line,
    }
}

impl From<DataSet> for DataSetDto {
    fn from(dataset: DataSet) -> Self {
        Self {
            id: dataset.id,
            name: dataset.name,
            agency_id: dataset.agency_id,
            display_name: dataset.display_name,
        }
    }
}

impl From<DataSetSummary> for DataSetSummaryDto {
    fn from(summary: DataSetSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            display_name: summary.display_name,
            sum: summary.sum,
            active: summary.active,
            deleted: summary.deleted,
            reset: summary.reset,
            time_of_last_modification: summary.time_of_last_modification,
            batch_id: summary.batch_id,
        }
    }
}

pub fn datasets_to_dto(datasets: Vec<DataSet>) -> DataSetListDto {
    DataSetListDto {
        datasets: datasets.into_iter().map(DataSetDto::from).collect(),
    }
}

pub fn summaries_to_dto(summaries: Vec<DataSetSummary>) -> DataSetSummaryListDto {
    DataSetSummaryListDto {
        data_sets: summaries.into_iter().map(DataSetSummaryDto::from).collect(),
    }
}

// ============================================================================
// Harvesters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvesterConfigDto {
    pub id: i64,
    pub version: i64,
    pub name: String,
    pub description: Option<String>,
    pub dataset: Option<String>,
    pub destination: Option<String>,
    pub format: Option<String>,
    #[serde(rename = "type")]
    pub harvest_type: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvesterConfigListDto {
    pub harvesters: Vec<HarvesterConfigDto>,
}

impl From<HarvesterConfig> for HarvesterConfigDto {
    fn from(config: HarvesterConfig) -> Self {
        let content = config.content;
        Self {
            id: config.id,
            version: config.version,
            name: content.id,
            description: content.description,
            dataset: content.dataset_name,
            destination: content.destination,
            format: content.format,
            harvest_type: content.harvest_type,
            enabled: content.enabled,
        }
    }
}

pub fn harvesters_to_dto(configs: Vec<HarvesterConfig>) -> Vec<HarvesterConfigDto> {
    configs.into_iter().map(HarvesterConfigDto::from).collect()
}

/// One item of a harvest request batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestRequestDto {
    #[serde(rename = "harvesterId", alias = "harvesterid")]
    pub harvester_id: i64,
    #[serde(default)]
    pub records: Vec<String>,
}

/// Request body of `POST harvesters/request`: a bare list or `{"requests": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HarvestRequestListDto {
    List(Vec<HarvestRequestDto>),
    Wrapped { requests: Vec<HarvestRequestDto> },
}

impl HarvestRequestListDto {
    pub fn into_requests(self) -> Vec<HarvestRequestDto> {
        match self {
            HarvestRequestListDto::List(requests) => requests,
            HarvestRequestListDto::Wrapped { requests } => requests,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarvestRequestDtoError {
    #[error("Harvest request for harvester {0} contains no records")]
    NoRecords(i64),

    #[error("Invalid record reference '{reference}': {reason}")]
    InvalidRecord {
        reference: String,
        reason: &'static str,
    },
}

/// Parse `<submitter>:<bibliographicRecordId>`
///
/// The submitter is the leading agency number, so both `870970:1234` and the dataset form
/// `125320-m21:00003196` are accepted. Splits on the first `:` only.
pub fn parse_record_reference(reference: &str) -> Result<AddiMetaData, HarvestRequestDtoError> {
    let invalid = |reason| HarvestRequestDtoError::InvalidRecord {
        reference: reference.to_string(),
        reason,
    };

    let (submitter, record_id) = reference
        .trim()
        .split_once(':')
        .ok_or_else(|| invalid("expected <submitter>:<record id>"))?;

    if record_id.is_empty() {
        return Err(invalid("record id is empty"));
    }

    let agency = submitter.split('-').next().unwrap_or_default();
    let submitter_number = agency
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| invalid("submitter must start with an agency number"))?;

    Ok(AddiMetaData {
        submitter_number,
        bibliographic_record_id: record_id.to_string(),
    })
}

pub fn harvest_request_from_dto(
    dto: &HarvestRequestDto,
) -> Result<HarvestRequest, HarvestRequestDtoError> {
    if dto.records.is_empty() {
        return Err(HarvestRequestDtoError::NoRecords(dto.harvester_id));
    }

    let records = dto
        .records
        .iter()
        .map(|reference| parse_record_reference(reference))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HarvestRequest::Records { records })
}
