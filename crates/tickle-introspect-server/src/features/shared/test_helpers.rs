//! In-memory collaborators for handler and route tests

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Mutex;

use crate::connectors::{ConnectorError, ConnectorResult, HarvestTaskService, HarvesterConfigStore};
use crate::models::{
    DataSet, DataSetSummary, HarvestRequest, HarvesterConfig, HarvesterConfigContent, Record,
    RecordStatus,
};
use crate::store::{RecordStore, StoreError, StoreResult};

pub fn sample_dataset(id: i32, name: &str) -> DataSet {
    DataSet {
        id,
        name: name.to_string(),
        agency_id: name
            .split('-')
            .next()
            .and_then(|agency| agency.parse().ok())
            .unwrap_or(0),
        display_name: Some(format!("Display {name}")),
    }
}

pub fn sample_record(id: i32, dataset: i32, local_id: &str, content: &str) -> Record {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    Record {
        id,
        dataset,
        local_id: local_id.to_string(),
        tracking_id: Some(format!("track-{id}")),
        status: RecordStatus::Active,
        checksum: Some(format!("sum-{id}")),
        content: content.as_bytes().to_vec(),
        time_of_creation: created,
        time_of_last_modification: created,
        batch: 1,
    }
}

pub fn sample_harvester(id: i64, name: &str) -> HarvesterConfig {
    HarvesterConfig {
        id,
        version: 1,
        config_type: None,
        content: HarvesterConfigContent {
            id: name.to_string(),
            enabled: true,
            ..Default::default()
        },
    }
}

fn unavailable() -> StoreError {
    StoreError::Corrupt("store unavailable".to_string())
}

/// Record store backed by vectors, in insertion order
#[derive(Default)]
pub struct InMemoryRecordStore {
    datasets: Vec<DataSet>,
    records: Vec<Record>,
    failing: bool,
}

impl InMemoryRecordStore {
    /// A store whose every call fails
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn with_dataset(mut self, dataset: DataSet) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing {
            Err(unavailable())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn lookup_dataset_by_name(&self, name: &str) -> StoreResult<Option<DataSet>> {
        self.check()?;
        Ok(self.datasets.iter().find(|d| d.name == name).cloned())
    }

    async fn lookup_record(&self, dataset_id: i32, local_id: &str) -> StoreResult<Option<Record>> {
        self.check()?;
        Ok(self
            .records
            .iter()
            .find(|r| r.dataset == dataset_id && r.local_id == local_id)
            .cloned())
    }

    async fn datasets_by_local_id(&self, local_id: &str) -> StoreResult<Vec<DataSet>> {
        self.check()?;
        Ok(self
            .datasets
            .iter()
            .filter(|d| {
                self.records
                    .iter()
                    .any(|r| r.dataset == d.id && r.local_id == local_id)
            })
            .cloned()
            .collect())
    }

    async fn dataset_summaries(&self) -> StoreResult<Vec<DataSetSummary>> {
        self.check()?;
        Ok(self
            .datasets
            .iter()
            .map(|d| {
                let records: Vec<&Record> =
                    self.records.iter().filter(|r| r.dataset == d.id).collect();
                let count = |status| records.iter().filter(|r| r.status == status).count() as i64;
                DataSetSummary {
                    id: d.id,
                    name: d.name.clone(),
                    display_name: d.display_name.clone(),
                    sum: records.len() as i64,
                    active: count(RecordStatus::Active),
                    deleted: count(RecordStatus::Deleted),
                    reset: count(RecordStatus::Reset),
                    time_of_last_modification: records
                        .iter()
                        .map(|r| r.time_of_last_modification)
                        .max(),
                    batch_id: records.iter().map(|r| r.batch).max(),
                }
            })
            .collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }
}

/// Flow store stand-in returning a fixed answer
pub struct StaticConfigStore {
    configs: Vec<HarvesterConfig>,
    failure: Option<String>,
    requested_types: Mutex<Vec<String>>,
}

impl StaticConfigStore {
    pub fn new(configs: Vec<HarvesterConfig>) -> Self {
        Self {
            configs,
            failure: None,
            requested_types: Mutex::new(Vec::new()),
        }
    }

    /// Answer every call with a non-2xx status carrying `message`
    pub fn failing(message: &str) -> Self {
        Self {
            configs: Vec::new(),
            failure: Some(message.to_string()),
            requested_types: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_types(&self) -> Vec<String> {
        self.requested_types.lock().unwrap().clone()
    }
}

#[async_trait]
impl HarvesterConfigStore for StaticConfigStore {
    async fn harvester_configs_by_type(
        &self,
        config_type: &str,
    ) -> ConnectorResult<Vec<HarvesterConfig>> {
        self.requested_types
            .lock()
            .unwrap()
            .push(config_type.to_string());

        match &self.failure {
            Some(message) => Err(ConnectorError::Status {
                service: "flow store",
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: message.clone(),
            }),
            None => Ok(self.configs.clone()),
        }
    }
}

/// Task service stand-in that records submissions and can fail on the n-th call (1-indexed)
#[derive(Default)]
pub struct RecordingTaskService {
    submitted: Mutex<Vec<(i64, HarvestRequest)>>,
    fail_on_call: Option<usize>,
    calls: Mutex<usize>,
}

impl RecordingTaskService {
    pub fn failing_on_call(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Default::default()
        }
    }

    pub fn submitted(&self) -> Vec<(i64, HarvestRequest)> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl HarvestTaskService for RecordingTaskService {
    async fn create_harvest_task(
        &self,
        harvester_id: i64,
        request: &HarvestRequest,
    ) -> ConnectorResult<()> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };

        if self.fail_on_call == Some(call) {
            return Err(ConnectorError::Status {
                service: "tickle harvester",
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: format!("harvester {harvester_id} unavailable"),
            });
        }

        self.submitted
            .lock()
            .unwrap()
            .push((harvester_id, request.clone()));
        Ok(())
    }
}
