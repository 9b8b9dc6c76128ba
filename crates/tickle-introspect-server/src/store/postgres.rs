//! PostgreSQL implementation of [`RecordStore`] over the tickle repo tables

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use super::{RecordStore, StoreError, StoreResult};
use crate::config::DatabaseConfig;
use crate::models::{DataSet, DataSetSummary, Record};

/// Open the connection pool to the tickle repo database
pub async fn create_pool(config: &DatabaseConfig) -> StoreResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Tickle repo connection pool created"
    );

    Ok(pool)
}

#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RecordRow {
    id: i32,
    dataset: i32,
    localid: String,
    trackingid: Option<String>,
    status: String,
    checksum: Option<String>,
    content: Option<Vec<u8>>,
    timeofcreation: DateTime<Utc>,
    timeoflastmodification: DateTime<Utc>,
    batch: i32,
}

impl TryFrom<RecordRow> for Record {
    type Error = StoreError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse()
            .map_err(|e| StoreError::Corrupt(format!("record {}: {}", row.id, e)))?;

        Ok(Record {
            id: row.id,
            dataset: row.dataset,
            local_id: row.localid,
            tracking_id: row.trackingid,
            status,
            checksum: row.checksum,
            content: row.content.unwrap_or_default(),
            time_of_creation: row.timeofcreation,
            time_of_last_modification: row.timeoflastmodification,
            batch: row.batch,
        })
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    #[tracing::instrument(skip(self))]
    async fn lookup_dataset_by_name(&self, name: &str) -> StoreResult<Option<DataSet>> {
        let dataset = sqlx::query_as::<_, DataSet>(
            r#"
            SELECT id, name, agencyid, displayname
            FROM dataset
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(dataset)
    }

    #[tracing::instrument(skip(self))]
    async fn lookup_record(&self, dataset_id: i32, local_id: &str) -> StoreResult<Option<Record>> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, dataset, localid, trackingid, status, checksum, content,
                   timeofcreation, timeoflastmodification, batch
            FROM record
            WHERE dataset = $1 AND localid = $2
            "#,
        )
        .bind(dataset_id)
        .bind(local_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Record::try_from).transpose()
    }

    #[tracing::instrument(skip(self))]
    async fn datasets_by_local_id(&self, local_id: &str) -> StoreResult<Vec<DataSet>> {
        let datasets = sqlx::query_as::<_, DataSet>(
            r#"
            SELECT d.id, d.name, d.agencyid, d.displayname
            FROM dataset d
            WHERE EXISTS (
                SELECT 1 FROM record r WHERE r.dataset = d.id AND r.localid = $1
            )
            ORDER BY d.id
            "#,
        )
        .bind(local_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(datasets)
    }

    #[tracing::instrument(skip(self))]
    async fn dataset_summaries(&self) -> StoreResult<Vec<DataSetSummary>> {
        let summaries = sqlx::query_as::<_, DataSetSummary>(
            r#"
            SELECT d.id, d.name, d.displayname,
                   COUNT(r.id) AS sum,
                   COUNT(r.id) FILTER (WHERE r.status = 'ACTIVE') AS active,
                   COUNT(r.id) FILTER (WHERE r.status = 'DELETED') AS deleted,
                   COUNT(r.id) FILTER (WHERE r.status = 'RESET') AS reset,
                   MAX(r.timeoflastmodification) AS timeoflastmodification,
                   MAX(r.batch) AS batchid
            FROM dataset d
            LEFT JOIN record r ON r.dataset = d.id
            GROUP BY d.id, d.name, d.displayname
            ORDER BY d.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }
}
