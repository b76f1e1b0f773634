use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::visualization::application::domain::entities::VisualizationRecord;
use crate::visualization::application::ports::outgoing::{
    VisualizationRepository, VisualizationRepositoryError, VisualizationUpsert,
};

/// A locally stored chart saved at a fixed instant.
pub fn sample_visualization(visualization_id: &str, report_type: &str) -> VisualizationRecord {
    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    VisualizationRecord {
        id: Uuid::new_v4(),
        visualization_id: visualization_id.to_string(),
        report_type: report_type.to_string(),
        image_url: format!("/reports/{report_type}_{visualization_id}.png"),
        image_public_id: None,
        created_at,
        updated_at: Some(created_at),
    }
}

/// Keyed on `(visualization_id, report_type)` like the table's unique index.
#[derive(Clone, Default)]
pub struct InMemoryVisualizationRepository {
    records: Arc<Mutex<Vec<VisualizationRecord>>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryVisualizationRepository {
    pub fn with_records(records: Vec<VisualizationRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            ..Default::default()
        }
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn snapshot(&self) -> Vec<VisualizationRecord> {
        self.records.lock().unwrap().clone()
    }

    fn read_error(&self) -> Option<VisualizationRepositoryError> {
        self.fail_reads
            .then(|| VisualizationRepositoryError::DatabaseError("read failed".into()))
    }
}

#[async_trait]
impl VisualizationRepository for InMemoryVisualizationRepository {
    async fn find_by_key(
        &self,
        visualization_id: &str,
        report_type: &str,
    ) -> Result<Option<VisualizationRecord>, VisualizationRepositoryError> {
        if let Some(e) = self.read_error() {
            return Err(e);
        }
        Ok(self
            .snapshot()
            .into_iter()
            .find(|r| r.visualization_id == visualization_id && r.report_type == report_type))
    }

    async fn upsert(
        &self,
        data: VisualizationUpsert,
    ) -> Result<VisualizationRecord, VisualizationRepositoryError> {
        if self.fail_writes {
            return Err(VisualizationRepositoryError::DatabaseError("write failed".into()));
        }

        let now = Utc::now();
        let mut records = self.records.lock().unwrap();
        let existing = records.iter_mut().find(|r| {
            r.visualization_id == data.visualization_id && r.report_type == data.report_type
        });

        let record = match existing {
            Some(record) => {
                record.image_url = data.image_url;
                record.image_public_id = data.image_public_id;
                record.updated_at = Some(now);
                record.clone()
            }
            None => {
                let record = VisualizationRecord {
                    id: Uuid::new_v4(),
                    visualization_id: data.visualization_id,
                    report_type: data.report_type,
                    image_url: data.image_url,
                    image_public_id: data.image_public_id,
                    created_at: now,
                    updated_at: Some(now),
                };
                records.push(record.clone());
                record
            }
        };
        Ok(record)
    }

    async fn list(
        &self,
        report_type: Option<&str>,
    ) -> Result<Vec<VisualizationRecord>, VisualizationRepositoryError> {
        if let Some(e) = self.read_error() {
            return Err(e);
        }
        let mut records: Vec<_> = self
            .snapshot()
            .into_iter()
            .filter(|r| report_type.is_none_or(|t| r.report_type == t))
            .collect();
        records.sort_by(|a, b| {
            b.updated_at
                .is_some()
                .cmp(&a.updated_at.is_some())
                .then_with(|| b.updated_at.cmp(&a.updated_at))
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(records)
    }
}
