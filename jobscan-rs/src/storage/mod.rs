//! Persistence
//!
//! - Assessment history: append-only list
//! - Last result: single snapshot, overwritten per run
//! - Scam reports: append-only list

mod json;
mod scam_report;

pub use json::{JsonListStore, JsonSnapshotStore};
pub use scam_report::{NewScamReport, ScamReport};

use crate::config::StorageConfig;
use crate::engine::AssessmentRecord;
use crate::error::Result;

/// Every store used by the CLI and the HTTP service
#[derive(Clone)]
pub struct Stores {
    pub history: JsonListStore<AssessmentRecord>,
    pub last_result: JsonSnapshotStore<AssessmentRecord>,
    pub reports: JsonListStore<ScamReport>,
}

impl Stores {
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            history: JsonListStore::new(config.history_path()),
            last_result: JsonSnapshotStore::new(config.last_result_path()),
            reports: JsonListStore::new(config.reports_path()),
        }
    }

    /// Append to history and replace the last-result snapshot
    pub async fn record(&self, record: &AssessmentRecord) -> Result<()> {
        self.history.append(record.clone()).await?;
        self.last_result.save(record).await
    }
}
