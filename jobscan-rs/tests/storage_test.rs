//! Persistence tests against a temporary data directory

mod common;

use common::{FakeProber, FakeResolver};
use jobscan_rs::config::{AppConfig, StorageConfig};
use jobscan_rs::engine::{AssessmentRequest, Assessor};
use jobscan_rs::report;
use jobscan_rs::storage::{NewScamReport, ScamReport, Stores};
use std::sync::Arc;
use tempfile::TempDir;

fn storage_in(dir: &TempDir) -> StorageConfig {
    StorageConfig {
        data_dir: dir.path().join("data"),
        ..StorageConfig::default()
    }
}

#[tokio::test]
async fn test_history_and_last_result() {
    let dir = TempDir::new().unwrap();
    let stores = Stores::from_config(&storage_in(&dir));
    let assessor = Assessor::with_probe(
        &AppConfig::default(),
        common::probe(Arc::new(FakeResolver::default()), Arc::new(FakeProber::refusing())),
    );

    assert!(stores.history.load().await.is_empty());
    assert!(stores.last_result.load().await.is_none());

    let first = assessor
        .assess(AssessmentRequest::new("Pay a registration fee"))
        .await
        .unwrap();
    let second = assessor
        .assess(AssessmentRequest::new("Join today on WhatsApp"))
        .await
        .unwrap();
    stores.record(&first).await.unwrap();
    stores.record(&second).await.unwrap();

    let history = stores.history.load().await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], first);
    assert_eq!(history[1], second);
    assert_eq!(stores.last_result.load().await, Some(second.clone()));

    // A fresh handle reads the same files
    let reopened = Stores::from_config(&storage_in(&dir));
    assert_eq!(reopened.history.load().await.len(), 2);

    let export = report::render_text(&second);
    assert!(export.contains("Join today on WhatsApp"));
}

#[tokio::test]
async fn test_corrupt_history_does_not_block_new_records() {
    let dir = TempDir::new().unwrap();
    let config = storage_in(&dir);
    std::fs::create_dir_all(&config.data_dir).unwrap();
    std::fs::write(config.history_path(), "[{\"truncated\": ").unwrap();
    std::fs::write(config.last_result_path(), "not json").unwrap();

    let stores = Stores::from_config(&config);
    assert!(stores.history.load().await.is_empty());
    assert!(stores.last_result.load().await.is_none());

    let assessor = Assessor::with_probe(
        &AppConfig::default(),
        common::probe(Arc::new(FakeResolver::default()), Arc::new(FakeProber::refusing())),
    );
    let record = assessor
        .assess(AssessmentRequest::new("Join today"))
        .await
        .unwrap();
    stores.record(&record).await.unwrap();

    assert_eq!(stores.history.load().await, vec![record]);
}

#[tokio::test]
async fn test_scam_reports_append() {
    let dir = TempDir::new().unwrap();
    let stores = Stores::from_config(&storage_in(&dir));

    let report = ScamReport::new(NewScamReport {
        link: "https://jobs-now.xyz/apply".to_string(),
        contact_email: "hr@jobs-now.xyz".to_string(),
        details: "Asked for a refundable deposit".to_string(),
        ..Default::default()
    })
    .unwrap();
    stores.reports.append(report.clone()).await.unwrap();

    let reports = stores.reports.load().await;
    assert_eq!(reports, vec![report]);
    assert!(stores.history.load().await.is_empty());
}
