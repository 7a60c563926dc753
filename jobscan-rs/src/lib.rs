//! jobscan-rs: job posting scam risk engine
//!
//! Scores a job posting from 0 to 100 by combining keyword and structural
//! analysis of its text with live checks of the company, the recruiter email
//! domain and the posting URL.
//!
//! # Features
//!
//! - **Text analysis**: fixed-order keyword, salary and structural rules
//! - **Live verification**: DNS and HEAD probes, each under its own timeout
//! - **Aggregation**: 50-point text budget plus 50-point company budget,
//!   banded LOW / MEDIUM / HIGH
//! - **Persistence**: JSON history, last-result snapshot and scam reports
//!
//! # Example
//!
//! ```no_run
//! use jobscan_rs::config::AppConfig;
//! use jobscan_rs::engine::{AssessmentRequest, Assessor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let assessor = Assessor::from_config(&config)?;
//!
//!     let request = AssessmentRequest::new("URGENT HIRING!!!! Pay a registration fee")
//!         .with_email("recruiter@gmail.com");
//!     let record = assessor.assess(request).await?;
//!     println!("{} ({})", record.assessment.score, record.assessment.band);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`corpus`]: keyword lists and fixed term tables
//! - [`analyzer`]: text signal analysis
//! - [`probe`]: company, email and URL verification
//! - [`scoring`]: score aggregation and risk bands
//! - [`engine`]: end-to-end assessment
//! - [`storage`]: JSON persistence
//! - [`report`]: text export, explanations and highlighting

pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod extract;
pub mod logging;
pub mod probe;
pub mod report;
pub mod scoring;
pub mod storage;

// Re-export commonly used types
pub use analyzer::TextSignalAnalyzer;
pub use config::AppConfig;
pub use engine::{AssessmentRecord, AssessmentRequest, Assessor};
pub use error::{Result, ScanError};
pub use probe::VerificationProbe;
pub use scoring::{RiskAssessment, RiskBand, ScoreAggregator};
