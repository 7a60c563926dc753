//! Assessment engine
//!
//! Runs the analyzer, the three verifications and the aggregator for one
//! request. Verifications run concurrently under a shared deadline; one that
//! misses it is replaced by its negative outcome so a slow remote party never
//! blocks the assessment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analyzer::TextSignalAnalyzer;
use crate::config::AppConfig;
use crate::error::{Result, ScanError};
use crate::extract::Extraction;
use crate::probe::email::email_domain;
use crate::probe::url::parse_domain;
use crate::probe::{CompanyCheck, EmailCheck, UrlCheck, UrlFlag, VerificationProbe, Verifications};
use crate::scoring::{RiskAssessment, ScoreAggregator};

/// Inputs of one assessment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentRequest {
    /// Posting text (required, non-blank after extraction is appended)
    pub text: String,
    /// Recruiter email address
    pub email: String,
    /// Company name
    pub company: String,
    /// Posting URL
    pub url: String,
}

impl AssessmentRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// A stored assessment: inputs, result and metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Inputs as assessed, with any extracted text already appended
    pub input: AssessmentRequest,
    pub assessment: RiskAssessment,
    /// Why attachment text did not contribute, when one was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_note: Option<String>,
}

/// Orchestrates analyzer, probe and aggregator
#[derive(Clone)]
pub struct Assessor {
    analyzer: TextSignalAnalyzer,
    probe: VerificationProbe,
    aggregator: ScoreAggregator,
    deadline: Duration,
}

impl Assessor {
    pub fn new(
        analyzer: TextSignalAnalyzer,
        probe: VerificationProbe,
        aggregator: ScoreAggregator,
        deadline: Duration,
    ) -> Self {
        Self {
            analyzer,
            probe,
            aggregator,
            deadline,
        }
    }

    /// Assessor wired to the live network
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_probe(config, VerificationProbe::live(&config.probe)?))
    }

    /// Assessor using the configured weights and the given probe
    pub fn with_probe(config: &AppConfig, probe: VerificationProbe) -> Self {
        Self::new(
            TextSignalAnalyzer::new(config.scoring.rules.clone()),
            probe,
            ScoreAggregator::new(config.scoring.clone()),
            config.probe.deadline(),
        )
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub async fn assess(&self, request: AssessmentRequest) -> Result<AssessmentRecord> {
        self.assess_with_extraction(request, None).await
    }

    /// Assess a request, appending attachment text when extraction produced any
    pub async fn assess_with_extraction(
        &self,
        mut request: AssessmentRequest,
        extraction: Option<Extraction>,
    ) -> Result<AssessmentRecord> {
        let extraction_note = extraction.as_ref().and_then(Extraction::note);
        if let Some(extra) = extraction.as_ref().and_then(Extraction::text) {
            request.text = if request.text.trim().is_empty() {
                extra.to_string()
            } else {
                format!("{}\n\n{}", request.text, extra)
            };
        }

        if request.text.trim().is_empty() {
            return Err(ScanError::InvalidInput(
                "job description text is required".to_string(),
            ));
        }

        let analysis = self
            .analyzer
            .analyze(&request.text, &request.email, &request.company);
        let verifications = self.verify(&request).await;
        let assessment = self.aggregator.aggregate(
            &analysis,
            &request.company,
            &request.email,
            &verifications,
        );

        info!(
            "Assessment complete: score={} band={} signals={}",
            assessment.score,
            assessment.band,
            assessment.signals.len()
        );

        Ok(AssessmentRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            input: request,
            assessment,
            extraction_note,
        })
    }

    /// Run the applicable verifications concurrently
    async fn verify(&self, request: &AssessmentRequest) -> Verifications {
        let company = request.company.trim();
        let email = request.email.trim();
        let url = request.url.trim();

        let company_check = async {
            if company.is_empty() {
                return None;
            }
            Some(
                self.bounded("company", self.probe.verify_company(company), || {
                    CompanyCheck::not_found(
                        "",
                        format!("Verification of '{}' timed out", company),
                    )
                })
                .await,
            )
        };

        let email_check = async {
            if !email.contains('@') {
                return None;
            }
            Some(
                self.bounded("email", self.probe.verify_email(email), || EmailCheck {
                    domain: email_domain(email).unwrap_or_default(),
                    ..Default::default()
                })
                .await,
            )
        };

        let url_check = async {
            if url.is_empty() {
                return None;
            }
            Some(
                self.bounded("url", self.probe.verify_url(url), || {
                    UrlCheck::new(
                        parse_domain(url).unwrap_or_default(),
                        false,
                        vec![UrlFlag::Unreachable],
                    )
                })
                .await,
            )
        };

        let (company, email, url) = tokio::join!(company_check, email_check, url_check);
        Verifications {
            company,
            email,
            url,
        }
    }

    async fn bounded<T, F>(&self, what: &str, check: F, on_timeout: impl FnOnce() -> T) -> T
    where
        F: Future<Output = T>,
    {
        match tokio::time::timeout(self.deadline, check).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    "{} verification exceeded the {:?} deadline",
                    what, self.deadline
                );
                on_timeout()
            }
        }
    }
}
