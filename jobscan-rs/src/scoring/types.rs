//! Risk assessment types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse risk classification derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Upper bound (inclusive) of the low band
    pub const LOW_MAX: u32 = 30;
    /// Upper bound (inclusive) of the medium band
    pub const MEDIUM_MAX: u32 = 60;

    pub fn from_score(score: u32) -> Self {
        if score <= Self::LOW_MAX {
            RiskBand::Low
        } else if score <= Self::MEDIUM_MAX {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Medium => "Medium Risk",
            RiskBand::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskBand::Low => "LOW",
            RiskBand::Medium => "MEDIUM",
            RiskBand::High => "HIGH",
        };
        f.write_str(name)
    }
}

/// Outcome of company verification as seen by the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    Verified,
    Partial,
    NotFound,
    Missing,
    Unknown,
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompanyStatus::Verified => "verified",
            CompanyStatus::Partial => "partial",
            CompanyStatus::NotFound => "not_found",
            CompanyStatus::Missing => "missing",
            CompanyStatus::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// How the final score was composed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Unscaled sum of text rule weights
    pub raw_text_score: u32,
    /// Text half after scaling and adjustments
    pub text_score: u32,
    /// Company half
    pub company_score: u32,
}

/// Final, immutable risk assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk score in [0, 100]
    pub score: u32,
    pub band: RiskBand,
    /// Text-derived red flags, in emission order
    pub signals: Vec<String>,
    /// Verification notes, in emission order
    pub verifications: Vec<String>,
    pub company_status: CompanyStatus,
    pub breakdown: ScoreBreakdown,
}
