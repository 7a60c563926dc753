//! User-submitted scam reports

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ScanError};

/// A scam posting reported by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScamReport {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Where the posting was seen
    pub link: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub has_attachment: bool,
}

/// Fields a user supplies when reporting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewScamReport {
    pub link: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub details: String,
    pub has_attachment: bool,
}

impl ScamReport {
    /// Build a report; the link is required
    pub fn new(submission: NewScamReport) -> Result<Self> {
        let link = submission.link.trim();
        if link.is_empty() {
            return Err(ScanError::InvalidInput(
                "a link to the scam posting is required".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            link: link.to_string(),
            contact_email: submission.contact_email.trim().to_string(),
            contact_phone: submission.contact_phone.trim().to_string(),
            details: submission.details.trim().to_string(),
            has_attachment: submission.has_attachment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_required() {
        let err = ScamReport::new(NewScamReport {
            link: "   ".to_string(),
            details: "asked for a deposit".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let report = ScamReport::new(NewScamReport {
            link: " https://jobs.example.xyz/1 ".to_string(),
            contact_phone: " +91 98765 43210 ".to_string(),
            has_attachment: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(report.link, "https://jobs.example.xyz/1");
        assert_eq!(report.contact_phone, "+91 98765 43210");
        assert!(report.contact_email.is_empty());
        assert!(report.has_attachment);
    }
}
