//! Verification outcome types

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Result of looking for a company's web presence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCheck {
    /// A candidate domain resolved
    pub found: bool,
    /// Last candidate domain attempted (empty when none was tried)
    pub domain_tried: String,
    /// The resolved domain answered over HTTP(S)
    pub website_live: bool,
    /// Human-readable summary
    pub detail: String,
}

impl CompanyCheck {
    pub fn not_found(domain_tried: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            found: false,
            domain_tried: domain_tried.into(),
            website_live: false,
            detail: detail.into(),
        }
    }
}

/// Result of checking a recruiter email's domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCheck {
    pub valid_domain: bool,
    pub is_free_provider: bool,
    pub domain: String,
}

/// A reason a posting URL looks unsafe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum UrlFlag {
    /// The input could not be parsed as a URL
    InvalidUrl,
    /// The URL parsed but carried no host
    MissingDomain,
    /// Domain ends with a denylisted top-level domain
    SuspiciousTld(String),
    /// Host is a dotted-quad IP address
    RawIpAddress,
    /// More than three label separators in the host
    ExcessiveSubdomains,
    /// Host answered with an error status
    ErrorStatus(u16),
    /// Neither scheme reached the host
    Unreachable,
    /// URL was given with plaintext http
    InsecureScheme,
}

impl UrlFlag {
    /// Hard failures raise the text score in the aggregator; the rest are advisory
    pub fn is_hard_failure(&self) -> bool {
        matches!(
            self,
            UrlFlag::InvalidUrl | UrlFlag::MissingDomain | UrlFlag::Unreachable
        )
    }
}

impl fmt::Display for UrlFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlFlag::InvalidUrl => write!(f, "Invalid URL format"),
            UrlFlag::MissingDomain => write!(f, "Could not parse domain from URL"),
            UrlFlag::SuspiciousTld(tld) => {
                write!(f, "Suspicious TLD: {} (commonly used in scam sites)", tld)
            }
            UrlFlag::RawIpAddress => write!(f, "URL uses raw IP address instead of domain name"),
            UrlFlag::ExcessiveSubdomains => {
                write!(f, "Excessive subdomains, a common phishing pattern")
            }
            UrlFlag::ErrorStatus(status) => write!(f, "Server returned status {}", status),
            UrlFlag::Unreachable => {
                write!(f, "URL is NOT reachable; website may be down or fake")
            }
            UrlFlag::InsecureScheme => write!(f, "URL uses HTTP instead of HTTPS (not secure)"),
        }
    }
}

/// Result of checking a posting URL
///
/// `safe` is derived from the reason list and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCheck {
    reachable: bool,
    domain: String,
    reasons: Vec<UrlFlag>,
}

impl UrlCheck {
    pub fn new(domain: impl Into<String>, reachable: bool, reasons: Vec<UrlFlag>) -> Self {
        Self {
            reachable,
            domain: domain.into(),
            reasons,
        }
    }

    pub fn reachable(&self) -> bool {
        self.reachable
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn reasons(&self) -> &[UrlFlag] {
        &self.reasons
    }

    pub fn safe(&self) -> bool {
        self.reasons.is_empty()
    }
}

impl Serialize for UrlCheck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let reasons: Vec<String> = self.reasons.iter().map(ToString::to_string).collect();
        let mut state = serializer.serialize_struct("UrlCheck", 4)?;
        state.serialize_field("reachable", &self.reachable)?;
        state.serialize_field("domain", &self.domain)?;
        state.serialize_field("reasons", &reasons)?;
        state.serialize_field("safe", &self.safe())?;
        state.end()
    }
}

/// Every verification outcome gathered for one assessment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Verifications {
    pub company: Option<CompanyCheck>,
    pub email: Option<EmailCheck>,
    pub url: Option<UrlCheck>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_is_derived() {
        assert!(UrlCheck::new("example.com", true, vec![]).safe());
        let check = UrlCheck::new("example.com", true, vec![UrlFlag::InsecureScheme]);
        assert!(!check.safe());
    }

    #[test]
    fn test_hard_failures() {
        assert!(UrlFlag::Unreachable.is_hard_failure());
        assert!(UrlFlag::InvalidUrl.is_hard_failure());
        assert!(!UrlFlag::RawIpAddress.is_hard_failure());
        assert!(!UrlFlag::ErrorStatus(404).is_hard_failure());
    }

    #[test]
    fn test_serialized_url_check_carries_safe() {
        let check = UrlCheck::new("1.2.3.4", false, vec![UrlFlag::RawIpAddress]);
        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(value["safe"], false);
        assert_eq!(
            value["reasons"][0],
            "URL uses raw IP address instead of domain name"
        );
    }
}
