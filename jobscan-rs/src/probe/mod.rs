//! Verification probe
//!
//! Confirms or refutes the real-world existence of a company, a recruiter
//! email domain and a posting URL. Every network attempt carries its own
//! timeout, and every failure (resolution, timeout, refused connection, TLS)
//! is collapsed into a negative outcome: the probe always returns a result.
//!
//! - [`company`]: candidate-domain search for a company name
//! - [`email`]: recruiter email domain check
//! - [`url`]: static and live posting URL checks
//! - [`network`]: DNS and HTTP seams with production implementations

pub mod company;
pub mod email;
pub mod network;
pub mod types;
pub mod url;

pub use network::{DnsResolver, HttpProber, NameResolver, ProbeFailure, ReqwestProber};
pub use types::{CompanyCheck, EmailCheck, UrlCheck, UrlFlag, Verifications};

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::ProbeConfig;
use crate::error::Result;

/// Per-attempt timeouts threaded through every network call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeTimeouts {
    pub dns: Duration,
    pub http: Duration,
}

impl Default for ProbeTimeouts {
    fn default() -> Self {
        Self {
            dns: Duration::from_secs(4),
            http: Duration::from_secs(6),
        }
    }
}

impl From<&ProbeConfig> for ProbeTimeouts {
    fn from(config: &ProbeConfig) -> Self {
        Self {
            dns: config.dns_timeout(),
            http: config.http_timeout(),
        }
    }
}

/// Network verification of company, email and URL
#[derive(Clone)]
pub struct VerificationProbe {
    resolver: Arc<dyn NameResolver>,
    http: Arc<dyn HttpProber>,
    timeouts: ProbeTimeouts,
}

impl VerificationProbe {
    pub fn new(
        resolver: Arc<dyn NameResolver>,
        http: Arc<dyn HttpProber>,
        timeouts: ProbeTimeouts,
    ) -> Self {
        Self {
            resolver,
            http,
            timeouts,
        }
    }

    /// Probe backed by the real DNS resolver and HTTP client
    pub fn live(config: &ProbeConfig) -> Result<Self> {
        let timeouts = ProbeTimeouts::from(config);
        Ok(Self::new(
            Arc::new(DnsResolver::new(timeouts.dns)),
            Arc::new(ReqwestProber::from_config(config)?),
            timeouts,
        ))
    }

    pub fn timeouts(&self) -> ProbeTimeouts {
        self.timeouts
    }

    /// Whether `host` resolves within the DNS timeout
    pub(crate) async fn resolves(&self, host: &str) -> bool {
        match tokio::time::timeout(self.timeouts.dns, self.resolver.resolve(host)).await {
            Ok(Ok(())) => true,
            Ok(Err(failure)) => {
                debug!("Resolution of {} failed: {}", host, failure);
                false
            }
            Err(_) => {
                debug!("Resolution of {} failed: {}", host, ProbeFailure::Timeout);
                false
            }
        }
    }

    /// Status code of a HEAD request, or None when nothing answered in time
    pub(crate) async fn head_status(&self, url: &str) -> Option<u16> {
        let attempt = self.http.head(url, self.timeouts.http);
        match tokio::time::timeout(self.timeouts.http, attempt).await {
            Ok(Ok(status)) => {
                debug!("HEAD {} -> {}", url, status);
                Some(status)
            }
            Ok(Err(failure)) => {
                debug!("HEAD {} failed: {}", url, failure);
                None
            }
            Err(_) => {
                debug!("HEAD {} failed: {}", url, ProbeFailure::Timeout);
                None
            }
        }
    }
}
