//! Network seams used by the verification probe
//!
//! The probe only talks to the network through [`NameResolver`] and
//! [`HttpProber`], so tests can swap in deterministic fakes.

use std::error::Error as _;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::ResolveErrorKind;
use trust_dns_resolver::TokioAsyncResolver;

use crate::config::ProbeConfig;
use crate::error::{Result, ScanError};

/// Why a single network attempt failed. Logged, never propagated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    #[error("name not found")]
    NotFound,
    #[error("timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("TLS failure: {0}")]
    Tls(String),
    #[error("{0}")]
    Other(String),
}

/// Resolves host names
#[async_trait::async_trait]
pub trait NameResolver: Send + Sync {
    /// Succeeds when `host` resolves to at least one address
    async fn resolve(&self, host: &str) -> std::result::Result<(), ProbeFailure>;
}

/// Issues lightweight reachability requests
#[async_trait::async_trait]
pub trait HttpProber: Send + Sync {
    /// Send a HEAD request and return the response status code
    async fn head(&self, url: &str, timeout: Duration) -> std::result::Result<u16, ProbeFailure>;
}

/// DNS resolver backed by trust-dns
pub struct DnsResolver {
    resolver: TokioAsyncResolver,
}

impl DnsResolver {
    /// Create a resolver whose single attempt is bounded by `timeout`
    pub fn new(timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;

        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

#[async_trait::async_trait]
impl NameResolver for DnsResolver {
    async fn resolve(&self, host: &str) -> std::result::Result<(), ProbeFailure> {
        let lookup = self.resolver.lookup_ip(host).await.map_err(|e| match e.kind() {
            ResolveErrorKind::NoRecordsFound { .. } => ProbeFailure::NotFound,
            ResolveErrorKind::Timeout => ProbeFailure::Timeout,
            _ => ProbeFailure::Other(e.to_string()),
        })?;

        if lookup.iter().next().is_some() {
            debug!("{} resolved", host);
            Ok(())
        } else {
            Err(ProbeFailure::NotFound)
        }
    }
}

/// HTTP prober backed by reqwest
///
/// Certificate validation is relaxed: the probe asks "does something answer
/// here", not "is the certificate trustworthy".
pub struct ReqwestProber {
    client: reqwest::Client,
}

impl ReqwestProber {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| ScanError::Http(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ProbeConfig) -> Result<Self> {
        Self::new(&config.user_agent, config.http_timeout())
    }
}

#[async_trait::async_trait]
impl HttpProber for ReqwestProber {
    async fn head(&self, url: &str, timeout: Duration) -> std::result::Result<u16, ProbeFailure> {
        let response = self
            .client
            .head(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(classify)?;

        Ok(response.status().as_u16())
    }
}

fn classify(err: reqwest::Error) -> ProbeFailure {
    if err.is_timeout() {
        return ProbeFailure::Timeout;
    }

    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        detail = inner.to_string();
        source = inner.source();
    }

    if detail.to_lowercase().contains("certificate") || detail.to_lowercase().contains("tls") {
        ProbeFailure::Tls(detail)
    } else if err.is_connect() {
        ProbeFailure::Connect(detail)
    } else {
        ProbeFailure::Other(detail)
    }
}
