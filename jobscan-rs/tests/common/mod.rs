//! In-process network fakes shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use jobscan_rs::probe::{HttpProber, NameResolver, ProbeFailure, ProbeTimeouts, VerificationProbe};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Resolves only the hosts it was given
#[derive(Default)]
pub struct FakeResolver {
    known: Vec<String>,
    delay: Option<Duration>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeResolver {
    pub fn knowing(hosts: &[&str]) -> Self {
        Self {
            known: hosts.iter().map(|h| h.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Every lookup sleeps before answering
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    /// Delay every lookup, known hosts included
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NameResolver for FakeResolver {
    async fn resolve(&self, host: &str) -> Result<(), ProbeFailure> {
        self.calls.lock().unwrap().push(host.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.known.iter().any(|h| h == host) {
            Ok(())
        } else {
            Err(ProbeFailure::NotFound)
        }
    }
}

/// Answers HEAD requests from a fixed status table; unknown URLs are refused
#[derive(Default)]
pub struct FakeProber {
    statuses: HashMap<String, u16>,
    fallback: Option<u16>,
    delay: Option<Duration>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeProber {
    pub fn with_statuses(statuses: &[(&str, u16)]) -> Self {
        Self {
            statuses: statuses
                .iter()
                .map(|(url, status)| (url.to_string(), *status))
                .collect(),
            ..Default::default()
        }
    }

    /// Every URL answers with `status`
    pub fn answering(status: u16) -> Self {
        Self {
            fallback: Some(status),
            ..Default::default()
        }
    }

    /// Nothing answers
    pub fn refusing() -> Self {
        Self::default()
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            fallback: Some(200),
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpProber for FakeProber {
    async fn head(&self, url: &str, _timeout: Duration) -> Result<u16, ProbeFailure> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.statuses
            .get(url)
            .copied()
            .or(self.fallback)
            .ok_or_else(|| ProbeFailure::Connect("connection refused".to_string()))
    }
}

pub fn short_timeouts() -> ProbeTimeouts {
    ProbeTimeouts {
        dns: Duration::from_millis(50),
        http: Duration::from_millis(50),
    }
}

pub fn probe(resolver: Arc<FakeResolver>, prober: Arc<FakeProber>) -> VerificationProbe {
    VerificationProbe::new(resolver, prober, short_timeouts())
}

/// Professional posting with qualifications and none of the corpus phrases
pub fn professional_posting() -> String {
    const PARAGRAPH: &str = "Acme Robotics is hiring a mechanical design engineer to join our \
        product team in Pune. You will design gearbox assemblies, review drawings with \
        suppliers, and support prototype testing in our lab. Candidates need a bachelor \
        degree in mechanical engineering and three years of experience in CAD modelling. \
        We offer a competitive salary, health insurance, and a hybrid schedule.";
    [PARAGRAPH; 4].join(" ")
}
