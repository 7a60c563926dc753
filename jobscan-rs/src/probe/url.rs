//! Posting URL safety checks
//!
//! Static red flags are evaluated from the domain alone; reachability is then
//! probed over https with an http fallback.

use std::net::Ipv4Addr;
use tracing::info;
use ::url::Url;

use super::company::SCHEMES;
use super::types::{UrlCheck, UrlFlag};
use super::VerificationProbe;
use crate::corpus::SUSPICIOUS_TLDS;

/// Hosts with more label separators than this look like phishing
const MAX_LABEL_SEPARATORS: usize = 3;

/// Extract the lowercase host of a URL; scheme-less input is read as a bare host
pub fn parse_domain(raw: &str) -> Result<String, UrlFlag> {
    let raw = raw.trim();
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    let parsed = Url::parse(&candidate).map_err(|_| UrlFlag::InvalidUrl)?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_lowercase()),
        _ => Err(UrlFlag::MissingDomain),
    }
}

/// Red flags that do not depend on network state
pub fn static_flags(domain: &str) -> Vec<UrlFlag> {
    let tld_flags = SUSPICIOUS_TLDS
        .iter()
        .filter(|tld| domain.ends_with(**tld))
        .map(|tld| UrlFlag::SuspiciousTld(tld.to_string()));

    let ip_flag = domain
        .parse::<Ipv4Addr>()
        .is_ok()
        .then_some(UrlFlag::RawIpAddress);

    let depth_flag = (domain.matches('.').count() > MAX_LABEL_SEPARATORS)
        .then_some(UrlFlag::ExcessiveSubdomains);

    tld_flags.chain(ip_flag).chain(depth_flag).collect()
}

/// The URL without its scheme, reused for both reachability attempts
fn without_scheme(raw: &str) -> &str {
    raw.split_once("://").map_or(raw, |(_, rest)| rest)
}

fn is_plain_http(raw: &str) -> bool {
    raw.get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http://"))
}

impl VerificationProbe {
    /// Check a posting URL for static red flags and reachability
    pub async fn verify_url(&self, raw: &str) -> UrlCheck {
        let raw = raw.trim();
        let domain = match parse_domain(raw) {
            Ok(domain) => domain,
            Err(flag) => return UrlCheck::new("", false, vec![flag]),
        };

        let mut reasons = static_flags(&domain);

        let target = without_scheme(raw);
        let mut reachable = false;
        for scheme in SCHEMES {
            let url = format!("{}://{}", scheme, target);
            if let Some(status) = self.head_status(&url).await {
                reachable = true;
                if status >= 400 {
                    reasons.push(UrlFlag::ErrorStatus(status));
                }
                break;
            }
        }

        if !reachable {
            reasons.push(UrlFlag::Unreachable);
        }
        if is_plain_http(raw) {
            reasons.push(UrlFlag::InsecureScheme);
        }

        info!(
            "URL check for {}: reachable={} reasons={}",
            domain,
            reachable,
            reasons.len()
        );
        UrlCheck::new(domain, reachable, reasons)
    }
}
