//! Company web-presence verification
//!
//! Candidate domains are derived from the company name and tried in a fixed
//! priority order. The first candidate that resolves decides the outcome:
//! live website, or "found but not live". Later candidates are not tried.

use tracing::info;

use super::types::CompanyCheck;
use super::VerificationProbe;

/// Domain suffixes appended to the company slug, in priority order
const DOMAIN_SUFFIXES: [&str; 5] = [".com", ".in", ".co.in", ".org", ".io"];

/// Schemes tried for reachability, secure first
pub(crate) const SCHEMES: [&str; 2] = ["https", "http"];

/// Number of candidates quoted in the not-found detail
const QUOTED_CANDIDATES: usize = 3;

/// Lowercase alphanumeric slug of a company name
pub fn company_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Candidate domains for a slug, in the order they are tried
pub fn candidate_domains(slug: &str) -> Vec<String> {
    DOMAIN_SUFFIXES
        .iter()
        .map(|suffix| format!("{}{}", slug, suffix))
        .chain(std::iter::once(format!("www.{}.com", slug)))
        .collect()
}

/// HEAD statuses below 400 count as a live website
pub(crate) fn is_live_status(status: u16) -> bool {
    status < 400
}

impl VerificationProbe {
    /// Look for a live website belonging to `name`
    pub async fn verify_company(&self, name: &str) -> CompanyCheck {
        let name = name.trim();
        if name.is_empty() {
            return CompanyCheck::not_found("", "No company name provided");
        }

        let slug = company_slug(name);
        if slug.is_empty() {
            return CompanyCheck::not_found(
                "",
                format!("Could not derive a domain from '{}'", name),
            );
        }

        let candidates = candidate_domains(&slug);
        for domain in &candidates {
            if !self.resolves(domain).await {
                continue;
            }

            for scheme in SCHEMES {
                let url = format!("{}://{}", scheme, domain);
                if self.head_status(&url).await.is_some_and(is_live_status) {
                    info!("Company website found at {}", url);
                    return CompanyCheck {
                        found: true,
                        domain_tried: domain.clone(),
                        website_live: true,
                        detail: format!("Company website found at {}", url),
                    };
                }
            }

            info!("Domain {} resolves but no website answered", domain);
            return CompanyCheck {
                found: true,
                domain_tried: domain.clone(),
                website_live: false,
                detail: format!(
                    "Domain {} exists in DNS but website is not reachable",
                    domain
                ),
            };
        }

        let quoted: Vec<&str> = candidates
            .iter()
            .take(QUOTED_CANDIDATES)
            .map(String::as_str)
            .collect();
        info!("No candidate domain resolved for '{}'", name);

        CompanyCheck::not_found(
            candidates.last().cloned().unwrap_or_default(),
            format!(
                "No website found for '{}' (tried: {}...)",
                name,
                quoted.join(", ")
            ),
        )
    }
}
