//! Recruiter email domain verification

use tracing::info;

use super::types::EmailCheck;
use super::VerificationProbe;
use crate::corpus;

/// Lowercased domain part of an address, if it has one
pub fn email_domain(address: &str) -> Option<String> {
    let (_, domain) = address.trim().rsplit_once('@')?;
    let domain = domain.trim().to_lowercase();
    (!domain.is_empty()).then_some(domain)
}

impl VerificationProbe {
    /// Check whether the domain of `address` exists
    ///
    /// Free providers are accepted without a lookup.
    pub async fn verify_email(&self, address: &str) -> EmailCheck {
        let Some(domain) = email_domain(address) else {
            return EmailCheck::default();
        };

        if corpus::is_free_provider(&domain) {
            return EmailCheck {
                valid_domain: true,
                is_free_provider: true,
                domain,
            };
        }

        let valid_domain = self.resolves(&domain).await;
        info!("Email domain {} valid: {}", domain, valid_domain);

        EmailCheck {
            valid_domain,
            is_free_provider: false,
            domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain("HR@Acme.COM "), Some("acme.com".to_string()));
        assert_eq!(email_domain("a@b@c.org"), Some("c.org".to_string()));
        assert_eq!(email_domain("no-at-sign"), None);
        assert_eq!(email_domain("trailing@"), None);
    }
}
