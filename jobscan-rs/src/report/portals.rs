//! Safer alternatives for risky postings
//!
//! Builds a search query from the posting and links it to established job
//! portals so the user can look for the same role through a trusted channel.

use serde::Serialize;
use url::form_urlencoded::byte_serialize;

/// Postings scoring above this get portal suggestions
pub const SUGGESTION_THRESHOLD: u32 = 40;

const MAX_QUERY_TERMS: usize = 3;

/// Leading words inspected when no role keyword is found
const FALLBACK_WINDOW: usize = 10;

const COMMON_ROLES: &[&str] = &[
    "software engineer",
    "developer",
    "designer",
    "manager",
    "analyst",
    "data entry",
    "marketing",
    "sales",
    "accountant",
    "teacher",
    "nurse",
    "driver",
    "content writer",
    "graphic designer",
    "web developer",
    "full stack",
    "frontend",
    "backend",
    "devops",
    "cloud",
    "python",
    "java",
    "react",
    "angular",
    "machine learning",
    "ai",
    "data scientist",
    "project manager",
    "product manager",
    "hr",
    "human resources",
    "customer support",
    "business development",
    "operations",
    "intern",
    "fresher",
    "senior",
    "junior",
    "lead",
    "architect",
];

/// A trusted job portal search link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalLink {
    pub name: &'static str,
    pub url: String,
    pub description: &'static str,
}

/// Portal links for a posting, with the query they search for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalSuggestions {
    pub query: String,
    pub portals: Vec<PortalLink>,
}

pub fn should_suggest(score: u32) -> bool {
    score > SUGGESTION_THRESHOLD
}

/// Search query for the role described in `text`
///
/// Role keywords are matched on word boundaries, in table order.
pub fn search_query(text: &str) -> String {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let padded = format!(" {} ", normalized.split_whitespace().collect::<Vec<_>>().join(" "));

    let roles: Vec<&str> = COMMON_ROLES
        .iter()
        .copied()
        .filter(|role| padded.contains(&format!(" {} ", role)))
        .take(MAX_QUERY_TERMS)
        .collect();
    if !roles.is_empty() {
        return roles.join(" ");
    }

    let words: Vec<&str> = text
        .split_whitespace()
        .take(FALLBACK_WINDOW)
        .filter(|w| w.chars().count() > 3 && w.chars().all(char::is_alphabetic))
        .take(MAX_QUERY_TERMS)
        .collect();
    if words.is_empty() {
        "jobs".to_string()
    } else {
        words.join(" ")
    }
}

pub fn suggest(text: &str) -> PortalSuggestions {
    let query = search_query(text);
    let encoded: String = byte_serialize(query.as_bytes()).collect();

    let portals = vec![
        PortalLink {
            name: "LinkedIn Jobs",
            url: format!("https://www.linkedin.com/jobs/search/?keywords={}", encoded),
            description: "Professional network with verified company profiles",
        },
        PortalLink {
            name: "Indeed",
            url: format!("https://www.indeed.com/jobs?q={}", encoded),
            description: "Large job search engine with company reviews",
        },
        PortalLink {
            name: "Glassdoor",
            url: format!("https://www.glassdoor.com/Job/jobs.htm?sc.keyword={}", encoded),
            description: "Jobs with salary data and employee reviews",
        },
        PortalLink {
            name: "Naukri.com",
            url: format!("https://www.naukri.com/{}-jobs", encoded.replace('+', "-")),
            description: "Indian job portal with verified employers",
        },
        PortalLink {
            name: "Google Jobs",
            url: format!("https://www.google.com/search?q={}+jobs&ibp=htl;jobs", encoded),
            description: "Aggregated listings from multiple sources",
        },
        PortalLink {
            name: "Monster",
            url: format!("https://www.monster.com/jobs/search?q={}", encoded),
            description: "Established job board with career resources",
        },
    ];

    PortalSuggestions { query, portals }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_roles() {
        assert_eq!(
            search_query("Hiring a Python developer for our backend team"),
            "developer backend python"
        );
    }

    #[test]
    fn test_roles_match_whole_words() {
        // "ai" inside "said" and "email" is not a role
        assert_eq!(search_query("He said email works"), "said email works");
    }

    #[test]
    fn test_fallback_words() {
        assert_eq!(search_query("Earn 5000 daily from home!!"), "Earn daily from");
        assert_eq!(search_query("$$$ 123 !!!"), "jobs");
    }

    #[test]
    fn test_links_are_encoded() {
        let suggestions = suggest("Senior data scientist");
        assert_eq!(suggestions.query, "data scientist senior");
        assert_eq!(suggestions.portals.len(), 6);
        assert_eq!(
            suggestions.portals[1].url,
            "https://www.indeed.com/jobs?q=data+scientist+senior"
        );
        assert_eq!(
            suggestions.portals[3].url,
            "https://www.naukri.com/data-scientist-senior-jobs"
        );
    }

    #[test]
    fn test_threshold() {
        assert!(!should_suggest(40));
        assert!(should_suggest(41));
    }
}
