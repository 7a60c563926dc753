//! Individual text rules
//!
//! Each rule inspects the prepared input and returns at most one finding.
//! Rules never look at each other's output.

use regex::Regex;
use std::sync::LazyLock;

use super::types::SignalCategory;
use crate::corpus::{
    self, find_matches, COMMISSION_TERMS, HIRING_BYPASS_TERMS, QUALIFICATION_TERMS,
};

/// Fresher salaries above this many LPA are implausible
const FRESHER_LPA_LIMIT: u64 = 8;
/// Weekly or daily pay above this amount is implausible
const HIGH_PAY_LIMIT: u64 = 5_000;
/// Ratio of all-caps words above which the text counts as shouting
const CAPS_RATIO_LIMIT: f64 = 0.25;
/// All-caps words must be longer than this to count
const CAPS_MIN_CHARS: usize = 2;
const EXCLAMATION_LIMIT: usize = 4;
/// Descriptions shorter than this many words are suspicious
const SHORT_DESCRIPTION_WORDS: usize = 30;
/// Qualification check only applies above this many words
const QUALIFICATION_MIN_WORDS: usize = 10;
const PHONE_NUMBER_LIMIT: usize = 2;
/// Digits a phone-shaped run needs before it counts as a number
const PHONE_MIN_DIGITS: usize = 7;

static LPA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*lpa").expect("valid LPA regex"));
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([$₹])\s*(\d[\d,]*)").expect("valid currency regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[\d\-\s]{10,}").expect("valid phone regex"));

/// Input prepared once per analysis
pub(crate) struct RuleInput<'a> {
    pub text: &'a str,
    pub lower: String,
    pub words: Vec<&'a str>,
    pub email_domain: Option<String>,
    pub company: &'a str,
}

impl<'a> RuleInput<'a> {
    pub fn new(text: &'a str, email: &str, company: &'a str) -> Self {
        let text = text.trim();
        let email = email.trim().to_lowercase();
        let email_domain = email
            .rsplit_once('@')
            .map(|(_, domain)| domain.to_string())
            .filter(|domain| !domain.is_empty());

        Self {
            text,
            lower: text.to_lowercase(),
            words: text.split_whitespace().collect(),
            email_domain,
            company,
        }
    }
}

/// What a rule found
pub(crate) struct Finding {
    pub description: String,
    pub terms: Vec<String>,
}

impl Finding {
    fn new(description: String) -> Self {
        Self {
            description,
            terms: Vec::new(),
        }
    }

    fn with_terms(description: String, terms: Vec<String>) -> Self {
        Self { description, terms }
    }
}

pub(crate) fn evaluate(category: SignalCategory, input: &RuleInput<'_>) -> Option<Finding> {
    if let Some(keywords) = category.keyword_category() {
        let hits = find_matches(&input.lower, keywords.phrases());
        return listed(keywords.label(), hits);
    }

    match category {
        SignalCategory::FresherSalary => fresher_salary(input),
        SignalCategory::HighPay => high_pay(input),
        SignalCategory::FreeEmail => free_email(input),
        SignalCategory::ExcessiveCaps => excessive_caps(input),
        SignalCategory::Exclamations => exclamations(input),
        SignalCategory::ShortDescription => short_description(input),
        SignalCategory::NoQualifications => no_qualifications(input),
        SignalCategory::HiringBypass => listed(
            "Bypasses hiring process",
            find_matches(&input.lower, HIRING_BYPASS_TERMS),
        ),
        SignalCategory::PhoneNumbers => phone_numbers(input),
        SignalCategory::CommissionOnly => listed(
            "Commission/incentive-only pay",
            find_matches(&input.lower, COMMISSION_TERMS),
        ),
        SignalCategory::MissingCompany => missing_company(input),
        _ => None,
    }
}

fn listed(label: &str, hits: Vec<String>) -> Option<Finding> {
    if hits.is_empty() {
        return None;
    }
    Some(Finding::with_terms(
        format!("{}: {}", label, hits.join(", ")),
        hits,
    ))
}

/// Digit runs overflow only when they are absurdly large, which still exceeds any limit
fn exceeds(digits: &str, limit: u64) -> bool {
    digits.parse::<u64>().map_or(true, |value| value > limit)
}

fn fresher_salary(input: &RuleInput<'_>) -> Option<Finding> {
    if !(input.lower.contains("fresher") || input.lower.contains("no experience")) {
        return None;
    }

    LPA_RE
        .captures_iter(&input.lower)
        .find(|caps| exceeds(&caps[1], FRESHER_LPA_LIMIT))
        .map(|caps| {
            Finding::with_terms(
                format!("Unrealistic salary ({} LPA) for freshers", &caps[1]),
                vec![caps[0].to_string()],
            )
        })
}

fn high_pay(input: &RuleInput<'_>) -> Option<Finding> {
    if !(input.lower.contains("week") || input.lower.contains("daily")) {
        return None;
    }

    CURRENCY_RE
        .captures_iter(&input.lower)
        .find(|caps| exceeds(&caps[2].replace(',', ""), HIGH_PAY_LIMIT))
        .map(|caps| {
            Finding::with_terms(
                format!(
                    "Suspiciously high pay ({}{}/week or /day)",
                    &caps[1], &caps[2]
                ),
                vec![caps[0].to_string()],
            )
        })
}

fn free_email(input: &RuleInput<'_>) -> Option<Finding> {
    let domain = input.email_domain.as_deref()?;
    corpus::is_free_provider(domain).then(|| {
        Finding::with_terms(
            format!("Recruiter uses free email (@{})", domain),
            vec![domain.to_string()],
        )
    })
}

fn is_shouted(word: &str) -> bool {
    word.chars().count() > CAPS_MIN_CHARS
        && word.chars().any(char::is_uppercase)
        && !word.chars().any(char::is_lowercase)
}

fn excessive_caps(input: &RuleInput<'_>) -> Option<Finding> {
    if input.words.is_empty() {
        return None;
    }

    let shouted: Vec<String> = input
        .words
        .iter()
        .filter(|word| is_shouted(word))
        .map(|word| word.to_string())
        .collect();
    let ratio = shouted.len() as f64 / input.words.len() as f64;

    (ratio > CAPS_RATIO_LIMIT).then(|| {
        Finding::with_terms(
            format!(
                "Excessive ALL-CAPS ({}% of words)",
                (ratio * 100.0) as u32
            ),
            shouted,
        )
    })
}

fn exclamations(input: &RuleInput<'_>) -> Option<Finding> {
    let count = input.text.matches('!').count();
    (count >= EXCLAMATION_LIMIT)
        .then(|| Finding::new(format!("Excessive exclamation marks ({} found)", count)))
}

fn short_description(input: &RuleInput<'_>) -> Option<Finding> {
    let count = input.words.len();
    (count > 0 && count < SHORT_DESCRIPTION_WORDS)
        .then(|| Finding::new(format!("Very short description ({} words)", count)))
}

fn no_qualifications(input: &RuleInput<'_>) -> Option<Finding> {
    let mentions_any = QUALIFICATION_TERMS
        .iter()
        .any(|term| input.lower.contains(term));

    (!mentions_any && input.words.len() > QUALIFICATION_MIN_WORDS)
        .then(|| Finding::new("No educational/skill requirements mentioned".to_string()))
}

fn phone_numbers(input: &RuleInput<'_>) -> Option<Finding> {
    let numbers: Vec<String> = PHONE_RE
        .find_iter(input.text)
        .map(|m| m.as_str().trim())
        .filter(|run| run.chars().filter(char::is_ascii_digit).count() >= PHONE_MIN_DIGITS)
        .map(str::to_string)
        .collect();

    (numbers.len() >= PHONE_NUMBER_LIMIT).then(|| {
        Finding::with_terms(
            format!("Multiple phone numbers listed ({})", numbers.len()),
            numbers,
        )
    })
}

fn missing_company(input: &RuleInput<'_>) -> Option<Finding> {
    input
        .company
        .trim()
        .is_empty()
        .then(|| Finding::new("No company name provided".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(category: SignalCategory, text: &str) -> Option<Finding> {
        evaluate(category, &RuleInput::new(text, "", "Acme"))
    }

    #[test]
    fn test_fresher_salary_requires_fresher_wording() {
        assert!(run(SignalCategory::FresherSalary, "Package 12 LPA for freshers").is_some());
        assert!(run(SignalCategory::FresherSalary, "Package 12 LPA for seniors").is_none());
        assert!(run(SignalCategory::FresherSalary, "Package 6 LPA for freshers").is_none());
    }

    #[test]
    fn test_fresher_salary_reports_first_qualifying_number() {
        let finding = run(
            SignalCategory::FresherSalary,
            "no experience: 5 lpa, 15 lpa or 20 lpa",
        )
        .unwrap();
        assert_eq!(finding.description, "Unrealistic salary (15 LPA) for freshers");
    }

    #[test]
    fn test_high_pay() {
        let finding = run(SignalCategory::HighPay, "Earn $7,500 every week").unwrap();
        assert_eq!(finding.description, "Suspiciously high pay ($7,500/week or /day)");
        assert!(run(SignalCategory::HighPay, "Earn $7,500 every month").is_none());
        assert!(run(SignalCategory::HighPay, "Earn $500 daily").is_none());
        assert!(run(SignalCategory::HighPay, "Get ₹9000 daily").is_some());
    }

    #[test]
    fn test_caps_ratio() {
        assert!(run(SignalCategory::ExcessiveCaps, "APPLY NOW for THIS job").is_some());
        // "OK" is too short to count
        assert!(run(SignalCategory::ExcessiveCaps, "OK so we are hiring people").is_none());
    }

    #[test]
    fn test_shouted_word_ignores_punctuation() {
        assert!(is_shouted("HIRING!!!!"));
        assert!(!is_shouted("Hiring"));
        assert!(!is_shouted("!!!!"));
    }

    #[test]
    fn test_exclamation_threshold() {
        assert!(run(SignalCategory::Exclamations, "Wow!!!").is_none());
        assert!(run(SignalCategory::Exclamations, "Wow!!!!").is_some());
    }

    #[test]
    fn test_short_description_bounds() {
        assert!(run(SignalCategory::ShortDescription, "").is_none());
        assert!(run(SignalCategory::ShortDescription, "one two three").is_some());
        let long = "word ".repeat(30);
        assert!(run(SignalCategory::ShortDescription, &long).is_none());
    }

    #[test]
    fn test_qualifications() {
        let vague = "we need people to join our team and work with us on many things now";
        assert!(run(SignalCategory::NoQualifications, vague).is_some());
        let specific = format!("{} with a bachelor degree", vague);
        assert!(run(SignalCategory::NoQualifications, &specific).is_none());
        assert!(run(SignalCategory::NoQualifications, "tiny post").is_none());
    }

    #[test]
    fn test_phone_numbers() {
        let finding = run(
            SignalCategory::PhoneNumbers,
            "Call 98765 43210 or +91-91234-56789 today",
        )
        .unwrap();
        assert_eq!(finding.terms.len(), 2);
        assert!(run(SignalCategory::PhoneNumbers, "Call 98765 43210 today").is_none());
    }

    #[test]
    fn test_free_email_and_missing_company() {
        let input = RuleInput::new("text", " Person@GMAIL.com ", "  ");
        let finding = evaluate(SignalCategory::FreeEmail, &input).unwrap();
        assert_eq!(finding.description, "Recruiter uses free email (@gmail.com)");
        assert!(evaluate(SignalCategory::MissingCompany, &input).is_some());

        let input = RuleInput::new("text", "not-an-email", "Acme");
        assert!(evaluate(SignalCategory::FreeEmail, &input).is_none());
        assert!(evaluate(SignalCategory::MissingCompany, &input).is_none());
    }
}
