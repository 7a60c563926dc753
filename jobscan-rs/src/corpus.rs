//! Keyword corpus
//!
//! Static, categorized fraud-indicator phrases plus the auxiliary word lists
//! used by the structural checks and the URL heuristics. All phrases are
//! lowercase; matching is done against a case-folded copy of the input.

use serde::{Deserialize, Serialize};

/// Keyword categories, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Payment,
    Urgency,
    PersonalInfo,
    TooGood,
    Mlm,
    VagueRole,
    InformalContact,
}

impl KeywordCategory {
    /// Every category, in the order signals are emitted
    pub const ALL: [KeywordCategory; 7] = [
        KeywordCategory::Payment,
        KeywordCategory::Urgency,
        KeywordCategory::PersonalInfo,
        KeywordCategory::TooGood,
        KeywordCategory::Mlm,
        KeywordCategory::VagueRole,
        KeywordCategory::InformalContact,
    ];

    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            KeywordCategory::Payment => PAYMENT,
            KeywordCategory::Urgency => URGENCY,
            KeywordCategory::PersonalInfo => PERSONAL_INFO,
            KeywordCategory::TooGood => TOO_GOOD,
            KeywordCategory::Mlm => MLM,
            KeywordCategory::VagueRole => VAGUE_ROLE,
            KeywordCategory::InformalContact => INFORMAL_CONTACT,
        }
    }

    /// Weight contributed when any phrase of the category matches
    pub fn default_weight(self) -> u32 {
        match self {
            KeywordCategory::Payment => 30,
            KeywordCategory::Urgency => 20,
            KeywordCategory::PersonalInfo => 25,
            KeywordCategory::TooGood => 20,
            KeywordCategory::Mlm => 25,
            KeywordCategory::VagueRole => 15,
            KeywordCategory::InformalContact => 10,
        }
    }

    /// Human-readable label used in signal descriptions
    pub fn label(self) -> &'static str {
        match self {
            KeywordCategory::Payment => "Payment/fee demands",
            KeywordCategory::Urgency => "Urgency/pressure tactics",
            KeywordCategory::PersonalInfo => "Requests sensitive data",
            KeywordCategory::TooGood => "Unrealistic promises",
            KeywordCategory::Mlm => "MLM/pyramid indicators",
            KeywordCategory::VagueRole => "Vague job descriptions",
            KeywordCategory::InformalContact => "Informal communication",
        }
    }
}

/// Iterate over every categorized phrase
pub fn all_phrases() -> impl Iterator<Item = &'static str> {
    KeywordCategory::ALL
        .into_iter()
        .flat_map(|category| category.phrases().iter().copied())
}

/// Phrases of `candidates` contained in `text_lower`, in list order
pub fn find_matches(text_lower: &str, candidates: &[&str]) -> Vec<String> {
    candidates
        .iter()
        .filter(|phrase| text_lower.contains(**phrase))
        .map(|phrase| phrase.to_string())
        .collect()
}

/// Whether `domain` belongs to a free webmail provider
pub fn is_free_provider(domain: &str) -> bool {
    FREE_EMAIL_PROVIDERS.contains(&domain)
}

const PAYMENT: &[&str] = &[
    "registration fee",
    "payment required",
    "training fee",
    "deposit",
    "processing fee",
    "advance payment",
    "security deposit",
    "pay first",
    "pay to apply",
    "joining fee",
    "enrollment fee",
    "application fee",
    "fee required",
    "pay for training",
    "pay for kit",
    "pay for material",
    "pay before joining",
    "refundable deposit",
    "non refundable",
    "send money",
    "transfer amount",
];

const URGENCY: &[&str] = &[
    "urgent hiring",
    "limited seats",
    "work from home and earn",
    "easy money",
    "guaranteed income",
    "instant approval",
    "no experience needed",
    "act now",
    "hurry",
    "apply immediately",
    "don't miss",
    "last chance",
    "limited time",
    "only few seats",
    "once in a lifetime",
    "immediate joining",
    "join today",
    "start today",
    "start immediately",
    "hiring now",
    "walk in",
    "spot offer",
    "direct joining",
];

const PERSONAL_INFO: &[&str] = &[
    "bank account",
    "bank details",
    "credit card",
    "debit card",
    "ssn",
    "social security",
    "pan card",
    "aadhaar",
    "aadhar",
    "passport copy",
    "send your id",
    "send documents",
    "share your photo",
    "selfie with id",
];

const TOO_GOOD: &[&str] = &[
    "earn from home",
    "earn daily",
    "earn weekly",
    "make money fast",
    "become rich",
    "earn lakhs",
    "earn thousands",
    "high income",
    "passive income",
    "income guarantee",
    "double your money",
    "no investment",
    "zero investment",
    "free laptop",
    "free phone",
    "work only 2 hours",
    "part time income",
    "extra income",
    "flexible hours earn",
    "simple task",
];

const MLM: &[&str] = &[
    "refer and earn",
    "referral bonus",
    "chain",
    "multi level",
    "network marketing",
    "downline",
    "build your team",
    "recruit people",
    "pyramid",
    "mlm",
];

const VAGUE_ROLE: &[&str] = &[
    "data entry",
    "copy paste",
    "typing job",
    "form filling",
    "ad posting",
    "sms sending",
    "email sending",
    "captcha",
    "survey filling",
    "click and earn",
    "like and earn",
    "watch and earn",
    "simple online job",
];

const INFORMAL_CONTACT: &[&str] = &[
    "whatsapp",
    "telegram",
    "signal",
    "contact on whatsapp",
    "dm me",
    "inbox me",
    "message me personally",
];

/// Free webmail providers; assumed always resolvable
pub const FREE_EMAIL_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "protonmail.com",
    "aol.com",
    "ymail.com",
    "rediffmail.com",
    "mail.com",
    "zoho.com",
    "icloud.com",
    "live.com",
    "yandex.com",
    "tutanota.com",
    "gmx.com",
];

/// Education or skill requirements a genuine posting usually states
pub const QUALIFICATION_TERMS: &[&str] = &[
    "bachelor",
    "master",
    "degree",
    "b.tech",
    "b.e",
    "mba",
    "qualification",
    "graduate",
    "diploma",
    "certification",
    "b.sc",
    "m.sc",
    "b.com",
    "experience in",
    "years of experience",
    "proficient in",
    "knowledge of",
    "skills required",
];

/// Phrasing that skips the normal selection process
pub const HIRING_BYPASS_TERMS: &[&str] = &[
    "no interview",
    "direct selection",
    "selected directly",
    "no aptitude",
    "no test required",
    "guaranteed selection",
];

/// Pay structures with no fixed salary
pub const COMMISSION_TERMS: &[&str] = &[
    "commission only",
    "commission based",
    "incentive based",
    "performance based only",
    "no fixed salary",
    "target based",
];

/// Top-level domains frequently used by throwaway scam sites
pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".xyz", ".top", ".buzz", ".click", ".link", ".work", ".gq", ".ml", ".tk", ".cf", ".ga",
];
