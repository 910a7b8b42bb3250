//! Canonical keyword tables shared by every extraction path.
//!
//! All entries are lower-case and matched as plain substrings against
//! lower-cased profile text.

use super::domain::{EducationLevel, Industry};

/// Degree markers checked in priority order; the first level with a hit wins
/// for a single education entry.
pub const DEGREE_MARKERS: &[(EducationLevel, &[&str])] = &[
    (EducationLevel::Phd, &["phd", "doctorate", "ph.d"]),
    (EducationLevel::Master, &["master", "mba", "m.s", "m.a"]),
    (
        EducationLevel::Bachelor,
        &["bachelor", "b.s", "b.a", "engineer", "ingénieur", "ingenieur"],
    ),
];

pub const TECHNOLOGY_KEYWORDS: &[&str] = &[
    "software",
    "developer",
    "engineer",
    "tech",
    "programming",
    "coding",
    "javascript",
    "python",
    "react",
    "ai",
    "machine learning",
    "data science",
    "startup",
    "saas",
    "cloud",
    "aws",
    "google",
    "microsoft",
    "apple",
    "meta",
    "uber",
    "airbnb",
];

pub const FINANCE_KEYWORDS: &[&str] = &[
    "finance",
    "investment",
    "banking",
    "financial",
    "consulting",
    "mckinsey",
    "bain",
    "bcg",
    "goldman sachs",
    "jp morgan",
    "morgan stanley",
    "analyst",
    "advisor",
    "capital",
    "fund",
];

pub const HEALTHCARE_KEYWORDS: &[&str] = &[
    "healthcare",
    "medical",
    "doctor",
    "nurse",
    "hospital",
    "pharma",
    "biotech",
    "education",
    "teacher",
    "professor",
    "university",
    "school",
    "research",
];

/// Industry keyword sets in evaluation order; `Other` is the catch-all.
pub const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (Industry::Technology, TECHNOLOGY_KEYWORDS),
    (Industry::Finance, FINANCE_KEYWORDS),
    (Industry::Healthcare, HEALTHCARE_KEYWORDS),
];

/// Skill categories appended by name when any trigger appears in the profile text.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "software",
            "developer",
            "programming",
            "coding",
            "machine learning",
            "artificial intelligence",
            "data science",
            "cloud",
            "saas",
            "tech",
        ],
    ),
    (
        "leadership",
        &[
            "ceo",
            "founder",
            "director",
            "manager",
            "head of",
            "chief",
            "president",
            "leadership",
        ],
    ),
    (
        "finance",
        &[
            "finance",
            "investment",
            "investing",
            "banking",
            "capital",
            "fund",
            "venture",
            "fintech",
        ],
    ),
    (
        "healthcare",
        &[
            "healthcare",
            "health",
            "medical",
            "hospital",
            "pharma",
            "biotech",
            "clinical",
        ],
    ),
    (
        "sustainability",
        &[
            "sustainability",
            "sustainable",
            "climate",
            "renewable",
            "esg",
            "environment",
        ],
    ),
    (
        "education",
        &[
            "education",
            "teaching",
            "teacher",
            "professor",
            "university",
            "mentor",
        ],
    ),
    (
        "communication",
        &[
            "communication",
            "marketing",
            "public speaking",
            "speaker",
            "author",
            "media",
        ],
    ),
];

/// Specific skill tokens appended verbatim when they occur in the profile text.
pub const SUPPLEMENTARY_SKILLS: &[&str] = &[
    "books",
    "healthcare",
    "innovation",
    "climatechange",
    "sustainability",
    "philanthropy",
    "entrepreneurship",
    "investing",
];

/// Schools used by the opt-in education fallback.
pub const PRESTIGIOUS_SCHOOLS: &[&str] = &[
    "harvard",
    "stanford",
    "mit",
    "cambridge",
    "oxford",
    "yale",
    "princeton",
    "berkeley",
    "caltech",
    "columbia",
    "chicago",
];

pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
