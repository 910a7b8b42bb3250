use serde::{Deserialize, Deserializer, Serialize};

/// Raw professional profile as delivered by the profile source.
///
/// Every collection tolerates `null` or absence so extraction can fall back to
/// its documented defaults instead of rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub basic_info: BasicInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
}

impl ProfileRecord {
    /// First experience entry flagged as current.
    pub fn current_experience(&self) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|entry| entry.is_current)
    }

    pub fn full_name(&self) -> Option<&str> {
        non_empty(self.basic_info.fullname.as_deref())
    }

    pub fn headline(&self) -> Option<&str> {
        non_empty(self.basic_info.headline.as_deref())
    }

    pub fn about(&self) -> Option<&str> {
        non_empty(self.basic_info.about.as_deref())
    }

    /// Headline, else the title of the current experience entry.
    pub fn current_position(&self) -> Option<&str> {
        self.headline().or_else(|| {
            self.current_experience()
                .and_then(|entry| non_empty(entry.title.as_deref()))
        })
    }

    /// Company from the basic info block, else the current experience entry.
    pub fn current_company(&self) -> Option<&str> {
        non_empty(self.basic_info.current_company.as_deref()).or_else(|| {
            self.current_experience()
                .and_then(|entry| non_empty(entry.company.as_deref()))
        })
    }

    pub fn location(&self) -> Option<&str> {
        self.basic_info.location.as_ref().and_then(Location::display)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(default, alias = "linkedin_url", skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creator_hashtags: Vec<String>,
}

/// Profile sources disagree on whether location is a plain string or an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Text(String),
    Detailed(LocationDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    pub fn display(&self) -> Option<&str> {
        match self {
            Location::Text(text) => non_empty(Some(text.as_str())),
            Location::Detailed(details) => non_empty(details.full.as_deref())
                .or_else(|| non_empty(details.city.as_deref()))
                .or_else(|| non_empty(details.country.as_deref())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
}

impl EducationEntry {
    /// `degree_name` takes precedence over `degree`; blank values are skipped.
    pub fn degree_text(&self) -> &str {
        non_empty(self.degree_name.as_deref())
            .or_else(|| non_empty(self.degree.as_deref()))
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<PartialDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<PartialDate>,
}

/// Year/month pair where either half may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialDate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<YearValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthValue>,
}

impl PartialDate {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year: Some(YearValue::Number(i64::from(year))),
            month: Some(MonthValue::Number(i64::from(month))),
        }
    }

    /// Zero, negative or unparseable years count as missing.
    pub fn known_year(&self) -> Option<i32> {
        self.year.as_ref().and_then(YearValue::resolve)
    }

    pub fn known_month(&self) -> Option<u32> {
        self.month.as_ref().and_then(MonthValue::resolve)
    }
}

/// Years arrive as numbers (`2007`) or numeric strings (`"2007"`). Any other
/// shape is kept so the record still decodes, and resolves to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl YearValue {
    pub fn resolve(&self) -> Option<i32> {
        let value = match self {
            YearValue::Number(value) => *value,
            YearValue::Text(text) => text.trim().parse::<i64>().ok()?,
            YearValue::Other(_) => return None,
        };
        i32::try_from(value).ok().filter(|year| *year > 0)
    }
}

/// Months arrive as numbers (`3`), numeric strings (`"03"`) or names (`"Mar"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthValue {
    Number(i64),
    Name(String),
}

impl MonthValue {
    /// `None` for blank or zero values; unrecognized values resolve to January.
    pub fn resolve(&self) -> Option<u32> {
        match self {
            MonthValue::Number(0) => None,
            MonthValue::Number(value) => Some(month_in_range(*value)),
            MonthValue::Name(name) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return None;
                }
                if let Ok(value) = trimmed.parse::<i64>() {
                    return if value == 0 {
                        None
                    } else {
                        Some(month_in_range(value))
                    };
                }
                let prefix: String = trimmed.to_lowercase().chars().take(3).collect();
                Some(month_from_abbreviation(&prefix).unwrap_or(1))
            }
        }
    }
}

fn month_in_range(value: i64) -> u32 {
    if (1..=12).contains(&value) {
        value as u32
    } else {
        1
    }
}

fn month_from_abbreviation(prefix: &str) -> Option<u32> {
    let month = match prefix {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Highest completed education, ordered `HighSchool < Bachelor < Master < Phd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Bachelor,
    Master,
    Phd,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::Phd,
        EducationLevel::Master,
        EducationLevel::Bachelor,
        EducationLevel::HighSchool,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::Phd => "phd",
            EducationLevel::Master => "master",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::HighSchool => "high_school",
        }
    }

    /// Exact label match; anything else is not an education level.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 4] = [
        Industry::Technology,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Other => "other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|industry| industry.label() == label)
    }
}

/// Self-reported certainty attached to each section of a model response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "high" => Some(Confidence::High),
            "medium" => Some(Confidence::Medium),
            "low" => Some(Confidence::Low),
            _ => None,
        }
    }
}

/// Feature set the rubric scores. Produced once per stage, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFeatures {
    pub experience_years: u32,
    pub education_level: EducationLevel,
    pub industry: Industry,
    pub skills: Vec<String>,
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
