use super::super::domain::Confidence;
use serde_json::{Map, Value};

pub const EDUCATION_SECTION: &str = "education_analysis";
pub const INDUSTRY_SECTION: &str = "industry_analysis";
pub const SKILLS_SECTION: &str = "skills_analysis";

const REQUIRED_SECTIONS: [&str; 3] = [EDUCATION_SECTION, INDUSTRY_SECTION, SKILLS_SECTION];

/// Reasons a model response is discarded as a whole.
#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    #[error("model response was empty")]
    Empty,
    #[error("model response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("model response is not a JSON object")]
    NotAnObject,
    #[error("model response is missing the `{0}` object")]
    MissingSection(&'static str),
}

/// Decoded model response with all three sections present.
///
/// Field values inside each section are not validated here; unknown keys are
/// kept so the raw object can be echoed back for auditing.
#[derive(Debug, Clone, PartialEq)]
pub struct AiAnalysis {
    raw: Map<String, Value>,
}

impl AiAnalysis {
    pub fn from_value(value: Value) -> Result<Self, InterpretError> {
        let Value::Object(raw) = value else {
            return Err(InterpretError::NotAnObject);
        };

        for section in REQUIRED_SECTIONS {
            if !matches!(raw.get(section), Some(Value::Object(_))) {
                return Err(InterpretError::MissingSection(section));
            }
        }

        Ok(Self { raw })
    }

    pub fn education(&self) -> Option<AnalysisSection<'_>> {
        self.section(EDUCATION_SECTION)
    }

    pub fn industry(&self) -> Option<AnalysisSection<'_>> {
        self.section(INDUSTRY_SECTION)
    }

    pub fn skills(&self) -> Option<AnalysisSection<'_>> {
        self.section(SKILLS_SECTION)
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.raw.clone())
    }

    fn section(&self, name: &str) -> Option<AnalysisSection<'_>> {
        self.raw
            .get(name)
            .and_then(Value::as_object)
            .map(|fields| AnalysisSection { fields })
    }
}

/// Borrowed view over one `*_analysis` object.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisSection<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> AnalysisSection<'a> {
    pub fn confidence_label(&self) -> Option<&'a str> {
        self.text("confidence")
    }

    pub fn confidence(&self) -> Option<Confidence> {
        self.confidence_label().and_then(Confidence::from_label)
    }

    /// Only an explicit `low` closes the gate.
    pub fn passes_confidence_gate(&self) -> bool {
        self.confidence() != Some(Confidence::Low)
    }

    pub fn reasoning(&self) -> Option<&'a str> {
        self.text("reasoning").filter(|text| !text.is_empty())
    }

    pub fn text(&self, field: &str) -> Option<&'a str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// String entries of an array field; `None` when the field is not an array.
    pub fn string_list(&self, field: &str) -> Option<Vec<String>> {
        self.fields.get(field).and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
    }
}

/// Strip markdown fences, trim, and decode a model response.
///
/// Never panics; every failure comes back as an [`InterpretError`].
pub fn interpret_response(text: Option<&str>) -> Result<AiAnalysis, InterpretError> {
    let cleaned = strip_code_fences(text.unwrap_or(""));
    if cleaned.is_empty() {
        return Err(InterpretError::Empty);
    }

    let value: Value = serde_json::from_str(&cleaned)?;
    AiAnalysis::from_value(value)
}

pub(crate) fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}
