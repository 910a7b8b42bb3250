//! Contract with the external language model: the prompt we hand over and the
//! defensive interpretation of whatever text comes back.

mod interpreter;
mod prompt;

pub use interpreter::{
    interpret_response, AiAnalysis, AnalysisSection, InterpretError, EDUCATION_SECTION,
    INDUSTRY_SECTION, SKILLS_SECTION,
};
pub use prompt::{build_analysis_prompt, AnalysisPrompt, PromptTemplate};

#[cfg(test)]
pub(crate) use interpreter::strip_code_fences;
