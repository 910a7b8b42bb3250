//! Lead qualification scoring for professional profile records.
//!
//! Rule-based feature extraction and rubric scoring live in
//! [`workflows::qualification`]; the remaining modules carry configuration,
//! logging and the application error type shared with the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
