use super::domain::ProfileRecord;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ProfileInputError {
    #[error("failed to read profile input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode either a single profile object or an array of profiles.
pub fn load_profiles<R: Read>(reader: R) -> Result<Vec<ProfileRecord>, ProfileInputError> {
    let value: Value = serde_json::from_reader(reader)?;
    let profiles = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<ProfileRecord>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(profiles)
}

pub fn load_profiles_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ProfileRecord>, ProfileInputError> {
    let file = std::fs::File::open(path)?;
    load_profiles(std::io::BufReader::new(file))
}
