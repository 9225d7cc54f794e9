use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::ProjectId;

/// Custom deserializer for project ids: positive integers only
pub fn deserialize_project_id<'de, D>(deserializer: D) -> Result<ProjectId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let id = value.as_u64().ok_or_else(|| Error::custom("project id must be a positive integer"))?;

    if id == 0 {
        return Err(Error::custom("project id must be positive"));
    }

    ProjectId::try_from(id).map_err(|_| Error::custom(format!("project id out of range: {}", id)))
}

/// Custom deserializer for optional links: blank strings and null mean "no link"
pub fn deserialize_optional_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}
