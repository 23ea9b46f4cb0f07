//! Wire DTOs as the backend actually sends them: identifiers may arrive as
//! numbers or strings, and most fields are optional. Defaulting into domain
//! models happens in one place, the store's normalization step.

use serde::{Deserialize, Deserializer};

/// Accept an identifier sent as either a JSON string or number.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

fn opaque_id_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: Option<String>,
    /// Some backend versions call the name field `title`.
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub tasks: Option<Vec<TaskDto>>,
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "opaque_id_opt")]
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub status: Option<String>,
    pub due_date: Option<String>,
    pub section: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<TagDto>>,
    #[serde(default, deserialize_with = "opaque_id_opt")]
    pub project_id: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagDto {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Response of `PATCH .../toggle`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleDto {
    pub completed: bool,
}

/// Response of `PATCH .../status`: the backend computes the next status and
/// reports the completion flag alongside it.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusDto {
    pub status: String,
    pub completed: bool,
}

/// Response of `GET /projects/{id}/progress`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressDto {
    pub progress: f64,
}

/// Response of `POST /auth/signin`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SigninDto {
    pub access_token: String,
}
