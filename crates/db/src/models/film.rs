//! Film record and the DTOs for create, partial update and full replace.

use filmstore_core::types::{Minutes, RecordId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// One element of the persisted film array.
///
/// Optional fields are omitted from the document when absent. `budget` keeps
/// the number exactly as it was read, integer or fractional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: RecordId,
    pub title: String,
    pub director: String,
    pub duration: Minutes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Film {
    /// Whether this film has the same (title, director, duration) triple.
    pub fn same_triple(&self, title: &str, director: &str, duration: Minutes) -> bool {
        self.title == title && self.director == director && self.duration == duration
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /films`. Fields are validated by the service, not by serde,
/// so a missing field surfaces as a validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFilm {
    pub title: Option<String>,
    pub director: Option<String>,
    pub duration: Option<f64>,
}

/// Body of `PUT /films/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceFilm {
    pub title: Option<String>,
    pub director: Option<String>,
    pub duration: Option<f64>,
    pub budget: Option<Number>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Body of `PATCH /films/{id}`.
///
/// Text fields are applied whenever present, including empty strings.
/// `duration` and `budget` stay raw JSON so that unusable values (negative,
/// zero, wrong type) are ignored instead of rejecting the request.
/// For `description` and `imageUrl` the outer `Option` records presence and
/// the inner one distinguishes a value from an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilm {
    pub title: Option<String>,
    pub director: Option<String>,
    pub duration: Option<Value>,
    pub budget: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
}

/// Query parameters for `GET /films`.
///
/// Kept as raw text: unusable values disable the filter instead of failing
/// the request (see `filmstore_core::film::parse_minimum_duration`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilmListParams {
    #[serde(rename = "minimum-duration")]
    pub minimum_duration: Option<String>,
}

/// Any value that reaches the deserializer was present in the body.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
