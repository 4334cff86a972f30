use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id_genre: String,
    pub name: String,
}

/// Payload of `POST /genre` and `PUT /genre/{id}`. The name must be
/// non-empty after trimming; the frontend validates before submitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCreateRequest {
    pub name: String,
}
