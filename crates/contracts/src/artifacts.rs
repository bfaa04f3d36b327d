use serde::{Deserialize, Deserializer, Serialize};

/// One artifact file exposed by the backend.
///
/// `filename` is unique within a listing and doubles as the rendering key
/// on the frontend; `url` is directly fetchable by the browser.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ArtifactFile {
    pub filename: String,
    pub url: String,
}

/// Payload of `GET /shap/list`.
///
/// The `files` field may be absent or null in older backends; both cases
/// deserialize to an empty list.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ArtifactListResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<ArtifactFile>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UploadArtifactResponse {
    pub message: String,
    pub path: String,
    pub url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ArtifactFile>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<Vec<ArtifactFile>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
