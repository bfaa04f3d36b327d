use contracts::artifacts::{ArtifactFile, ArtifactListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the current artifact listing
pub async fn fetch_artifacts() -> Result<Vec<ArtifactFile>, String> {
    let response = Request::get(&api_url("/shap/list"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch artifact list: {}",
            response.status()
        ));
    }

    let result: ArtifactListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result.files)
}
