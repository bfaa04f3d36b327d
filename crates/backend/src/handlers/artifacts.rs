use axum::body::Bytes;
use axum::extract::{Multipart, Path};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::artifacts::{ArtifactListResponse, UploadArtifactResponse};

use crate::shared::storage::{self, StorageError};

pub async fn list() -> Result<Json<ArtifactListResponse>, StatusCode> {
    match storage::list_dir(storage::artifact_dir()) {
        Ok(files) => Ok(Json(ArtifactListResponse { files })),
        Err(e) => {
            tracing::error!("Failed to list artifacts: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn download(Path(filename): Path<String>) -> Result<Response, StatusCode> {
    let path = storage::resolve(&filename).map_err(|e| match e {
        StorageError::NotFound(_) => StatusCode::NOT_FOUND,
        StorageError::InvalidFilename(_) => StatusCode::BAD_REQUEST,
        StorageError::Io(e) => {
            tracing::error!("Failed to resolve artifact {}: {}", filename, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    })?;

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        tracing::error!("Failed to read artifact {}: {}", path.display(), e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((
        [(header::CONTENT_TYPE, storage::content_type_for(&filename))],
        bytes,
    )
        .into_response())
}

pub async fn upload(mut multipart: Multipart) -> Result<Json<UploadArtifactResponse>, StatusCode> {
    let mut file: Option<(String, Bytes)> = None;
    let mut model: Option<String> = None;
    let mut kind: Option<String> = None;
    let mut sample_id: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        StatusCode::BAD_REQUEST
    })? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or(StatusCode::BAD_REQUEST)?;
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!("Failed to read uploaded file: {}", e);
                    StatusCode::BAD_REQUEST
                })?;
                file = Some((filename, data));
            }
            Some("model") => model = Some(read_text(field).await?),
            Some("kind") => kind = Some(read_text(field).await?),
            Some("sample_id") => sample_id = Some(read_text(field).await?),
            _ => {}
        }
    }

    let (filename, data) = file.ok_or(StatusCode::BAD_REQUEST)?;
    let model = model.ok_or(StatusCode::BAD_REQUEST)?;
    let kind = kind.ok_or(StatusCode::BAD_REQUEST)?;

    // The model and sample id end up in the storage name too, so the
    // composed name must be validated, not just the client filename.
    let save_name = storage::save_name(&model, sample_id.as_deref(), &filename);
    if !storage::is_safe_filename(&save_name) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let path = storage::artifact_dir().join(&save_name);

    tokio::fs::write(&path, &data).await.map_err(|e| {
        tracing::error!("Failed to save artifact {}: {}", path.display(), e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::info!("Saved {} artifact: {}", kind, save_name);

    Ok(Json(UploadArtifactResponse {
        message: "uploaded".to_string(),
        path: path.display().to_string(),
        url: format!("/shap/download/{}", save_name),
    }))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, StatusCode> {
    field.text().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        StatusCode::BAD_REQUEST
    })
}
