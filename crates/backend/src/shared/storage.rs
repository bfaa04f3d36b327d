//! Flat-file artifact store.
//!
//! Artifacts live in a single directory; the filename is the identity.
//! Uploads are prefixed with the model name (and optional sample id) so
//! files from different runs do not collide.

use contracts::artifacts::ArtifactFile;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

static ARTIFACT_DIR: OnceCell<PathBuf> = OnceCell::new();

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("invalid filename: {0}")]
    InvalidFilename(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Create the artifact directory and remember it for the process lifetime.
/// Must be called once at startup, before any handler runs.
pub fn init_storage(dir: PathBuf) -> anyhow::Result<()> {
    std::fs::create_dir_all(&dir)?;
    ARTIFACT_DIR
        .set(dir)
        .map_err(|_| anyhow::anyhow!("storage already initialized"))?;
    Ok(())
}

pub fn artifact_dir() -> &'static Path {
    ARTIFACT_DIR.get().expect("Storage not initialized").as_path()
}

/// A filename is safe when it names a single entry inside the artifact
/// directory: no path separators, no parent references.
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && name != "."
        && name != ".."
}

/// Storage name for an uploaded file: `{model}_{sample_id}_{filename}`,
/// or `{model}_{filename}` when no sample id was provided.
pub fn save_name(model: &str, sample_id: Option<&str>, filename: &str) -> String {
    match sample_id {
        Some(sample_id) if !sample_id.is_empty() => format!("{}_{}_{}", model, sample_id, filename),
        _ => format!("{}_{}", model, filename),
    }
}

/// List the artifacts in `dir`, sorted by filename.
/// Subdirectories and entries with non-UTF-8 names are skipped.
pub fn list_dir(dir: &Path) -> std::io::Result<Vec<ArtifactFile>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Ok(filename) = entry.file_name().into_string() else {
            continue;
        };
        files.push(ArtifactFile {
            url: format!("/shap/download/{}", filename),
            filename,
        });
    }
    files.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(files)
}

/// Resolve a download filename to its path inside the artifact directory.
pub fn resolve(filename: &str) -> Result<PathBuf, StorageError> {
    if !is_safe_filename(filename) {
        return Err(StorageError::InvalidFilename(filename.to_string()));
    }
    let path = artifact_dir().join(filename);
    if !path.is_file() {
        return Err(StorageError::NotFound(filename.to_string()));
    }
    Ok(path)
}

/// Content type for serving a stored file, inferred from the filename
/// suffix. The browser renders previews from these URLs, so images and
/// HTML must not fall back to octet-stream.
pub fn content_type_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "html" => "text/html; charset=utf-8",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_name_with_sample_id() {
        assert_eq!(
            save_name("xgb", Some("42"), "summary.png"),
            "xgb_42_summary.png"
        );
    }

    #[test]
    fn test_save_name_without_sample_id() {
        assert_eq!(save_name("xgb", None, "summary.png"), "xgb_summary.png");
        assert_eq!(save_name("xgb", Some(""), "summary.png"), "xgb_summary.png");
    }

    #[test]
    fn test_save_name_traversal_rejected() {
        // Hostile form fields must not produce a name that escapes the
        // artifact directory once joined.
        assert!(!is_safe_filename(&save_name("../evil", None, "a.png")));
        assert!(!is_safe_filename(&save_name("xgb", Some("../../tmp"), "a.png")));
        assert!(!is_safe_filename(&save_name("xgb", None, "../a.png")));
        assert!(!is_safe_filename(&save_name("m\\odel", None, "a.png")));
        assert!(is_safe_filename(&save_name("xgb", Some("42"), "a.png")));
    }

    #[test]
    fn test_safe_filename() {
        assert!(is_safe_filename("model_summary.png"));
        assert!(is_safe_filename("force_plot.html"));
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename(".."));
        assert!(!is_safe_filename("../secret"));
        assert!(!is_safe_filename("a/b.png"));
        assert!(!is_safe_filename("a\\b.png"));
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("a.gif"), "image/gif");
        assert_eq!(content_type_for("plot.html"), "text/html; charset=utf-8");
        assert_eq!(content_type_for("data.bin"), "application/octet-stream");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }

    #[test]
    fn test_list_dir_sorted() {
        let dir = std::env::temp_dir().join(format!("artifact-store-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("b.png"), b"b").unwrap();
        std::fs::write(dir.join("a.html"), b"a").unwrap();
        std::fs::create_dir_all(dir.join("subdir")).unwrap();

        let files = list_dir(&dir).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["a.html", "b.png"]);
        assert_eq!(files[0].url, "/shap/download/a.html");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
