//! Local storage for uploaded menu images.
//!
//! Files land in `<public_dir>/uploads/` under a random name and are
//! referenced by their public path (`/uploads/<name>`), which is what gets
//! stored on the menu item. The public directory itself is served as static
//! files by the router, so only content that decodes as a picture in one of
//! [`SUPPORTED_FORMATS`] is ever written there.

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use image::ImageFormat;

use eatery_domain::error::{EateryError, ValidationError};

/// Sub-directory of the public directory holding uploads.
pub const UPLOADS_SUBDIR: &str = "uploads";

/// Maximum accepted request body for admin forms carrying an image.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// File extensions accepted for menu pictures.
pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// An uploaded picture that passed [`ImageUpload::validate`].
#[derive(Debug)]
pub struct ImageUpload {
    extension: String,
    bytes: Bytes,
}

impl ImageUpload {
    /// Check the client file name and the content of an upload.
    ///
    /// The extension must be one of [`SUPPORTED_FORMATS`], the bytes must be
    /// of that same format and they must decode.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedImage`] for a missing or
    /// unlisted extension, and [`ValidationError::InvalidImage`] when the
    /// content does not match it or cannot be decoded.
    pub fn validate(original_name: Option<&str>, bytes: Bytes) -> Result<Self, ValidationError> {
        let extension = extension(original_name);
        let claimed = SUPPORTED_FORMATS
            .contains(&extension.as_str())
            .then(|| ImageFormat::from_extension(&extension))
            .flatten()
            .ok_or_else(|| ValidationError::UnsupportedImage {
                extension: extension.clone(),
            })?;

        let detected = image::guess_format(&bytes).map_err(|err| ValidationError::InvalidImage {
            reason: err.to_string(),
        })?;
        if detected != claimed {
            return Err(ValidationError::InvalidImage {
                reason: format!("content does not match the .{extension} extension"),
            });
        }
        image::load_from_memory_with_format(&bytes, detected).map_err(|err| {
            ValidationError::InvalidImage {
                reason: err.to_string(),
            }
        })?;

        Ok(Self { extension, bytes })
    }
}

/// Writes uploaded files below a public directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    public_dir: PathBuf,
}

impl UploadStore {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    /// Directory served as static files.
    #[must_use]
    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// Persist a validated picture and return the public path referencing it.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Storage`] if the directory cannot be created or
    /// the file cannot be written.
    pub async fn save(&self, upload: &ImageUpload) -> Result<String, EateryError> {
        let dir = self.public_dir.join(UPLOADS_SUBDIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|err| EateryError::Storage(Box::new(err)))?;

        let file_name = format!("{}.{}", uuid::Uuid::new_v4(), upload.extension);
        tokio::fs::write(dir.join(&file_name), &upload.bytes)
            .await
            .map_err(|err| EateryError::Storage(Box::new(err)))?;

        tracing::debug!(file = %file_name, size = upload.bytes.len(), "upload stored");
        Ok(format!("/{UPLOADS_SUBDIR}/{file_name}"))
    }

    /// Delete a file previously returned by [`save`](Self::save).
    ///
    /// Paths that do not point into the uploads directory are ignored and
    /// failures are only logged.
    pub async fn remove(&self, public_path: &str) {
        let Some(file_name) = stored_file_name(public_path) else {
            return;
        };
        let path = self.public_dir.join(UPLOADS_SUBDIR).join(file_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!(file = %file_name, "upload removed"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(file = %file_name, error = %err, "failed to remove upload"),
        }
    }
}

/// Lower-cased extension of the client file name, empty if none.
fn extension(original_name: Option<&str>) -> String {
    original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

/// File name below the uploads directory, if `public_path` names one.
fn stored_file_name(public_path: &str) -> Option<&str> {
    public_path
        .strip_prefix(&format!("/{UPLOADS_SUBDIR}/"))
        .filter(|name| {
            !name.is_empty()
                && !name.starts_with('.')
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        })
}
