use crate::types::error::ApiError;
use crate::uploads::UploadStream;
use bytes::Bytes;
use futures::stream;
use std::path::{Path, PathBuf};

/// Local filesystem upload backend. This is the primary backend: the
/// references stored on documents always point here.
pub struct LocalUploads {
    dir: PathBuf,
}

impl LocalUploads {
    /// Ensure the upload directory exists. Failure here is fatal at startup
    /// since no upload could ever succeed.
    pub async fn create<P: AsRef<Path>>(dir: P) -> Result<Self, ApiError> {
        let dir = dir.as_ref().to_path_buf();

        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            ApiError::Storage(format!(
                "Failed to create upload dir {}: {}",
                dir.display(),
                e
            ))
        })?;

        tracing::info!("Upload directory ready at {}", dir.display());

        Ok(Self { dir })
    }

    pub async fn store(&self, name: &str, data: &Bytes) -> Result<(), ApiError> {
        let path = self.dir.join(name);

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| ApiError::Storage(format!("Failed to write upload: {}", e)))?;

        tracing::info!("Stored upload {} ({} bytes)", name, data.len());

        Ok(())
    }

    /// Stream the bytes of a stored upload. Uploaded images are small, so
    /// the file is read whole and returned as a single-chunk stream.
    pub async fn open(&self, name: &str) -> Result<(UploadStream, u64), ApiError> {
        let path = self.dir.join(name);

        let data = match tokio::fs::read(&path).await {
            Ok(data) => Bytes::from(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ApiError::NotFound("Upload".to_string()));
            }
            Err(e) => {
                return Err(ApiError::Storage(format!("Failed to read upload: {}", e)));
            }
        };

        let size = data.len() as u64;
        let stream: UploadStream = Box::pin(stream::once(async move { Ok(data) }));

        Ok((stream, size))
    }
}
