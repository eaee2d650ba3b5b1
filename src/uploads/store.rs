use super::local::LocalUploads;
use super::s3::S3Mirror;
use crate::types::error::ApiError;
use crate::uploads::UploadStream;
use bytes::Bytes;

/// Outcome of the mirror phase of a two-phase upload write. The local write
/// must succeed; the mirror result is reported instead of being swallowed,
/// so callers can tell local-only success from dual-backend success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorStatus {
    Mirrored,
    NotConfigured,
    Failed,
}

impl MirrorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MirrorStatus::Mirrored => "mirrored",
            MirrorStatus::NotConfigured => "none",
            MirrorStatus::Failed => "failed",
        }
    }

    /// Worst of two statuses, for requests carrying several files
    pub fn combine(self, other: MirrorStatus) -> MirrorStatus {
        match (self, other) {
            (MirrorStatus::Failed, _) | (_, MirrorStatus::Failed) => MirrorStatus::Failed,
            (MirrorStatus::Mirrored, _) | (_, MirrorStatus::Mirrored) => MirrorStatus::Mirrored,
            _ => MirrorStatus::NotConfigured,
        }
    }
}

/// Result of storing one upload
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Reference path persisted on documents, always local: `/uploads/{name}`
    pub reference: String,
    pub mirror: MirrorStatus,
}

/// Upload store composing the local backend with an optional S3 mirror
pub struct UploadStore {
    local: LocalUploads,
    mirror: Option<S3Mirror>,
}

impl UploadStore {
    pub fn new(local: LocalUploads, mirror: Option<S3Mirror>) -> Self {
        Self { local, mirror }
    }

    /// Store file bytes under a timestamp-prefixed name. Writes locally
    /// first, then replicates to the mirror when one is configured. A mirror
    /// failure never fails the request; it is reported in the result.
    pub async fn store(&self, original_name: &str, data: Bytes) -> Result<StoredUpload, ApiError> {
        let stored_name = format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            sanitize_filename(original_name)
        );

        self.local.store(&stored_name, &data).await?;

        let mirror = match &self.mirror {
            None => MirrorStatus::NotConfigured,
            Some(mirror) => match mirror.replicate(&stored_name, data).await {
                Ok(()) => MirrorStatus::Mirrored,
                Err(e) => {
                    tracing::warn!("Upload {} stored locally only: {}", stored_name, e);
                    MirrorStatus::Failed
                }
            },
        };

        Ok(StoredUpload {
            reference: format!("/uploads/{}", stored_name),
            mirror,
        })
    }

    /// Resolve a stored name back to its bytes. Reads always come from the
    /// local backend. Names with path separators are rejected outright.
    pub async fn open(&self, name: &str) -> Result<(UploadStream, u64), ApiError> {
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(ApiError::NotFound("Upload".to_string()));
        }

        self.local.open(name).await
    }
}

/// Keep stored names shell- and URL-safe: anything outside a conservative
/// character set becomes an underscore
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
