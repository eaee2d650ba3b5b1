use crate::types::error::ApiError;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

/// Remote S3 mirror for uploads. Binaries are replicated here after the
/// local write succeeds; reads are always served from the local backend.
pub struct S3Mirror {
    client: S3Client,
    bucket: String,
}

impl S3Mirror {
    pub async fn new(
        bucket: String,
        region: String,
        endpoint: Option<String>,
        force_path_style: bool,
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    ) -> Result<Self, ApiError> {
        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region));

        // Set credentials if provided, otherwise fall back to the ambient chain
        if let (Some(key_id), Some(secret_key)) = (access_key_id, secret_access_key) {
            config_loader = config_loader.credentials_provider(
                aws_sdk_s3::config::Credentials::new(key_id, secret_key, None, None, "static"),
            );
        }

        let config = config_loader.load().await;

        let mut s3_config_builder =
            aws_sdk_s3::config::Builder::from(&config).force_path_style(force_path_style);

        if let Some(endpoint_url) = endpoint {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint_url);
        }

        let client = S3Client::from_conf(s3_config_builder.build());

        Ok(Self { client, bucket })
    }

    /// Check the bucket is reachable at startup
    pub async fn head_bucket(&self) -> Result<(), ApiError> {
        tracing::debug!("[{}] Checking mirror bucket", self.bucket);

        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("[{}] Mirror bucket not accessible: {}", self.bucket, e);
                ApiError::Storage(format!("Mirror bucket not accessible: {}", e))
            })?;

        Ok(())
    }

    pub async fn replicate(&self, name: &str, data: Bytes) -> Result<(), ApiError> {
        tracing::debug!("[{}] Replicating upload: {}", self.bucket, name);

        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(name)
            .body(ByteStream::from(data))
            .send()
            .await;

        match result {
            Ok(_) => {
                tracing::info!("[{}] Successfully replicated upload: {}", self.bucket, name);
                Ok(())
            }
            Err(err) => {
                tracing::error!("[{}] Failed to replicate upload {}: {}", self.bucket, name, err);
                Err(ApiError::Storage(format!(
                    "Failed to replicate to {}: {}",
                    self.bucket, err
                )))
            }
        }
    }
}
