mod local;
mod s3;
mod store;

use crate::types::error::ApiError;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

/// Stream of upload bytes handed back to HTTP responses
pub type UploadStream = Pin<Box<dyn Stream<Item = Result<Bytes, ApiError>> + Send>>;

pub use local::LocalUploads;
pub use s3::S3Mirror;
pub use store::{MirrorStatus, StoredUpload, UploadStore};
