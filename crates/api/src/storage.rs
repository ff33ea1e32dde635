//! Object storage for project artifacts.
//!
//! Artifacts are stored under keys of the form `{project_id}/{file_name}`
//! with the uploader's username and email attached as object metadata.
//! The store is trait-fronted so tests can substitute an in-memory
//! implementation.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::config::ArtifactConfig;

/// Metadata recorded against every stored artifact.
#[derive(Debug, Clone, Default)]
pub struct ArtifactMetadata {
    pub username: String,
    pub email: String,
}

/// Failures from the artifact store.
#[derive(Debug, thiserror::Error)]
#[error("Object store error: {0}")]
pub struct StoreError(pub String);

/// Provider-agnostic artifact storage.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key`, overwriting any existing object.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        metadata: &ArtifactMetadata,
    ) -> Result<(), StoreError>;

    /// Fetch the object at `key`, or `None` if it does not exist.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
}

/// S3-backed artifact store.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Build a client from the ambient AWS environment plus the artifact
    /// configuration. An `endpoint` override points the client at a
    /// local S3-compatible service.
    pub async fn from_config(config: &ArtifactConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        // S3-compatible services generally require path-style addressing.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint.is_some())
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        metadata: &ArtifactMetadata,
    ) -> Result<(), StoreError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .metadata("username", &metadata.username)
            .metadata("email", &metadata.email)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_no_such_key() {
                    return Ok(None);
                }
                return Err(StoreError(service_err.to_string()));
            }
        };

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(Some(bytes.into_bytes().to_vec()))
    }
}
