//! Blob store implementation using Apache OpenDAL.

use opendal::{Operator, services};
use relay_shared::StorageProvider;
use tracing::debug;

use super::error::StorageError;
use crate::relay::AttachmentStore;

/// Blob store for uploaded contact attachments.
#[derive(Clone)]
pub struct BlobStore {
    operator: Operator,
}

impl BlobStore {
    /// Create a blob store for the configured provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_provider(provider: &StorageProvider) -> Result<Self, StorageError> {
        let operator = Self::create_operator(provider)?;
        Ok(Self { operator })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let builder = services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
            StorageProvider::AzureBlob {
                account,
                access_key,
                container,
            } => {
                let builder = services::Azblob::default()
                    .account_name(account)
                    .account_key(access_key)
                    .container(container);

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
        }
    }
}

impl AttachmentStore for BlobStore {
    /// Fetch the raw bytes of one uploaded blob.
    async fn download(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let buffer = self.operator.read(key).await.map_err(StorageError::from)?;
        debug!(%key, size = buffer.len(), "downloaded attachment blob");
        Ok(buffer.to_vec())
    }

    /// Remove a set of uploaded blobs, stopping at the first failure.
    async fn remove_all(&self, keys: &[String]) -> Result<(), StorageError> {
        for key in keys {
            self.operator.delete(key).await.map_err(StorageError::from)?;
        }
        Ok(())
    }
}
