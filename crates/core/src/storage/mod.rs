//! Attachment blob storage using Apache OpenDAL.
//!
//! This module provides vendor-agnostic object storage access with
//! support for:
//! - S3-compatible: Cloudflare R2, Supabase Storage, AWS S3
//! - Azure Blob Storage
//! - Local filesystem (development only)
//!
//! The relay only ever reads and deletes keys it was explicitly handed
//! in a submission; it never lists or touches unrelated objects in the
//! bucket.

mod error;
mod service;

pub use error::StorageError;
pub use service::BlobStore;
