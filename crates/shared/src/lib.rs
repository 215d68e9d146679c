//! Shared configuration for the contact relay.
//!
//! This crate provides the configuration tree consumed by the other
//! workspace crates:
//! - Server bind address
//! - Email delivery provider credentials and addresses
//! - Attachment storage provider selection

pub mod config;

pub use config::{AppConfig, DeliveryConfig, ServerConfig, StorageProvider};
