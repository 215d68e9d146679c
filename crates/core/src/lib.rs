//! Core domain logic for the contact relay.
//!
//! This crate contains everything between the HTTP surface and the
//! external providers: the submission types, the storage and delivery
//! collaborators, and the orchestration that turns one contact-form
//! submission into one delivered email.
//!
//! # Modules
//!
//! - `relay` - The ContactRelay orchestration service and its collaborator traits
//! - `storage` - Attachment blob store built on Apache OpenDAL
//! - `delivery` - Email delivery client for a Resend-compatible HTTP API

pub mod delivery;
pub mod relay;
pub mod storage;
