//! # idsight-directory
//!
//! Tenant directory port for the idsight identity analytics pipeline.
//!
//! ## Design Principles
//!
//! - The directory is an external, host-owned service; this crate defines
//!   only the narrow contract the pipeline relies on
//! - A realm is a tenant-scoped view: user existence and role membership
//! - Lookup outcomes are explicit ([`RoleLookup`]) so callers can treat
//!   "no such user" and "lookup failed" differently from "no roles"
//! - An in-memory implementation is provided for tests and development

mod error;
mod memory;
mod realm;

pub use error::DirectoryError;
pub use memory::MemoryDirectory;
pub use realm::{lookup_roles, Directory, Realm, RoleLookup};
