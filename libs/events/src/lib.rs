//! # idsight-events
//!
//! Analytics event types and positional stream schemas for the idsight
//! identity analytics pipeline.
//!
//! ## Design Principles
//!
//! - Events are immutable, flat records shaped from lifecycle notifications
//! - Position encodes meaning: every stream is a named, versioned schema
//!   with a fixed field count, and the consuming side keys on position
//! - Records are named-field structs internally and collapse to the
//!   positional wire layout only at the publish boundary
//! - Timestamps travel as epoch milliseconds
//!
//! ## Streams
//!
//! Two streams are defined:
//! - [`streams::AUTHENTICATION`]: one record per authentication step or
//!   overall authentication outcome (20 fields)
//! - [`streams::SESSION`]: one record per session create/update/terminate
//!   transition (11 fields)

mod error;
mod record;
mod stream;

pub use error::EventError;
pub use record::*;
pub use stream::*;
