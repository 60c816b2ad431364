//! # idsight-publisher
//!
//! The event shaper of the idsight pipeline: receives authentication and
//! session lifecycle notifications from the host identity framework,
//! shapes them into flat positional records, and forwards them to an
//! injected telemetry sink.
//!
//! ## Design Principles
//!
//! - Stateless: every notification is shaped independently; there is no
//!   cross-event memory and no locking
//! - Best-effort enrichment: role lookups degrade to an empty role list,
//!   they never fail a publish
//! - Nothing surfaces to the host: every entry point returns a value on
//!   every path
//! - Collaborators (sink, directory) are constructor-injected trait
//!   objects; there is no global service holder
//!
//! ## Wiring
//!
//! ```ignore
//! let publisher = AnalyticsPublisher::new(
//!     Arc::new(sink),
//!     Arc::new(directory),
//!     FieldDefaults::from_env(),
//! );
//! host.register_listener(Arc::new(publisher));
//! ```

mod config;
mod listener;
mod model;
mod publisher;
mod sink;

pub use config::{fields, FieldDefaults, NOT_AVAILABLE};
pub use listener::AuthEventListener;
pub use model::{AuthenticationData, SessionData};
pub use publisher::{AnalyticsPublisher, LOCAL_IDP_TYPE, PUBLISHER_NAME};
pub use sink::{EventSink, MemorySink};

/// Re-export for consumers that drive session publishing directly.
pub use idsight_events::SessionAction;
