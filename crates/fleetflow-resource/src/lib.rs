//! FleetFlow workflow resources
//!
//! This crate defines the contract between the workflow orchestrator and the
//! externally managed resources a workflow needs (compute clusters and the
//! like). The orchestrator only ever sees three operations and an opaque
//! instance spec it stores verbatim.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              Workflow orchestrator               │
//! │        (decides when to create / poll / stop)    │
//! └─────────────────┬───────────────────────────────┘
//!                   │  instance spec (serde_json::Value)
//! ┌─────────────────▼───────────────────────────────┐
//! │               fleetflow-resource                 │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │  trait Resource { create, get_status,    │   │
//! │  │                   terminate }            │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │ Retry policy │  │   Settings   │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼────────────────┐
//! │ fleetflow-resource-emr │
//! │     (AWS EMR)          │
//! └────────────────────────┘
//! ```

pub mod error;
pub mod resource;
pub mod retry;
pub mod settings;

// Re-exports
pub use error::{BoxError, ResourceError, Result};
pub use resource::{Resource, ResourceConf, ResourceKind, ResourceStatus};
pub use retry::{Classify, ErrorClass, RetryConfig, RetryError, retry, retry_with};
pub use settings::ResourceSettings;
