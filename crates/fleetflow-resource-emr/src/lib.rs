//! AWS EMR cluster resource for FleetFlow
//!
//! Implements the `fleetflow_resource::Resource` contract for Hadoop/Spark
//! clusters on Amazon EMR.
//!
//! # Features
//!
//! - Launch request building from a JSON request spec (tags, bootstrap
//!   actions, nested configurations, extra security groups)
//! - `{"clusterId": ...}` instance spec codec
//! - Native cluster state → orchestrator status mapping
//! - Uniform retry of every control-plane call
//!
//! # Requirements
//!
//! - AWS credentials available through the default provider chain
//!
//! # Example
//!
//! ```ignore
//! use fleetflow_resource::{Resource, ResourceConf, ResourceKind, ResourceSettings};
//! use fleetflow_resource_emr::{AwsEmrControlPlane, EmrCluster};
//! use std::sync::Arc;
//!
//! let backend = Arc::new(AwsEmrControlPlane::from_env().await);
//! let settings = ResourceSettings::load()?;
//! let cluster = EmrCluster::decode(&conf, &settings, backend)?;
//!
//! let instance = cluster.create().await?;
//! let status = cluster.get_status(&instance).await?;
//! ```

pub mod aws;
pub mod cluster;
pub mod control_plane;
pub mod error;
pub mod instance;
pub mod request;
pub mod spec;
pub mod status;

pub use aws::AwsEmrControlPlane;
pub use cluster::EmrCluster;
pub use control_plane::EmrControlPlane;
pub use error::{BackendError, BackendResult};
pub use instance::InstanceSpec;
pub use request::{LaunchClusterRequest, build_launch_request};
pub use spec::{BootstrapActionSpec, ConfigurationSpec, EmrClusterSpec, InstancesSpec, TagSpec};
pub use status::ClusterState;
