//! EMR control-plane abstraction

use crate::error::BackendResult;
use crate::request::LaunchClusterRequest;
use crate::status::ClusterState;
use async_trait::async_trait;

/// The three EMR calls the cluster resource needs
///
/// [`crate::AwsEmrControlPlane`] talks to AWS; tests substitute scripted fakes.
/// Implementations make exactly one backend call per method invocation and
/// leave retrying to the caller.
#[async_trait]
pub trait EmrControlPlane: Send + Sync {
    /// Launch a cluster and return its id
    async fn launch_cluster(&self, request: &LaunchClusterRequest) -> BackendResult<String>;

    /// Current native state of a cluster
    async fn describe_cluster(&self, cluster_id: &str) -> BackendResult<ClusterState>;

    /// Ask the backend to terminate a cluster
    async fn terminate_cluster(&self, cluster_id: &str) -> BackendResult<()>;
}
