//! EMR native cluster states and their orchestrator status

use fleetflow_resource::ResourceStatus;

/// Cluster state as reported by `DescribeCluster`
///
/// Mirrors `aws_sdk_emr::types::ClusterState` so control planes other than
/// the SDK one can report states without depending on `aws-sdk-emr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterState {
    Bootstrapping,
    Running,
    Starting,
    Terminated,
    TerminatedWithErrors,
    Terminating,
    Waiting,
    /// A state this crate does not know about
    Unknown(String),
}

impl ClusterState {
    pub fn parse(state: &str) -> Self {
        match state {
            "BOOTSTRAPPING" => ClusterState::Bootstrapping,
            "RUNNING" => ClusterState::Running,
            "STARTING" => ClusterState::Starting,
            "TERMINATED" => ClusterState::Terminated,
            "TERMINATED_WITH_ERRORS" => ClusterState::TerminatedWithErrors,
            "TERMINATING" => ClusterState::Terminating,
            "WAITING" => ClusterState::Waiting,
            other => ClusterState::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ClusterState::Bootstrapping => "BOOTSTRAPPING",
            ClusterState::Running => "RUNNING",
            ClusterState::Starting => "STARTING",
            ClusterState::Terminated => "TERMINATED",
            ClusterState::TerminatedWithErrors => "TERMINATED_WITH_ERRORS",
            ClusterState::Terminating => "TERMINATING",
            ClusterState::Waiting => "WAITING",
            ClusterState::Unknown(state) => state.as_str(),
        }
    }

    /// Collapse onto the orchestrator's status vocabulary
    ///
    /// An idle (`WAITING`) cluster counts as running, and a cluster that is
    /// shutting down already counts as finished. `None` for unknown states.
    pub fn status(&self) -> Option<ResourceStatus> {
        match self {
            ClusterState::Bootstrapping | ClusterState::Starting => Some(ResourceStatus::Activating),
            ClusterState::Running | ClusterState::Waiting => Some(ResourceStatus::Running),
            ClusterState::Terminating | ClusterState::Terminated => Some(ResourceStatus::Finished),
            ClusterState::TerminatedWithErrors => Some(ResourceStatus::Failed),
            ClusterState::Unknown(_) => None,
        }
    }
}

impl std::fmt::Display for ClusterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
