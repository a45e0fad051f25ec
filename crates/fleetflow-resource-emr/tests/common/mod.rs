use async_trait::async_trait;
use fleetflow_resource_emr::{
    BackendError, BackendResult, ClusterState, EmrControlPlane, LaunchClusterRequest,
};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted control plane that records every call
///
/// Each queue is consumed one entry per call; an empty queue yields the
/// default success (`j-TESTCLUSTER`, `WAITING`, `()`).
#[derive(Default)]
pub struct FakeControlPlane {
    launches: Mutex<VecDeque<BackendResult<String>>>,
    describes: Mutex<VecDeque<BackendResult<ClusterState>>>,
    terminates: Mutex<VecDeque<BackendResult<()>>>,
    pub calls: Mutex<Vec<Call>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Launch(LaunchClusterRequest),
    Describe(String),
    Terminate(String),
}

#[allow(dead_code)]
impl FakeControlPlane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_launch(&self, result: BackendResult<String>) {
        self.launches.lock().unwrap().push_back(result);
    }

    pub fn push_describe(&self, result: BackendResult<ClusterState>) {
        self.describes.lock().unwrap().push_back(result);
    }

    pub fn push_terminate(&self, result: BackendResult<()>) {
        self.terminates.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl EmrControlPlane for FakeControlPlane {
    async fn launch_cluster(&self, request: &LaunchClusterRequest) -> BackendResult<String> {
        self.record(Call::Launch(request.clone()));
        self.launches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("j-TESTCLUSTER".to_string()))
    }

    async fn describe_cluster(&self, cluster_id: &str) -> BackendResult<ClusterState> {
        self.record(Call::Describe(cluster_id.to_string()));
        self.describes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(ClusterState::Waiting))
    }

    async fn terminate_cluster(&self, cluster_id: &str) -> BackendResult<()> {
        self.record(Call::Terminate(cluster_id.to_string()));
        self.terminates.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

#[allow(dead_code)]
pub fn throttled() -> BackendError {
    BackendError::transient("Rate exceeded").with_code("ThrottlingException")
}

#[allow(dead_code)]
pub fn invalid_request() -> BackendError {
    BackendError::permanent("Subnet does not exist").with_code("InvalidRequestException")
}

/// Minimal request spec: Hadoop + Spark, three nodes
pub fn minimal_spec() -> serde_json::Value {
    json!({
        "releaseLabel": "emr-6.15.0",
        "applications": ["Hadoop", "Spark"],
        "serviceRole": "EMR_DefaultRole",
        "jobFlowRole": "EMR_EC2_DefaultRole",
        "instances": {
            "subnetId": "subnet-0abc",
            "ec2KeyName": "ops",
            "instanceCount": 3,
            "masterInstanceType": "m5.xlarge",
            "slaveInstanceType": "m5.2xlarge"
        }
    })
}
