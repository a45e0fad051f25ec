//! EMR cluster resource

use crate::control_plane::EmrControlPlane;
use crate::instance::InstanceSpec;
use crate::request::{LaunchClusterRequest, build_launch_request};
use crate::spec::EmrClusterSpec;
use async_trait::async_trait;
use fleetflow_resource::{
    Resource, ResourceConf, ResourceError, ResourceKind, ResourceSettings, ResourceStatus, Result,
    RetryConfig, retry,
};
use std::sync::Arc;

const RUN_JOB_FLOW: &str = "RunJobFlow";
const DESCRIBE_CLUSTER: &str = "DescribeCluster";
const TERMINATE_JOB_FLOWS: &str = "TerminateJobFlows";

/// One EMR cluster, bound to its derived name and request spec
pub struct EmrCluster {
    name: String,
    spec: EmrClusterSpec,
    log_uri: Option<String>,
    retry: RetryConfig,
    backend: Arc<dyn EmrControlPlane>,
}

impl EmrCluster {
    pub fn new(
        name: impl Into<String>,
        spec: EmrClusterSpec,
        settings: &ResourceSettings,
        backend: Arc<dyn EmrControlPlane>,
    ) -> Self {
        Self {
            name: name.into(),
            spec,
            log_uri: settings.log_uri.clone(),
            retry: settings.retry.clone(),
            backend,
        }
    }

    pub fn spec(&self) -> &EmrClusterSpec {
        &self.spec
    }

    /// The request `create` sends
    pub fn launch_request(&self) -> LaunchClusterRequest {
        build_launch_request(&self.name, &self.spec, self.log_uri.as_deref())
    }
}

impl ResourceKind for EmrCluster {
    const KIND: &'static str = "emr";

    type Backend = Arc<dyn EmrControlPlane>;

    fn decode(
        conf: &ResourceConf,
        settings: &ResourceSettings,
        backend: Self::Backend,
    ) -> Result<Self> {
        let spec: EmrClusterSpec = conf.decode_spec()?;
        Ok(Self::new(conf.resource_name(), spec, settings, backend))
    }
}

#[async_trait]
impl Resource for EmrCluster {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create(&self) -> Result<serde_json::Value> {
        let request = self.launch_request();
        tracing::info!(
            "Launching EMR cluster {} ({}, {} nodes)",
            request.name,
            request.release_label,
            request.instances.instance_count
        );
        tracing::debug!("Launch request: {:?}", request);

        let cluster_id = retry(&self.retry, RUN_JOB_FLOW, || {
            self.backend.launch_cluster(&request)
        })
        .await
        .map_err(|e| ResourceError::backend(RUN_JOB_FLOW, e))?;

        tracing::info!("EMR cluster {} launched: {}", self.name, cluster_id);
        Ok(InstanceSpec::new(cluster_id).encode())
    }

    async fn get_status(&self, instance: &serde_json::Value) -> Result<ResourceStatus> {
        let instance = InstanceSpec::decode(instance)?;

        let state = retry(&self.retry, DESCRIBE_CLUSTER, || {
            self.backend.describe_cluster(&instance.cluster_id)
        })
        .await
        .map_err(|e| ResourceError::backend(DESCRIBE_CLUSTER, e))?;

        let status = state.status().ok_or_else(|| ResourceError::ProtocolDrift {
            resource: instance.cluster_id.clone(),
            state: state.to_string(),
        })?;

        tracing::debug!("EMR cluster {} is {} ({})", instance.cluster_id, state, status);
        Ok(status)
    }

    async fn terminate(&self, instance: &serde_json::Value) -> Result<ResourceStatus> {
        let instance = InstanceSpec::decode(instance)?;

        tracing::info!("Terminating EMR cluster {}", instance.cluster_id);
        retry(&self.retry, TERMINATE_JOB_FLOWS, || {
            self.backend.terminate_cluster(&instance.cluster_id)
        })
        .await
        .map_err(|e| ResourceError::backend(TERMINATE_JOB_FLOWS, e))?;

        // Not waiting for TERMINATED; a later get_status observes it
        Ok(ResourceStatus::Finished)
    }
}
