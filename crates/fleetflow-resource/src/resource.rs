//! Resource lifecycle contract
//!
//! Every resource kind (EMR clusters today) implements [`Resource`] so the
//! workflow orchestrator can drive it through create → status → terminate
//! without knowing anything about the backend.

use crate::error::{ResourceError, Result};
use crate::settings::ResourceSettings;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Lifecycle operations on one externally managed resource
///
/// Implementations hold no mutable state between calls. Everything needed to
/// find the live resource again travels in the instance spec returned by
/// [`Resource::create`], which the orchestrator stores and hands back verbatim.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Derived resource name (see [`ResourceConf::resource_name`])
    fn name(&self) -> &str;

    /// Provision the resource and return its instance spec
    ///
    /// A failed create does not guarantee the backend created nothing.
    async fn create(&self) -> Result<serde_json::Value>;

    /// Current status of the resource identified by `instance`
    async fn get_status(&self, instance: &serde_json::Value) -> Result<ResourceStatus>;

    /// Request termination of the resource identified by `instance`
    async fn terminate(&self, instance: &serde_json::Value) -> Result<ResourceStatus>;
}

/// A resource kind that can be built from an orchestrator resource definition
pub trait ResourceKind: Resource + Sized {
    /// Kind name used to dispatch resource definitions (e.g. "emr")
    const KIND: &'static str;

    /// Handle to the backend control plane
    type Backend;

    /// Validate `conf.spec` and bind an adapter to the derived resource name
    fn decode(conf: &ResourceConf, settings: &ResourceSettings, backend: Self::Backend)
    -> Result<Self>;
}

/// Resource definition handed over by the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceConf {
    pub workflow_id: String,
    pub resource_id: String,
    pub instance_id: String,

    /// Kind-specific request spec
    pub spec: serde_json::Value,
}

impl ResourceConf {
    pub fn new(
        workflow_id: impl Into<String>,
        resource_id: impl Into<String>,
        instance_id: impl Into<String>,
        spec: serde_json::Value,
    ) -> Self {
        Self {
            workflow_id: workflow_id.into(),
            resource_id: resource_id.into(),
            instance_id: instance_id.into(),
            spec,
        }
    }

    /// `<workflowId>_rsc-<resourceId>_<instanceId>`
    ///
    /// Unique as long as the orchestrator's ids are.
    pub fn resource_name(&self) -> String {
        format!(
            "{}_rsc-{}_{}",
            self.workflow_id, self.resource_id, self.instance_id
        )
    }

    /// Decode the kind-specific spec into `T`
    pub fn decode_spec<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.spec.clone()).map_err(|source| ResourceError::SpecDecode {
            what: "resource spec",
            source,
        })
    }
}

/// Orchestrator-level lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    /// Being provisioned
    Activating,
    /// Up and able to take work
    Running,
    /// Stopped or stopping
    Finished,
    /// Stopped with errors
    Failed,
}

impl ResourceStatus {
    /// No further transitions expected
    pub fn is_terminal(&self) -> bool {
        matches!(self, ResourceStatus::Finished | ResourceStatus::Failed)
    }
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceStatus::Activating => write!(f, "activating"),
            ResourceStatus::Running => write!(f, "running"),
            ResourceStatus::Finished => write!(f, "finished"),
            ResourceStatus::Failed => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_name() {
        let conf = ResourceConf::new("wf-42", "cluster", "7", json!({}));
        assert_eq!(conf.resource_name(), "wf-42_rsc-cluster_7");
    }

    #[test]
    fn test_decode_spec_error_is_spec_error() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Spec {
            name: String,
        }

        let conf = ResourceConf::new("wf", "r", "i", json!({ "name": 1 }));
        let err = conf.decode_spec::<Spec>().unwrap_err();
        assert!(err.is_spec_error());
        assert!(err.to_string().contains("resource spec"));
    }

    #[test]
    fn test_resource_conf_json_shape() {
        let conf: ResourceConf = serde_json::from_value(json!({
            "workflowId": "wf",
            "resourceId": "r",
            "instanceId": "i",
            "spec": { "a": 1 }
        }))
        .unwrap();
        assert_eq!(conf.resource_name(), "wf_rsc-r_i");
        assert_eq!(conf.spec["a"], 1);
    }

    #[test]
    fn test_status_display_and_serde() {
        assert_eq!(ResourceStatus::Activating.to_string(), "activating");
        assert_eq!(
            serde_json::to_value(ResourceStatus::Finished).unwrap(),
            json!("finished")
        );
        assert!(ResourceStatus::Failed.is_terminal());
        assert!(!ResourceStatus::Running.is_terminal());
    }
}
