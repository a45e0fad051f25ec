//! Instance spec codec
//!
//! The instance spec is everything the orchestrator persists about a live
//! cluster: `{"clusterId": "<id>"}`, nothing more.

use fleetflow_resource::{ResourceError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstanceSpec {
    pub cluster_id: String,
}

impl InstanceSpec {
    pub fn new(cluster_id: impl Into<String>) -> Self {
        Self {
            cluster_id: cluster_id.into(),
        }
    }

    pub fn encode(&self) -> serde_json::Value {
        encode(&self.cluster_id)
    }

    /// Decode a persisted instance spec
    ///
    /// Anything other than an object with exactly one string `clusterId`
    /// field is a [`ResourceError::SpecDecode`].
    pub fn decode(value: &serde_json::Value) -> Result<Self> {
        // Derived struct deserializers also accept sequences; only objects are specs
        serde_json::Map::<String, serde_json::Value>::deserialize(value)
            .and_then(|fields| serde_json::from_value(serde_json::Value::Object(fields)))
            .map_err(|source| ResourceError::SpecDecode {
                what: "instance spec",
                source,
            })
    }
}

/// Encode a cluster id as an instance spec
pub fn encode(cluster_id: &str) -> serde_json::Value {
    serde_json::json!({ "clusterId": cluster_id })
}
