//! EMR cluster request spec
//!
//! The kind-specific part of a resource definition. It is decoded once when
//! the adapter is built and never persisted by the adapter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything needed to launch one cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmrClusterSpec {
    /// Release label, e.g. "emr-6.15.0"
    pub release_label: String,

    /// Applications to install, e.g. ["Hadoop", "Spark"]
    pub applications: Vec<String>,

    /// IAM role the EMR service assumes
    pub service_role: String,

    /// Instance profile for the cluster nodes
    pub job_flow_role: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagSpec>>,

    /// Run at node startup, in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_actions: Option<Vec<BootstrapActionSpec>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Vec<ConfigurationSpec>>,

    pub instances: InstancesSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagSpec {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapActionSpec {
    /// Script location, usually an s3:// URI
    pub path: String,

    #[serde(default)]
    pub args: Vec<String>,
}

/// One node of the configuration override tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationSpec {
    /// e.g. "spark-defaults", "hadoop-env", "export"
    pub classification: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Vec<ConfigurationSpec>>,
}

/// Node topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstancesSpec {
    pub subnet_id: String,
    pub ec2_key_name: String,
    pub instance_count: u32,
    pub master_instance_type: String,
    pub slave_instance_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_master_security_groups: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_slave_security_groups: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_spec() {
        let spec: EmrClusterSpec = serde_json::from_value(json!({
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
        }))
        .unwrap();

        assert_eq!(spec.applications, vec!["Hadoop", "Spark"]);
        assert_eq!(spec.instances.instance_count, 3);
        assert!(spec.tags.is_none());
        assert!(spec.bootstrap_actions.is_none());
        assert!(spec.configurations.is_none());
        assert!(spec.instances.additional_master_security_groups.is_none());
    }

    #[test]
    fn test_nested_configurations() {
        let config: ConfigurationSpec = serde_json::from_value(json!({
            "classification": "hadoop-env",
            "configurations": [
                {
                    "classification": "export",
                    "properties": { "JAVA_HOME": "/usr/lib/jvm/java-11" }
                }
            ]
        }))
        .unwrap();

        assert!(config.properties.is_none());
        let children = config.configurations.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].classification, "export");
        assert!(children[0].configurations.is_none());
        assert_eq!(
            children[0].properties.as_ref().unwrap()["JAVA_HOME"],
            "/usr/lib/jvm/java-11"
        );
    }

    #[test]
    fn test_bootstrap_args_default_empty() {
        let action: BootstrapActionSpec =
            serde_json::from_value(json!({ "path": "s3://b/setup.sh" })).unwrap();
        assert!(action.args.is_empty());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = serde_json::from_value::<TagSpec>(json!({
            "key": "team",
            "value": "data",
            "propagate": true
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `propagate`"), "{err}");

        let err = serde_json::from_value::<ConfigurationSpec>(json!({
            "classification": "spark-defaults",
            "configurations": [{ "classification": "export", "props": {} }]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `props`"), "{err}");
    }

    #[test]
    fn test_negative_instance_count_rejected() {
        let result = serde_json::from_value::<InstancesSpec>(json!({
            "subnetId": "subnet-0abc",
            "ec2KeyName": "ops",
            "instanceCount": -1,
            "masterInstanceType": "m5.xlarge",
            "slaveInstanceType": "m5.xlarge"
        }));
        assert!(result.is_err());
    }
}
