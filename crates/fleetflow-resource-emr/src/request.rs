//! Launch request construction
//!
//! Turning an [`EmrClusterSpec`] into a [`LaunchClusterRequest`] is pure: the
//! same spec, name and log URI always produce the same request.

use crate::spec::{BootstrapActionSpec, ConfigurationSpec, EmrClusterSpec, TagSpec};
use std::collections::BTreeMap;

/// Backend-facing "launch cluster" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchClusterRequest {
    pub name: String,
    pub release_label: String,
    pub applications: Vec<String>,
    pub service_role: String,
    pub job_flow_role: String,
    pub log_uri: Option<String>,
    /// Always sent, empty when the spec has no tags
    pub tags: Vec<ClusterTag>,
    pub bootstrap_actions: Option<Vec<BootstrapAction>>,
    pub configurations: Option<Vec<ClusterConfiguration>>,
    pub instances: InstancesRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterTag {
    pub key: String,
    pub value: String,
}

/// Script-based bootstrap action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAction {
    pub name: String,
    pub path: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfiguration {
    pub classification: String,
    pub properties: Option<BTreeMap<String, String>>,
    pub configurations: Option<Vec<ClusterConfiguration>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstancesRequest {
    pub subnet_id: String,
    pub key_name: String,
    pub instance_count: u32,
    pub master_instance_type: String,
    pub slave_instance_type: String,
    pub keep_alive_when_no_steps: bool,
    pub additional_master_security_groups: Option<Vec<String>>,
    pub additional_slave_security_groups: Option<Vec<String>>,
}

/// Build the launch request for cluster `name`
pub fn build_launch_request(
    name: &str,
    spec: &EmrClusterSpec,
    log_uri_base: Option<&str>,
) -> LaunchClusterRequest {
    let instances = &spec.instances;

    LaunchClusterRequest {
        name: name.to_string(),
        release_label: spec.release_label.clone(),
        applications: spec.applications.clone(),
        service_role: spec.service_role.clone(),
        job_flow_role: spec.job_flow_role.clone(),
        log_uri: log_uri_base.map(|base| cluster_log_uri(base, name)),
        tags: spec
            .tags
            .as_deref()
            .map(|tags| tags.iter().map(to_cluster_tag).collect())
            .unwrap_or_default(),
        bootstrap_actions: spec
            .bootstrap_actions
            .as_deref()
            .map(|actions| actions.iter().map(to_bootstrap_action).collect()),
        configurations: spec
            .configurations
            .as_deref()
            .map(to_cluster_configurations),
        instances: InstancesRequest {
            subnet_id: instances.subnet_id.clone(),
            key_name: instances.ec2_key_name.clone(),
            instance_count: instances.instance_count,
            master_instance_type: instances.master_instance_type.clone(),
            slave_instance_type: instances.slave_instance_type.clone(),
            // Only terminate() ends the cluster
            keep_alive_when_no_steps: true,
            additional_master_security_groups: instances.additional_master_security_groups.clone(),
            additional_slave_security_groups: instances.additional_slave_security_groups.clone(),
        },
    }
}

/// `<base>/<name>/`
pub fn cluster_log_uri(base: &str, name: &str) -> String {
    format!("{}/{}/", base.trim_end_matches('/'), name)
}

fn to_cluster_tag(tag: &TagSpec) -> ClusterTag {
    ClusterTag {
        key: tag.key.clone(),
        value: tag.value.clone(),
    }
}

fn to_bootstrap_action(action: &BootstrapActionSpec) -> BootstrapAction {
    BootstrapAction {
        name: bootstrap_action_name(&action.path),
        path: action.path.clone(),
        args: action.args.clone(),
    }
}

/// Script file name, or the whole path if it has none
fn bootstrap_action_name(path: &str) -> String {
    match path.rsplit('/').next() {
        Some(file) if !file.is_empty() => file.to_string(),
        _ => path.to_string(),
    }
}

fn to_cluster_configurations(configs: &[ConfigurationSpec]) -> Vec<ClusterConfiguration> {
    configs.iter().map(to_cluster_configuration).collect()
}

fn to_cluster_configuration(config: &ConfigurationSpec) -> ClusterConfiguration {
    ClusterConfiguration {
        classification: config.classification.clone(),
        properties: config.properties.clone(),
        configurations: config
            .configurations
            .as_deref()
            .map(to_cluster_configurations),
    }
}
