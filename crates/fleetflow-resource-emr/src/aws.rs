//! AWS SDK implementation of the EMR control plane

use crate::control_plane::EmrControlPlane;
use crate::error::{BackendError, BackendResult};
use crate::request::{BootstrapAction, ClusterConfiguration, LaunchClusterRequest};
use crate::status::ClusterState;
use async_trait::async_trait;
use aws_sdk_emr::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_emr::types::{
    Application, BootstrapActionConfig, Configuration, JobFlowInstancesConfig,
    ScriptBootstrapActionConfig, Tag,
};
use fleetflow_resource::ErrorClass;

/// Service error codes worth retrying
const TRANSIENT_ERROR_CODES: &[&str] = &[
    "ThrottlingException",
    "Throttling",
    "RequestLimitExceeded",
    "TooManyRequestsException",
    "InternalServerError",
    "InternalServerException",
    "ServiceUnavailable",
    "RequestTimeout",
];

/// EMR control plane backed by `aws-sdk-emr`
#[derive(Debug, Clone)]
pub struct AwsEmrControlPlane {
    client: aws_sdk_emr::Client,
}

impl AwsEmrControlPlane {
    pub fn new(client: aws_sdk_emr::Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS config chain (env, profile, IMDS)
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_emr::Client::new(&config))
    }
}

#[async_trait]
impl EmrControlPlane for AwsEmrControlPlane {
    async fn launch_cluster(&self, request: &LaunchClusterRequest) -> BackendResult<String> {
        let instances = &request.instances;
        let instance_count = i32::try_from(instances.instance_count).map_err(|_| {
            BackendError::permanent(format!(
                "instance count {} is out of range",
                instances.instance_count
            ))
        })?;

        let output = self
            .client
            .run_job_flow()
            .name(&request.name)
            .release_label(&request.release_label)
            .set_applications(Some(
                request
                    .applications
                    .iter()
                    .map(|name| Application::builder().name(name).build())
                    .collect(),
            ))
            .service_role(&request.service_role)
            .job_flow_role(&request.job_flow_role)
            .set_log_uri(request.log_uri.clone())
            .set_tags(Some(
                request
                    .tags
                    .iter()
                    .map(|tag| Tag::builder().key(&tag.key).value(&tag.value).build())
                    .collect(),
            ))
            .set_bootstrap_actions(
                request
                    .bootstrap_actions
                    .as_deref()
                    .map(to_sdk_bootstrap_actions),
            )
            .set_configurations(
                request
                    .configurations
                    .as_deref()
                    .map(to_sdk_configurations),
            )
            .instances(
                JobFlowInstancesConfig::builder()
                    .ec2_subnet_id(&instances.subnet_id)
                    .ec2_key_name(&instances.key_name)
                    .instance_count(instance_count)
                    .master_instance_type(&instances.master_instance_type)
                    .slave_instance_type(&instances.slave_instance_type)
                    .keep_job_flow_alive_when_no_steps(instances.keep_alive_when_no_steps)
                    .set_additional_master_security_groups(
                        instances.additional_master_security_groups.clone(),
                    )
                    .set_additional_slave_security_groups(
                        instances.additional_slave_security_groups.clone(),
                    )
                    .build(),
            )
            .send()
            .await
            .map_err(backend_error)?;

        output
            .job_flow_id()
            .map(str::to_string)
            .ok_or_else(|| BackendError::permanent("RunJobFlow response has no cluster id"))
    }

    async fn describe_cluster(&self, cluster_id: &str) -> BackendResult<ClusterState> {
        let output = self
            .client
            .describe_cluster()
            .cluster_id(cluster_id)
            .send()
            .await
            .map_err(backend_error)?;

        output
            .cluster()
            .and_then(|cluster| cluster.status())
            .and_then(|status| status.state())
            .map(|state| ClusterState::parse(state.as_str()))
            .ok_or_else(|| {
                BackendError::permanent(format!(
                    "DescribeCluster response for {} has no cluster state",
                    cluster_id
                ))
            })
    }

    async fn terminate_cluster(&self, cluster_id: &str) -> BackendResult<()> {
        self.client
            .terminate_job_flows()
            .job_flow_ids(cluster_id)
            .send()
            .await
            .map_err(backend_error)?;
        Ok(())
    }
}

fn to_sdk_bootstrap_actions(actions: &[BootstrapAction]) -> Vec<BootstrapActionConfig> {
    actions
        .iter()
        .map(|action| {
            let script = ScriptBootstrapActionConfig::builder()
                .path(&action.path)
                .set_args(Some(action.args.clone()))
                .build();

            BootstrapActionConfig::builder()
                .name(&action.name)
                .script_bootstrap_action(script)
                .build()
        })
        .collect()
}

fn to_sdk_configurations(configs: &[ClusterConfiguration]) -> Vec<Configuration> {
    configs.iter().map(to_sdk_configuration).collect()
}

fn to_sdk_configuration(config: &ClusterConfiguration) -> Configuration {
    Configuration::builder()
        .classification(&config.classification)
        .set_properties(
            config
                .properties
                .as_ref()
                .map(|props| props.clone().into_iter().collect()),
        )
        .set_configurations(config.configurations.as_deref().map(to_sdk_configurations))
        .build()
}

/// Translate an SDK failure into a classified backend error
fn backend_error<E>(err: SdkError<E>) -> BackendError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let class = classify_sdk_error(&err);
    let code = match &err {
        SdkError::ServiceError(context) => context.err().code().map(str::to_string),
        _ => None,
    };
    let message = DisplayErrorContext(&err).to_string();

    let backend = match class {
        ErrorClass::Transient => BackendError::transient(message),
        ErrorClass::Permanent => BackendError::permanent(message),
    };
    match code {
        Some(code) => backend.with_code(code),
        None => backend,
    }
}

fn classify_sdk_error<E: ProvideErrorMetadata>(err: &SdkError<E>) -> ErrorClass {
    match err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            ErrorClass::Transient
        }
        SdkError::ServiceError(context) => {
            if context.raw().status().is_server_error() {
                ErrorClass::Transient
            } else {
                classify_error_code(context.err().code())
            }
        }
        _ => ErrorClass::Permanent,
    }
}

/// Retry class for an EMR service error code
pub fn classify_error_code(code: Option<&str>) -> ErrorClass {
    match code {
        Some(code) if TRANSIENT_ERROR_CODES.contains(&code) => ErrorClass::Transient,
        _ => ErrorClass::Permanent,
    }
}
