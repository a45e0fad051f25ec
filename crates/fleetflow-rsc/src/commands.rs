use anyhow::{Context, bail};
use fleetflow_resource::{Resource, ResourceConf, ResourceKind, ResourceSettings};
use fleetflow_resource_emr::{AwsEmrControlPlane, EmrCluster};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Resource definition file: a `ResourceConf` tagged with its kind
#[derive(Debug, Deserialize)]
struct ResourceFile {
    kind: String,
    #[serde(flatten)]
    conf: ResourceConf,
}

fn load_resource_file(path: &Path) -> anyhow::Result<ResourceFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read resource file {}", path.display()))?;
    let file: ResourceFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse resource file {}", path.display()))?;
    Ok(file)
}

fn parse_instance(instance: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(instance).context("Instance spec is not valid JSON")
}

async fn open_resource(path: &Path) -> anyhow::Result<Box<dyn Resource>> {
    let file = load_resource_file(path)?;

    if file.kind != EmrCluster::KIND {
        bail!(
            "Unsupported resource kind '{}' (supported: {})",
            file.kind,
            EmrCluster::KIND
        );
    }

    let settings = ResourceSettings::load()?;
    let backend = Arc::new(AwsEmrControlPlane::from_env().await);
    let cluster = EmrCluster::decode(&file.conf, &settings, backend)?;
    tracing::debug!("Opened {} resource {}", file.kind, cluster.name());
    Ok(Box::new(cluster))
}

pub async fn create(conf: &Path) -> anyhow::Result<()> {
    let resource = open_resource(conf).await?;
    let instance = resource.create().await?;
    println!("{}", serde_json::to_string(&instance)?);
    Ok(())
}

pub async fn status(conf: &Path, instance: &str) -> anyhow::Result<()> {
    let instance = parse_instance(instance)?;
    let resource = open_resource(conf).await?;
    let status = resource.get_status(&instance).await?;
    println!("{}", serde_json::json!({ "status": status }));
    Ok(())
}

pub async fn terminate(conf: &Path, instance: &str) -> anyhow::Result<()> {
    let instance = parse_instance(instance)?;
    let resource = open_resource(conf).await?;
    let status = resource.terminate(&instance).await?;
    println!("{}", serde_json::json!({ "status": status }));
    Ok(())
}
