//! package.json construction for generated projects

use crate::error::RegistryError;
use crate::registry::{OnRetry, RegistryClient};
use crate::templates::Template;
use serde::Serialize;
use serde_json::{Map, Value};

/// Optional metadata gathered from flags or prompts
#[derive(Debug, Clone, Default)]
pub struct PackageMetadata {
    pub author: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

/// The generated package manifest, serialized in field order
#[derive(Debug, Serialize)]
pub struct PackageJson {
    pub name: String,
    pub version: &'static str,
    pub description: String,
    pub main: String,
    pub author: String,
    pub license: &'static str,
    pub private: bool,
    pub scripts: Map<String, Value>,
    pub dependencies: Map<String, Value>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Map<String, Value>,
    pub engines: Engines,
    pub keywords: &'static [&'static str],
    pub prettier: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Engines {
    pub node: &'static str,
    pub npm: &'static str,
}

/// `"Name <email>"`, `"Name"`, or empty when no author was given
fn format_author(metadata: &PackageMetadata) -> String {
    match (&metadata.author, &metadata.email) {
        (Some(author), Some(email)) => format!("{} <{}>", author, email),
        (Some(author), None) => author.clone(),
        (None, _) => String::new(),
    }
}

fn to_map<K: ToString, V: ToString>(entries: impl IntoIterator<Item = (K, V)>) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}

/// Assemble the manifest from already-resolved dependency versions.
pub fn assemble_package(
    name: &str,
    template: &Template,
    metadata: &PackageMetadata,
    dependencies: Vec<(String, String)>,
    dev_dependencies: Vec<(String, String)>,
) -> PackageJson {
    PackageJson {
        name: name.to_string(),
        version: "1.0.0",
        description: metadata
            .description
            .clone()
            .unwrap_or_else(|| "My first Discord bot!".to_string()),
        main: template.main.replace("{name}", name),
        author: format_author(metadata),
        license: "MIT",
        private: true,
        scripts: to_map(template.scripts.iter().copied()),
        dependencies: to_map(dependencies),
        dev_dependencies: to_map(dev_dependencies),
        engines: Engines {
            node: ">=14",
            npm: ">=6",
        },
        keywords: &["discord", "bot", "discord bot"],
        prettier: "@sapphire/prettier-config",
    }
}

/// Resolve the template's dependency sets concurrently and assemble the
/// manifest.
pub async fn build_package(
    name: &str,
    template: &Template,
    metadata: &PackageMetadata,
    registry: &RegistryClient,
    on_retry: OnRetry<'_>,
) -> Result<PackageJson, RegistryError> {
    let (dependencies, dev_dependencies) = tokio::try_join!(
        registry.fetch_latest_versions(template.dependencies, on_retry),
        registry.fetch_latest_versions(template.dev_dependencies, on_retry),
    )?;

    Ok(assemble_package(
        name,
        template,
        metadata,
        dependencies,
        dev_dependencies,
    ))
}
