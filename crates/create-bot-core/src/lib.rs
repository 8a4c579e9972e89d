//! Create Bot Core - Shared library for scaffolding Discord bot projects
//!
//! This library provides the core functionality for generating a bot project
//! from a static template: placeholder substitution, module-syntax
//! rewriting, filesystem materialization, package.json construction, and
//! npm registry lookups. The CLI binary layers prompts and process
//! orchestration on top.
//!
//! # Architecture
//!
//! The library is organized leaf-first:
//!
//! - **Replacement pipeline** - module-syntax markers are rewritten into the
//!   selected convention (CommonJS or ESM), then generic `{...}` tokens are
//!   substituted; applied to every template file name and body
//! - **Template trees** - two process-wide static templates (JavaScript,
//!   TypeScript) expressed as immutable file/directory trees
//! - **Materializer** - walks a tree and writes rendered files to a fresh
//!   directory, fanning sibling writes out concurrently
//! - **Registry + package** - resolves dependency versions against the npm
//!   registry (with retries) and assembles the package manifest
//!
//! # Example usage
//!
//! ```ignore
//! use create_bot_core::{config, materialize, package, registry};
//!
//! let resolved = config::resolve(config::RawOptions {
//!     name: "my-bot".to_string(),
//!     ..Default::default()
//! });
//! materialize::materialize_tree(&path, &resolved.template.files, &resolved.replace).await?;
//! ```

pub mod config;
pub mod error;
pub mod materialize;
pub mod package;
pub mod registry;
pub mod replace;
pub mod templates;
pub mod tree;

// Re-export main types for convenience
pub use config::{resolve, PackageManager, RawOptions, ResolvedConfig};
pub use error::{RegistryError, ScaffoldError};
pub use materialize::materialize_tree;
pub use package::{build_package, PackageJson, PackageMetadata};
pub use registry::RegistryClient;
pub use replace::{replace, ReplaceOptions};
pub use templates::Template;
pub use tree::{Directory, File, Node};
