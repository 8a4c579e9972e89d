//! Filesystem materialization of a rendered template tree
//!
//! Walks a [`Directory`], applies the replacement pipeline to every name and
//! body, and writes the result to disk. Siblings are written concurrently
//! (fan-out, joined all-or-nothing); each node targets a distinct path so no
//! locking is needed. Nothing is ever overwritten: an existing directory at
//! a target path aborts the run, and a half-written tree is left as-is.

use crate::error::{Result, ScaffoldError};
use crate::replace::{replace, ReplaceOptions};
use crate::tree::{Directory, File, Node};
use futures::future::{try_join_all, BoxFuture};
use futures::FutureExt;
use std::path::Path;
use tokio::fs;

/// Render and write a single file under `root`.
pub async fn materialize_file(root: &Path, file: &File, options: &ReplaceOptions) -> Result<()> {
    let name = replace(&file.name, options);
    let contents = replace(&file.contents, options);
    let path = root.join(name);

    fs::write(&path, contents)
        .await
        .map_err(|source| ScaffoldError::Filesystem { path, source })
}

/// Render a directory's name and materialize its subtree under `root`.
pub async fn materialize_directory(
    root: &Path,
    directory: &Directory,
    options: &ReplaceOptions,
) -> Result<()> {
    let name = replace(&directory.name, options);
    materialize_tree(&root.join(name), directory, options).await
}

fn materialize_node<'a>(
    root: &'a Path,
    node: &'a Node,
    options: &'a ReplaceOptions,
) -> BoxFuture<'a, Result<()>> {
    match node {
        Node::File(file) => materialize_file(root, file, options).boxed(),
        Node::Directory(directory) => materialize_directory(root, directory, options).boxed(),
    }
}

/// Create `root` itself, then materialize every child of `directory` into it
/// concurrently. The first child error aborts the join; later ones are
/// dropped.
pub async fn materialize_tree(
    root: &Path,
    directory: &Directory,
    options: &ReplaceOptions,
) -> Result<()> {
    fs::create_dir(root).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::AlreadyExists {
            ScaffoldError::DestinationExists(root.to_path_buf())
        } else {
            ScaffoldError::Filesystem {
                path: root.to_path_buf(),
                source,
            }
        }
    })?;

    try_join_all(
        directory
            .children
            .iter()
            .map(|child| materialize_node(root, child, options)),
    )
    .await?;

    Ok(())
}
