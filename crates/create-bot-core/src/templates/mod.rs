//! Static template definitions
//!
//! Two process-wide template variants, built once and shared read-only by
//! every render. The trees carry `{...}` placeholders and module-syntax
//! markers that the replacement pipeline resolves at materialization time.

mod javascript;
mod typescript;

use crate::tree::Directory;
use std::sync::LazyLock;

/// A project template: package metadata inputs plus the unrendered file tree
pub struct Template {
    /// Internal template name
    pub name: &'static str,

    /// Entry-point path for the package manifest, with `{name}` unresolved
    pub main: &'static str,

    /// package.json scripts, in authored order
    pub scripts: &'static [(&'static str, &'static str)],

    /// Runtime dependency names, versions resolved against the registry
    pub dependencies: &'static [&'static str],

    /// Development dependency names
    pub dev_dependencies: &'static [&'static str],

    /// Root of the unrendered file tree
    pub files: Directory,
}

static JAVASCRIPT: LazyLock<Template> = LazyLock::new(javascript::template);
static TYPESCRIPT: LazyLock<Template> = LazyLock::new(typescript::template);

pub fn javascript() -> &'static Template {
    &JAVASCRIPT
}

pub fn typescript() -> &'static Template {
    &TYPESCRIPT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    fn child_names(dir: &Directory) -> Vec<&str> {
        dir.children.iter().map(Node::name).collect()
    }

    #[test]
    fn test_javascript_template_shape() {
        let template = javascript();
        assert_eq!(template.name, "javascript");
        assert_eq!(template.main, "src/{name}.js");
        assert!(child_names(&template.files).contains(&".gitignore"));
        assert!(child_names(&template.files).contains(&"src"));
    }

    #[test]
    fn test_typescript_template_shape() {
        let template = typescript();
        assert_eq!(template.name, "typescript");
        assert_eq!(template.main, "dist/{name}.js");
        assert!(template
            .dev_dependencies
            .contains(&"typescript"));
    }

    #[test]
    fn test_gitignore_carries_lock_placeholder() {
        for template in [javascript(), typescript()] {
            let gitignore = template
                .files
                .children
                .iter()
                .find_map(|node| match node {
                    Node::File(file) if file.name == ".gitignore" => Some(file),
                    _ => None,
                })
                .expect("template has a .gitignore");
            assert!(gitignore.contents.contains("{ignored-package-locks}"));
        }
    }

    #[test]
    fn test_javascript_sources_use_markers_not_literal_imports() {
        let template = javascript();
        let src = template
            .files
            .children
            .iter()
            .find_map(|node| match node {
                Node::Directory(dir) if dir.name == "src" => Some(dir),
                _ => None,
            })
            .expect("template has a src directory");

        let entry = src
            .children
            .iter()
            .find_map(|node| match node {
                Node::File(file) if file.name == "{name}{file-extension}" => Some(file),
                _ => None,
            })
            .expect("template has an entry file");
        assert!(entry.contents.contains("{import:@sapphire/framework,"));
    }
}
