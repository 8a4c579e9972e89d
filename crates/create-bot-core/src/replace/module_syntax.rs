//! Module-syntax rewriting for template markers
//!
//! Templates carry `{import:...}` and `{export...}` markers instead of real
//! import/export statements so that one template body can serve both module
//! conventions. A [`ModuleReplacer`] turns those markers into CommonJS or
//! ECMAScript module syntax; which one runs is decided once at
//! configuration-resolution time.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Marker grammar: `{import}`, `{import:path}`, `{import:path,A B C}`
fn import_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{import(?::([@\w\-./]+)(?:,([$\w ]+))?)?\}").unwrap())
}

/// Marker grammar: `{export}`, `{export:Name}`
fn export_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{export(?::([$\w]+))?\}").unwrap())
}

/// Strategy for rewriting import/export markers into real module syntax
pub trait ModuleReplacer: Send + Sync {
    /// Short identifier for the convention ("cjs" or "esm")
    fn name(&self) -> &'static str;

    /// Render an import of `names` from `from`; an empty `names` slice is a
    /// bare (side-effect-only) import.
    fn replace_import(&self, from: &str, names: &[&str]) -> String;

    /// Render an export target; `None` is the whole-module export form.
    fn replace_export(&self, name: Option<&str>) -> String;

    /// Rewrite every import marker, then every export marker, in `text`.
    /// Export markers are only matched literally, so nothing inside an
    /// already-rewritten import line becomes a target.
    fn render(&self, text: &str) -> String {
        let imported = import_marker().replace_all(text, |caps: &Captures| {
            let from = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            let names: Vec<&str> = caps
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|list| !list.is_empty())
                .map(|list| list.split(' ').collect())
                .unwrap_or_default();
            self.replace_import(from, &names)
        });

        export_marker()
            .replace_all(&imported, |caps: &Captures| {
                let name = caps.get(1).map(|m| m.as_str().trim()).filter(|n| !n.is_empty());
                self.replace_export(name)
            })
            .into_owned()
    }
}

/// CommonJS (`require` / `module.exports`) rewriting
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonJsReplacer;

impl ModuleReplacer for CommonJsReplacer {
    fn name(&self) -> &'static str {
        "cjs"
    }

    fn replace_import(&self, from: &str, names: &[&str]) -> String {
        if names.is_empty() {
            format!("require('{}')", from)
        } else {
            format!("const {{ {} }} = require('{}')", names.join(", "), from)
        }
    }

    fn replace_export(&self, name: Option<&str>) -> String {
        match name {
            None => "module.exports =".to_string(),
            Some(name) => format!("exports.{} =", name),
        }
    }
}

/// ECMAScript module (`import` / `export`) rewriting
#[derive(Debug, Clone, Copy, Default)]
pub struct EsModuleReplacer;

impl ModuleReplacer for EsModuleReplacer {
    fn name(&self) -> &'static str {
        "esm"
    }

    fn replace_import(&self, from: &str, names: &[&str]) -> String {
        // Relative imports must carry the on-disk extension; emit the
        // import-extension token and let the substitution pass fill it in.
        let from = if from.starts_with('.') && !from.ends_with(".js") {
            format!("{}{{import-extension}}", from)
        } else {
            from.to_string()
        };

        if names.is_empty() {
            format!("import '{}'", from)
        } else {
            format!("import {{ {} }} from '{}'", names.join(", "), from)
        }
    }

    fn replace_export(&self, name: Option<&str>) -> String {
        match name {
            None => "export default".to_string(),
            Some(name) => format!("export const {} =", name),
        }
    }
}
