//! Configuration resolution: raw CLI options to a ready-to-render setup
//!
//! Everything downstream (template materialization, package construction)
//! consumes the [`ResolvedConfig`] produced here; nothing re-derives choices
//! from raw flags.

use crate::error::ScaffoldError;
use crate::replace::{CommonJsReplacer, EsModuleReplacer, ReplaceOptions};
use crate::templates::{self, Template};
use regex::Regex;
use std::sync::OnceLock;

/// Accepted project names: lower-case letters and dashes, at least two
pub fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z\-]{2,}$").unwrap())
}

/// Validate a project name before any filesystem mutation.
pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    if name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName(name.to_string()))
    }
}

/// The three supported package managers, in flag precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Binary name used for `<manager> install`
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Lock and log files this manager leaves behind
    pub fn vendor_files(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["package-lock.json", "npm-shrinkwrap.json", "npm-debug.log"],
            PackageManager::Yarn => &["yarn.lock", "yarn-error.log", "yarn-debug.log"],
            PackageManager::Pnpm => &["pnpm-lock.yaml"],
        }
    }

    /// Vendor files of the two managers that were *not* selected, in manager
    /// order; destined for the generated ignore file.
    pub fn opposite_locks(&self) -> Vec<String> {
        let others: [PackageManager; 2] = match self {
            PackageManager::Npm => [PackageManager::Yarn, PackageManager::Pnpm],
            PackageManager::Yarn => [PackageManager::Npm, PackageManager::Pnpm],
            PackageManager::Pnpm => [PackageManager::Npm, PackageManager::Yarn],
        };
        others
            .iter()
            .flat_map(|m| m.vendor_files().iter().map(|f| f.to_string()))
            .collect()
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}

/// Explicit package manager flags from the CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagerFlags {
    pub npm: bool,
    pub yarn: bool,
    pub pnpm: bool,
}

/// Infer the package manager from the invoking executable's path.
pub fn manager_from_argv0(argv0: &str) -> Option<PackageManager> {
    if argv0.contains("pnpm") {
        Some(PackageManager::Pnpm)
    } else if argv0.contains("yarn") {
        Some(PackageManager::Yarn)
    } else if argv0.contains("npm") || argv0.contains("npx") {
        Some(PackageManager::Npm)
    } else {
        None
    }
}

/// Pick the package manager: explicit flags win (npm > yarn > pnpm), then
/// argv0 inference, then npm.
pub fn pick_package_manager(flags: ManagerFlags, argv0: Option<&str>) -> PackageManager {
    if flags.npm {
        PackageManager::Npm
    } else if flags.yarn {
        PackageManager::Yarn
    } else if flags.pnpm {
        PackageManager::Pnpm
    } else {
        argv0
            .and_then(manager_from_argv0)
            .unwrap_or(PackageManager::Npm)
    }
}

/// Raw, unvalidated options as they come off the CLI
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub name: String,
    pub template: Option<String>,
    pub module: Option<String>,
    pub extension: Option<String>,
    pub managers: ManagerFlags,
    /// Override for argv0 inference; `None` reads the real process argv0
    pub argv0: Option<String>,
}

/// Derived once per invocation, then threaded unchanged everywhere
pub struct ResolvedConfig {
    pub template: &'static Template,
    pub package_manager: PackageManager,
    pub replace: ReplaceOptions,
}

fn should_use_typescript(template: Option<&str>) -> bool {
    matches!(template, Some("ts") | Some("typescript"))
}

fn should_use_commonjs(module: Option<&str>) -> bool {
    matches!(module, None | Some("cjs") | Some("commonjs") | Some("script"))
}

fn dot_normalized(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}

/// Resolve raw options into the template, package manager, and replacement
/// options used for the whole run.
pub fn resolve(options: RawOptions) -> ResolvedConfig {
    let ts = should_use_typescript(options.template.as_deref());
    let cjs = should_use_commonjs(options.module.as_deref());

    // An explicit extension always wins; otherwise TypeScript brings its
    // own and the JavaScript default depends on the module convention.
    let file_extension = match options.extension.as_deref() {
        Some(given) => dot_normalized(given),
        None if ts => ".ts".to_string(),
        None if cjs => ".js".to_string(),
        None => ".mjs".to_string(),
    };

    // Relative ESM imports carry the real on-disk extension; CommonJS
    // requires never do.
    let import_extension = if cjs {
        String::new()
    } else {
        file_extension.clone()
    };

    let argv0 = options
        .argv0
        .or_else(|| std::env::args().next());
    let package_manager = pick_package_manager(options.managers, argv0.as_deref());

    let template = if ts {
        templates::typescript()
    } else {
        templates::javascript()
    };

    ResolvedConfig {
        template,
        package_manager,
        replace: ReplaceOptions {
            name: options.name,
            ignored_package_locks: package_manager.opposite_locks(),
            file_extension,
            import_extension,
            replacer: if cjs {
                Box::new(CommonJsReplacer)
            } else {
                Box::new(EsModuleReplacer)
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(template: Option<&str>, module: Option<&str>, extension: Option<&str>) -> RawOptions {
        RawOptions {
            name: "my-bot".to_string(),
            template: template.map(String::from),
            module: module.map(String::from),
            extension: extension.map(String::from),
            managers: ManagerFlags::default(),
            argv0: Some("create-bot".to_string()),
        }
    }

    #[test]
    fn test_template_selection_defaults_to_javascript() {
        assert_eq!(resolve(raw(None, None, None)).template.name, "javascript");
        assert_eq!(resolve(raw(Some("js"), None, None)).template.name, "javascript");
        assert_eq!(resolve(raw(Some("bogus"), None, None)).template.name, "javascript");
        assert_eq!(resolve(raw(Some("ts"), None, None)).template.name, "typescript");
        assert_eq!(
            resolve(raw(Some("typescript"), None, None)).template.name,
            "typescript"
        );
    }

    #[test]
    fn test_module_selection_defaults_to_commonjs() {
        for module in [None, Some("cjs"), Some("commonjs"), Some("script")] {
            let config = resolve(raw(None, module, None));
            assert_eq!(config.replace.replacer.name(), "cjs");
        }
        for module in [Some("esm"), Some("ecmascript"), Some("es6"), Some("module")] {
            let config = resolve(raw(None, module, None));
            assert_eq!(config.replace.replacer.name(), "esm");
        }
    }

    #[test]
    fn test_extension_decision_table() {
        // {template} x {module} x {explicit extension}
        let cases = [
            (Some("ts"), None, Some(".cjs"), ".cjs"),
            (Some("ts"), Some("esm"), Some("mjs"), ".mjs"),
            (Some("ts"), None, None, ".ts"),
            (Some("ts"), Some("esm"), None, ".ts"),
            (None, None, Some(".cjs"), ".cjs"),
            (None, Some("esm"), Some("mjs"), ".mjs"),
            (None, None, None, ".js"),
            (None, Some("esm"), None, ".mjs"),
        ];

        for (template, module, extension, expected) in cases {
            let config = resolve(raw(template, module, extension));
            assert_eq!(
                config.replace.file_extension, expected,
                "template={:?} module={:?} extension={:?}",
                template, module, extension
            );
        }
    }

    #[test]
    fn test_import_extension_tracks_module_style() {
        let cjs = resolve(raw(None, None, None));
        assert_eq!(cjs.replace.import_extension, "");

        let esm = resolve(raw(None, Some("esm"), None));
        assert_eq!(esm.replace.import_extension, ".mjs");
    }

    #[test]
    fn test_explicit_manager_flags_precedence() {
        let all = ManagerFlags {
            npm: true,
            yarn: true,
            pnpm: true,
        };
        assert_eq!(pick_package_manager(all, None), PackageManager::Npm);

        let yarn_pnpm = ManagerFlags {
            npm: false,
            yarn: true,
            pnpm: true,
        };
        assert_eq!(pick_package_manager(yarn_pnpm, None), PackageManager::Yarn);
    }

    #[test]
    fn test_manager_inferred_from_argv0() {
        assert_eq!(manager_from_argv0("/usr/bin/pnpm"), Some(PackageManager::Pnpm));
        assert_eq!(manager_from_argv0("/usr/bin/yarn"), Some(PackageManager::Yarn));
        assert_eq!(manager_from_argv0("/usr/local/bin/npx"), Some(PackageManager::Npm));
        assert_eq!(manager_from_argv0("/usr/bin/node"), None);
    }

    #[test]
    fn test_manager_defaults_to_npm() {
        assert_eq!(
            pick_package_manager(ManagerFlags::default(), Some("create-bot")),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("my-bot").is_ok());
        assert!(validate_name("ab").is_ok());
        assert!(validate_name("a").is_err());
        assert!(validate_name("MyBot").is_err());
        assert!(validate_name("my bot").is_err());
        assert!(validate_name("bot7").is_err());
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_ignored_locks_exclude_selected_manager() {
        let locks = PackageManager::Npm.opposite_locks();
        assert_eq!(
            locks,
            vec![
                "yarn.lock",
                "yarn-error.log",
                "yarn-debug.log",
                "pnpm-lock.yaml"
            ]
        );
        assert!(!locks.iter().any(|l| l.contains("package-lock")));

        let locks = PackageManager::Yarn.opposite_locks();
        assert_eq!(
            locks,
            vec![
                "package-lock.json",
                "npm-shrinkwrap.json",
                "npm-debug.log",
                "pnpm-lock.yaml"
            ]
        );
    }
}
