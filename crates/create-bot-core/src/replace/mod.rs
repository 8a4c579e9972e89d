//! Replacement pipeline applied to every template file name and body
//!
//! Two ordered passes: module-syntax rewriting first, generic token
//! substitution second. The order matters because the rewriter may emit new
//! tokens (the import-extension token appended to relative ESM imports) that
//! only the substitution pass resolves.

pub mod module_syntax;
pub mod tokens;

pub use module_syntax::{CommonJsReplacer, EsModuleReplacer, ModuleReplacer};

/// Options threaded through one render, immutable per CLI invocation
pub struct ReplaceOptions {
    /// Replaces `{name}`
    pub name: String,

    /// Replaces `{file-extension}`
    pub file_extension: String,

    /// Replaces `{import-extension}`
    pub import_extension: String,

    /// Replaces `{ignored-package-locks}` (joined with newlines)
    pub ignored_package_locks: Vec<String>,

    /// Module-syntax strategy selected at configuration resolution
    pub replacer: Box<dyn ModuleReplacer>,
}

/// Rewrite module-syntax markers, then substitute generic tokens.
pub fn replace(text: &str, options: &ReplaceOptions) -> String {
    tokens::substitute(&options.replacer.render(text), options)
}

#[cfg(test)]
pub(crate) fn test_options() -> ReplaceOptions {
    ReplaceOptions {
        name: "my-bot".to_string(),
        file_extension: ".js".to_string(),
        import_extension: ".mjs".to_string(),
        ignored_package_locks: vec!["yarn.lock".to_string(), "pnpm-lock.yaml".to_string()],
        replacer: Box::new(CommonJsReplacer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_then_substitutes() {
        let options = ReplaceOptions {
            import_extension: ".mjs".to_string(),
            replacer: Box::new(EsModuleReplacer),
            ..test_options()
        };

        let out = replace("{import:./config, BOT_TOKEN};", &options);
        assert_eq!(out, "import { BOT_TOKEN } from './config.mjs';");
    }

    #[test]
    fn test_rewriter_output_contains_token_before_substitution() {
        let rendered = EsModuleReplacer.render("{import:./config, BOT_TOKEN};");
        assert!(rendered.contains("{import-extension}"));
    }

    #[test]
    fn test_applies_to_file_names() {
        let options = test_options();
        assert_eq!(replace("{name}{file-extension}", &options), "my-bot.js");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let options = test_options();
        assert_eq!(replace("node_modules/", &options), "node_modules/");
    }
}
