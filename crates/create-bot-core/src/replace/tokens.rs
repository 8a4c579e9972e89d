//! Generic placeholder token substitution

use crate::replace::ReplaceOptions;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// The four recognized tokens; anything else in braces is left untouched.
fn token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{(file-extension|import-extension|name|ignored-package-locks)\}").unwrap()
    })
}

/// Replace every occurrence of the recognized tokens with the values from
/// `options`. Substitution is textual and non-recursive: substituted values
/// are never rescanned.
pub fn substitute(text: &str, options: &ReplaceOptions) -> String {
    token_pattern()
        .replace_all(text, |caps: &Captures| match &caps[1] {
            "file-extension" => options.file_extension.clone(),
            "import-extension" => options.import_extension.clone(),
            "name" => options.name.clone(),
            "ignored-package-locks" => options.ignored_package_locks.join("\n"),
            _ => unreachable!("pattern only matches the four known tokens"),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replace::test_options;

    #[test]
    fn test_substitutes_all_four_tokens() {
        let options = test_options();
        assert_eq!(substitute("{name}", &options), "my-bot");
        assert_eq!(substitute("main{file-extension}", &options), "main.js");
        assert_eq!(substitute("./config{import-extension}", &options), "./config.mjs");
        assert_eq!(
            substitute("{ignored-package-locks}", &options),
            "yarn.lock\npnpm-lock.yaml"
        );
    }

    #[test]
    fn test_substitutes_repeated_occurrences() {
        let options = test_options();
        assert_eq!(
            substitute("{name}/{name}{file-extension}", &options),
            "my-bot/my-bot.js"
        );
    }

    #[test]
    fn test_leaves_unrecognized_tokens_untouched() {
        let options = test_options();
        assert_eq!(substitute("`${prefix}` {unknown}", &options), "`${prefix}` {unknown}");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let mut options = test_options();
        options.name = "{file-extension}".to_string();
        assert_eq!(substitute("{name}", &options), "{file-extension}");
    }
}
