//! Charm-style CLI prompts using cliclack

use anyhow::Result;
use create_bot_core::config::name_pattern;
use create_bot_core::package::PackageMetadata;
use regex::Regex;
use std::sync::OnceLock;

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@\w+\.\w+$").unwrap())
}

/// Ask for the project name when none was given on the command line.
pub fn ask_name() -> Result<String> {
    let name: String = cliclack::input("What will be your bot's name?")
        .validate(|input: &String| {
            if name_pattern().is_match(input) {
                Ok(())
            } else {
                Err("Your name may only contain lower-case characters and dashes")
            }
        })
        .interact()?;

    Ok(name)
}

/// Flag values that short-circuit the corresponding prompt
pub struct MetadataFlags<'a> {
    pub author: Option<&'a str>,
    pub email: Option<&'a str>,
    pub description: Option<&'a str>,
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Gather author, email, and description, prompting only for the pieces not
/// already supplied via flags. Empty answers stay unset.
pub fn ask_metadata(flags: MetadataFlags<'_>) -> Result<PackageMetadata> {
    let author = match flags.author {
        Some(author) => Some(author.to_string()),
        None => {
            let answer: String = cliclack::input("What is your author name?")
                .required(false)
                .validate(|input: &String| {
                    if input.contains('<') {
                        Err("Please skip the email for the next step")
                    } else {
                        Ok(())
                    }
                })
                .interact()?;
            none_if_empty(answer)
        }
    };

    // An author given as "Name <email>" already carries the email.
    let author_carries_email = author.as_deref().is_some_and(|a| a.contains('<'));

    let email = match flags.email {
        Some(email) => Some(email.to_string()),
        None if author_carries_email => None,
        None => {
            let answer: String = cliclack::input("What is your email?")
                .required(false)
                .validate(|input: &String| {
                    if input.is_empty() || email_pattern().is_match(input) {
                        Ok(())
                    } else {
                        Err("That does not look like an email to me")
                    }
                })
                .interact()?;
            none_if_empty(answer)
        }
    };

    let description = match flags.description {
        Some(description) => Some(description.to_string()),
        None => {
            let answer: String = cliclack::input("What is your bot's description?")
                .required(false)
                .interact()?;
            none_if_empty(answer)
        }
    };

    Ok(PackageMetadata {
        author,
        email,
        description,
    })
}
