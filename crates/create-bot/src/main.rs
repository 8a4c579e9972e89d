//! create-bot - scaffold a new Discord bot project

mod prompts;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use create_bot_core::config::{self, ManagerFlags, RawOptions, ResolvedConfig};
use create_bot_core::error::ScaffoldError;
use create_bot_core::registry::{RegistryClient, RETRIES};
use create_bot_core::{build_package, materialize_tree};
use std::path::Path;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

const AFTER_HELP: &str = "\
A custom --template can be one of:
    - ts
    - typescript
    - js
    - javascript

A custom --module can be one of:
    - cjs (CommonJS Modules)
    - esm (ECMAScript Modules)
    > Defaults to cjs.

A custom --extension can be one of:
    - .js
    - .cjs (CommonJS Modules)
    - .mjs (ECMAScript Modules)
    > Defaults to .js for CommonJS and .ts for TypeScript.";

#[derive(Parser, Debug)]
#[command(name = "create-bot")]
#[command(about = "CLI for scaffolding Discord bot projects")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Project directory to create
    pub project_directory: Option<String>,

    /// Print additional information
    #[arg(long)]
    pub verbose: bool,

    /// The author's name, used in the package's author field
    #[arg(long)]
    pub author: Option<String>,

    /// The author's email, used in the package's author field
    #[arg(long)]
    pub email: Option<String>,

    /// The bot's description
    #[arg(long)]
    pub description: Option<String>,

    /// The template to use (js, javascript, ts, typescript)
    #[arg(short = 'T', long)]
    pub template: Option<String>,

    /// The module convention to use (cjs, esm)
    #[arg(short = 'M', long)]
    pub module: Option<String>,

    /// The file extension to use (.js, .cjs, .mjs)
    #[arg(short = 'E', long)]
    pub extension: Option<String>,

    /// Install dependencies with npm
    #[arg(long)]
    pub use_npm: bool,

    /// Install dependencies with yarn
    #[arg(long)]
    pub use_yarn: bool,

    /// Install dependencies with pnpm
    #[arg(long)]
    pub use_pnpm: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

async fn run(args: Args) -> Result<()> {
    cliclack::intro("create-bot")?;

    // Step 1: Project name, validated before anything touches the disk
    let name = match &args.project_directory {
        Some(name) => {
            config::validate_name(name)?;
            name.clone()
        }
        None => prompts::ask_name()?,
    };

    let current_dir = std::env::current_dir().context("Failed to read the current directory")?;
    let path = current_dir.join(&name);
    if path.symlink_metadata().is_ok() {
        return Err(ScaffoldError::DestinationExists(path).into());
    }

    // Step 2: Package metadata (flags short-circuit the prompts)
    let metadata = prompts::ask_metadata(prompts::MetadataFlags {
        author: args.author.as_deref(),
        email: args.email.as_deref(),
        description: args.description.as_deref(),
    })?;

    // Step 3: Resolve template, module convention, extension, and manager
    let resolved = config::resolve(RawOptions {
        name: name.clone(),
        template: args.template.clone(),
        module: args.module.clone(),
        extension: args.extension.clone(),
        managers: ManagerFlags {
            npm: args.use_npm,
            yarn: args.use_yarn,
            pnpm: args.use_pnpm,
        },
        argv0: None,
    });

    if args.verbose {
        print_resolution(&resolved)?;
    }

    // Step 4: Resolve dependency versions and write the tree, concurrently
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let registry = RegistryClient::new(&format!("create-bot/{}", CLI_VERSION));
    let on_retry = |attempt: u32, err: &create_bot_core::RegistryError| {
        eprintln!(
            "{} [{} / {}] {}, retrying in {}.",
            "[ERROR]".red(),
            attempt.to_string().cyan(),
            RETRIES,
            err,
            "2 seconds".bold()
        );
    };

    let result = tokio::try_join!(
        async {
            build_package(&name, resolved.template, &metadata, &registry, &on_retry)
                .await
                .map_err(anyhow::Error::from)
        },
        async {
            materialize_tree(&path, &resolved.template.files, &resolved.replace)
                .await
                .map_err(anyhow::Error::from)
        },
    );

    let (package, ()) = match result {
        Ok(output) => output,
        Err(err) => {
            spinner.stop("Failed to create the project");
            return Err(err);
        }
    };

    let manifest = serde_json::to_string_pretty(&package)?;
    tokio::fs::write(path.join("package.json"), manifest)
        .await
        .context("Failed to write package.json")?;

    spinner.stop(format!("Created {}", path.display()));

    // Step 5: Install dependencies
    install(&path, resolved.package_manager).await?;

    cliclack::outro(format!(
        "Done! Your bot lives in {}. Happy coding!",
        name.cyan()
    ))?;

    Ok(())
}

fn print_resolution(resolved: &ResolvedConfig) -> Result<()> {
    cliclack::log::info(format!(
        "Template: {}, module syntax: {}, file extension: {}, package manager: {}",
        resolved.template.name,
        resolved.replace.replacer.name(),
        resolved.replace.file_extension,
        resolved.package_manager
    ))?;
    Ok(())
}

async fn install(cwd: &Path, manager: config::PackageManager) -> Result<()> {
    cliclack::log::info(format!(
        "Installing dependencies with {}, this might take a while...",
        manager.to_string().cyan().bold()
    ))?;

    let status = tokio::process::Command::new(manager.command())
        .arg("install")
        .current_dir(cwd)
        .status()
        .await
        .with_context(|| format!("Failed to run {} install", manager))?;

    if !status.success() {
        anyhow::bail!("{} install exited with {}", manager, status);
    }

    Ok(())
}
