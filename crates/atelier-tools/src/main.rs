//! Atelier CLI - Component scaffolding for design-system projects

use anyhow::Result;
use atelier_core::tui::CreateArgs;
use atelier_core::{catalog, tokens, ProjectManifest};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "atelier-tools")]
#[command(about = "CLI for scaffolding design-system components")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a new component (template, content, style entry, story)
    New(NewArgs),
    /// List components already scaffolded in the project
    List(ListArgs),
    /// Flatten a nested design-token JSON file for the CSS token pipeline
    Tokens(TokensArgs),
}

#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Component name (e.g. "Button")
    pub name: Option<String>,

    /// Component category: atoms, molecules, organisms or core
    /// (unrecognized values fall back to atoms)
    pub category: Option<String>,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Overwrite existing files without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Keep existing files without prompting
    #[arg(long = "keep-existing")]
    pub keep_existing: bool,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Parser, Debug)]
pub struct TokensArgs {
    /// Token source file (nested JSON object)
    pub input: PathBuf,

    /// Write the flattened map here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
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

    match args.command {
        Some(Command::New(new_args)) => {
            let create_args = validate_new_args(new_args)?;

            let result = atelier_core::run(create_args, CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::List(list_args)) => list_components(&list_args).await,
        Some(Command::Tokens(tokens_args)) => flatten_tokens(&tokens_args).await,
        None => {
            // No subcommand provided, default to the interactive flow
            let result = atelier_core::run(CreateArgs::default(), CLI_VERSION).await;

            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}

/// Check `new` arguments before anything touches the filesystem.
/// A missing component name is a usage error: message on stderr, exit 1,
/// no files written.
fn validate_new_args(args: NewArgs) -> Result<CreateArgs> {
    if args.name.is_none() {
        anyhow::bail!("missing component name\n\nUsage: atelier-tools new <NAME> [CATEGORY]");
    }
    Ok(args.into())
}

impl From<NewArgs> for CreateArgs {
    fn from(args: NewArgs) -> Self {
        CreateArgs {
            name: args.name,
            category: args.category,
            root: args.root,
            yes: args.yes,
            keep_existing: args.keep_existing,
        }
    }
}

async fn list_components(args: &ListArgs) -> Result<()> {
    let manifest = ProjectManifest::load(&args.root).await?;
    let entries = catalog::scan(&args.root, &manifest)?;

    if entries.is_empty() {
        println!("{}", "No components found.".yellow());
        return Ok(());
    }

    println!("{}", "Components".cyan().bold());
    println!();
    for entry in &entries {
        println!(
            "  {:<12} {}",
            entry.category.display_name().blue(),
            entry.slug
        );
    }
    println!();
    println!("{} {} component(s)", "Found".green().bold(), entries.len());

    Ok(())
}

async fn flatten_tokens(args: &TokensArgs) -> Result<()> {
    let rendered = tokens::flatten_file(&args.input).await?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &rendered).await?;
            println!(
                "{} flattened tokens to {}",
                "Wrote".green().bold(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
