//! Charm-style CLI prompts using cliclack

use crate::category::Category;
use crate::manifest::{self, ProjectManifest};
use crate::naming::ComponentName;
use crate::scaffold::{
    generate, AlwaysOverwrite, AlwaysSkip, ArtifactReport, ConflictResolver, Outcome,
    ScaffoldRequest,
};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Install command shown in version warnings
const UPGRADE_COMMAND: &str = "cargo install atelier-tools --force";

/// CLI arguments for the new-component flow
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Component name; prompted for when absent
    pub name: Option<String>,

    /// Component category; prompted for when absent, unrecognized values
    /// fall back to atoms
    pub category: Option<String>,

    /// Project root the generated paths hang off
    pub root: PathBuf,

    /// Overwrite existing files without prompting
    pub yes: bool,

    /// Keep existing files without prompting
    pub keep_existing: bool,
}

impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            name: None,
            category: None,
            root: PathBuf::from("."),
            yes: false,
            keep_existing: false,
        }
    }
}

/// Conflict resolver that asks the operator per colliding file
pub struct PromptResolver;

impl ConflictResolver for PromptResolver {
    fn resolve(&self, path: &Path) -> Result<bool> {
        let overwrite: bool =
            cliclack::confirm(format!("{} already exists. Overwrite?", path.display()))
                .initial_value(false)
                .interact()?;
        Ok(overwrite)
    }
}

/// Run the new-component flow with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("Atelier")?;

    // Step 1: Load the project manifest (defaults when absent)
    let manifest = ProjectManifest::load(&args.root).await?;

    // Check version compatibility
    if let Some(warning) =
        manifest::check_compatibility(cli_version, &manifest.version, UPGRADE_COMMAND)
    {
        cliclack::log::warning(warning)?;
    }

    // Step 2: Resolve name and category
    let name = select_name(&args)?;
    let category = select_category(&args)?;

    cliclack::log::info(format!(
        "Scaffolding \"{}\" under {}",
        name.slug(),
        category.display_name()
    ))?;

    // Step 3: Generate the four artifacts
    let request = ScaffoldRequest {
        name,
        category,
        root: args.root.clone(),
    };

    let reports = if args.yes {
        generate(&request, &manifest, &AlwaysOverwrite).await?
    } else if args.keep_existing {
        generate(&request, &manifest, &AlwaysSkip).await?
    } else {
        generate(&request, &manifest, &PromptResolver).await?
    };

    // Step 4: Report outcomes and next steps
    report_outcomes(&reports)?;
    print_next_steps(&request.name)?;

    Ok(())
}

fn select_name(args: &CreateArgs) -> Result<ComponentName> {
    if let Some(raw) = &args.name {
        return Ok(ComponentName::new(raw.clone())?);
    }

    let input: String = cliclack::input("Component name")
        .placeholder("Button")
        .validate(|value: &String| match ComponentName::new(value.clone()) {
            Ok(_) => Ok(()),
            Err(e) => Err(e.to_string()),
        })
        .interact()?;

    Ok(ComponentName::new(input)?)
}

fn select_category(args: &CreateArgs) -> Result<Category> {
    if let Some(raw) = &args.category {
        return match Category::try_parse(raw) {
            Some(category) => Ok(category),
            None => {
                cliclack::log::warning(format!(
                    "Unknown category \"{}\", using {}",
                    raw,
                    Category::Atoms
                ))?;
                Ok(Category::Atoms)
            }
        };
    }

    let category: Category = cliclack::select("Component category")
        .item(Category::Atoms, "Atoms", "basic building blocks")
        .item(Category::Molecules, "Molecules", "small compositions")
        .item(Category::Organisms, "Organisms", "full page sections")
        .item(Category::Core, "Core", "base layout and typography")
        .interact()?;

    Ok(category)
}

fn report_outcomes(reports: &[ArtifactReport]) -> Result<()> {
    for report in reports {
        let line = format!(
            "{}: {} ({})",
            report.kind.label(),
            report.path.display(),
            report.outcome.label()
        );
        match report.outcome {
            Outcome::Created | Outcome::Overwritten | Outcome::Merged => {
                cliclack::log::success(line)?
            }
            Outcome::Skipped | Outcome::Unchanged => cliclack::log::info(line)?,
        }
        if let Some(warning) = &report.warning {
            cliclack::log::warning(warning)?;
        }
    }
    Ok(())
}

fn print_next_steps(name: &ComponentName) -> Result<()> {
    println!();
    println!("  Next steps");
    println!();
    println!("  1.  Adjust the seeded styles in src/_data/styles/");
    println!("  2.  npx @11ty/eleventy --serve");
    println!("  3.  npm run storybook");

    cliclack::outro(format!("{} is ready!", name.pascal()))?;

    Ok(())
}
