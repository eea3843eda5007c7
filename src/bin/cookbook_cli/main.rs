// ABOUTME: Cookbook CLI - command-line front end for the recipe manager
// ABOUTME: Parses pasted ingredients, manages recipes and densities, and exports stored data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Parse pasted ingredient text from stdin
//! pbpaste | cookbook-cli parse
//!
//! # Add a recipe with ingredients from a file
//! cookbook-cli add --name "Wild rice soup" --portions 4 --ingredients soup.txt --tag soup
//!
//! # Show a recipe scaled to 8 portions
//! cookbook-cli show 10 --portions 8
//!
//! # Register a density (ml per gram) so grams and cups convert
//! cookbook-cli density set quinoa 1.35
//!
//! # Export the stored recipes as JSON
//! cookbook-cli export recipes > backup.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cookbook::config::CookbookConfig;
use cookbook::logging::LoggingConfig;
use cookbook::services::CookbookService;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "cookbook-cli",
    about = "Personal recipe manager",
    long_about = "Parse pasted ingredient lists, keep a cookbook of recipes, convert units and rescale portions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data folder override (defaults to COOKBOOK_DATA_DIR or ./config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Parse ingredient text and print the structured result
    Parse {
        /// File with one ingredient per line (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Add a new recipe
    Add {
        /// Recipe name
        #[arg(long)]
        name: String,

        /// Portions the amounts are written for
        #[arg(long, default_value = "4")]
        portions: f64,

        /// File with pasted ingredient text ("-" for stdin)
        #[arg(long)]
        ingredients: Option<PathBuf>,

        /// Cooking step, repeat for each step
        #[arg(long = "step")]
        steps: Vec<String>,

        /// Tag, repeat for each tag
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Cooking time in minutes
        #[arg(long)]
        minutes: Option<u64>,

        /// Notes or description
        #[arg(long)]
        notes: Option<String>,

        /// Where the recipe comes from
        #[arg(long)]
        source: Option<String>,

        /// Hyperlink to the source
        #[arg(long)]
        source_link: Option<String>,

        /// Author recorded on the recipe
        #[arg(long, env = "USER", default_value = "cookbook")]
        author: String,
    },

    /// Show a recipe, optionally rescaled
    Show {
        /// Recipe id
        id: u64,

        /// Rescale to this many portions
        #[arg(long)]
        portions: Option<f64>,
    },

    /// List all recipes by name
    List,

    /// Find recipes by name or ingredient
    Search {
        /// Text to look for, case-insensitive
        needle: String,
    },

    /// Remove a recipe
    Remove {
        /// Recipe id
        id: u64,
    },

    /// List all tags in use
    Tags,

    /// Manage the density table
    Density {
        #[command(subcommand)]
        action: DensityCommand,
    },

    /// Print stored data as JSON
    Export {
        /// What to export
        #[arg(value_enum)]
        target: ExportTarget,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum DensityCommand {
    /// Set the density of an item in ml per gram
    Set {
        /// Ingredient item, case-insensitive
        item: String,

        /// Milliliters per gram
        factor: f64,
    },

    /// Remove the density of an item
    Remove {
        /// Ingredient item, case-insensitive
        item: String,
    },

    /// List all known densities
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportTarget {
    /// The recipe collection
    Recipes,
    /// The density table
    Table,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let mut config = CookbookConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    debug!(data_dir = %config.data_dir.display(), "Using data folder");

    if let Command::Parse { file } = &cli.command {
        return commands::recipe::parse(&config, file.as_deref()).await;
    }

    let service = CookbookService::open(&config).await?;

    match cli.command {
        Command::Parse { .. } => {}
        Command::Add {
            name,
            portions,
            ingredients,
            steps,
            tags,
            minutes,
            notes,
            source,
            source_link,
            author,
        } => {
            let input = commands::recipe::AddInput {
                name,
                portions,
                ingredients,
                steps,
                tags,
                minutes,
                notes,
                source,
                source_link,
            };
            commands::recipe::add(&service, input, &author).await?;
        }
        Command::Show { id, portions } => commands::recipe::show(&service, id, portions).await?,
        Command::List => commands::recipe::list(&service).await,
        Command::Search { needle } => commands::recipe::search(&service, &needle).await,
        Command::Remove { id } => commands::recipe::remove(&service, id).await?,
        Command::Tags => commands::recipe::tags(&service).await,
        Command::Density { action } => match action {
            DensityCommand::Set { item, factor } => {
                commands::density::set(&service, &item, factor).await?;
            }
            DensityCommand::Remove { item } => commands::density::remove(&service, &item).await?,
            DensityCommand::List => commands::density::list(&service).await,
        },
        Command::Export { target } => match target {
            ExportTarget::Recipes => commands::export::recipes(&service).await?,
            ExportTarget::Table => commands::export::table(&service).await?,
        },
    }

    Ok(())
}
