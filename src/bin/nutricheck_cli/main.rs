// ABOUTME: NutriCheck CLI - classify allergen fields offline or check a catalog product remotely
// ABOUTME: Prints human-readable results or JSON for scripting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck
//!
//! Usage:
//! ```bash
//! # Classify raw allergen fields without any service
//! nutricheck-cli classify --user-allergies "peanut,soy" --allergens "peanut" --indirect "soy"
//!
//! # Same, Korean notes, JSON output
//! nutricheck-cli classify --user-allergies "대두" --indirect "대두,밀" --locale ko --json
//!
//! # Check a catalog product for a user against the configured services
//! nutricheck-cli check --user-id 42 --product-id 7 --analyze --insights
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutricheck::intelligence::NoteLocale;
use nutricheck::logging::LoggingConfig;
use nutricheck::services::PageOptions;

#[derive(Parser)]
#[command(
    name = "nutricheck-cli",
    about = "NutriCheck allergen suitability CLI",
    long_about = "Classify allergen disclosures offline, or assemble a product's suitability page from the profile, catalog and analysis services."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Note language: en or ko (defaults to NUTRICHECK_LOCALE for check, en for classify)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify comma-delimited allergen fields
    Classify {
        /// The user's declared allergies
        #[arg(long, default_value = "")]
        user_allergies: String,

        /// Allergens the product contains
        #[arg(long, default_value = "")]
        allergens: String,

        /// Allergens the product may contain through shared manufacturing
        #[arg(long, default_value = "")]
        indirect: String,
    },

    /// Build the suitability page for a user and a catalog product
    Check {
        /// Identifier of the signed-in user
        #[arg(long)]
        user_id: String,

        /// Catalog product identifier
        #[arg(long)]
        product_id: i64,

        /// Include the AI analysis
        #[arg(long)]
        analyze: bool,

        /// Include local nutrient ratings and alternatives
        #[arg(long)]
        insights: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let locale = cli.locale.as_deref().map(NoteLocale::from_str_or_default);

    match cli.command {
        Command::Classify {
            user_allergies,
            allergens,
            indirect,
        } => {
            commands::classify::run(
                &user_allergies,
                &allergens,
                &indirect,
                locale.unwrap_or_default(),
                cli.json,
            )?;
        }
        Command::Check {
            user_id,
            product_id,
            analyze,
            insights,
        } => {
            commands::check::run(
                &user_id,
                product_id,
                PageOptions { analyze, insights },
                locale,
                cli.json,
            )
            .await?;
        }
    }

    Ok(())
}
