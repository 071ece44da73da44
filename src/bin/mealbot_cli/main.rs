// ABOUTME: MealBot CLI - grocery lists, nutrition checks and seasonal produce from plan documents
// ABOUTME: Reads generated weekly plans from disk and prints chat-ready text to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors
//!
//! Usage:
//! ```bash
//! # Grocery list for the week, pantry staples excluded
//! mealbot-cli groceries plan.json
//!
//! # Keep salt, pepper and oil on the list
//! mealbot-cli groceries plan.json --include-pantry
//!
//! # Nutrition check for one day, or the whole week
//! mealbot-cli nutrition plan.json --day mardi
//! mealbot-cli nutrition plan.json --all-days
//!
//! # Formatted weekly plan
//! mealbot-cli plan plan.json
//!
//! # Produce in season this month, or in a given month
//! mealbot-cli seasonal --month 10
//! ```

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mealbot::config::MealbotConfig;
use mealbot::logging::LoggingConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mealbot-cli",
    version,
    about = "MealBot weekly meal plan tools",
    long_about = "Turns generated weekly meal plans into grocery lists, checks daily nutrition targets and lists seasonal Swiss produce."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the aggregated grocery list of a plan
    Groceries {
        /// Generated plan document (JSON, optionally fenced)
        plan: PathBuf,

        /// Keep pantry staples on the list
        #[arg(long)]
        include_pantry: bool,
    },

    /// Check daily protein and carbohydrate targets
    Nutrition(NutritionArgs),

    /// Print the formatted weekly plan
    Plan {
        /// Generated plan document (JSON, optionally fenced)
        plan: PathBuf,
    },

    /// List produce in season in Switzerland
    Seasonal {
        /// Month number (1-12), defaults to the current month
        #[arg(long, short = 'm')]
        month: Option<u32>,
    },
}

#[derive(Args)]
struct NutritionArgs {
    /// Generated plan document (JSON, optionally fenced)
    plan: PathBuf,

    /// Day to validate ("lundi" ... "dimanche")
    #[arg(long, required_unless_present = "all_days", conflicts_with = "all_days")]
    day: Option<String>,

    /// Validate all seven days
    #[arg(long)]
    all_days: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    let config = MealbotConfig::load()?;

    let output = match cli.command {
        Command::Groceries {
            plan,
            include_pantry,
        } => commands::groceries(&config, &plan, include_pantry)?,
        Command::Nutrition(args) => match args.day {
            Some(day) => commands::nutrition_day(&config, &args.plan, &day)?,
            None => commands::nutrition_week(&config, &args.plan)?,
        },
        Command::Plan { plan } => commands::plan(&plan)?,
        Command::Seasonal { month } => commands::seasonal(month)?,
    };

    println!("{output}");
    Ok(())
}
