use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use sowgen::cli::{handle_compute, handle_context, handle_generate, handle_workdays, GenerateArgs};
use sowgen::config::{SowPaths, Settings};

#[derive(Parser)]
#[command(
    name = "sowgen",
    version,
    about = "Command-line statement-of-work document generator",
    long_about = "sowgen turns a SOW submission file into a finished contract \
                  document. It computes working days, resource cost estimates, \
                  milestone payment breakdowns, and change-order deltas, then \
                  renders them into a placeholder template."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a SOW document from a submission file
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Preview the derived figures for a submission without generating
    Compute {
        /// Path to the submission file (.yaml, .yml, or .json)
        submission: PathBuf,
    },

    /// Print the render context for a submission as JSON
    Context {
        /// Path to the submission file (.yaml, .yml, or .json)
        submission: PathBuf,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Count working days (Mon-Fri) between two dates, inclusive
    Workdays {
        /// Start date (YYYY-MM-DD)
        start: NaiveDate,
        /// End date (YYYY-MM-DD)
        end: NaiveDate,
    },

    /// Initialize configuration and output directories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = SowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Generate(args)) => {
            handle_generate(args, &settings, &paths)?;
        }
        Some(Commands::Compute { submission }) => {
            handle_compute(&submission, &settings)?;
        }
        Some(Commands::Context { submission, compact }) => {
            handle_context(&submission, compact)?;
        }
        Some(Commands::Workdays { start, end }) => {
            handle_workdays(start, end);
        }
        Some(Commands::Init) => {
            println!("Initializing sowgen at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Place client templates in: {}", paths.templates_dir().display());
            println!("Generated documents go to: {}", paths.output_dir().display());
        }
        Some(Commands::Config) => {
            println!("sowgen Configuration");
            println!("====================");
            println!("Config directory:  {}", paths.base_dir().display());
            println!("Templates:         {}", paths.templates_dir().display());
            println!("Output directory:  {}", paths.output_dir().display());
            println!();
            println!("Settings:");
            match &settings.default_template {
                Some(template) => println!("  Default template: {}", template.display()),
                None => println!("  Default template: (none)"),
            }
            println!("  Currency symbol:  {}", settings.currency_symbol);
        }
        None => {
            println!("sowgen - Command-line statement-of-work generator");
            println!();
            println!("Run 'sowgen --help' for usage information.");
            println!("Run 'sowgen generate <submission> --template <file>' to produce a document.");
        }
    }

    Ok(())
}
