mod errors;
mod runner;
mod schema_doc;

use std::convert::Infallible;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fieldguard_core::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fieldguard",
    version,
    about = "FieldGuard CLI - assemble a BurgerRecipe through its field validators",
    long_about = "FieldGuard builds a BurgerRecipe from command line values. Every value is \
                  checked by the validator declared on its field before it is stored.\n\n\
                  Example usage:\n  \
                  fieldguard build --buns 2 --cheese 1 --tomatoes 0 --cutlets 1 --eggs 0 --sauce mayo"
)]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable debug mode with assignment logs and detailed error backtraces
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a recipe; the first rejected field aborts
    Build(RecipeArgs),
    /// Print every field of the recipe with the rule guarding it
    Describe,
}

/// Values are parsed loosely so that wrong types reach the validators.
#[derive(clap::Args, Debug)]
pub struct RecipeArgs {
    #[arg(long, value_name = "N", value_parser = parse_value)]
    buns: Value,
    #[arg(long, value_name = "N", value_parser = parse_value)]
    cheese: Value,
    #[arg(long, value_name = "N", value_parser = parse_value)]
    tomatoes: Value,
    #[arg(long, value_name = "N", value_parser = parse_value)]
    cutlets: Value,
    #[arg(long, value_name = "N", value_parser = parse_value)]
    eggs: Value,
    #[arg(long, value_name = "SAUCE", value_parser = parse_value)]
    sauce: Value,
}

/// Goes through `FromStr` so "2" stays an integer instead of becoming text.
fn parse_value(s: &str) -> Result<Value, Infallible> {
    s.parse::<Value>()
}

fn init_logging(debug: bool) -> Result<()> {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install the log subscriber")
}

fn run(args: Args) -> Result<bool> {
    init_logging(args.debug)?;
    match args.command {
        Command::Build(recipe) => runner::build(recipe),
        Command::Describe => {
            schema_doc::print_schema_documentation();
            Ok(true)
        }
    }
}

fn main() {
    let args = Args::parse();

    // Enable backtraces in debug mode
    if args.debug {
        // SAFETY: set before any other thread is spawned
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            if std::env::var("RUST_BACKTRACE").is_ok() {
                eprintln!("Error: {:?}", err);
            } else {
                eprintln!("Error: {:#}", err);
                eprintln!("\nHint: Run with --debug flag for detailed stack traces");
            }
            std::process::exit(1);
        }
    }
}
