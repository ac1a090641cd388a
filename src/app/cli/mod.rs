//! CLI Adapter.

mod fragments;
mod output;
mod session;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::api::{self, ComposeOptions, OptimizeOptions, RefineOptions};
use crate::domain::{AppError, OptimizationMode};
use fragments::FragmentArgs;

#[derive(Parser)]
#[command(name = "promptopt")]
#[command(version)]
#[command(
    about = "Compose structured prompts and optimize them with Gemini",
    long_about = None
)]
struct Cli {
    /// Path to the config file (defaults to ./promptopt.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the combined prompt built from the fragments
    #[clap(visible_alias = "c")]
    Compose {
        #[command(flatten)]
        fragments: FragmentArgs,
        /// Copy the combined prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Optimize the combined prompt with the remote model
    #[clap(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        fragments: FragmentArgs,
        /// Use this text instead of composing fragments
        #[arg(short = 'p', long, conflicts_with = "fragments")]
        prompt: Option<String>,
        /// Optimization mode (default, token-saver)
        #[arg(short = 'm', long, default_value = "default")]
        mode: OptimizationMode,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Copy the optimized prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Refine an optimized prompt based on feedback about its output
    #[clap(visible_alias = "r")]
    Refine {
        /// The optimized prompt to refine
        #[arg(short = 'p', long)]
        prompt: String,
        /// What was wrong with the output of the prompt
        #[arg(short = 'f', long)]
        feedback: String,
        /// Optimization mode (default, token-saver)
        #[arg(short = 'm', long, default_value = "default")]
        mode: OptimizationMode,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Copy the refined prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Build, optimize and refine a prompt interactively
    #[clap(visible_alias = "s")]
    Session {
        /// Initial optimization mode (default, token-saver)
        #[arg(short = 'm', long, default_value = "default")]
        mode: OptimizationMode,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Compose { fragments, copy } => run_compose(&fragments, copy),
        Commands::Optimize { fragments, prompt, mode, json, copy } => {
            run_optimize(fragments, prompt, mode, json, copy, config)
        }
        Commands::Refine { prompt, feedback, mode, json, copy } => {
            run_refine(RefineOptions { prompt, feedback, mode, copy }, json, config)
        }
        Commands::Session { mode } => session::run_session(mode, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_compose(fragments: &FragmentArgs, copy: bool) -> Result<(), AppError> {
    let options = ComposeOptions { fragments: fragments.to_fragments(), copy };
    let combined = api::compose(&options)?;
    if combined.is_empty() {
        eprintln!("⚠️  All fragments are empty");
    }
    println!("{}", combined);
    if copy {
        eprintln!("✅ Copied combined prompt to clipboard");
    }
    Ok(())
}

fn run_optimize(
    fragments: FragmentArgs,
    prompt: Option<String>,
    mode: OptimizationMode,
    json: bool,
    copy: bool,
    config: Option<&Path>,
) -> Result<(), AppError> {
    let prompt = match prompt {
        Some(text) => text.trim().to_string(),
        None => fragments.to_fragments().combined(),
    };
    let options = OptimizeOptions { prompt, mode, copy };

    let result = api::optimize(&options, config)?;
    output::print_result(&result, json, "Optimized prompt")?;
    if copy {
        eprintln!("✅ Copied optimized prompt to clipboard");
    }
    Ok(())
}

fn run_refine(options: RefineOptions, json: bool, config: Option<&Path>) -> Result<(), AppError> {
    let result = api::refine(&options, config)?;
    output::print_result(&result, json, "Refined prompt")?;
    if options.copy {
        eprintln!("✅ Copied refined prompt to clipboard");
    }
    Ok(())
}
