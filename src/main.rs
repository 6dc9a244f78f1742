//! SDClang configuration CLI
//!
//! Entry point for the `sdclang-config` command-line tool.

use clap::{Parser, Subcommand};
use sdclang_config::env::{ANDROID_BUILD_TOP, TARGET_PRODUCT};
use sdclang_config::{EnvSnapshot, ResolutionReport, SdclangConfig};
use std::path::PathBuf;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sdclang-config")]
#[command(about = "Resolve SDClang toolchain selection for a build", version)]
struct Cli {
    /// Override ANDROID_BUILD_TOP
    #[arg(long, global = true)]
    build_top: Option<PathBuf>,

    /// Override TARGET_PRODUCT
    #[arg(long, global = true)]
    product: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the published build variables
    Resolve {
        /// Output in JSON format instead of `name = value` lines
        #[arg(long)]
        json: bool,
    },

    /// Show where each resolved value came from
    Explain {
        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        /// Also write the JSON report to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Validate the configuration without printing it
    Check,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let env = snapshot(&cli);

    let config = match SdclangConfig::init(&env) {
        Ok(c) => c,
        Err(e) => {
            error!(kind = e.kind(), "SDClang configuration failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Resolve { json } => run_resolve(&config, json),
        Commands::Explain { human, output } => run_explain(&config, human, output),
        Commands::Check => {
            println!("SDClang configuration valid (enabled: {})", config.enabled());
        }
    }
}

fn snapshot(cli: &Cli) -> EnvSnapshot {
    let mut env = EnvSnapshot::from_process();
    if let Some(ref top) = cli.build_top {
        env = env.with_var(ANDROID_BUILD_TOP, top.to_string_lossy());
    }
    if let Some(ref product) = cli.product {
        env = env.with_var(TARGET_PRODUCT, product.as_str());
    }
    env
}

fn run_resolve(config: &SdclangConfig, json: bool) {
    if json {
        match config.variables().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", config.variables().to_ninja());
    }
}

fn run_explain(config: &SdclangConfig, human: bool, output: Option<PathBuf>) {
    let report = ResolutionReport::new(config);

    if let Some(path) = output {
        if let Err(e) = report.write_to_file(&path) {
            eprintln!("Error writing {}: {}", path.display(), e);
            process::exit(1);
        }
    }

    if human {
        print!("{}", report.to_human());
    } else {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    }
}
