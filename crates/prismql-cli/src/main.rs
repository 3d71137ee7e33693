mod config;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

use config::{load_config, resolve_settings, Settings};
use prismql_core::{convert_schema_as, ConvertError, ConvertSummary, OutputFormat};

const USAGE: &str = "Usage: prisma-to-graphql <input-schema.prisma> [output-file.graphql]";
const USAGE_EXAMPLE: &str = "Example: prisma-to-graphql libs/prisma/schema.prisma";

#[derive(Parser)]
#[command(
    name = "prisma-to-graphql",
    version,
    about = "Prisma to GraphQL converter — turn Prisma models into GraphQL object types"
)]
struct Cli {
    /// Prisma schema file to convert
    input: Option<PathBuf>,

    /// Destination file (defaults to apps/mobile/src/schema/models.graphql)
    output: Option<PathBuf>,

    /// Output format: sdl (default) or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Config file (defaults to ./prisma-to-graphql.config.yaml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log skipped lines and dropped models to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(input) = cli.input.clone() else {
        println!("{USAGE}");
        println!("{USAGE_EXAMPLE}");
        process::exit(1);
    };

    if !input.exists() {
        eprintln!("❌ Input file not found: {}", input.display());
        process::exit(1);
    }

    let settings = match settings_for(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Error converting schema: {e}");
            process::exit(1);
        }
    };

    match convert_schema_as(&input, &settings.output, settings.format) {
        Ok(summary) => report(&summary),
        Err(ConvertError::InputNotFound { path }) => {
            eprintln!("❌ Input file not found: {}", path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Error converting schema: {e}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()))
        .format_timestamp(None)
        .try_init();
}

fn settings_for(cli: &Cli) -> Result<Settings, String> {
    let config = load_config(cli.config.as_deref())?;
    Ok(resolve_settings(cli.output.clone(), cli.format, config))
}

fn report(summary: &ConvertSummary) {
    println!(
        "✅ Converted {} models to GraphQL types",
        summary.model_count
    );
    println!("📄 Output written to: {}", summary.output.display());
}
