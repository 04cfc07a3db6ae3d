use std::path::PathBuf;

use bookcraft::{AppError, GenerateOptions, OutlineOptions};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookcraft")]
#[command(version)]
#[command(
    about = "Draft multi-chapter strategy books against a local completion server",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConceptArgs {
    /// Core concept text for the book
    #[arg(long)]
    concept: Option<String>,
    /// Read the core concept from a file
    #[arg(long)]
    concept_file: Option<PathBuf>,
    /// Number of principles (chapters), between 2 and 15
    #[arg(long, default_value_t = 10)]
    chapters: usize,
    /// Path to a bookcraft.toml config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Run against the built-in mock client (no server required)
    #[arg(long)]
    mock: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full manuscript
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        concept: ConceptArgs,
        /// Output path for the manuscript
        #[arg(long, default_value = "strategy_book.md")]
        out: PathBuf,
    },
    /// Generate only the outline of principles
    #[clap(visible_alias = "o")]
    Outline {
        #[command(flatten)]
        concept: ConceptArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { concept, out } => run_generate(concept, out),
        Commands::Outline { concept } => run_outline(concept),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(raw) = e.raw_response() {
            eprintln!("--- raw model response ---");
            eprintln!("{}", raw);
        }
        std::process::exit(1);
    }
}

fn read_concept(args: &ConceptArgs) -> Result<String, AppError> {
    match (&args.concept, &args.concept_file) {
        (Some(text), None) => Ok(text.clone()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (Some(_), Some(_)) => {
            Err(AppError::config_error("Use either --concept or --concept-file, not both"))
        }
        (None, None) => {
            Err(AppError::config_error("A concept is required: pass --concept or --concept-file"))
        }
    }
}

fn run_generate(args: ConceptArgs, out: PathBuf) -> Result<(), AppError> {
    let concept = read_concept(&args)?;
    let result = bookcraft::generate(GenerateOptions {
        concept,
        chapters: args.chapters,
        out,
        config: args.config,
        mock: args.mock,
    })?;

    println!("✅ Manuscript written to {}", result.out.display());
    if result.report.is_degraded() {
        println!("Completed with degradations:");
        for degradation in &result.report.degradations {
            println!("  - {}", degradation);
        }
    }
    Ok(())
}

fn run_outline(args: ConceptArgs) -> Result<(), AppError> {
    let concept = read_concept(&args)?;
    let outline = bookcraft::plan(OutlineOptions {
        concept,
        chapters: args.chapters,
        config: args.config,
        mock: args.mock,
    })?;

    println!("✅ Outline ({} principles):", outline.len());
    for (index, title) in outline.titles().iter().enumerate() {
        println!("{}. {}", index + 1, title);
    }
    Ok(())
}
