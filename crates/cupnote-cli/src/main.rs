mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cupnote",
    version,
    about = "Reads bean, cafe, processing and flavor notes from coffee bag and menu text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret OCR text from a file (or "-" for stdin)
    Extract {
        /// Text file, or "-" to read stdin
        input: PathBuf,

        #[command(flatten)]
        sources: SourceArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// OCR an image with tesseract, then interpret the text
    Scan {
        /// Path to a photo of the bag or menu
        image: PathBuf,

        #[command(flatten)]
        sources: SourceArgs,

        /// tesseract executable (default: $CUPNOTE_TESSERACT_CMD or "tesseract")
        #[arg(long, value_name = "PATH")]
        tesseract: Option<PathBuf>,

        /// tesseract languages (default: $CUPNOTE_OCR_LANGS or "eng+kor")
        #[arg(long, value_name = "LANGS")]
        lang: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect catalogs and catalog scoring
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect lexicons
    Lexicon {
        #[command(subcommand)]
        action: LexiconAction,
    },
    /// Screen a cafe name candidate
    CheckCafe {
        name: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Build prompts for, and read answers from, an LLM extraction service
    Llm {
        #[command(subcommand)]
        action: LlmAction,
    },
}

#[derive(clap::Args)]
struct SourceArgs {
    /// Catalog JSON file (default: the bundled sample catalog)
    #[arg(long, value_name = "FILE", conflicts_with = "no_catalog")]
    catalog: Option<PathBuf>,

    /// Skip catalog matching and use heuristics only
    #[arg(long)]
    no_catalog: bool,

    /// Lexicon JSON file (default: the bundled lexicon)
    #[arg(long, value_name = "FILE")]
    lexicon: Option<PathBuf>,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List catalog entries
    List {
        /// Catalog JSON file (default: the bundled sample catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Validate a catalog file
    Validate {
        /// Path to catalog JSON file
        file: PathBuf,
    },
    /// Score every catalog entry against some text
    Rank {
        /// Text file, or "-" to read stdin
        input: PathBuf,

        /// Catalog JSON file (default: the bundled sample catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Show at most N entries
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

#[derive(Subcommand)]
enum LexiconAction {
    /// Summarize a lexicon
    List {
        /// Lexicon JSON file (default: the bundled lexicon)
        #[arg(long, value_name = "FILE")]
        lexicon: Option<PathBuf>,
    },
    /// Validate a lexicon file
    Validate {
        /// Path to lexicon JSON file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum LlmAction {
    /// Print the extraction prompt for some text
    Prompt {
        /// Text file, or "-" to read stdin
        input: PathBuf,
    },
    /// Interpret a model response
    Parse {
        /// File holding the model response, or "-" to read stdin
        response: PathBuf,

        /// The OCR text the response was produced for
        #[arg(long, value_name = "INPUT")]
        raw: PathBuf,

        /// Confidence to report for a well-formed response
        #[arg(long)]
        confidence: Option<f64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            sources,
            output,
        } => commands::extract::run(
            &input,
            sources.catalog.as_deref(),
            sources.no_catalog,
            sources.lexicon.as_deref(),
            &output,
        ),
        Commands::Scan {
            image,
            sources,
            tesseract,
            lang,
            output,
        } => commands::scan::run(
            &image,
            sources.catalog.as_deref(),
            sources.no_catalog,
            sources.lexicon.as_deref(),
            tesseract,
            lang,
            &output,
        ),
        Commands::Catalog { action } => match action {
            CatalogAction::List { catalog } => commands::catalog::list(catalog.as_deref()),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
            CatalogAction::Rank {
                input,
                catalog,
                top,
                output,
            } => commands::catalog::rank(&input, catalog.as_deref(), top, &output),
        },
        Commands::Lexicon { action } => match action {
            LexiconAction::List { lexicon } => commands::lexicon::list(lexicon.as_deref()),
            LexiconAction::Validate { file } => commands::lexicon::validate(&file),
        },
        Commands::CheckCafe { name, output } => commands::check_cafe::run(&name, &output),
        Commands::Llm { action } => match action {
            LlmAction::Prompt { input } => commands::llm::prompt(&input),
            LlmAction::Parse {
                response,
                raw,
                confidence,
            } => commands::llm::parse(&response, &raw, confidence),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
