mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "PDF structure classification, extraction-mode routing and footnote restoration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a PDF's content structure (text-based, image-based, mixed)
    Classify {
        /// Path to PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show per-page sample measurements
        #[arg(long)]
        verbose: bool,
    },
    /// Classify a PDF and resolve which extraction mode may run against it
    Plan {
        /// Path to PDF file
        input_file: PathBuf,

        /// Requested extraction mode: fast, rich or pro
        #[arg(short, long, default_value = "fast")]
        mode: String,

        /// Upgrade the mode automatically based on the detected class
        #[arg(long)]
        auto_detect: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Restore footnotes in extracted text and emit markdown
    Footnotes {
        /// Path to extracted text/markdown file
        input_file: PathBuf,

        /// Text direction: auto (default), ltr or rtl
        #[arg(short, long, default_value = "auto")]
        direction: String,

        /// Write the rebuilt markdown to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            input_file,
            output,
            verbose,
        } => commands::classify::run(input_file, &output, verbose),
        Commands::Plan {
            input_file,
            mode,
            auto_detect,
            output,
        } => commands::plan::run(input_file, &mode, auto_detect, &output),
        Commands::Footnotes {
            input_file,
            direction,
            out,
        } => commands::footnotes::run(input_file, &direction, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
