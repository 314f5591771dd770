//! CLI for generating an Azure Terraform scaffold with the OpenAI API.
//!
//! # Usage
//!
//! ```bash
//! # Interactive: prompts for a comma-separated resource list
//! cargo run -p aztf-generator --bin aztf-generate
//!
//! # Non-interactive
//! cargo run -p aztf-generator --bin aztf-generate -- \
//!     --resources "Virtual Machine, Storage Account" --output infrastructure
//! ```
//!
//! The settings file (default `config.json`) must hold the API key:
//!
//! ```json
//! { "OPENAI_API_KEY": "sk-..." }
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use aztf_generator::{
    parse_resource_list, OpenAiClient, ScaffoldGenerator, ScaffoldWriter, Settings,
};

/// Generate example Azure Terraform modules with the OpenAI API.
#[derive(Debug, Parser)]
#[command(name = "aztf-generate", version)]
struct Args {
    /// Path to the JSON settings file holding OPENAI_API_KEY.
    #[arg(long, short, default_value = "config.json")]
    config: PathBuf,

    /// Output directory for the generated scaffold.
    #[arg(long, short, default_value = "infrastructure")]
    output: PathBuf,

    /// Comma-separated resource names; prompts on stdin when omitted.
    #[arg(long, short)]
    resources: Option<String>,

    /// Suppress progress output.
    #[arg(long, short)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match Settings::load(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let line = match args.resources {
        Some(list) => list,
        None => match read_resource_line() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: failed to read input: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };
    let resources = parse_resource_list(&line);

    let generator = ScaffoldGenerator::new(
        OpenAiClient::new(&settings),
        ScaffoldWriter::new(args.output),
    )
    .verbose(!args.quiet);

    match generator.generate(&resources).await {
        Ok(summary) => {
            if !args.quiet {
                println!();
                print!("{}", summary.format_summary());
            }
            println!("Terraform modules generated successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Prompt on stdout and read one line from stdin.
fn read_resource_line() -> io::Result<String> {
    print!("Enter the Azure resources you want to generate (comma-separated): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
