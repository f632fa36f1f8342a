//! Extract command - pull an OTP out of a single message.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use otpex_core::{ExtractionResult, OtpExtractor};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Message text (reads stdin when omitted and --file is not set)
    message: Option<String>,

    /// Read the message from a file instead
    #[arg(short, long, conflicts_with = "message")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Include the full ranked candidate list
    #[arg(long)]
    show_candidates: bool,

    /// Use the extended keyword list for scoring
    #[arg(long)]
    extended_keywords: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path, args.extended_keywords)?;
    let extractor = OtpExtractor::with_config(config);

    let text = read_message(&args)?;
    debug!("extracting from {} bytes of text", text.len());

    let result = if args.show_candidates {
        extractor.extract_detailed(&text)
    } else {
        extractor.extract(&text)
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print_text(&result),
    }

    Ok(())
}

fn read_message(args: &ExtractArgs) -> anyhow::Result<String> {
    if let Some(message) = &args.message {
        return Ok(message.clone());
    }
    if let Some(path) = &args.file {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_text(result: &ExtractionResult) {
    match &result.otp {
        Some(otp) => {
            println!(
                "{} OTP: {}  (confidence {:.0}%, method {:?})",
                style("✓").green(),
                style(otp).bold(),
                result.confidence * 100.0,
                result.method
            );
        }
        None => {
            println!("{} No OTP candidate found", style("✗").red());
        }
    }

    if let Some(candidates) = &result.all_candidates {
        println!();
        println!("Candidates:");
        for entry in candidates {
            println!(
                "  {}  conf {:.2}  pattern {}  offset {}",
                entry.candidate.value,
                entry.confidence,
                entry
                    .candidate
                    .pattern_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                entry.candidate.offset
            );
        }
    }
}
