//! Batch command - extract OTPs from a file of messages.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::debug;

use otpex_core::{ExtractionMethod, OtpExtractor};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input file with one message per line
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Use the extended keyword list for scoring
    #[arg(long)]
    extended_keywords: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// One row of batch output.
#[derive(Debug, Serialize)]
struct BatchRow {
    line: usize,
    message: String,
    otp: Option<String>,
    confidence: f32,
    method: ExtractionMethod,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let config = super::load_config(config_path, args.extended_keywords)?;
    let extractor = OtpExtractor::with_config(config);

    let content = fs::read_to_string(&args.input)?;
    let messages: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    debug!("batch processing {} messages", messages.len());

    let pb = ProgressBar::new(messages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut rows = Vec::with_capacity(messages.len());
    for (index, message) in messages.iter().enumerate() {
        let result = extractor.extract(message);
        rows.push(BatchRow {
            line: index + 1,
            message: message.to_string(),
            otp: result.otp,
            confidence: result.confidence,
            method: result.method,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    let found = rows.iter().filter(|r| r.otp.is_some()).count();

    // Format output
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
        OutputFormat::Csv => format_csv(&rows)?,
        OutputFormat::Text => format_text(&rows),
    };

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    println!();
    println!(
        "{} {} of {} messages produced an OTP candidate",
        style("ℹ").blue(),
        found,
        rows.len()
    );

    Ok(())
}

fn format_csv(rows: &[BatchRow]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["line", "otp", "confidence", "method", "message"])?;

    for row in rows {
        wtr.write_record([
            row.line.to_string().as_str(),
            row.otp.as_deref().unwrap_or(""),
            format!("{:.2}", row.confidence).as_str(),
            method_tag(row.method),
            row.message.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(rows: &[BatchRow]) -> String {
    let mut output = String::new();

    for row in rows {
        match &row.otp {
            Some(otp) => output.push_str(&format!(
                "{:>4}  {}  ({:.2}, {})\n",
                row.line,
                otp,
                row.confidence,
                method_tag(row.method)
            )),
            None => output.push_str(&format!("{:>4}  -\n", row.line)),
        }
    }

    output
}

fn method_tag(method: ExtractionMethod) -> &'static str {
    match method {
        ExtractionMethod::Pattern => "pattern",
        ExtractionMethod::Fallback => "fallback",
        ExtractionMethod::None => "none",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_output_has_header_and_rows() {
        let rows = vec![BatchRow {
            line: 1,
            message: "code 482913 sent".to_string(),
            otp: Some("482913".to_string()),
            confidence: 0.5,
            method: ExtractionMethod::Pattern,
        }];

        let csv = format_csv(&rows).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("line,otp,confidence,method,message"));
        assert_eq!(lines.next(), Some("1,482913,0.50,pattern,code 482913 sent"));
    }

    #[test]
    fn test_text_output_marks_misses() {
        let rows = vec![BatchRow {
            line: 2,
            message: "no digits".to_string(),
            otp: None,
            confidence: 0.0,
            method: ExtractionMethod::None,
        }];

        assert!(format_text(&rows).contains("   2  -"));
    }
}
