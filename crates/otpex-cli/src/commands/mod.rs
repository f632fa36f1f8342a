//! CLI subcommand implementations.

pub mod batch;
pub mod extract;

use anyhow::Context;
use otpex_core::{ExtractorConfig, ScoringConfig};

/// Resolve the extractor configuration for a command invocation.
pub fn load_config(config_path: Option<&str>, extended_keywords: bool) -> anyhow::Result<ExtractorConfig> {
    let mut config = if let Some(path) = config_path {
        ExtractorConfig::from_file(std::path::Path::new(path))
            .with_context(|| format!("failed to load config from {path}"))?
    } else {
        ExtractorConfig::default()
    };

    if extended_keywords {
        config.scoring = ScoringConfig::extended();
    }

    Ok(config)
}
