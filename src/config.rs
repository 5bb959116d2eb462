use clap::Parser;
use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Knobs for the simulated "thinking" delay. The delay is a UX simulation,
/// not a computation cost; disabling it keeps the call asynchronous but
/// immediate.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub base_delay_ms: u64,
    pub jitter_ms: u64,
    pub simulate_latency: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 800,
            jitter_ms: 700,
            simulate_latency: true,
        }
    }
}

impl EngineConfig {
    /// Configuration with the simulated delay switched off.
    pub fn immediate() -> Self {
        Self {
            simulate_latency: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Ask questions about your data in plain English", long_about = None)]
pub struct CliArgs {
    /// Question to analyze; starts an interactive prompt when omitted
    pub question: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// CSV file to attach as the uploaded dataset
    #[arg(long, value_name = "FILE")]
    pub upload: Option<PathBuf>,

    /// Print the raw analysis result as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Skip the simulated thinking delay
    #[arg(long)]
    pub no_delay: bool,
}

impl AppConfig {
    pub fn new(args: &CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config_builder = Config::builder();

        // Add configuration from file if specified
        if let Some(config_path) = &args.config {
            config_builder = config_builder.add_source(File::from(config_path.as_path()));
        } else {
            // Check for config in default locations
            let default_locations = vec![
                "askdata.toml",
                "config/askdata.toml",
                "/etc/askdata/config.toml",
            ];

            for location in default_locations {
                if Path::new(location).exists() {
                    config_builder =
                        config_builder.add_source(File::new(location, config::FileFormat::Toml));
                    break;
                }
            }
        }

        // Build the config
        let mut config: AppConfig = config_builder.build()?.try_deserialize()?;

        // Override with command line args if provided
        if args.no_delay {
            config.engine.simulate_latency = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_delay_window() {
        let config = EngineConfig::default();
        assert_eq!(config.base_delay_ms, 800);
        assert_eq!(config.jitter_ms, 700);
        assert!(config.simulate_latency);
    }

    #[test]
    fn immediate_config_disables_latency_only() {
        let config = EngineConfig::immediate();
        assert!(!config.simulate_latency);
        assert_eq!(config.base_delay_ms, 800);
    }
}
