pub mod cli;
pub mod toml_config;

use crate::core::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::{TomlConfig, OUTPUT_FORMATS};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-textkit")]
#[command(about = "Capitalize words and estimate serialized JSON size")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format: plain or json (overrides the config file)
    #[arg(long, global = true)]
    pub format: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Uppercase the first letter of every whitespace-separated word
    Capitalize {
        /// Text to capitalize; read from stdin when omitted
        text: Vec<String>,
    },
    /// Print the serialized length of a JSON document
    ///
    /// The input is parsed and re-serialized in compact form before it is
    /// measured. Numbers keep serde_json's spelling, so `1.0`, `1e2` and `-0`
    /// measure longer than a browser's JSON.stringify would print them, and
    /// out-of-range numbers such as `1e400` are rejected as invalid input.
    Size {
        /// JSON file to measure; `-` or omitted reads stdin
        input: Option<String>,
    },
}

/// CLI 與 TOML 合併後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
    pub log_level: Option<String>,
}

impl Settings {
    /// 命令列參數優先於配置檔
    pub fn merge(
        file: Option<&TomlConfig>,
        format: Option<&str>,
        verbose: bool,
        json_logs: bool,
    ) -> Result<Self> {
        let defaults = TomlConfig::default();
        let file = file.unwrap_or(&defaults);
        file.validate()?;

        let format = match format {
            Some(f) => {
                validation::validate_one_of("--format", f, &OUTPUT_FORMATS)?;
                f
            }
            None => file.output_format(),
        };

        Ok(Self {
            format: format.parse()?,
            verbose,
            json_logs: json_logs || file.json_logs(),
            log_level: file.log_level().map(str::to_string),
        })
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self, file: Option<&TomlConfig>) -> Result<Settings> {
        Settings::merge(file, self.format.as_deref(), self.verbose, self.json_logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults() {
        let settings = Settings::merge(None, None, false, false).unwrap();
        assert_eq!(settings.format, OutputFormat::Plain);
        assert!(!settings.json_logs);
        assert_eq!(settings.log_level, None);
    }

    #[test]
    fn test_cli_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            "[output]\nformat = \"json\"\n[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let settings = Settings::merge(Some(&file), Some("plain"), true, false).unwrap();
        assert_eq!(settings.format, OutputFormat::Plain);
        assert!(settings.verbose);
        assert_eq!(settings.log_level.as_deref(), Some("warn"));

        let settings = Settings::merge(Some(&file), None, false, false).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_format_flag_rejected() {
        assert!(Settings::merge(None, Some("yaml"), false, false).is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_cli_subcommands() {
        let cli = CliConfig::parse_from(["small-textkit", "capitalize", "hello", "world"]);
        match cli.command {
            Command::Capitalize { text } => assert_eq!(text, vec!["hello", "world"]),
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = CliConfig::parse_from(["small-textkit", "--format", "json", "size", "data.json"]);
        assert_eq!(cli.format.as_deref(), Some("json"));
        match cli.command {
            Command::Size { input } => assert_eq!(input.as_deref(), Some("data.json")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_size_help_explains_number_spelling() {
        use clap::CommandFactory;

        let cli = CliConfig::command();
        let size = cli.find_subcommand("size").unwrap();
        let long_about = size.get_long_about().unwrap().to_string();
        assert!(long_about.contains("re-serialized"));
        assert!(long_about.contains("1e400"));
    }
}
