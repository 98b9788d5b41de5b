#[cfg(feature = "cli")]
use crate::config::{cli::InputSource, Command};
use crate::core::OutputFormat;
use crate::domain::{size, text};
use crate::utils::error::{Result, TextKitError};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Capitalize { text: String },
    Size { json: String },
}

#[cfg(feature = "cli")]
impl Task {
    /// 把子命令轉成工作；沒有給文字或檔案時從標準輸入讀取
    pub fn from_command(command: &Command) -> Result<Self> {
        match command {
            Command::Capitalize { text } if !text.is_empty() => Ok(Task::Capitalize {
                text: text.join(" "),
            }),
            Command::Capitalize { .. } => Ok(Task::Capitalize {
                text: InputSource::Stdin.read_to_string()?,
            }),
            Command::Size { input } => {
                let source = InputSource::from_arg(input.as_deref());
                source.validate()?;
                Ok(Task::Size {
                    json: source.read_to_string()?,
                })
            }
        }
    }
}

/// 執行單一工作並產生要輸出的文字
pub struct Runner {
    format: OutputFormat,
}

impl Runner {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn run(&self, task: &Task) -> Result<String> {
        match task {
            Task::Capitalize { text } => self.run_capitalize(text),
            Task::Size { json } => self.run_size(json),
        }
    }

    fn run_capitalize(&self, input: &str) -> Result<String> {
        tracing::debug!("Capitalizing {} characters", input.chars().count());
        let output = text::capitalize(input);

        match self.format {
            OutputFormat::Plain => Ok(output),
            OutputFormat::Json => Ok(serde_json::to_string(&json!({ "capitalized": output }))?),
        }
    }

    fn run_size(&self, input: &str) -> Result<String> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| TextKitError::InvalidInputError {
                message: format!("input is not valid JSON: {}", e),
            })?;

        let estimate = size::estimate(&value)?;
        tracing::debug!(
            "Estimated size: {} characters, {} bytes",
            estimate.utf16_units,
            estimate.utf8_bytes
        );

        match self.format {
            OutputFormat::Plain => Ok(estimate.utf16_units.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(&json!({
                "size_bytes": estimate.utf16_units,
                "utf16_units": estimate.utf16_units,
                "utf8_bytes": estimate.utf8_bytes,
            }))?),
        }
    }
}
