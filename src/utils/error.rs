use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextKitError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input: {message}")]
    InvalidInputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Serialization,
    Io,
    Configuration,
    Input,
}

impl TextKitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TextKitError::SerializationError(_) => ErrorCategory::Serialization,
            TextKitError::IoError(_) => ErrorCategory::Io,
            TextKitError::ConfigValidationError { .. }
            | TextKitError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TextKitError::InvalidInputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入內容有問題，換個輸入即可
            TextKitError::InvalidInputError { .. } => ErrorSeverity::Medium,
            TextKitError::SerializationError(_)
            | TextKitError::ConfigValidationError { .. }
            | TextKitError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            TextKitError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TextKitError::SerializationError(_) => {
                "Make sure the value has string map keys and no unserializable parts".to_string()
            }
            TextKitError::IoError(_) => {
                "Check that the input file exists and is readable".to_string()
            }
            TextKitError::ConfigValidationError { field, .. } => {
                format!("Fix the TOML syntax near '{}'", field)
            }
            TextKitError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the config file or CLI flags", field)
            }
            TextKitError::InvalidInputError { .. } => {
                "Provide UTF-8 text, and well-formed JSON for `size`".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Serialization => format!("無法序列化輸入值: {}", self),
            ErrorCategory::Io => format!("讀取檔案失敗: {}", self),
            ErrorCategory::Configuration => format!("配置錯誤: {}", self),
            ErrorCategory::Input => format!("輸入格式錯誤: {}", self),
        }
    }

    /// 依嚴重程度決定 CLI 退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextKitError>;
