use crate::utils::error::{Result, TextKitError};
use crate::utils::validation::{validate_path, Validate};
use std::fs;
use std::io::{self, ErrorKind, Read};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(String),
}

impl InputSource {
    /// `None` 或 `-` 代表標準輸入
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => InputSource::Stdin,
            Some(path) => InputSource::File(path.to_string()),
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        let read = match self {
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf).map(|_| buf)
            }
            InputSource::File(path) => {
                tracing::debug!("Reading input from {}", path);
                fs::read_to_string(path)
            }
        };

        read.map_err(|e| match e.kind() {
            // 內容不是 UTF-8，屬於輸入錯誤而不是讀檔失敗
            ErrorKind::InvalidData => TextKitError::InvalidInputError {
                message: format!("input is not valid UTF-8: {}", e),
            },
            _ => TextKitError::IoError(e),
        })
    }
}

impl Validate for InputSource {
    fn validate(&self) -> Result<()> {
        match self {
            InputSource::Stdin => Ok(()),
            InputSource::File(path) => validate_path("input", path),
        }
    }
}
