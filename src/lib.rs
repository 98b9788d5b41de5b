pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{cli::InputSource, toml_config::TomlConfig, Settings};
pub use crate::core::{
    runner::{Runner, Task},
    OutputFormat,
};
pub use domain::size::{estimate, size_bytes, SizeEstimate};
pub use domain::text::capitalize;
pub use utils::error::{Result, TextKitError};
