//! Error types for pintidy

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the pintidy application
#[derive(Debug, Error)]
pub enum PintidyError {
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No mapping for tag: {0}")]
    UnmappedTag(String),

    #[error("Pinboard rejected the request: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl PintidyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PintidyError::ConfigNotFound(_) => 2,
            PintidyError::Api(_) => 3,
            PintidyError::UnmappedTag(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PintidyError::ConfigNotFound(path) => {
                format!(
                    "Configuration file not found: {}\n\n\
                    Suggestions:\n\
                    • Create the file with your API token and tag mappings:\n\
                    \n\
                    token = \"username:A1B2C3D4E5\"\n\
                    parent_tags = [\"books\", \"programming\"]\n\
                    \n\
                    [mappings]\n\
                    toread = \"books\"\n\
                    \n\
                    • Or point at an existing file with --config <path>",
                    path.display()
                )
            }
            PintidyError::Config(msg) => {
                if msg.contains("token") {
                    format!(
                        "{}\n\n\
                        The token is the 'username:HEX' value shown on\n\
                        https://pinboard.in/settings/password\n\
                        It can also be supplied via the PINTIDY_TOKEN environment variable.",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            PintidyError::UnmappedTag(tag) => {
                format!(
                    "No mapping for tag: '{}'\n\n\
                    Suggestions:\n\
                    • Add it under [mappings] in your configuration file\n\
                    • Or list it in parent_tags if it is a final category\n\
                    • Run 'pintidy unmapped' to see every uncovered tag",
                    tag
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PintidyError
pub type Result<T> = std::result::Result<T, PintidyError>;
