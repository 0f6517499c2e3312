//! CLI error types with miette diagnostics.
//!
//! Maps `ConfigError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use amtwifi_core::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const PASSWORD: i32 = 3;
    pub const USER_INPUT: i32 = 4;
    pub const CONFIGURATION: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Password ─────────────────────────────────────────────────────

    #[error("Missing or incorrect AMT password: {reason}")]
    #[diagnostic(
        code(amtwifi::password),
        help(
            "Pass --password, set AMT_PASSWORD, or put `password` in the configuration document.\n\
             When both --password and the document carry one, they must match."
        )
    )]
    Password { reason: String },

    // ── Secret entry ─────────────────────────────────────────────────

    #[error("Input ended after {filled} of {pending} secrets were entered")]
    #[diagnostic(
        code(amtwifi::user_input),
        help(
            "Provide one line per missing secret on standard input,\n\
             or put the secrets in the configuration document."
        )
    )]
    UserInput { filled: usize, pending: usize },

    // ── Profile validation ───────────────────────────────────────────

    #[error("Invalid configuration for profile '{profile}': {reason}")]
    #[diagnostic(
        code(amtwifi::configuration),
        help("Fix the profile in the configuration document or flags and run again.")
    )]
    Configuration { profile: String, reason: String },

    // ── Document loading ─────────────────────────────────────────────

    #[error("Configuration file not found")]
    #[diagnostic(code(amtwifi::no_config), help("Expected at: {path}"))]
    NoConfig { path: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(amtwifi::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(
        code(amtwifi::config),
        help("Check the document keys: password, wifiConfigs, ieee8021xConfigs.")
    )]
    Config(Box<figment::Error>),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render JSON output: {0}")]
    #[diagnostic(code(amtwifi::json))]
    Json(#[from] serde_json::Error),

    #[error("Could not render YAML output: {0}")]
    #[diagnostic(code(amtwifi::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingOrIncorrectPassword { reason } => Self::Password { reason },
            ConfigError::InvalidUserInput { filled, pending } => {
                Self::UserInput { filled, pending }
            }
            ConfigError::MissingOrInvalidConfiguration { profile, reason } => {
                Self::Configuration { profile, reason }
            }
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Password { .. } => exit_code::PASSWORD,
            Self::UserInput { .. } => exit_code::USER_INPUT,
            Self::Configuration { .. } | Self::Config(_) => exit_code::CONFIGURATION,
            Self::Validation { .. } => exit_code::USAGE,
            Self::NoConfig { .. } | Self::Io(_) | Self::Json(_) | Self::Yaml(_) => {
                exit_code::GENERAL
            }
        }
    }
}
