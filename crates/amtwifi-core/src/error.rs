// ── Core error types ──
//
// Three failure kinds, one per stage: password resolution, interactive
// secret entry, and profile validation. Every stage stops at the first
// failure, so each variant describes exactly one problem.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No usable password, or the command-line and document passwords disagree.
    #[error("missing or incorrect password: {reason}")]
    MissingOrIncorrectPassword { reason: String },

    /// Input ran out before every pending secret was entered.
    #[error("invalid user input: input ended after {filled} of {pending} secrets")]
    InvalidUserInput { filled: usize, pending: usize },

    /// A structural, uniqueness, cross-reference, or required-field rule is broken.
    #[error("missing or invalid configuration for profile '{profile}': {reason}")]
    MissingOrInvalidConfiguration { profile: String, reason: String },
}

impl ConfigError {
    pub(crate) fn password(reason: impl Into<String>) -> Self {
        Self::MissingOrIncorrectPassword {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(profile: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::error!(profile, %reason, "configuration rejected");
        Self::MissingOrInvalidConfiguration {
            profile: profile.to_owned(),
            reason,
        }
    }
}
