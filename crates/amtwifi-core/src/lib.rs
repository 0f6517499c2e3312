//! Profile resolution and validation for AMT wireless configuration.
//!
//! This crate prepares a [`ConfigurationRequest`] (Wi-Fi profiles, 802.1x
//! profiles, and the administrative password) before it is handed to the
//! device-configuration layer. It never touches disk, the environment, or
//! the terminal directly; callers inject those through plain values and a
//! [`LineSource`].
//!
//! The pipeline runs in three stages, each stopping at its first failure:
//!
//! - **[`resolve_password()`]**: picks the password from the command line,
//!   the configuration document, the environment, or a prompt, and rejects
//!   a mismatch between the command line and the document.
//!
//! - **[`fill_secrets()`]**: reads one line per blank required secret
//!   (PSK passphrases, then 802.1x private keys or passwords). Exhausted
//!   input stops the walk and leaves what was already filled in place.
//!
//! - **[`validate()`]**: enforces per-profile field rules, priority
//!   uniqueness, and 802.1x cross-references, in collection order.
//!
//! Protocol enumerations ([`AuthenticationMethod`], [`EncryptionMethod`],
//! [`AuthenticationProtocol`], [`TlsMode`]) map the device's numeric codes
//! and own all membership tests.

pub mod error;
pub mod model;
pub mod password;
pub mod prompt;
pub mod request;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::ConfigError;
pub use model::{
    AuthenticationMethod, AuthenticationProtocol, EncryptionMethod, Ieee8021xProfile, TlsMode,
    TlsModeParseError, WifiProfile,
};
pub use password::{PasswordSource, PasswordSources, resolve_password};
pub use prompt::{LineSource, ReaderSource, SecretSlot, fill_secrets, pending_secrets};
pub use request::ConfigurationRequest;
pub use validate::{validate, verify_ieee8021x_profile, verify_ieee8021x_reference};
