//! CLI-owned document loading and environment lookup.
//!
//! Builds a `ConfigurationRequest` from a document on disk, an inline JSON
//! string, single-profile flags, and an optional secrets document. Core
//! never reads files itself.

use std::path::Path;

use figment::{
    Figment,
    providers::{Format, Json, Serialized, Toml, Yaml},
};
use serde::{Deserialize, Serialize};

use amtwifi_core::ConfigurationRequest;

use crate::cli::WifiArgs;
use crate::error::CliError;

/// Environment variable holding the AMT administrative password.
pub const PASSWORD_ENV: &str = "AMT_PASSWORD";

/// Read the environment password, if one is set.
pub fn env_password() -> Option<String> {
    std::env::var(PASSWORD_ENV).ok()
}

// ── Secrets document ─────────────────────────────────────────────────

/// Profile secrets kept apart from the main configuration document.
#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsDocument {
    pub secrets: Vec<ProfileSecret>,
}

/// Secrets for one profile, matched by name against both collections.
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSecret {
    pub profile_name: String,
    pub psk_passphrase: String,
    pub private_key: String,
    pub password: String,
}

impl SecretsDocument {
    /// Copy secrets into blank fields of same-named profiles.
    ///
    /// Values already present in the request are never overwritten. Returns
    /// how many fields were filled.
    pub fn apply(&self, request: &mut ConfigurationRequest) -> usize {
        let mut filled = 0;
        for secret in &self.secrets {
            for profile in request
                .wifi_profiles
                .iter_mut()
                .filter(|p| p.profile_name == secret.profile_name)
            {
                filled += fill_blank(&mut profile.psk_passphrase, &secret.psk_passphrase);
            }
            for profile in request
                .ieee8021x_profiles
                .iter_mut()
                .filter(|p| p.profile_name == secret.profile_name)
            {
                filled += fill_blank(&mut profile.private_key, &secret.private_key);
                filled += fill_blank(&mut profile.password, &secret.password);
            }
        }
        filled
    }
}

fn fill_blank(field: &mut String, value: &str) -> usize {
    if field.is_empty() && !value.is_empty() {
        value.clone_into(field);
        1
    } else {
        0
    }
}

// ── Document loading ─────────────────────────────────────────────────

/// Assemble the request described by `args`.
///
/// Profiles from `--profile-name` and friends are appended after the
/// document's own profiles. The secrets document, when given, fills blank
/// secrets last, before anything is prompted for.
pub fn load_request(args: &WifiArgs) -> Result<ConfigurationRequest, CliError> {
    let flag_profile = args.profile.to_profile();
    if args.config.is_none() && args.config_json.is_none() && flag_profile.is_none() {
        return Err(CliError::Validation {
            field: "configure wifi".into(),
            reason: "give --config, --config-json, or the profile flags".into(),
        });
    }

    let mut figment = Figment::new().merge(Serialized::defaults(ConfigurationRequest::default()));

    if let Some(ref path) = args.config {
        figment = merge_document(figment, path, "config")?;
    }
    if let Some(ref json) = args.config_json {
        figment = figment.merge(Json::string(json));
    }

    let mut request: ConfigurationRequest = figment.extract()?;
    if let Some(profile) = flag_profile {
        request.wifi_profiles.push(profile);
    }

    if let Some(ref path) = args.secrets {
        let secrets: SecretsDocument = merge_document(
            Figment::new().merge(Serialized::defaults(SecretsDocument::default())),
            path,
            "secrets",
        )?
        .extract()?;
        let filled = secrets.apply(&mut request);
        tracing::debug!(filled, "secrets document applied");
    }

    tracing::debug!(
        wifi = request.wifi_profiles.len(),
        ieee8021x = request.ieee8021x_profiles.len(),
        "configuration request loaded"
    );
    Ok(request)
}

fn merge_document(figment: Figment, path: &Path, field: &str) -> Result<Figment, CliError> {
    if !path.is_file() {
        return Err(CliError::NoConfig {
            path: path.display().to_string(),
        });
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => Ok(figment.merge(Json::file(path))),
        Some("yaml" | "yml") => Ok(figment.merge(Yaml::file(path))),
        Some("toml") => Ok(figment.merge(Toml::file(path))),
        _ => Err(CliError::Validation {
            field: field.into(),
            reason: format!(
                "unsupported document type: {} (expected .json, .yaml, .yml, or .toml)",
                path.display()
            ),
        }),
    }
}
