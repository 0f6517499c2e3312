//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.
//! Nothing rendered here ever carries a secret.

use std::io::{self, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use amtwifi_core::{ConfigurationRequest, PasswordSource, TlsMode, WifiProfile};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Summaries ────────────────────────────────────────────────────────

/// Outcome of a successful `configure wifi` run.
#[derive(Debug, Serialize)]
pub struct WifiSummary {
    pub password_source: String,
    pub secrets_entered: usize,
    pub wifi_profiles: Vec<ProfileRow>,
}

/// One Wi-Fi profile, minus its passphrase.
#[derive(Debug, Serialize, Tabled)]
pub struct ProfileRow {
    #[tabled(rename = "Profile")]
    pub profile_name: String,
    #[tabled(rename = "SSID")]
    pub ssid: String,
    #[tabled(rename = "Priority")]
    pub priority: i32,
    #[tabled(rename = "Authentication")]
    pub authentication: String,
    #[tabled(rename = "Encryption")]
    pub encryption: String,
    #[tabled(rename = "802.1x Profile")]
    pub ieee8021x_profile: String,
}

impl From<&WifiProfile> for ProfileRow {
    fn from(p: &WifiProfile) -> Self {
        Self {
            profile_name: p.profile_name.clone(),
            ssid: p.ssid.clone(),
            priority: p.priority,
            authentication: p.authentication_method.to_string(),
            encryption: p.encryption_method.to_string(),
            ieee8021x_profile: if p.ieee8021x_profile_name.is_empty() {
                "-".into()
            } else {
                p.ieee8021x_profile_name.clone()
            },
        }
    }
}

impl WifiSummary {
    pub fn new(request: &ConfigurationRequest, source: PasswordSource, filled: usize) -> Self {
        Self {
            password_source: source.to_string(),
            secrets_entered: filled,
            wifi_profiles: request.wifi_profiles.iter().map(ProfileRow::from).collect(),
        }
    }
}

/// Outcome of `configure tls` and `configure enable-wifi-port`.
#[derive(Debug, Serialize)]
pub struct ActionSummary {
    pub action: &'static str,
    pub password_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_mode: Option<String>,
}

impl ActionSummary {
    pub fn new(action: &'static str, source: PasswordSource, tls_mode: Option<TlsMode>) -> Self {
        Self {
            action,
            password_source: source.to_string(),
            tls_mode: tls_mode.map(|mode| mode.to_string()),
        }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

pub fn render_wifi(format: &OutputFormat, summary: &WifiSummary) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(format!(
            "{}\nPassword from {}, {} secret(s) entered",
            render_table(&summary.wifi_profiles),
            summary.password_source,
            summary.secrets_entered
        )),
        OutputFormat::Json => render_json(summary),
        OutputFormat::Yaml => render_yaml(summary),
        OutputFormat::Plain => Ok(summary
            .wifi_profiles
            .iter()
            .map(|row| row.profile_name.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_action(format: &OutputFormat, summary: &ActionSummary) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => {
            let mut out = format!(
                "{:<16} {}\n{:<16} {}",
                "Action:", summary.action, "Password from:", summary.password_source
            );
            if let Some(ref mode) = summary.tls_mode {
                out.push_str(&format!("\n{:<16} {mode}", "TLS mode:"));
            }
            Ok(out)
        }
        OutputFormat::Json => render_json(summary),
        OutputFormat::Yaml => render_yaml(summary),
        OutputFormat::Plain => Ok(summary
            .tls_mode
            .clone()
            .unwrap_or_else(|| summary.action.to_owned())),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) -> Result<(), CliError> {
    if quiet || output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(data)?)
}

fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}
