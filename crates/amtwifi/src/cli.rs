//! Clap derive structures for the `amtwifi` CLI.
//!
//! Defines the command tree, global flags, and shared argument groups.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use amtwifi_core::{AuthenticationMethod, EncryptionMethod, TlsMode, WifiProfile};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// amtwifi -- prepare AMT wireless profiles for provisioning
#[derive(Debug, Parser)]
#[command(
    name = "amtwifi",
    version,
    about = "Prepare and validate AMT wireless and 802.1x profiles",
    long_about = "Resolves the AMT administrative password, collects missing\n\
        profile secrets, and validates Wi-Fi and IEEE 802.1x profiles before\n\
        they are sent to the device.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "AMTWIFI_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit log filter (overrides -v), e.g. `debug` or `amtwifi_core=trace`
    #[arg(long, env = "AMTWIFI_LOG", global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prepare device configuration requests
    #[command(alias = "cfg")]
    Configure(ConfigureArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

// ── Configure ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigureArgs {
    #[command(subcommand)]
    pub command: ConfigureCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigureCommand {
    /// Resolve, fill, and validate Wi-Fi and 802.1x profiles
    #[command(alias = "addwifisettings")]
    Wifi(WifiArgs),

    /// Enable the local Wi-Fi port
    #[command(alias = "enablewifiport")]
    EnableWifiPort(PasswordArgs),

    /// Select the TLS mode
    Tls(TlsArgs),
}

/// The administrative password, shared by every configure subcommand.
#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// AMT administrative password (falls back to the document, then AMT_PASSWORD, then a prompt)
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct WifiArgs {
    #[command(flatten)]
    pub auth: PasswordArgs,

    /// Configuration document (.json, .yaml, .yml, or .toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Inline JSON configuration document
    #[arg(long, value_name = "JSON", conflicts_with = "config")]
    pub config_json: Option<String>,

    /// Secrets document filling blank passphrases, private keys, and passwords by profile name
    #[arg(long, value_name = "FILE")]
    pub secrets: Option<PathBuf>,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// A single Wi-Fi profile given entirely through flags.
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Profile name
    #[arg(long)]
    pub profile_name: Option<String>,

    /// Network SSID
    #[arg(long)]
    pub ssid: Option<String>,

    /// Profile priority (must be unique and greater than zero)
    #[arg(long, allow_negative_numbers = true)]
    pub priority: Option<i32>,

    /// Authentication method code (4 WPA-PSK, 5 WPA-IEEE8021x, 6 WPA2-PSK, 7 WPA2-IEEE8021x)
    #[arg(long)]
    pub authentication_method: Option<u32>,

    /// Encryption method code (3 TKIP, 4 CCMP)
    #[arg(long)]
    pub encryption_method: Option<u32>,

    /// Pre-shared key for PSK methods
    #[arg(long)]
    pub psk_passphrase: Option<String>,

    /// Name of the 802.1x profile an enterprise profile uses
    #[arg(long = "ieee8021x-profile-name")]
    pub ieee8021x_profile_name: Option<String>,
}

impl ProfileArgs {
    /// Build a profile when any profile flag was given.
    pub fn to_profile(&self) -> Option<WifiProfile> {
        let given = self.profile_name.is_some()
            || self.ssid.is_some()
            || self.priority.is_some()
            || self.authentication_method.is_some()
            || self.encryption_method.is_some()
            || self.psk_passphrase.is_some()
            || self.ieee8021x_profile_name.is_some();
        if !given {
            return None;
        }
        Some(WifiProfile {
            profile_name: self.profile_name.clone().unwrap_or_default(),
            ssid: self.ssid.clone().unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            authentication_method: self
                .authentication_method
                .map(AuthenticationMethod::from)
                .unwrap_or_default(),
            encryption_method: self
                .encryption_method
                .map(EncryptionMethod::from)
                .unwrap_or_default(),
            psk_passphrase: self.psk_passphrase.clone().unwrap_or_default(),
            ieee8021x_profile_name: self.ieee8021x_profile_name.clone().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Args)]
pub struct TlsArgs {
    #[command(flatten)]
    pub auth: PasswordArgs,

    /// TLS mode: Server, ServerAndNonTLS, Mutual, or MutualAndNonTLS
    #[arg(long, default_value_t = TlsMode::Server)]
    pub mode: TlsMode,
}
