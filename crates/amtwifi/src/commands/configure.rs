//! `configure` subcommands: Wi-Fi profiles, the Wi-Fi port, and TLS mode.

use amtwifi_core::{ConfigurationRequest, fill_secrets, validate};

use crate::cli::{ConfigureArgs, ConfigureCommand, GlobalOpts, PasswordArgs, TlsArgs, WifiArgs};
use crate::config;
use crate::error::CliError;
use crate::input::TerminalInput;
use crate::output::{self, ActionSummary, WifiSummary};

use super::resolve_password;

pub fn handle(args: ConfigureArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigureCommand::Wifi(args) => handle_wifi(&args, global),
        ConfigureCommand::EnableWifiPort(args) => handle_enable_wifi_port(&args, global),
        ConfigureCommand::Tls(args) => handle_tls(&args, global),
    }
}

// ── Wi-Fi profiles ───────────────────────────────────────────────────

fn handle_wifi(args: &WifiArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut request = config::load_request(args)?;
    let mut input = TerminalInput::from_stdin();

    // Only the password origin is reported; the value itself is never printed.
    let (_password, source) = resolve_password(&mut request, &args.auth, &mut input)?;
    let filled = fill_secrets(&mut request, &mut input)?;
    validate(&request)?;

    tracing::info!(
        wifi = request.wifi_profiles.len(),
        ieee8021x = request.ieee8021x_profiles.len(),
        secrets = filled,
        "wireless configuration ready"
    );
    let summary = WifiSummary::new(&request, source, filled);
    output::print_output(&output::render_wifi(&global.output, &summary)?, global.quiet)?;
    Ok(())
}

// ── Wi-Fi port ───────────────────────────────────────────────────────

fn handle_enable_wifi_port(args: &PasswordArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut request = ConfigurationRequest::default();
    let mut input = TerminalInput::from_stdin();
    let (_password, source) = resolve_password(&mut request, args, &mut input)?;

    tracing::info!(%source, "wifi port request ready");
    let summary = ActionSummary::new("enable wifi port", source, None);
    output::print_output(&output::render_action(&global.output, &summary)?, global.quiet)?;
    Ok(())
}

// ── TLS ──────────────────────────────────────────────────────────────

fn handle_tls(args: &TlsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut request = ConfigurationRequest::default();
    let mut input = TerminalInput::from_stdin();
    let (_password, source) = resolve_password(&mut request, &args.auth, &mut input)?;

    tracing::info!(%source, mode = %args.mode, "tls request ready");
    let summary = ActionSummary::new("configure tls", source, Some(args.mode));
    output::print_output(&output::render_action(&global.output, &summary)?, global.quiet)?;
    Ok(())
}
