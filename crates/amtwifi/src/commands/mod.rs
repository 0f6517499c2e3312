//! Command dispatch: bridges CLI args -> core pipeline -> output formatting.

pub mod configure;

use secrecy::SecretString;

use amtwifi_core::{ConfigurationRequest, LineSource, PasswordSource, PasswordSources};

use crate::cli::PasswordArgs;
use crate::config;
use crate::error::CliError;

/// Settle the administrative password for `request` from the usual chain:
/// flag, document, `AMT_PASSWORD`, then a prompt on `input`.
pub(crate) fn resolve_password(
    request: &mut ConfigurationRequest,
    args: &PasswordArgs,
    input: &mut impl LineSource,
) -> Result<(SecretString, PasswordSource), CliError> {
    let env = config::env_password();
    let sources = PasswordSources {
        cli: args.password.as_deref(),
        env: env.as_deref(),
    };
    Ok(amtwifi_core::resolve_password(request, sources, input)?)
}
