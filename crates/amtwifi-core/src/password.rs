// ── Administrative password resolution ──
//
// One password covers the whole request. It may come from the command
// line, the configuration document, the environment, or an interactive
// prompt, checked in that order. Command line and document must agree
// when both are given.

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::prompt::LineSource;
use crate::request::ConfigurationRequest;

pub const PASSWORD_PROMPT: &str = "Please enter AMT Password: ";

/// Password values gathered outside the configuration document.
///
/// Empty strings are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordSources<'a> {
    /// Value of the `--password` flag.
    pub cli: Option<&'a str>,
    /// Value of the password environment variable.
    pub env: Option<&'a str>,
}

/// Where the effective password came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PasswordSource {
    CommandLine,
    Document,
    Environment,
    Prompt,
}

/// Settle on the effective password for `request`.
///
/// A command-line password is written back into `request.password` so
/// later stages see a single value. A prompted line is accepted as-is,
/// even when empty; an exhausted prompt is a failure.
pub fn resolve_password<S: LineSource + ?Sized>(
    request: &mut ConfigurationRequest,
    sources: PasswordSources<'_>,
    prompt: &mut S,
) -> Result<(SecretString, PasswordSource), ConfigError> {
    let cli = sources.cli.filter(|value| !value.is_empty());
    let has_document_password = !request.password.is_empty();

    if let Some(cli) = cli {
        if has_document_password && request.password != cli {
            tracing::error!("command-line password does not match the configuration document");
            return Err(ConfigError::password(
                "command-line password does not match the configuration document",
            ));
        }
        request.password = cli.to_owned();
        return Ok(found(cli, PasswordSource::CommandLine));
    }

    if has_document_password {
        return Ok(found(&request.password, PasswordSource::Document));
    }

    if let Some(env) = sources.env.filter(|value| !value.is_empty()) {
        return Ok(found(env, PasswordSource::Environment));
    }

    match prompt.read_line(PASSWORD_PROMPT) {
        Some(line) => Ok(found(&line, PasswordSource::Prompt)),
        None => Err(ConfigError::password(
            "no password was supplied and none could be read",
        )),
    }
}

fn found(value: &str, source: PasswordSource) -> (SecretString, PasswordSource) {
    tracing::debug!(%source, "password resolved");
    (SecretString::from(value.to_owned()), source)
}
