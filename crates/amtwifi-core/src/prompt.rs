// ── Interactive secret entry ──
//
// Missing secrets are read from a line source, one line per secret, in
// request order. The first exhausted read ends the walk: secrets filled so
// far keep their values and the rest stay blank. There is no retry.

use std::io::BufRead;

use crate::error::ConfigError;
use crate::request::ConfigurationRequest;

// ── Line sources ────────────────────────────────────────────────────

/// Something that hands out one line of user input at a time.
pub trait LineSource {
    /// Read the next line, without its line terminator.
    ///
    /// Returns `None` once the source is exhausted or unreadable.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        (**self).read_line(prompt)
    }
}

/// Line source over any buffered reader. Prompts are not echoed.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(err) => {
                tracing::warn!(prompt, error = %err, "failed to read input line");
                None
            }
        }
    }
}

// ── Pending secrets ─────────────────────────────────────────────────

/// A blank secret field, addressed by collection index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSlot {
    PskPassphrase(usize),
    PrivateKey(usize),
    Password(usize),
}

impl SecretSlot {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PskPassphrase(_) => "PskPassphrase",
            Self::PrivateKey(_) => "PrivateKey",
            Self::Password(_) => "Password",
        }
    }

    fn profile_name(self, request: &ConfigurationRequest) -> &str {
        let name = match self {
            Self::PskPassphrase(i) => request.wifi_profiles.get(i).map(|p| &p.profile_name),
            Self::PrivateKey(i) | Self::Password(i) => {
                request.ieee8021x_profiles.get(i).map(|p| &p.profile_name)
            }
        };
        name.map_or("", String::as_str)
    }

    fn field_mut(self, request: &mut ConfigurationRequest) -> Option<&mut String> {
        match self {
            Self::PskPassphrase(i) => request
                .wifi_profiles
                .get_mut(i)
                .map(|p| &mut p.psk_passphrase),
            Self::PrivateKey(i) => request
                .ieee8021x_profiles
                .get_mut(i)
                .map(|p| &mut p.private_key),
            Self::Password(i) => request
                .ieee8021x_profiles
                .get_mut(i)
                .map(|p| &mut p.password),
        }
    }
}

/// Blank required secrets, in prompt order.
///
/// Wi-Fi profiles come first: a PSK-method profile with no passphrase is
/// pending. Then 802.1x profiles: the private key for certificate-based
/// protocols, the password for credential-based ones. Profiles whose
/// method or protocol is unsupported need no secret here; validation
/// rejects them later.
pub fn pending_secrets(request: &ConfigurationRequest) -> Vec<SecretSlot> {
    let wifi = request
        .wifi_profiles
        .iter()
        .enumerate()
        .filter(|(_, p)| p.authentication_method.is_psk() && p.psk_passphrase.is_empty())
        .map(|(i, _)| SecretSlot::PskPassphrase(i));

    let ieee8021x = request
        .ieee8021x_profiles
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            let protocol = p.authentication_protocol;
            if protocol.requires_private_key() && p.private_key.is_empty() {
                Some(SecretSlot::PrivateKey(i))
            } else if protocol.requires_password() && p.password.is_empty() {
                Some(SecretSlot::Password(i))
            } else {
                None
            }
        });

    wifi.chain(ieee8021x).collect()
}

// ── Filling ─────────────────────────────────────────────────────────

/// Fill every pending secret from `input`. Returns how many were filled.
///
/// Fails with [`ConfigError::InvalidUserInput`] as soon as a read comes back
/// empty-handed; nothing already filled is rolled back.
pub fn fill_secrets<S: LineSource + ?Sized>(
    request: &mut ConfigurationRequest,
    input: &mut S,
) -> Result<usize, ConfigError> {
    let pending = pending_secrets(request);
    let total = pending.len();

    for (filled, slot) in pending.into_iter().enumerate() {
        let prompt = format!(
            "Please enter {} for {}: ",
            slot.label(),
            slot.profile_name(request)
        );
        let Some(value) = input.read_line(&prompt) else {
            tracing::warn!(filled, pending = total, "input exhausted before all secrets were entered");
            return Err(ConfigError::InvalidUserInput {
                filled,
                pending: total,
            });
        };
        tracing::debug!(secret = slot.label(), profile = slot.profile_name(request), "secret entered");
        if let Some(field) = slot.field_mut(request) {
            *field = value;
        }
    }

    Ok(total)
}
