// ── Profile validation ──
//
// Read-only pass over a password-resolved, secret-filled request. Wi-Fi
// profiles are checked in collection order, each one completely (fields,
// then its 802.1x reference) before the next. The first broken rule wins.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::model::{Ieee8021xProfile, WifiProfile};
use crate::request::ConfigurationRequest;

/// Accept or reject `request`.
pub fn validate(request: &ConfigurationRequest) -> Result<(), ConfigError> {
    let mut verified = HashSet::new();
    for profile in &request.wifi_profiles {
        verify_wifi_profile(request, profile, &mut verified)?;
    }
    tracing::debug!(
        wifi = request.wifi_profiles.len(),
        ieee8021x = verified.len(),
        "configuration accepted"
    );
    Ok(())
}

fn verify_wifi_profile<'a>(
    request: &'a ConfigurationRequest,
    profile: &'a WifiProfile,
    verified: &mut HashSet<&'a str>,
) -> Result<(), ConfigError> {
    let name = profile.profile_name.as_str();

    if name.is_empty() {
        return Err(ConfigError::invalid(name, "missing ProfileName"));
    }
    let named = request
        .wifi_profiles
        .iter()
        .filter(|other| other.profile_name == name)
        .count();
    if named > 1 {
        return Err(ConfigError::invalid(name, "duplicate ProfileName"));
    }
    if profile.ssid.is_empty() {
        return Err(ConfigError::invalid(name, "missing SSID"));
    }
    if profile.priority <= 0 {
        return Err(ConfigError::invalid(
            name,
            format!("invalid Priority {}, must be greater than zero", profile.priority),
        ));
    }
    let sharing = request
        .wifi_profiles
        .iter()
        .filter(|other| other.priority == profile.priority)
        .count();
    if sharing > 1 {
        return Err(ConfigError::invalid(
            name,
            format!("duplicate Priority {}", profile.priority),
        ));
    }

    let method = profile.authentication_method;
    if !method.is_supported() {
        return Err(ConfigError::invalid(
            name,
            format!("unsupported AuthenticationMethod {} ({method})", method.code()),
        ));
    }
    let encryption = profile.encryption_method;
    if !encryption.is_supported() {
        return Err(ConfigError::invalid(
            name,
            format!("unsupported EncryptionMethod {} ({encryption})", encryption.code()),
        ));
    }

    if method.is_psk() {
        if profile.psk_passphrase.is_empty() {
            return Err(ConfigError::invalid(name, "missing PskPassphrase"));
        }
        if !profile.ieee8021x_profile_name.is_empty() {
            return Err(ConfigError::invalid(
                name,
                "Ieee8021xProfileName is not allowed with a PSK method",
            ));
        }
        return Ok(());
    }

    if !profile.psk_passphrase.is_empty() {
        return Err(ConfigError::invalid(
            name,
            "PskPassphrase is not allowed with an IEEE 802.1x method",
        ));
    }
    let reference = profile.ieee8021x_profile_name.as_str();
    if verified.contains(reference) {
        return Ok(());
    }
    verify_ieee8021x_reference(request, reference)?;
    verified.insert(reference);
    Ok(())
}

/// Resolve `name` to exactly one 802.1x profile and check that profile.
///
/// Matches are counted before any field is looked at: no match is a
/// dangling reference, several matches an ambiguous one.
pub fn verify_ieee8021x_reference(
    request: &ConfigurationRequest,
    name: &str,
) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::invalid(name, "missing Ieee8021xProfileName"));
    }
    let mut matches = request.ieee8021x_matches(name);
    let Some(profile) = matches.next() else {
        return Err(ConfigError::invalid(name, "no IEEE 802.1x profile with this name"));
    };
    if matches.next().is_some() {
        return Err(ConfigError::invalid(
            name,
            "more than one IEEE 802.1x profile with this name",
        ));
    }
    verify_ieee8021x_profile(profile)
}

/// Check one 802.1x profile's required fields and protocol.
pub fn verify_ieee8021x_profile(profile: &Ieee8021xProfile) -> Result<(), ConfigError> {
    let name = profile.profile_name.as_str();

    if profile.username.is_empty() {
        return Err(ConfigError::invalid(name, "missing Username"));
    }
    if profile.client_cert.is_empty() {
        return Err(ConfigError::invalid(name, "missing ClientCert"));
    }
    if profile.ca_cert.is_empty() {
        return Err(ConfigError::invalid(name, "missing CACert"));
    }

    let protocol = profile.authentication_protocol;
    match profile.required_secret() {
        None => Err(ConfigError::invalid(
            name,
            format!("unsupported AuthenticationProtocol {} ({protocol})", protocol.code()),
        )),
        Some("") if protocol.requires_private_key() => {
            Err(ConfigError::invalid(name, "missing PrivateKey"))
        }
        Some("") => Err(ConfigError::invalid(name, "missing Password")),
        Some(_) => Ok(()),
    }
}
