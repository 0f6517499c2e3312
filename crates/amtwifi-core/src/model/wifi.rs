// ── Wi-Fi profile ──

use std::fmt;

use serde::{Deserialize, Serialize};

use super::methods::{AuthenticationMethod, EncryptionMethod};
use super::redact;

/// One wireless profile to be written to the device.
///
/// Exactly one of `psk_passphrase` / `ieee8021x_profile_name` is meaningful,
/// depending on whether the method is PSK or enterprise.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WifiProfile {
    pub profile_name: String,
    pub ssid: String,
    /// Apply order on the device. Positive, unique within the request.
    pub priority: i32,
    pub authentication_method: AuthenticationMethod,
    pub encryption_method: EncryptionMethod,
    pub psk_passphrase: String,
    pub ieee8021x_profile_name: String,
}

impl fmt::Debug for WifiProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiProfile")
            .field("profile_name", &self.profile_name)
            .field("ssid", &self.ssid)
            .field("priority", &self.priority)
            .field("authentication_method", &self.authentication_method)
            .field("encryption_method", &self.encryption_method)
            .field("psk_passphrase", &redact(&self.psk_passphrase))
            .field("ieee8021x_profile_name", &self.ieee8021x_profile_name)
            .finish()
    }
}
