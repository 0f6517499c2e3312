// ── 802.1x profile ──

use std::fmt;

use serde::{Deserialize, Serialize};

use super::methods::AuthenticationProtocol;
use super::redact;

/// Enterprise credentials, referenced by name from enterprise Wi-Fi profiles.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ieee8021xProfile {
    pub profile_name: String,
    pub username: String,
    /// Required when the protocol is credential-based.
    pub password: String,
    pub authentication_protocol: AuthenticationProtocol,
    pub client_cert: String,
    pub ca_cert: String,
    /// Required when the protocol is certificate-based.
    pub private_key: String,
}

impl Ieee8021xProfile {
    /// The secret the protocol needs, if the protocol is supported at all.
    pub fn required_secret(&self) -> Option<&str> {
        let protocol = self.authentication_protocol;
        if protocol.requires_private_key() {
            Some(&self.private_key)
        } else if protocol.requires_password() {
            Some(&self.password)
        } else {
            None
        }
    }
}

impl fmt::Debug for Ieee8021xProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ieee8021xProfile")
            .field("profile_name", &self.profile_name)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("authentication_protocol", &self.authentication_protocol)
            .field("client_cert", &self.client_cert)
            .field("ca_cert", &self.ca_cert)
            .field("private_key", &redact(&self.private_key))
            .finish()
    }
}
