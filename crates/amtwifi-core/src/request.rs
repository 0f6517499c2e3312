// ── Configuration request ──
//
// Built once per invocation by the command line and document loaders,
// mutated in place by password resolution and secret entry, then validated
// read-only. Never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Ieee8021xProfile, WifiProfile};
use crate::prompt;

/// Everything needed to push wireless settings to one device.
///
/// Collection order is meaningful: it is the order profiles are validated
/// and the order missing secrets are prompted for.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationRequest {
    /// Administrative password from the configuration document. Empty when absent.
    pub password: String,

    #[serde(rename = "wifiConfigs")]
    pub wifi_profiles: Vec<WifiProfile>,

    #[serde(rename = "ieee8021xConfigs")]
    pub ieee8021x_profiles: Vec<Ieee8021xProfile>,
}

impl ConfigurationRequest {
    /// 802.1x profiles carrying `name`, in collection order.
    pub fn ieee8021x_matches<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Ieee8021xProfile> + 'a {
        self.ieee8021x_profiles
            .iter()
            .filter(move |profile| profile.profile_name == name)
    }

    /// True when no required secret is left blank.
    pub fn is_secret_complete(&self) -> bool {
        prompt::pending_secrets(self).is_empty()
    }
}

impl fmt::Debug for ConfigurationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationRequest")
            .field("password", &if self.password.is_empty() { "" } else { "<redacted>" })
            .field("wifi_profiles", &self.wifi_profiles)
            .field("ieee8021x_profiles", &self.ieee8021x_profiles)
            .finish()
    }
}
