// ── Domain model ──
//
// Profile types as they arrive from the command line or a configuration
// document. Secrets are plain strings scoped to one request; an empty
// string means "not provided".

pub mod ieee8021x;
pub mod methods;
pub mod tls;
pub mod wifi;

pub use ieee8021x::Ieee8021xProfile;
pub use methods::{AuthenticationMethod, AuthenticationProtocol, EncryptionMethod};
pub use tls::{TlsMode, TlsModeParseError};
pub use wifi::WifiProfile;

/// Debug stand-in for a secret field.
fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "<redacted>" }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secrets() {
        let wifi = WifiProfile {
            profile_name: "home".into(),
            psk_passphrase: "hunter22".into(),
            ..Default::default()
        };
        let ieee = Ieee8021xProfile {
            profile_name: "corp".into(),
            password: "s3cret".into(),
            private_key: "-----BEGIN KEY-----".into(),
            ..Default::default()
        };
        let rendered = format!("{wifi:?} {ieee:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter22"));
        assert!(!rendered.contains("s3cret"));
        assert!(!rendered.contains("BEGIN KEY"));
    }

    #[test]
    fn required_secret_follows_protocol() {
        let mut profile = Ieee8021xProfile {
            password: "pw".into(),
            private_key: "key".into(),
            ..Default::default()
        };
        profile.authentication_protocol = AuthenticationProtocol::EapTls;
        assert_eq!(profile.required_secret(), Some("key"));
        profile.authentication_protocol = AuthenticationProtocol::PeapV0EapMsChapV2;
        assert_eq!(profile.required_secret(), Some("pw"));
        profile.authentication_protocol = AuthenticationProtocol::EapMd5;
        assert_eq!(profile.required_secret(), None);
    }

    #[test]
    fn profiles_deserialize_from_camel_case_documents() {
        let wifi: WifiProfile = serde_json::from_str(
            r#"{"profileName":"wifiWPA","ssid":"ssid","pskPassphrase":"testPSK","priority":1,"authenticationMethod":4,"encryptionMethod":4}"#,
        )
        .unwrap();
        assert_eq!(wifi.authentication_method, AuthenticationMethod::WpaPsk);
        assert_eq!(wifi.encryption_method, EncryptionMethod::Ccmp);
        assert_eq!(wifi.priority, 1);
        assert!(wifi.ieee8021x_profile_name.is_empty());
    }
}
