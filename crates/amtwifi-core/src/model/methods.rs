// ── Wireless security enumerations ──
//
// Profiles carry the numeric codes used by the device-management protocol.
// Every code maps onto a variant so nothing is lost on the way in, but only
// a small closed subset is accepted by validation. Membership lives here,
// once, instead of being re-derived from raw integers at each call site.

use serde::{Deserialize, Serialize};
use strum::Display;

// ── AuthenticationMethod ────────────────────────────────────────────

/// Wi-Fi authentication method.
///
/// Only the WPA/WPA2 personal and enterprise methods are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum AuthenticationMethod {
    Other,
    OpenSystem,
    SharedKey,
    #[strum(to_string = "WPA-PSK")]
    WpaPsk,
    #[strum(to_string = "WPA-IEEE802.1x")]
    WpaIeee8021x,
    #[strum(to_string = "WPA2-PSK")]
    Wpa2Psk,
    #[strum(to_string = "WPA2-IEEE802.1x")]
    Wpa2Ieee8021x,
    DmtfReserved,
    #[strum(to_string = "WPA3-SAE")]
    Wpa3Sae,
    #[strum(to_string = "WPA3-OWE")]
    Wpa3Owe,
    VendorReserved,
    Unrecognized(u32),
}

impl AuthenticationMethod {
    pub const fn code(self) -> u32 {
        match self {
            Self::Other => 1,
            Self::OpenSystem => 2,
            Self::SharedKey => 3,
            Self::WpaPsk => 4,
            Self::WpaIeee8021x => 5,
            Self::Wpa2Psk => 6,
            Self::Wpa2Ieee8021x => 7,
            Self::DmtfReserved => 8,
            Self::Wpa3Sae => 32768,
            Self::Wpa3Owe => 32769,
            Self::VendorReserved => 32770,
            Self::Unrecognized(code) => code,
        }
    }

    /// Pre-shared-key methods: the profile carries a passphrase.
    pub const fn is_psk(self) -> bool {
        matches!(self, Self::WpaPsk | Self::Wpa2Psk)
    }

    /// Enterprise methods: the profile references an 802.1x profile.
    pub const fn is_ieee8021x(self) -> bool {
        matches!(self, Self::WpaIeee8021x | Self::Wpa2Ieee8021x)
    }

    pub const fn is_supported(self) -> bool {
        self.is_psk() || self.is_ieee8021x()
    }
}

impl From<u32> for AuthenticationMethod {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::Other,
            2 => Self::OpenSystem,
            3 => Self::SharedKey,
            4 => Self::WpaPsk,
            5 => Self::WpaIeee8021x,
            6 => Self::Wpa2Psk,
            7 => Self::Wpa2Ieee8021x,
            8 => Self::DmtfReserved,
            32768 => Self::Wpa3Sae,
            32769 => Self::Wpa3Owe,
            32770 => Self::VendorReserved,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<AuthenticationMethod> for u32 {
    fn from(method: AuthenticationMethod) -> Self {
        method.code()
    }
}

/// The zero code, which is not a valid method.
impl Default for AuthenticationMethod {
    fn default() -> Self {
        Self::from(0)
    }
}

// ── EncryptionMethod ────────────────────────────────────────────────

/// Wi-Fi encryption method. Only TKIP and CCMP are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum EncryptionMethod {
    Other,
    #[strum(to_string = "WEP")]
    Wep,
    #[strum(to_string = "TKIP")]
    Tkip,
    #[strum(to_string = "CCMP")]
    Ccmp,
    None,
    DmtfReserved,
    Unrecognized(u32),
}

impl EncryptionMethod {
    pub const fn code(self) -> u32 {
        match self {
            Self::Other => 1,
            Self::Wep => 2,
            Self::Tkip => 3,
            Self::Ccmp => 4,
            Self::None => 5,
            Self::DmtfReserved => 6,
            Self::Unrecognized(code) => code,
        }
    }

    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Tkip | Self::Ccmp)
    }
}

impl From<u32> for EncryptionMethod {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::Other,
            2 => Self::Wep,
            3 => Self::Tkip,
            4 => Self::Ccmp,
            5 => Self::None,
            6 => Self::DmtfReserved,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<EncryptionMethod> for u32 {
    fn from(method: EncryptionMethod) -> Self {
        method.code()
    }
}

/// The zero code, which is not a valid method.
impl Default for EncryptionMethod {
    fn default() -> Self {
        Self::from(0)
    }
}

// ── AuthenticationProtocol ──────────────────────────────────────────

/// 802.1x (EAP) authentication protocol.
///
/// EAP-TLS is certificate-based and needs a private key; PEAPv0 with
/// EAP-MSCHAPv2 is credential-based and needs a password. Everything else
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum AuthenticationProtocol {
    #[strum(to_string = "EAP-TLS")]
    EapTls,
    #[strum(to_string = "EAP-TTLS/MSCHAPv2")]
    EapTtlsMsChapV2,
    #[strum(to_string = "PEAPv0/EAP-MSCHAPv2")]
    PeapV0EapMsChapV2,
    #[strum(to_string = "PEAPv1/EAP-GTC")]
    PeapV1EapGtc,
    #[strum(to_string = "EAP-FAST/MSCHAPv2")]
    EapFastMsChapV2,
    #[strum(to_string = "EAP-FAST/GTC")]
    EapFastGtc,
    #[strum(to_string = "EAP-MD5")]
    EapMd5,
    #[strum(to_string = "EAP-PSK")]
    EapPsk,
    #[strum(to_string = "EAP-SIM")]
    EapSim,
    #[strum(to_string = "EAP-AKA")]
    EapAka,
    #[strum(to_string = "EAP-FAST/TLS")]
    EapFastTls,
    Unrecognized(u32),
}

impl AuthenticationProtocol {
    pub const fn code(self) -> u32 {
        match self {
            Self::EapTls => 0,
            Self::EapTtlsMsChapV2 => 1,
            Self::PeapV0EapMsChapV2 => 2,
            Self::PeapV1EapGtc => 3,
            Self::EapFastMsChapV2 => 4,
            Self::EapFastGtc => 5,
            Self::EapMd5 => 6,
            Self::EapPsk => 7,
            Self::EapSim => 8,
            Self::EapAka => 9,
            Self::EapFastTls => 10,
            Self::Unrecognized(code) => code,
        }
    }

    /// Certificate-based: the profile must carry a private key.
    pub const fn requires_private_key(self) -> bool {
        matches!(self, Self::EapTls)
    }

    /// Credential-based: the profile must carry a password.
    pub const fn requires_password(self) -> bool {
        matches!(self, Self::PeapV0EapMsChapV2)
    }

    pub const fn is_supported(self) -> bool {
        self.requires_private_key() || self.requires_password()
    }
}

impl From<u32> for AuthenticationProtocol {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::EapTls,
            1 => Self::EapTtlsMsChapV2,
            2 => Self::PeapV0EapMsChapV2,
            3 => Self::PeapV1EapGtc,
            4 => Self::EapFastMsChapV2,
            5 => Self::EapFastGtc,
            6 => Self::EapMd5,
            7 => Self::EapPsk,
            8 => Self::EapSim,
            9 => Self::EapAka,
            10 => Self::EapFastTls,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<AuthenticationProtocol> for u32 {
    fn from(protocol: AuthenticationProtocol) -> Self {
        protocol.code()
    }
}

/// The zero code, EAP-TLS.
impl Default for AuthenticationProtocol {
    fn default() -> Self {
        Self::from(0)
    }
}
