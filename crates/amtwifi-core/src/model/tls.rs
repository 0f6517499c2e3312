// ── TLS mode ──
//
// The mode the device's TLS listener is switched to. Text form is what the
// user types on the command line; numeric form is the wire code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// TLS mode. Defaults to server-authenticated TLS only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum TlsMode {
    #[default]
    Server,
    ServerAndNonTls,
    Mutual,
    MutualAndNonTls,
    /// A code outside the four known modes. Displays as "Unknown".
    Unknown(u32),
}

impl TlsMode {
    /// The four known modes, in code order.
    pub const ALL: [Self; 4] = [
        Self::Server,
        Self::ServerAndNonTls,
        Self::Mutual,
        Self::MutualAndNonTls,
    ];

    pub const fn code(self) -> u32 {
        match self {
            Self::Server => 0,
            Self::ServerAndNonTls => 1,
            Self::Mutual => 2,
            Self::MutualAndNonTls => 3,
            Self::Unknown(code) => code,
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<u32> for TlsMode {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Server,
            1 => Self::ServerAndNonTls,
            2 => Self::Mutual,
            3 => Self::MutualAndNonTls,
            other => Self::Unknown(other),
        }
    }
}

impl From<TlsMode> for u32 {
    fn from(mode: TlsMode) -> Self {
        mode.code()
    }
}

impl fmt::Display for TlsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Server => "Server",
            Self::ServerAndNonTls => "ServerAndNonTLS",
            Self::Mutual => "Mutual",
            Self::MutualAndNonTls => "MutualAndNonTLS",
            Self::Unknown(_) => "Unknown",
        };
        f.write_str(name)
    }
}

/// An unrecognized TLS mode string.
///
/// Carries the default mode so callers that want to keep going have a
/// safe value to fall back on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid TLS mode '{input}' (expected Server, ServerAndNonTLS, Mutual, or MutualAndNonTLS)")]
pub struct TlsModeParseError {
    input: String,
    fallback: TlsMode,
}

impl TlsModeParseError {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn fallback(&self) -> TlsMode {
        self.fallback
    }
}

impl FromStr for TlsMode {
    type Err = TlsModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.to_string() == s)
            .ok_or_else(|| TlsModeParseError {
                input: s.to_owned(),
                fallback: Self::default(),
            })
    }
}
