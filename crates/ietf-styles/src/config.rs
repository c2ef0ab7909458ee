//! Allowlist address resolution
//!
//! The global allowlist address is resolved with this priority:
//! 1. Environment variable (`GLOBAL_ALLOWLIST_FQDN`)
//! 2. Default (`@global-allowlist@ietf.org`)
//!
//! [`resolve_allowlist_address`] reads the environment on every call.
//! [`StylesConfig`] is the startup step: it resolves once, and the presets
//! built from it keep that value for their whole lifetime.

use std::fmt;
use tracing::debug;

/// Registration name of this plugin in the host
pub const PLUGIN_NAME: &str = "ietf_styles";

/// Environment variable overriding the allowlist address
pub const ALLOWLIST_ENV_VAR: &str = "GLOBAL_ALLOWLIST_FQDN";

/// Fallback allowlist address when no override is present
pub const DEFAULT_ALLOWLIST_FQDN: &str = "@global-allowlist@ietf.org";

/// Where a resolved allowlist address came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowlistSource {
    /// `GLOBAL_ALLOWLIST_FQDN` was set to a non-blank value
    Environment,
    /// No override, fell back to [`DEFAULT_ALLOWLIST_FQDN`]
    Default,
}

/// A resolved, non-empty allowlist address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowlistAddress {
    value: String,
    source: AllowlistSource,
}

impl AllowlistAddress {
    /// Resolve against an arbitrary variable lookup.
    ///
    /// Blank values count as absent; anything else is used verbatim. Never fails.
    pub fn resolve_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ALLOWLIST_ENV_VAR)
            .filter(|v| !v.trim().is_empty())
        {
            Some(value) => {
                debug!("allowlist address from {ALLOWLIST_ENV_VAR}: {value}");
                Self {
                    value,
                    source: AllowlistSource::Environment,
                }
            }
            None => {
                debug!("allowlist address defaulted to {DEFAULT_ALLOWLIST_FQDN}");
                Self::default()
            }
        }
    }

    /// Resolve against the process environment
    pub fn from_env() -> Self {
        Self::resolve_with(|key| std::env::var(key).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> AllowlistSource {
        self.source
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl Default for AllowlistAddress {
    fn default() -> Self {
        Self {
            value: DEFAULT_ALLOWLIST_FQDN.to_string(),
            source: AllowlistSource::Default,
        }
    }
}

impl fmt::Display for AllowlistAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for AllowlistAddress {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Resolve the global allowlist address from the current environment.
///
/// Returns the `GLOBAL_ALLOWLIST_FQDN` value when set, otherwise
/// `@global-allowlist@ietf.org`.
pub fn resolve_allowlist_address() -> String {
    AllowlistAddress::from_env().into_string()
}

/// Same precedence as [`resolve_allowlist_address`], against an injected lookup
pub fn resolve_allowlist_address_with<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    AllowlistAddress::resolve_with(lookup).into_string()
}

/// Configuration loaded once at startup and handed to the presets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesConfig {
    /// Address appended by the `ietf-default` style
    pub allowlist: AllowlistAddress,
}

impl StylesConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self {
            allowlist: AllowlistAddress::from_env(),
        }
    }

    /// Load from an injected variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            allowlist: AllowlistAddress::resolve_with(lookup),
        }
    }

    /// Build with an explicit address; blank input falls back to the default
    pub fn with_allowlist(address: impl Into<String>) -> Self {
        let address = address.into();
        Self::from_lookup(move |_| Some(address.clone()))
    }
}
