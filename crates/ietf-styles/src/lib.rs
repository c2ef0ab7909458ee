//! IETF list styles for Mailman
//!
//! This crate contributes two named list styles to a mailing-list manager:
//!
//! - `ietf-default`: the host's generic discussion-list defaults plus the
//!   global cross-posting allowlist in `accept_these_nonmembers`
//! - `ietf-announce`: the host's announce-only defaults, with no allowlist
//!
//! It also exposes a no-op plugin descriptor so the host can discover it.
//! The host owns every list record and the baseline initializers; this crate
//! only layers IETF policy on top of them.

pub mod config;
pub mod logging;
pub mod plugin;
pub mod schema;
pub mod style;

pub use config::{
    resolve_allowlist_address, resolve_allowlist_address_with, AllowlistAddress,
    AllowlistSource, StylesConfig, ALLOWLIST_ENV_VAR, DEFAULT_ALLOWLIST_FQDN, PLUGIN_NAME,
};
pub use plugin::{IetfStylesPlugin, Plugin, PluginMetadata};
pub use schema::{ListRecord, MailingList};
pub use style::{
    add_global_allowlist, register_ietf_styles, BaselineStyle, IetfAnnounceStyle,
    IetfDefaultStyle, Style, StyleError, StyleRegistry,
};
