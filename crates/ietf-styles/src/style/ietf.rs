//! IETF list styles
//!
//! Both styles delegate the standard attributes to the host's baseline
//! initializers and then layer IETF policy on top:
//!
//! - `ietf-default` appends the global allowlist address to
//!   `accept_these_nonmembers` so cross-posted mail is accepted
//! - `ietf-announce` leaves `accept_these_nonmembers` alone

use super::registry::{StyleError, StyleRegistry};
use super::traits::{BaselineStyle, Style};
use crate::config::{AllowlistAddress, StylesConfig};
use crate::schema::MailingList;
use std::sync::Arc;
use tracing::debug;

/// Add `address` to the list's `accept_these_nonmembers`.
///
/// An unset or empty attribute becomes `[address]`. Otherwise the address is
/// appended unless an identical string is already present. Existing entries
/// keep their order. Returns `true` if the list was modified.
pub fn add_global_allowlist(list: &mut dyn MailingList, address: &str) -> bool {
    let nonmembers = list.accept_these_nonmembers_mut().get_or_insert_with(Vec::new);
    if nonmembers.iter().any(|a| a == address) {
        return false;
    }
    nonmembers.push(address.to_string());
    true
}

/// IETF discussion list: host defaults plus the global allowlist.
pub struct IetfDefaultStyle {
    baseline: Arc<dyn BaselineStyle>,
    allowlist: AllowlistAddress,
}

impl IetfDefaultStyle {
    pub const NAME: &'static str = "ietf-default";
    pub const DESCRIPTION: &'static str =
        "IETF discussion list with global allowlist for cross-posting.";

    pub fn new(baseline: Arc<dyn BaselineStyle>, config: &StylesConfig) -> Self {
        Self {
            baseline,
            allowlist: config.allowlist.clone(),
        }
    }

    /// Address this style appends
    pub fn allowlist(&self) -> &AllowlistAddress {
        &self.allowlist
    }
}

impl Style for IetfDefaultStyle {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn apply(&self, list: &mut dyn MailingList) {
        self.baseline.apply(list);
        let added = add_global_allowlist(list, self.allowlist.as_str());
        debug!(
            "applied {} to {} (allowlist {} {})",
            Self::NAME,
            list.list_id(),
            self.allowlist,
            if added { "added" } else { "already present" }
        );
    }
}

/// IETF announce list: host announce-only defaults, no global allowlist.
pub struct IetfAnnounceStyle {
    baseline: Arc<dyn BaselineStyle>,
}

impl IetfAnnounceStyle {
    pub const NAME: &'static str = "ietf-announce";
    pub const DESCRIPTION: &'static str = "IETF announce-only list (no global allowlist).";

    pub fn new(baseline: Arc<dyn BaselineStyle>) -> Self {
        Self { baseline }
    }
}

impl Style for IetfAnnounceStyle {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn apply(&self, list: &mut dyn MailingList) {
        self.baseline.apply(list);
        debug!("applied {} to {}", Self::NAME, list.list_id());
    }
}

/// Register both IETF styles.
///
/// `default_baseline` and `announce_baseline` are the host's generic
/// discussion-list and announce-only initializers.
pub fn register_ietf_styles(
    registry: &mut StyleRegistry,
    config: &StylesConfig,
    default_baseline: Arc<dyn BaselineStyle>,
    announce_baseline: Arc<dyn BaselineStyle>,
) -> Result<(), StyleError> {
    registry.register(IetfDefaultStyle::new(default_baseline, config))?;
    registry.register(IetfAnnounceStyle::new(announce_baseline))?;
    Ok(())
}
