//! Mailing-list record schema
//!
//! The host owns list records. Styles only need the list identity (for logs)
//! and read/write access to `accept_these_nonmembers`, so that is all the
//! [`MailingList`] trait asks for.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Host-owned mailing list, as seen by a style.
pub trait MailingList {
    /// Identifier used in log output (e.g. `ietf.lists.example.org`)
    fn list_id(&self) -> &str;

    /// Senders that bypass the non-member posting check.
    ///
    /// `None` means the attribute has never been set.
    fn accept_these_nonmembers(&self) -> Option<&[String]>;

    /// Mutable access to `accept_these_nonmembers`, unset state included
    fn accept_these_nonmembers_mut(&mut self) -> &mut Option<Vec<String>>;
}

/// Serde-backed list record for hosts that keep list state as JSON.
///
/// Attributes this crate does not interpret are kept in `unknown_fields` and
/// written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRecord {
    pub list_id: String,

    #[serde(default)]
    pub accept_these_nonmembers: Option<Vec<String>>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl ListRecord {
    pub fn new(list_id: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter for `accept_these_nonmembers`
    pub fn with_nonmembers<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept_these_nonmembers = Some(addresses.into_iter().map(Into::into).collect());
        self
    }
}

impl MailingList for ListRecord {
    fn list_id(&self) -> &str {
        &self.list_id
    }

    fn accept_these_nonmembers(&self) -> Option<&[String]> {
        self.accept_these_nonmembers.as_deref()
    }

    fn accept_these_nonmembers_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.accept_these_nonmembers
    }
}
