//! Mailing-list record contract shared with the host

pub mod mailing_list;

pub use mailing_list::{ListRecord, MailingList};
