use crate::schema::MailingList;

/// A named list style. The host looks styles up by name and applies them to
/// a list at creation or reconfiguration time.
///
/// Styles hold no mutable state, so one instance can be applied any number
/// of times.
pub trait Style: Send + Sync {
    /// Unique style name (e.g. `ietf-default`)
    fn name(&self) -> &str;

    /// Human-readable summary shown by the host
    fn description(&self) -> &str;

    /// Configure `list` according to this style
    fn apply(&self, list: &mut dyn MailingList);
}

/// Host-provided initializer that sets every standard attribute for one kind
/// of list. The IETF styles run one of these before adding their own policy.
pub trait BaselineStyle: Send + Sync {
    fn apply(&self, list: &mut dyn MailingList);
}

/// Closures work as baselines, which keeps host glue short.
impl<F> BaselineStyle for F
where
    F: Fn(&mut dyn MailingList) + Send + Sync,
{
    fn apply(&self, list: &mut dyn MailingList) {
        self(list)
    }
}
