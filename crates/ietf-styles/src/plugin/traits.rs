use super::PluginMetadata;

/// Host plugin contract.
///
/// Lifecycle: pre_hook() → host startup → post_hook()
///
/// `pre_hook` runs before the host finishes configuring itself, `post_hook`
/// after. Hooks cannot fail. `resource` names a host-managed resource (such
/// as a REST route) the plugin contributes; `None` means it contributes none.
pub trait Plugin: Send + Sync {
    /// Return plugin identity
    fn metadata(&self) -> PluginMetadata;

    fn pre_hook(&self);

    fn post_hook(&self);

    fn resource(&self) -> Option<&str>;
}
