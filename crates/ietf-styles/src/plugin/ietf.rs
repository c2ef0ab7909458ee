//! Plugin descriptor for the IETF styles
//!
//! The styles themselves are registered through [`crate::style`]; this type
//! only exists so the host knows the plugin is installed.

use super::{Plugin, PluginMetadata};
use crate::config::PLUGIN_NAME;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct IetfStylesPlugin;

impl IetfStylesPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for IetfStylesPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: PLUGIN_NAME,
            version: env!("CARGO_PKG_VERSION"),
            description: "Plugin that provides IETF-specific list styles.",
        }
    }

    fn pre_hook(&self) {
        info!("{PLUGIN_NAME} plugin loaded");
    }

    fn post_hook(&self) {
        debug!("{PLUGIN_NAME} post_hook: nothing to do");
    }

    fn resource(&self) -> Option<&str> {
        None
    }
}
