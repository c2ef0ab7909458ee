pub mod ietf;
pub mod traits;
pub mod types;

pub use ietf::IetfStylesPlugin;
pub use traits::Plugin;
pub use types::PluginMetadata;
