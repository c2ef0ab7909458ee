pub mod ietf;
pub mod registry;
pub mod traits;

pub use ietf::{add_global_allowlist, register_ietf_styles, IetfAnnounceStyle, IetfDefaultStyle};
pub use registry::{SharedStyle, StyleError, StyleRegistry};
pub use traits::{BaselineStyle, Style};
