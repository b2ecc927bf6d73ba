pub mod config;
pub mod error;
pub mod geometry;
pub mod hooks;
pub mod section;
pub mod sync;
pub mod visibility;

pub use config::{EasingType, LayoutConfig, ScrollConfig, SpyConfig};
pub use error::{Error, Result};
pub use geometry::{PaneGeometry, SectionBounds};
pub use hooks::SpyHooks;
pub use section::{Section, Sections};
pub use sync::{ScrollPhase, SpyState};
