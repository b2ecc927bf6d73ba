pub mod event;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod spy;
pub mod style;
pub mod widgets;

pub use event::{EventHandler, SpyEvent};
pub use input::Action;
pub use spy::{Focus, ScrollSpy};
pub use style::PaneStyles;
