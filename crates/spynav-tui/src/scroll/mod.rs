//! Smooth scrolling for the two panes.
//!
//! Each pane owns a [`ScrollAnimator`] that interpolates its scroll offset
//! toward a target over a configured duration and easing curve. The
//! animator also batches rapid scroll deltas arriving within one frame so
//! wheel bursts become a single retargeted animation.
//!
//! Offsets are terminal rows. Animations advance on the frame tick via
//! [`ScrollAnimator::update`], which reports completion so the caller can
//! settle programmatic scrolls.

pub mod animation;
pub mod config;
pub mod easing;

pub use animation::{AnimationTick, ScrollAnimator};
pub use config::ScrollConfigExt;
pub use easing::EasingTypeExt;
