//! Duration helpers over the core scroll configuration.

use std::time::Duration;

pub use spynav_core::config::{EasingType, ScrollConfig};

/// Utility methods for [`ScrollConfig`].
pub trait ScrollConfigExt {
    /// Animation duration as a [`Duration`].
    fn animation_duration(&self) -> Duration;

    /// Frame interval for the configured animation FPS.
    fn animation_tick_duration(&self) -> Duration;

    /// Whether scrolls actually animate. A zero duration degrades to
    /// instant jumps even when smoothing is enabled.
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / u64::from(self.animation_fps))
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}
