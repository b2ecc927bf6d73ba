//! Per-pane scroll animation controller.

use std::time::{Duration, Instant};

use spynav_core::config::ScrollConfig;

use super::config::ScrollConfigExt;
use super::easing::{EasingType, EasingTypeExt};

/// In-flight interpolation toward a target offset.
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

impl ActiveAnimation {
    fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.start.elapsed().as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn is_complete(&self) -> bool {
        self.start.elapsed() >= self.duration
    }

    fn offset_at(&self, t: f64) -> u16 {
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * t).round() as u16
    }
}

/// Outcome of advancing the animator by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationTick {
    /// Nothing in flight; the offset did not move.
    Idle,
    /// An animation advanced and is still running.
    Moving,
    /// The animation reached its target during this frame.
    Finished,
}

/// Animates one pane's scroll offset.
///
/// `scroll_to` starts an animation toward an absolute target; `scroll_by`
/// accumulates deltas that the next `update` folds into a single animation,
/// so a burst of wheel events within one frame retargets once instead of
/// restarting per event. With smoothing disabled both jump instantly.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    offset: u16,
    pending_delta: i32,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            offset: 0,
            pending_delta: 0,
        }
    }

    /// Current interpolated offset in rows.
    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Final offset once all pending motion settles.
    pub fn target_offset(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.offset)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frame needs to run at animation rate.
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Set the offset immediately, dropping any in-flight motion.
    pub fn set_offset(&mut self, offset: u16) {
        self.animation = None;
        self.pending_delta = 0;
        self.offset = offset;
    }

    /// Clamp the offset into a (possibly shrunk) scroll range.
    pub fn clamp_to(&mut self, max_offset: u16) {
        if self.offset > max_offset {
            self.set_offset(max_offset);
        }
    }

    /// Begin animating toward `target`. Returns whether an animation
    /// actually started; an instant jump or an already-reached target
    /// returns `false` so callers can settle immediately.
    pub fn scroll_to(&mut self, target: u16, max_offset: u16) -> bool {
        let target = target.min(max_offset);
        self.pending_delta = 0;

        if !self.config.is_smooth() {
            self.offset = target;
            self.animation = None;
            return false;
        }

        if self.offset == target {
            self.animation = None;
            return false;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from: self.offset,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
        true
    }

    /// Scroll by a delta (positive = down). Smooth deltas accumulate until
    /// the next `update`; instant deltas apply now.
    pub fn scroll_by(&mut self, delta: i32, max_offset: u16) {
        if !self.config.is_smooth() {
            self.offset =
                (i32::from(self.offset) + delta).clamp(0, i32::from(max_offset)) as u16;
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    /// Advance the animation by one frame.
    pub fn update(&mut self, max_offset: u16) -> AnimationTick {
        if self.pending_delta != 0 {
            // Retarget relative to where the current motion was headed.
            let target = (i32::from(self.target_offset()) + self.pending_delta)
                .clamp(0, i32::from(max_offset)) as u16;
            self.pending_delta = 0;

            if target != self.offset {
                self.animation = Some(ActiveAnimation {
                    start: Instant::now(),
                    from: self.offset,
                    to: target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            } else {
                self.animation = None;
            }
        }

        let Some(animation) = self.animation.as_ref() else {
            return AnimationTick::Idle;
        };

        if animation.is_complete() {
            self.offset = animation.to.min(max_offset);
            self.animation = None;
            AnimationTick::Finished
        } else {
            let eased = animation.easing.apply(animation.progress());
            self.offset = animation.offset_at(eased).min(max_offset);
            AnimationTick::Moving
        }
    }

    /// Stop at the current position, dropping target and pending deltas.
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        }
    }

    fn smooth_config(duration_ms: u64) -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut animator = ScrollAnimator::new(instant_config());
        assert!(!animator.scroll_to(100, 200));
        assert_eq!(animator.offset(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts_toward_target() {
        let mut animator = ScrollAnimator::new(smooth_config(10_000));
        assert!(animator.scroll_to(100, 200));
        assert!(animator.is_animating());
        assert_eq!(animator.target_offset(), 100);
        // Barely started: still near the origin.
        assert_eq!(animator.update(200), AnimationTick::Moving);
        assert!(animator.offset() < 100);
    }

    #[test]
    fn test_scroll_to_current_offset_is_noop() {
        let mut animator = ScrollAnimator::new(smooth_config(100));
        animator.set_offset(40);
        assert!(!animator.scroll_to(40, 200));
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_delta_batching() {
        let mut animator = ScrollAnimator::new(smooth_config(10_000));
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(-5, 200);

        animator.update(200);
        assert_eq!(animator.target_offset(), 15);
    }

    #[test]
    fn test_target_clamped_to_max() {
        let mut animator = ScrollAnimator::new(smooth_config(100));
        animator.set_offset(50);
        animator.scroll_to(300, 80);
        assert_eq!(animator.target_offset(), 80);

        let mut animator = ScrollAnimator::new(instant_config());
        animator.scroll_by(-10, 80);
        assert_eq!(animator.offset(), 0);
    }

    #[test]
    fn test_completion_reported_once() {
        let mut animator = ScrollAnimator::new(smooth_config(5));
        animator.scroll_to(30, 100);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(animator.update(100), AnimationTick::Finished);
        assert_eq!(animator.offset(), 30);
        assert_eq!(animator.update(100), AnimationTick::Idle);
    }

    #[test]
    fn test_cancel_stops_in_place() {
        let mut animator = ScrollAnimator::new(smooth_config(10_000));
        animator.scroll_to(100, 200);
        animator.update(200);
        animator.cancel();
        assert!(!animator.is_animating());
        assert!(!animator.needs_update());
        assert_eq!(animator.target_offset(), animator.offset());
    }

    #[test]
    fn test_clamp_to_shrunk_range() {
        let mut animator = ScrollAnimator::new(instant_config());
        animator.set_offset(120);
        animator.clamp_to(80);
        assert_eq!(animator.offset(), 80);
        animator.clamp_to(90);
        assert_eq!(animator.offset(), 80);
    }
}
