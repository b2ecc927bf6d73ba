//! Easing curves for animated scrolls.
//!
//! Pure functions mapping progress `[0, 1]` to eased progress `[0, 1]`.

pub use spynav_core::config::EasingType;

/// Calculation methods for [`EasingType`].
pub trait EasingTypeExt {
    /// Apply the curve to a progress value in `[0, 1]`.
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::EaseInOut => cubic_ease_in_out(t),
        }
    }
}

/// f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Accelerate through the first half, decelerate through the second,
/// symmetric about t = 0.5.
#[inline]
fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 4] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::EaseInOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in CURVES {
            if easing != EasingType::None {
                assert!((easing.apply(0.0)).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [EasingType::Linear, EasingType::Cubic, EasingType::EaseInOut] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = f64::from(i) / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_symmetry() {
        // f(t) + f(1-t) = 1 for the symmetric curve.
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let sum = EasingType::EaseInOut.apply(t) + EasingType::EaseInOut.apply(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-9, "asymmetric at t={}", t);
        }
        assert!((EasingType::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ease_in_out_slow_at_edges() {
        // Gentler than linear near both ends.
        assert!(EasingType::EaseInOut.apply(0.1) < 0.1);
        assert!(EasingType::EaseInOut.apply(0.9) > 0.9);
    }

    #[test]
    fn test_input_clamped() {
        for easing in CURVES {
            assert!((easing.apply(-0.5)).abs() < 0.001 || easing == EasingType::None);
            assert!((easing.apply(1.5) - 1.0).abs() < 0.001);
        }
    }
}
