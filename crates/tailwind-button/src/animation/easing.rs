//! Easing functions for hover transitions.
//!
//! An easing function maps linear progress (0.0 to 1.0) to eased progress.

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    #[default]
    EaseInOut,
    /// Cubic ease-in-out, a steeper middle than [`EaseInOut`](Self::EaseInOut).
    EaseInOutCubic,
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to 0.0..=1.0 first.
///
/// # Example
///
/// ```
/// use tailwind_button::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInOutCubic,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(ease(easing, 0.0).abs() < 1e-6, "{easing:?}");
            assert!((ease(easing, 1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_clamps_input() {
        for easing in ALL {
            assert_eq!(ease(easing, -1.0), ease(easing, 0.0));
            assert_eq!(ease(easing, 2.0), ease(easing, 1.0));
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for i in 1..=100 {
                let v = ease(easing, i as f32 / 100.0);
                assert!(v >= last, "{easing:?} decreased at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let a = ease(Easing::EaseInOut, t);
            let b = 1.0 - ease(Easing::EaseInOut, 1.0 - t);
            assert!((a - b).abs() < 1e-5);
        }
    }
}
