//! Time-driven blend between the idle and hovered looks.

use std::time::{Duration, Instant};

use super::easing::{Easing, ease};

/// Default hover transition length.
pub const DEFAULT_HOVER_DURATION: Duration = Duration::from_millis(150);

/// Animates a blend amount between 0.0 (idle) and 1.0 (hovered).
///
/// The transition holds no timer of its own. Callers sample it with
/// [`amount_at`](Self::amount_at) whenever they paint. Retargeting while a
/// transition is running continues from the amount reached so far, and the
/// remaining distance takes a proportional share of the duration.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use tailwind_button::animation::HoverTransition;
///
/// let start = Instant::now();
/// let mut transition = HoverTransition::new();
/// transition.retarget(1.0, start);
///
/// assert_eq!(transition.amount_at(start), 0.0);
/// assert_eq!(transition.amount_at(start + Duration::from_millis(75)), 0.5);
/// assert_eq!(transition.amount_at(start + Duration::from_millis(150)), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct HoverTransition {
    easing: Easing,
    duration: Duration,
    /// Blend amount when the running segment started.
    from: f32,
    /// Blend amount the running segment ends at.
    target: f32,
    /// Start and length of the running segment.
    segment: Option<(Instant, Duration)>,
}

impl Default for HoverTransition {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverTransition {
    /// Create an ease-in-out transition of [`DEFAULT_HOVER_DURATION`], at rest
    /// at 0.0.
    pub fn new() -> Self {
        Self {
            easing: Easing::EaseInOut,
            duration: DEFAULT_HOVER_DURATION,
            from: 0.0,
            target: 0.0,
            segment: None,
        }
    }

    /// Set the easing function.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the full-distance duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The amount the transition is heading toward.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Start moving toward `target` from wherever the blend is at `now`.
    ///
    /// Retargeting to the current target is a no-op.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        let target = target.clamp(0.0, 1.0);
        if target == self.target {
            return;
        }

        let from = self.amount_at(now);
        let distance = (target - from).abs();
        self.from = from;
        self.target = target;
        self.segment = if distance == 0.0 || self.duration.is_zero() {
            None
        } else if distance >= 1.0 {
            Some((now, self.duration))
        } else {
            Some((now, self.duration.mul_f32(distance)))
        };
    }

    /// Jump straight to `amount` with no animation.
    pub fn snap(&mut self, amount: f32) {
        let amount = amount.clamp(0.0, 1.0);
        self.from = amount;
        self.target = amount;
        self.segment = None;
    }

    /// The blend amount at `now`.
    pub fn amount_at(&self, now: Instant) -> f32 {
        let Some((start, length)) = self.segment else {
            return self.target;
        };

        let elapsed = now.saturating_duration_since(start);
        if elapsed >= length {
            return self.target;
        }

        let progress = elapsed.as_secs_f32() / length.as_secs_f32();
        self.from + (self.target - self.from) * ease(self.easing, progress)
    }

    /// Check if the blend is still moving at `now`.
    pub fn is_running_at(&self, now: Instant) -> bool {
        match self.segment {
            Some((start, length)) => now.saturating_duration_since(start) < length,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_at_rest() {
        let transition = HoverTransition::new();
        let now = Instant::now();
        assert_eq!(transition.amount_at(now), 0.0);
        assert!(!transition.is_running_at(now));
        assert_eq!(transition.duration(), ms(150));
        assert_eq!(transition.easing(), Easing::EaseInOut);
    }

    #[test]
    fn test_runs_to_target() {
        let start = Instant::now();
        let mut transition = HoverTransition::new();
        transition.retarget(1.0, start);

        assert!(transition.is_running_at(start + ms(10)));
        let early = transition.amount_at(start + ms(30));
        let late = transition.amount_at(start + ms(120));
        assert!(0.0 < early && early < late && late < 1.0);
        assert_eq!(transition.amount_at(start + ms(150)), 1.0);
        assert_eq!(transition.amount_at(start + ms(500)), 1.0);
        assert!(!transition.is_running_at(start + ms(150)));
    }

    #[test]
    fn test_reversal_continues_from_current_amount() {
        let start = Instant::now();
        let mut transition = HoverTransition::new().with_easing(Easing::Linear);
        transition.retarget(1.0, start);

        let reverse_at = start + ms(60);
        let reached = transition.amount_at(reverse_at);
        assert!((reached - 0.4).abs() < 1e-3);

        transition.retarget(0.0, reverse_at);
        assert!((transition.amount_at(reverse_at) - reached).abs() < 1e-6);
        assert_eq!(transition.target(), 0.0);

        // 0.4 of the distance takes 0.4 of the duration.
        assert!((transition.amount_at(reverse_at + ms(30)) - 0.2).abs() < 1e-3);
        assert!(transition.amount_at(reverse_at + ms(60)) < 1e-3);
        assert_eq!(transition.amount_at(reverse_at + ms(61)), 0.0);
    }

    #[test]
    fn test_retarget_same_target_keeps_segment() {
        let start = Instant::now();
        let mut transition = HoverTransition::new();
        transition.retarget(1.0, start);
        let before = transition.amount_at(start + ms(100));

        transition.retarget(1.0, start + ms(50));
        assert_eq!(transition.amount_at(start + ms(100)), before);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let start = Instant::now();
        let mut transition = HoverTransition::new().with_duration(Duration::ZERO);
        transition.retarget(1.0, start);
        assert_eq!(transition.amount_at(start), 1.0);
        assert!(!transition.is_running_at(start));
    }

    #[test]
    fn test_snap() {
        let start = Instant::now();
        let mut transition = HoverTransition::new();
        transition.retarget(1.0, start);
        transition.snap(0.0);
        assert_eq!(transition.amount_at(start + ms(10)), 0.0);
        assert!(!transition.is_running_at(start + ms(10)));
    }
}
