//! Fixed-duration eased interpolation for camera framing and menu slides.
//!
//! Starting a new tween on a property simply replaces the old one, so
//! overlapping requests override each other rather than queueing.

use bevy::prelude::*;

pub trait Lerp: Copy {
    fn lerp_to(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    // Weighted form so t = 1.0 lands exactly on the target.
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }
}

impl Lerp for Vec3 {
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }
}

/// In-flight interpolation from a captured start value to a target.
#[derive(Debug, Clone)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    elapsed: f32,
    duration: f32,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(f32::EPSILON),
        }
    }

    /// Advance by `dt` seconds and return the interpolated value, clamped at
    /// the target once the duration is exhausted.
    pub fn tick(&mut self, dt: f32) -> T {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let progress = self.elapsed / self.duration;
        self.from.lerp_to(self.to, ease_out_quad(progress))
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> T {
        self.to
    }
}

fn ease_out_quad(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        let mut tween = Tween::new(0.0_f32, 10.0, 1.0);
        assert_eq!(tween.tick(0.0), 0.0);
        assert!(!tween.finished());
    }

    #[test]
    fn test_reaches_target_and_clamps() {
        let mut tween = Tween::new(0.0_f32, 10.0, 1.0);
        assert_eq!(tween.tick(1.0), 10.0);
        assert!(tween.finished());
        // Ticking past the end stays pinned to the target.
        assert_eq!(tween.tick(5.0), 10.0);
    }

    #[test]
    fn test_progress_is_monotone() {
        let mut tween = Tween::new(0.0_f32, 10.0, 1.0);
        let mut previous = 0.0;
        for _ in 0..10 {
            let value = tween.tick(0.1);
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(previous, 10.0);
    }

    #[test]
    fn test_ease_out_front_loads_motion() {
        let mut tween = Tween::new(0.0_f32, 10.0, 1.0);
        let halfway = tween.tick(0.5);
        assert!(halfway > 5.0);
    }

    #[test]
    fn test_zero_duration_is_safe() {
        let mut tween = Tween::new(2.0_f32, 8.0, 0.0);
        assert_eq!(tween.tick(0.016), 8.0);
        assert!(tween.finished());
    }

    #[test]
    fn test_vec3_endpoints() {
        let from = Vec3::ZERO;
        let to = Vec3::new(0.0, 1.5, 3.0);
        let mut tween = Tween::new(from, to, 1.0);
        tween.tick(0.25);
        assert_eq!(tween.target(), to);
        assert_eq!(tween.tick(1.0), to);
    }
}
