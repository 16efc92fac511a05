//! Spring curve for press/release animation.
//!
//! Parameterised the way designers tune springs: `response` is the period of
//! the undamped oscillation in seconds and `damping_fraction` is the damping
//! ratio. Mass is fixed at 1.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::error::{PillError, PillResult};

/// Spring used whenever a pill's pressed state changes
pub const PRESS_SPRING: Spring = Spring {
    response: 0.22,
    damping_fraction: 0.9,
};

/// Upper bound for settling searches, in seconds
const MAX_SETTLE: f64 = 10.0;
const STEP: f64 = 0.001;

/// Distance from rest at which a press animation counts as finished
const SETTLE_EPSILON: f64 = 0.001;
const EASING_SAMPLES: usize = 24;

static PRESS_TRANSITION: OnceLock<String> = OnceLock::new();

/// CSS transition for scale and shadow driven by [`PRESS_SPRING`].
///
/// Built on first use and shared afterwards.
pub fn press_transition() -> &'static str {
    PRESS_TRANSITION.get_or_init(|| {
        let duration_ms = (PRESS_SPRING.settling_time(SETTLE_EPSILON) * 1000.0).round();
        let easing = PRESS_SPRING.css_easing(EASING_SAMPLES);
        format!(
            "transform {ms}ms {easing}, box-shadow {ms}ms {easing}",
            ms = duration_ms,
            easing = easing,
        )
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    response: f64,
    damping_fraction: f64,
}

impl Spring {
    /// Response must be a positive, finite number of seconds and the
    /// damping fraction finite and non-negative.
    pub fn new(response: f64, damping_fraction: f64) -> PillResult<Self> {
        if !(response.is_finite() && response > 0.0) {
            return Err(PillError::InvalidSpring(format!(
                "response must be positive, got {}",
                response
            )));
        }
        if !(damping_fraction.is_finite() && damping_fraction >= 0.0) {
            return Err(PillError::InvalidSpring(format!(
                "damping fraction must be non-negative, got {}",
                damping_fraction
            )));
        }
        Ok(Self {
            response,
            damping_fraction,
        })
    }

    pub fn response(&self) -> f64 {
        self.response
    }

    pub fn damping_fraction(&self) -> f64 {
        self.damping_fraction
    }

    fn natural_frequency(&self) -> f64 {
        2.0 * PI / self.response
    }

    pub fn stiffness(&self) -> f64 {
        self.natural_frequency().powi(2)
    }

    pub fn damping(&self) -> f64 {
        2.0 * self.damping_fraction * self.natural_frequency()
    }

    /// Normalized step response: 0 at rest, tending to 1.
    ///
    /// Fractions of 1 or more are treated as critically damped.
    pub fn progress(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }

        let w0 = self.natural_frequency();
        let zeta = self.damping_fraction;

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        }
    }

    /// Value between `from` and `to` at time `t`
    pub fn interpolate(&self, from: f64, to: f64, t: f64) -> f64 {
        from + (to - from) * self.progress(t)
    }

    /// Time after which the response stays within `epsilon` of 1
    pub fn settling_time(&self, epsilon: f64) -> f64 {
        let mut last_outside = 0.0;
        let mut t = 0.0;
        while t < MAX_SETTLE {
            if (1.0 - self.progress(t)).abs() > epsilon {
                last_outside = t;
            }
            t += STEP;
        }
        last_outside + STEP
    }

    /// CSS `linear()` easing sampling the curve over its settling time.
    pub fn css_easing(&self, samples: usize) -> String {
        let samples = samples.max(2);
        let duration = self.settling_time(SETTLE_EPSILON);

        let stops: Vec<String> = (0..=samples)
            .map(|i| {
                if i == samples {
                    return "1".to_string();
                }
                let t = duration * i as f64 / samples as f64;
                let value = (self.progress(t) * 10_000.0).round() / 10_000.0;
                format!("{}", value)
            })
            .collect();

        format!("linear({})", stops.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest_and_converges() {
        assert_eq!(PRESS_SPRING.progress(0.0), 0.0);
        assert_eq!(PRESS_SPRING.progress(-1.0), 0.0);
        assert!((PRESS_SPRING.progress(2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn press_spring_barely_overshoots() {
        let peak = (0..1000)
            .map(|i| PRESS_SPRING.progress(i as f64 * 0.001))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0);
        assert!(peak < 1.01);
    }

    #[test]
    fn press_spring_settles_quickly() {
        let t = PRESS_SPRING.settling_time(0.001);
        assert!(t > 0.2 && t < 0.5, "settled at {}", t);
    }

    #[test]
    fn coefficients() {
        let w0 = 2.0 * PI / 0.22;
        assert!((PRESS_SPRING.stiffness() - w0 * w0).abs() < 1e-9);
        assert!((PRESS_SPRING.damping() - 1.8 * w0).abs() < 1e-9);
    }

    #[test]
    fn interpolate_scale() {
        assert_eq!(PRESS_SPRING.interpolate(1.0, 0.98, 0.0), 1.0);
        let late = PRESS_SPRING.interpolate(1.0, 0.98, 1.0);
        assert!((late - 0.98).abs() < 1e-6);
    }

    #[test]
    fn critically_damped_is_monotonic() {
        let spring = Spring::new(0.3, 1.0).unwrap();
        let mut prev = 0.0;
        for i in 1..500 {
            let v = spring.progress(i as f64 * 0.002);
            assert!(v >= prev);
            assert!(v <= 1.0);
            prev = v;
        }
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(matches!(Spring::new(0.0, 0.9), Err(PillError::InvalidSpring(_))));
        assert!(matches!(Spring::new(-0.2, 0.9), Err(PillError::InvalidSpring(_))));
        assert!(matches!(Spring::new(f64::NAN, 0.9), Err(PillError::InvalidSpring(_))));
        assert!(matches!(Spring::new(0.22, -0.1), Err(PillError::InvalidSpring(_))));
        assert_eq!(Spring::new(0.22, 0.9).unwrap(), PRESS_SPRING);
    }

    #[test]
    fn valid_spring_easing_has_no_nan() {
        let easing = Spring::new(0.5, 0.7).unwrap().css_easing(4);
        assert!(!easing.contains("NaN"));
    }

    #[test]
    fn press_transition_is_built_once() {
        let first = press_transition();
        let second = press_transition();
        assert!(std::ptr::eq(first, second));
        assert!(first.starts_with("transform "));
        assert!(first.contains("box-shadow "));
        assert!(first.contains("linear(0, "));
    }

    #[test]
    fn css_easing_shape() {
        let easing = PRESS_SPRING.css_easing(8);
        assert!(easing.starts_with("linear(0, "));
        assert!(easing.ends_with(", 1)"));
        assert_eq!(easing.matches(',').count(), 8);
    }
}
