//! Haptic feedback collaborator.
//!
//! The bar fires one rigid impact per successful tap. Feedback is
//! fire-and-forget: nothing is returned and the selection does not depend on
//! it.

use std::fmt;
use std::sync::Arc;

/// Impact intensities a haptic engine can play
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ImpactStyle {
    Light,
    #[default]
    Medium,
    Heavy,
    Soft,
    Rigid,
}

impl ImpactStyle {
    pub fn name(&self) -> &'static str {
        match self {
            ImpactStyle::Light => "light",
            ImpactStyle::Medium => "medium",
            ImpactStyle::Heavy => "heavy",
            ImpactStyle::Soft => "soft",
            ImpactStyle::Rigid => "rigid",
        }
    }
}

/// Something that can play an impact
pub trait HapticFeedback: Send + Sync {
    fn impact(&self, style: ImpactStyle);
}

/// Desktop stand-in: there is no actuator, so impacts are only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingHaptics;

impl HapticFeedback for TracingHaptics {
    fn impact(&self, style: ImpactStyle) {
        tracing::debug!(style = style.name(), "haptic impact");
    }
}

/// Drops every impact
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentHaptics;

impl HapticFeedback for SilentHaptics {
    fn impact(&self, _style: ImpactStyle) {}
}

/// Shared handle to a haptic engine.
///
/// Two handles are equal when they point at the same engine, which lets the
/// handle live in component props and context.
#[derive(Clone)]
pub struct HapticsHandle(Arc<dyn HapticFeedback>);

impl HapticsHandle {
    pub fn new(engine: impl HapticFeedback + 'static) -> Self {
        Self(Arc::new(engine))
    }

    pub fn from_arc(engine: Arc<dyn HapticFeedback>) -> Self {
        Self(engine)
    }

    pub fn silent() -> Self {
        Self::new(SilentHaptics)
    }

    pub fn impact(&self, style: ImpactStyle) {
        self.0.impact(style);
    }
}

impl<H: HapticFeedback + 'static> From<H> for HapticsHandle {
    fn from(engine: H) -> Self {
        Self::new(engine)
    }
}

impl Default for HapticsHandle {
    fn default() -> Self {
        Self::silent()
    }
}

impl PartialEq for HapticsHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HapticsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HapticsHandle(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(Arc<AtomicUsize>);

    impl HapticFeedback for Counter {
        fn impact(&self, _style: ImpactStyle) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn handle_forwards_impacts() {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = HapticsHandle::new(Counter(count.clone()));
        handle.impact(ImpactStyle::Rigid);
        handle.clone().impact(ImpactStyle::Rigid);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn handles_compare_by_pointer() {
        let a = HapticsHandle::silent();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, HapticsHandle::silent());
    }

    #[test]
    fn style_names() {
        assert_eq!(ImpactStyle::Rigid.name(), "rigid");
        assert_eq!(ImpactStyle::default(), ImpactStyle::Medium);
    }
}
