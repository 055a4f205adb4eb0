//! Viewport visibility tracking.
//!
//! [`VisibilityDetector`] answers one question for one region of the page:
//! is it inside the viewport right now? The browser facility that actually
//! measures intersections sits behind the [`ViewportObserver`] trait, so the
//! detector itself is plain Rust and runs under `cargo test`.
//!
//! Every registration is an owned [`ObserverHandle`]. The detector holds at
//! most one at a time and drops the old one before asking for a new one, so
//! re-attachment, reconfiguration and teardown all share the same release
//! path.

pub mod dom;
mod hook;

pub use dom::DomViewport;
pub use hook::use_intersection_observer;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use thiserror::Error;

/// Errors raised while setting up viewport observation.
///
/// None of these reach the page: the detector logs them and keeps reporting
/// "not visible".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisibilityError {
    #[error("intersection threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),
    #[error("viewport observer unavailable: {0}")]
    Unavailable(String),
}

/// Fraction of a region's area that must be on screen for it to count as
/// visible.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// What `IntersectionObserver` uses when no threshold is given: any
    /// visible pixel counts.
    pub const PLATFORM_DEFAULT: Threshold = Threshold(0.0);

    /// Returns `None` for values outside `0.0..=1.0` (and for NaN).
    pub const fn new(fraction: f64) -> Option<Self> {
        if fraction >= 0.0 && fraction <= 1.0 {
            Some(Threshold(fraction))
        } else {
            None
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::PLATFORM_DEFAULT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = VisibilityError;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        Threshold::new(fraction).ok_or(VisibilityError::InvalidThreshold(fraction))
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Observation parameters. Any change counts as a reconfiguration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObserverOptions {
    pub threshold: Threshold,
    /// CSS margin applied to the viewport box, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: Option<String>,
    /// Stop reacting once the region has been reported visible.
    pub freeze_once_visible: bool,
}

impl ObserverOptions {
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = Some(margin.into());
        self
    }

    pub fn freeze_once_visible(mut self, freeze: bool) -> Self {
        self.freeze_once_visible = freeze;
        self
    }
}

/// Callback handed to the platform. Receives `true` while the target
/// satisfies the threshold.
pub type NotifyFn = Box<dyn FnMut(bool)>;

/// A live platform registration. Dropping it unregisters the observer.
#[must_use = "dropping the handle releases the observer immediately"]
pub struct ObserverHandle {
    release: Option<Box<dyn FnOnce()>>,
}

impl ObserverHandle {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Releases the registration now instead of at end of scope.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ObserverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverHandle")
            .field("released", &self.release.is_none())
            .finish()
    }
}

/// The platform's viewport-intersection facility.
pub trait ViewportObserver {
    /// Whatever the platform observes (a DOM element in the browser).
    type Target: Clone + PartialEq;

    /// Registers `notify` against `target`. Notifications may arrive at any
    /// later point until the returned handle is dropped.
    fn observe(
        &self,
        target: &Self::Target,
        options: &ObserverOptions,
        notify: NotifyFn,
    ) -> Result<ObserverHandle, VisibilityError>;
}

type Listener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct Shared {
    visible: Cell<bool>,
    frozen: Cell<bool>,
    next_listener: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

impl Shared {
    fn publish(&self, visible: bool) {
        if self.visible.replace(visible) == visible {
            return;
        }
        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(visible);
        }
    }
}

/// Registration owned by the detector. The `live` flag is cleared before the
/// platform handle is released, so a notification the platform had already
/// queued is dropped on arrival.
struct Registration {
    live: Rc<Cell<bool>>,
    _handle: ObserverHandle,
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

/// Keeps a listener registered on a [`VisibilityDetector`]. Dropping it
/// unsubscribes.
#[must_use = "dropping the subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Tracks whether one region intersects the viewport.
///
/// Holds at most one platform registration. Reports `false` until the
/// platform says otherwise, and forever if nothing is attached or the
/// platform refuses to observe.
pub struct VisibilityDetector<O: ViewportObserver> {
    platform: O,
    options: ObserverOptions,
    target: Option<O::Target>,
    registration: Option<Registration>,
    shared: Rc<Shared>,
}

impl<O: ViewportObserver> VisibilityDetector<O> {
    pub fn new(platform: O, options: ObserverOptions) -> Self {
        Self {
            platform,
            options,
            target: None,
            registration: None,
            shared: Rc::default(),
        }
    }

    /// Starts observing `target`, releasing any previous registration first.
    /// Attaching the target that is already observed does nothing.
    pub fn attach(&mut self, target: O::Target) {
        if self.target.as_ref() == Some(&target) && self.registration.is_some() {
            return;
        }
        self.release();
        self.target = Some(target);
        self.connect();
    }

    /// Stops observing. The last reported visibility is kept.
    pub fn detach(&mut self) {
        self.release();
        self.target = None;
    }

    /// Calls `listener` every time the visibility flag flips.
    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) -> Subscription {
        let id = self.shared.next_listener.get();
        self.shared.next_listener.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    fn connect(&mut self) {
        debug_assert!(self.registration.is_none());
        let Some(target) = self.target.as_ref() else {
            return;
        };
        if self.shared.frozen.get() {
            tracing::trace!("region already revealed, not observing");
            return;
        }

        let live = Rc::new(Cell::new(true));
        let notify = {
            let live = Rc::clone(&live);
            let shared = Rc::downgrade(&self.shared);
            let freeze = self.options.freeze_once_visible;
            Box::new(move |intersecting: bool| {
                if !live.get() {
                    return;
                }
                let Some(shared) = shared.upgrade() else {
                    return;
                };
                if shared.frozen.get() {
                    return;
                }
                if freeze && intersecting {
                    shared.frozen.set(true);
                }
                shared.publish(intersecting);
            }) as NotifyFn
        };

        match self.platform.observe(target, &self.options, notify) {
            Ok(handle) => {
                tracing::debug!(threshold = %self.options.threshold, "observing region");
                self.registration = Some(Registration {
                    live,
                    _handle: handle,
                });
            }
            Err(err) => {
                tracing::warn!("visibility tracking disabled: {err}");
            }
        }
    }

    fn release(&mut self) {
        if self.registration.take().is_some() {
            tracing::trace!("released region observer");
        }
    }
}

// Introspection and reconfiguration. The page wires one fixed configuration
// through the signal returned by the hook, so only tests reach these.
#[cfg_attr(not(test), allow(dead_code))]
impl<O: ViewportObserver> VisibilityDetector<O> {
    pub fn is_visible(&self) -> bool {
        self.shared.visible.get()
    }

    /// Whether a platform registration is currently held.
    pub fn is_observing(&self) -> bool {
        self.registration.is_some()
    }

    pub fn target(&self) -> Option<&O::Target> {
        self.target.as_ref()
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Replaces the options and re-registers against the current target.
    pub fn set_options(&mut self, options: ObserverOptions) {
        if options == self.options {
            return;
        }
        if !options.freeze_once_visible {
            self.shared.frozen.set(false);
        }
        self.options = options;
        self.release();
        self.connect();
    }
}

impl<O: ViewportObserver> Drop for VisibilityDetector<O> {
    fn drop(&mut self) {
        self.release();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeViewport;
    use super::*;
    use pretty_assertions::assert_eq;

    fn tenth() -> ObserverOptions {
        ObserverOptions::default().with_threshold(Threshold::new(0.1).unwrap())
    }

    #[test]
    fn threshold_accepts_unit_interval_only() {
        assert_eq!(Threshold::new(0.0).map(Threshold::get), Some(0.0));
        assert_eq!(Threshold::new(1.0).map(Threshold::get), Some(1.0));
        assert!(Threshold::new(-0.01).is_none());
        assert!(Threshold::new(1.5).is_none());
        assert!(Threshold::new(f64::NAN).is_none());
        assert_eq!(
            Threshold::try_from(2.0),
            Err(VisibilityError::InvalidThreshold(2.0))
        );
        assert_eq!(Threshold::default(), Threshold::PLATFORM_DEFAULT);
    }

    #[test]
    fn starts_hidden_for_every_configuration() {
        for options in [
            ObserverOptions::default(),
            tenth(),
            tenth().with_root_margin("0px 0px -50px 0px"),
            tenth().freeze_once_visible(true),
        ] {
            let platform = FakeViewport::default();
            let mut detector = VisibilityDetector::new(platform.clone(), options);
            assert!(!detector.is_visible());
            detector.attach("features");
            assert!(!detector.is_visible());
            assert!(detector.is_observing());
        }
    }

    #[test]
    fn unattached_detector_never_observes() {
        let platform = FakeViewport::default();
        let detector = VisibilityDetector::new(platform.clone(), tenth());
        assert!(!detector.is_observing());
        assert_eq!(platform.state.borrow().created, 0);
        assert_eq!(platform.emit("features", true), 0);
        assert!(!detector.is_visible());
    }

    #[test]
    fn intersecting_notification_sets_visible_until_contradicted() {
        let platform = FakeViewport::default();
        let mut detector = VisibilityDetector::new(platform.clone(), tenth());
        detector.attach("features");

        platform.emit("features", true);
        assert!(detector.is_visible());
        platform.emit("features", true);
        assert!(detector.is_visible());

        platform.emit("features", false);
        assert!(!detector.is_visible());
    }

    #[test]
    fn passes_threshold_and_margin_to_platform() {
        let platform = FakeViewport::default();
        let mut detector = VisibilityDetector::new(
            platform.clone(),
            tenth().with_root_margin("0px 0px -50px 0px"),
        );
        detector.attach("features");

        let state = platform.state.borrow();
        let options = &state.active[0].options;
        assert_eq!(options.threshold.get(), 0.1);
        assert_eq!(options.root_margin.as_deref(), Some("0px 0px -50px 0px"));
    }

    #[test]
    fn reattach_releases_previous_observer_first() {
        let platform = FakeViewport::default();
        let mut detector = VisibilityDetector::new(platform.clone(), tenth());
        detector.attach("first");
        detector.attach("second");

        assert_eq!(platform.active_count(), 1);
        assert_eq!(
            platform.state.borrow().log,
            vec!["observe first#0", "release first#0", "observe second#1"]
        );

        // The old region is gone: neither live nor late notifications count.
        assert_eq!(platform.emit("first", true), 0);
        assert_eq!(platform.emit_late("first", true), 1);
        assert!(!detector.is_visible());

        platform.emit("second", true);
        assert!(detector.is_visible());
        assert_eq!(detector.target(), Some(&"second"));
    }

    #[test]
    fn attaching_same_target_keeps_registration() {
        let platform = FakeViewport::default();
        let mut detector = VisibilityDetector::new(platform.clone(), tenth());
        detector.attach("features");
        detector.attach("features");

        let state = platform.state.borrow();
        assert_eq!(state.created, 1);
        assert_eq!(state.released, 0);
    }

    #[test]
    fn option_change_rebuilds_observer() {
        let platform = FakeViewport::default();
        let mut detector = VisibilityDetector::new(platform.clone(), tenth());
        detector.attach("features");

        detector.set_options(tenth());
        assert_eq!(platform.state.borrow().created, 1);

        let half = ObserverOptions::default().with_threshold(Threshold::new(0.5).unwrap());
        detector.set_options(half.clone());
        {
            let state = platform.state.borrow();
            assert_eq!(state.created, 2);
            assert_eq!(state.released, 1);
            assert_eq!(state.active[0].options, half);
        }
        assert_eq!(detector.options(), &half);
        assert_eq!(platform.emit_late("features", true), 1);
        assert!(!detector.is_visible());
    }

    #[test]
    fn dropping_detector_releases_observer() {
        let platform = FakeViewport::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let mut detector = VisibilityDetector::new(platform.clone(), tenth());
            let log = Rc::clone(&seen);
            let _subscription = detector.subscribe(move |v| log.borrow_mut().push(v));
            detector.attach("features");
            platform.emit("features", true);
        }

        assert_eq!(platform.active_count(), 0);
        assert_eq!(platform.state.borrow().released, 1);
        platform.emit_late("features", false);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn detach_releases_and_keeps_last_value() {
        let platform = FakeViewport::default();
        let mut detector = VisibilityDetector::new(platform.clone(), tenth());
        detector.attach("features");
        platform.emit("features", true);

        detector.detach();
        assert!(!detector.is_observing());
        assert_eq!(detector.target(), None);
        assert_eq!(platform.active_count(), 0);
        assert!(detector.is_visible());
    }

    #[test]
    fn never_scrolled_into_view_stays_hidden() {
        let platform = FakeViewport::default();
        let mut detector = VisibilityDetector::new(platform.clone(), tenth());
        detector.attach("features");
        for _ in 0..5 {
            platform.emit("features", false);
        }
        assert!(!detector.is_visible());
    }

    #[test]
    fn reports_each_crossing_once() {
        let platform = FakeViewport::default();
        let mut detector = VisibilityDetector::new(platform.clone(), tenth());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let _subscription = detector.subscribe(move |v| log.borrow_mut().push(v));
        detector.attach("features");

        // Initial measurement, then scroll in, jitter, out and back in.
        for intersecting in [false, true, true, true, false, true] {
            platform.emit("features", intersecting);
        }
        assert_eq!(*seen.borrow(), vec![true, false, true]);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let platform = FakeViewport::default();
        let mut detector = VisibilityDetector::new(platform.clone(), tenth());
        let seen = Rc::new(Cell::new(0));
        let count = Rc::clone(&seen);
        let subscription = detector.subscribe(move |_| count.set(count.get() + 1));
        detector.attach("features");

        platform.emit("features", true);
        drop(subscription);
        platform.emit("features", false);
        assert_eq!(seen.get(), 1);
        assert!(!detector.is_visible());
    }

    #[test]
    fn independent_regions_do_not_interfere() {
        let platform = FakeViewport::default();
        let mut features = VisibilityDetector::new(platform.clone(), tenth());
        let mut pricing = VisibilityDetector::new(platform.clone(), tenth());
        features.attach("features");
        pricing.attach("pricing");

        platform.emit("features", true);
        assert!(features.is_visible());
        assert!(!pricing.is_visible());

        drop(features);
        platform.emit("pricing", true);
        assert!(pricing.is_visible());
        assert_eq!(platform.active_count(), 1);
    }

    #[test]
    fn unavailable_platform_reports_hidden() {
        let platform = FakeViewport::unavailable();
        let mut detector = VisibilityDetector::new(platform.clone(), tenth());
        detector.attach("features");

        assert!(!detector.is_observing());
        assert!(!detector.is_visible());
        assert_eq!(platform.emit("features", true), 0);
    }

    #[test]
    fn frozen_region_stays_visible() {
        let platform = FakeViewport::default();
        let mut detector =
            VisibilityDetector::new(platform.clone(), tenth().freeze_once_visible(true));
        detector.attach("features");

        platform.emit("features", false);
        assert!(!detector.is_visible());
        platform.emit("features", true);
        platform.emit("features", false);
        assert!(detector.is_visible());

        // Re-attaching a revealed region does not observe again.
        detector.attach("features-moved");
        assert!(!detector.is_observing());
        assert_eq!(platform.state.borrow().created, 1);

        detector.set_options(tenth());
        assert!(detector.is_observing());
        platform.emit("features-moved", false);
        assert!(!detector.is_visible());
    }
}
