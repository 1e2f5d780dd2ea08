//! Visibility gate for deferred iframe loading
//!
//! The gate starts `Pending` and moves to `Visible` exactly once, the first
//! time the host reports the watched element intersecting the viewport
//! (expanded by a leading margin). The observation is disconnected on that
//! transition and on teardown. Hosts without an intersection capability
//! reveal immediately.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Leading margin around the viewport, in pixels.
pub const ROOT_MARGIN_PX: u32 = 300;

/// Fraction of the element that must intersect.
pub const VISIBILITY_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverOptions {
    pub root_margin_px: u32,
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin_px: ROOT_MARGIN_PX,
            threshold: VISIBILITY_THRESHOLD,
        }
    }
}

impl ObserverOptions {
    /// CSS margin string, e.g. `300px`.
    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GateState {
    #[default]
    Pending,
    Visible,
}

/// A live intersection observation.
pub trait Observation {
    fn disconnect(&mut self);
}

/// Something that can watch an element's intersection with the viewport.
pub trait ViewportHost {
    type Observation: Observation;

    /// Start observing. `on_change` receives `is_intersecting` for every
    /// entry the host reports. Returns `None` when the host has no
    /// intersection capability.
    fn observe(
        &self,
        options: &ObserverOptions,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Option<Self::Observation>;
}

struct Inner<O> {
    state: GateState,
    observation: Option<O>,
    connected: bool,
    on_visible: Option<Box<dyn FnOnce()>>,
}

impl<O: Observation> Inner<O> {
    fn disconnect(&mut self) {
        if self.connected {
            if let Some(observation) = self.observation.as_mut() {
                observation.disconnect();
            }
            self.connected = false;
        }
    }
}

/// Single-shot gate owned by one map widget.
///
/// Dropping the gate disconnects the observation. The observation itself is
/// kept until the gate drops so host callbacks stay valid while they run.
pub struct VisibilityGate<O: Observation> {
    inner: Rc<RefCell<Inner<O>>>,
}

impl<O: Observation + 'static> VisibilityGate<O> {
    pub fn attach<H>(host: &H, options: ObserverOptions, on_visible: impl FnOnce() + 'static) -> Self
    where
        H: ViewportHost<Observation = O>,
    {
        let inner = Rc::new(RefCell::new(Inner {
            state: GateState::Pending,
            observation: None,
            connected: false,
            on_visible: Some(Box::new(on_visible) as Box<dyn FnOnce()>),
        }));

        let weak: Weak<RefCell<Inner<O>>> = Rc::downgrade(&inner);
        let on_change = Box::new(move |intersecting: bool| {
            if !intersecting {
                return;
            }
            if let Some(inner) = weak.upgrade() {
                reveal(&inner);
            }
        });

        match host.observe(&options, on_change) {
            Some(observation) => {
                let mut guard = inner.borrow_mut();
                guard.observation = Some(observation);
                guard.connected = true;
                // Hosts may report synchronously from inside `observe`.
                if guard.state == GateState::Visible {
                    guard.disconnect();
                }
            }
            None => {
                debug!("Intersection observation unavailable, revealing map immediately");
                reveal(&inner);
            }
        }

        Self { inner }
    }
}

impl<O: Observation> VisibilityGate<O> {
    pub fn state(&self) -> GateState {
        self.inner.borrow().state
    }

    pub fn is_visible(&self) -> bool {
        self.state() == GateState::Visible
    }

    /// Stop observing without revealing. Idempotent.
    pub fn detach(&self) {
        if let Ok(mut guard) = self.inner.try_borrow_mut() {
            guard.disconnect();
            guard.on_visible = None;
        }
    }
}

impl<O: Observation> Drop for VisibilityGate<O> {
    fn drop(&mut self) {
        self.detach();
    }
}

fn reveal<O: Observation>(inner: &Rc<RefCell<Inner<O>>>) {
    let on_visible = {
        let Ok(mut guard) = inner.try_borrow_mut() else {
            return;
        };
        if guard.state == GateState::Visible {
            return;
        }
        guard.state = GateState::Visible;
        guard.disconnect();
        guard.on_visible.take()
    };
    if let Some(on_visible) = on_visible {
        on_visible();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Callback = Rc<RefCell<Option<Box<dyn FnMut(bool)>>>>;

    struct FakeHost {
        supported: bool,
        callback: Callback,
        disconnects: Rc<Cell<u32>>,
        seen_options: RefCell<Option<ObserverOptions>>,
    }

    impl FakeHost {
        fn new(supported: bool) -> Self {
            Self {
                supported,
                callback: Rc::new(RefCell::new(None)),
                disconnects: Rc::new(Cell::new(0)),
                seen_options: RefCell::new(None),
            }
        }

        fn fire(&self, intersecting: bool) {
            if let Some(callback) = self.callback.borrow_mut().as_mut() {
                callback(intersecting);
            }
        }
    }

    struct FakeObservation {
        disconnects: Rc<Cell<u32>>,
    }

    impl Observation for FakeObservation {
        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    impl ViewportHost for FakeHost {
        type Observation = FakeObservation;

        fn observe(
            &self,
            options: &ObserverOptions,
            on_change: Box<dyn FnMut(bool)>,
        ) -> Option<FakeObservation> {
            if !self.supported {
                return None;
            }
            *self.seen_options.borrow_mut() = Some(*options);
            *self.callback.borrow_mut() = Some(on_change);
            Some(FakeObservation {
                disconnects: self.disconnects.clone(),
            })
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_default_options() {
        let options = ObserverOptions::default();
        assert_eq!(options.root_margin(), "300px");
        assert_eq!(options.threshold, 0.01);
    }

    #[test]
    fn test_host_receives_options() {
        let host = FakeHost::new(true);
        let _gate = VisibilityGate::attach(&host, ObserverOptions::default(), || {});
        assert_eq!(*host.seen_options.borrow(), Some(ObserverOptions::default()));
    }

    #[test]
    fn test_stays_pending_until_intersecting() {
        let host = FakeHost::new(true);
        let (count, on_visible) = counter();
        let gate = VisibilityGate::attach(&host, ObserverOptions::default(), on_visible);

        host.fire(false);
        assert_eq!(gate.state(), GateState::Pending);
        assert_eq!(count.get(), 0);

        host.fire(true);
        assert_eq!(gate.state(), GateState::Visible);
        assert_eq!(count.get(), 1);
        assert_eq!(host.disconnects.get(), 1);
    }

    #[test]
    fn test_single_shot() {
        let host = FakeHost::new(true);
        let (count, on_visible) = counter();
        let gate = VisibilityGate::attach(&host, ObserverOptions::default(), on_visible);

        host.fire(true);
        host.fire(false);
        host.fire(true);

        assert!(gate.is_visible());
        assert_eq!(count.get(), 1);
        assert_eq!(host.disconnects.get(), 1);
    }

    #[test]
    fn test_fail_open_without_capability() {
        let host = FakeHost::new(false);
        let (count, on_visible) = counter();
        let gate = VisibilityGate::attach(&host, ObserverOptions::default(), on_visible);

        assert!(gate.is_visible());
        assert_eq!(count.get(), 1);
        assert_eq!(host.disconnects.get(), 0);
    }

    #[test]
    fn test_drop_disconnects_pending_observation() {
        let host = FakeHost::new(true);
        let (count, on_visible) = counter();
        let gate = VisibilityGate::attach(&host, ObserverOptions::default(), on_visible);
        drop(gate);

        assert_eq!(host.disconnects.get(), 1);
        host.fire(true);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_drop_after_reveal_does_not_disconnect_twice() {
        let host = FakeHost::new(true);
        let gate = VisibilityGate::attach(&host, ObserverOptions::default(), || {});
        host.fire(true);
        drop(gate);
        assert_eq!(host.disconnects.get(), 1);
    }
}
