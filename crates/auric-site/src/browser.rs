//! Browser bindings
//!
//! Everything that touches `web_sys` lives here. Builds without the
//! `hydrate` feature get inert versions with the same signatures, which is
//! all the server render needs: effects and listeners never run there.

#[cfg(feature = "hydrate")]
pub use dom::*;

#[cfg(not(feature = "hydrate"))]
pub use inert::*;

#[cfg(feature = "hydrate")]
mod dom {
    use auric_core::contrast;
    use auric_core::map::{GateState, Observation, ObserverOptions, ViewportHost, VisibilityGate};
    use auric_core::scroll::ScrollTarget;
    use auric_core::Viewport;
    use leptos::*;
    use tracing::{debug, warn};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    /// Watches one element through `IntersectionObserver`.
    pub struct IntersectionHost {
        element: web_sys::Element,
    }

    /// A connected observer and the JS callback it calls into.
    pub struct ObserverHandle {
        observer: web_sys::IntersectionObserver,
        _callback: EntriesCallback,
    }

    impl Observation for ObserverHandle {
        fn disconnect(&mut self) {
            self.observer.disconnect();
        }
    }

    fn supports_intersection_observer(window: &web_sys::Window) -> bool {
        js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }

    impl ViewportHost for IntersectionHost {
        type Observation = ObserverHandle;

        fn observe(
            &self,
            options: &ObserverOptions,
            mut on_change: Box<dyn FnMut(bool)>,
        ) -> Option<ObserverHandle> {
            let window = web_sys::window()?;
            if !supports_intersection_observer(&window) {
                warn!("IntersectionObserver is not available");
                return None;
            }

            let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting());
                }
            });

            let init = web_sys::IntersectionObserverInit::new();
            init.set_root_margin(&options.root_margin());
            init.set_threshold(&JsValue::from_f64(options.threshold));

            let observer =
                match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                    Ok(observer) => observer,
                    Err(err) => {
                        warn!(error = ?err, "Failed to construct IntersectionObserver");
                        return None;
                    }
                };
            observer.observe(&self.element);

            Some(ObserverHandle {
                observer,
                _callback: callback,
            })
        }
    }

    /// Flip `state` to `Visible` once the container nears the viewport.
    ///
    /// The gate is dropped, and the observer disconnected, when the owning
    /// component is torn down.
    pub fn gate_on_visibility(container: NodeRef<html::Div>, state: RwSignal<GateState>) {
        let gate = store_value(None::<VisibilityGate<ObserverHandle>>);

        create_effect(move |_| {
            let Some(div) = container.get() else {
                return;
            };
            if gate.with_value(Option::is_some) {
                return;
            }
            let host = IntersectionHost {
                element: (*div).clone().into(),
            };
            let attached = VisibilityGate::attach(&host, ObserverOptions::default(), move || {
                debug!("Map container is near the viewport");
                state.set(GateState::Visible);
            });
            gate.set_value(Some(attached));
        });

        on_cleanup(move || {
            let _ = gate.try_update_value(Option::take);
        });
    }

    pub fn window_viewport() -> Option<Viewport> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Viewport::new(width, height))
    }

    pub fn scroll_y() -> f64 {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    /// Whether the page body currently paints a dark background.
    pub fn body_is_dark() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(body) = window.document().and_then(|d| d.body()) else {
            return false;
        };
        match window.get_computed_style(&body) {
            Ok(Some(style)) => style
                .get_property_value("background-color")
                .map(|colour| contrast::is_dark_background(&colour))
                .unwrap_or(false),
            _ => {
                warn!("Computed style unavailable, assuming a light background");
                false
            }
        }
    }

    pub fn scroll_to(target: &ScrollTarget) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let ScrollTarget::Anchor(id) = target {
            if let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                return;
            }
            debug!(id = %id, "Anchor target missing, scrolling to top");
        }
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(not(feature = "hydrate"))]
mod inert {
    use auric_core::map::GateState;
    use auric_core::scroll::ScrollTarget;
    use auric_core::Viewport;
    use leptos::*;

    pub fn gate_on_visibility(_container: NodeRef<html::Div>, _state: RwSignal<GateState>) {}

    pub fn window_viewport() -> Option<Viewport> {
        None
    }

    pub fn scroll_y() -> f64 {
        0.0
    }

    pub fn body_is_dark() -> bool {
        false
    }

    pub fn scroll_to(_target: &ScrollTarget) {}
}
