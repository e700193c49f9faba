use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Document, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::{OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLDS};
use crate::error::{js_message, DomError};
use crate::state::{IntersectionReport, Viewport};

fn document() -> Result<Document, DomError> {
    window().ok_or(DomError::NoWindow)?.document().ok_or(DomError::NoDocument)
}

/// An event listener that is removed again when the guard is dropped.
pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    pub fn on_window<F>(event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window().ok_or(DomError::NoWindow)?;
        Self::new(EventTarget::from(window), event, handler)
    }

    pub fn new<F>(target: EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| DomError::listener(event, e))?;
        Ok(Self { target, event, callback })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Watches the given sections through the focus band and hands each
/// notification batch over in delivery order. Disconnects on drop.
pub struct IntersectionGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionGuard {
    pub fn observe<F>(section_ids: &[&str], mut on_batch: F) -> Result<Self, DomError>
    where
        F: FnMut(Vec<IntersectionReport>) + 'static,
    {
        let document = document()?;

        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionReport {
                    id: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            on_batch(batch);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(OBSERVER_ROOT_MARGIN);
        let thresholds: Array = OBSERVER_THRESHOLDS.iter().map(|t| JsValue::from_f64(*t)).collect();
        options.set_threshold(&thresholds);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| DomError::Observer(js_message(&e)))?;

        for id in section_ids {
            match document.get_element_by_id(id) {
                Some(section) => observer.observe(&section),
                None => log::debug!("section #{} not on this page; not observed", id),
            }
        }

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for IntersectionGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Turns on document-wide smooth scrolling until dropped.
pub struct SmoothScrollGuard {
    root: HtmlElement,
}

impl SmoothScrollGuard {
    pub fn enable() -> Result<Self, DomError> {
        let root = document()?
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(DomError::NoDocument)?;
        root.style()
            .set_property("scroll-behavior", "smooth")
            .map_err(|e| DomError::Style(js_message(&e)))?;
        Ok(Self { root })
    }
}

impl Drop for SmoothScrollGuard {
    fn drop(&mut self) {
        let _ = self.root.style().remove_property("scroll-behavior");
    }
}

pub fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn new() -> Result<Self, DomError> {
        let window = window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl Viewport for DomViewport {
    fn section_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|section| section.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
