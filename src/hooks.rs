use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::dom::{current_scroll_y, DomViewport, EventListenerGuard, IntersectionGuard, SmoothScrollGuard};
use crate::error::DomError;
use crate::state::{
    is_scrolled, navigate_to, Lightbox, LightboxAction, LightboxKey, Menu, MenuAction, SectionAction,
    SectionTracker,
};

fn keep<T>(what: &str, guard: Result<T, DomError>) -> Option<T> {
    match guard {
        Ok(guard) => Some(guard),
        Err(e) => {
            log::error!("{} disabled: {}", what, e);
            None
        }
    }
}

/// Header styling flag, true once the page is scrolled past the threshold.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                scrolled.set(is_scrolled(current_scroll_y()));
                let setter = scrolled.clone();
                let guard = keep(
                    "scroll listener",
                    EventListenerGuard::on_window("scroll", move |_| {
                        setter.set(is_scrolled(current_scroll_y()));
                    }),
                );
                move || drop(guard)
            },
            (),
        );
    }

    *scrolled
}

/// Smooth scrolling for the whole document while the page is mounted.
#[hook]
pub fn use_smooth_scroll() {
    use_effect_with_deps(
        |_| {
            let guard = keep("smooth scrolling", SmoothScrollGuard::enable());
            move || drop(guard)
        },
        (),
    );
}

/// Scroll-spy over `section_ids`. Sections missing from the page are skipped.
#[hook]
pub fn use_section_tracker(section_ids: &'static [&'static str]) -> UseReducerHandle<SectionTracker> {
    let tracker = use_reducer_eq(|| SectionTracker::register(section_ids.iter().copied()));

    {
        let dispatcher = tracker.dispatcher();
        use_effect_with_deps(
            move |_| {
                let guard = keep(
                    "scroll-spy",
                    IntersectionGuard::observe(section_ids, move |batch| {
                        dispatcher.dispatch(SectionAction::Observed(batch));
                    }),
                );
                move || drop(guard)
            },
            (),
        );
    }

    tracker
}

/// Lightbox over `len` images with a window-wide key listener. The listener
/// stays bound for the page's lifetime; the reducer ignores keys while the
/// viewer is closed.
#[hook]
pub fn use_lightbox(len: usize) -> UseReducerHandle<Lightbox> {
    let lightbox = use_reducer_eq(move || Lightbox::new(len));

    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with_deps(
            move |_| {
                let guard = keep(
                    "lightbox keys",
                    EventListenerGuard::on_window("keydown", move |e: Event| {
                        let key = e
                            .dyn_ref::<KeyboardEvent>()
                            .and_then(|e| LightboxKey::parse(&e.key()));
                        if let Some(key) = key {
                            dispatcher.dispatch(LightboxAction::Key(key));
                        }
                    }),
                );
                move || drop(guard)
            },
            (),
        );
    }

    lightbox
}

/// In-page navigation for nav links: scrolls under the header and closes the
/// mobile menu, or does nothing if the section is not on this page.
pub fn section_nav(menu: &UseReducerHandle<Menu>) -> Callback<String> {
    let dispatcher = menu.dispatcher();
    Callback::from(move |target: String| {
        let mut viewport = match DomViewport::new() {
            Ok(viewport) => viewport,
            Err(e) => {
                log::error!("navigation to #{} failed: {}", target, e);
                return;
            }
        };
        let dispatcher = dispatcher.clone();
        navigate_to(&mut viewport, &target, move || {
            dispatcher.dispatch(MenuAction::CloseOnNavigate)
        });
    })
}
