use crate::config::{HEADER_OFFSET, SCROLL_THRESHOLD};

/// The parts of the browser window in-page navigation needs.
pub trait Viewport {
    /// Top edge of the section relative to the viewport, if it is on the page.
    fn section_top(&self, id: &str) -> Option<f64>;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&mut self, top: f64);
}

pub fn scroll_offset(section_top: f64, scroll_y: f64) -> f64 {
    section_top + scroll_y - HEADER_OFFSET
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Smooth-scrolls to `target` so it sits just below the fixed header, then
/// runs `on_navigated` (closing the mobile menu). A section missing from the
/// current page is a silent no-op. Returns the offset scrolled to.
pub fn navigate_to<V, F>(viewport: &mut V, target: &str, on_navigated: F) -> Option<f64>
where
    V: Viewport + ?Sized,
    F: FnOnce(),
{
    let Some(top) = viewport.section_top(target) else {
        log::debug!("no #{} on this page; ignoring navigation", target);
        return None;
    };
    let offset = scroll_offset(top, viewport.scroll_y());
    viewport.smooth_scroll_to(offset);
    on_navigated();
    Some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::menu::Menu;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeViewport {
        tops: HashMap<String, f64>,
        scroll_y: f64,
        scrolls: Vec<f64>,
    }

    impl FakeViewport {
        fn with_section(mut self, id: &str, top: f64) -> Self {
            self.tops.insert(id.to_string(), top);
            self
        }
    }

    impl Viewport for FakeViewport {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn smooth_scroll_to(&mut self, top: f64) {
            self.scrolls.push(top);
        }
    }

    #[test]
    fn offset_subtracts_the_header() {
        assert_eq!(scroll_offset(400.0, 1000.0), 1312.0);
        assert_eq!(scroll_offset(-200.0, 600.0), 312.0);
    }

    #[test]
    fn scrolled_flag_is_strictly_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn navigation_scrolls_and_closes_the_menu() {
        let mut viewport = FakeViewport { scroll_y: 1000.0, ..Default::default() }
            .with_section("gallery", 400.0);
        let mut menu = Menu::default();
        menu.toggle();

        let offset = navigate_to(&mut viewport, "gallery", || menu.close_on_navigate());

        assert_eq!(offset, Some(1312.0));
        assert_eq!(viewport.scrolls, vec![1312.0]);
        assert!(!menu.is_open());
    }

    #[test]
    fn missing_section_changes_nothing() {
        let mut viewport = FakeViewport::default().with_section("about", 120.0);
        let mut menu = Menu::default();
        menu.toggle();

        let offset = navigate_to(&mut viewport, "gallery", || menu.close_on_navigate());

        assert_eq!(offset, None);
        assert!(viewport.scrolls.is_empty());
        assert!(menu.is_open());
    }
}
