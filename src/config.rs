/// Height of the fixed header; in-page navigation lands this far below the
/// target section's top edge.
pub const HEADER_OFFSET: f64 = 88.0;

/// Vertical scroll past which the header switches to its scrolled style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Sections observed for scroll-spy, in page order.
pub const SECTION_IDS: [&str; 5] = ["about", "events", "gallery", "reviews", "reports"];

// Focus band: upper-middle of the viewport.
pub const OBSERVER_ROOT_MARGIN: &str = "-30% 0px -50% 0px";
pub const OBSERVER_THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Where trunk's `copy-dir` puts `public/`, relative to the page origin.
pub const ASSET_BASE: &str = "/public";

pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}{}", ASSET_BASE, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_left_alone() {
        let url = "https://arlingtonlandtrust.org/pond.jpg";
        assert_eq!(asset_url(url), url);
    }

    #[test]
    fn relative_paths_are_served_from_public() {
        assert_eq!(asset_url("/IMG_4784.jpg"), "/public/IMG_4784.jpg");
    }
}
