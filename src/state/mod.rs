pub mod lightbox;
pub mod menu;
pub mod navigation;
pub mod section_tracker;

pub use lightbox::{ClickTarget, Lightbox, LightboxAction, LightboxKey};
pub use menu::{Menu, MenuAction};
pub use navigation::{is_scrolled, navigate_to, Viewport};
pub use section_tracker::{IntersectionReport, SectionAction, SectionTracker};
