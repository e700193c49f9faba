use serde::Deserialize;

use crate::config::SECTION_IDS;
use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../static/site.json");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NavLink {
    pub name: String,
    pub target: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Position in `SiteContent::gallery` is the only identity an image has.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ClubEvent {
    pub title: String,
    pub when: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FishingReport {
    pub title: String,
    pub date: String,
    pub body: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub club_name: String,
    pub hero_image: GalleryImage,
    pub nav_links: Vec<NavLink>,
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub events: Vec<ClubEvent>,
    #[serde(default)]
    pub reports: Vec<FishingReport>,
}

impl SiteContent {
    /// Parses the content document compiled into the binary.
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(SITE_JSON)
    }

    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.gallery.is_empty() {
            return Err(ContentError::EmptyGallery);
        }
        if let Some(link) = self
            .nav_links
            .iter()
            .find(|link| !SECTION_IDS.contains(&link.target.as_str()))
        {
            return Err(ContentError::UnknownTarget(link.target.clone()));
        }
        Ok(())
    }

    /// Bare-bones content used when the embedded document is broken.
    pub fn fallback() -> Self {
        let nav_links = SECTION_IDS
            .iter()
            .map(|id| {
                let mut name = id.to_string();
                if let Some(first) = name.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                NavLink { name, target: id.to_string() }
            })
            .collect();

        SiteContent {
            club_name: "Arlington Anglers Club".to_string(),
            hero_image: GalleryImage {
                src: "/IMG_4784.jpg".to_string(),
                alt: "Arlington Anglers Club".to_string(),
            },
            nav_links,
            gallery: vec![GalleryImage {
                src: "/IMG_4784.jpg".to_string(),
                alt: "Arlington Anglers Club Photo 1".to_string(),
            }],
            events: Vec::new(),
            reports: Vec::new(),
        }
    }

    pub fn load_or_fallback() -> Self {
        match Self::load() {
            Ok(content) => content,
            Err(e) => {
                log::error!("{}; using fallback content", e);
                Self::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_document_loads() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.club_name, "Arlington Anglers Club");
        assert_eq!(content.gallery.len(), 3);
        assert_eq!(content.nav_links.len(), 5);
        assert_eq!(content.reports.len(), 2);
    }

    #[test]
    fn nav_links_follow_section_order() {
        let content = SiteContent::load().unwrap();
        let targets: Vec<&str> = content.nav_links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, SECTION_IDS.to_vec());
        assert_eq!(content.nav_links[2].href(), "#gallery");
    }

    #[test]
    fn empty_gallery_is_rejected() {
        let raw = r#"{
            "club_name": "x",
            "hero_image": { "src": "/a.jpg", "alt": "a" },
            "nav_links": [],
            "gallery": []
        }"#;
        assert!(matches!(SiteContent::parse(raw), Err(ContentError::EmptyGallery)));
    }

    #[test]
    fn unknown_nav_target_is_rejected() {
        let raw = r#"{
            "club_name": "x",
            "hero_image": { "src": "/a.jpg", "alt": "a" },
            "nav_links": [{ "name": "Join", "target": "join" }],
            "gallery": [{ "src": "/a.jpg", "alt": "a" }]
        }"#;
        match SiteContent::parse(raw) {
            Err(ContentError::UnknownTarget(target)) => assert_eq!(target, "join"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(SiteContent::parse("{"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn fallback_passes_its_own_validation() {
        let content = SiteContent::fallback();
        assert!(content.validate().is_ok());
        assert_eq!(content.nav_links[0].name, "About");
    }
}
