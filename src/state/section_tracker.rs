use std::rc::Rc;
use yew::prelude::*;

/// One entry of an intersection notification batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionReport {
    pub id: String,
    pub is_intersecting: bool,
}

/// Scroll-spy state: which registered section the nav bar highlights.
///
/// `active` always names a registered section. It starts at the first one
/// and only moves when an intersection batch reports a registered section
/// entering the focus band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionTracker {
    sections: Vec<String>,
    active: String,
}

impl SectionTracker {
    pub fn register<I, S>(section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = section_ids.into_iter().map(Into::into).collect();
        let active = sections.first().cloned().unwrap_or_default();
        Self { sections, active }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Applies a batch in delivery order; the last intersecting section wins.
    /// Returns whether the active section changed.
    pub fn observe(&mut self, batch: &[IntersectionReport]) -> bool {
        let before = self.active.clone();
        for report in batch.iter().filter(|r| r.is_intersecting) {
            if self.sections.iter().any(|s| *s == report.id) {
                self.active = report.id.clone();
            }
        }
        self.active != before
    }
}

pub enum SectionAction {
    Observed(Vec<IntersectionReport>),
}

impl Reducible for SectionTracker {
    type Action = SectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SectionAction::Observed(batch) => {
                let mut next = (*self).clone();
                if next.observe(&batch) {
                    log::debug!("active section -> {}", next.active);
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SECTION_IDS;

    fn tracker() -> SectionTracker {
        SectionTracker::register(SECTION_IDS)
    }

    fn entering(id: &str) -> IntersectionReport {
        IntersectionReport { id: id.to_string(), is_intersecting: true }
    }

    fn leaving(id: &str) -> IntersectionReport {
        IntersectionReport { id: id.to_string(), is_intersecting: false }
    }

    #[test]
    fn first_section_starts_active() {
        assert_eq!(tracker().active(), "about");
    }

    #[test]
    fn intersecting_section_becomes_active() {
        let mut tracker = tracker();
        assert!(tracker.observe(&[entering("gallery")]));
        assert_eq!(tracker.active(), "gallery");
    }

    #[test]
    fn last_intersecting_report_in_a_batch_wins() {
        let mut tracker = tracker();
        tracker.observe(&[
            entering("events"),
            leaving("about"),
            entering("reviews"),
            leaving("reports"),
        ]);
        assert_eq!(tracker.active(), "reviews");
    }

    #[test]
    fn leaving_reports_do_not_move_the_highlight() {
        let mut tracker = tracker();
        tracker.observe(&[entering("events")]);
        assert!(!tracker.observe(&[leaving("events")]));
        assert_eq!(tracker.active(), "events");
    }

    #[test]
    fn unregistered_ids_are_ignored() {
        let mut tracker = tracker();
        assert!(!tracker.observe(&[entering("hero")]));
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn reducer_keeps_the_same_state_for_empty_batches() {
        let state = Rc::new(tracker());
        let same = state.clone().reduce(SectionAction::Observed(Vec::new()));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.reduce(SectionAction::Observed(vec![entering("reports")]));
        assert_eq!(moved.active(), "reports");
    }
}
