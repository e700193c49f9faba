use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Keys the viewer listens for while it is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxKey::Escape),
            "ArrowLeft" => Some(LightboxKey::ArrowLeft),
            "ArrowRight" => Some(LightboxKey::ArrowRight),
            _ => None,
        }
    }
}

/// Full-screen viewer over a fixed, ordered gallery.
///
/// `selected` stays inside `0..len` for every reachable state and survives
/// `close`, so reopening without an index resumes at the last image seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lightbox {
    is_open: bool,
    selected: usize,
    len: usize,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { is_open: false, selected: 0, len }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn open(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        if index >= self.len {
            log::warn!("lightbox index {} out of range for {} images; clamping", index, self.len);
        }
        self.selected = index.min(self.len - 1);
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn navigate(&mut self, direction: Direction) {
        if !self.is_open {
            return;
        }
        self.selected = match direction {
            Direction::Previous if self.selected == 0 => self.len - 1,
            Direction::Previous => self.selected - 1,
            Direction::Next => (self.selected + 1) % self.len,
        };
    }

    pub fn press(&mut self, key: LightboxKey) {
        if !self.is_open {
            return;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.navigate(Direction::Previous),
            LightboxKey::ArrowRight => self.navigate(Direction::Next),
        }
    }

    /// 1-based position for display, e.g. `2 / 3`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.selected + 1, self.len)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Open(usize),
    Close,
    Navigate(Direction),
    Key(LightboxKey),
}

/// Clickable parts of the open viewer. Everything except the backdrop sits
/// inside it and must keep its clicks from bubbling up to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Image,
    Close,
    Previous,
    Next,
}

impl ClickTarget {
    pub fn action(self) -> Option<LightboxAction> {
        match self {
            ClickTarget::Backdrop | ClickTarget::Close => Some(LightboxAction::Close),
            ClickTarget::Image => None,
            ClickTarget::Previous => Some(LightboxAction::Navigate(Direction::Previous)),
            ClickTarget::Next => Some(LightboxAction::Navigate(Direction::Next)),
        }
    }

    pub fn stops_propagation(self) -> bool {
        self != ClickTarget::Backdrop
    }

    /// Actions one click produces: the target's own, then the backdrop's if
    /// the event bubbles that far.
    pub fn dispatched(self) -> Vec<LightboxAction> {
        let mut actions: Vec<LightboxAction> = self.action().into_iter().collect();
        if self != ClickTarget::Backdrop && !self.stops_propagation() {
            actions.extend(ClickTarget::Backdrop.action());
        }
        actions
    }
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LightboxAction::Open(index) => next.open(index),
            LightboxAction::Close => next.close(),
            LightboxAction::Navigate(direction) => next.navigate(direction),
            LightboxAction::Key(key) => next.press(key),
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn opened(len: usize, index: usize) -> Lightbox {
        let mut lightbox = Lightbox::new(len);
        lightbox.open(index);
        lightbox
    }

    #[test]
    fn starts_closed_on_first_image() {
        let lightbox = Lightbox::new(3);
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.selected(), 0);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut lightbox = opened(3, 0);
        lightbox.navigate(Direction::Previous);
        assert_eq!(lightbox.selected(), 2);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut lightbox = opened(3, 2);
        lightbox.navigate(Direction::Next);
        assert_eq!(lightbox.selected(), 0);
    }

    #[test]
    fn close_keeps_the_selected_image() {
        let mut lightbox = opened(3, 1);
        lightbox.close();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.selected(), 1);
    }

    #[test]
    fn navigating_while_closed_changes_nothing() {
        let mut lightbox = opened(3, 1);
        lightbox.close();
        let before = lightbox.clone();
        lightbox.navigate(Direction::Next);
        lightbox.navigate(Direction::Previous);
        assert_eq!(lightbox, before);
    }

    #[test]
    fn counter_is_one_based() {
        assert_eq!(opened(3, 1).counter(), "2 / 3");
        assert_eq!(opened(3, 0).counter(), "1 / 3");
    }

    #[test]
    fn out_of_range_open_is_clamped() {
        let lightbox = opened(3, 7);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.selected(), 2);
    }

    #[test]
    fn empty_gallery_never_opens() {
        let lightbox = opened(0, 0);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn single_image_wraps_onto_itself() {
        let mut lightbox = opened(1, 0);
        lightbox.navigate(Direction::Next);
        assert_eq!(lightbox.selected(), 0);
        lightbox.navigate(Direction::Previous);
        assert_eq!(lightbox.selected(), 0);
    }

    #[test]
    fn keys_drive_the_open_viewer() {
        let mut lightbox = opened(3, 0);
        lightbox.press(LightboxKey::ArrowRight);
        assert_eq!(lightbox.selected(), 1);
        lightbox.press(LightboxKey::ArrowLeft);
        lightbox.press(LightboxKey::ArrowLeft);
        assert_eq!(lightbox.selected(), 2);
        lightbox.press(LightboxKey::Escape);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut lightbox = Lightbox::new(3);
        lightbox.press(LightboxKey::ArrowRight);
        assert_eq!(lightbox, Lightbox::new(3));
    }

    #[test]
    fn only_viewer_keys_parse() {
        assert_eq!(LightboxKey::parse("Escape"), Some(LightboxKey::Escape));
        assert_eq!(LightboxKey::parse("ArrowLeft"), Some(LightboxKey::ArrowLeft));
        assert_eq!(LightboxKey::parse("ArrowRight"), Some(LightboxKey::ArrowRight));
        assert_eq!(LightboxKey::parse("ArrowUp"), None);
        assert_eq!(LightboxKey::parse("escape"), None);
    }

    #[test]
    fn reducer_reuses_state_when_nothing_changes() {
        let state = Rc::new(Lightbox::new(3));
        let same = state.clone().reduce(LightboxAction::Navigate(Direction::Next));
        assert!(Rc::ptr_eq(&state, &same));

        let open = state.reduce(LightboxAction::Open(2));
        assert!(open.is_open());
        let wrapped = open.reduce(LightboxAction::Key(LightboxKey::ArrowRight));
        assert_eq!(wrapped.selected(), 0);
    }

    fn click(state: Lightbox, target: ClickTarget) -> Lightbox {
        let mut state = Rc::new(state);
        for action in target.dispatched() {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn backdrop_click_closes() {
        let after = click(opened(3, 1), ClickTarget::Backdrop);
        assert!(!after.is_open());
        assert_eq!(after.selected(), 1);
    }

    #[test]
    fn image_click_keeps_the_viewer_open() {
        assert!(ClickTarget::Image.stops_propagation());
        assert!(ClickTarget::Image.dispatched().is_empty());
        assert_eq!(click(opened(3, 1), ClickTarget::Image), opened(3, 1));
    }

    #[test]
    fn arrow_buttons_navigate_without_closing() {
        let after = click(opened(3, 0), ClickTarget::Previous);
        assert!(after.is_open());
        assert_eq!(after.selected(), 2);

        let after = click(opened(3, 2), ClickTarget::Next);
        assert!(after.is_open());
        assert_eq!(after.selected(), 0);
    }

    #[test]
    fn controls_never_reach_the_backdrop() {
        for target in [ClickTarget::Image, ClickTarget::Close, ClickTarget::Previous, ClickTarget::Next] {
            assert!(target.stops_propagation(), "{:?} bubbles", target);
            let closes = target
                .dispatched()
                .iter()
                .filter(|a| **a == LightboxAction::Close)
                .count();
            let expected = usize::from(target == ClickTarget::Close);
            assert_eq!(closes, expected, "{:?}", target);
        }
        assert!(!ClickTarget::Backdrop.stops_propagation());
    }

    proptest! {
        #[test]
        fn next_len_times_is_identity(len in 1usize..64, start in 0usize..64) {
            let start = start % len;
            let mut lightbox = opened(len, start);
            for _ in 0..len {
                lightbox.navigate(Direction::Next);
            }
            prop_assert_eq!(lightbox.selected(), start);
        }

        #[test]
        fn previous_undoes_next(len in 1usize..64, start in 0usize..64) {
            let start = start % len;
            let mut lightbox = opened(len, start);
            lightbox.navigate(Direction::Next);
            lightbox.navigate(Direction::Previous);
            prop_assert_eq!(lightbox.selected(), start);
        }

        #[test]
        fn selection_stays_in_range(len in 1usize..16, moves in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut lightbox = opened(len, 0);
            for forward in moves {
                lightbox.navigate(if forward { Direction::Next } else { Direction::Previous });
                prop_assert!(lightbox.selected() < len);
            }
        }
    }
}
