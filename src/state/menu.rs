use std::rc::Rc;
use yew::prelude::*;

/// Collapsible mobile navigation panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    is_open: bool,
}

impl Menu {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close_on_navigate(&mut self) {
        self.is_open = false;
    }
}

pub enum MenuAction {
    Toggle,
    CloseOnNavigate,
}

impl Reducible for Menu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            MenuAction::Toggle => next.toggle(),
            MenuAction::CloseOnNavigate => next.close_on_navigate(),
        }
        if next == *self { self } else { Rc::new(next) }
    }
}
