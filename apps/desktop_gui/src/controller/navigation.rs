//! Two-view navigation with push history.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    Order,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Landing => "Home",
            View::Order => "Order",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            View::Landing => "/",
            View::Order => "/order",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: View,
    history: Vec<View>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: View::Landing,
            history: Vec::new(),
        }
    }
}

impl Navigator {
    pub fn current(&self) -> View {
        self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Pushes `view`; returns `false` when it is already current.
    pub fn navigate(&mut self, view: View) -> bool {
        if self.current == view {
            return false;
        }
        self.history.push(self.current);
        self.current = view;
        true
    }

    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}
