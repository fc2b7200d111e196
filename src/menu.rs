//! Collapsible mobile navigation menu.
//!
//! One boolean drives three markers: the menu, the hamburger button, and the
//! body scroll lock. The lock always mirrors the menu's open state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Surface reflecting the menu state.
pub trait MenuView {
    /// Show the menu as open or closed, locking page scroll while open.
    fn set_open(&mut self, open: bool);
}

pub struct MenuController<V: MenuView> {
    view: V,
    open: bool,
}

impl<V: MenuView> MenuController<V> {
    /// Start closed. The view is not touched until the first transition.
    #[must_use]
    pub fn new(view: V) -> Self {
        Self { view, open: false }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Hamburger click: flip open/closed.
    pub fn toggle(&mut self) -> bool {
        self.set(!self.open);
        self.open
    }

    /// Close if open. No-op when already closed.
    pub fn close(&mut self) {
        if self.open {
            self.set(false);
        }
    }

    /// Navigation link click. Closes an open menu and never opens a closed one.
    pub fn close_if_open_on_link_click(&mut self) {
        self.close();
    }

    fn set(&mut self, open: bool) {
        self.open = open;
        self.view.set_open(open);
        log::debug!("menu: {}", if open { "opened" } else { "closed" });
    }
}
