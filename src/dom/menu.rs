//! Mobile navigation menu wiring.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::{listen, query_all, require, set_class};
use crate::config::{Classes, Config};
use crate::error::Error;
use crate::menu::{MenuController, MenuView};

pub type Mounted = Rc<RefCell<MenuController<DomMenuView>>>;

pub struct DomMenuView {
    menu: Element,
    hamburger: Element,
    body: Element,
    classes: Classes,
}

impl MenuView for DomMenuView {
    fn set_open(&mut self, open: bool) {
        set_class(&self.menu, &self.classes.active, open);
        set_class(&self.hamburger, &self.classes.active, open);
        set_class(&self.body, &self.classes.scroll_lock, open);
    }
}

/// Wire the hamburger and every link inside the menu.
///
/// # Errors
///
/// Returns [`Error::MissingElement`] when the menu, hamburger or body is
/// absent.
pub fn mount(document: &Document, config: &Config) -> Result<Mounted, Error> {
    let menu = require(document, &config.selectors.nav_menu)?;
    let hamburger = require(document, &config.selectors.hamburger)?;
    let body: Element = document.body().ok_or_else(|| Error::MissingElement("body".to_owned()))?.into();
    let links = query_all(&menu, &config.selectors.nav_link)?;

    let view = DomMenuView { menu, hamburger: hamburger.clone(), body, classes: config.classes.clone() };
    let mounted = Rc::new(RefCell::new(MenuController::new(view)));

    let target = Rc::clone(&mounted);
    listen(&hamburger, "click", move || {
        if let Ok(mut controller) = target.try_borrow_mut() {
            controller.toggle();
        }
    })?;

    for link in &links {
        let target = Rc::clone(&mounted);
        listen(link, "click", move || {
            if let Ok(mut controller) = target.try_borrow_mut() {
                controller.close_if_open_on_link_click();
            }
        })?;
    }
    log::info!("menu wired with {} link(s)", links.len());
    Ok(mounted)
}
