//! Theme marker on `<body>` and the sun/moon icon inside the toggle.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Window};

use super::storage::BrowserStore;
use super::{listen, prefers_dark, query, set_class};
use crate::config::{Classes, Config};
use crate::error::Error;
use crate::theme::{Theme, ThemeController, ThemeView};

pub type Mounted = Rc<RefCell<ThemeController<BrowserStore, BodyThemeView>>>;

pub struct BodyThemeView {
    body: Element,
    toggle: Option<Element>,
    classes: Classes,
}

impl ThemeView for BodyThemeView {
    fn apply(&mut self, theme: Theme) {
        set_class(&self.body, &self.classes.dark_mode, theme.is_dark());
        if let Some(toggle) = &self.toggle {
            let icon = if theme.is_dark() { &self.classes.icon_dark } else { &self.classes.icon_light };
            toggle.set_inner_html(&format!(r#"<i class="fas {icon}"></i>"#));
        }
    }
}

/// Apply the starting theme and wire the toggle button when present.
///
/// # Errors
///
/// Returns [`Error::MissingElement`] when the document has no body.
pub fn mount(window: &Window, document: &Document, config: &Config) -> Result<Mounted, Error> {
    let body: Element = document.body().ok_or_else(|| Error::MissingElement("body".to_owned()))?.into();
    let toggle = query(document, &config.selectors.theme_toggle)?;
    if toggle.is_none() {
        log::warn!("no {} on page; theme applied but not toggleable", config.selectors.theme_toggle);
    }

    let view = BodyThemeView { body, toggle: toggle.clone(), classes: config.classes.clone() };
    let controller = ThemeController::initialize(
        BrowserStore::open(window),
        view,
        config.theme_storage_key.clone(),
        prefers_dark(window),
    );
    let mounted = Rc::new(RefCell::new(controller));

    if let Some(toggle) = toggle {
        let target = Rc::clone(&mounted);
        listen(&toggle, "click", move || {
            if let Ok(mut controller) = target.try_borrow_mut() {
                controller.toggle();
            }
        })?;
    }
    Ok(mounted)
}
