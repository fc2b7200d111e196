//! Browser adapter: binds DOM events to the core components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything under `dom` is compiled only with the `hydrate` feature. It
//! implements the core seam traits with `web-sys` elements, `gloo-timers`
//! intervals and `localStorage`, then forwards clicks, scrolls and timer
//! ticks to the controllers. No page logic lives here.
//!
//! Wired components are kept in a thread-local [`Page`] for the lifetime of
//! the document. Each component is wired independently; one failing to wire
//! is logged and the rest of the page still works.

pub mod carousel;
pub mod menu;
pub mod reveal;
pub mod storage;
pub mod theme;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, Window};

use crate::config::Config;
use crate::consts::{CONFIG_ELEMENT_ID, PREFERS_DARK_QUERY};
use crate::error::Error;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Every component wired on the current page.
#[derive(Default)]
pub struct Page {
    pub theme: Option<theme::Mounted>,
    pub menu: Option<menu::Mounted>,
    pub reveal: Option<reveal::Mounted>,
    pub carousels: Vec<carousel::Mounted>,
}

/// Wire the whole page. Safe to call once per document.
///
/// # Errors
///
/// Returns [`Error::MissingElement`] only when there is no window or
/// document at all. Component-level failures are logged and skipped.
pub fn mount() -> Result<(), Error> {
    let window = web_sys::window().ok_or_else(|| Error::MissingElement("window".to_owned()))?;
    let document = window.document().ok_or_else(|| Error::MissingElement("document".to_owned()))?;
    let config = load_config(&document);

    let mut page = Page::default();

    match theme::mount(&window, &document, &config) {
        Ok(mounted) => page.theme = Some(mounted),
        Err(err) => log::warn!("theme not wired: {err}"),
    }
    match menu::mount(&document, &config) {
        Ok(mounted) => page.menu = Some(mounted),
        Err(err) => log::warn!("menu not wired: {err}"),
    }
    match reveal::mount(&window, &document, &config) {
        Ok(mounted) => page.reveal = Some(mounted),
        Err(err) => log::warn!("reveal not wired: {err}"),
    }
    page.carousels = carousel::mount_all(&document, &config);

    log::info!("page wired: {} carousel(s)", page.carousels.len());
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Read the embedded JSON config, falling back to defaults.
fn load_config(document: &Document) -> Config {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    Config::from_page(raw.as_deref())
}

/// System dark-mode signal. Unsupported or failing queries read as light.
fn prefers_dark(window: &Window) -> bool {
    match window.match_media(PREFERS_DARK_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) | Err(_) => false,
    }
}

/// First match for `selector` under `root`, or `None`.
fn query(root: &impl QueryRoot, selector: &str) -> Result<Option<Element>, Error> {
    Ok(root.query_first(selector)?)
}

/// First match for `selector`, failing when absent.
fn require(root: &impl QueryRoot, selector: &str) -> Result<Element, Error> {
    query(root, selector)?.ok_or_else(|| Error::MissingElement(selector.to_owned()))
}

/// All matches for `selector` under `root`, in document order.
fn query_all(root: &impl QueryRoot, selector: &str) -> Result<Vec<Element>, Error> {
    let list = root.query_every(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| match node.dyn_into::<Element>() {
            Ok(element) => Some(element),
            Err(node) => {
                log::warn!("{selector} matched a non-element node: {}", node.node_name());
                None
            }
        })
        .collect())
}

/// Documents and elements both support selector queries.
trait QueryRoot {
    fn query_first(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn query_every(&self, selector: &str) -> Result<web_sys::NodeList, JsValue>;
}

impl QueryRoot for Document {
    fn query_first(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn query_every(&self, selector: &str) -> Result<web_sys::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for Element {
    fn query_first(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn query_every(&self, selector: &str) -> Result<web_sys::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// Attach `handler` to `event` on `target` for the rest of the page's life.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut() + 'static) -> Result<(), Error> {
    let closure = Closure::<dyn FnMut()>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners are never removed; the closure lives as long as the page.
    closure.forget();
    Ok(())
}

/// Add or remove `class` on `element`, logging failures.
fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class {class} not updated: {}", Error::from(err));
    }
}
