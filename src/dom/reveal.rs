//! Reveal-on-scroll wiring.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Window};

use super::{listen, query_all, set_class};
use crate::config::Config;
use crate::error::Error;
use crate::reveal::{RevealAnimator, RevealTarget};

pub type Mounted = Rc<RefCell<RevealAnimator<RevealElement>>>;

pub struct RevealElement {
    element: Element,
    class: Rc<str>,
}

impl RevealTarget for RevealElement {
    fn top(&self) -> f64 {
        self.element.get_bounding_client_rect().top()
    }

    fn mark(&mut self) {
        set_class(&self.element, &self.class, true);
    }
}

/// Capture the marked elements, scan once, and rescan on scroll and load.
///
/// # Errors
///
/// Returns [`Error::Js`] when the selector is invalid or a listener cannot
/// be attached.
pub fn mount(window: &Window, document: &Document, config: &Config) -> Result<Mounted, Error> {
    let class: Rc<str> = Rc::from(config.classes.active.as_str());
    let elements = query_all(document, &config.selectors.reveal)?
        .into_iter()
        .map(|element| RevealElement { element, class: Rc::clone(&class) });
    let mounted = Rc::new(RefCell::new(RevealAnimator::new(elements, config.reveal_divisor)));
    log::info!("reveal tracking {} element(s)", mounted.borrow().len());

    scan(window, &mounted);
    for event in ["scroll", "load"] {
        let target = Rc::clone(&mounted);
        let source = window.clone();
        listen(window, event, move || scan(&source, &target))?;
    }
    Ok(mounted)
}

fn scan(window: &Window, animator: &Mounted) {
    let height = match window.inner_height() {
        Ok(value) => match value.as_f64() {
            Some(height) => height,
            None => {
                log::warn!("viewport height is not a number; scan skipped");
                return;
            }
        },
        Err(err) => {
            log::warn!("viewport height unavailable: {}", Error::from(err));
            return;
        }
    };
    if let Ok(mut animator) = animator.try_borrow_mut() {
        animator.scan(height);
    }
}
