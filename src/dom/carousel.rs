//! Carousel wiring: one independent instance per container on the page.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{listen, query, require};
use crate::carousel::{Carousel, Scheduler, SlideTrack, mount_each, slide_count};
use crate::config::Config;
use crate::error::Error;

pub type DomCarousel = Carousel<IntervalScheduler, TrackElement>;
pub type Mounted = Rc<RefCell<DomCarousel>>;

/// Schedules ticks back into the carousel that owns it.
///
/// Holds a weak reference so the interval never keeps its own carousel
/// alive; the page registry owns the strong one.
pub struct IntervalScheduler {
    target: Weak<RefCell<DomCarousel>>,
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&mut self, period_ms: u32) -> Interval {
        let target = self.target.clone();
        Interval::new(period_ms, move || {
            let Some(carousel) = target.upgrade() else {
                return;
            };
            if let Ok(mut carousel) = carousel.try_borrow_mut() {
                carousel.tick();
            }
        })
    }
}

/// The element whose direct children are the slides.
pub struct TrackElement {
    track: HtmlElement,
}

impl SlideTrack for TrackElement {
    fn show(&mut self, _index: usize, offset_percent: f64) {
        let transform = format!("translateX({offset_percent}%)");
        if let Err(err) = self.track.style().set_property("transform", &transform) {
            log::warn!("carousel transform not applied: {}", Error::from(err));
        }
    }
}

/// Wire every carousel container. Containers that fail are logged and skipped.
#[must_use]
pub fn mount_all(document: &Document, config: &Config) -> Vec<Mounted> {
    let containers = match super::query_all(document, &config.selectors.carousel_container) {
        Ok(containers) => containers,
        Err(err) => {
            log::warn!("carousels not wired: {err}");
            return Vec::new();
        }
    };
    mount_each(&containers, |container| mount(container, config))
}

/// Wire one container and start its auto-play.
///
/// # Errors
///
/// Returns [`Error::MissingElement`] when the container has no track,
/// [`Error::NoSlides`] when the track is empty, and [`Error::Js`] when the
/// track is not an HTML element or a listener cannot be attached.
pub fn mount(container: &Element, config: &Config) -> Result<Mounted, Error> {
    let track = require(container, &config.selectors.carousel_track)?;
    let slides = slide_count(track.children().length() as usize)?;
    let track = track
        .dyn_into::<HtmlElement>()
        .map_err(|_| Error::Js(format!("{} is not an HTML element", config.selectors.carousel_track)))?;

    let interval_ms = config.auto_play_interval_ms;
    let mounted: Mounted = Rc::new_cyclic(|weak| {
        let scheduler = IntervalScheduler { target: weak.clone() };
        RefCell::new(Carousel::new(scheduler, TrackElement { track }, slides, interval_ms))
    });

    if let Some(prev) = query(container, &config.selectors.carousel_prev)? {
        let target = Rc::clone(&mounted);
        listen(&prev, "click", move || {
            if let Ok(mut carousel) = target.try_borrow_mut() {
                carousel.show_previous();
            }
        })?;
    }
    if let Some(next) = query(container, &config.selectors.carousel_next)? {
        let target = Rc::clone(&mounted);
        listen(&next, "click", move || {
            if let Ok(mut carousel) = target.try_borrow_mut() {
                carousel.show_next();
            }
        })?;
    }

    if let Ok(mut carousel) = mounted.try_borrow_mut() {
        carousel.play();
        log::info!("carousel wired: {} slide(s), every {interval_ms} ms", carousel.slide_count());
    }
    Ok(mounted)
}
