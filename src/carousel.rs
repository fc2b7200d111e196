//! Auto-advancing slide carousel.
//!
//! A [`Carousel`] cycles a fixed number of slides with wraparound in both
//! directions. It advances on its own every `interval_ms`, and on demand
//! through [`Carousel::show_next`] / [`Carousel::show_previous`]. A manual step resets
//! the auto-play cadence so the visitor is not interrupted right after
//! navigating.
//!
//! The carousel never touches the DOM or the browser clock directly. It
//! renders through a [`SlideTrack`] and schedules through a [`Scheduler`],
//! which lets the whole state machine run under plain `cargo test`.
//!
//! Invariants:
//! - `index < slide_count` at all times.
//! - At most one timer registration is alive per carousel. Only
//!   [`Carousel::restart_timer`] creates one, and it drops the previous
//!   handle before asking the scheduler for a new one.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::num::NonZeroUsize;

use crate::consts::SLIDE_WIDTH_PERCENT;
use crate::error::Error;

/// Source of repeating timer registrations.
///
/// Dropping a returned handle must cancel its registration. What the timer
/// invokes on each tick is up to the implementation; in the browser it calls
/// back into [`Carousel::tick`].
pub trait Scheduler {
    type Handle;

    /// Register a callback that fires every `period_ms` until the handle drops.
    fn every(&mut self, period_ms: u32) -> Self::Handle;
}

/// Visual surface holding the slides side by side.
pub trait SlideTrack {
    /// Shift the track so slide `index` is fully in view.
    ///
    /// `offset_percent` is the horizontal translation to apply, already
    /// computed as `-index * 100`.
    fn show(&mut self, index: usize, offset_percent: f64);
}

/// Direction of a single slide step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Validate a track's slide count. An empty track cannot be cycled.
///
/// # Errors
///
/// Returns [`Error::NoSlides`] when `count` is zero.
pub fn slide_count(count: usize) -> Result<NonZeroUsize, Error> {
    NonZeroUsize::new(count).ok_or(Error::NoSlides)
}

/// Run `mount` for every container, keeping the ones that succeed.
///
/// A failing container is logged and skipped; it never stops the others.
#[must_use]
pub fn mount_each<C, M>(
    containers: impl IntoIterator<Item = C>,
    mut mount: impl FnMut(C) -> Result<M, Error>,
) -> Vec<M> {
    containers
        .into_iter()
        .enumerate()
        .filter_map(|(i, container)| match mount(container) {
            Ok(mounted) => Some(mounted),
            Err(err) => {
                log::warn!("carousel {i} skipped: {err}");
                None
            }
        })
        .collect()
}

/// Index reached by taking one `step` from `index` in a ring of `count` slides.
#[must_use]
pub fn step_index(index: usize, count: NonZeroUsize, step: Step) -> usize {
    let count = count.get();
    match step {
        Step::Forward => (index + 1) % count,
        Step::Backward => (index + count - 1) % count,
    }
}

/// Horizontal track offset that brings slide `index` into view.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn offset_percent(index: usize) -> f64 {
    -(index as f64) * SLIDE_WIDTH_PERCENT
}

/// One carousel instance. Instances share nothing with each other.
pub struct Carousel<S: Scheduler, T: SlideTrack> {
    scheduler: S,
    track: T,
    slide_count: NonZeroUsize,
    index: usize,
    interval_ms: u32,
    timer: Option<S::Handle>,
}

impl<S: Scheduler, T: SlideTrack> Carousel<S, T> {
    /// Build a carousel showing slide 0. Auto-play is not started until
    /// [`Carousel::play`] is called.
    #[must_use]
    pub fn new(scheduler: S, mut track: T, slide_count: NonZeroUsize, interval_ms: u32) -> Self {
        track.show(0, offset_percent(0));
        Self { scheduler, track, slide_count, index: 0, interval_ms, timer: None }
    }

    // --- Queries ---

    /// Index of the slide currently in view.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count.get()
    }

    /// Whether an auto-play timer is registered.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    #[must_use]
    pub fn track(&self) -> &T {
        &self.track
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    // --- Transitions ---

    /// Move one slide forward, wrapping from the last slide to the first.
    ///
    /// Index only: the track is not re-rendered. Page events go through
    /// [`Carousel::tick`] or [`Carousel::show_next`], which render.
    pub fn advance(&mut self) -> usize {
        self.step(Step::Forward)
    }

    /// Move one slide back, wrapping from the first slide to the last.
    ///
    /// Index only: the track is not re-rendered. Page events go through
    /// [`Carousel::show_previous`], which renders.
    pub fn retreat(&mut self) -> usize {
        self.step(Step::Backward)
    }

    fn step(&mut self, step: Step) -> usize {
        self.index = step_index(self.index, self.slide_count, step);
        self.index
    }

    fn render(&mut self) {
        self.track.show(self.index, offset_percent(self.index));
    }

    // --- Timer ---

    /// Start auto-play, replacing any timer already running.
    pub fn play(&mut self) {
        self.restart_timer();
    }

    /// Stop auto-play. Has no effect when already stopped.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("carousel: auto-play stopped at slide {}", self.index);
        }
    }

    /// Cancel the current timer, then register a fresh one.
    pub fn restart_timer(&mut self) {
        // Drop first: the old registration must be gone before a new one exists.
        self.timer = None;
        self.timer = Some(self.scheduler.every(self.interval_ms));
    }

    // --- Events ---

    /// Auto-play tick: advance and render, leaving the timer as is.
    pub fn tick(&mut self) {
        self.advance();
        self.render();
        log::debug!("carousel: auto-advanced to slide {}", self.index);
    }

    /// Manual "next": stop, advance, render, then restart the cadence.
    pub fn show_next(&mut self) -> usize {
        self.navigate(Step::Forward)
    }

    /// Manual "previous": stop, retreat, render, then restart the cadence.
    pub fn show_previous(&mut self) -> usize {
        self.navigate(Step::Backward)
    }

    fn navigate(&mut self, step: Step) -> usize {
        self.stop();
        self.step(step);
        self.render();
        self.restart_timer();
        log::debug!("carousel: navigated {step:?} to slide {}", self.index);
        self.index
    }
}
