//! Scroll-triggered reveal of marked elements.
//!
//! The tracked set is captured once at startup. Each scan compares every
//! not-yet-revealed element's top edge against a trigger line placed one
//! `divisor`-th of the viewport above its bottom edge. Revealing is one-way;
//! once marked, an element is never re-checked or unmarked.
//!
//! Scans run on every scroll event without throttling.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// An element that can be revealed.
pub trait RevealTarget {
    /// Top edge relative to the viewport, in CSS pixels.
    fn top(&self) -> f64;

    /// Add the reveal marker.
    fn mark(&mut self);
}

/// Viewport-relative y coordinate an element's top must rise above.
#[must_use]
pub fn trigger_point(viewport_height: f64, divisor: f64) -> f64 {
    viewport_height - viewport_height / divisor
}

struct Tracked<E> {
    element: E,
    revealed: bool,
}

pub struct RevealAnimator<E: RevealTarget> {
    tracked: Vec<Tracked<E>>,
    divisor: f64,
}

impl<E: RevealTarget> RevealAnimator<E> {
    #[must_use]
    pub fn new(elements: impl IntoIterator<Item = E>, divisor: f64) -> Self {
        let tracked = elements.into_iter().map(|element| Tracked { element, revealed: false }).collect();
        Self { tracked, divisor }
    }

    /// Mark every element whose top has crossed the trigger line.
    /// Returns how many were newly revealed by this scan.
    pub fn scan(&mut self, viewport_height: f64) -> usize {
        let trigger = trigger_point(viewport_height, self.divisor);
        let mut newly = 0;
        for tracked in self.tracked.iter_mut().filter(|t| !t.revealed) {
            if tracked.element.top() < trigger {
                tracked.element.mark();
                tracked.revealed = true;
                newly += 1;
            }
        }
        if newly > 0 {
            log::debug!("reveal: {newly} element(s) revealed at trigger {trigger}");
        }
        newly
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.tracked.get(index).is_some_and(|t| t.revealed)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.tracked.iter().filter(|t| t.revealed).count()
    }

    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.tracked.iter().all(|t| t.revealed)
    }

    /// The tracked elements, in page order.
    pub fn elements(&self) -> impl Iterator<Item = &E> {
        self.tracked.iter().map(|t| &t.element)
    }
}
