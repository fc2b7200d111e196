#![allow(clippy::float_cmp)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Element whose position is driven by a shared scroll offset.
struct FakeElement {
    page_y: f64,
    scroll: Rc<Cell<f64>>,
    marks: usize,
}

impl RevealTarget for FakeElement {
    fn top(&self) -> f64 {
        self.page_y - self.scroll.get()
    }

    fn mark(&mut self) {
        self.marks += 1;
    }
}

fn page(positions: &[f64]) -> (RevealAnimator<FakeElement>, Rc<Cell<f64>>) {
    let scroll = Rc::new(Cell::new(0.0));
    let elements = positions
        .iter()
        .map(|&page_y| FakeElement { page_y, scroll: Rc::clone(&scroll), marks: 0 })
        .collect::<Vec<_>>();
    (RevealAnimator::new(elements, 8.0), scroll)
}

#[test]
fn trigger_is_seven_eighths_of_viewport() {
    assert_eq!(trigger_point(800.0, 8.0), 700.0);
    assert_eq!(trigger_point(0.0, 8.0), 0.0);
}

#[test]
fn load_scan_reveals_elements_above_trigger() {
    let (mut reveal, _) = page(&[100.0, 650.0, 900.0]);
    assert_eq!(reveal.scan(800.0), 2);
    assert!(reveal.is_revealed(0));
    assert!(reveal.is_revealed(1));
    assert!(!reveal.is_revealed(2));
}

#[test]
fn element_exactly_on_trigger_stays_hidden() {
    let (mut reveal, _) = page(&[700.0]);
    assert_eq!(reveal.scan(800.0), 0);
    assert!(!reveal.is_revealed(0));
}

#[test]
fn scrolling_down_reveals_more() {
    let (mut reveal, scroll) = page(&[100.0, 1200.0, 2400.0]);
    reveal.scan(800.0);
    assert_eq!(reveal.revealed_count(), 1);
    scroll.set(600.0);
    assert_eq!(reveal.scan(800.0), 1);
    scroll.set(1800.0);
    assert_eq!(reveal.scan(800.0), 1);
    assert!(reveal.all_revealed());
}

#[test]
fn reveal_is_monotonic_when_scrolling_back() {
    let (mut reveal, scroll) = page(&[300.0, 1500.0]);
    scroll.set(1000.0);
    reveal.scan(800.0);
    assert!(reveal.all_revealed());
    for y in [800.0, 0.0, 400.0, 0.0] {
        scroll.set(y);
        assert_eq!(reveal.scan(800.0), 0);
        assert!(reveal.all_revealed());
    }
}

#[test]
fn revealed_elements_are_marked_once() {
    let (mut reveal, _) = page(&[10.0, 20.0]);
    for _ in 0..5 {
        reveal.scan(800.0);
    }
    assert!(reveal.elements().all(|e| e.marks == 1));
}

#[test]
fn empty_set_scans_cleanly() {
    let (mut reveal, _) = page(&[]);
    assert!(reveal.is_empty());
    assert_eq!(reveal.scan(800.0), 0);
    assert!(reveal.all_revealed());
}

#[test]
fn custom_divisor_moves_trigger() {
    let scroll = Rc::new(Cell::new(0.0));
    let el = FakeElement { page_y: 500.0, scroll, marks: 0 };
    let mut reveal = RevealAnimator::new(vec![el], 2.0);
    assert_eq!(reveal.scan(800.0), 0);
    assert_eq!(reveal.scan(1200.0), 1);
    assert_eq!(reveal.len(), 1);
}

#[test]
fn out_of_range_index_is_not_revealed() {
    let (reveal, _) = page(&[10.0]);
    assert!(!reveal.is_revealed(5));
}
