#![allow(clippy::float_cmp)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

// =============================================================
// Fakes
// =============================================================

/// Counts registrations that are still alive.
#[derive(Default)]
struct FakeScheduler {
    live: Rc<Cell<usize>>,
    started: usize,
    last_period: Option<u32>,
}

struct FakeHandle {
    live: Rc<Cell<usize>>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl Scheduler for FakeScheduler {
    type Handle = FakeHandle;

    fn every(&mut self, period_ms: u32) -> FakeHandle {
        self.live.set(self.live.get() + 1);
        self.started += 1;
        self.last_period = Some(period_ms);
        FakeHandle { live: Rc::clone(&self.live) }
    }
}

/// Records every render.
#[derive(Default)]
struct FakeTrack {
    shown: Vec<(usize, f64)>,
}

impl SlideTrack for FakeTrack {
    fn show(&mut self, index: usize, offset_percent: f64) {
        self.shown.push((index, offset_percent));
    }
}

fn carousel(slides: usize) -> Carousel<FakeScheduler, FakeTrack> {
    let count = NonZeroUsize::new(slides).expect("non-empty");
    Carousel::new(FakeScheduler::default(), FakeTrack::default(), count, 5000)
}

fn live(c: &Carousel<FakeScheduler, FakeTrack>) -> usize {
    c.scheduler().live.get()
}

// =============================================================
// Index arithmetic
// =============================================================

#[test]
fn empty_track_is_rejected() {
    assert!(matches!(slide_count(0), Err(Error::NoSlides)));
}

#[test]
fn non_empty_track_is_accepted() {
    assert_eq!(slide_count(3).map(NonZeroUsize::get).expect("three slides"), 3);
    assert_eq!(slide_count(1).map(NonZeroUsize::get).expect("one slide"), 1);
}

#[test]
fn empty_container_is_skipped_and_others_mount() {
    let live = Rc::new(Cell::new(0));
    let mounted = mount_each([3, 0, 2], |slides| {
        let scheduler = FakeScheduler { live: Rc::clone(&live), ..FakeScheduler::default() };
        let mut c = Carousel::new(scheduler, FakeTrack::default(), slide_count(slides)?, 5000);
        c.play();
        Ok(c)
    });
    let counts: Vec<usize> = mounted.iter().map(Carousel::slide_count).collect();
    assert_eq!(counts, vec![3, 2]);
    assert_eq!(live.get(), 2);
}

#[test]
fn mount_each_with_no_containers_is_empty() {
    let mounted = mount_each(Vec::<usize>::new(), slide_count);
    assert!(mounted.is_empty());
}

#[test]
fn step_index_wraps_forward() {
    let three = NonZeroUsize::new(3).expect("non-zero");
    assert_eq!(step_index(0, three, Step::Forward), 1);
    assert_eq!(step_index(2, three, Step::Forward), 0);
}

#[test]
fn step_index_wraps_backward() {
    let three = NonZeroUsize::new(3).expect("non-zero");
    assert_eq!(step_index(0, three, Step::Backward), 2);
    assert_eq!(step_index(1, three, Step::Backward), 0);
}

#[test]
fn offset_is_minus_one_hundred_per_slide() {
    assert_eq!(offset_percent(0), 0.0);
    assert_eq!(offset_percent(1), -100.0);
    assert_eq!(offset_percent(4), -400.0);
}

#[test]
fn n_advances_land_on_n_mod_s() {
    for s in 1..=5 {
        let mut c = carousel(s);
        for n in 1..=(3 * s + 1) {
            c.advance();
            assert_eq!(c.index(), n % s, "s={s} n={n}");
        }
    }
}

#[test]
fn n_retreats_land_on_minus_n_mod_s() {
    for s in 1..=5 {
        let mut c = carousel(s);
        for n in 1..=(3 * s + 1) {
            c.retreat();
            let expected = (s - n % s) % s;
            assert_eq!(c.index(), expected, "s={s} n={n}");
        }
    }
}

#[test]
fn single_slide_always_stays_at_zero() {
    let mut c = carousel(1);
    c.play();
    assert_eq!(c.show_next(), 0);
    assert_eq!(c.show_previous(), 0);
    c.tick();
    assert_eq!(c.index(), 0);
    assert!(c.is_playing());
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_renders_first_slide_without_timer() {
    let c = carousel(3);
    assert_eq!(c.index(), 0);
    assert_eq!(c.slide_count(), 3);
    assert!(!c.is_playing());
    assert_eq!(live(&c), 0);
    assert_eq!(c.track().shown, vec![(0, 0.0)]);
}

#[test]
fn play_registers_timer_at_configured_interval() {
    let mut c = carousel(3);
    c.play();
    assert!(c.is_playing());
    assert_eq!(live(&c), 1);
    assert_eq!(c.scheduler().last_period, Some(5000));
}

// =============================================================
// Timer lifecycle
// =============================================================

#[test]
fn repeated_play_keeps_one_live_timer() {
    let mut c = carousel(3);
    c.play();
    c.play();
    c.play();
    assert_eq!(live(&c), 1);
    assert_eq!(c.scheduler().started, 3);
}

#[test]
fn rapid_manual_clicks_never_leak_timers() {
    let mut c = carousel(4);
    c.play();
    for i in 0..50 {
        if i % 3 == 0 {
            c.show_previous();
        } else {
            c.show_next();
        }
        assert_eq!(live(&c), 1);
    }
}

#[test]
fn manual_navigation_restarts_cadence() {
    let mut c = carousel(3);
    c.play();
    c.show_next();
    assert_eq!(c.scheduler().started, 2);
    assert!(c.is_playing());
}

#[test]
fn manual_navigation_starts_timer_when_stopped() {
    let mut c = carousel(3);
    c.show_next();
    assert!(c.is_playing());
    assert_eq!(live(&c), 1);
}

#[test]
fn stop_cancels_and_is_idempotent() {
    let mut c = carousel(3);
    c.play();
    c.stop();
    assert!(!c.is_playing());
    assert_eq!(live(&c), 0);
    c.stop();
    assert_eq!(live(&c), 0);
}

#[test]
fn tick_advances_without_touching_timer() {
    let mut c = carousel(3);
    c.play();
    c.tick();
    assert_eq!(c.index(), 1);
    assert_eq!(c.scheduler().started, 1);
    assert_eq!(live(&c), 1);
}

#[test]
fn dropping_carousel_cancels_timer() {
    let live_count = {
        let mut c = carousel(2);
        c.play();
        Rc::clone(&c.scheduler().live)
    };
    assert_eq!(live_count.get(), 0);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn three_nexts_visit_one_two_zero() {
    let mut c = carousel(3);
    c.play();
    let visited: Vec<usize> = (0..3).map(|_| c.show_next()).collect();
    assert_eq!(visited, vec![1, 2, 0]);
    assert_eq!(c.track().shown.last(), Some(&(0, 0.0)));
}

#[test]
fn previous_from_zero_shows_last_slide() {
    let mut c = carousel(3);
    c.play();
    assert_eq!(c.show_previous(), 2);
    assert_eq!(c.track().shown.last(), Some(&(2, -200.0)));
}

#[test]
fn every_transition_is_rendered() {
    let mut c = carousel(3);
    c.play();
    c.tick();
    c.show_next();
    c.show_previous();
    let indices: Vec<usize> = c.track().shown.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2, 1]);
}

#[test]
fn pure_transitions_do_not_render() {
    let mut c = carousel(3);
    c.advance();
    c.retreat();
    assert_eq!(c.track().shown.len(), 1);
}
