//! Sequencing for the modal open/close timelines.
//!
//! The controller owns a [`ModalSession`] and advances it through the four
//! phases by scheduling fixed-delay continuations on an injected
//! [`Scheduler`], applying visual changes through an injected
//! [`ModalSurface`]. Tests drive both seams with fakes; the app wires in the
//! browser-backed implementations from [`crate::modal::dom`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::modal::session::{ModalSession, Phase};

/// Duration of the open expand transition.
pub const OPEN_EXPAND_MS: u32 = 400;

/// Duration of the first close stage (blur, slight shrink, partial fade).
pub const CLOSE_BLUR_MS: u32 = 350;

/// Delay before the overshoot collapse kicks in.
pub const CLOSE_COLLAPSE_DELAY_MS: u32 = 270;

/// Duration of the overshoot collapse.
pub const CLOSE_COLLAPSE_MS: u32 = 300;

/// Duration of the slow backdrop dim fade started with the blur stage.
pub const BACKDROP_FADE_MS: u32 = 1_500;

/// When the close sequence settles: the backdrop fade has finished and the
/// overlay can be reset. This is the long tail during which reopening stays
/// blocked.
pub const CLOSE_SETTLE_MS: u32 = CLOSE_COLLAPSE_DELAY_MS + BACKDROP_FADE_MS;

/// The one error kind in this crate: a required DOM node was not found.
/// Always recovered locally; the affected operation becomes a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("required modal element is missing: {0}")]
pub struct MissingElement(pub &'static str);

/// Timer facility the controller sequences on. `next_frame` exists so the
/// collapsed baseline can be painted before the expand transition starts.
pub trait Scheduler {
    fn delay(&self, ms: u32, cb: Box<dyn FnOnce()>);
    fn next_frame(&self, cb: Box<dyn FnOnce()>);
}

/// Visual effects of one modal. Every operation may discover mid-flight that
/// its elements are gone; the controller recovers by resetting the session.
pub trait ModalSurface {
    /// Collapsed, transparent baseline; overlay visible; page scroll locked.
    fn prepare_open(&self) -> Result<(), MissingElement>;
    /// Transition from the baseline to full size and opacity.
    fn expand(&self) -> Result<(), MissingElement>;
    fn focus_close_control(&self) -> Result<(), MissingElement>;
    /// First close stage plus the start of the backdrop dim fade.
    fn begin_blur(&self) -> Result<(), MissingElement>;
    /// Overshoot shrink-to-nothing.
    fn collapse(&self) -> Result<(), MissingElement>;
    /// Overlay hidden, scroll restored, all inline styling reset so the next
    /// open starts clean.
    fn settle_closed(&self) -> Result<(), MissingElement>;
}

/// Which modal a controller drives.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ModalId {
    Education,
    Experience,
}

/// Process-wide guard: at most one modal may be open at a time, since they
/// all mutate the shared body scroll lock.
#[derive(Clone, Default)]
pub struct ActiveModal(Rc<RefCell<Option<ModalId>>>);

impl ActiveModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holder(&self) -> Option<ModalId> {
        *self.0.borrow()
    }

    fn try_acquire(&self, id: ModalId) -> bool {
        let mut slot = self.0.borrow_mut();
        match *slot {
            None => {
                *slot = Some(id);
                true
            }
            Some(holder) => holder == id,
        }
    }

    fn release(&self, id: ModalId) {
        let mut slot = self.0.borrow_mut();
        if *slot == Some(id) {
            *slot = None;
        }
    }
}

struct ControllerInner {
    id: ModalId,
    session: RefCell<ModalSession>,
    active: ActiveModal,
    surface: Rc<dyn ModalSurface>,
    scheduler: Rc<dyn Scheduler>,
}

/// Drives one modal through its lifecycle. Cheap to clone; clones share the
/// same session.
#[derive(Clone)]
pub struct ModalController {
    inner: Rc<ControllerInner>,
}

impl ModalController {
    pub fn new(
        id: ModalId,
        active: ActiveModal,
        surface: Rc<dyn ModalSurface>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                id,
                session: RefCell::new(ModalSession::new()),
                active,
                surface,
                scheduler,
            }),
        }
    }

    pub fn id(&self) -> ModalId {
        self.inner.id
    }

    pub fn phase(&self) -> Phase {
        self.inner.session.borrow().phase()
    }

    pub fn is_open(&self) -> bool {
        self.inner.session.borrow().is_open()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Requests the open sequence. Dropped without error while animating,
    /// inside the debounce window, while already open, or while another modal
    /// holds the page.
    pub fn open(&self, now_ms: f64) {
        {
            let mut session = self.inner.session.borrow_mut();
            // The guard is checked before the request is accepted so a denial
            // leaves the debounce window where it was.
            if !session.can_accept_open(now_ms) {
                return;
            }
            if !self.inner.active.try_acquire(self.inner.id) {
                return;
            }
            session.request_open(now_ms);
        }
        if self.inner.surface.prepare_open().is_err() {
            self.reset_after_failure();
            return;
        }
        // Two frames so the collapsed baseline is painted before the expand
        // transition is applied.
        let first = self.clone();
        self.inner.scheduler.next_frame(Box::new(move || {
            let second = first.clone();
            first.inner.scheduler.next_frame(Box::new(move || {
                if second.inner.surface.expand().is_err() {
                    second.reset_after_failure();
                    return;
                }
                let done = second.clone();
                second.inner.scheduler.delay(
                    OPEN_EXPAND_MS,
                    Box::new(move || {
                        done.inner.session.borrow_mut().finish_open();
                        let _ = done.inner.surface.focus_close_control();
                    }),
                );
            }));
        }));
    }

    /// Requests the close sequence. Same drop policy as [`Self::open`].
    pub fn close(&self, now_ms: f64) {
        if !self.inner.session.borrow_mut().request_close(now_ms) {
            return;
        }
        if self.inner.surface.begin_blur().is_err() {
            self.reset_after_failure();
            return;
        }
        let collapse = self.clone();
        self.inner.scheduler.delay(
            CLOSE_COLLAPSE_DELAY_MS,
            Box::new(move || {
                let _ = collapse.inner.surface.collapse();
            }),
        );
        let settle = self.clone();
        self.inner.scheduler.delay(
            CLOSE_SETTLE_MS,
            Box::new(move || {
                let _ = settle.inner.surface.settle_closed();
                settle.inner.session.borrow_mut().finish_close();
                settle.inner.active.release(settle.inner.id);
            }),
        );
    }

    /// Escape closes the modal when it is open at rest; otherwise a no-op.
    pub fn handle_escape(&self, now_ms: f64) {
        if self.inner.session.borrow().phase() == Phase::Open {
            self.close(now_ms);
        }
    }

    pub fn touch_started(&self, now_ms: f64) {
        self.inner.session.borrow_mut().touch_started(now_ms);
    }

    pub fn touch_moved(&self) {
        self.inner.session.borrow_mut().touch_moved();
    }

    /// Ends the pending gesture; true means the caller should treat it as an
    /// activation and follow up with `open` or `close`.
    pub fn tap_finished(&self, now_ms: f64) -> bool {
        self.inner.session.borrow_mut().touch_ended(now_ms)
    }

    fn reset_after_failure(&self) {
        // Best effort: revert whatever was applied before the lookup failed.
        let _ = self.inner.surface.settle_closed();
        self.inner.session.borrow_mut().abort();
        self.inner.active.release(self.inner.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeScheduler {
        timers: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
        frames: RefCell<Vec<Box<dyn FnOnce()>>>,
    }

    impl FakeScheduler {
        fn pending_timers(&self) -> usize {
            self.timers.borrow().len()
        }

        fn pending_frames(&self) -> usize {
            self.frames.borrow().len()
        }

        /// Runs queued frame callbacks, including ones they schedule.
        fn run_frames(&self) {
            loop {
                let batch: Vec<_> = self.frames.borrow_mut().drain(..).collect();
                if batch.is_empty() {
                    break;
                }
                for cb in batch {
                    cb();
                }
            }
        }

        /// Fires timers in scheduled order until none remain.
        fn fire_all_timers(&self) {
            loop {
                let next = {
                    let mut timers = self.timers.borrow_mut();
                    if timers.is_empty() {
                        break;
                    }
                    timers.remove(0)
                };
                next.1();
            }
        }

        fn run_to_completion(&self) {
            while self.pending_frames() > 0 || self.pending_timers() > 0 {
                self.run_frames();
                self.fire_all_timers();
            }
        }
    }

    impl Scheduler for FakeScheduler {
        fn delay(&self, ms: u32, cb: Box<dyn FnOnce()>) {
            self.timers.borrow_mut().push((ms, cb));
        }

        fn next_frame(&self, cb: Box<dyn FnOnce()>) {
            self.frames.borrow_mut().push(cb);
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: RefCell<Vec<&'static str>>,
        missing: Cell<bool>,
    }

    impl RecordingSurface {
        fn record(&self, name: &'static str) -> Result<(), MissingElement> {
            if self.missing.get() {
                return Err(MissingElement(name));
            }
            self.calls.borrow_mut().push(name);
            Ok(())
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl ModalSurface for RecordingSurface {
        fn prepare_open(&self) -> Result<(), MissingElement> {
            self.record("prepare_open")
        }
        fn expand(&self) -> Result<(), MissingElement> {
            self.record("expand")
        }
        fn focus_close_control(&self) -> Result<(), MissingElement> {
            self.record("focus_close_control")
        }
        fn begin_blur(&self) -> Result<(), MissingElement> {
            self.record("begin_blur")
        }
        fn collapse(&self) -> Result<(), MissingElement> {
            self.record("collapse")
        }
        fn settle_closed(&self) -> Result<(), MissingElement> {
            self.record("settle_closed")
        }
    }

    struct Rig {
        controller: ModalController,
        scheduler: Rc<FakeScheduler>,
        surface: Rc<RecordingSurface>,
        active: ActiveModal,
    }

    fn rig(id: ModalId) -> Rig {
        let active = ActiveModal::new();
        rig_sharing(id, &active)
    }

    fn rig_sharing(id: ModalId, active: &ActiveModal) -> Rig {
        let scheduler = Rc::new(FakeScheduler::default());
        let surface = Rc::new(RecordingSurface::default());
        let controller = ModalController::new(
            id,
            active.clone(),
            surface.clone(),
            scheduler.clone(),
        );
        Rig {
            controller,
            scheduler,
            surface,
            active: active.clone(),
        }
    }

    fn open_fully(rig: &Rig, now_ms: f64) {
        rig.controller.open(now_ms);
        rig.scheduler.run_to_completion();
        assert_eq!(rig.controller.phase(), Phase::Open);
    }

    #[test]
    fn open_walks_opening_then_open() {
        let rig = rig(ModalId::Education);
        rig.controller.open(0.0);
        assert_eq!(rig.controller.phase(), Phase::Opening);
        assert_eq!(rig.surface.calls(), vec!["prepare_open"]);

        rig.scheduler.run_frames();
        assert_eq!(rig.surface.calls(), vec!["prepare_open", "expand"]);
        assert_eq!(rig.controller.phase(), Phase::Opening);

        rig.scheduler.fire_all_timers();
        assert_eq!(rig.controller.phase(), Phase::Open);
        assert_eq!(
            rig.surface.calls(),
            vec!["prepare_open", "expand", "focus_close_control"]
        );
    }

    #[test]
    fn rapid_open_burst_is_honored_once() {
        let rig = rig(ModalId::Education);
        rig.controller.open(0.0);
        rig.controller.open(50.0);
        rig.controller.open(120.0);
        assert_eq!(rig.surface.calls(), vec!["prepare_open"]);
        // Only the first request scheduled work.
        assert_eq!(rig.scheduler.pending_frames(), 1);
        assert_eq!(rig.scheduler.pending_timers(), 0);
    }

    #[test]
    fn reentrant_open_during_opening_schedules_nothing() {
        let rig = rig(ModalId::Education);
        rig.controller.open(0.0);
        rig.scheduler.run_frames();
        let timers_before = rig.scheduler.pending_timers();
        rig.controller.open(1_000.0);
        assert_eq!(rig.controller.phase(), Phase::Opening);
        assert_eq!(rig.scheduler.pending_timers(), timers_before);
        assert_eq!(rig.scheduler.pending_frames(), 0);
    }

    #[test]
    fn close_outside_open_touches_nothing() {
        let rig = rig(ModalId::Education);

        rig.controller.close(0.0);
        assert!(rig.surface.calls().is_empty());
        assert_eq!(rig.scheduler.pending_timers(), 0);

        rig.controller.open(1_000.0);
        let calls_while_opening = rig.surface.calls();
        rig.controller.close(1_100.0);
        assert_eq!(rig.surface.calls(), calls_while_opening);
        assert_eq!(rig.controller.phase(), Phase::Opening);
    }

    #[test]
    fn close_runs_blur_collapse_settle_in_order() {
        let rig = rig(ModalId::Education);
        open_fully(&rig, 0.0);

        rig.controller.close(1_000.0);
        assert_eq!(rig.controller.phase(), Phase::Closing);
        assert!(!rig.controller.is_open());
        assert!(rig.surface.calls().contains(&"begin_blur"));

        rig.scheduler.fire_all_timers();
        assert_eq!(rig.controller.phase(), Phase::Closed);
        let calls = rig.surface.calls();
        let tail = &calls[calls.len() - 3..];
        assert_eq!(tail, ["begin_blur", "collapse", "settle_closed"]);
    }

    #[test]
    fn close_during_closing_is_dropped() {
        let rig = rig(ModalId::Education);
        open_fully(&rig, 0.0);
        rig.controller.close(1_000.0);
        let timers_before = rig.scheduler.pending_timers();
        rig.controller.close(2_000.0);
        assert_eq!(rig.scheduler.pending_timers(), timers_before);
    }

    #[test]
    fn full_cycle_resets_and_reopens_identically() {
        let rig = rig(ModalId::Education);
        open_fully(&rig, 0.0);
        rig.controller.close(1_000.0);
        rig.scheduler.run_to_completion();
        assert_eq!(rig.controller.phase(), Phase::Closed);
        assert_eq!(rig.active.holder(), None);

        let first_cycle = rig.surface.calls();
        open_fully(&rig, 5_000.0);
        let second_open = &rig.surface.calls()[first_cycle.len()..];
        assert_eq!(second_open, ["prepare_open", "expand", "focus_close_control"]);
    }

    #[test]
    fn escape_is_noop_when_closed_and_closes_when_open() {
        let rig = rig(ModalId::Education);
        rig.controller.handle_escape(0.0);
        assert!(rig.surface.calls().is_empty());
        assert_eq!(rig.controller.phase(), Phase::Closed);

        open_fully(&rig, 0.0);
        rig.controller.handle_escape(1_000.0);
        assert_eq!(rig.controller.phase(), Phase::Closing);
    }

    #[test]
    fn escape_during_opening_is_noop() {
        let rig = rig(ModalId::Education);
        rig.controller.open(0.0);
        rig.controller.handle_escape(1_000.0);
        assert_eq!(rig.controller.phase(), Phase::Opening);
    }

    #[test]
    fn tap_gesture_gates_activation() {
        let rig = rig(ModalId::Education);

        rig.controller.touch_started(0.0);
        rig.controller.touch_moved();
        assert!(!rig.controller.tap_finished(100.0));

        rig.controller.touch_started(200.0);
        assert!(!rig.controller.tap_finished(900.0));

        rig.controller.touch_started(1_000.0);
        assert!(rig.controller.tap_finished(1_100.0));
    }

    #[test]
    fn missing_elements_never_leave_a_stuck_session() {
        let rig = rig(ModalId::Education);
        rig.surface.missing.set(true);
        rig.controller.open(0.0);
        assert_eq!(rig.controller.phase(), Phase::Closed);
        assert_eq!(rig.active.holder(), None);

        // Elements show up later; the controller recovers on its own.
        rig.surface.missing.set(false);
        open_fully(&rig, 1_000.0);
    }

    #[test]
    fn failure_midway_through_open_resets() {
        let rig = rig(ModalId::Education);
        rig.controller.open(0.0);
        // Elements disappear between prepare and expand.
        rig.surface.missing.set(true);
        rig.scheduler.run_frames();
        assert_eq!(rig.controller.phase(), Phase::Closed);
        assert_eq!(rig.active.holder(), None);
    }

    #[test]
    fn guard_denied_open_does_not_advance_the_debounce_window() {
        let active = ActiveModal::new();
        let education = rig_sharing(ModalId::Education, &active);
        let experience = rig_sharing(ModalId::Experience, &active);

        open_fully(&education, 0.0);
        experience.controller.open(1_000.0); // denied by the active-modal guard
        assert_eq!(experience.controller.phase(), Phase::Closed);

        education.controller.close(1_050.0);
        education.scheduler.run_to_completion();
        assert_eq!(active.holder(), None);

        // Within 300 ms of the denied request; it must not have started a
        // debounce window of its own.
        experience.controller.open(1_200.0);
        assert_eq!(experience.controller.phase(), Phase::Opening);
    }

    #[test]
    fn second_modal_cannot_open_while_first_holds_the_page() {
        let active = ActiveModal::new();
        let education = rig_sharing(ModalId::Education, &active);
        let experience = rig_sharing(ModalId::Experience, &active);

        open_fully(&education, 0.0);
        experience.controller.open(1_000.0);
        assert_eq!(experience.controller.phase(), Phase::Closed);
        assert!(experience.surface.calls().is_empty());

        // The guard is held for the whole close tail as well.
        education.controller.close(2_000.0);
        experience.controller.open(2_100.0);
        assert_eq!(experience.controller.phase(), Phase::Closed);

        education.scheduler.run_to_completion();
        open_fully(&experience, 10_000.0);
    }
}
