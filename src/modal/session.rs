//! State machine for one animated content modal.
//!
//! Deliberately free of browser types so the guard logic can be unit tested
//! without a DOM. Callers pass the current time explicitly; in the app that is
//! `js_sys::Date::now()`, in tests it is whatever the test says it is.

/// Minimum spacing between two accepted open/close requests.
pub const DEBOUNCE_WINDOW_MS: f64 = 300.0;

/// A touch counts as a tap only when it ends within this window.
pub const TAP_MAX_DURATION_MS: f64 = 500.0;

/// Where the modal is in its open/close cycle.
///
/// `Opening` and `Closing` are the animating states; both reject further
/// requests. `Closing` already reports "not open" so a close cannot re-enter,
/// matching the source behavior of dropping the open flag at close start.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug)]
struct TouchTrack {
    started_at: f64,
    moved: bool,
}

/// Per-modal interaction state. One of these lives for the whole page per
/// modal instance; it is never shared between modals.
#[derive(Debug)]
pub struct ModalSession {
    phase: Phase,
    last_interaction_at: f64,
    pending_touch: Option<TouchTrack>,
}

impl Default for ModalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Closed,
            // The first request must always clear the debounce window.
            last_interaction_at: f64::NEG_INFINITY,
            pending_touch: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True from an accepted open request until a close request is accepted.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Open)
    }

    /// True while an open or close transition is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Closing)
    }

    fn debounce_elapsed(&self, now_ms: f64) -> bool {
        now_ms - self.last_interaction_at >= DEBOUNCE_WINDOW_MS
    }

    /// Whether an open request at `now_ms` would be accepted, without
    /// mutating anything. Lets callers clear their own guards first so a
    /// request they end up denying never advances the debounce window.
    pub fn can_accept_open(&self, now_ms: f64) -> bool {
        self.phase == Phase::Closed && self.debounce_elapsed(now_ms)
    }

    /// Accepts an open request only from `Closed` and outside the debounce
    /// window. Returns whether the request was accepted; dropped requests
    /// leave the session untouched.
    pub fn request_open(&mut self, now_ms: f64) -> bool {
        if !self.can_accept_open(now_ms) {
            return false;
        }
        self.phase = Phase::Opening;
        self.last_interaction_at = now_ms;
        true
    }

    /// Accepts a close request only from `Open` and outside the debounce
    /// window.
    pub fn request_close(&mut self, now_ms: f64) -> bool {
        if self.phase != Phase::Open || !self.debounce_elapsed(now_ms) {
            return false;
        }
        self.phase = Phase::Closing;
        self.last_interaction_at = now_ms;
        true
    }

    pub fn finish_open(&mut self) {
        if self.phase == Phase::Opening {
            self.phase = Phase::Open;
        }
    }

    pub fn finish_close(&mut self) {
        if self.phase == Phase::Closing {
            self.phase = Phase::Closed;
        }
    }

    /// Returns the session to its resting state after a transition could not
    /// run (required elements missing). Never leaves `is_animating` stuck.
    pub fn abort(&mut self) {
        self.phase = Phase::Closed;
    }

    pub fn touch_started(&mut self, now_ms: f64) {
        self.pending_touch = Some(TouchTrack {
            started_at: now_ms,
            moved: false,
        });
    }

    pub fn touch_moved(&mut self) {
        if let Some(track) = self.pending_touch.as_mut() {
            track.moved = true;
        }
    }

    /// Ends the pending gesture and reports whether it was a tap: no movement
    /// and shorter than [`TAP_MAX_DURATION_MS`]. Scrolls and long presses
    /// report false.
    pub fn touch_ended(&mut self, now_ms: f64) -> bool {
        match self.pending_touch.take() {
            Some(track) => !track.moved && now_ms - track.started_at < TAP_MAX_DURATION_MS,
            None => false,
        }
    }
}
