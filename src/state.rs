// TiltFlex — Shared State
//
// Single synchronization point between the sensor task, the game task, and
// the UI task. All access goes through the methods below; the round flags in
// particular have exactly one writer per transition direction:
//
//   - the game task arms a round (`begin_round`) and aborts it on a mode
//     change (inside `wait_for_match`),
//   - the sensor task completes it (`try_complete_round`).
//
// `waiting` and `correct` therefore can never be observed true together:
// every transition that sets one clears the other under the same lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::config::WAIT_TICK_MS;
use crate::events::{AccelSample, Direction, Mode};

// ---------------------------------------------------------------------------
// Round State
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    pub instruction: Direction,
    pub issued_at: Option<Instant>,
    pub waiting: bool,
    pub correct: bool,
    pub feedback: String,
}

// ---------------------------------------------------------------------------
// Shared State
// ---------------------------------------------------------------------------
#[derive(Debug)]
struct Inner {
    sample: AccelSample,
    direction: Direction,
    mode: Mode,
    round: RoundState,
}

/// Read-only view handed to the UI task. Taken under the state lock, so a
/// snapshot pulled after a redraw signal always reflects the write that
/// triggered the signal.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub sample: AccelSample,
    pub direction: Direction,
    pub mode: Mode,
    pub round: RoundState,
}

/// Why an armed wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Matched,
    ModeChanged,
    Shutdown,
}

#[derive(Debug)]
pub struct SharedState {
    inner: Mutex<Inner>,
    round_cv: Condvar,
}

impl SharedState {
    pub fn new(mode: Mode) -> Self {
        Self {
            inner: Mutex::new(Inner {
                sample: AccelSample::default(),
                direction: Direction::None,
                mode,
                round: RoundState::default(),
            }),
            round_cv: Condvar::new(),
        }
    }

    // ---- sensor task writers ----------------------------------------------

    /// Publish the latest calibrated sample and its classification.
    pub fn publish_sample(&self, sample: AccelSample, direction: Direction) {
        let mut inner = self.inner.lock().unwrap();
        inner.sample = sample;
        inner.direction = direction;
    }

    /// Flip GAME ⇄ DEBUG and wake the game task so a mid-round switch is
    /// observed immediately rather than at the wait backstop.
    pub fn toggle_mode(&self) -> Mode {
        let mut inner = self.inner.lock().unwrap();
        inner.mode = inner.mode.toggled();
        self.round_cv.notify_all();
        inner.mode
    }

    /// Complete the armed round if `direction` matches the instruction.
    /// The feedback write, `correct = true` and `waiting = false` happen as
    /// one transition under the lock.
    pub fn try_complete_round(&self, direction: Direction, now: Instant) -> Option<Duration> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.round.waiting || direction != inner.round.instruction {
            return None;
        }
        let issued = inner.round.issued_at?;
        let elapsed = now.saturating_duration_since(issued);
        inner.round.feedback = format!("{}! {} ms", direction, elapsed.as_millis());
        inner.round.correct = true;
        inner.round.waiting = false;
        self.round_cv.notify_all();
        Some(elapsed)
    }

    // ---- game task writers ------------------------------------------------

    /// Publish a new round: instruction, issue timestamp and flags change
    /// together, and the previous feedback is cleared.
    pub fn begin_round(&self, instruction: Direction, now: Instant) {
        debug_assert!(instruction != Direction::None, "NONE is not an instructable target");
        let mut inner = self.inner.lock().unwrap();
        inner.round.instruction = instruction;
        inner.round.issued_at = Some(now);
        inner.round.waiting = true;
        inner.round.correct = false;
        inner.round.feedback.clear();
    }

    /// Block until the armed round completes, the mode leaves GAME, or
    /// shutdown is requested. Leaving GAME aborts the round under the same
    /// lock (the instruction is dropped, `correct` stays false), so a fresh
    /// cycle starts when the mode returns.
    pub fn wait_for_match(&self, shutdown: &AtomicBool) -> WaitOutcome {
        let mut inner = self.inner.lock().unwrap();
        loop {
            if inner.round.correct {
                return WaitOutcome::Matched;
            }
            if inner.mode != Mode::Game || shutdown.load(Ordering::Relaxed) {
                inner.round.waiting = false;
                inner.round.instruction = Direction::None;
                inner.round.issued_at = None;
                return if inner.mode != Mode::Game {
                    WaitOutcome::ModeChanged
                } else {
                    WaitOutcome::Shutdown
                };
            }
            // The timeout only bounds how long a shutdown request can go
            // unnoticed; matches and mode toggles notify the condvar.
            let (guard, _) = self
                .round_cv
                .wait_timeout(inner, Duration::from_millis(WAIT_TICK_MS))
                .unwrap();
            inner = guard;
        }
    }

    // ---- readers ----------------------------------------------------------

    pub fn mode(&self) -> Mode {
        self.inner.lock().unwrap().mode
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock().unwrap();
        Snapshot {
            sample: inner.sample,
            direction: inner.direction,
            mode: inner.mode,
            round: inner.round.clone(),
        }
    }
}
