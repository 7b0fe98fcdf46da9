// Concurrency stress tests for the round flags.
//
// The game side arms rounds while the sensor side completes them; at no
// observable point may `waiting` and `correct` both be true.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tiltflex::events::{Direction, Mode};
use tiltflex::state::{SharedState, WaitOutcome};

#[test]
fn waiting_and_correct_are_never_both_true() {
    let state = Arc::new(SharedState::new(Mode::Game));
    let stop = Arc::new(AtomicBool::new(false));

    // Game side: arm a round, spin until the sensor side completes it.
    let game = {
        let state = Arc::clone(&state);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            for _ in 0..500 {
                state.begin_round(Direction::Left, Instant::now());
                while !state.snapshot().round.correct {
                    thread::yield_now();
                }
            }
            stop.store(true, Ordering::Relaxed);
        })
    };

    // Sensor side: alternate matching and non-matching classifications.
    let sensor = {
        let state = Arc::clone(&state);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut flip = false;
            while !stop.load(Ordering::Relaxed) {
                let dir = if flip { Direction::Left } else { Direction::Down };
                flip = !flip;
                state.try_complete_round(dir, Instant::now());
            }
        })
    };

    // Reader: every snapshot must satisfy the invariant.
    while !stop.load(Ordering::Relaxed) {
        let round = state.snapshot().round;
        assert!(
            !(round.waiting && round.correct),
            "observed waiting and correct simultaneously"
        );
    }

    game.join().unwrap();
    sensor.join().unwrap();
}

#[test]
fn mode_toggle_mid_wait_aborts_without_completing() {
    let state = Arc::new(SharedState::new(Mode::Game));
    let shutdown = Arc::new(AtomicBool::new(false));

    for _ in 0..50 {
        state.begin_round(Direction::Up, Instant::now());

        let waiter = {
            let state = Arc::clone(&state);
            let shutdown = Arc::clone(&shutdown);
            thread::spawn(move || state.wait_for_match(&shutdown))
        };

        thread::sleep(Duration::from_millis(1));
        state.toggle_mode(); // → Debug, must wake and abort the waiter
        assert_eq!(waiter.join().unwrap(), WaitOutcome::ModeChanged);

        let round = state.snapshot().round;
        assert!(!round.waiting);
        assert!(!round.correct);

        state.toggle_mode(); // back to Game for the next iteration
    }
}
