// TiltFlex — Game Task
//
// Round state machine: Idle → Armed → Cooldown, gated by the mode. Issues a
// random directional instruction, waits (cancelably) for the sensor task to
// observe the matching tilt, then cools down so the player can read the
// reaction time. In debug mode the task idles without issuing anything.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::*;
use crate::events::{Direction, Mode, Redraw};
use crate::state::{SharedState, WaitOutcome};

/// Uniform pick from the four instructable directions (never NONE).
pub fn random_instruction<R: Rng>(rng: &mut R) -> Direction {
    match rng.gen_range(0..4) {
        0 => Direction::Up,
        1 => Direction::Down,
        2 => Direction::Left,
        _ => Direction::Right,
    }
}

pub fn game_task(state: Arc<SharedState>, redraw_tx: Sender<Redraw>, shutdown: Arc<AtomicBool>) {
    log::info!("Game task started");

    let mut rng = rand::thread_rng();

    loop {
        if shutdown.load(Ordering::Relaxed) {
            log::info!("Game task stopping");
            return;
        }

        if state.mode() != Mode::Game {
            thread::sleep(Duration::from_millis(DEBUG_IDLE_MS));
            continue;
        }

        // Idle: pacing before the next instruction.
        thread::sleep(Duration::from_millis(ROUND_IDLE_MS));
        if state.mode() != Mode::Game || shutdown.load(Ordering::Relaxed) {
            continue;
        }

        // Armed: publish the new round and wait for the sensor task.
        let instruction = random_instruction(&mut rng);
        state.begin_round(instruction, Instant::now());
        let _ = redraw_tx.send(Redraw);

        match state.wait_for_match(&shutdown) {
            WaitOutcome::Matched => {
                let _ = redraw_tx.send(Redraw);
                // Cooldown: leave the feedback on screen.
                thread::sleep(Duration::from_millis(ROUND_COOLDOWN_MS));
            }
            WaitOutcome::ModeChanged => {
                // Round was aborted under the state lock; nothing to finish.
                let _ = redraw_tx.send(Redraw);
            }
            WaitOutcome::Shutdown => {
                log::info!("Game task stopping");
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn instructions_are_never_none_and_cover_all_directions() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            match random_instruction(&mut rng) {
                Direction::None => panic!("NONE issued as an instruction"),
                Direction::Up => seen[0] = true,
                Direction::Down => seen[1] = true,
                Direction::Left => seen[2] = true,
                Direction::Right => seen[3] = true,
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
