// TiltFlex — Sensor Task
//
// Polls the Joy-Con at the device report rate (~15 ms), applies the
// zero-offset calibration, classifies the tilt direction and publishes the
// result. This is also the only place that completes an armed game round
// and the only writer of button-triggered events (calibration reset, mode
// toggle).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::calibration::Calibration;
use crate::classifier::classify;
use crate::config::*;
use crate::drivers::joycon::JoyCon;
use crate::events::Redraw;
use crate::input::ButtonWatcher;
use crate::state::SharedState;

pub fn sensor_task(
    joycon: JoyCon,
    state: Arc<SharedState>,
    calibration: Arc<Calibration>,
    redraw_tx: Sender<Redraw>,
    shutdown: Arc<AtomicBool>,
    threshold: f32,
) {
    log::info!("Sensor task started (threshold {} G)", threshold);

    let interval = Duration::from_millis(SENSOR_POLL_INTERVAL_MS);
    let mut buttons = ButtonWatcher::new(BUTTON_RESET_MASKS, BUTTON_TOGGLE_MASKS);
    let mut calibrated = false;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            log::info!("Sensor task stopping");
            return;
        }

        let tick_start = Instant::now();

        let frame = match joycon.read_frame() {
            Ok(frame) => frame,
            Err(e) => {
                // Transient: skip this cycle, back off briefly, keep polling.
                log::warn!("Joy-Con read error: {}", e);
                thread::sleep(Duration::from_millis(READ_BACKOFF_MS));
                continue;
            }
        };

        // The first good frame defines the rest pose.
        if !calibrated {
            calibration.reset(frame.accel);
            calibrated = true;
            log::info!("Calibrated against the startup pose");
        }

        let events = buttons.update(frame.buttons);
        if events.reset {
            calibration.reset(frame.accel);
        }
        if events.toggle {
            let mode = state.toggle_mode();
            log::info!("Mode switched to {:?}", mode);
        }

        let sample = calibration.apply(frame.accel);
        let direction = classify(sample.x, sample.y, threshold);
        state.publish_sample(sample, direction);

        if let Some(elapsed) = state.try_complete_round(direction, Instant::now()) {
            log::info!("Hit: {} in {} ms", direction, elapsed.as_millis());
        }

        // Fire-and-forget; a closed channel means the UI is gone.
        if redraw_tx.send(Redraw).is_err() {
            log::warn!("Redraw channel closed — exiting sensor task");
            return;
        }

        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
