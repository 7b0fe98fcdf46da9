// TiltFlex — UI Task
//
// Owns the terminal display and the keyboard. Waits on the redraw channel,
// coalesces bursts of signals into one repaint, and pulls a fresh snapshot
// of the shared state for every frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use crate::config::UI_POLL_INTERVAL_MS;
use crate::drivers::display::TermDisplay;
use crate::events::Redraw;
use crate::state::SharedState;

pub fn ui_task(redraw_rx: Receiver<Redraw>, state: Arc<SharedState>, shutdown: Arc<AtomicBool>) {
    log::info!("UI task started");

    let mut display = match TermDisplay::new() {
        Ok(d) => d,
        Err(e) => {
            log::error!("Terminal init failed: {}", e);
            shutdown.store(true, Ordering::Relaxed);
            return;
        }
    };

    let poll_interval = Duration::from_millis(UI_POLL_INTERVAL_MS);

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match display.quit_requested() {
            Ok(true) => {
                log::info!("Quit requested");
                shutdown.store(true, Ordering::Relaxed);
                break;
            }
            Ok(false) => {}
            Err(e) => log::warn!("Keyboard poll failed: {}", e),
        }

        match redraw_rx.recv_timeout(poll_interval) {
            Ok(Redraw) => {
                // Coalesce queued signals into a single repaint.
                while redraw_rx.try_recv().is_ok() {}
                if let Err(e) = display.render(&state.snapshot()) {
                    log::warn!("Render failed: {}", e);
                }
            }
            Err(RecvTimeoutError::Timeout) => {} // keep polling the keyboard
            Err(RecvTimeoutError::Disconnected) => {
                log::warn!("Redraw channel closed — exiting UI task");
                break;
            }
        }
    }

    // TermDisplay::drop restores the terminal.
    log::info!("UI task stopping");
}
