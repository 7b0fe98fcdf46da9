// TiltFlex — Entry Point
//
// Startup sequence:
//   1. Open the Joy-Con over HID (fatal if none is connected).
//   2. Enable its IMU.
//   3. Spawn the sensor, game and UI tasks.
//   4. Join them all once shutdown is requested (q in the terminal).

use std::sync::atomic::AtomicBool;
use std::sync::{mpsc, Arc};

use anyhow::Context;
use clap::Parser;
use hidapi::HidApi;

use tiltflex::calibration::Calibration;
use tiltflex::config::TILT_THRESHOLD;
use tiltflex::drivers::joycon::JoyCon;
use tiltflex::events::Mode;
use tiltflex::state::SharedState;
use tiltflex::tasks;

#[derive(Parser, Debug)]
#[command(version, about = "Joy-Con tilt reflex trainer")]
struct Args {
    /// Dead-zone threshold in G (0.7 = coarse, 1.0 = deliberate tilts only)
    #[arg(long, default_value_t = TILT_THRESHOLD)]
    threshold: f32,

    /// Start in debug mode (live vector display, no instructions)
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::info!("TiltFlex starting…");

    // ---- Motion source ----------------------------------------------------
    // No device is a startup failure; no task runs without one.
    let api = HidApi::new().context("HID subsystem init failed")?;
    let joycon = JoyCon::open(&api)?;
    joycon.init().context("Joy-Con IMU init failed")?;

    // ---- Shared state -----------------------------------------------------
    let start_mode = if args.debug { Mode::Debug } else { Mode::Game };
    let state = Arc::new(SharedState::new(start_mode));
    let calibration = Arc::new(Calibration::new());
    let shutdown = Arc::new(AtomicBool::new(false));
    let (redraw_tx, redraw_rx) = mpsc::channel();

    // ---- Spawn tasks ------------------------------------------------------
    let mut handles = Vec::with_capacity(3);

    let sensor_state = Arc::clone(&state);
    let sensor_cal = Arc::clone(&calibration);
    let sensor_shutdown = Arc::clone(&shutdown);
    let sensor_redraw = redraw_tx.clone();
    let threshold = args.threshold;
    handles.push(
        std::thread::Builder::new()
            .name("sensor".into())
            .spawn(move || {
                tasks::sensor::sensor_task(
                    joycon,
                    sensor_state,
                    sensor_cal,
                    sensor_redraw,
                    sensor_shutdown,
                    threshold,
                );
            })?,
    );

    let game_state = Arc::clone(&state);
    let game_shutdown = Arc::clone(&shutdown);
    handles.push(
        std::thread::Builder::new()
            .name("game".into())
            .spawn(move || {
                tasks::game::game_task(game_state, redraw_tx, game_shutdown);
            })?,
    );

    let ui_state = Arc::clone(&state);
    let ui_shutdown = Arc::clone(&shutdown);
    handles.push(
        std::thread::Builder::new().name("ui".into()).spawn(move || {
            tasks::ui::ui_task(redraw_rx, ui_state, ui_shutdown);
        })?,
    );

    // ---- Wait for teardown ------------------------------------------------
    // All loops observe the shutdown flag; join order does not matter.
    for handle in handles {
        let _ = handle.join();
    }

    log::info!("TiltFlex stopped");
    Ok(())
}
