// TiltFlex — Core Events & Data Types

use core::fmt;

// ---------------------------------------------------------------------------
// Accelerometer Sample (3-axis, in G)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

// ---------------------------------------------------------------------------
// Input Frame — one HID report's worth of data from the controller
// ---------------------------------------------------------------------------

/// Opaque button bit pattern; only ever compared against the configured
/// reset/toggle values in `config.rs`.
pub type ButtonMask = u32;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub accel: AccelSample,
    pub buttons: ButtonMask,
}

// ---------------------------------------------------------------------------
// Detected Tilt Direction
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "—",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Operating Mode
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Game,
    Debug,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Game => Self::Debug,
            Self::Debug => Self::Game,
        }
    }
}

// ---------------------------------------------------------------------------
// Redraw Signal — fire-and-forget nudge to the UI task
// ---------------------------------------------------------------------------

/// The UI pulls a fresh state snapshot on every signal; the signal itself
/// carries no data.
#[derive(Debug, Clone, Copy)]
pub struct Redraw;
