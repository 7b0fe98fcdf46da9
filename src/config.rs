// TiltFlex — Device & System Configuration
// Target: Nintendo Joy-Con over Bluetooth HID

// ---------------------------------------------------------------------------
// HID Device Identification
// ---------------------------------------------------------------------------
pub const JOYCON_VENDOR_ID: u16 = 0x057E;
// Left (0x2006) and Right (0x2007) Joy-Con both work; exactly one is used.
pub const JOYCON_PRODUCT_IDS: [u16; 2] = [0x2006, 0x2007];

// ---------------------------------------------------------------------------
// Input Report Layout (standard full report, packet id 0x30/0x31)
// ---------------------------------------------------------------------------
pub const REPORT_LEN: usize = 49;
pub const PACKET_ID_FULL: u8 = 0x30;
pub const PACKET_ID_NFC_IR: u8 = 0x31;
pub const ACCEL_OFFSET: usize = 12; // first of three little-endian i16 axes
pub const BUTTON_OFFSET: usize = 3; // three button bytes packed into the mask
pub const ACCEL_SCALE_8G: f32 = 0.000244; // G per LSB at ±8 g

// ---------------------------------------------------------------------------
// Button Masks
//
// The packed 24-bit mask is matched by equality, so a chorded press matches
// nothing and is ignored. SL and SR are two physical triggers mapped to the
// same action (calibration reset); L and ZL both toggle the mode.
// ---------------------------------------------------------------------------
pub const BUTTON_RESET_MASKS: [u32; 2] = [0x10, 0x20]; // SR, SL
pub const BUTTON_TOGGLE_MASKS: [u32; 2] = [0x40, 0x80]; // L, ZL

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const SENSOR_POLL_INTERVAL_MS: u64 = 15; // matches the device report rate
pub const HID_READ_TIMEOUT_MS: i32 = 100;
pub const READ_BACKOFF_MS: u64 = 50; // pause after a transient read failure
pub const IMU_CMD_SETTLE_MS: u64 = 50; // pause after each init command
pub const ROUND_IDLE_MS: u64 = 1000; // pacing before a new instruction
pub const ROUND_COOLDOWN_MS: u64 = 2000; // time to read the feedback
pub const WAIT_TICK_MS: u64 = 100; // condvar backstop while a round is armed
pub const DEBUG_IDLE_MS: u64 = 100; // game task idle poll in debug mode
pub const UI_POLL_INTERVAL_MS: u64 = 33; // keyboard poll / redraw coalescing

// ---------------------------------------------------------------------------
// Gesture Classification
// ---------------------------------------------------------------------------
/// Dead-zone threshold in G. 0.7 is the coarse default; 1.0 is a finer
/// variant that requires a more deliberate tilt (`--threshold 1.0`).
pub const TILT_THRESHOLD: f32 = 0.7;
