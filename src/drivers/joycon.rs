// TiltFlex — Joy-Con HID Driver
//
// Minimal hidapi driver for a single Joy-Con. Enables the IMU with the
// simplified subcommand writes the controller accepts over Bluetooth HID,
// then parses the 49-byte standard full report (~15 ms cadence).

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use hidapi::{HidApi, HidDevice};

use crate::config::*;
use crate::events::{AccelSample, ButtonMask, InputFrame};

// Sent twice — the controller occasionally drops the first write right
// after pairing.
const CMD_ENABLE_IMU: [u8; 2] = [0x40, 0x01];
// Accel ±8 g, gyro ±2000 dps.
const CMD_IMU_SENSITIVITY: [u8; 5] = [0x41, 0x03, 0x00, 0x01, 0x02];

pub struct JoyCon {
    device: HidDevice,
}

impl JoyCon {
    /// Open the first Joy-Con found. Failure here is fatal to the caller:
    /// without a motion source no task is started.
    pub fn open(api: &HidApi) -> anyhow::Result<Self> {
        for pid in JOYCON_PRODUCT_IDS {
            if let Ok(device) = api.open(JOYCON_VENDOR_ID, pid) {
                log::info!("Joy-Con opened (pid 0x{:04x})", pid);
                return Ok(Self { device });
            }
        }
        bail!(
            "no Joy-Con found (vendor 0x{:04x}) — pair one over Bluetooth first",
            JOYCON_VENDOR_ID
        );
    }

    fn send_command(&self, data: &[u8]) -> anyhow::Result<()> {
        self.device.write(data).context("HID write failed")?;
        thread::sleep(Duration::from_millis(IMU_CMD_SETTLE_MS));
        Ok(())
    }

    /// Enable the IMU and select the ±8 g accelerometer range.
    pub fn init(&self) -> anyhow::Result<()> {
        self.send_command(&CMD_ENABLE_IMU)?;
        self.send_command(&CMD_ENABLE_IMU)?;
        self.send_command(&CMD_IMU_SENSITIVITY)?;
        log::info!("Joy-Con IMU enabled (±8 g)");
        Ok(())
    }

    /// Read one input report. Timeouts, short reads and non-IMU packets all
    /// surface as errors; the sensor task treats them as transient, skips
    /// the cycle and retries.
    pub fn read_frame(&self) -> anyhow::Result<InputFrame> {
        let mut buf = [0u8; REPORT_LEN];
        let n = self
            .device
            .read_timeout(&mut buf, HID_READ_TIMEOUT_MS)
            .context("HID read failed")?;
        parse_report(&buf[..n])
    }
}

/// Decode a standard full report into an input frame: three little-endian
/// i16 accelerometer axes scaled to G, and the button bytes packed into the
/// opaque mask.
fn parse_report(report: &[u8]) -> anyhow::Result<InputFrame> {
    if report.len() < REPORT_LEN {
        bail!("short report ({} bytes)", report.len());
    }
    if report[0] != PACKET_ID_FULL && report[0] != PACKET_ID_NFC_IR {
        bail!("unexpected packet id 0x{:02x}", report[0]);
    }

    let axis =
        |offset: usize| i16::from_le_bytes([report[offset], report[offset + 1]]) as f32 * ACCEL_SCALE_8G;

    let buttons: ButtonMask = ((report[BUTTON_OFFSET] as u32) << 16)
        | ((report[BUTTON_OFFSET + 1] as u32) << 8)
        | report[BUTTON_OFFSET + 2] as u32;

    Ok(InputFrame {
        accel: AccelSample {
            x: axis(ACCEL_OFFSET),
            y: axis(ACCEL_OFFSET + 2),
            z: axis(ACCEL_OFFSET + 4),
        },
        buttons,
    })
}
