// TiltFlex — Zero-Offset Calibration Store
//
// Holds the subtractive offset that makes the controller's resting pose read
// as (0, 0, 0). The offset is seeded from the first frame after startup and
// replaced wholesale whenever the reset trigger fires.

use std::sync::Mutex;

use crate::events::AccelSample;

#[derive(Debug, Default)]
pub struct Calibration {
    offset: Mutex<AccelSample>,
}

impl Calibration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the offset with `sample`. All three components change
    /// together; readers never observe a partial update.
    pub fn reset(&self, sample: AccelSample) {
        *self.offset.lock().unwrap() = sample;
    }

    /// Subtract the stored offset component-wise.
    pub fn apply(&self, sample: AccelSample) -> AccelSample {
        let offset = *self.offset.lock().unwrap();
        AccelSample {
            x: sample.x - offset.x,
            y: sample.y - offset.y,
            z: sample.z - offset.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fresh_store_passes_samples_through() {
        let cal = Calibration::new();
        let s = AccelSample { x: 1.5, y: -0.25, z: 0.98 };
        assert_eq!(cal.apply(s), s);
    }

    #[test]
    fn reset_with_current_sample_zeroes_it() {
        let cal = Calibration::new();
        let s = AccelSample { x: 0.31, y: -1.02, z: 1.0 };
        cal.reset(s);
        assert_eq!(cal.apply(s), AccelSample::default());
    }

    #[test]
    fn reset_replaces_the_whole_offset() {
        let cal = Calibration::new();
        cal.reset(AccelSample { x: 5.0, y: 5.0, z: 5.0 });
        cal.reset(AccelSample { x: 1.0, y: 0.0, z: 0.0 });
        let out = cal.apply(AccelSample { x: 1.0, y: 2.0, z: 3.0 });
        assert_eq!(out, AccelSample { x: 0.0, y: 2.0, z: 3.0 });
    }

    proptest! {
        #[test]
        fn apply_is_exact_componentwise_subtraction(
            ox in -8.0f32..8.0, oy in -8.0f32..8.0, oz in -8.0f32..8.0,
            x in -8.0f32..8.0, y in -8.0f32..8.0, z in -8.0f32..8.0,
        ) {
            let cal = Calibration::new();
            cal.reset(AccelSample { x: ox, y: oy, z: oz });
            let out = cal.apply(AccelSample { x, y, z });
            prop_assert_eq!(out.x, x - ox);
            prop_assert_eq!(out.y, y - oy);
            prop_assert_eq!(out.z, z - oz);
        }

        #[test]
        fn reset_then_apply_same_sample_is_zero(
            x in -8.0f32..8.0, y in -8.0f32..8.0, z in -8.0f32..8.0,
        ) {
            let cal = Calibration::new();
            let s = AccelSample { x, y, z };
            cal.reset(s);
            prop_assert_eq!(cal.apply(s), AccelSample::default());
        }
    }
}
