// TiltFlex — Tilt Direction Classifier
//
// Pure threshold classification of a calibrated (x, y) acceleration pair.
// The z axis plays no part in direction detection.

use crate::events::Direction;

/// Map a calibrated tilt vector to a discrete direction.
///
/// A dead zone of `threshold` G around the rest pose absorbs sensor noise.
/// Outside it the dominant axis wins; on an exact `|x| == |y|` tie the
/// y axis wins. That tie-break is a rule, not an accident — callers and
/// tests rely on it.
///
/// Sign convention (device axes, Joy-Con held flat): positive x tilts LEFT,
/// positive y tilts UP.
pub fn classify(x: f32, y: f32, threshold: f32) -> Direction {
    if x.abs() < threshold && y.abs() < threshold {
        return Direction::None;
    }
    if x.abs() > y.abs() {
        if x > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if y > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const T: f32 = 0.7;

    #[test]
    fn rest_pose_is_none() {
        assert_eq!(classify(0.0, 0.0, T), Direction::None);
        assert_eq!(classify(0.69, -0.69, T), Direction::None);
        assert_eq!(classify(-0.1, 0.3, T), Direction::None);
    }

    #[test]
    fn strong_x_tilt_maps_to_left_right() {
        // Scenario: raw (2.0, 0.1, _) at threshold 0.7 reads LEFT.
        assert_eq!(classify(2.0, 0.1, T), Direction::Left);
        assert_eq!(classify(-2.0, 0.1, T), Direction::Right);
    }

    #[test]
    fn strong_y_tilt_maps_to_up_down() {
        // Scenario: raw (0.1, -2.0, _) at threshold 0.7 reads DOWN.
        assert_eq!(classify(0.1, -2.0, T), Direction::Down);
        assert_eq!(classify(0.1, 2.0, T), Direction::Up);
    }

    #[test]
    fn exact_tie_favors_y_axis() {
        assert_eq!(classify(1.0, 1.0, T), Direction::Up);
        assert_eq!(classify(1.0, -1.0, T), Direction::Down);
        assert_eq!(classify(-1.5, 1.5, T), Direction::Up);
    }

    #[test]
    fn one_axis_in_dead_zone_does_not_block_the_other() {
        // |y| below threshold but |x| above: the tilt still registers.
        assert_eq!(classify(0.8, 0.2, T), Direction::Left);
        assert_eq!(classify(0.2, -0.8, T), Direction::Down);
    }

    #[test]
    fn finer_threshold_widens_the_dead_zone() {
        assert_eq!(classify(0.8, 0.0, 1.0), Direction::None);
        assert_eq!(classify(1.2, 0.0, 1.0), Direction::Left);
    }

    proptest! {
        #[test]
        fn dead_zone_always_none(x in -0.699f32..0.699, y in -0.699f32..0.699) {
            prop_assert_eq!(classify(x, y, T), Direction::None);
        }

        #[test]
        fn x_dominant_is_horizontal(mag in 0.7f32..8.0, frac in -0.999f32..0.999, flip in any::<bool>()) {
            let x = if flip { -mag } else { mag };
            let y = mag * frac; // |y| < |x|
            let expected = if x > 0.0 { Direction::Left } else { Direction::Right };
            prop_assert_eq!(classify(x, y, T), expected);
        }

        #[test]
        fn y_dominant_or_tied_is_vertical(mag in 0.7f32..8.0, frac in -1.0f32..1.0, flip in any::<bool>()) {
            let y = if flip { -mag } else { mag };
            let x = mag * frac; // |x| <= |y|, tie included
            let expected = if y > 0.0 { Direction::Up } else { Direction::Down };
            prop_assert_eq!(classify(x, y, T), expected);
        }
    }
}
