use serde::{Deserialize, Serialize};

use crate::constants::STICK_DEAD_ZONE;
use crate::stick::StickInput;

/// Inclusive rectangle of raw stick values to try on every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRange {
    pub x_min: i8,
    pub x_max: i8,
    pub z_min: i8,
    pub z_max: i8,
}

impl InputRange {
    pub const FULL: InputRange = InputRange {
        x_min: i8::MIN,
        x_max: i8::MAX,
        z_min: i8::MIN,
        z_max: i8::MAX,
    };

    pub const fn new(x_min: i8, x_max: i8, z_min: i8, z_max: i8) -> Self {
        Self {
            x_min,
            x_max,
            z_min,
            z_max,
        }
    }

    /// `center ± radius` on each axis, saturating at the stick limits.
    pub fn around(center: StickInput, x_radius: u8, z_radius: u8) -> Self {
        let (x_min, x_max) = saturating_span(center.x, x_radius);
        let (z_min, z_max) = saturating_span(center.z, z_radius);
        Self {
            x_min,
            x_max,
            z_min,
            z_max,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.x_min <= self.x_max && self.z_min <= self.z_max
    }

    pub fn center(&self) -> StickInput {
        let mid = |lo: i8, hi: i8| ((lo as i16 + hi as i16) / 2) as i8;
        StickInput::new(mid(self.x_min, self.x_max), mid(self.z_min, self.z_max))
    }
}

fn saturating_span(center: i8, radius: u8) -> (i8, i8) {
    let lo = (center as i16 - radius as i16).max(i8::MIN as i16);
    let hi = (center as i16 + radius as i16).min(i8::MAX as i16);
    (lo as i8, hi as i8)
}

/// Raw values the engine reads as zero. Neutral (0) itself stays admissible;
/// only the redundant non-zero values below `limit` are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadZone {
    pub limit: u8,
}

impl DeadZone {
    pub const STANDARD: DeadZone = DeadZone {
        limit: STICK_DEAD_ZONE as u8,
    };

    #[inline]
    pub fn contains(&self, value: i8) -> bool {
        value != 0 && value.unsigned_abs() < self.limit
    }
}

impl Default for DeadZone {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Every admissible input in `range`, row-major by x then z.
pub fn input_space(range: InputRange, dead_zone: DeadZone) -> Vec<StickInput> {
    if !range.is_ordered() {
        return Vec::new();
    }

    let mut inputs = Vec::new();
    for x in range.x_min..=range.x_max {
        if dead_zone.contains(x) {
            continue;
        }
        for z in range.z_min..=range.z_max {
            if dead_zone.contains(z) {
                continue;
            }
            inputs.push(StickInput::new(x, z));
        }
    }
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_order() {
        let inputs = input_space(InputRange::new(10, 11, -12, -11), DeadZone::STANDARD);
        assert_eq!(
            inputs,
            vec![
                StickInput::new(10, -12),
                StickInput::new(10, -11),
                StickInput::new(11, -12),
                StickInput::new(11, -11),
            ]
        );
    }

    #[test]
    fn dead_zone_is_skipped_per_axis_but_neutral_kept() {
        let inputs = input_space(InputRange::new(-9, 9, 0, 0), DeadZone::STANDARD);
        let xs: Vec<i8> = inputs.iter().map(|input| input.x).collect();
        assert_eq!(xs, vec![-9, -8, 0, 8, 9]);
        assert!(inputs.iter().all(|input| input.z == 0));
    }

    #[test]
    fn full_range_size() {
        // 256 values per axis minus 14 dead-zone values.
        let inputs = input_space(InputRange::FULL, DeadZone::STANDARD);
        assert_eq!(inputs.len(), 242 * 242);
        assert_eq!(inputs.first(), Some(&StickInput::new(-128, -128)));
        assert_eq!(inputs.last(), Some(&StickInput::new(127, 127)));
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(input_space(InputRange::new(5, 4, 0, 0), DeadZone::STANDARD).is_empty());
    }

    #[test]
    fn around_saturates_at_stick_limits() {
        let range = InputRange::around(StickInput::new(-56, 120), 10, 10);
        assert_eq!(range, InputRange::new(-66, -46, 110, 127));
        assert_eq!(range.center(), StickInput::new(-56, 118));

        let corner = InputRange::around(StickInput::new(-125, 0), 5, 0);
        assert_eq!(corner.x_min, -128);
    }
}
