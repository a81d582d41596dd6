use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::trig::{coss, sins};

/// 16-bit binary angle: 65536 units per full turn, wrapping on overflow.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Angle(pub u16);

impl Angle {
    pub const ZERO: Angle = Angle(0);
    pub const QUARTER_TURN: Angle = Angle(0x4000);
    pub const HALF_TURN: Angle = Angle(0x8000);

    #[inline]
    pub const fn units(self) -> u16 {
        self.0
    }

    /// Wraps an arbitrary integer into the angle domain (mod 65536).
    #[inline]
    pub const fn wrapping_from(units: i32) -> Self {
        Angle(units as u16)
    }

    /// Signed shortest difference `self - other`, in [-32768, 32767].
    #[inline]
    pub fn signed_delta(self, other: Angle) -> i32 {
        (self - other).0 as i16 as i32
    }

    #[inline]
    pub fn reversed(self) -> Angle {
        self + Self::HALF_TURN
    }

    pub fn to_degrees(self) -> f64 {
        self.0 as f64 * 360.0 / 65536.0
    }

    #[inline]
    pub fn sin(self) -> f32 {
        sins(self)
    }

    #[inline]
    pub fn cos(self) -> f32 {
        coss(self)
    }
}

impl From<u16> for Angle {
    fn from(units: u16) -> Self {
        Angle(units)
    }
}

impl Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl Sub for Angle {
    type Output = Angle;

    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(self.0.wrapping_neg())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_wraps_around_full_turn() {
        assert_eq!(Angle(0xF000) + Angle(0x2000), Angle(0x1000));
        assert_eq!(Angle(0x1000) - Angle(0x2000), Angle(0xF000));
        assert_eq!(-Angle(0x4000), Angle(0xC000));
        assert_eq!(Angle::wrapping_from(65536 + 5), Angle(5));
        assert_eq!(Angle::wrapping_from(-1), Angle(0xFFFF));
    }

    #[test]
    fn signed_delta_picks_short_way_round() {
        assert_eq!(Angle(10).signed_delta(Angle(65530)), 16);
        assert_eq!(Angle(65530).signed_delta(Angle(10)), -16);
        assert_eq!(Angle(0x8000).signed_delta(Angle(0)), -32768);
    }

    #[test]
    fn reversed_is_half_turn() {
        assert_eq!(Angle(16384).reversed(), Angle(49152));
        assert_eq!(Angle(49152).reversed(), Angle(16384));
    }

    #[test]
    fn serde_is_transparent() {
        let encoded = serde_json::to_string(&Angle(39780)).expect("encode");
        assert_eq!(encoded, "39780");
        let decoded: Angle = serde_json::from_str("16384").expect("decode");
        assert_eq!(decoded, Angle::QUARTER_TURN);
    }
}
