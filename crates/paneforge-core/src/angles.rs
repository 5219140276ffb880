use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{format_num, parse_triple, Direction, ParseError, Vec3};

/// Euler orientation in degrees, applied roll (X), then pitch (Y), then yaw (Z).
///
/// Positive pitch tilts the forward vector downward, as in the level editor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Angles {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

/// Rolls tried by [`Angles::facing_with_up`], matching the 90 degree snapping of frame pieces.
const ROLL_STEPS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

impl Angles {
    #[must_use]
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Parses the `"pitch yaw roll"` form used by level keyvalues.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let [pitch, yaw, roll] = parse_triple(input)?;
        Ok(Self::new(pitch, yaw, roll))
    }

    /// Orientation whose forward vector points along `dir`, with zero roll.
    #[must_use]
    pub fn facing(dir: Vec3) -> Self {
        // Adding 0.0 folds -0.0 so atan2 never lands on the -180 branch.
        let dir = Vec3::new(dir.x + 0.0, dir.y + 0.0, dir.z + 0.0);
        let horiz = (dir.x * dir.x + dir.y * dir.y).sqrt();
        Self::new(
            normalize_degrees((-dir.z).atan2(horiz).to_degrees()),
            normalize_degrees(dir.y.atan2(dir.x).to_degrees()),
            0.0,
        )
    }

    /// Orientation facing `dir` and rolled so its up vector equals `up`.
    ///
    /// Returns `None` when no quarter-turn roll produces `up` (it is not perpendicular to `dir`).
    #[must_use]
    pub fn facing_with_up(dir: Vec3, up: Vec3) -> Option<Self> {
        let base = Self::facing(dir);
        ROLL_STEPS
            .iter()
            .map(|&roll| Self { roll, ..base })
            .find(|candidate| candidate.up().approx_eq(up))
    }

    #[must_use]
    pub fn forward(self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cp * cy, cp * sy, -sp)
    }

    #[must_use]
    pub fn left(self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sr, cr) = self.roll.to_radians().sin_cos();
        Vec3::new(sr * sp * cy - cr * sy, sr * sp * sy + cr * cy, sr * cp)
    }

    #[must_use]
    pub fn up(self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sr, cr) = self.roll.to_radians().sin_cos();
        Vec3::new(cr * sp * cy + sr * sy, cr * sp * sy - sr * cy, cr * cp)
    }

    /// Rotates a local-space vector (x forward, y left, z up) into world space.
    #[must_use]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        self.forward() * v.x + self.left() * v.y + self.up() * v.z
    }

    /// The axis direction this orientation faces, if it is axis-aligned.
    #[must_use]
    pub fn facing_direction(self) -> Option<Direction> {
        Direction::from_vec(self.forward())
    }
}

impl fmt::Display for Angles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_num(self.pitch),
            format_num(self.yaw),
            format_num(self.roll)
        )
    }
}

fn normalize_degrees(deg: f64) -> f64 {
    let snapped = if (deg - deg.round()).abs() < 1e-9 {
        deg.round()
    } else {
        deg
    };
    let wrapped = snapped.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec(v: Vec3, x: f64, y: f64, z: f64) {
        assert_abs_diff_eq!(v.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(v.y, y, epsilon = 1e-9);
        assert_abs_diff_eq!(v.z, z, epsilon = 1e-9);
    }

    #[test]
    fn identity_basis() {
        let a = Angles::default();
        assert_vec(a.forward(), 1.0, 0.0, 0.0);
        assert_vec(a.left(), 0.0, 1.0, 0.0);
        assert_vec(a.up(), 0.0, 0.0, 1.0);
    }

    #[test]
    fn positive_pitch_looks_down() {
        assert_vec(Angles::new(90.0, 0.0, 0.0).forward(), 0.0, 0.0, -1.0);
        assert_vec(Angles::new(-90.0, 0.0, 0.0).forward(), 0.0, 0.0, 1.0);
    }

    #[test]
    fn yaw_turns_counter_clockwise() {
        assert_vec(Angles::new(0.0, 90.0, 0.0).forward(), 0.0, 1.0, 0.0);
        assert_vec(Angles::new(0.0, 180.0, 0.0).forward(), -1.0, 0.0, 0.0);
    }

    #[test]
    fn facing_round_trips_every_direction() {
        for dir in Direction::ALL {
            let a = Angles::facing(dir.to_vec());
            assert_eq!(a.facing_direction(), Some(dir), "{dir} -> {a}");
        }
    }

    #[test]
    fn facing_normalizes_into_0_360() {
        let a = Angles::facing(Vec3::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(a.pitch, 270.0, epsilon = 1e-9);
        assert_eq!(a.to_string(), "270 0 0");
        let a = Angles::facing(Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(a.to_string(), "0 270 0");
    }

    #[test]
    fn facing_with_up_finds_every_perpendicular_roll() {
        for dir in Direction::ALL {
            for up in Direction::ALL {
                let got = Angles::facing_with_up(dir.to_vec(), up.to_vec());
                if up.axis() == dir.axis() {
                    assert!(got.is_none());
                    continue;
                }
                let a = got.unwrap_or_else(|| panic!("no roll for {dir} up {up}"));
                assert!(a.forward().approx_eq(dir.to_vec()));
                assert!(a.up().approx_eq(up.to_vec()));
            }
        }
    }

    #[test]
    fn rotate_matches_basis() {
        let a = Angles::new(0.0, 90.0, 0.0);
        assert_vec(a.rotate(Vec3::new(1.0, 0.0, 0.0)), 0.0, 1.0, 0.0);
        assert_vec(a.rotate(Vec3::new(0.0, 1.0, 0.0)), -1.0, 0.0, 0.0);
    }
}
