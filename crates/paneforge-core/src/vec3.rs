use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::{format_num, parse_triple, ParseError, EPSILON};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A vector with `mag` on `axis` and zero elsewhere.
    #[must_use]
    pub fn on_axis(axis: Axis, mag: f64) -> Self {
        Self::ZERO.with(axis, mag)
    }

    /// Parses the `"x y z"` form used by level keyvalues.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let [x, y, z] = parse_triple(input)?;
        Ok(Self::new(x, y, z))
    }

    #[must_use]
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    #[must_use]
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        self.set(axis, value);
        self
    }

    #[must_use]
    pub fn min(self, other: Vec3) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[must_use]
    pub fn max(self, other: Vec3) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[must_use]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub fn approx_eq(self, other: Vec3) -> bool {
        (self.x - other.x).abs() < EPSILON
            && (self.y - other.y).abs() < EPSILON
            && (self.z - other.z).abs() < EPSILON
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_num(self.x),
            format_num(self.y),
            format_num(self.z)
        )
    }
}

/// One of the six axis-aligned unit directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    #[must_use]
    pub fn new(axis: Axis, positive: bool) -> Self {
        match (axis, positive) {
            (Axis::X, true) => Direction::PosX,
            (Axis::X, false) => Direction::NegX,
            (Axis::Y, true) => Direction::PosY,
            (Axis::Y, false) => Direction::NegY,
            (Axis::Z, true) => Direction::PosZ,
            (Axis::Z, false) => Direction::NegZ,
        }
    }

    /// Snaps a unit vector onto an axis direction.
    ///
    /// Returns `None` unless exactly one component is (within tolerance) +/-1 and the rest 0.
    #[must_use]
    pub fn from_vec(v: Vec3) -> Option<Self> {
        let mut found = None;
        for axis in Axis::ALL {
            let c = v.get(axis);
            if (c.abs() - 1.0).abs() < EPSILON {
                if found.is_some() {
                    return None;
                }
                found = Some(Direction::new(axis, c > 0.0));
            } else if c.abs() >= EPSILON {
                return None;
            }
        }
        found
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Direction::PosX | Direction::NegX => Axis::X,
            Direction::PosY | Direction::NegY => Axis::Y,
            Direction::PosZ | Direction::NegZ => Axis::Z,
        }
    }

    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Direction::PosX | Direction::PosY | Direction::PosZ => 1.0,
            Direction::NegX | Direction::NegY | Direction::NegZ => -1.0,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        Direction::new(self.axis(), self.sign() < 0.0)
    }

    #[must_use]
    pub fn to_vec(self) -> Vec3 {
        Vec3::on_axis(self.axis(), self.sign())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign() > 0.0 { '+' } else { '-' };
        write!(f, "{sign}{}", self.axis())
    }
}
