use paneforge_core::{Axis, Direction};

/// How a pane corner picks each world coordinate from the surface solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Min,
    Max,
    /// The normal axis; taken from the surface's front plane.
    Plane,
}

/// Corner keyvalues read by the shatter effect, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerName {
    LowerLeft,
    LowerRight,
    UpperLeft,
    UpperRight,
}

impl CornerName {
    pub const ALL: [CornerName; 4] = [
        CornerName::LowerLeft,
        CornerName::LowerRight,
        CornerName::UpperLeft,
        CornerName::UpperRight,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            CornerName::LowerLeft => "lowerleft",
            CornerName::LowerRight => "lowerright",
            CornerName::UpperLeft => "upperleft",
            CornerName::UpperRight => "upperright",
        }
    }
}

/// Pane-local frame for one facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneAxes {
    pub normal: Direction,
    pub u: Axis,
    pub v: Axis,
    /// Per [`CornerName::ALL`] entry, the pick for world x, y and z.
    pub corners: [[Pick; 3]; 4],
}

use Pick::{Max, Min, Plane};

const TABLE: [PaneAxes; 6] = [
    PaneAxes {
        normal: Direction::PosX,
        u: Axis::Y,
        v: Axis::Z,
        corners: [
            [Plane, Max, Min],
            [Plane, Min, Min],
            [Plane, Max, Max],
            [Plane, Min, Max],
        ],
    },
    PaneAxes {
        normal: Direction::NegX,
        u: Axis::Y,
        v: Axis::Z,
        corners: [
            [Plane, Min, Min],
            [Plane, Max, Min],
            [Plane, Min, Max],
            [Plane, Max, Max],
        ],
    },
    PaneAxes {
        normal: Direction::PosY,
        u: Axis::X,
        v: Axis::Z,
        corners: [
            [Min, Plane, Min],
            [Max, Plane, Min],
            [Min, Plane, Max],
            [Max, Plane, Max],
        ],
    },
    PaneAxes {
        normal: Direction::NegY,
        u: Axis::X,
        v: Axis::Z,
        corners: [
            [Max, Plane, Min],
            [Min, Plane, Min],
            [Max, Plane, Max],
            [Min, Plane, Max],
        ],
    },
    PaneAxes {
        normal: Direction::PosZ,
        u: Axis::X,
        v: Axis::Y,
        corners: [
            [Min, Min, Plane],
            [Min, Max, Plane],
            [Max, Min, Plane],
            [Max, Max, Plane],
        ],
    },
    PaneAxes {
        normal: Direction::NegZ,
        u: Axis::X,
        v: Axis::Y,
        corners: [
            [Min, Max, Plane],
            [Min, Min, Plane],
            [Max, Max, Plane],
            [Max, Min, Plane],
        ],
    },
];

#[must_use]
pub fn pane_axes(normal: Direction) -> &'static PaneAxes {
    let idx = match normal {
        Direction::PosX => 0,
        Direction::NegX => 1,
        Direction::PosY => 2,
        Direction::NegY => 3,
        Direction::PosZ => 4,
        Direction::NegZ => 5,
    };
    &TABLE[idx]
}
