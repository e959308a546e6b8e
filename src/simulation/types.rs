//! Core types for the driving simulation
//!
//! These are plain value types with no rendering dependencies.

use std::fmt;

/// A 3D position (or displacement) in world units
///
/// The ground plane is X/Z, with +Y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance on the ground plane, ignoring height
    pub fn planar_distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Rotate about the vertical axis by `degrees`
    ///
    /// Positive angles turn +Z towards +X, matching the heading convention
    /// where 0° faces +Z and 90° faces +X.
    pub fn rotated_about_y(&self, degrees: f32) -> Position {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Position {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    pub fn offset(&self, dx: f32, dy: f32, dz: f32) -> Position {
        Position::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl std::ops::Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// The two perpendicular traffic directions through the intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Traffic moving north-south (along Z)
    NorthSouth,
    /// Traffic moving west-east (along X)
    WestEast,
}

/// Four-way compass label derived from a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLabel {
    North,
    East,
    South,
    West,
}

impl HeadingLabel {
    /// Classify a heading in degrees into 90° sectors centred on the
    /// cardinal directions (boundaries at 45, 135, 225 and 315).
    pub fn from_degrees(heading: f32) -> Self {
        if !(45.0..315.0).contains(&heading) {
            HeadingLabel::North
        } else if heading < 135.0 {
            HeadingLabel::East
        } else if heading < 225.0 {
            HeadingLabel::South
        } else {
            HeadingLabel::West
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            HeadingLabel::North => 'N',
            HeadingLabel::East => 'E',
            HeadingLabel::South => 'S',
            HeadingLabel::West => 'W',
        }
    }
}

impl fmt::Display for HeadingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Wrap an angle in degrees into [0, 360)
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Half-width of the intersection box on both axes
pub const INTERSECTION_HALF_SIZE: f32 = 10.0;

/// Default simulation tick in milliseconds
pub const DEFAULT_TICK_MS: u32 = 20;
