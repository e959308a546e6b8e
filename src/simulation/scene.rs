//! Fixed furniture around the intersection
//!
//! Signal posts and surveillance cameras sit on the four corners of the
//! intersection box. Their positions never change during a run.

use super::types::{Axis, Position};

/// A traffic signal head on one corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalPost {
    pub name: &'static str,
    pub position: Position,
    /// Rotation about the vertical axis in degrees
    pub yaw: f32,
    /// The approach whose colour this head shows
    pub axis: Axis,
}

/// A surveillance camera mounted on one corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveillanceCamera {
    pub position: Position,
    pub yaw: f32,
}

pub static SIGNAL_POSTS: [SignalPost; 4] = [
    SignalPost {
        name: "South-East",
        position: Position::new(10.0, 0.0, -10.5),
        yaw: 0.0,
        axis: Axis::NorthSouth,
    },
    SignalPost {
        name: "North-West",
        position: Position::new(-10.0, 0.0, 10.5),
        yaw: 180.0,
        axis: Axis::NorthSouth,
    },
    SignalPost {
        name: "North-East",
        position: Position::new(10.0, 0.0, 10.5),
        yaw: -90.0,
        axis: Axis::WestEast,
    },
    SignalPost {
        name: "South-West",
        position: Position::new(-10.0, 0.0, -10.5),
        yaw: 90.0,
        axis: Axis::WestEast,
    },
];

pub static SURVEILLANCE_CAMERAS: [SurveillanceCamera; 4] = [
    SurveillanceCamera {
        position: Position::new(10.0, 0.0, -10.0),
        yaw: -45.0,
    },
    SurveillanceCamera {
        position: Position::new(-10.0, 0.0, 10.0),
        yaw: 135.0,
    },
    SurveillanceCamera {
        position: Position::new(10.0, 0.0, 10.0),
        yaw: -135.0,
    },
    SurveillanceCamera {
        position: Position::new(-10.0, 0.0, -10.0),
        yaw: 45.0,
    },
];

/// Ground-plane anchors that decoration has to keep clear of
pub fn signal_anchors() -> [Position; 4] {
    SIGNAL_POSTS.map(|post| post.position)
}
