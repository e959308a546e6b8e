//! Camera placement derived from the vehicle pose
//!
//! The chase offset follows the vehicle heading; the four viewport rigs
//! describe where each view looks from and how its screen area is laid
//! out for a given window size.

use super::types::Position;

/// Chase camera displacement in the vehicle's local frame (behind, level)
pub const LOCAL_CHASE_OFFSET: Position = Position::new(0.0, 0.0, -6.0);

/// Height of the chase eye above the offset point
pub const CHASE_EYE_HEIGHT: f32 = 2.0;

/// Height of the chase look-at point above the vehicle
pub const CHASE_TARGET_HEIGHT: f32 = 1.0;

/// Distance of the side surveillance views from the vehicle
pub const SIDE_VIEW_DISTANCE: f32 = 30.0;

/// Eye height of the side surveillance views
pub const SIDE_VIEW_HEIGHT: f32 = 5.0;

/// Eye height of the top-down view
pub const TOP_VIEW_HEIGHT: f32 = 100.0;

/// Half extent of the top-down orthographic volume
pub const TOP_VIEW_HALF_EXTENT: f32 = 50.0;

/// Gap kept between the main view and the row of small views
const MAIN_VIEW_MARGIN: i32 = 50;

/// World-space chase camera offset for a vehicle heading in degrees
pub fn chase_camera_offset(heading: f32) -> Position {
    LOCAL_CHASE_OFFSET.rotated_about_y(heading)
}

/// Which of the four views a rig belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Third-person view following the vehicle
    Chase,
    /// Fixed-angle view from the vehicle's north-west side (world -45°)
    RightSide,
    /// Orthographic map view from above
    TopDown,
    /// Fixed-angle view from the vehicle's north-east side (world +45°)
    LeftSide,
}

/// Screen rectangle in pixels, origin at the bottom-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        fov_y_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    Orthographic {
        half_extent: f32,
        near: f32,
        far: f32,
    },
}

/// Everything a renderer needs to draw one view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRig {
    pub kind: ViewKind,
    pub viewport: Viewport,
    pub projection: Projection,
    pub eye: Position,
    pub target: Position,
    pub up: Position,
}

fn perspective(viewport: &Viewport) -> Projection {
    Projection::Perspective {
        fov_y_degrees: 45.0,
        aspect: viewport.aspect(),
        near: 1.0,
        far: 1000.0,
    }
}

/// Eye for a side view at a fixed world angle around the vehicle
fn side_eye(vehicle: &Position, world_angle: f32) -> Position {
    let (sin, cos) = world_angle.to_radians().sin_cos();
    Position::new(
        vehicle.x + SIDE_VIEW_DISTANCE * sin,
        SIDE_VIEW_HEIGHT,
        vehicle.z + SIDE_VIEW_DISTANCE * cos,
    )
}

/// Lay out the four views for a window of `width` x `height` pixels
///
/// The chase view fills the lower part of the window; the three small
/// views share the top row, a quarter of the window each.
pub fn view_rigs(
    width: i32,
    height: i32,
    vehicle: &Position,
    camera_offset: &Position,
) -> [ViewRig; 4] {
    let small_width = width / 4;
    let small_height = height / 4;
    let top_row = height - small_height;
    let up = Position::new(0.0, 1.0, 0.0);

    let main_viewport = Viewport {
        x: 0,
        y: 0,
        width,
        height: height - small_height - MAIN_VIEW_MARGIN,
    };
    let chase = ViewRig {
        kind: ViewKind::Chase,
        viewport: main_viewport,
        projection: perspective(&main_viewport),
        eye: *vehicle + *camera_offset + Position::new(0.0, CHASE_EYE_HEIGHT, 0.0),
        target: vehicle.offset(0.0, CHASE_TARGET_HEIGHT, 0.0),
        up,
    };

    let right_viewport = Viewport {
        x: width - small_width,
        y: top_row,
        width: small_width,
        height: small_height,
    };
    let right = ViewRig {
        kind: ViewKind::RightSide,
        viewport: right_viewport,
        projection: perspective(&right_viewport),
        eye: side_eye(vehicle, -45.0),
        target: vehicle.offset(0.0, 2.0, 0.0),
        up,
    };

    let top_viewport = Viewport {
        x: (width - small_width) / 2,
        y: top_row,
        width: small_width,
        height: small_height,
    };
    let top = ViewRig {
        kind: ViewKind::TopDown,
        viewport: top_viewport,
        projection: Projection::Orthographic {
            half_extent: TOP_VIEW_HALF_EXTENT,
            near: -1000.0,
            far: 1000.0,
        },
        eye: Position::new(vehicle.x, TOP_VIEW_HEIGHT, vehicle.z),
        target: Position::new(vehicle.x, 0.0, vehicle.z),
        // Looking straight down, so screen-up has to lie in the ground plane
        up: Position::new(0.0, 0.0, -1.0),
    };

    let left_viewport = Viewport {
        x: 0,
        y: top_row,
        width: small_width,
        height: small_height,
    };
    let left = ViewRig {
        kind: ViewKind::LeftSide,
        viewport: left_viewport,
        projection: perspective(&left_viewport),
        eye: side_eye(vehicle, 45.0),
        target: vehicle.offset(0.0, 2.0, 0.0),
        up,
    };

    [chase, right, top, left]
}
