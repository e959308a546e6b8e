//! Procedural roadside tree placement
//!
//! Trees are scattered once, before the first tick, by walking a jittered
//! grid over the four quadrants around the intersection and rejecting
//! points that land on a road or too close to a signal post.

use log::info;
use ordered_float::OrderedFloat;
use rand::Rng;

use super::types::Position;

/// Largest jitter a placement config may ask for
pub const MAX_TREE_JITTER: u32 = 10_000;

/// Upper bound on grid points visited across all four quadrants
pub const MAX_TREE_CANDIDATES: u64 = 1_000_000;

/// A single decorative tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeInstance {
    pub x: f32,
    pub z: f32,
    /// Rotation about the vertical axis in degrees
    pub rotation: f32,
    pub scale: f32,
}

impl TreeInstance {
    /// Squared ground-plane distance from the world origin
    pub fn distance_sq_from_origin(&self) -> f32 {
        self.x * self.x + self.z * self.z
    }
}

/// Configuration for tree placement
#[derive(Debug, Clone, PartialEq)]
pub struct TreePlacementConfig {
    /// Grid spacing between candidate points
    pub spacing: f32,
    /// Candidates are jittered by an integer offset in [-jitter, jitter)
    pub jitter: u32,
    /// Inner edge of each quadrant, measured from the road centrelines
    pub quadrant_inner: f32,
    /// Outer edge of each quadrant
    pub quadrant_outer: f32,
    /// Minimum distance from either road centreline
    pub road_clearance: f32,
    /// Minimum straight-line distance from any signal anchor
    pub signal_clearance: f32,
    pub base_scale: f32,
    pub scale_step: f32,
    /// Number of discrete scale steps above the base scale
    pub scale_steps: u32,
}

impl Default for TreePlacementConfig {
    fn default() -> Self {
        Self {
            spacing: 50.0,
            jitter: 10,
            quadrant_inner: 20.0,
            quadrant_outer: 1000.0,
            road_clearance: 15.0,
            signal_clearance: 20.0,
            base_scale: 0.8,
            scale_step: 0.1,
            scale_steps: 4,
        }
    }
}

impl TreePlacementConfig {
    /// True if the point is within the clearance distance of any anchor
    pub fn is_near_signal(&self, x: f32, z: f32, anchors: &[Position]) -> bool {
        let point = Position::new(x, 0.0, z);
        anchors
            .iter()
            .any(|anchor| point.planar_distance(anchor) < self.signal_clearance)
    }

    /// Road clearance first, then signal clearance; either one rejects
    pub fn is_valid_position(&self, x: f32, z: f32, anchors: &[Position]) -> bool {
        if x.abs() < self.road_clearance || z.abs() < self.road_clearance {
            return false;
        }
        !self.is_near_signal(x, z, anchors)
    }

    /// Grid points along one quadrant edge
    pub fn steps_per_axis(&self) -> u32 {
        grid_steps(self.quadrant_inner, self.quadrant_outer, self.spacing)
    }

    /// Grid points visited over all four quadrants
    pub fn candidate_count(&self) -> u64 {
        let steps = u64::from(self.steps_per_axis());
        steps.saturating_mul(steps).saturating_mul(4)
    }

    /// Grid ranges for one quadrant; bit 0 picks +X, bit 1 picks +Z
    fn quadrant_bounds(&self, quadrant: u8) -> ((f32, f32), (f32, f32)) {
        let positive = (self.quadrant_inner, self.quadrant_outer);
        let negative = (-self.quadrant_outer, -self.quadrant_inner);
        let x = if quadrant & 1 != 0 { positive } else { negative };
        let z = if quadrant & 2 != 0 { positive } else { negative };
        (x, z)
    }
}

/// Number of points `start + i * spacing` that fall below `end`
fn grid_steps(start: f32, end: f32, spacing: f32) -> u32 {
    if !spacing.is_finite() || spacing <= 0.0 || end <= start {
        return 0;
    }
    // `as` saturates at u32::MAX
    ((end - start) / spacing).ceil() as u32
}

fn jitter_offset<R: Rng + ?Sized>(rng: &mut R, jitter: u32) -> f32 {
    if jitter == 0 {
        return 0.0;
    }
    rng.random_range(0..jitter.saturating_mul(2)) as f32 - jitter as f32
}

/// Scatter trees over the four quadrants around the intersection
///
/// This is acceptance/rejection sampling: overlapping trees are allowed.
/// The same generator state always produces the same list.
pub fn place_trees<R: Rng + ?Sized>(
    config: &TreePlacementConfig,
    anchors: &[Position],
    rng: &mut R,
) -> Vec<TreeInstance> {
    let mut trees = Vec::new();
    let mut rejected = 0usize;

    let steps = config.steps_per_axis();

    for quadrant in 0..4u8 {
        let ((x_start, _), (z_start, _)) = config.quadrant_bounds(quadrant);

        for i in 0..steps {
            let x = x_start + i as f32 * config.spacing;
            for j in 0..steps {
                let z = z_start + j as f32 * config.spacing;
                let tree_x = x + jitter_offset(rng, config.jitter);
                let tree_z = z + jitter_offset(rng, config.jitter);

                if config.is_valid_position(tree_x, tree_z, anchors) {
                    let rotation = rng.random_range(0..360u32) as f32;
                    let step = if config.scale_steps > 0 {
                        rng.random_range(0..config.scale_steps)
                    } else {
                        0
                    };
                    trees.push(TreeInstance {
                        x: tree_x,
                        z: tree_z,
                        rotation,
                        scale: config.base_scale + step as f32 * config.scale_step,
                    });
                } else {
                    rejected += 1;
                }
            }
        }
    }

    info!(
        "Placed {} trees ({} candidates rejected)",
        trees.len(),
        rejected
    );
    trees
}

/// Draw order for transparency: farthest from the origin first
///
/// Returns a reordered copy; the placement list itself is never touched.
pub fn back_to_front(trees: &[TreeInstance]) -> Vec<TreeInstance> {
    let mut ordered = trees.to_vec();
    ordered.sort_by_key(|tree| std::cmp::Reverse(OrderedFloat(tree.distance_sq_from_origin())));
    ordered
}
