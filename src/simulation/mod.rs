//! Standalone driving simulation core
//!
//! This module contains the per-tick state transitions for the player
//! vehicle, the intersection signals and the scenery. It has no rendering
//! dependencies; renderers consume `SimSnapshot` and the fixture tables.

mod camera;
mod config;
mod scene;
mod script;
mod signal;
mod snapshot;
mod trees;
mod types;
mod vehicle;
mod world;

pub use camera::{
    chase_camera_offset, view_rigs, Projection, ViewKind, ViewRig, Viewport, LOCAL_CHASE_OFFSET,
};
pub use config::SimConfig;
pub use scene::{signal_anchors, SignalPost, SurveillanceCamera, SIGNAL_POSTS, SURVEILLANCE_CAMERAS};
pub use script::{DriveScript, ScriptStep};
pub use signal::{SignalColor, SignalController, SignalPhase, SignalTiming};
pub use snapshot::SimSnapshot;
pub use trees::{
    back_to_front, place_trees, TreeInstance, TreePlacementConfig, MAX_TREE_CANDIDATES,
    MAX_TREE_JITTER,
};
pub use types::{
    normalize_degrees, Axis, HeadingLabel, Position, DEFAULT_TICK_MS, INTERSECTION_HALF_SIZE,
};
pub use vehicle::{
    Intent, Intents, SimVehicle, VehicleTuning, DEFAULT_VEHICLE_HEADING, DEFAULT_VEHICLE_POSITION,
};
pub use world::SimWorld;
