//! Intersection Drive Library
//!
//! The simulation core for a single-vehicle driving scene at a signalled
//! intersection. It runs headless; any renderer reads its snapshots.

pub mod simulation;
