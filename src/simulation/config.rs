//! Run configuration for the simulation
//!
//! Defaults reproduce the stock tuning; the headless driver overrides
//! fields from the command line before validating.

use anyhow::{bail, Result};

use super::signal::SignalTiming;
use super::trees::{TreePlacementConfig, MAX_TREE_CANDIDATES, MAX_TREE_JITTER};
use super::types::DEFAULT_TICK_MS;
use super::vehicle::VehicleTuning;

/// Everything needed to build a `SimWorld`
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Duration of one tick in milliseconds
    pub tick_ms: u32,
    /// Seed for tree placement; `None` draws from the thread RNG
    pub seed: Option<u64>,
    pub vehicle: VehicleTuning,
    pub signals: SignalTiming,
    pub trees: TreePlacementConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
            vehicle: VehicleTuning::default(),
            signals: SignalTiming::default(),
            trees: TreePlacementConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            bail!("Tick duration must be at least 1 ms");
        }
        if self.signals.green_ms == 0 || self.signals.yellow_ms == 0 {
            bail!(
                "Signal green and yellow phases must be non-zero (got {} ms / {} ms)",
                self.signals.green_ms,
                self.signals.yellow_ms
            );
        }
        let signals = &self.signals;
        if signals
            .green_ms
            .checked_add(signals.yellow_ms)
            .and_then(|sum| sum.checked_add(signals.red_ms))
            .is_none()
        {
            bail!(
                "Signal cycle of {} + {} + {} ms does not fit in a u32 counter",
                signals.green_ms,
                signals.yellow_ms,
                signals.red_ms
            );
        }
        if signals.red_ms <= signals.yellow_ms {
            bail!(
                "Signal red phase ({} ms) must outlast the yellow phase ({} ms)",
                signals.red_ms,
                signals.yellow_ms
            );
        }

        let vehicle = &self.vehicle;
        if vehicle.max_speed.is_nan() || vehicle.max_speed <= 0.0 {
            bail!("Vehicle max speed must be positive (got {})", vehicle.max_speed);
        }
        if !vehicle.max_speed.is_finite() {
            bail!("Vehicle max speed must be finite");
        }
        for (name, value) in [
            ("acceleration", vehicle.acceleration),
            ("deceleration", vehicle.deceleration),
            ("min turn speed", vehicle.min_turn_speed),
            ("max turn speed", vehicle.max_turn_speed),
            ("turn acceleration", vehicle.turn_acceleration),
            ("turn deceleration", vehicle.turn_deceleration),
            ("turn speed multiplier", vehicle.turn_speed_multiplier),
        ] {
            if !is_non_negative(value) {
                bail!("Vehicle {} must be finite and non-negative (got {})", name, value);
            }
        }

        let trees = &self.trees;
        if !trees.spacing.is_finite() || trees.spacing <= 0.0 {
            bail!("Tree spacing must be positive (got {})", trees.spacing);
        }
        if !trees.quadrant_inner.is_finite() || !trees.quadrant_outer.is_finite() {
            bail!("Tree quadrant edges must be finite");
        }
        if trees.quadrant_inner > trees.quadrant_outer {
            bail!(
                "Tree quadrant inner edge {} lies beyond outer edge {}",
                trees.quadrant_inner,
                trees.quadrant_outer
            );
        }
        if trees.candidate_count() > MAX_TREE_CANDIDATES {
            bail!(
                "Tree spacing {} yields {} grid points (limit {})",
                trees.spacing,
                trees.candidate_count(),
                MAX_TREE_CANDIDATES
            );
        }
        if trees.jitter > MAX_TREE_JITTER {
            bail!(
                "Tree jitter {} exceeds the limit of {}",
                trees.jitter,
                MAX_TREE_JITTER
            );
        }
        for (name, value) in [
            ("road clearance", trees.road_clearance),
            ("signal clearance", trees.signal_clearance),
            ("base scale", trees.base_scale),
            ("scale step", trees.scale_step),
        ] {
            if !is_non_negative(value) {
                bail!("Tree {} must be finite and non-negative (got {})", name, value);
            }
        }
        Ok(())
    }
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
