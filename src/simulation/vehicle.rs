//! Player vehicle kinematics
//!
//! Speed, heading and position are integrated once per tick from the
//! latched control intents.

use log::debug;

use super::camera::chase_camera_offset;
use super::types::{normalize_degrees, HeadingLabel, Position};

/// Position the vehicle starts at and returns to on reset
pub const DEFAULT_VEHICLE_POSITION: Position = Position::new(3.0, 0.0, 45.0);

/// Heading the vehicle starts at (facing south)
pub const DEFAULT_VEHICLE_HEADING: f32 = 180.0;

/// Kinematic tuning, all rates expressed per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleTuning {
    /// Top forward speed; reverse is capped at half of this
    pub max_speed: f32,
    pub acceleration: f32,
    /// Coasting decay applied when no longitudinal intent is held
    pub deceleration: f32,
    /// Turn rate in degrees per tick at full speed
    pub min_turn_speed: f32,
    /// Turn rate in degrees per tick when stationary
    pub max_turn_speed: f32,
    pub turn_acceleration: f32,
    pub turn_deceleration: f32,
    pub turn_speed_multiplier: f32,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            max_speed: 0.5,
            acceleration: 0.01,
            deceleration: 0.005,
            min_turn_speed: 2.0,
            max_turn_speed: 6.0,
            turn_acceleration: 0.2,
            turn_deceleration: 0.1,
            turn_speed_multiplier: 1.0,
        }
    }
}

impl VehicleTuning {
    pub fn max_reverse_speed(&self) -> f32 {
        self.max_speed / 2.0
    }

    /// Turn rate before easing, blended from max (stationary) down to min
    /// (full speed).
    pub fn turn_rate_at(&self, speed: f32) -> f32 {
        let speed_factor = speed.abs() / self.max_speed;
        let rate =
            self.min_turn_speed + (self.max_turn_speed - self.min_turn_speed) * (1.0 - speed_factor);
        rate * self.turn_speed_multiplier
    }
}

/// A held control input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

/// The latched set of held control inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intents {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl Intents {
    pub fn get(&self, intent: Intent) -> bool {
        match intent {
            Intent::Forward => self.forward,
            Intent::Backward => self.backward,
            Intent::TurnLeft => self.turn_left,
            Intent::TurnRight => self.turn_right,
        }
    }

    pub fn set(&mut self, intent: Intent, held: bool) {
        let slot = match intent {
            Intent::Forward => &mut self.forward,
            Intent::Backward => &mut self.backward,
            Intent::TurnLeft => &mut self.turn_left,
            Intent::TurnRight => &mut self.turn_right,
        };
        *slot = held;
    }

    pub fn is_turning(&self) -> bool {
        self.turn_left || self.turn_right
    }

    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.turn_left || self.turn_right)
    }
}

/// The user-controlled vehicle
#[derive(Debug, Clone)]
pub struct SimVehicle {
    pub position: Position,
    /// Degrees in [0, 360); 0 faces +Z (north), 90 faces +X (east)
    pub heading: f32,
    pub heading_label: HeadingLabel,
    /// Signed speed in world units per tick
    pub speed: f32,
    /// Ramp of turning authority in [0, 1]
    pub turn_interpolation: f32,
    pub intents: Intents,
    /// World-space chase camera offset for the current heading
    pub camera_offset: Position,
}

impl Default for SimVehicle {
    fn default() -> Self {
        Self::new()
    }
}

impl SimVehicle {
    pub fn new() -> Self {
        Self {
            position: DEFAULT_VEHICLE_POSITION,
            heading: DEFAULT_VEHICLE_HEADING,
            heading_label: HeadingLabel::from_degrees(DEFAULT_VEHICLE_HEADING),
            speed: 0.0,
            turn_interpolation: 0.0,
            intents: Intents::default(),
            camera_offset: chase_camera_offset(DEFAULT_VEHICLE_HEADING),
        }
    }

    /// Latch or release a control intent
    ///
    /// Turning edges refresh the camera offset straight away so the chase
    /// view reacts before the next tick lands.
    pub fn set_intent(&mut self, intent: Intent, held: bool) {
        if self.intents.get(intent) == held {
            return;
        }
        self.intents.set(intent, held);
        if matches!(intent, Intent::TurnLeft | Intent::TurnRight) {
            self.camera_offset = chase_camera_offset(self.heading);
        }
    }

    /// Advance the vehicle by one tick
    pub fn advance(&mut self, tuning: &VehicleTuning) {
        // Displacement uses the heading held at the start of the tick
        let angle_radians = self.heading.to_radians();

        self.update_speed(tuning);
        self.update_heading(tuning);

        self.position.x += self.speed * angle_radians.sin();
        self.position.z += self.speed * angle_radians.cos();

        self.heading_label = HeadingLabel::from_degrees(self.heading);
        self.camera_offset = chase_camera_offset(self.heading);
    }

    fn update_speed(&mut self, tuning: &VehicleTuning) {
        if self.intents.forward {
            self.speed = (self.speed + tuning.acceleration).min(tuning.max_speed);
        } else if self.intents.backward {
            self.speed = (self.speed - tuning.acceleration).max(-tuning.max_reverse_speed());
        } else if self.speed > 0.0 {
            self.speed = (self.speed - tuning.deceleration).max(0.0);
        } else if self.speed < 0.0 {
            self.speed = (self.speed + tuning.deceleration).min(0.0);
        }
    }

    fn update_heading(&mut self, tuning: &VehicleTuning) {
        let turn_rate = tuning.turn_rate_at(self.speed);

        if self.intents.is_turning() {
            self.turn_interpolation = (self.turn_interpolation + tuning.turn_acceleration).min(1.0);
        } else {
            self.turn_interpolation = (self.turn_interpolation - tuning.turn_deceleration).max(0.0);
        }

        if self.turn_interpolation > 0.0 {
            let turn_amount = turn_rate * self.turn_interpolation;
            if self.intents.turn_left {
                self.heading += turn_amount;
            }
            if self.intents.turn_right {
                self.heading -= turn_amount;
            }
        }
        self.heading = normalize_degrees(self.heading);
    }

    /// Stop dead and drop both longitudinal intents
    pub fn brake(&mut self) {
        debug!("Brake applied at speed {:.3}", self.speed);
        self.speed = 0.0;
        self.intents.forward = false;
        self.intents.backward = false;
    }

    /// Return to the starting pose with every intent released
    pub fn reset(&mut self) {
        debug!(
            "Vehicle reset from ({:.1}, {:.1}) heading {:.0}",
            self.position.x, self.position.z, self.heading
        );
        *self = Self::new();
    }
}
