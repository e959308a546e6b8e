//! Read-only view of the simulation handed to renderers

use super::signal::SignalColor;
use super::trees::{back_to_front, TreeInstance};
use super::types::{HeadingLabel, Position};

/// A settled state between two ticks
#[derive(Debug, Clone, Copy)]
pub struct SimSnapshot<'a> {
    pub tick: u64,
    pub position: Position,
    pub heading: f32,
    pub heading_label: HeadingLabel,
    pub speed: f32,
    pub camera_offset: Position,
    pub north_south_signal: SignalColor,
    pub west_east_signal: SignalColor,
    pub trees: &'a [TreeInstance],
}

impl SimSnapshot<'_> {
    /// The single-line heads-up display text
    pub fn hud_line(&self) -> String {
        format!(
            "Speed: {:.2} Direction: {} Heading: ({} Position: ({:.1}, {:.1})",
            self.speed, self.heading as i32, self.heading_label, self.position.x, self.position.z
        )
    }

    /// Trees in back-to-front draw order (a local copy)
    pub fn trees_back_to_front(&self) -> Vec<TreeInstance> {
        back_to_front(self.trees)
    }
}
