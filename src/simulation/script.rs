//! Scripted input for headless runs
//!
//! A script stands in for the keyboard: a comma-separated list of steps,
//! each either `intents:ticks` (for example `forward+left:30`, or
//! `coast:50` to hold nothing) or a one-shot `brake` / `reset`.

use anyhow::{bail, Context, Result};
use std::str::FromStr;

use super::vehicle::{Intent, Intents};

/// One step of a drive script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Hold exactly these intents for a number of ticks
    Hold { intents: Intents, ticks: u32 },
    Brake,
    Reset,
}

/// An ordered list of input steps
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriveScript {
    pub steps: Vec<ScriptStep>,
}

impl DriveScript {
    /// Ticks consumed by the whole script; one-shot steps take none
    pub fn total_ticks(&self) -> u32 {
        self.steps
            .iter()
            .map(|step| match step {
                ScriptStep::Hold { ticks, .. } => *ticks,
                ScriptStep::Brake | ScriptStep::Reset => 0,
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn parse_intent(name: &str) -> Result<Option<Intent>> {
    let intent = match name {
        "forward" | "f" => Some(Intent::Forward),
        "backward" | "b" => Some(Intent::Backward),
        "left" | "l" => Some(Intent::TurnLeft),
        "right" | "r" => Some(Intent::TurnRight),
        "coast" | "c" => None,
        other => bail!("Unknown intent '{}'", other),
    };
    Ok(intent)
}

impl FromStr for ScriptStep {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let step = s.trim().to_ascii_lowercase();
        match step.as_str() {
            "brake" => return Ok(ScriptStep::Brake),
            "reset" => return Ok(ScriptStep::Reset),
            "" => bail!("Empty script step"),
            _ => {}
        }

        let (names, ticks) = step
            .split_once(':')
            .with_context(|| format!("Step '{}' is missing a ':ticks' suffix", step))?;
        let ticks: u32 = ticks
            .trim()
            .parse()
            .with_context(|| format!("Invalid tick count in step '{}'", step))?;

        let mut intents = Intents::default();
        for name in names.split('+') {
            if let Some(intent) = parse_intent(name.trim())? {
                intents.set(intent, true);
            }
        }
        Ok(ScriptStep::Hold { intents, ticks })
    }
}

impl FromStr for DriveScript {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(DriveScript::default());
        }
        let steps = s
            .split(',')
            .enumerate()
            .map(|(index, step)| {
                step.parse::<ScriptStep>()
                    .with_context(|| format!("Bad drive script step {}", index + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(DriveScript { steps })
    }
}
