//! Main simulation world that ties everything together
//!
//! `SimWorld` owns all mutable state: the vehicle, the signal controller
//! and the tree list placed at construction. A tick driver calls
//! `advance` at a fixed cadence; renderers read `snapshot` between ticks.

use anyhow::Result;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::camera::{view_rigs, ViewRig};
use super::config::SimConfig;
use super::scene::{signal_anchors, SignalPost, SIGNAL_POSTS, SURVEILLANCE_CAMERAS};
use super::script::{DriveScript, ScriptStep};
use super::signal::{SignalColor, SignalController};
use super::snapshot::SimSnapshot;
use super::trees::{place_trees, TreeInstance};
use super::types::{HeadingLabel, INTERSECTION_HALF_SIZE};
use super::vehicle::{Intent, SimVehicle};

/// The main simulation world
pub struct SimWorld {
    config: SimConfig,

    /// The user-controlled vehicle
    pub vehicle: SimVehicle,

    /// Shared controller for all four signal heads
    pub signals: SignalController,

    /// Decoration placed once at construction
    trees: Vec<TreeInstance>,

    /// Ticks advanced since construction
    tick: u64,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new_internal(SimConfig::default())
    }
}

impl SimWorld {
    fn new_internal(config: SimConfig) -> Self {
        let anchors = signal_anchors();
        let trees = match config.seed {
            Some(seed) => place_trees(&config.trees, &anchors, &mut StdRng::seed_from_u64(seed)),
            None => place_trees(&config.trees, &anchors, &mut rand::rng()),
        };

        Self {
            vehicle: SimVehicle::new(),
            signals: SignalController::new(config.signals),
            trees,
            tick: 0,
            config,
        }
    }

    /// Create a world from a validated configuration
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new_internal(config))
    }

    /// Create a world with default tuning and reproducible tree placement
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_internal(SimConfig::with_seed(seed))
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn trees(&self) -> &[TreeInstance] {
        &self.trees
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Simulated time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.tick * u64::from(self.config.tick_ms)
    }

    /// Latch or release one control intent
    pub fn set_intent(&mut self, intent: Intent, held: bool) {
        self.vehicle.set_intent(intent, held);
    }

    /// One-shot stop: zero speed, drop forward/backward
    pub fn brake(&mut self) {
        self.vehicle.brake();
    }

    /// One-shot return of the vehicle to its starting pose
    pub fn reset(&mut self) {
        self.vehicle.reset();
    }

    /// Advance the whole world by one tick
    pub fn advance(&mut self) {
        self.vehicle.advance(&self.config.vehicle);
        self.signals.advance(self.config.tick_ms);
        self.tick += 1;
    }

    /// Advance by `ticks` ticks with the current intents held
    pub fn run(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.advance();
        }
    }

    /// Play a drive script, calling `on_tick` after every tick
    pub fn run_script<F>(&mut self, script: &DriveScript, mut on_tick: F)
    where
        F: FnMut(&SimWorld),
    {
        for step in &script.steps {
            match *step {
                ScriptStep::Hold { intents, ticks } => {
                    debug!("Holding {:?} for {} ticks", intents, ticks);
                    self.set_intent(Intent::Forward, intents.forward);
                    self.set_intent(Intent::Backward, intents.backward);
                    self.set_intent(Intent::TurnLeft, intents.turn_left);
                    self.set_intent(Intent::TurnRight, intents.turn_right);
                    for _ in 0..ticks {
                        self.advance();
                        on_tick(self);
                    }
                }
                ScriptStep::Brake => self.brake(),
                ScriptStep::Reset => self.reset(),
            }
        }
    }

    /// Settled state for renderers
    pub fn snapshot(&self) -> SimSnapshot<'_> {
        let (north_south_signal, west_east_signal) = self.signals.colors();
        SimSnapshot {
            tick: self.tick,
            position: self.vehicle.position,
            heading: self.vehicle.heading,
            heading_label: self.vehicle.heading_label,
            speed: self.vehicle.speed,
            camera_offset: self.vehicle.camera_offset,
            north_south_signal,
            west_east_signal,
            trees: &self.trees,
        }
    }

    /// Camera rigs for the four viewports of a `width` x `height` window
    pub fn view_rigs(&self, width: i32, height: i32) -> [ViewRig; 4] {
        if width <= 0 || height <= 0 {
            warn!("Degenerate window size {}x{}", width, height);
        }
        view_rigs(
            width,
            height,
            &self.vehicle.position,
            &self.vehicle.camera_offset,
        )
    }

    /// Each signal post paired with the colour it currently shows
    pub fn signal_heads(&self) -> impl Iterator<Item = (&'static SignalPost, SignalColor)> + '_ {
        SIGNAL_POSTS
            .iter()
            .map(move |post| (post, self.signals.color(post.axis)))
    }

    /// Log the end-of-run report
    pub fn log_report(&self) {
        let snapshot = self.snapshot();
        info!("=== SIMULATION COMPLETE ===");
        info!(
            "Ticks: {} ({:.2}s simulated)",
            self.tick,
            self.elapsed_ms() as f32 / 1000.0
        );
        info!(
            "Final position: ({:.2}, {:.2})",
            snapshot.position.x, snapshot.position.z
        );
        info!(
            "Final heading: {:.1} ({})",
            snapshot.heading, snapshot.heading_label
        );
        info!("Final speed: {:.3}", snapshot.speed);
        info!(
            "Signals: north-south={} west-east={} (counter {} ms)",
            snapshot.north_south_signal,
            snapshot.west_east_signal,
            self.signals.counter_ms()
        );
        info!("Trees placed: {}", self.trees.len());
    }

    /// Print a summary of the current state
    pub fn print_summary(&self) {
        let snapshot = self.snapshot();
        println!("=== Simulation Summary (tick {}) ===", self.tick);
        println!("{}", snapshot.hud_line());

        println!("--- Vehicle ---");
        println!(
            "  Position: ({:.2}, {:.2}, {:.2})",
            snapshot.position.x, snapshot.position.y, snapshot.position.z
        );
        println!(
            "  Heading: {:.1} ({}), turn ramp {:.2}",
            snapshot.heading, snapshot.heading_label, self.vehicle.turn_interpolation
        );
        println!("  Speed: {:.3}", snapshot.speed);
        let intents = &self.vehicle.intents;
        if intents.is_idle() {
            println!("  Intents: none");
        } else {
            println!(
                "  Intents: forward={} backward={} left={} right={}",
                intents.forward, intents.backward, intents.turn_left, intents.turn_right
            );
        }
        println!(
            "  Camera offset: ({:.2}, {:.2}, {:.2})",
            snapshot.camera_offset.x, snapshot.camera_offset.y, snapshot.camera_offset.z
        );

        println!("--- Signals ---");
        println!(
            "  Phase {:?} at {} ms",
            self.signals.phase(),
            self.signals.counter_ms()
        );
        for (post, color) in self.signal_heads() {
            println!("  {} ({:?}): {}", post.name, post.axis, color);
        }

        println!("--- Scenery ---");
        println!("  Trees: {}", self.trees.len());
        for camera in SURVEILLANCE_CAMERAS.iter() {
            println!(
                "  Camera at ({:.1}, {:.1}) facing {:.0}",
                camera.position.x, camera.position.z, camera.yaw
            );
        }
    }

    /// Draw a top-down map of the area around the vehicle in the terminal
    ///
    /// North (+Z) is up and east (+X) to the right.
    pub fn draw_map(&self, half_extent: f32) {
        const COLS: usize = 61;
        const ROWS: usize = 31;

        let centre = self.vehicle.position;
        let min_x = centre.x - half_extent;
        let max_z = centre.z + half_extent;
        let col_size = half_extent * 2.0 / (COLS - 1) as f32;
        let row_size = half_extent * 2.0 / (ROWS - 1) as f32;

        let to_grid = |x: f32, z: f32| -> Option<(usize, usize)> {
            let col = ((x - min_x) / col_size).round();
            let row = ((max_z - z) / row_size).round();
            if col < 0.0 || row < 0.0 || col >= COLS as f32 || row >= ROWS as f32 {
                None
            } else {
                Some((row as usize, col as usize))
            }
        };

        let mut grid = vec![vec![' '; COLS]; ROWS];

        // Roads
        for (row, line) in grid.iter_mut().enumerate() {
            let z = max_z - row as f32 * row_size;
            for (col, cell) in line.iter_mut().enumerate() {
                let x = min_x + col as f32 * col_size;
                if x.abs() < INTERSECTION_HALF_SIZE || z.abs() < INTERSECTION_HALF_SIZE {
                    *cell = '.';
                }
            }
        }

        for tree in &self.trees {
            if let Some((row, col)) = to_grid(tree.x, tree.z) {
                grid[row][col] = 'T';
            }
        }

        for (post, color) in self.signal_heads() {
            if let Some((row, col)) = to_grid(post.position.x, post.position.z) {
                grid[row][col] = color.symbol();
            }
        }

        if let Some((row, col)) = to_grid(centre.x, centre.z) {
            grid[row][col] = match self.vehicle.heading_label {
                HeadingLabel::North => '^',
                HeadingLabel::East => '>',
                HeadingLabel::South => 'v',
                HeadingLabel::West => '<',
            };
        }

        println!("\n=== World Map ===");
        println!("Legend: ^>v<=Car, T=Tree, G/Y/R=Signal, .=Road");
        println!();
        for row in &grid {
            let line: String = row.iter().collect();
            println!("{}", line);
        }
        println!();
    }
}
