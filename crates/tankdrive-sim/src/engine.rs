//! Scene engine, the frame-driven core of the scene.
//!
//! `SceneEngine` owns the hecs world, drains queued commands and input at the
//! tick boundary, runs all systems with a fixed step, and produces
//! `SceneSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::World;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use tankdrive_core::commands::ControlCommand;
use tankdrive_core::constants::*;
use tankdrive_core::enums::{CameraId, Joint};
use tankdrive_core::events::SceneEvent;
use tankdrive_core::input::InputEvent;
use tankdrive_core::state::SceneSnapshot;
use tankdrive_core::types::{EnvironmentSettings, MaterialSettings, SimTime};
use tankdrive_path::ScenePath;

use crate::articulation::{Gun, Turret};
use crate::composer::CameraRig;
use crate::controls::ControlPanel;
use crate::input;
use crate::motion::MotionState;
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup::{self, TankSpawn};

/// Configuration for building a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub path: ScenePath,
    /// One entry per tank; the first is the primary tank.
    pub tanks: Vec<TankSpawn>,
    pub camera: CameraId,
    pub material: MaterialSettings,
    pub environment: EnvironmentSettings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: ScenePath::default(),
            tanks: vec![TankSpawn::default()],
            camera: CameraId::default(),
            material: MaterialSettings::default(),
            environment: EnvironmentSettings::default(),
        }
    }
}

/// The scene engine. Owns the ECS world and all simulation state.
pub struct SceneEngine {
    world: World,
    time: SimTime,
    path: ScenePath,
    controls: ControlPanel,
    camera: CameraRig,
    material: MaterialSettings,
    environment: EnvironmentSettings,
    primary: hecs::Entity,
    command_queue: VecDeque<ControlCommand>,
    events: Vec<SceneEvent>,
}

impl SceneEngine {
    /// Create a new scene from the given config.
    pub fn new(config: SceneConfig) -> Self {
        let mut world = World::new();

        let mut spawns = config.tanks;
        if spawns.is_empty() {
            warn!("scene config has no tanks, spawning one at the path start");
            spawns.push(TankSpawn::default());
        }
        let entities = world_setup::setup_scene(&mut world, &config.path, &spawns);
        let primary = entities[0];

        info!(
            path = ?config.path.kind(),
            tanks = entities.len(),
            "scene ready"
        );

        Self {
            world,
            time: SimTime::default(),
            path: config.path,
            controls: ControlPanel::default(),
            camera: CameraRig::new(config.camera),
            material: config.material,
            environment: config.environment,
            primary,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a control command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ControlCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ControlCommand>) {
        self.command_queue.extend(commands);
    }

    /// Queue a raw input event; bound keys become commands, the rest are dropped.
    pub fn queue_input(&mut self, event: InputEvent) {
        if let Some(command) = input::translate(&event) {
            self.queue_command(command);
        }
    }

    /// Advance the scene by one fixed step and return the resulting snapshot.
    pub fn tick(&mut self) -> SceneSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &SnapshotContext {
                time: &self.time,
                path: &self.path,
                controls: &self.controls,
                camera: &self.camera,
                material: &self.material,
                environment: &self.environment,
            },
            events,
        )
    }

    /// Move every tank `drive_speed * dt` along the path, regardless of the drive toggle.
    pub fn advance(&mut self, dt: f32) {
        systems::motion::run(
            &mut self.world,
            &self.path,
            dt,
            self.controls.drive_speed(),
            &mut self.events,
        );
    }

    /// Step every turret oscillator once.
    pub fn tick_turret(&mut self) {
        systems::articulation::run_turrets(
            &mut self.world,
            self.controls.turret_speed(),
            &mut self.events,
        );
    }

    /// Step every gun oscillator once.
    pub fn tick_gun(&mut self) {
        systems::articulation::run_guns(&mut self.world, self.controls.gun_speed(), &mut self.events);
    }

    /// Set the turret angle by hand on every tank, suspending its oscillation.
    pub fn set_turret_angle_manual(&mut self, degrees: f32) {
        let degrees = degrees.clamp(-TURRET_LIMIT_DEG, TURRET_LIMIT_DEG);
        systems::articulation::for_each_joint(&mut self.world, Joint::Turret, |a| {
            a.set_manual(degrees)
        });
    }

    /// Set the gun angle by hand on every tank, suspending its oscillation.
    pub fn set_gun_angle_manual(&mut self, degrees: f32) {
        let degrees = degrees.clamp(-GUN_LIMIT_DEG, GUN_LIMIT_DEG);
        systems::articulation::for_each_joint(&mut self.world, Joint::Gun, |a| {
            a.set_manual(degrees)
        });
    }

    /// Return motion, articulation and drive controls to their initial values.
    /// Camera, material and environment settings are kept.
    pub fn reset(&mut self) {
        self.controls = ControlPanel::default();
        systems::motion::reset(&mut self.world, &self.path);
        for joint in [Joint::Turret, Joint::Gun] {
            systems::articulation::for_each_joint(&mut self.world, joint, |a| a.reset());
        }
        self.events.push(SceneEvent::SimulationReset);
        info!(tick = self.time.tick, "simulation reset");
    }

    // --- Per-frame accessors for the primary tank ---

    pub fn current_position(&self) -> Vec3 {
        self.world
            .get::<&MotionState>(self.primary)
            .map(|motion| motion.position(&self.path))
            .unwrap_or_default()
    }

    /// Smoothed heading (radians).
    pub fn current_heading(&self) -> f32 {
        self.world
            .get::<&MotionState>(self.primary)
            .map(|motion| motion.heading())
            .unwrap_or_default()
    }

    /// Accumulated wheel spin (degrees).
    pub fn wheel_rotation_angle(&self) -> f32 {
        self.world
            .get::<&MotionState>(self.primary)
            .map(|motion| motion.wheel_rotation_deg())
            .unwrap_or_default()
    }

    /// Turret yaw (whole degrees).
    pub fn turret_angle(&self) -> f32 {
        self.world
            .get::<&Turret>(self.primary)
            .map(|turret| turret.0.angle())
            .unwrap_or_default()
    }

    /// Gun tilt (degrees).
    pub fn gun_angle(&self) -> f32 {
        self.world
            .get::<&Gun>(self.primary)
            .map(|gun| gun.0.angle())
            .unwrap_or_default()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn path(&self) -> &ScenePath {
        &self.path
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn camera(&self) -> CameraId {
        self.camera.active()
    }

    pub fn material(&self) -> &MaterialSettings {
        &self.material
    }

    pub fn environment(&self) -> &EnvironmentSettings {
        &self.environment
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single control command.
    fn handle_command(&mut self, command: ControlCommand) {
        debug!(?command, "control command");
        match command {
            ControlCommand::ResetSimulation => self.reset(),
            ControlCommand::SetDriving { enabled } => {
                self.controls.driving = enabled;
            }
            ControlCommand::SetDriveSpeed { speed } => {
                self.controls.set_drive_speed(speed);
            }
            ControlCommand::SetControlPoints { points } => {
                if !self.path.set_control_points(points) {
                    warn!("control points ignored: scene path is not a Bézier curve");
                }
            }
            ControlCommand::SetTurretAnimation { enabled } => {
                systems::articulation::for_each_joint(&mut self.world, Joint::Turret, |a| {
                    a.set_enabled(enabled)
                });
            }
            ControlCommand::SetTurretSpeed { speed } => {
                self.controls.set_turret_speed(speed);
            }
            ControlCommand::SetTurretAngle { degrees } => {
                self.set_turret_angle_manual(degrees);
            }
            ControlCommand::SetGunAnimation { enabled } => {
                systems::articulation::for_each_joint(&mut self.world, Joint::Gun, |a| {
                    a.set_enabled(enabled)
                });
            }
            ControlCommand::SetGunSpeed { speed } => {
                self.controls.set_gun_speed(speed);
            }
            ControlCommand::SetGunAngle { degrees } => {
                self.set_gun_angle_manual(degrees);
            }
            ControlCommand::SelectCamera { camera } => {
                if self.camera.select(camera) {
                    self.events.push(SceneEvent::CameraChanged { camera });
                }
            }
            ControlCommand::SetMaterial { settings } => {
                self.material = settings.clamped();
            }
            ControlCommand::SetEnvironmentMapping { enabled } => {
                self.environment.enabled = enabled;
            }
            ControlCommand::SetReflectivity { reflectivity } => {
                self.environment.reflectivity = reflectivity.clamp(0.0, 1.0);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Articulation (each gated by its own enable flag and override)
        self.tick_turret();
        self.tick_gun();
        // 2. Drive along the path
        if self.controls.driving {
            self.advance(DT);
        }
        // 3. Heading smoothing, every frame
        systems::motion::update_headings(&mut self.world, &self.path);
    }
}
