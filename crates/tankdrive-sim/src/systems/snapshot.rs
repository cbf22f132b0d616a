//! Snapshot system: queries the world and builds a complete SceneSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use tankdrive_core::components::Tank;
use tankdrive_core::constants::{LIGHT_COLOR, LIGHT_POSITION};
use tankdrive_core::events::SceneEvent;
use tankdrive_core::state::*;
use tankdrive_core::types::{EnvironmentSettings, MaterialSettings, SimTime};
use tankdrive_path::ScenePath;

use crate::articulation::{Gun, Turret};
use crate::composer::{compose_tank, CameraRig, TankPose};
use crate::controls::ControlPanel;
use crate::motion::MotionState;

/// Everything outside the world that goes into a snapshot.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub path: &'a ScenePath,
    pub controls: &'a ControlPanel,
    pub camera: &'a CameraRig,
    pub material: &'a MaterialSettings,
    pub environment: &'a EnvironmentSettings,
}

/// Build a complete SceneSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    events: Vec<SceneEvent>,
) -> SceneSnapshot {
    SceneSnapshot {
        time: *ctx.time,
        path: ctx.path.kind(),
        controls: ctx.controls.view(),
        tanks: build_tanks(world, ctx.path),
        camera: ctx.camera.view(),
        material: *ctx.material,
        environment: EnvironmentView {
            settings: *ctx.environment,
            light_position: LIGHT_POSITION,
            light_color: LIGHT_COLOR,
        },
        events,
    }
}

/// Build TankView list ordered by tank id.
fn build_tanks(world: &World, path: &ScenePath) -> Vec<TankView> {
    let mut tanks: Vec<TankView> = world
        .query::<(&Tank, &MotionState, &Turret, &Gun)>()
        .iter()
        .map(|(_entity, (tank, motion, turret, gun))| {
            let pose = TankPose {
                position: motion.position(path),
                heading: motion.heading(),
                wheel_rotation_deg: motion.wheel_rotation_deg(),
                turret_deg: turret.0.angle(),
                gun_deg: gun.0.angle(),
            };
            TankView {
                tank_id: tank.tank_id,
                parameter: motion.parameter(),
                position: pose.position,
                heading: pose.heading,
                wheel_rotation_deg: pose.wheel_rotation_deg,
                turret: turret.0.view(),
                gun: gun.0.view(),
                transforms: compose_tank(&pose),
            }
        })
        .collect();
    tanks.sort_by_key(|t| t.tank_id);
    tanks
}
