//! Entity spawn factories for setting up the scene world.

use hecs::World;
use serde::{Deserialize, Serialize};

use tankdrive_core::components::Tank;
use tankdrive_path::Curve;

use crate::articulation::{Gun, Turret};
use crate::motion::MotionState;

/// Where a tank starts on the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TankSpawn {
    pub start_parameter: f32,
}

/// Spawn every configured tank, numbering them in order. Returns the entities.
pub fn setup_scene<C: Curve + ?Sized>(
    world: &mut World,
    path: &C,
    spawns: &[TankSpawn],
) -> Vec<hecs::Entity> {
    spawns
        .iter()
        .zip(0u32..)
        .map(|(spawn, tank_id)| spawn_tank(world, path, tank_id, spawn.start_parameter))
        .collect()
}

/// Spawn one tank at rest: articulations centred, animation off.
pub fn spawn_tank<C: Curve + ?Sized>(
    world: &mut World,
    path: &C,
    tank_id: u32,
    start_parameter: f32,
) -> hecs::Entity {
    world.spawn((
        Tank {
            tank_id,
            start_parameter,
        },
        MotionState::starting_at(path, start_parameter),
        Turret::default(),
        Gun::default(),
    ))
}
