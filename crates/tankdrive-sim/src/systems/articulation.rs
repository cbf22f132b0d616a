//! Turret and gun oscillation.

use hecs::World;

use tankdrive_core::components::Tank;
use tankdrive_core::enums::Joint;
use tankdrive_core::events::SceneEvent;

use crate::articulation::{Articulation, Gun, Turret};

/// Step every turret by `speed`. Disabled or overridden turrets stay put.
pub fn run_turrets(world: &mut World, speed: f32, events: &mut Vec<SceneEvent>) {
    for (_entity, (tank, turret)) in world.query_mut::<(&Tank, &mut Turret)>() {
        if turret.0.tick(speed) {
            events.push(SceneEvent::JointReversed {
                tank_id: tank.tank_id,
                joint: Joint::Turret,
                angle: turret.0.angle(),
            });
        }
    }
}

/// Step every gun by `speed`. Disabled or overridden guns stay put.
pub fn run_guns(world: &mut World, speed: f32, events: &mut Vec<SceneEvent>) {
    for (_entity, (tank, gun)) in world.query_mut::<(&Tank, &mut Gun)>() {
        if gun.0.tick(speed) {
            events.push(SceneEvent::JointReversed {
                tank_id: tank.tank_id,
                joint: Joint::Gun,
                angle: gun.0.angle(),
            });
        }
    }
}

/// Apply `f` to the articulation of `joint` on every tank.
pub fn for_each_joint(world: &mut World, joint: Joint, mut f: impl FnMut(&mut Articulation)) {
    match joint {
        Joint::Turret => {
            for (_entity, turret) in world.query_mut::<&mut Turret>() {
                f(&mut turret.0);
            }
        }
        Joint::Gun => {
            for (_entity, gun) in world.query_mut::<&mut Gun>() {
                f(&mut gun.0);
            }
        }
    }
}
