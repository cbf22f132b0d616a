//! Path following and heading smoothing.

use hecs::World;

use tankdrive_core::components::Tank;
use tankdrive_core::events::SceneEvent;
use tankdrive_path::Curve;

use crate::motion::MotionState;

/// Advance every tank by `speed * dt` along the path.
pub fn run<C: Curve + ?Sized>(
    world: &mut World,
    path: &C,
    dt: f32,
    speed: f32,
    events: &mut Vec<SceneEvent>,
) {
    for (_entity, (tank, motion)) in world.query_mut::<(&Tank, &mut MotionState)>() {
        if motion.advance(path, dt, speed) {
            events.push(SceneEvent::LapCompleted {
                tank_id: tank.tank_id,
            });
        }
    }
}

/// Filter every tank's heading toward the path direction.
/// Runs each tick whether or not the tanks are driving.
pub fn update_headings<C: Curve + ?Sized>(world: &mut World, path: &C) {
    for (_entity, motion) in world.query_mut::<&mut MotionState>() {
        motion.update_heading(path);
    }
}

/// Return every tank to its spawn parameter.
pub fn reset<C: Curve + ?Sized>(world: &mut World, path: &C) {
    for (_entity, (tank, motion)) in world.query_mut::<(&Tank, &mut MotionState)>() {
        motion.reset(path, tank.start_parameter);
    }
}
