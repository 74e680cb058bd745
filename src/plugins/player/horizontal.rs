//! Run driver: horizontal intent, facing, and the physics-tick velocity write.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::Player;
use super::input::ActionInput;
use super::state::{MovementState, VelocityOwner};

/// Latch this frame's run intent and turn to face it.
///
/// Facing is frozen while a wall jump holds the velocity.
pub fn steer(state: &mut MovementState, horizontal: f32) {
    state.horizontal_input = horizontal;
    if !state.wall_jump.active && horizontal != 0.0 {
        state.facing_right = horizontal > 0.0;
    }
}

/// Physics-tick write. Returns whether the velocity was written.
pub fn drive(state: &MovementState, velocity: &mut Vec2, run_speed: f32) -> bool {
    if state.velocity_owner() != VelocityOwner::Driver {
        return false;
    }
    velocity.x = state.horizontal_input * run_speed;
    true
}

pub fn update_facing(
    input: Res<ActionInput>,
    mut q_player: Query<&mut MovementState, With<Player>>,
) {
    for mut state in &mut q_player {
        if state.dash.is_dashing() {
            continue;
        }
        steer(&mut state, input.horizontal());
    }
}

pub fn drive_horizontal(
    tunables: Res<Tunables>,
    mut q_player: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut vel) in &mut q_player {
        drive(state, &mut vel.0, tunables.run_speed);
    }
}
