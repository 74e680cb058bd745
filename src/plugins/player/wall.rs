//! Wall slide and wall jump.
//!
//! ```text
//!             sliding (every frame)
//!   Idle ───────────────────────────▶ GraceWindow ◀──────┐
//!    ▲                                 │  counter -= dt   │ sliding again
//!    │ counter <= 0                    │  jump edge       │ (cancels expire)
//!    └─────────────────────────────────┤  && counter > 0  │
//!                                      ▼                  │
//!                                  JumpActive ────────────┘
//!                                      │ expire deadline
//!                                      ▼
//!                                    Idle
//! ```
//!
//! While a wall jump is active it owns the velocity: the run driver and the
//! facing flip stand down until the deadline passes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::Player;
use super::input::{Action, ActionInput};
use super::state::MovementState;

/// Input points away from the wall the character is facing into.
///
/// Uses the facing flag as it stands before this frame's flip.
#[inline]
pub fn moving_away_from_wall(horizontal: f32, facing_right: bool) -> bool {
    (horizontal > 0.0 && !facing_right) || (horizontal < 0.0 && facing_right)
}

/// Recompute `is_wall_sliding` and slow the fall while it holds.
pub fn slide(state: &mut MovementState, velocity: &mut Vec2, slide_speed: f32) {
    let contacts = state.contacts;
    state.is_wall_sliding = contacts.walled
        && !contacts.grounded
        && !moving_away_from_wall(state.horizontal_input, state.facing_right);

    if state.is_wall_sliding {
        velocity.y = velocity.y.max(-slide_speed);
    }
}

/// One frame of the wall-jump state machine. Returns the launch direction
/// when a wall jump starts this frame.
pub fn step_wall_jump(
    state: &mut MovementState,
    velocity: &mut Vec2,
    scale_x: &mut f32,
    jump_pressed: bool,
    now: f64,
    dt: f32,
    tunables: &Tunables,
) -> Option<f32> {
    let wall_jump = &mut state.wall_jump;

    if state.is_wall_sliding {
        wall_jump.active = false;
        wall_jump.direction = -scale_x.signum();
        wall_jump.counter = tunables.wall_jump_grace;
        wall_jump.expire.cancel();
    } else {
        wall_jump.counter -= dt;
    }

    if !(jump_pressed && wall_jump.counter > 0.0) {
        return None;
    }

    let direction = wall_jump.direction;
    wall_jump.active = true;
    wall_jump.counter = 0.0;
    wall_jump.expire.schedule(now, tunables.wall_jump_duration);
    *velocity = Vec2::new(
        direction * tunables.wall_jump_power.x,
        tunables.wall_jump_power.y,
    );

    let want_right = direction > 0.0;
    if want_right != state.facing_right {
        state.facing_right = want_right;
        *scale_x = -*scale_x;
    }

    Some(direction)
}

/// Poll the wall-jump deadline. Returns `true` on the poll that ends it.
pub fn expire(state: &mut MovementState, now: f64) -> bool {
    if state.wall_jump.expire.fire(now) {
        state.wall_jump.active = false;
        return true;
    }
    false
}

pub fn apply_wall_slide(
    tunables: Res<Tunables>,
    mut q_player: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut vel) in &mut q_player {
        if state.dash.is_dashing() {
            continue;
        }
        slide(&mut state, &mut vel.0, tunables.wall_slide_speed);
    }
}

/// The grace window decays with the frame delta; the expire deadline is set
/// on the fixed clock so the physics tick ends the override on time.
pub fn apply_wall_jump(
    time: Res<Time<Virtual>>,
    fixed: Res<Time<Fixed>>,
    input: Res<ActionInput>,
    tunables: Res<Tunables>,
    mut q_player: Query<(&mut MovementState, &mut LinearVelocity, &mut Transform), With<Player>>,
) {
    let now = fixed.elapsed_secs_f64();
    let dt = time.delta_secs();

    for (mut state, mut vel, mut tf) in &mut q_player {
        if state.dash.is_dashing() {
            continue;
        }
        let launched = step_wall_jump(
            &mut state,
            &mut vel.0,
            &mut tf.scale.x,
            input.just_pressed(Action::Jump),
            now,
            dt,
            &tunables,
        );
        if let Some(direction) = launched {
            debug!("wall jump: direction={direction}");
        }
    }
}

/// Runs at the top of both the frame and the physics tick so control goes
/// back to the run driver on the first tick past the deadline.
///
/// Both polls read the fixed clock. Inside `FixedUpdate` that is the time of
/// the tick being stepped, not the end of the frame.
pub fn expire_wall_jump(
    time: Res<Time<Fixed>>,
    mut q_player: Query<&mut MovementState, With<Player>>,
) {
    let now = time.elapsed_secs_f64();
    for mut state in &mut q_player {
        if expire(&mut state, now) {
            debug!("wall jump expired");
        }
    }
}
