//! Ground jump with early-release cutoff.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::Player;
use super::input::{Action, ActionInput};
use super::state::{Contacts, MovementState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpEvent {
    Launched,
    /// Upward velocity was scaled down by the cut factor.
    Cut,
}

pub fn jump(
    input: &ActionInput,
    contacts: Contacts,
    velocity: &mut Vec2,
    tunables: &Tunables,
) -> Option<JumpEvent> {
    if input.just_pressed(Action::Jump) && contacts.grounded {
        velocity.y = tunables.jump_power;
        return Some(JumpEvent::Launched);
    }

    if input.just_released(Action::Jump) && velocity.y > 0.0 {
        velocity.y *= tunables.jump_cut;
        return Some(JumpEvent::Cut);
    }

    None
}

pub fn apply_jump(
    input: Res<ActionInput>,
    tunables: Res<Tunables>,
    mut q_player: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut vel) in &mut q_player {
        if state.dash.is_dashing() {
            continue;
        }
        if let Some(event) = jump(&input, state.contacts, &mut vel.0, &tunables) {
            debug!("jump: {event:?}, vy={}", vel.y);
        }
    }
}
