//! Manual level reset.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::policy::{DashCooldownMode, DashPolicy};
use crate::plugins::levels::RequestReset;

use super::Player;
use super::input::{Action, ActionInput};
use super::state::MovementState;

/// In `Flagged` cooldown mode the reset shares the `can_dash` flag.
pub fn reset_allowed(state: &MovementState, policy: &DashPolicy) -> bool {
    match policy.cooldown_mode {
        DashCooldownMode::Immediate => true,
        DashCooldownMode::Flagged => state.dash.is_ready(),
    }
}

pub fn handle_reset(
    input: Res<ActionInput>,
    policy: Res<DashPolicy>,
    q_player: Query<&MovementState, With<Player>>,
    mut writer: MessageWriter<RequestReset>,
) {
    if !input.just_pressed(Action::Reset) {
        return;
    }
    let Ok(state) = q_player.single() else {
        return;
    };
    if state.dash.is_dashing() || !reset_allowed(state, &policy) {
        return;
    }
    writer.write(RequestReset);
}
