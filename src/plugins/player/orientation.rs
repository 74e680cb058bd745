//! Sprite mirroring from the facing flag.

use bevy::prelude::*;

use super::Player;
use super::state::MovementState;

/// Bring the horizontal scale sign in line with `facing_right`. Returns
/// whether the scale was negated.
pub fn flip(facing_right: bool, scale_x: &mut f32) -> bool {
    let mirrored = *scale_x < 0.0;
    if facing_right == mirrored {
        *scale_x = -*scale_x;
        return true;
    }
    false
}

/// Skipped while a wall jump owns the orientation.
pub fn flip_orientation(mut q_player: Query<(&MovementState, &mut Transform), With<Player>>) {
    for (state, mut tf) in &mut q_player {
        if state.dash.is_dashing() || state.wall_jump.active {
            continue;
        }
        // Compare first so change detection only fires on an actual flip.
        if state.facing_right == (tf.scale.x < 0.0) {
            flip(state.facing_right, &mut tf.scale.x);
        }
    }
}
