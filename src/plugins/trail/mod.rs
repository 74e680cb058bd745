//! Dash trail (render-only): fading afterimages dropped while `DashTrail` emits.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::player::{DashTrail, Player};

const GHOST_INTERVAL: f32 = 0.025;
const GHOST_LIFETIME: f32 = 0.2;
const GHOST_ALPHA: f32 = 0.5;

#[derive(Component, Debug)]
pub struct TrailGhost {
    timer: Timer,
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (emit_ghosts, fade_ghosts).run_if(in_state(GameState::InGame)),
    );
}

fn emit_ghosts(
    time: Res<Time>,
    mut commands: Commands,
    q_player: Query<(&Transform, &Sprite, &DashTrail), With<Player>>,
    mut since_last: Local<f32>,
) {
    let Ok((tf, sprite, trail)) = q_player.single() else {
        return;
    };
    if !trail.emitting {
        *since_last = GHOST_INTERVAL;
        return;
    }

    *since_last += time.delta_secs();
    if *since_last < GHOST_INTERVAL {
        return;
    }
    *since_last = 0.0;

    let mut ghost_tf = *tf;
    ghost_tf.translation.z -= 0.1;

    commands.spawn((
        TrailGhost {
            timer: Timer::from_seconds(GHOST_LIFETIME, TimerMode::Once),
        },
        Sprite {
            color: sprite.color.with_alpha(GHOST_ALPHA),
            custom_size: sprite.custom_size,
            ..default()
        },
        ghost_tf,
        DespawnOnExit(GameState::InGame),
    ));
}

fn fade_ghosts(
    time: Res<Time>,
    mut commands: Commands,
    mut q_ghosts: Query<(Entity, &mut TrailGhost, &mut Sprite)>,
) {
    for (e, mut ghost, mut sprite) in &mut q_ghosts {
        ghost.timer.tick(time.delta());
        if ghost.timer.is_finished() {
            commands.entity(e).despawn();
            continue;
        }
        let alpha = GHOST_ALPHA * ghost.timer.fraction_remaining();
        sprite.color = sprite.color.with_alpha(alpha);
    }
}
