//! Lighting plugin (Firefly) (render-only).
//!
//! One point light rides on the player and flares while the dash trail is on.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::{DashTrail, Player};

const LIGHT_RANGE: f32 = 14.0;
const DASH_LIGHT_RANGE: f32 = 20.0;

#[derive(Component)]
pub struct PlayerLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, follow_player_light.run_if(in_state(GameState::InGame)));
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("PlayerLight"),
        PlayerLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.92, 0.7),
            radius: LIGHT_RANGE,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player_light(
    q_player: Query<(&Transform, &DashTrail), (With<Player>, Without<PlayerLight>)>,
    mut q_light: Query<(&mut Transform, &mut PointLight2d), (With<PlayerLight>, Without<Player>)>,
) {
    let Ok((tf_player, trail)) = q_player.single() else {
        return;
    };
    let Ok((mut tf_light, mut light)) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
    light.radius = if trail.emitting { DASH_LIGHT_RANGE } else { LIGHT_RANGE };
}
