//! Camera plugin (render-only).
//!
//! The world is measured in units, so the orthographic projection is scaled
//! down by `pixels_per_unit`. The follow uses disjoint queries:
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera (snapped to the player on first follow)
//! PostUpdate:      follow_player, before transform propagation
//! ```

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::player::Player;

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
    snapped: bool,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / tunables.pixels_per_unit,
            ..OrthographicProjection::default_2d()
        }),
        MainCamera {
            responsiveness: 5.0,
            snapped: false,
        },
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Exponential smoothing toward the player; the first frame snaps so a
/// reload does not pan in from the origin.
fn follow_player(
    time: Res<Time>,
    // Disjointness proof: Player entities are not MainCamera entities.
    q_player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    // Disjointness proof: MainCamera entities are not Player entities.
    mut q_cam: Query<(&mut Transform, &mut MainCamera), Without<Player>>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok((mut tf_cam, mut cam)) = q_cam.single_mut() else {
        return;
    };

    let target = tf_player.translation.truncate();
    let alpha = if cam.snapped {
        1.0 - (-cam.responsiveness * time.delta_secs()).exp()
    } else {
        cam.snapped = true;
        1.0
    };

    let current = tf_cam.translation.truncate();
    let next = current + (target - current) * alpha;
    tf_cam.translation.x = next.x;
    tf_cam.translation.y = next.y;
}
