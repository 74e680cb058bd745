//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `banana_dash::game::configure_headless` installs the gameplay plugins.
//! - Time advances by a fixed 16ms per update so dash and wall-jump
//!   deadlines land on predictable frames.
//!
//! Without `InputPlugin` there is no keyboard, so tests drive the
//! `ActionInput` snapshot directly.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use avian2d::prelude::*;

use banana_dash::plugins::player::{Action, ActionInput, MovementState, Player};

pub const FRAME: Duration = Duration::from_millis(16);

pub fn app_headless() -> App {
    app_headless_with_frame(FRAME)
}

/// Same app, stepping `frame` of time per update.
pub fn app_headless_with_frame(frame: Duration) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    banana_dash::game::configure_headless(&mut app);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(frame));
    // `App::run` normally does this; plugins like avian register resources in `finish`.
    app.finish();
    app.cleanup();
    app
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// One frame with `action` freshly pressed, then release everything.
pub fn tap(app: &mut App, action: Action) {
    app.insert_resource(ActionInput::from_frames(&[], &[action]));
    app.update();
    app.insert_resource(ActionInput::default());
}

/// Hold `actions` with no edges until the next call.
pub fn hold(app: &mut App, actions: &[Action]) {
    app.insert_resource(ActionInput::from_frames(actions, actions));
}

/// Move the player's body and stop it.
pub fn teleport(app: &mut App, at: Vec2) {
    let world = app.world_mut();
    let mut q_player = world
        .query_filtered::<(&mut Position, &mut Transform, &mut LinearVelocity), With<Player>>();
    let (mut position, mut tf, mut vel) = q_player.single_mut(world).expect("one player");
    position.0 = at;
    tf.translation = at.extend(tf.translation.z);
    vel.0 = Vec2::ZERO;
}

pub fn player_motion(app: &mut App) -> (Vec2, Vec2, MovementState) {
    let world = app.world_mut();
    let mut q_player =
        world.query_filtered::<(&Position, &LinearVelocity, &MovementState), With<Player>>();
    let (position, vel, state) = q_player.single(world).expect("one player");
    (position.0, vel.0, state.clone())
}

/// Park the player against the left wall of Tutorial_1, high up, pushing
/// into it until it slides.
pub fn cling_to_left_wall(app: &mut App) {
    teleport(app, Vec2::new(-0.55, 8.0));
    hold(app, &[Action::Left]);
    run_frames(app, 4);
    assert!(player_motion(app).2.is_wall_sliding, "player should be sliding");
}
