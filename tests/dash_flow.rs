mod common;

use avian2d::prelude::*;
use bevy::prelude::*;

use banana_dash::common::policy::{DashPolicy, DashResourceMode};
use banana_dash::plugins::bananas::Bananas;
use banana_dash::plugins::levels::CurrentLevel;
use banana_dash::plugins::player::{Action, MovementState, Player};

fn player(app: &mut App) -> (Bananas, Vec2, bool) {
    let world = app.world_mut();
    let mut q_player =
        world.query_filtered::<(&Bananas, &LinearVelocity, &MovementState), With<Player>>();
    let (bananas, vel, state) = q_player.single(world).expect("one player");
    (*bananas, vel.0, state.dash.is_dashing())
}

#[test]
fn dash_spends_banana_and_overrides_velocity() {
    let mut app = common::app_headless();
    common::run_frames(&mut app, 2);

    common::tap(&mut app, Action::Dash);

    let (bananas, vel, dashing) = player(&mut app);
    assert_eq!(bananas.count(), 2);
    assert!(dashing);
    assert_eq!(vel, Vec2::new(15.0, 0.0));

    // 0.2s of dash at 16ms per frame.
    common::run_frames(&mut app, 15);
    let (_, _, dashing) = player(&mut app);
    assert!(!dashing);
}

#[test]
fn reset_restores_stock() {
    let mut app = common::app_headless();
    common::run_frames(&mut app, 2);

    common::tap(&mut app, Action::Dash);
    common::run_frames(&mut app, 15);
    assert_eq!(player(&mut app).0.count(), 2);

    common::tap(&mut app, Action::Reset);
    common::run_frames(&mut app, 3);

    assert_eq!(app.world().resource::<CurrentLevel>().index, 0);
    assert_eq!(player(&mut app).0, Bananas::full(3));
}

#[test]
fn dashing_dry_reloads_when_configured() {
    let mut app = common::app_headless();
    app.insert_resource(DashPolicy {
        resource_mode: DashResourceMode::ConsumingWithReload,
        ..default()
    });
    common::run_frames(&mut app, 2);

    for _ in 0..3 {
        common::tap(&mut app, Action::Dash);
        common::run_frames(&mut app, 15);
    }
    assert_eq!(player(&mut app).0.count(), 0);

    common::tap(&mut app, Action::Dash);
    common::run_frames(&mut app, 3);

    assert_eq!(player(&mut app).0, Bananas::full(3));
}
