mod common;

use avian2d::prelude::*;
use bevy::prelude::*;

use banana_dash::common::state::GameState;
use banana_dash::plugins::bananas::{BananaPickup, Bananas};
use banana_dash::plugins::levels::{CurrentLevel, LevelId, LoadLevel};
use banana_dash::plugins::player::Player;

fn player_bananas(app: &mut App) -> Bananas {
    *app.world_mut()
        .query_filtered::<&Bananas, With<Player>>()
        .single(app.world())
        .expect("one player")
}

#[test]
fn boots_into_first_level() {
    let mut app = common::app_headless();
    common::run_frames(&mut app, 3);

    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::InGame);
    assert_eq!(app.world().resource::<CurrentLevel>().index, 0);
    assert_eq!(player_bananas(&mut app), Bananas::full(3));

    let smoothed = app
        .world_mut()
        .query_filtered::<(), (With<Player>, With<TranslationInterpolation>)>()
        .iter(app.world())
        .count();
    assert_eq!(smoothed, 1);
}

#[test]
fn level_load_rebuilds_world() {
    let mut app = common::app_headless();
    common::run_frames(&mut app, 2);

    app.world_mut().write_message(LoadLevel {
        level: LevelId::from("Tutorial_3"),
    });
    common::run_frames(&mut app, 4);

    assert_eq!(app.world().resource::<CurrentLevel>().index, 2);
    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::InGame);

    let world = app.world_mut();
    assert_eq!(world.query::<&Player>().iter(world).count(), 1);
    assert_eq!(world.query::<&BananaPickup>().iter(world).count(), 1);
}
