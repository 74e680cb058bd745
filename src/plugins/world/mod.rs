//! World plugin: builds the current level's geometry, pickups and exit.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::bananas::BananaPickup;
use crate::plugins::levels::{CurrentLevel, LevelCatalog, LevelExit, LevelId};

const BANANA_RADIUS: f32 = 0.3;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_level);
}

fn spawn_level(mut commands: Commands, catalog: Res<LevelCatalog>, current: Res<CurrentLevel>) {
    let Some(layout) = catalog.get(current.index) else {
        warn!("no layout for level {}", current.index);
        return;
    };

    let mut spawn_solid = |name: String, rect: Rect, layer: Layer, color: Color| {
        let size = rect.size();
        commands.spawn((
            Name::new(name),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(rect.center().extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Friction::new(0.0),
            CollisionLayers::new(layer, [Layer::Player]),
            DespawnOnExit(GameState::InGame),
        ));
    };

    for (i, rect) in layout.ground.iter().enumerate() {
        spawn_solid(format!("Ground{i}"), *rect, Layer::Ground, Color::srgb(0.32, 0.45, 0.30));
    }
    for (i, rect) in layout.walls.iter().enumerate() {
        spawn_solid(format!("Wall{i}"), *rect, Layer::Wall, Color::srgb(0.30, 0.30, 0.38));
    }

    let trigger_layers = CollisionLayers::new(Layer::Trigger, [Layer::Player]);

    for (i, pos) in layout.bananas.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Banana{i}")),
            BananaPickup,
            Sprite {
                color: Color::srgb(1.0, 0.9, 0.2),
                custom_size: Some(Vec2::splat(BANANA_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_translation(pos.extend(0.5)),
            RigidBody::Static,
            Collider::circle(BANANA_RADIUS),
            Sensor,
            trigger_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }

    if let Some((rect, target)) = layout.exit {
        let size = rect.size();
        commands.spawn((
            Name::new("LevelExit"),
            LevelExit {
                target: LevelId::from(target),
            },
            Sprite {
                color: Color::srgba(0.6, 0.9, 1.0, 0.35),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(rect.center().extend(0.2)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            trigger_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }

    info!("level '{}' built", layout.name);
}
