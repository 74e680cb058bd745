//! Levels plugin: which level is loaded and how to get to another one.
//!
//! Loading is message driven. Anything may write `LoadLevel`; the loader is
//! the single consumer and performs the transition by bouncing through
//! `GameState::Loading`, which tears down every `DespawnOnExit(InGame)`
//! entity and lets `OnEnter(InGame)` rebuild the level and the player.
//!
//! ```text
//! reset input ─▶ RequestReset ─▶ request_reset ─┐
//! dash with no bananas ─────────────────────────┼─▶ LoadLevel ─▶ load_requested_level
//! CollisionStart(player, LevelExit) ─▶ ─────────┘                 │
//!                                                   InGame ─▶ Loading ─▶ InGame
//! ```

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::{
    policy::{BananaPersistence, DashPolicy},
    state::GameState,
};
use crate::plugins::bananas::{Bananas, CarriedBananas};
use crate::plugins::player::{Player, PlayerFrameSystems};

pub mod layouts;

pub use layouts::LevelLayout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelId {
    Index(usize),
    Name(String),
}

impl From<&str> for LevelId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct LoadLevel {
    pub level: LevelId,
}

/// Same as pressing the reset key.
#[derive(Message, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestReset;

#[derive(Resource, Debug, Clone)]
pub struct LevelCatalog {
    layouts: Vec<LevelLayout>,
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::new(layouts::builtin())
    }
}

impl LevelCatalog {
    pub fn new(layouts: Vec<LevelLayout>) -> Self {
        Self { layouts }
    }

    pub fn get(&self, index: usize) -> Option<&LevelLayout> {
        self.layouts.get(index)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn resolve(&self, id: &LevelId) -> Option<usize> {
        match id {
            LevelId::Index(i) => (*i < self.layouts.len()).then_some(*i),
            LevelId::Name(name) => self.layouts.iter().position(|l| l.name == name),
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentLevel {
    pub index: usize,
}

impl CurrentLevel {
    /// Reload this level.
    pub fn reload(&self) -> LoadLevel {
        LoadLevel {
            level: LevelId::Index(self.index),
        }
    }
}

/// Exit region. Touching it as the player loads `target`.
#[derive(Component, Debug, Clone)]
pub struct LevelExit {
    pub target: LevelId,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<LevelCatalog>()
        .init_resource::<CurrentLevel>()
        .add_message::<LoadLevel>()
        .add_message::<RequestReset>()
        .add_systems(OnEnter(GameState::Loading), finish_loading)
        .add_systems(
            Update,
            (request_reset, load_requested_level)
                .chain()
                .after(PlayerFrameSystems)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            detect_exits
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Entry point equivalent to the reset key.
pub fn request_reset_now(world: &mut World) {
    world.write_message(RequestReset);
}

pub fn request_reset(
    catalog: Res<LevelCatalog>,
    current: Res<CurrentLevel>,
    mut reader: MessageReader<RequestReset>,
    mut writer: MessageWriter<LoadLevel>,
) {
    if reader.read().count() == 0 {
        return;
    }
    let respawn = catalog
        .get(current.index)
        .map_or(current.index, |layout| layout.respawn);
    writer.write(LoadLevel {
        level: LevelId::Index(respawn),
    });
}

pub fn detect_exits(
    mut collisions: MessageReader<CollisionStart>,
    q_player: Query<(), With<Player>>,
    q_exit: Query<&LevelExit>,
    mut writer: MessageWriter<LoadLevel>,
) {
    for ev in collisions.read() {
        let exit = if q_player.contains(ev.collider1) {
            q_exit.get(ev.collider2)
        } else if q_player.contains(ev.collider2) {
            q_exit.get(ev.collider1)
        } else {
            continue;
        };

        if let Ok(exit) = exit {
            info!("exit reached, loading {:?}", exit.target);
            writer.write(LoadLevel {
                level: exit.target.clone(),
            });
        }
    }
}

/// The last valid request of the frame wins.
#[allow(clippy::too_many_arguments)]
pub fn load_requested_level(
    catalog: Res<LevelCatalog>,
    policy: Res<DashPolicy>,
    mut current: ResMut<CurrentLevel>,
    mut carried: ResMut<CarriedBananas>,
    mut next_state: ResMut<NextState<GameState>>,
    mut reader: MessageReader<LoadLevel>,
    q_bananas: Query<&Bananas, With<Player>>,
) {
    let mut target = None;
    for request in reader.read() {
        match catalog.resolve(&request.level) {
            Some(index) => target = Some(index),
            None => warn!("unknown level {:?}, ignoring", request.level),
        }
    }
    let Some(index) = target else {
        return;
    };

    carried.0 = match policy.persistence {
        BananaPersistence::Persist => q_bananas.single().ok().copied(),
        BananaPersistence::ResetOnLoad => None,
    };

    current.index = index;
    next_state.set(GameState::Loading);

    let name = catalog.get(index).map_or("?", |layout| layout.name);
    info!("loading level {index} ({name})");
}

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}
