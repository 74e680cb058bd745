//! Player plugin: the platformer movement controller.
//!
//! Pipeline:
//! - Update (frame, variable dt): sample input once, then run the
//!   sub-controllers in a fixed order against the cached contacts.
//! - FixedUpdate (physics tick): poll the wall-jump deadline, then let the
//!   run driver write the horizontal velocity if it owns it.
//!
//! ```text
//! Update:      sample_input -> finish_dash -> expire_wall_jump -> probe_contacts
//!              -> update_facing -> apply_jump -> handle_reset -> start_dash
//!              -> apply_wall_slide -> apply_wall_jump -> flip_orientation
//! FixedUpdate: expire_wall_jump -> drive_horizontal
//! ```
//!
//! A started dash suspends every later frame step and the physics-tick driver
//! until it ends.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{
    layers::Layer,
    policy::{BananaPersistence, DashPolicy},
    state::GameState,
    tunables::Tunables,
};
use crate::plugins::bananas::{Bananas, CarriedBananas};
use crate::plugins::levels::{CurrentLevel, LevelCatalog};

pub mod dash;
pub mod delay;
pub mod horizontal;
pub mod input;
pub mod jump;
pub mod orientation;
pub mod probe;
pub mod reset;
pub mod state;
pub mod wall;

pub use dash::DashTrail;
pub use input::{Action, ActionInput};
pub use probe::ContactProbe;
pub use state::{MovementState, VelocityOwner};

/// Body size in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.6);

#[derive(Component, Debug)]
pub struct Player;

/// The frame-rate half of the controller. Level and banana consumers order
/// themselves after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerFrameSystems;

pub fn plugin(app: &mut App) {
    app.init_resource::<ActionInput>()
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (
                input::sample_input,
                dash::finish_dash,
                wall::expire_wall_jump,
                probe::probe_contacts,
                horizontal::update_facing,
                jump::apply_jump,
                reset::handle_reset,
                dash::start_dash,
                wall::apply_wall_slide,
                wall::apply_wall_jump,
                orientation::flip_orientation,
            )
                .chain()
                .in_set(PlayerFrameSystems)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedUpdate,
            (wall::expire_wall_jump, horizontal::drive_horizontal)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

/// Starting gate: a full stock, or whatever was carried over from the last
/// level when the policy keeps it.
pub fn starting_bananas(
    tunables: &Tunables,
    policy: &DashPolicy,
    carried: Option<Bananas>,
) -> Bananas {
    match (policy.persistence, carried) {
        (BananaPersistence::Persist, Some(carried)) => carried,
        _ => Bananas::full(tunables.starting_bananas),
    }
}

fn spawn(
    mut commands: Commands,
    tunables: Res<Tunables>,
    policy: Res<DashPolicy>,
    catalog: Res<LevelCatalog>,
    current: Res<CurrentLevel>,
    mut carried: ResMut<CarriedBananas>,
) {
    let spawn_at = catalog
        .get(current.index)
        .map_or(Vec2::ZERO, |layout| layout.spawn);

    let layers = CollisionLayers::new(Layer::Player, [Layer::Ground, Layer::Wall, Layer::Trigger]);

    commands.spawn((
        (
            Name::new("Player"),
            Player,
            MovementState::default(),
            ContactProbe {
                ground_anchor: Vec2::new(0.0, -PLAYER_SIZE.y * 0.5),
                wall_anchor: Vec2::new(PLAYER_SIZE.x * 0.5 + 0.05, 0.0),
            },
            starting_bananas(&tunables, &policy, carried.0.take()),
            DashTrail::default(),
        ),
        Sprite {
            color: Color::srgb(0.95, 0.82, 0.25),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(spawn_at.extend(1.0)),
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::ZERO,
            GravityScale(tunables.player_gravity_scale),
            Friction::new(0.0),
            layers,
            CollisionEventsEnabled,
            TranslationInterpolation,
        ),
        DespawnOnExit(GameState::InGame),
    ));

    info!("player spawned at {spawn_at}");
}
