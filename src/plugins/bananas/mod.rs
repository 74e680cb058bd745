//! Bananas plugin: the consumable dash charges.
//!
//! The count lives on the player (`Bananas`). Everything outside this
//! module talks to it through messages:
//! - `BananaPickedUp` in: a pickup was collected.
//! - `BananaCountChanged` out: the display should show a new count.
//!
//! ```text
//! FixedPostUpdate: CollisionStart(player, pickup) -> collect_pickups -> BananaPickedUp
//! Update:          BananaPickedUp -> apply_pickups -> BananaCountChanged
//!                  Added<Bananas> -> announce_new_gates -> BananaCountChanged
//! ```

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::{policy::DashPolicy, state::GameState};
use crate::plugins::player::{Player, PlayerFrameSystems};

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bananas {
    count: u32,
    cap: u32,
}

/// Result of paying for a dash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashCharge {
    Spent { remaining: u32 },
    /// There was nothing to spend. The count is left at zero.
    Depleted,
}

impl Bananas {
    pub fn new(count: u32, cap: u32) -> Self {
        Self { count, cap }
    }

    pub fn full(cap: u32) -> Self {
        Self::new(cap, cap)
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn cap(&self) -> u32 {
        self.cap
    }

    pub fn spend(&mut self) -> DashCharge {
        match self.count.checked_sub(1) {
            Some(remaining) => {
                self.count = remaining;
                DashCharge::Spent { remaining }
            }
            None => DashCharge::Depleted,
        }
    }

    /// One pickup: +1 count, and +1 cap when the cap grows with pickups.
    /// The count is not clamped to the cap.
    pub fn refill(&mut self, grow_cap: bool) {
        self.count += 1;
        if grow_cap {
            self.cap += 1;
        }
    }
}

/// Display push.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BananaCountChanged {
    pub count: u32,
    pub cap: u32,
}

impl From<&Bananas> for BananaCountChanged {
    fn from(b: &Bananas) -> Self {
        Self {
            count: b.count,
            cap: b.cap,
        }
    }
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BananaPickedUp {
    pub player: Entity,
}

/// Sensor that turns into a banana when the player touches it.
#[derive(Component, Debug, Clone, Copy)]
pub struct BananaPickup;

/// Banana count parked across a level reload.
#[derive(Resource, Debug, Default)]
pub struct CarriedBananas(pub Option<Bananas>);

pub fn plugin(app: &mut App) {
    app.init_resource::<CarriedBananas>()
        .add_message::<BananaCountChanged>()
        .add_message::<BananaPickedUp>()
        .add_systems(
            Update,
            (announce_new_gates, apply_pickups)
                .after(PlayerFrameSystems)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            collect_pickups
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Push the starting count of a freshly spawned player to the display.
pub fn announce_new_gates(
    q_new: Query<&Bananas, Added<Bananas>>,
    mut writer: MessageWriter<BananaCountChanged>,
) {
    for bananas in &q_new {
        writer.write(BananaCountChanged::from(bananas));
    }
}

pub fn apply_pickups(
    policy: Res<DashPolicy>,
    mut reader: MessageReader<BananaPickedUp>,
    mut q_bananas: Query<&mut Bananas>,
    mut writer: MessageWriter<BananaCountChanged>,
) {
    for pickup in reader.read() {
        let Ok(mut bananas) = q_bananas.get_mut(pickup.player) else {
            continue;
        };
        bananas.refill(policy.cap_growth);
        writer.write(BananaCountChanged::from(&*bananas));
        debug!("banana picked up: {}/{}", bananas.count(), bananas.cap());
    }
}

/// A pickup is collected at most once even if several contacts start on
/// the same step.
pub fn collect_pickups(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    q_player: Query<(), With<Player>>,
    q_pickup: Query<(), With<BananaPickup>>,
    mut writer: MessageWriter<BananaPickedUp>,
    mut taken: Local<Vec<Entity>>,
) {
    taken.clear();

    for ev in collisions.read() {
        let (player, pickup) = if q_player.contains(ev.collider1) && q_pickup.contains(ev.collider2)
        {
            (ev.collider1, ev.collider2)
        } else if q_player.contains(ev.collider2) && q_pickup.contains(ev.collider1) {
            (ev.collider2, ev.collider1)
        } else {
            continue;
        };

        if taken.contains(&pickup) {
            continue;
        }
        taken.push(pickup);

        writer.write(BananaPickedUp { player });
        commands.entity(pickup).despawn();
    }
}

#[cfg(test)]
mod tests;
