use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::policy::DashPolicy;
use crate::common::test_utils::{read_messages, run_system_once};
use crate::plugins::player::Player;

use super::*;

fn world_with_gate(bananas: Bananas, policy: DashPolicy) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(policy);
    world.init_resource::<Messages<BananaPickedUp>>();
    world.init_resource::<Messages<BananaCountChanged>>();
    world.init_resource::<Messages<CollisionStart>>();
    let player = world.spawn((Player, bananas)).id();
    (world, player)
}

fn contact(a: Entity, b: Entity) -> CollisionStart {
    CollisionStart {
        collider1: a,
        collider2: b,
        body1: None,
        body2: None,
    }
}

#[test]
fn spend_counts_down_to_zero() {
    let mut b = Bananas::full(2);
    assert_eq!(b.spend(), DashCharge::Spent { remaining: 1 });
    assert_eq!(b.spend(), DashCharge::Spent { remaining: 0 });
    assert_eq!(b.spend(), DashCharge::Depleted);
    assert_eq!(b, Bananas::new(0, 2));
}

#[test]
fn refill_is_not_clamped_and_can_grow_cap() {
    let mut b = Bananas::full(3);
    b.refill(false);
    assert_eq!((b.count(), b.cap()), (4, 3));

    b.refill(true);
    assert_eq!((b.count(), b.cap()), (5, 4));
}

#[test]
fn each_pickup_updates_display_once() {
    let (mut world, player) = world_with_gate(Bananas::new(1, 3), DashPolicy::default());
    world.write_message(BananaPickedUp { player });
    world.write_message(BananaPickedUp { player });

    run_system_once(&mut world, apply_pickups);

    assert_eq!(world.get::<Bananas>(player).unwrap().count(), 3);
    assert_eq!(
        read_messages::<BananaCountChanged>(&mut world),
        vec![
            BananaCountChanged { count: 2, cap: 3 },
            BananaCountChanged { count: 3, cap: 3 },
        ]
    );
}

#[test]
fn pickup_grows_cap_when_configured() {
    let policy = DashPolicy {
        cap_growth: true,
        ..default()
    };
    let (mut world, player) = world_with_gate(Bananas::full(3), policy);
    world.write_message(BananaPickedUp { player });

    run_system_once(&mut world, apply_pickups);

    assert_eq!(*world.get::<Bananas>(player).unwrap(), Bananas::new(4, 4));
}

#[test]
fn pickup_for_missing_gate_is_dropped() {
    let (mut world, _) = world_with_gate(Bananas::full(3), DashPolicy::default());
    let stranger = world.spawn_empty().id();
    world.write_message(BananaPickedUp { player: stranger });

    run_system_once(&mut world, apply_pickups);

    assert!(read_messages::<BananaCountChanged>(&mut world).is_empty());
}

#[test]
fn touching_a_banana_collects_it_once() {
    let (mut world, player) = world_with_gate(Bananas::full(3), DashPolicy::default());
    let banana = world.spawn(BananaPickup).id();

    // Two contacts begin on the same step, in both orders.
    world.write_message(contact(player, banana));
    world.write_message(contact(banana, player));

    run_system_once(&mut world, collect_pickups);

    assert_eq!(
        read_messages::<BananaPickedUp>(&mut world),
        vec![BananaPickedUp { player }]
    );
    assert!(world.get_entity(banana).is_err());
}

#[test]
fn unrelated_contacts_are_ignored() {
    let (mut world, player) = world_with_gate(Bananas::full(3), DashPolicy::default());
    let ground = world.spawn_empty().id();
    let banana = world.spawn(BananaPickup).id();
    world.write_message(contact(player, ground));

    run_system_once(&mut world, collect_pickups);

    assert!(read_messages::<BananaPickedUp>(&mut world).is_empty());
    assert!(world.get_entity(banana).is_ok());
}

#[test]
fn new_gate_is_announced() {
    let (mut world, _) = world_with_gate(Bananas::full(3), DashPolicy::default());

    run_system_once(&mut world, announce_new_gates);

    assert_eq!(
        read_messages::<BananaCountChanged>(&mut world),
        vec![BananaCountChanged { count: 3, cap: 3 }]
    );
}
