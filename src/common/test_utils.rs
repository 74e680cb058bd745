//! Test helpers.
//!
//! Systems are run one at a time against a bare `World` with
//! `World::run_system_once`; queued commands are flushed before assertions.
//! Time is virtual and advanced by hand so deadlines are deterministic.

use std::time::Duration;

use bevy::ecs::message::{Message, MessageReader};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Advance virtual and fixed time together by `millis`; the next system run
/// sees that as its frame delta.
pub fn advance_millis(world: &mut World, millis: u64) {
    if !world.contains_resource::<Time<Virtual>>() {
        world.insert_resource(Time::<Virtual>::default());
    }
    world
        .resource_mut::<Time<Virtual>>()
        .advance_by(Duration::from_millis(millis));
    advance_fixed_millis(world, millis);
}

/// Advance only the fixed clock, as the fixed loop does when it catches up
/// with a long frame.
pub fn advance_fixed_millis(world: &mut World, millis: u64) {
    if !world.contains_resource::<Time<Fixed>>() {
        world.insert_resource(Time::<Fixed>::default());
    }
    world
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_millis(millis));
}

/// Every message of type `M` still buffered in the world. Does not consume them.
pub fn read_messages<M: Message + Clone>(world: &mut World) -> Vec<M> {
    run_system_once(world, |mut reader: MessageReader<M>| {
        reader.read().cloned().collect::<Vec<_>>()
    })
}
