//! HUD plugin (render-only): the banana counter.
//!
//! The text is only ever rewritten from `BananaCountChanged`; it never reads
//! the player's gate directly.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::bananas::BananaCountChanged;

#[derive(Component, Debug)]
pub struct BananaCounterText;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_counter)
        .add_systems(Update, update_counter.run_if(in_state(GameState::InGame)));
}

pub fn format_count(count: u32) -> String {
    format!("x {count}")
}

fn spawn_counter(mut commands: Commands) {
    commands.spawn((
        Name::new("BananaCounter"),
        BananaCounterText,
        Text::new(format_count(0)),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.92, 0.3)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(16.0),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
    ));
}

fn update_counter(
    mut reader: MessageReader<BananaCountChanged>,
    mut q_text: Query<&mut Text, With<BananaCounterText>>,
) {
    let Some(latest) = reader.read().last() else {
        return;
    };
    for mut text in &mut q_text {
        text.0 = format_count(latest.count);
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;
    use bevy::prelude::*;

    use crate::common::test_utils::run_system_once;
    use crate::plugins::bananas::BananaCountChanged;

    use super::*;

    #[test]
    fn counter_shows_latest_count() {
        let mut world = World::new();
        world.init_resource::<Messages<BananaCountChanged>>();
        let text = world.spawn((BananaCounterText, Text::new(format_count(3)))).id();

        world.write_message(BananaCountChanged { count: 2, cap: 3 });
        world.write_message(BananaCountChanged { count: 1, cap: 3 });
        run_system_once(&mut world, update_counter);

        assert_eq!(world.get::<Text>(text).unwrap().0, "x 1");
    }

    #[test]
    fn counter_untouched_without_messages() {
        let mut world = World::new();
        world.init_resource::<Messages<BananaCountChanged>>();
        let text = world.spawn((BananaCounterText, Text::new(format_count(3)))).id();

        run_system_once(&mut world, update_counter);

        assert_eq!(world.get::<Text>(text).unwrap().0, "x 3");
    }
}
