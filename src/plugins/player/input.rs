//! Input sampling.
//!
//! The keyboard is read exactly once per frame into an [`ActionInput`]
//! snapshot. Edges are derived from the diff against the previous frame, so
//! every consumer sees the same `just_pressed` / `just_released` answer and
//! each edge fires once per transition no matter how long a key is held.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Jump,
    Dash,
    Reset,
}

impl Action {
    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Fixed key table. Rebinding is not supported.
pub const KEY_BINDINGS: [(Action, KeyCode); 7] = [
    (Action::Left, KeyCode::ArrowLeft),
    (Action::Right, KeyCode::ArrowRight),
    (Action::Up, KeyCode::ArrowUp),
    (Action::Down, KeyCode::ArrowDown),
    (Action::Jump, KeyCode::KeyX),
    (Action::Dash, KeyCode::KeyZ),
    (Action::Reset, KeyCode::KeyR),
];

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionInput {
    held: u8,
    prev: u8,
}

fn mask(actions: impl IntoIterator<Item = Action>) -> u8 {
    actions.into_iter().fold(0, |m, a| m | a.bit())
}

impl ActionInput {
    /// Snapshot for a frame whose previous frame held `prev` and which now holds `now`.
    pub fn from_frames(prev: &[Action], now: &[Action]) -> Self {
        Self {
            held: mask(prev.iter().copied()),
            prev: 0,
        }
        .rolled(now.iter().copied())
    }

    /// Advance one frame with the given held set.
    pub fn roll(&mut self, held: impl IntoIterator<Item = Action>) {
        self.prev = self.held;
        self.held = mask(held);
    }

    fn rolled(mut self, held: impl IntoIterator<Item = Action>) -> Self {
        self.roll(held);
        self
    }

    #[inline]
    pub fn pressed(&self, action: Action) -> bool {
        self.held & action.bit() != 0
    }

    #[inline]
    pub fn just_pressed(&self, action: Action) -> bool {
        self.held & !self.prev & action.bit() != 0
    }

    #[inline]
    pub fn just_released(&self, action: Action) -> bool {
        !self.held & self.prev & action.bit() != 0
    }

    /// Run intent in {-1, 0, 1}. Right wins when both are held.
    pub fn horizontal(&self) -> f32 {
        if self.pressed(Action::Right) {
            1.0
        } else if self.pressed(Action::Left) {
            -1.0
        } else {
            0.0
        }
    }

    /// Raw arrow vector; opposite arrows cancel.
    pub fn direction(&self) -> Vec2 {
        let axis = |pos: Action, neg: Action| {
            f32::from(u8::from(self.pressed(pos))) - f32::from(u8::from(self.pressed(neg)))
        };
        Vec2::new(axis(Action::Right, Action::Left), axis(Action::Up, Action::Down))
    }
}

/// Roll the snapshot from the keyboard. Without a keyboard (headless runs)
/// the snapshot is left to whoever drives it.
pub fn sample_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<ActionInput>) {
    let Some(keys) = keys else {
        return;
    };

    input.roll(
        KEY_BINDINGS
            .iter()
            .filter(|(_, key)| keys.pressed(*key))
            .map(|(action, _)| *action),
    );
}
