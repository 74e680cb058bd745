//! Dash: a fixed-length, non-interruptible velocity override paid for with bananas.
//!
//! Entry zeroes the body's gravity scale, writes `direction * dash_power`
//! once and records `ends_at`. Nothing else writes the velocity until the
//! frame on which virtual time reaches `ends_at`; then gravity is restored
//! and the dash is re-armed according to [`DashPolicy`].

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::policy::{DashCooldownMode, DashPolicy, DashResourceMode};
use crate::common::tunables::Tunables;
use crate::plugins::bananas::{BananaCountChanged, Bananas, DashCharge};
use crate::plugins::levels::{CurrentLevel, LoadLevel};

use super::Player;
use super::input::{Action, ActionInput};
use super::state::{DashPhase, DashState, MovementState};

/// Whether the afterimage trail should be emitting. Read by the trail renderer.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct DashTrail {
    pub emitting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashStart {
    Started { direction: Vec2 },
    /// Paid for with a banana that was not there. The caller reloads the level.
    Depleted,
}

/// Unit dash direction from the held arrows.
///
/// No arrows means straight ahead. A near-vertical dash off a wall slide is
/// turned into a horizontal one along the facing.
pub fn resolve_direction(arrows: Vec2, wall_sliding: bool, facing_right: bool) -> Vec2 {
    let ahead = if facing_right { Vec2::X } else { Vec2::NEG_X };

    if arrows == Vec2::ZERO {
        return ahead;
    }
    if wall_sliding && arrows.x.abs() < 0.1 && arrows.y.abs() > 0.1 {
        return ahead;
    }
    arrows.normalize()
}

/// Entry guard (before any banana is spent).
pub fn can_start(state: &MovementState, bananas: Option<&Bananas>, policy: &DashPolicy) -> bool {
    if !state.dash.is_ready() {
        return false;
    }
    match policy.resource_mode {
        DashResourceMode::None | DashResourceMode::ConsumingWithReload => true,
        DashResourceMode::Consuming => bananas.is_some_and(|b| b.count() > 0),
    }
}

/// Pay for and begin a dash. The caller has checked [`can_start`].
///
/// `bananas` is only touched when the policy spends them. A missing gate
/// under a spending policy counts as empty.
#[allow(clippy::too_many_arguments)]
pub fn start(
    state: &mut MovementState,
    bananas: Option<&mut Bananas>,
    velocity: &mut Vec2,
    gravity_scale: &mut f32,
    direction: Vec2,
    now: f64,
    tunables: &Tunables,
    policy: &DashPolicy,
) -> DashStart {
    debug_assert!(state.dash.is_ready(), "dash started while {:?}", state.dash.phase);

    if policy.resource_mode.spends_bananas() {
        let charge = bananas.map_or(DashCharge::Depleted, Bananas::spend);
        if charge == DashCharge::Depleted {
            return DashStart::Depleted;
        }
    }

    state.dash = DashState {
        phase: DashPhase::Dashing {
            ends_at: now + f64::from(tunables.dash_time),
        },
        direction,
        original_gravity: *gravity_scale,
    };
    *gravity_scale = 0.0;
    *velocity = direction * tunables.dash_power;

    DashStart::Started { direction }
}

/// Advance the dash clock. Returns `true` on the frame the dash itself ends.
pub fn tick(
    state: &mut MovementState,
    gravity_scale: &mut f32,
    now: f64,
    policy: &DashPolicy,
) -> bool {
    match state.dash.phase {
        DashPhase::Dashing { ends_at } if now >= ends_at => {
            *gravity_scale = state.dash.original_gravity;
            state.dash.phase = match policy.cooldown_mode {
                DashCooldownMode::Flagged if policy.cooldown > 0.0 => DashPhase::Cooldown {
                    until: now + f64::from(policy.cooldown),
                },
                _ => DashPhase::Ready,
            };
            true
        }
        DashPhase::Cooldown { until } if now >= until => {
            state.dash.phase = DashPhase::Ready;
            false
        }
        _ => false,
    }
}

pub fn finish_dash(
    time: Res<Time<Virtual>>,
    policy: Res<DashPolicy>,
    mut q_player: Query<
        (&mut MovementState, &mut GravityScale, Option<&mut DashTrail>),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs_f64();
    for (mut state, mut gravity, trail) in &mut q_player {
        if tick(&mut state, &mut gravity.0, now, &policy) {
            if let Some(mut trail) = trail {
                trail.emitting = false;
            }
            debug!("dash finished, gravity scale restored to {}", gravity.0);
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn start_dash(
    time: Res<Time<Virtual>>,
    input: Res<ActionInput>,
    tunables: Res<Tunables>,
    policy: Res<DashPolicy>,
    current: Res<CurrentLevel>,
    mut load_writer: MessageWriter<LoadLevel>,
    mut count_writer: MessageWriter<BananaCountChanged>,
    mut q_player: Query<
        (
            &mut MovementState,
            &mut LinearVelocity,
            &mut GravityScale,
            Option<&mut Bananas>,
            Option<&mut DashTrail>,
        ),
        With<Player>,
    >,
) {
    if !input.just_pressed(Action::Dash) {
        return;
    }
    let now = time.elapsed_secs_f64();

    for (mut state, mut vel, mut gravity, mut bananas, trail) in &mut q_player {
        if !can_start(&state, bananas.as_deref(), &policy) {
            continue;
        }

        let direction =
            resolve_direction(input.direction(), state.is_wall_sliding, state.facing_right);
        let outcome = start(
            &mut state,
            bananas.as_deref_mut(),
            &mut vel.0,
            &mut gravity.0,
            direction,
            now,
            &tunables,
            &policy,
        );

        if policy.resource_mode.spends_bananas() {
            if let Some(bananas) = bananas.as_deref() {
                count_writer.write(BananaCountChanged::from(bananas));
            }
        }

        match outcome {
            DashStart::Started { direction } => {
                if let Some(mut trail) = trail {
                    trail.emitting = true;
                }
                debug!("dash started: direction={direction}");
            }
            DashStart::Depleted => {
                warn!("dash with no bananas left, reloading level");
                load_writer.write(current.reload());
            }
        }
    }
}
