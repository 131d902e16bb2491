//! Battle engine: rounds of player and mob attacks until one side drops

use std::io;
use std::time::Duration;

use crate::action::{Command, InputMode};
use crate::entity::{Combatant, Mob, Player};
use crate::frontend::Frontend;
use crate::gameloop::GameState;
use crate::object::ItemKind;
use crate::world::EntityId;

/// Experience per player level before the species factor
const EXP_PER_LEVEL: f64 = 0.5;

/// Where a battle stands between rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Ongoing,
    PlayerWon,
    PlayerLost,
}

impl BattleState {
    pub fn of(player: &Player, mob: &Mob) -> Self {
        if player.base.hp <= 0 {
            BattleState::PlayerLost
        } else if mob.base.hp <= 0 {
            BattleState::PlayerWon
        } else {
            BattleState::Ongoing
        }
    }
}

/// How a battle ended
#[derive(Debug, Clone, PartialEq)]
pub enum BattleOutcome {
    PlayerWon {
        experience: f64,
        levelled_up: bool,
        drops: Vec<ItemKind>,
    },
    PlayerLost,
    /// The player quit mid-battle
    Abandoned,
}

/// Experience for killing a mob of the given factor at `level`
pub fn experience_reward(exp_factor: f64, level: u32, bonus: f64) -> f64 {
    exp_factor * (level as f64 * EXP_PER_LEVEL) + bonus
}

/// Fight the mob `mob_id` until one side's health reaches zero
///
/// Each round waits for an attack command; anything else is ignored
/// except quitting. Returns `Ok(None)` if the mob is not on the level.
pub fn run_battle<F: Frontend + ?Sized>(
    state: &mut GameState,
    mob_id: EntityId,
    frontend: &mut F,
) -> io::Result<Option<BattleOutcome>> {
    let Some(mob) = state.level.mob(mob_id) else {
        return Ok(None);
    };
    let pace = Duration::from_millis(state.options.battle_pace_ms);
    tracing::info!(mob = %mob_id, species = %mob.species, "battle started");

    loop {
        let Some(mob) = state.level.mob(mob_id) else {
            return Ok(None);
        };
        if BattleState::of(&state.player, mob) != BattleState::Ongoing {
            break;
        }

        frontend.render(state, InputMode::Battle)?;
        loop {
            match frontend.next_command(InputMode::Battle)? {
                Command::Attack => break,
                Command::Quit => {
                    tracing::info!(mob = %mob_id, "battle abandoned");
                    return Ok(Some(BattleOutcome::Abandoned));
                }
                other => tracing::trace!(?other, "ignored during battle"),
            }
        }

        state.messages.clear();
        exchange_blows(state, mob_id);
        frontend.render(state, InputMode::Battle)?;
        frontend.pause(pace);
    }

    let outcome = resolve(state, mob_id);
    frontend.pause(pace);
    frontend.render(state, InputMode::Explore)?;
    Ok(outcome)
}

/// One round: the player strikes, then the mob strikes back
///
/// The counter-attack always happens; a mob killed by the player's blow
/// only gets its "is dead" narration.
fn exchange_blows(state: &mut GameState, mob_id: EntityId) {
    let GameState {
        player,
        level,
        rng,
        messages,
        ..
    } = state;
    let Some(mob) = level.mob_mut(mob_id) else {
        return;
    };
    if let Err(e) = player.attack(mob, None, rng, messages) {
        tracing::debug!(%e, "player attack had no effect");
    }
    if let Err(e) = mob.attack(player, None, rng, messages) {
        tracing::debug!(%e, "mob attack had no effect");
    }
}

/// Rewards, then the death checks of both sides
fn resolve(state: &mut GameState, mob_id: EntityId) -> Option<BattleOutcome> {
    let GameState {
        player,
        level,
        items,
        rng,
        messages,
        options,
        ..
    } = state;
    let mob = level.mob(mob_id)?;

    let outcome = if player.base.hp <= 0 {
        messages.push("Game over!");
        BattleOutcome::PlayerLost
    } else {
        let experience = experience_reward(mob.species.exp_factor(), player.level, rng.frac());
        messages.push(format!(
            "You killed {}! You obtain {:.2} experience points!",
            mob.base.name, experience
        ));
        let drops = mob.drop_loot(player, items, options.drop_rule, rng, messages);
        player.exp += experience;
        let levelled_up = player.check_levelup(messages);
        BattleOutcome::PlayerWon {
            experience,
            levelled_up,
            drops,
        }
    };

    player.check_dead(&mut level.grid);
    level.check_mob_dead(mob_id);
    tracing::info!(mob = %mob_id, ?outcome, "battle over");
    Some(outcome)
}
