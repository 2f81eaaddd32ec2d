use serde::Serialize;

use crate::Dice;
use crate::inventory::Inventory;
use crate::items;
use crate::life::apply_damage;
use crate::monster::{Monster, MonsterKind, pick_target};
use crate::party::{Adventurer, SpecialAction};
use crate::prompt::Prompter;

pub mod actions;

const BOSS_AREA_CHANCE: f64 = 0.3;
const AREA_DAMAGE_FACTOR: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Ongoing,
    PartyVictory,
    EnemyVictory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Party,
    Enemies,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleReport {
    pub winner: Side,
    pub rounds: u32,
}

/// Basic attack damage: attack minus defense, never below 1.
pub fn basic_damage(attack: i32, defense: i32) -> i32 {
    (attack - defense).max(1)
}

fn check_state(party: &[Adventurer], enemies: &[Monster]) -> BattleState {
    if enemies.iter().all(|e| !e.is_alive()) {
        BattleState::PartyVictory
    } else if party.iter().all(|a| !a.is_alive()) {
        BattleState::EnemyVictory
    } else {
        BattleState::Ongoing
    }
}

/// Drive a full battle to a terminal state. Each round every living party
/// member acts in party order, then every living enemy acts in list order;
/// the state is re-checked after each individual action.
pub fn run_battle(
    party: &mut [Adventurer],
    enemies: &mut [Monster],
    inventory: &mut Inventory,
    dice: &mut Dice,
    prompter: &mut impl Prompter,
    mut log: impl FnMut(String),
) -> BattleReport {
    tracing::debug!(party = party.len(), enemies = enemies.len(), "battle start");
    log("[FIGHT] The battle begins!".to_string());
    for (i, e) in enemies.iter().enumerate() {
        log(format!(
            "  {}. {} — HP {}/{}",
            i + 1,
            e.name,
            e.vitality.hp,
            e.vitality.max_hp
        ));
    }

    let mut rounds = 0u32;
    let mut state = check_state(party, enemies);
    while state == BattleState::Ongoing {
        rounds += 1;
        log(format!("[ROUND] {}", rounds));

        for idx in 0..party.len() {
            if !party[idx].is_alive() {
                continue;
            }
            adventurer_turn(idx, party, enemies, inventory, dice, prompter, &mut log);
            state = check_state(party, enemies);
            if state != BattleState::Ongoing {
                break;
            }
        }
        if state != BattleState::Ongoing {
            break;
        }

        for idx in 0..enemies.len() {
            if !enemies[idx].is_alive() {
                continue;
            }
            enemy_turn(idx, party, enemies, dice, &mut log);
            state = check_state(party, enemies);
            if state != BattleState::Ongoing {
                break;
            }
        }

        if state == BattleState::Ongoing {
            log_status(party, enemies, &mut log);
        }
    }

    let winner = match state {
        BattleState::PartyVictory => Side::Party,
        _ => Side::Enemies,
    };
    log(format!(
        "[END] {} after {} round(s)",
        match winner {
            Side::Party => "The adventurers have won!",
            Side::Enemies => "The monsters have won!",
        },
        rounds
    ));
    tracing::debug!(?winner, rounds, "battle over");
    BattleReport { winner, rounds }
}

#[derive(Clone, Copy)]
enum TurnAction {
    Attack,
    Special(SpecialAction),
    UseItem,
    Skip,
}

fn adventurer_turn(
    idx: usize,
    party: &mut [Adventurer],
    enemies: &mut [Monster],
    inventory: &mut Inventory,
    dice: &mut Dice,
    prompter: &mut impl Prompter,
    log: &mut dyn FnMut(String),
) {
    let name = party[idx].name.clone();
    let mut menu: Vec<(String, TurnAction)> =
        vec![("Attack".to_string(), TurnAction::Attack)];
    if let Some(special) = party[idx].class.special() {
        menu.push((special.label().to_string(), TurnAction::Special(special)));
    }
    menu.push(("Use Item".to_string(), TurnAction::UseItem));
    menu.push(("Skip Turn".to_string(), TurnAction::Skip));

    let labels: Vec<String> = menu.iter().map(|(label, _)| label.clone()).collect();
    let choice = prompter.choose(&format!("Choose an action for {}:", name), &labels);
    match menu[choice].1 {
        TurnAction::Attack => player_attack(idx, party, enemies, prompter, log),
        TurnAction::Special(special) => {
            actions::perform(special, idx, party, enemies, inventory, dice, prompter, log)
        }
        TurnAction::UseItem => use_item(idx, party, inventory, prompter, log),
        TurnAction::Skip => log(format!("[TURN][{}] skips their turn", name)),
    }
}

fn player_attack(
    idx: usize,
    party: &mut [Adventurer],
    enemies: &mut [Monster],
    prompter: &mut impl Prompter,
    log: &mut dyn FnMut(String),
) {
    let living: Vec<usize> = enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_alive())
        .map(|(i, _)| i)
        .collect();
    if living.is_empty() {
        log("[TURN] no enemy left to attack".to_string());
        return;
    }
    let options: Vec<String> = living
        .iter()
        .map(|&i| {
            format!(
                "{} (HP {}/{})",
                enemies[i].name, enemies[i].vitality.hp, enemies[i].vitality.max_hp
            )
        })
        .collect();
    let pick = prompter.choose("Choose a target:", &options);
    let target = &mut enemies[living[pick]];
    let dmg = basic_damage(party[idx].attack, target.defense);
    log(format!(
        "[ATTACK][{}] strikes {}",
        party[idx].name, target.name
    ));
    apply_damage(&target.name, &mut target.vitality, dmg, &mut *log);
}

fn use_item(
    idx: usize,
    party: &mut [Adventurer],
    inventory: &mut Inventory,
    prompter: &mut impl Prompter,
    log: &mut dyn FnMut(String),
) {
    if inventory.is_empty() {
        log("[ITEM] the inventory is empty".to_string());
        return;
    }
    let names: Vec<String> = inventory.items().keys().cloned().collect();
    let options: Vec<String> = inventory
        .items()
        .iter()
        .map(|(name, qty)| format!("{} (x{})", name, qty))
        .collect();
    let pick = prompter.choose("Choose an item to use:", &options);
    let item = names[pick].clone();

    let targets: Vec<String> = party.iter().map(Adventurer::target_line).collect();
    let tpick = prompter.choose(&format!("Use the {} on whom?", item), &targets);

    log(format!("[ITEM][{}] uses a {}", party[idx].name, item));
    match items::apply_item(&item, &mut party[tpick], &mut *log) {
        Ok(()) => {
            inventory.remove(&item, 1);
            tracing::debug!(item = %item, "item consumed");
        }
        Err(e) => log(format!("[ITEM] {}", e)),
    }
}

fn enemy_turn(
    idx: usize,
    party: &mut [Adventurer],
    enemies: &mut [Monster],
    dice: &mut Dice,
    log: &mut dyn FnMut(String),
) {
    let (name, attack, kind) = {
        let e = &enemies[idx];
        (e.name.clone(), e.attack, e.kind)
    };

    if kind == MonsterKind::Boss && dice.chance(BOSS_AREA_CHANCE) {
        log(format!("[AREA][{}] sweeps the whole party!", name));
        for member in party.iter_mut().filter(|m| m.is_alive()) {
            let dmg = ((attack - member.defense) as f64 * AREA_DAMAGE_FACTOR).floor() as i32;
            apply_damage(&member.name, &mut member.vitality, dmg, &mut *log);
        }
        return;
    }

    let Some(target) = pick_target(party, dice) else {
        return;
    };
    let member = &mut party[target];
    let dmg = basic_damage(attack, member.defense);
    log(format!("[ATTACK][{}] lunges at {}", name, member.name));
    apply_damage(&member.name, &mut member.vitality, dmg, &mut *log);
}

fn log_status(party: &[Adventurer], enemies: &[Monster], log: &mut dyn FnMut(String)) {
    log("[STATUS] party:".to_string());
    for member in party {
        log(format!("  {}", member.status_line()));
    }
    log("[STATUS] enemies:".to_string());
    for enemy in enemies.iter().filter(|e| e.is_alive()) {
        log(format!(
            "  {} — HP {}/{}",
            enemy.name, enemy.vitality.hp, enemy.vitality.max_hp
        ));
    }
}
